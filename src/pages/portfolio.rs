//! The single-page portfolio.
//!
//! `main` is the scroll container. Its scroll events (throttled, with a
//! trailing run so the settled position is always measured) feed the
//! section tracker with fresh element rects; sections that cross the
//! observer band become current in the navigation and have their reveal
//! elements faded in.

use std::time::Instant;

use dioxus::prelude::*;
use folio_core::{Gate, Scheduler, SectionLayout, Throttle, Viewport};

use super::content::{PROJECTS, SKILLS, STATS};
use crate::components::{Base64Tool, ContactForm, JsonTool, NavHeader, PaletteTool, Reveal};
use crate::context::{use_shell, ShellContext, MAIN_CONTENT};

/// Measure the sections against the scroll container and update the
/// tracker.
async fn observe_sections(shell: ShellContext) {
    let Some(container) = shell.anchor(MAIN_CONTENT) else {
        return;
    };
    let frame = match container.get_client_rect().await {
        Ok(rect) => rect,
        Err(e) => {
            tracing::debug!(error = ?e, "scroll container not measurable");
            return;
        }
    };

    // Rects are viewport-relative; shift them into container coordinates
    let origin = frame.min_y();
    let mut layouts = Vec::new();
    for (id, element) in shell.section_elements() {
        if let Ok(rect) = element.get_client_rect().await {
            layouts.push(SectionLayout::new(id, rect.min_y() - origin, rect.max_y() - origin));
        }
    }

    let viewport = Viewport {
        top: 0.0,
        height: frame.height(),
    };
    let mut sections = shell.sections;
    let entered = sections.write().observe(viewport, &layouts);
    for id in entered {
        shell.reveal_section(&id);
    }
}

#[derive(Clone, PartialEq, Props)]
struct PageSectionProps {
    id: String,
    #[props(default)]
    class: String,
    #[props(default)]
    title: Option<String>,
    children: Element,
}

/// A `<section>` registered as a scroll anchor
#[component]
fn PageSection(props: PageSectionProps) -> Element {
    let shell = use_shell();
    let id = props.id.clone();

    rsx! {
        section {
            id: "{props.id}",
            class: "{props.class}",
            onmounted: move |e| shell.register_anchor(id.clone(), e.data()),
            if let Some(title) = &props.title {
                h2 { class: "section-title", "{title}" }
            }
            {props.children}
        }
    }
}

#[component]
pub fn Portfolio() -> Element {
    let shell = use_shell();
    let mut throttle = use_signal(|| Throttle::new(shell.config.read().scroll_throttle()));

    rsx! {
        NavHeader {}
        main {
            id: MAIN_CONTENT,
            class: "page",
            tabindex: "-1",
            onmounted: move |e| {
                shell.register_anchor(MAIN_CONTENT, e.data());
                spawn(observe_sections(shell));
            },
            onscroll: move |_| {
                let gate = throttle.write().gate(Instant::now());
                match gate {
                    Gate::Run => {
                        spawn(observe_sections(shell));
                    }
                    Gate::Defer(wait) => shell.scheduler().schedule_after(
                        wait,
                        Box::new(move || {
                            throttle.write().flush(Instant::now());
                            spawn_forever(observe_sections(shell));
                        }),
                    ),
                    Gate::Drop => {}
                }
            },

            PageSection { id: "home", class: "hero",
                h1 { class: "hero-title",
                    "Hi, I'm "
                    span { class: "highlight", "Alex Morgan" }
                }
                p { class: "hero-subtitle",
                    "Full-stack developer building fast, accessible software."
                }
                div { class: "hero-actions",
                    a {
                        class: "btn btn-primary",
                        href: "#projects",
                        onclick: move |e: MouseEvent| {
                            if shell.scroll_to("#projects") {
                                e.prevent_default();
                            }
                        },
                        "View My Work"
                    }
                    a {
                        class: "btn btn-secondary",
                        href: "#contact",
                        onclick: move |e: MouseEvent| {
                            if shell.scroll_to("#contact") {
                                e.prevent_default();
                            }
                        },
                        "Get In Touch"
                    }
                }
            }

            PageSection { id: "about", title: "About Me".to_string(),
                div { class: "about-content",
                    Reveal { section: "about", order: 0, key_name: "about-text", class: "about-text",
                        p {
                            "I have spent the last eight years shipping web applications, from "
                            "early prototypes to systems serving millions of requests a day."
                        }
                        p {
                            "I care about clear interfaces, honest performance numbers and "
                            "software that works for everyone, keyboard and screen reader "
                            "users included."
                        }
                    }
                    div { class: "stats",
                        for (i, stat) in STATS.iter().enumerate() {
                            Reveal {
                                key: "{stat.label}",
                                section: "about",
                                order: i + 1,
                                key_name: format!("stat-{i}"),
                                class: "stat",
                                div { class: "stat-number", "{stat.value}" }
                                div { class: "stat-label", "{stat.label}" }
                            }
                        }
                    }
                }
            }

            PageSection { id: "projects", title: "Projects".to_string(),
                div { class: "projects-grid",
                    for (i, project) in PROJECTS.iter().enumerate() {
                        Reveal {
                            key: "{project.title}",
                            section: "projects",
                            order: i,
                            key_name: format!("project-{i}"),
                            class: "project-card",
                            h3 { "{project.title}" }
                            p { "{project.summary}" }
                            ul { class: "project-tech",
                                for tech in project.tech.iter() {
                                    li { class: "tech-tag", "{tech}" }
                                }
                            }
                        }
                    }
                }
            }

            PageSection { id: "skills", title: "Skills".to_string(),
                div { class: "skills-grid",
                    for (i, category) in SKILLS.iter().enumerate() {
                        Reveal {
                            key: "{category.title}",
                            section: "skills",
                            order: i,
                            key_name: format!("skills-{i}"),
                            class: "skill-category",
                            h3 { "{category.title}" }
                            ul { class: "skill-list",
                                for skill in category.skills.iter() {
                                    li { class: "skill-item", "{skill}" }
                                }
                            }
                        }
                    }
                }
            }

            PageSection { id: "tools", title: "Developer Tools".to_string(),
                div { class: "tools-grid",
                    JsonTool {}
                    Base64Tool {}
                    PaletteTool {}
                }
            }

            PageSection { id: "contact", title: "Get In Touch".to_string(),
                div { class: "contact-content",
                    Reveal { section: "contact", order: 0, key_name: "contact-info", class: "contact-info",
                        p { "Have a project in mind or just want to say hello? Send me a message." }
                        p { "I usually reply within two working days." }
                    }
                    ContactForm {}
                }
            }

            footer { class: "site-footer",
                p { "Built with Rust and Dioxus." }
            }
        }
    }
}
