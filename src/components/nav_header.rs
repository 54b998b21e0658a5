//! Navigation Header Component
//!
//! Sticky header with the logo and one link per section. The link of the
//! section under the observer band carries the `active` class.

use dioxus::prelude::*;

use crate::context::use_shell;

/// One entry of the navigation menu
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct NavItem {
    /// Section id the link points at
    pub section: &'static str,
    pub label: &'static str,
}

impl NavItem {
    pub fn href(&self) -> String {
        format!("#{}", self.section)
    }
}

/// Menu entries in document order
pub const NAV_ITEMS: [NavItem; 6] = [
    NavItem { section: "home", label: "Home" },
    NavItem { section: "about", label: "About" },
    NavItem { section: "projects", label: "Projects" },
    NavItem { section: "skills", label: "Skills" },
    NavItem { section: "tools", label: "Tools" },
    NavItem { section: "contact", label: "Contact" },
];

#[component]
pub fn NavHeader() -> Element {
    let shell = use_shell();
    let current = shell.sections.read().current().to_string();

    rsx! {
        header { class: "site-header",
            a {
                class: "logo",
                href: "#home",
                onclick: move |e: MouseEvent| {
                    if shell.scroll_to("#home") {
                        e.prevent_default();
                    }
                },
                "Folio"
            }
            nav { "aria-label": "Main navigation",
                ul { class: "nav-menu",
                    for item in NAV_ITEMS {
                        li { key: "{item.section}",
                            a {
                                class: if item.section == current { "nav-link active" } else { "nav-link" },
                                href: item.href(),
                                "aria-current": if item.section == current { "true" } else { "false" },
                                onclick: move |e: MouseEvent| {
                                    if shell.scroll_to(&item.href()) {
                                        e.prevent_default();
                                    }
                                },
                                "{item.label}"
                            }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::DEFAULT_SECTIONS;

    #[test]
    fn menu_covers_every_section_in_order() {
        let ids: Vec<&str> = NAV_ITEMS.iter().map(|i| i.section).collect();
        assert_eq!(ids, DEFAULT_SECTIONS);
    }

    #[test]
    fn href_is_fragment() {
        assert_eq!(NAV_ITEMS[2].href(), "#projects");
    }
}
