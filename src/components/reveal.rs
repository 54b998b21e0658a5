//! Scroll reveal wrapper.
//!
//! Children start hidden (`animate-on-scroll`) and fade in once their
//! section crosses the observer band. Reveal is one-shot.

use dioxus::prelude::*;

use crate::context::{use_shell, RevealTarget};

#[derive(Clone, PartialEq, Props)]
pub struct RevealProps {
    /// Section the element belongs to
    pub section: String,
    /// Position within the section's stagger
    pub order: usize,
    /// Unique across the page
    pub key_name: String,
    #[props(default)]
    pub class: String,
    pub children: Element,
}

#[component]
pub fn Reveal(props: RevealProps) -> Element {
    let shell = use_shell();
    let revealed = shell.reveal.read().is_revealed(&props.key_name);
    let class = match (props.class.is_empty(), revealed) {
        (true, false) => "animate-on-scroll".to_string(),
        (true, true) => "animate-on-scroll animated".to_string(),
        (false, false) => format!("{} animate-on-scroll", props.class),
        (false, true) => format!("{} animate-on-scroll animated", props.class),
    };
    let target = RevealTarget {
        section: props.section.clone(),
        order: props.order,
        key: props.key_name.clone(),
    };

    rsx! {
        div {
            class: "{class}",
            onmounted: move |_| shell.register_reveal(target.clone()),
            {props.children}
        }
    }
}
