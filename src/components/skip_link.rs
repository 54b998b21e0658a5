use dioxus::prelude::*;

use crate::context::{use_shell, MAIN_CONTENT};

/// First focusable element: jumps keyboard users past the navigation.
#[component]
pub fn SkipLink() -> Element {
    let shell = use_shell();

    rsx! {
        a {
            class: "skip-link",
            href: "#{MAIN_CONTENT}",
            onclick: move |e: MouseEvent| {
                e.prevent_default();
                shell.focus_main();
            },
            "Skip to main content"
        }
    }
}
