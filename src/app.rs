use dioxus::prelude::*;

use crate::components::{NotificationHost, SkipLink};
use crate::context::ShellContext;
use crate::pages::Portfolio;
use crate::theme::GLOBAL_STYLES;

/// Application routes.
///
/// - `/` - The single-page portfolio; sections are reached by scrolling
#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[route("/")]
    Portfolio {},
}

/// Root application component.
///
/// Provides global styles, the shell context, keyboard focus mode and
/// routing.
#[component]
pub fn App() -> Element {
    let mut shell = use_context_provider(|| ShellContext::new(crate::get_config()));

    use_hook(|| {
        let config = shell.config.read();
        tracing::info!(
            submit_delay_ms = config.submit_delay_ms,
            notification_timeout_ms = config.notification_timeout_ms,
            "Shell ready"
        );
    });

    let focus_class = shell.focus.read().class();

    rsx! {
        style { {GLOBAL_STYLES} }
        div {
            class: "app-root {focus_class}",
            onkeydown: move |e| shell.focus.write().on_key(&e.key().to_string()),
            onmousedown: move |_| shell.focus.write().on_mouse_down(),
            SkipLink {}
            Router::<Route> {}
            NotificationHost {}
        }
    }
}
