//! Toast notification
//!
//! Renders the single [`Notification`] held by the shell's
//! `NotificationCenter`. The slide-in and slide-out transitions are driven
//! by the `leaving` class; removal after the exit transition is the
//! shell's job.

use dioxus::prelude::*;
use folio_core::{Notification, NotificationId, NotificationPhase};

use super::CloseButton;

/// Classes of the toast container
pub fn toast_class(notification: &Notification) -> String {
    let mut class = format!("notification notification-{}", notification.severity.label());
    if notification.phase == NotificationPhase::Leaving {
        class.push_str(" leaving");
    }
    class
}

#[derive(Clone, PartialEq, Props)]
pub struct ToastProps {
    pub notification: Notification,
    /// Called with the toast's id when the close button is pressed
    pub onclose: EventHandler<NotificationId>,
}

#[component]
pub fn Toast(props: ToastProps) -> Element {
    let class = toast_class(&props.notification);
    let accent = props.notification.severity.accent();
    let id = props.notification.id;
    let onclose = props.onclose;

    rsx! {
        div {
            class: "{class}",
            role: "alert",
            "aria-live": "polite",
            style: "background-color: {accent};",
            div { class: "notification-content",
                span { class: "notification-message", "{props.notification.message}" }
                CloseButton {
                    label: "Close notification".to_string(),
                    onclick: move |_| onclose.call(id),
                }
            }
        }
    }
}
