//! Renders the toast currently held by the shell's notification center.

use dioxus::prelude::*;
use folio_ui::Toast;

use crate::context::use_shell;

#[component]
pub fn NotificationHost() -> Element {
    let shell = use_shell();
    let current = shell
        .notifications
        .read()
        .current()
        .map(|n| (format!("{:?}", n.id), n.clone()));

    rsx! {
        if let Some((key, notification)) = current {
            Toast {
                key: "{key}",
                notification,
                onclose: move |id| shell.dismiss(id),
            }
        }
    }
}
