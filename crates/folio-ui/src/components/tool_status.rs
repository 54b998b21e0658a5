//! Status line under a developer tool

use dioxus::prelude::*;
use folio_core::ToolStatus;

#[component]
pub fn ToolStatusLine(id: String, status: ToolStatus) -> Element {
    rsx! {
        div {
            id: "{id}",
            class: status.kind.class(),
            role: "status",
            "aria-live": "polite",
            "{status.message}"
        }
    }
}
