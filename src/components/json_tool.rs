//! JSON formatter panel: format, minify, validate and clear.

use dioxus::prelude::*;
use folio_core::tools::json::{self, JsonStyle};
use folio_core::ToolStatus;
use folio_ui::{Button, ButtonVariant, ToolStatusLine};

#[component]
pub fn JsonTool() -> Element {
    let mut input = use_signal(String::new);
    let mut output = use_signal(String::new);
    let mut status = use_signal(ToolStatus::cleared);

    // A failed format blanks the output box
    let mut run = move |style: JsonStyle| {
        let result = json::format_json(&input.read(), style);
        let (formatted, next) = ToolStatus::report(result, style.success_message());
        output.set(formatted.unwrap_or_default());
        status.set(next);
    };

    rsx! {
        div { class: "tool-card",
            h3 { "JSON Formatter" }
            textarea {
                id: "json-input",
                class: "tool-textarea",
                rows: "6",
                placeholder: "Paste JSON here",
                "aria-label": "JSON input",
                value: "{input}",
                oninput: move |e| input.set(e.value()),
            }
            div { class: "tool-actions",
                Button {
                    id: "format-json".to_string(),
                    variant: ButtonVariant::Tool,
                    onclick: move |_| run(JsonStyle::Pretty),
                    "Format"
                }
                Button {
                    id: "minify-json".to_string(),
                    variant: ButtonVariant::Tool,
                    onclick: move |_| run(JsonStyle::Minified),
                    "Minify"
                }
                Button {
                    id: "validate-json".to_string(),
                    variant: ButtonVariant::Tool,
                    onclick: move |_| {
                        let next = match json::validate_json(&input.read()) {
                            Ok(message) => ToolStatus::success(message),
                            Err(e) => ToolStatus::error(e.to_string()),
                        };
                        status.set(next);
                    },
                    "Validate"
                }
                Button {
                    id: "clear-json".to_string(),
                    variant: ButtonVariant::Secondary,
                    onclick: move |_| {
                        input.set(String::new());
                        output.set(String::new());
                        status.set(ToolStatus::cleared());
                    },
                    "Clear"
                }
            }
            textarea {
                id: "json-output",
                class: "tool-textarea",
                rows: "6",
                readonly: true,
                "aria-label": "Formatted JSON",
                value: "{output}",
            }
            ToolStatusLine { id: "json-status".to_string(), status: status() }
        }
    }
}
