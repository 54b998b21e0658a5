//! Base64 encoder / decoder panel.

use dioxus::prelude::*;
use folio_core::tools::base64;
use folio_core::{FolioResult, ToolStatus};
use folio_ui::{Button, ButtonVariant, ToolStatusLine};

#[derive(Clone, Copy, PartialEq, Debug)]
enum Direction {
    Encode,
    Decode,
}

impl Direction {
    fn apply(self, input: &str) -> FolioResult<String> {
        match self {
            Direction::Encode => base64::encode(input),
            Direction::Decode => base64::decode(input),
        }
    }

    fn success_message(self) -> &'static str {
        match self {
            Direction::Encode => base64::ENCODED,
            Direction::Decode => base64::DECODED,
        }
    }
}

#[component]
pub fn Base64Tool() -> Element {
    let mut input = use_signal(String::new);
    let mut output = use_signal(String::new);
    let mut status = use_signal(ToolStatus::cleared);

    // Unlike the JSON tool, a failure leaves the previous output in place
    let mut run = move |direction: Direction| {
        let result = direction.apply(&input.read());
        let (converted, next) = ToolStatus::report(result, direction.success_message());
        if let Some(converted) = converted {
            output.set(converted);
        }
        status.set(next);
    };

    rsx! {
        div { class: "tool-card",
            h3 { "Base64 Encoder / Decoder" }
            textarea {
                id: "base64-input",
                class: "tool-textarea",
                rows: "4",
                placeholder: "Text or Base64",
                "aria-label": "Base64 input",
                value: "{input}",
                oninput: move |e| input.set(e.value()),
            }
            div { class: "tool-actions",
                Button {
                    id: "encode-base64".to_string(),
                    variant: ButtonVariant::Tool,
                    onclick: move |_| run(Direction::Encode),
                    "Encode"
                }
                Button {
                    id: "decode-base64".to_string(),
                    variant: ButtonVariant::Tool,
                    onclick: move |_| run(Direction::Decode),
                    "Decode"
                }
                Button {
                    id: "clear-base64".to_string(),
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
                id: "base64-output",
                class: "tool-textarea",
                rows: "4",
                readonly: true,
                "aria-label": "Base64 output",
                value: "{output}",
            }
            ToolStatusLine { id: "base64-status".to_string(), status: status() }
        }
    }
}
