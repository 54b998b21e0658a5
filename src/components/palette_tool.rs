//! Color Palette Generator panel
//!
//! The color picker and the hex text box mirror each other: the picker
//! always overwrites the text, the text only moves the picker once it is
//! a complete `#RRGGBB` (checked after the typing settles).
//! Clicking a swatch copies its code to the system clipboard.

use std::time::Instant;

use dioxus::prelude::*;
use folio_core::{generate_palette, is_hex_color, random_color, Debounce, Palette, Severity};
use folio_ui::{Button, ButtonVariant, PaletteGrid};

use crate::context::use_shell;
use crate::theme::colors::DEFAULT_BASE_COLOR;

fn copy_to_clipboard(text: &str) -> Result<(), arboard::Error> {
    let mut clipboard = arboard::Clipboard::new()?;
    clipboard.set_text(text.to_string())
}

#[component]
pub fn PaletteTool() -> Element {
    let shell = use_shell();

    let mut picker = use_signal(|| DEFAULT_BASE_COLOR.to_string());
    let mut hex_text = use_signal(|| DEFAULT_BASE_COLOR.to_string());
    let mut palette: Signal<Option<Palette>> = use_signal(|| None);
    let mut debounce =
        use_signal(|| Debounce::<String>::new(shell.config.read().hex_debounce()));

    let mut show = move |base: &str| match generate_palette(base) {
        Ok(generated) => palette.set(Some(generated)),
        Err(e) => {
            tracing::warn!(base, error = %e, "palette generation failed");
            shell.notify(e.to_string(), Severity::Error);
        }
    };

    let on_hex_input = move |e: FormEvent| {
        let value = e.value();
        hex_text.set(value.clone());
        debounce.write().push(value, Instant::now());

        let wait = debounce.read().wait();
        spawn(async move {
            tokio::time::sleep(wait).await;
            let settled = debounce.write().poll(Instant::now());
            if let Some(hex) = settled.filter(|hex| is_hex_color(hex)) {
                picker.set(hex.to_lowercase());
            }
        });
    };

    let oncopy = move |code: String| match copy_to_clipboard(&code) {
        Ok(()) => shell.notify(format!("Copied {} to clipboard!", code), Severity::Success),
        Err(e) => {
            tracing::warn!(error = %e, "clipboard write failed");
            shell.notify("Failed to copy to clipboard", Severity::Error);
        }
    };

    rsx! {
        div { class: "tool-card",
            h3 { "Color Palette Generator" }
            div { class: "color-inputs",
                input {
                    id: "base-color",
                    class: "color-picker",
                    r#type: "color",
                    "aria-label": "Base color",
                    value: "{picker}",
                    oninput: move |e| {
                        let value = e.value();
                        picker.set(value.clone());
                        hex_text.set(value);
                    },
                }
                input {
                    id: "base-color-hex",
                    class: "tool-input",
                    r#type: "text",
                    maxlength: "7",
                    "aria-label": "Base color hex code",
                    value: "{hex_text}",
                    oninput: on_hex_input,
                }
            }
            div { class: "tool-actions",
                Button {
                    id: "generate-palette".to_string(),
                    variant: ButtonVariant::Tool,
                    onclick: move |_| show(&picker.read()),
                    "Generate Palette"
                }
                Button {
                    id: "random-palette".to_string(),
                    variant: ButtonVariant::Secondary,
                    onclick: move |_| {
                        let hex = random_color().to_hex();
                        picker.set(hex.clone());
                        hex_text.set(hex.clone());
                        show(&hex);
                    },
                    "Random"
                }
            }
            if let Some(palette) = palette() {
                PaletteGrid { palette, oncopy }
            } else {
                div { id: "color-palette", class: "color-palette" }
            }
        }
    }
}
