//! Color swatches of the palette tool.

use dioxus::prelude::*;
use folio_core::{Palette, Swatch};

/// Text color that stays readable on `swatch`
pub fn label_color(swatch: &Swatch) -> &'static str {
    if swatch.color.to_hsl().l > 0.6 {
        "#111827"
    } else {
        "#ffffff"
    }
}

#[derive(Clone, PartialEq, Props)]
pub struct ColorSwatchProps {
    pub swatch: Swatch,
    /// Called with the uppercase `#RRGGBB` code
    pub oncopy: EventHandler<String>,
}

/// One clickable swatch showing its uppercase hex code
#[component]
pub fn ColorSwatch(props: ColorSwatchProps) -> Element {
    let code = props.swatch.color.to_hex_upper();
    let background = props.swatch.color.to_hex();
    let text = label_color(&props.swatch);
    let role = props.swatch.role.label();
    let oncopy = props.oncopy;

    rsx! {
        button {
            class: "color-swatch",
            r#type: "button",
            title: "{role}",
            "aria-label": "Copy {code} ({role})",
            style: "background-color: {background};",
            onclick: {
                let code = code.clone();
                move |_| oncopy.call(code.clone())
            },
            span { class: "color-code", style: "color: {text};", "{code}" }
        }
    }
}

/// All eight swatches in palette order
#[component]
pub fn PaletteGrid(palette: Palette, oncopy: EventHandler<String>) -> Element {
    rsx! {
        div { id: "color-palette", class: "color-palette",
            for (role, swatch) in palette.iter().map(|s| (s.role.label(), *s)) {
                ColorSwatch {
                    key: "{role}",
                    swatch,
                    oncopy: move |code| oncopy.call(code),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::{generate_palette, PaletteRole};

    #[test]
    fn label_contrast() {
        let palette = generate_palette("#336699").unwrap();
        let swatches = palette.swatches();

        let darker = swatches[PaletteRole::Darker as usize];
        assert_eq!(label_color(&darker), "#ffffff");

        let lighter = swatches[PaletteRole::Lighter as usize];
        assert_eq!(label_color(&lighter), "#111827");
    }
}
