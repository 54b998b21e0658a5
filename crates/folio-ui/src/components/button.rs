//! Button Components
//!
//! - Primary: hero and form submit actions
//! - Secondary: outlined companion to a primary action
//! - Tool: compact buttons in the developer tool panels

use dioxus::prelude::*;

/// Button style variants
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Tool,
}

impl ButtonVariant {
    /// Returns the CSS classes for this variant
    pub fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "btn btn-primary",
            ButtonVariant::Secondary => "btn btn-secondary",
            ButtonVariant::Tool => "btn btn-tool",
        }
    }
}

/// Join a base class with optional extra classes
pub(crate) fn with_extra(base: &str, extra: Option<&str>) -> String {
    match extra {
        Some(extra) if !extra.is_empty() => format!("{} {}", base, extra),
        _ => base.to_string(),
    }
}

#[derive(Clone, PartialEq, Props)]
pub struct ButtonProps {
    #[props(default)]
    pub variant: ButtonVariant,
    pub children: Element,
    #[props(default)]
    pub onclick: Option<EventHandler<()>>,
    #[props(default = false)]
    pub disabled: bool,
    /// `button` or `submit`
    #[props(default = "button".to_string())]
    pub button_type: String,
    #[props(default)]
    pub id: Option<String>,
    #[props(default)]
    pub class: Option<String>,
}

/// Styled button
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     Button {
///         variant: ButtonVariant::Tool,
///         onclick: move |_| format(),
///         "Format"
///     }
/// }
/// ```
#[component]
pub fn Button(props: ButtonProps) -> Element {
    let class = with_extra(props.variant.class(), props.class.as_deref());
    let onclick = props.onclick;

    rsx! {
        button {
            id: props.id.clone(),
            class: "{class}",
            r#type: "{props.button_type}",
            disabled: props.disabled,
            "aria-disabled": if props.disabled { "true" } else { "false" },
            onclick: move |_| {
                if let Some(handler) = onclick {
                    handler.call(());
                }
            },
            {props.children}
        }
    }
}

/// Close button with × glyph
#[component]
pub fn CloseButton(
    onclick: EventHandler<()>,
    #[props(default = "Close".to_string())] label: String,
) -> Element {
    rsx! {
        button {
            class: "notification-close",
            r#type: "button",
            "aria-label": "{label}",
            onclick: move |_| onclick.call(()),
            "\u{00D7}"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn button_variant_classes() {
        assert_eq!(ButtonVariant::Primary.class(), "btn btn-primary");
        assert_eq!(ButtonVariant::Secondary.class(), "btn btn-secondary");
        assert_eq!(ButtonVariant::Tool.class(), "btn btn-tool");
    }

    #[test]
    fn button_variant_default() {
        assert_eq!(ButtonVariant::default(), ButtonVariant::Primary);
    }

    #[test]
    fn extra_classes_are_appended() {
        assert_eq!(with_extra("btn", None), "btn");
        assert_eq!(with_extra("btn", Some("")), "btn");
        assert_eq!(with_extra("btn", Some("wide")), "btn wide");
    }
}
