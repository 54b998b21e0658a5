//! Form Field Components
//!
//! Inputs and textareas of the contact form. Each one renders its
//! [`FieldFeedback`]: the `error`/`valid` class on the control and the
//! message in an error region with id `{id}-error`.

use dioxus::prelude::*;
use folio_core::{FieldFeedback, FieldId};

/// Class of a control given its base class and feedback
pub fn control_class(base: &str, feedback: &FieldFeedback) -> String {
    let decoration = feedback.decoration.class();
    if decoration.is_empty() {
        base.to_string()
    } else {
        format!("{} {}", base, decoration)
    }
}

/// Id of the error region that belongs to `id`
pub fn error_region_id(id: &FieldId) -> String {
    format!("{}-error", id)
}

#[derive(Clone, PartialEq, Props)]
pub struct FormInputProps {
    /// Used as `id` and `name` of the control
    pub id: FieldId,
    pub label: String,
    pub value: String,
    #[props(default)]
    pub feedback: FieldFeedback,
    /// text, email, ...
    #[props(default = "text".to_string())]
    pub input_type: String,
    #[props(default)]
    pub placeholder: Option<String>,
    #[props(default = false)]
    pub disabled: bool,
    pub oninput: EventHandler<String>,
    pub onblur: EventHandler<()>,
    /// Lets the form keep a handle for focusing the first invalid field
    #[props(default)]
    pub onmounted: Option<EventHandler<MountedEvent>>,
}

/// Single-line input with label and error region
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     FormInput {
///         id: FieldId::from("email"),
///         label: "Email".to_string(),
///         input_type: "email".to_string(),
///         value: email(),
///         feedback: email_feedback(),
///         oninput: move |v| email.set(v),
///         onblur: move |_| check_email(),
///     }
/// }
/// ```
#[component]
pub fn FormInput(props: FormInputProps) -> Element {
    let id = props.id.to_string();
    let error_id = error_region_id(&props.id);
    let class = control_class("form-input", &props.feedback);
    let invalid = props.feedback.is_error();
    let (oninput, onblur, onmounted) = (props.oninput, props.onblur, props.onmounted);

    rsx! {
        div { class: "form-group",
            label { class: "form-label", r#for: "{id}", "{props.label}" }
            input {
                id: "{id}",
                name: "{id}",
                class: "{class}",
                r#type: "{props.input_type}",
                value: "{props.value}",
                placeholder: props.placeholder.as_deref().unwrap_or(""),
                disabled: props.disabled,
                "aria-invalid": if invalid { "true" } else { "false" },
                "aria-describedby": "{error_id}",
                oninput: move |e| oninput.call(e.value()),
                onblur: move |_| onblur.call(()),
                onmounted: move |e| {
                    if let Some(handler) = onmounted {
                        handler.call(e);
                    }
                },
            }
            ErrorRegion { id: error_id.clone(), feedback: props.feedback.clone() }
        }
    }
}

#[derive(Clone, PartialEq, Props)]
pub struct FormTextAreaProps {
    pub id: FieldId,
    pub label: String,
    pub value: String,
    #[props(default)]
    pub feedback: FieldFeedback,
    #[props(default = 5)]
    pub rows: u32,
    #[props(default)]
    pub placeholder: Option<String>,
    #[props(default = false)]
    pub disabled: bool,
    pub oninput: EventHandler<String>,
    pub onblur: EventHandler<()>,
    #[props(default)]
    pub onmounted: Option<EventHandler<MountedEvent>>,
}

/// Multi-line counterpart of [`FormInput`]
#[component]
pub fn FormTextArea(props: FormTextAreaProps) -> Element {
    let id = props.id.to_string();
    let error_id = error_region_id(&props.id);
    let class = control_class("form-textarea", &props.feedback);
    let invalid = props.feedback.is_error();
    let (oninput, onblur, onmounted) = (props.oninput, props.onblur, props.onmounted);

    rsx! {
        div { class: "form-group",
            label { class: "form-label", r#for: "{id}", "{props.label}" }
            textarea {
                id: "{id}",
                name: "{id}",
                class: "{class}",
                rows: "{props.rows}",
                placeholder: props.placeholder.as_deref().unwrap_or(""),
                disabled: props.disabled,
                value: "{props.value}",
                "aria-invalid": if invalid { "true" } else { "false" },
                "aria-describedby": "{error_id}",
                oninput: move |e| oninput.call(e.value()),
                onblur: move |_| onblur.call(()),
                onmounted: move |e| {
                    if let Some(handler) = onmounted {
                        handler.call(e);
                    }
                },
            }
            ErrorRegion { id: error_id.clone(), feedback: props.feedback.clone() }
        }
    }
}

/// Error text under a control.
///
/// Always rendered so screen readers keep the `aria-describedby` target;
/// empty while the field has no error.
#[component]
pub fn ErrorRegion(id: String, feedback: FieldFeedback) -> Element {
    rsx! {
        div {
            id: "{id}",
            class: "error-message",
            role: "alert",
            "aria-live": feedback.live.as_str(),
            "{feedback.message}"
        }
    }
}
