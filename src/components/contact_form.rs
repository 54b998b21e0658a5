//! Contact Form Component
//!
//! Validates each field on blur, clears its error while typing and runs
//! the [`SubmissionWorkflow`] on submit. The simulated send completes on
//! the shell scheduler, after which the form is reset and a toast shown.

use std::collections::HashMap;
use std::rc::Rc;

use dioxus::prelude::*;
use folio_core::{Field, FieldFeedback, FieldId, FormState, SubmissionWorkflow, SubmitOutcome};
use folio_ui::{Button, FormInput, FormTextArea};

use crate::context::use_shell;

struct FieldSpec {
    name: &'static str,
    label: &'static str,
    input_type: &'static str,
    placeholder: &'static str,
    multiline: bool,
}

const FIELDS: [FieldSpec; 3] = [
    FieldSpec {
        name: "name",
        label: "Name",
        input_type: "text",
        placeholder: "Your name",
        multiline: false,
    },
    FieldSpec {
        name: "email",
        label: "Email",
        input_type: "email",
        placeholder: "you@example.com",
        multiline: false,
    },
    FieldSpec {
        name: "message",
        label: "Message",
        input_type: "text",
        placeholder: "Tell me about your project",
        multiline: true,
    },
];

fn empty_fields() -> Vec<Field> {
    FIELDS.iter().map(|spec| Field::new(spec.name, "")).collect()
}

fn value_of(fields: &[Field], id: &FieldId) -> String {
    fields
        .iter()
        .find(|f| &f.id == id)
        .map(|f| f.value.clone())
        .unwrap_or_default()
}

fn apply_form_state(mut feedback: Signal<HashMap<FieldId, FieldFeedback>>, form: &FormState) {
    let mut feedback = feedback.write();
    for (field, result) in form.iter() {
        feedback.insert(field.id.clone(), FieldFeedback::from_result(result));
    }
}

#[component]
pub fn ContactForm() -> Element {
    let shell = use_shell();

    let mut values = use_signal(empty_fields);
    let mut feedback: Signal<HashMap<FieldId, FieldFeedback>> = use_signal(HashMap::new);
    let mut mounted: Signal<HashMap<FieldId, Rc<MountedData>>> = use_signal(HashMap::new);
    let mut workflow =
        use_signal(|| SubmissionWorkflow::new(shell.config.read().submit_delay()));

    let busy = workflow.read().is_busy();

    let onsubmit = move |e: FormEvent| {
        e.prevent_default();

        let fields = values.read().clone();
        let outcome = workflow.write().submit(&fields);

        match outcome {
            SubmitOutcome::Rejected {
                form,
                first_invalid,
            } => {
                apply_form_state(feedback, &form);
                let element = mounted.read().get(&first_invalid).cloned();
                if let Some(element) = element {
                    spawn(async move {
                        if let Err(e) = element.set_focus(true).await {
                            tracing::warn!(error = ?e, "could not focus invalid field");
                        }
                    });
                }
            }
            SubmitOutcome::Accepted { form, ticket, delay } => {
                apply_form_state(feedback, &form);
                shell.scheduler().schedule_after(
                    delay,
                    Box::new(move || {
                        let completion = workflow.write().complete(ticket);
                        let Some(done) = completion else {
                            return;
                        };
                        shell.notify(done.message, done.severity);
                        if done.clear_fields {
                            values.set(empty_fields());
                            feedback.write().clear();
                        }
                    }),
                );
            }
            SubmitOutcome::Ignored => {}
        }
    };

    let current = values.read().clone();
    let field_nodes: Vec<Element> = FIELDS
        .iter()
        .map(|spec| {
            let id = FieldId::from(spec.name);
            let value = value_of(&current, &id);
            let field_feedback = feedback.read().get(&id).cloned().unwrap_or_default();

            let on_value = {
                let id = id.clone();
                move |v: String| {
                    if let Some(field) = values.write().iter_mut().find(|f| f.id == id) {
                        field.value = v;
                    }
                    let mut feedback = feedback.write();
                    let entry = feedback.entry(id.clone()).or_default();
                    *entry = entry.on_input();
                }
            };
            let on_blur = {
                let id = id.clone();
                move |_| {
                    let raw = value_of(&values.read(), &id);
                    let result = folio_core::validate(id.as_str(), &raw);
                    feedback
                        .write()
                        .insert(id.clone(), FieldFeedback::from_result(&result));
                }
            };
            let on_mounted = {
                let id = id.clone();
                move |e: MountedEvent| {
                    mounted.write().insert(id.clone(), e.data());
                }
            };

            if spec.multiline {
                rsx! {
                    FormTextArea {
                        key: "{spec.name}",
                        id,
                        label: spec.label.to_string(),
                        value,
                        feedback: field_feedback,
                        placeholder: spec.placeholder.to_string(),
                        disabled: busy,
                        oninput: on_value,
                        onblur: on_blur,
                        onmounted: on_mounted,
                    }
                }
            } else {
                rsx! {
                    FormInput {
                        key: "{spec.name}",
                        id,
                        label: spec.label.to_string(),
                        value,
                        feedback: field_feedback,
                        input_type: spec.input_type.to_string(),
                        placeholder: spec.placeholder.to_string(),
                        disabled: busy,
                        oninput: on_value,
                        onblur: on_blur,
                        onmounted: on_mounted,
                    }
                }
            }
        })
        .collect();

    rsx! {
        form {
            class: "contact-form",
            novalidate: true,
            onsubmit: onsubmit,
            {field_nodes.into_iter()}
            Button {
                button_type: "submit".to_string(),
                disabled: busy,
                if busy { "Sending..." } else { "Send Message" }
            }
        }
    }
}
