use dioxus::prelude::*;

use super::{use_submit, DialogActions, DialogSignal, ModalOverlay};
use crate::components::{CheckboxField, TextAreaField};
use crate::forms::FeedbackForm;

#[component]
pub fn FeedbackDialog(dialog: DialogSignal<FeedbackForm>, on_saved: EventHandler<()>) -> Element {
    let mut dialog = dialog;
    let mut save = use_submit(dialog, on_saved, "Feedback shared");

    let Some(state) = dialog() else {
        return rsx! {};
    };
    let title = if state.mode.is_edit() { "Edit Feedback" } else { "Share Feedback" };

    rsx! {
        ModalOverlay {
            title: "{title}",
            on_close: move |_| dialog.set(None),
            div {
                class: "modal-body",
                TextAreaField {
                    id: "feedback-description",
                    label: "Description",
                    value: state.fields.description.clone(),
                    invalid: state.errors.has("description"),
                    on_change: move |value: String| {
                        if let Some(s) = dialog.write().as_mut() {
                            s.edit_field("description", |f| f.description = value);
                        }
                    },
                }
                CheckboxField {
                    id: "feedback-anonymous",
                    label: "Share feedback anonymously?",
                    checked: state.fields.is_anonymous,
                    on_change: move |checked: bool| {
                        if let Some(s) = dialog.write().as_mut() {
                            s.edit_field("isAnonymous", |f| f.is_anonymous = checked);
                        }
                    },
                }
            }
            DialogActions {
                saving: state.saving,
                on_save: move |_| save(),
                on_cancel: move |_| dialog.set(None),
            }
        }
    }
}
