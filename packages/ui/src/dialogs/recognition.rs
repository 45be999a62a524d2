use dioxus::prelude::*;

use super::{use_submit, DialogActions, DialogSignal, ModalOverlay};
use crate::components::{SelectField, SelectOption, TextAreaField};
use crate::forms::RecognitionForm;

#[component]
pub fn RecognitionDialog(
    dialog: DialogSignal<RecognitionForm>,
    recipients: Vec<SelectOption>,
    values: Vec<SelectOption>,
    on_saved: EventHandler<()>,
) -> Element {
    let mut dialog = dialog;
    let mut save = use_submit(dialog, on_saved, "Recognition shared");

    let Some(state) = dialog() else {
        return rsx! {};
    };
    let title = if state.mode.is_edit() { "Edit Recognition" } else { "Recognize a Colleague" };

    rsx! {
        ModalOverlay {
            title: "{title}",
            on_close: move |_| dialog.set(None),
            div {
                class: "modal-body",
                SelectField {
                    id: "recognition-to-user",
                    label: "Colleague",
                    value: state.fields.to_user.clone(),
                    options: recipients,
                    invalid: state.errors.has("toUser"),
                    on_change: move |value: String| {
                        if let Some(s) = dialog.write().as_mut() {
                            s.edit_field("toUser", |f| f.to_user = value);
                        }
                    },
                }
                SelectField {
                    id: "recognition-company-value",
                    label: "Company Value",
                    value: state.fields.company_value.clone(),
                    options: values,
                    invalid: state.errors.has("companyValue"),
                    on_change: move |value: String| {
                        if let Some(s) = dialog.write().as_mut() {
                            s.edit_field("companyValue", |f| f.company_value = value);
                        }
                    },
                }
                TextAreaField {
                    id: "recognition-description",
                    label: "Description",
                    value: state.fields.description.clone(),
                    invalid: state.errors.has("description"),
                    on_change: move |value: String| {
                        if let Some(s) = dialog.write().as_mut() {
                            s.edit_field("description", |f| f.description = value);
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
