use dioxus::prelude::*;

use super::{use_submit, DialogActions, DialogSignal, ModalOverlay};
use crate::components::{TextAreaField, TextField};
use crate::forms::CompanyValueForm;

#[component]
pub fn CompanyValueDialog(
    dialog: DialogSignal<CompanyValueForm>,
    on_saved: EventHandler<()>,
) -> Element {
    let mut dialog = dialog;
    let mut save = use_submit(dialog, on_saved, "Company value saved");

    let Some(state) = dialog() else {
        return rsx! {};
    };
    let title = if state.mode.is_edit() { "Edit Company Value" } else { "Add Company Value" };

    rsx! {
        ModalOverlay {
            title: "{title}",
            on_close: move |_| dialog.set(None),
            div {
                class: "modal-body",
                TextField {
                    id: "company-value-title",
                    label: "Title",
                    value: state.fields.title.clone(),
                    invalid: state.errors.has("title"),
                    on_change: move |value: String| {
                        if let Some(s) = dialog.write().as_mut() {
                            s.edit_field("title", |f| f.title = value);
                        }
                    },
                }
                TextAreaField {
                    id: "company-value-description",
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
