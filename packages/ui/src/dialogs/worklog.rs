use dioxus::prelude::*;

use super::{use_submit, DialogActions, DialogSignal, ModalOverlay};
use crate::components::{TextAreaField, TextField};
use crate::forms::WorklogForm;

#[component]
pub fn WorklogDialog(dialog: DialogSignal<WorklogForm>, on_saved: EventHandler<()>) -> Element {
    let mut dialog = dialog;
    let mut save = use_submit(dialog, on_saved, "Worklog saved");

    let Some(state) = dialog() else {
        return rsx! {};
    };
    let title = if state.mode.is_edit() { "Edit Worklog" } else { "Add Worklog" };

    rsx! {
        ModalOverlay {
            title: "{title}",
            on_close: move |_| dialog.set(None),
            div {
                class: "modal-body",
                TextField {
                    id: "worklog-service-date",
                    label: "Service Date",
                    r#type: "date",
                    value: state.fields.service_date.clone(),
                    invalid: state.errors.has("serviceDate"),
                    on_change: move |value: String| {
                        if let Some(s) = dialog.write().as_mut() {
                            s.edit_field("serviceDate", |f| f.service_date = value);
                        }
                    },
                }
                TextField {
                    id: "worklog-hours",
                    label: "Hours",
                    r#type: "number",
                    value: state.fields.hours.clone(),
                    invalid: state.errors.has("hours"),
                    on_change: move |value: String| {
                        if let Some(s) = dialog.write().as_mut() {
                            s.edit_field("hours", |f| f.hours = value);
                        }
                    },
                }
                TextAreaField {
                    id: "worklog-notes",
                    label: "Notes",
                    value: state.fields.notes.clone(),
                    invalid: state.errors.has("notes"),
                    on_change: move |value: String| {
                        if let Some(s) = dialog.write().as_mut() {
                            s.edit_field("notes", |f| f.notes = value);
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
