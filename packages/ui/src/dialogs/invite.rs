use dioxus::prelude::*;

use super::{use_submit, DialogActions, DialogSignal, ModalOverlay, PersonFieldset};
use crate::components::SelectOption;
use crate::forms::InviteForm;

#[component]
pub fn InviteDialog(
    dialog: DialogSignal<InviteForm>,
    managers: Vec<SelectOption>,
    on_saved: EventHandler<()>,
) -> Element {
    let mut dialog = dialog;
    let mut save = use_submit(dialog, on_saved, "Invitation sent");

    let Some(state) = dialog() else {
        return rsx! {};
    };

    rsx! {
        ModalOverlay {
            title: "Invite Employee",
            on_close: move |_| dialog.set(None),
            div {
                class: "modal-body",
                PersonFieldset {
                    id_prefix: "invite",
                    fields: state.fields.person.clone(),
                    errors: state.errors.clone(),
                    managers,
                    on_edit: move |(field, value): (&'static str, String)| {
                        if let Some(s) = dialog.write().as_mut() {
                            s.edit_field(field, |f| f.person.set(field, value));
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
