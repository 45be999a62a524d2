//! The signed-in user's own profile.

use api::UserInfo;
use dioxus::prelude::*;
use ui::components::Spinner;
use ui::dialogs::{use_submit, DialogActions, DialogSignal, PersonFieldset};
use ui::failure::Failure;
use ui::forms::{DialogState, ProfileForm};
use ui::{report_failure, use_api, use_list, use_notifications, use_session};

use super::manager_options;

fn seeded(user: &UserInfo) -> Option<DialogState<ProfileForm>> {
    Some(DialogState::edit(user.id.clone(), user))
}

#[component]
pub fn Settings() -> Element {
    let api = use_api();
    let mut session = use_session();
    let mut notices = use_notifications();
    let everyone = use_list(|api| async move { api.users(true).await });
    let mut form: DialogSignal<ProfileForm> =
        use_signal(|| session.status.peek().user().and_then(seeded));

    // The controller closes the form after a save; reopen it on the
    // refreshed user.
    let on_saved = use_callback(move |_: ()| {
        let api = api.clone();
        spawn(async move {
            match api.current_user().await.and_then(|r| r.into_data()) {
                Ok(user) => {
                    form.set(seeded(&user));
                    session.replace_user(user);
                }
                Err(err) => {
                    report_failure(&Failure::from(err), &mut notices, &mut session, &api);
                    form.set(session.status.peek().user().and_then(seeded));
                }
            }
        });
    });
    let mut save = use_submit(form, on_saved, "Profile updated");

    let status = session.status.read().clone();
    let Some(user) = status.user() else {
        return rsx! {};
    };
    let Some(state) = form() else {
        return rsx! {
            div { class: "page-loading", Spinner {} }
        };
    };
    let locked = ProfileForm::locked(user.role);
    let managers = manager_options(&everyone.state.read().items, Some(&user.id));
    let reset = user.clone();

    rsx! {
        div {
            class: "page",
            h2 { class: "page-title", "Settings" }
            div {
                class: "card profile-form",
                PersonFieldset {
                    id_prefix: "profile",
                    fields: state.fields.person.clone(),
                    errors: state.errors.clone(),
                    managers,
                    locked,
                    on_edit: move |(field, value): (&'static str, String)| {
                        if let Some(s) = form.write().as_mut() {
                            s.edit_field(field, |f| f.person.set(field, value));
                        }
                    },
                }
                DialogActions {
                    saving: state.saving,
                    on_save: move |_| save(),
                    on_cancel: move |_| form.set(seeded(&reset)),
                }
            }
        }
    }
}
