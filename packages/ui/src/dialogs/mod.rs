//! Create/edit dialogs for each entity.
//!
//! A parent screen owns a `Signal<Option<DialogState<F>>>`: `None` is closed.
//! The dialog calls [`submit`] on Save and the parent's `on_saved` after a
//! successful save, which re-fetches the list.

mod company_value;
mod feedback;
mod invite;
mod modal_overlay;
mod person_fieldset;
mod recognition;
mod worklog;

pub use company_value::CompanyValueDialog;
pub use feedback::FeedbackDialog;
pub use invite::InviteDialog;
pub use modal_overlay::{DialogActions, ModalOverlay};
pub use person_fieldset::PersonFieldset;
pub use recognition::RecognitionDialog;
pub use worklog::WorklogDialog;

use dioxus::prelude::*;

use crate::auth::{report_failure, use_api, use_session};
use crate::forms::{DialogState, EntityForm, SaveOutcome};
use crate::notifications::{notify_success, use_notifications};

/// Open-dialog handle held by the parent screen.
pub type DialogSignal<F> = Signal<Option<DialogState<F>>>;

/// Save handler for a dialog. Call from the component body.
pub fn use_submit<F>(dialog: DialogSignal<F>, on_saved: EventHandler<()>, done: &'static str) -> impl FnMut()
where
    F: EntityForm + 'static,
    F::Payload: 'static,
{
    let api = use_api();
    let session = use_session();
    let notices = use_notifications();

    move || submit(dialog, on_saved, done, api.clone(), session, notices)
}

fn submit<F>(
    mut dialog: DialogSignal<F>,
    on_saved: EventHandler<()>,
    done: &'static str,
    api: crate::platform::AppApi,
    mut session: crate::auth::SessionHandle,
    mut notices: Signal<crate::notifications::Notifications>,
) where
    F: EntityForm + 'static,
    F::Payload: 'static,
{
    let started = {
        let mut guard = dialog.write();
        let Some(state) = guard.as_mut() else {
            return;
        };
        state
            .begin_save()
            .map(|payload| (payload, state.mode.clone()))
    };
    let (payload, mode) = match started {
        Ok(started) => started,
        // Field errors are already on the state; a busy save just waits.
        Err(_) => return,
    };

    spawn(async move {
        let result = F::submit(&api, &mode, &payload).await;
        let outcome = match dialog.write().as_mut() {
            Some(state) => state.finish_save(result),
            None => return,
        };
        match outcome {
            SaveOutcome::Saved { message } => {
                notify_success(&mut notices, message, done);
                on_saved.call(());
                dialog.set(None);
            }
            SaveOutcome::Failed(failure) => {
                report_failure(&failure, &mut notices, &mut session, &api);
            }
            SaveOutcome::Invalid(_) | SaveOutcome::Busy => {}
        }
    });
}
