//! Hooks that keep a [`ListState`] in sync with one list endpoint.

use std::future::Future;

use api::ApiResult;
use dioxus::prelude::*;
use serde_json::Value;

use crate::auth::{report_failure, use_api, use_session};
use crate::failure::Failure;
use crate::forms::remove;
use crate::list::ListState;
use crate::notifications::{notify_success, use_notifications};
use crate::platform::AppApi;

/// A fetched list and a way to fetch it again.
pub struct ListHandle<T: 'static> {
    pub state: Signal<ListState<T>>,
    trigger: Signal<u64>,
}

impl<T: 'static> Clone for ListHandle<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: 'static> Copy for ListHandle<T> {}

impl<T: 'static> PartialEq for ListHandle<T> {
    fn eq(&self, other: &Self) -> bool {
        self.state == other.state && self.trigger == other.trigger
    }
}

impl<T: 'static> ListHandle<T> {
    /// Start a new fetch. A response to an earlier one is then ignored.
    pub fn refresh(&mut self) {
        *self.trigger.write() += 1;
    }
}

/// Fetch on mount and on every [`ListHandle::refresh`].
pub fn use_list<T, F, Fut>(fetch: F) -> ListHandle<T>
where
    T: 'static,
    F: Fn(AppApi) -> Fut + 'static,
    Fut: Future<Output = ApiResult<Vec<T>>> + 'static,
{
    let api = use_api();
    let mut session = use_session();
    let mut notices = use_notifications();
    let mut state = use_signal(ListState::<T>::default);
    let trigger = use_signal(|| 0u64);

    use_effect(move || {
        let _ = *trigger.read();
        let id = state.write().begin();
        let api = api.clone();
        let request = fetch(api.clone());
        spawn(async move {
            let result = request
                .await
                .and_then(|r| r.into_data())
                .map_err(Failure::from);
            let failure = result.as_ref().err().cloned();
            if state.write().settle(id, result) {
                if let Some(failure) = failure {
                    report_failure(&failure, &mut notices, &mut session, &api);
                }
            }
        });
    });

    ListHandle { state, trigger }
}

/// Delete handler for a list screen. Called with a record id; on success the
/// list is fetched again and `done` (or the backend's message) is shown.
pub fn use_remove<T, F, Fut>(list: ListHandle<T>, done: &'static str, delete: F) -> EventHandler<String>
where
    T: 'static,
    F: Fn(AppApi, String) -> Fut + 'static,
    Fut: Future<Output = ApiResult<Value>> + 'static,
{
    let api = use_api();
    let mut session = use_session();
    let mut notices = use_notifications();

    use_callback(move |id: String| {
        let api = api.clone();
        let request = delete(api.clone(), id);
        spawn(async move {
            let refresh = move || {
                let mut list = list;
                async move { list.refresh() }
            };
            match remove(request, refresh).await {
                Ok(message) => notify_success(&mut notices, message, done),
                Err(failure) => report_failure(&failure, &mut notices, &mut session, &api),
            }
        });
    })
}
