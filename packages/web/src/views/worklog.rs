use api::Worklog;
use dioxus::prelude::*;
use ui::components::{Button, Spinner};
use ui::dialogs::{DialogSignal, WorklogDialog};
use ui::forms::validate::number_text;
use ui::forms::{DialogState, WorklogForm};
use ui::icons::{FaPen, FaPlus, FaTrash};
use ui::ownership::{worklog_actions, RowActions};
use ui::{use_list, use_remove, use_session, Icon};

#[component]
pub fn WorkLog() -> Element {
    let session = use_session();
    let mut list = use_list(|api| async move { api.worklogs().await });
    let on_delete = use_remove(list, "Worklog deleted", |api, id| async move {
        api.delete_worklog(&id).await
    });
    let mut dialog: DialogSignal<WorklogForm> = use_signal(|| None);

    let viewer = session.status.read().user().map(|u| u.id.clone()).unwrap_or_default();
    let state = list.state.read().clone();
    let loading = state.loading && state.is_empty();
    let rows: Vec<(String, RowActions, Worklog)> = state
        .items
        .into_iter()
        .map(|item| (item.id.clone(), worklog_actions(&viewer, &item), item))
        .collect();

    rsx! {
        div {
            class: "page",
            div {
                class: "page-header",
                h2 { class: "page-title", "Worklog" }
                Button {
                    onclick: move |_| dialog.set(Some(DialogState::create())),
                    Icon { icon: FaPlus, width: 14, height: 14 }
                    span { "Log Hours" }
                }
            }
            if loading {
                Spinner {}
            } else if rows.is_empty() {
                p { class: "empty-state", "No hours logged yet." }
            } else {
                table {
                    class: "data-table",
                    thead {
                        tr {
                            th { "Date" }
                            th { "Hours" }
                            th { "Notes" }
                            th { "Logged by" }
                            th {}
                        }
                    }
                    tbody {
                        for (key, actions, item) in rows {
                            WorklogRow {
                                key: "{key}",
                                actions,
                                worklog: item,
                                on_edit: move |item: Worklog| {
                                    dialog.set(Some(DialogState::edit(item.id.clone(), &item)));
                                },
                                on_delete,
                            }
                        }
                    }
                }
            }
        }
        WorklogDialog { dialog, on_saved: move |_| list.refresh() }
    }
}

#[component]
fn WorklogRow(
    worklog: Worklog,
    actions: RowActions,
    on_edit: EventHandler<Worklog>,
    on_delete: EventHandler<String>,
) -> Element {
    let owner = worklog
        .user
        .as_ref()
        .and_then(|u| u.populated())
        .map(|u| u.full_name())
        .unwrap_or_default();
    let hours = number_text(worklog.hours);
    let day = worklog.service_day().to_string();
    let id = worklog.id.clone();
    let seed = worklog.clone();

    rsx! {
        tr {
            td { "{day}" }
            td { "{hours}" }
            td { "{worklog.notes}" }
            td { "{owner}" }
            td {
                class: "row-actions",
                if actions.edit {
                    button {
                        class: "icon-button",
                        title: "Edit",
                        onclick: move |_| on_edit.call(seed.clone()),
                        Icon { icon: FaPen, width: 14, height: 14 }
                    }
                }
                if actions.delete {
                    button {
                        class: "icon-button danger",
                        title: "Delete",
                        onclick: move |_| on_delete.call(id.clone()),
                        Icon { icon: FaTrash, width: 14, height: 14 }
                    }
                }
            }
        }
    }
}
