use api::Feedback;
use dioxus::prelude::*;
use ui::components::{Button, Spinner};
use ui::dialogs::{DialogSignal, FeedbackDialog};
use ui::forms::{DialogState, FeedbackForm};
use ui::icons::{FaPen, FaPlus, FaTrash};
use ui::ownership::{feedback_actions, RowActions};
use ui::{use_list, use_remove, use_session, Icon};

#[component]
pub fn FeedbackBoard() -> Element {
    let session = use_session();
    let mut list = use_list(|api| async move { api.feedback().await });
    let on_delete = use_remove(list, "Feedback deleted", |api, id| async move {
        api.delete_feedback(&id).await
    });
    let mut dialog: DialogSignal<FeedbackForm> = use_signal(|| None);

    let viewer = session.status.read().user().map(|u| u.id.clone()).unwrap_or_default();
    let state = list.state.read().clone();
    let loading = state.loading && state.is_empty();
    let rows: Vec<(String, RowActions, Feedback)> = state
        .items
        .into_iter()
        .map(|item| (item.id.clone(), feedback_actions(&viewer, &item), item))
        .collect();

    rsx! {
        div {
            class: "page",
            div {
                class: "page-header",
                h2 { class: "page-title", "Feedback" }
                Button {
                    onclick: move |_| dialog.set(Some(DialogState::create())),
                    Icon { icon: FaPlus, width: 14, height: 14 }
                    span { "Share Feedback" }
                }
            }
            if loading {
                Spinner {}
            } else if rows.is_empty() {
                p { class: "empty-state", "No feedback has been shared yet." }
            } else {
                div {
                    class: "card-list",
                    for (key, actions, item) in rows {
                        FeedbackCard {
                            key: "{key}",
                            actions,
                            feedback: item,
                            on_edit: move |item: Feedback| {
                                dialog.set(Some(DialogState::edit(item.id.clone(), &item)));
                            },
                            on_delete,
                        }
                    }
                }
            }
        }
        FeedbackDialog { dialog, on_saved: move |_| list.refresh() }
    }
}

#[component]
fn FeedbackCard(
    feedback: Feedback,
    actions: RowActions,
    on_edit: EventHandler<Feedback>,
    on_delete: EventHandler<String>,
) -> Element {
    let author = if feedback.is_anonymous {
        "Anonymous".to_string()
    } else {
        feedback
            .user
            .as_ref()
            .and_then(|u| u.populated())
            .map(|u| u.full_name())
            .unwrap_or_else(|| "Unknown".to_string())
    };
    let id = feedback.id.clone();
    let seed = feedback.clone();

    rsx! {
        div {
            class: "card",
            p { class: "card-body", "{feedback.description}" }
            div {
                class: "card-footer",
                span { class: "muted", "{author}" }
                div {
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
}
