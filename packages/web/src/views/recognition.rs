use api::Recognition;
use dioxus::prelude::*;
use ui::components::{Button, SelectOption, Spinner};
use ui::dialogs::{DialogSignal, RecognitionDialog};
use ui::forms::{DialogState, RecognitionForm};
use ui::icons::{FaPen, FaPlus, FaShareNodes, FaTrash};
use ui::ownership::{recognition_actions, RowActions};
use ui::{use_list, use_remove, use_session, Icon};

#[component]
pub fn Recognitions() -> Element {
    let session = use_session();
    let mut list = use_list(|api| async move { api.recognitions().await });
    let users = use_list(|api| async move { api.users(true).await });
    let values = use_list(|api| async move { api.company_values().await });
    let on_delete = use_remove(list, "Recognition deleted", |api, id| async move {
        api.delete_recognition(&id).await
    });
    let mut dialog: DialogSignal<RecognitionForm> = use_signal(|| None);

    let viewer = session.status.read().user().map(|u| u.id.clone()).unwrap_or_default();
    let recipients: Vec<SelectOption> = users
        .state
        .read()
        .items
        .iter()
        .filter(|u| u.id != viewer)
        .map(|u| SelectOption::new(u.id.clone(), u.display_name()))
        .collect();
    let value_options: Vec<SelectOption> = values
        .state
        .read()
        .items
        .iter()
        .map(|v| SelectOption::new(v.id.clone(), v.title.clone()))
        .collect();

    let state = list.state.read().clone();
    let loading = state.loading && state.is_empty();
    let rows: Vec<(String, RowActions, Recognition)> = state
        .items
        .into_iter()
        .map(|item| (item.id.clone(), recognition_actions(&viewer, &item), item))
        .collect();

    rsx! {
        div {
            class: "page",
            div {
                class: "page-header",
                h2 { class: "page-title", "Recognition" }
                Button {
                    onclick: move |_| dialog.set(Some(DialogState::create())),
                    Icon { icon: FaPlus, width: 14, height: 14 }
                    span { "Recognize" }
                }
            }
            if loading {
                Spinner {}
            } else if rows.is_empty() {
                p { class: "empty-state", "No recognitions yet. Be the first to thank a colleague." }
            } else {
                div {
                    class: "card-list",
                    for (key, actions, item) in rows {
                        RecognitionCard {
                            key: "{key}",
                            actions,
                            recognition: item,
                            on_edit: move |item: Recognition| {
                                dialog.set(Some(DialogState::edit(item.id.clone(), &item)));
                            },
                            on_delete,
                        }
                    }
                }
            }
        }
        RecognitionDialog {
            dialog,
            recipients,
            values: value_options,
            on_saved: move |_| list.refresh(),
        }
    }
}

fn name_of(user: &api::Ref<api::UserSummary>) -> String {
    user.populated().map(|u| u.full_name()).unwrap_or_default()
}

#[component]
fn RecognitionCard(
    recognition: Recognition,
    actions: RowActions,
    on_edit: EventHandler<Recognition>,
    on_delete: EventHandler<String>,
) -> Element {
    let from = name_of(&recognition.from_user);
    let to = name_of(&recognition.to_user);
    let value = recognition.value_title().unwrap_or_default().to_string();
    let share = if actions.share { recognition.share_url() } else { None };
    let id = recognition.id.clone();
    let seed = recognition.clone();

    rsx! {
        div {
            class: "card",
            div {
                class: "card-header",
                span { class: "strong", "{from}" }
                span { class: "muted", " recognized " }
                span { class: "strong", "{to}" }
                if !value.is_empty() {
                    span { class: "badge", "{value}" }
                }
            }
            p { class: "card-body", "{recognition.description}" }
            div {
                class: "row-actions",
                if let Some(url) = share {
                    a {
                        class: "icon-button",
                        href: "{url}",
                        target: "_blank",
                        rel: "noopener noreferrer",
                        title: "Share",
                        Icon { icon: FaShareNodes, width: 14, height: 14 }
                    }
                }
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
