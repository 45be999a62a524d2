use api::CompanyValue;
use dioxus::prelude::*;
use ui::components::{Button, Spinner};
use ui::dialogs::{CompanyValueDialog, DialogSignal};
use ui::forms::{CompanyValueForm, DialogState};
use ui::icons::{FaPen, FaPlus, FaTrash};
use ui::{use_list, use_remove, Icon};

/// The admin-managed catalog of values recognitions are tagged with.
#[component]
pub fn CompanyValues() -> Element {
    let mut list = use_list(|api| async move { api.company_values().await });
    let on_delete = use_remove(list, "Company value deleted", |api, id| async move {
        api.delete_company_value(&id).await
    });
    let mut dialog: DialogSignal<CompanyValueForm> = use_signal(|| None);

    let state = list.state.read().clone();
    let loading = state.loading && state.is_empty();
    let rows: Vec<(String, CompanyValue)> = state
        .items
        .into_iter()
        .map(|value| (value.id.clone(), value))
        .collect();

    rsx! {
        div {
            class: "page",
            div {
                class: "page-header",
                h2 { class: "page-title", "Company Values" }
                Button {
                    onclick: move |_| dialog.set(Some(DialogState::create())),
                    Icon { icon: FaPlus, width: 14, height: 14 }
                    span { "Add Value" }
                }
            }
            if loading {
                Spinner {}
            } else if rows.is_empty() {
                p { class: "empty-state", "No company values defined yet." }
            } else {
                div {
                    class: "card-list",
                    for (key, value) in rows {
                        ValueCard {
                            key: "{key}",
                            value,
                            on_edit: move |value: CompanyValue| {
                                dialog.set(Some(DialogState::edit(value.id.clone(), &value)));
                            },
                            on_delete,
                        }
                    }
                }
            }
        }
        CompanyValueDialog { dialog, on_saved: move |_| list.refresh() }
    }
}

#[component]
fn ValueCard(value: CompanyValue, on_edit: EventHandler<CompanyValue>, on_delete: EventHandler<String>) -> Element {
    let id = value.id.clone();
    let seed = value.clone();

    rsx! {
        div {
            class: "card",
            h3 { class: "card-title", "{value.title}" }
            p { class: "card-body", "{value.description}" }
            div {
                class: "row-actions",
                button {
                    class: "icon-button",
                    title: "Edit",
                    onclick: move |_| on_edit.call(seed.clone()),
                    Icon { icon: FaPen, width: 14, height: 14 }
                }
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
