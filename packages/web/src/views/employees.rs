use api::UserInfo;
use dioxus::prelude::*;
use ui::components::{Button, Spinner};
use ui::dialogs::{DialogSignal, InviteDialog};
use ui::forms::validate::{date_part, number_text};
use ui::forms::{DialogState, InviteForm};
use ui::icons::FaUserPlus;
use ui::{use_list, Icon};

use super::manager_options;

/// Directory of the caller's organisation (admins) or team (managers).
#[component]
pub fn Employees() -> Element {
    let mut list = use_list(|api| async move { api.users(false).await });
    let mut everyone = use_list(|api| async move { api.users(true).await });
    let mut dialog: DialogSignal<InviteForm> = use_signal(|| None);

    let managers = manager_options(&everyone.state.read().items, None);
    let state = list.state.read().clone();
    let loading = state.loading && state.is_empty();
    let rows: Vec<(String, UserInfo)> = state
        .items
        .into_iter()
        .map(|user| (user.id.clone(), user))
        .collect();

    rsx! {
        div {
            class: "page",
            div {
                class: "page-header",
                h2 { class: "page-title", "Employees" }
                Button {
                    onclick: move |_| {
                        everyone.refresh();
                        dialog.set(Some(DialogState::create()));
                    },
                    Icon { icon: FaUserPlus, width: 14, height: 14 }
                    span { "Invite Employee" }
                }
            }
            if loading {
                Spinner {}
            } else if rows.is_empty() {
                p { class: "empty-state", "No employees yet." }
            } else {
                table {
                    class: "data-table",
                    thead {
                        tr {
                            th { "Name" }
                            th { "Email" }
                            th { "Role" }
                            th { "Department" }
                            th { "Designation" }
                            th { "Joined" }
                            th { "Hourly Rate" }
                        }
                    }
                    tbody {
                        for (key, user) in rows {
                            EmployeeRow { key: "{key}", user }
                        }
                    }
                }
            }
        }
        InviteDialog {
            dialog,
            managers,
            on_saved: move |_| list.refresh(),
        }
    }
}

#[component]
fn EmployeeRow(user: UserInfo) -> Element {
    let name = user.display_name();
    let joined = user.joining_date.as_deref().map(date_part).unwrap_or_default();
    let rate = user.hourly_rate.map(number_text).unwrap_or_default();
    let department = user.department.clone().unwrap_or_default();
    let designation = user.designation.clone().unwrap_or_default();
    let role = user.role.label();

    rsx! {
        tr {
            td { "{name}" }
            td { "{user.email}" }
            td { "{role}" }
            td { "{department}" }
            td { "{designation}" }
            td { "{joined}" }
            td { "{rate}" }
        }
    }
}
