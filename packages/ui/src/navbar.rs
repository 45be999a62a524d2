//! The navigation rail shown around every signed-in screen.

use dioxus::prelude::*;

use crate::auth::{use_session, LogoutButton};
use crate::icons::{FaAward, FaBullhorn, FaClock, FaGauge, FaGear, FaHandshake, FaUsers};
use crate::routes::{navigation, Screen};
use crate::Icon;

fn screen_icon(screen: Screen) -> Element {
    match screen {
        Screen::Dashboard => rsx! { Icon { icon: FaGauge, width: 20, height: 20 } },
        Screen::Feedback => rsx! { Icon { icon: FaBullhorn, width: 20, height: 20 } },
        Screen::Employees => rsx! { Icon { icon: FaUsers, width: 20, height: 20 } },
        Screen::Worklog => rsx! { Icon { icon: FaClock, width: 20, height: 20 } },
        Screen::CompanyValues => rsx! { Icon { icon: FaHandshake, width: 20, height: 20 } },
        Screen::Recognition => rsx! { Icon { icon: FaAward, width: 20, height: 20 } },
        Screen::Settings => rsx! { Icon { icon: FaGear, width: 20, height: 20 } },
    }
}

/// Role-filtered icon rail plus the inner navigation of the active screen.
///
/// `current_path` decides which entry is highlighted; `on_navigate` receives
/// the path to go to.
#[component]
pub fn NavBar(current_path: String, on_navigate: EventHandler<String>) -> Element {
    let session = use_session();
    let status = session.status.read().clone();
    let Some(user) = status.user() else {
        return rsx! {};
    };

    let items = navigation(user.role);
    let active = items.iter().find(|item| item.is_active(&current_path)).cloned();
    let name = user.display_name();
    let entries: Vec<_> = items
        .iter()
        .map(|item| (item.screen, item.title, item.target(), item.is_active(&current_path)))
        .collect();

    rsx! {
        nav {
            class: "navbar",
            div {
                class: "navbar-rail",
                div { class: "navbar-brand", "EHR" }
                div {
                    class: "navbar-items",
                    for (screen, title, target, is_active) in entries {
                        button {
                            key: "{title}",
                            class: if is_active { "navbar-item active" } else { "navbar-item" },
                            title: "{title}",
                            onclick: move |_| on_navigate.call(target.to_string()),
                            {screen_icon(screen)}
                        }
                    }
                }
                div {
                    class: "navbar-footer",
                    span { class: "navbar-user", title: "{user.email}", "{name}" }
                    LogoutButton {}
                }
            }
            if let Some(active) = active {
                div {
                    class: "navbar-panel",
                    h1 { "{active.title}" }
                    for inner in active.inner {
                        div {
                            key: "{inner.path}",
                            class: if current_path == inner.path { "navbar-inner active" } else { "navbar-inner" },
                            onclick: move |_| on_navigate.call(inner.path.to_string()),
                            "{inner.title}"
                        }
                    }
                }
            }
        }
    }
}
