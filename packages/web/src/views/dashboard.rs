use dioxus::prelude::*;
use ui::components::Spinner;
use ui::failure::Failure;
use ui::stats::stat_sections;
use ui::{report_failure, use_api, use_notifications, use_session, NoticeHistory};

use crate::Route;

/// `/dashboard` opens its first tab.
#[component]
pub fn Dashboard() -> Element {
    let nav = use_navigator();
    nav.replace(Route::DashboardOverview {});
    rsx! {}
}

#[component]
pub fn DashboardOverview() -> Element {
    let api = use_api();
    let mut session = use_session();
    let mut notices = use_notifications();

    let stats = use_resource(move || {
        let api = api.clone();
        async move {
            let result = api.stats().await.and_then(|r| r.into_data());
            match result {
                Ok(stats) => Some(stats),
                Err(err) => {
                    report_failure(&Failure::from(err), &mut notices, &mut session, &api);
                    None
                }
            }
        }
    });

    let Some(role) = session.status.read().role() else {
        return rsx! {};
    };

    let loaded = stats.read().clone();
    let Some(loaded) = loaded else {
        return rsx! {
            div { class: "page-loading", Spinner {} }
        };
    };
    let sections = stat_sections(role, &loaded.unwrap_or_default());

    rsx! {
        div {
            class: "page",
            h2 { class: "page-title", "Overview" }
            for group in sections {
                section {
                    key: "{group.title}",
                    class: "stat-section",
                    h3 { "{group.title}" }
                    div {
                        class: "stat-grid",
                        for tile in group.tiles {
                            div {
                                key: "{tile.label}",
                                class: "stat-tile",
                                span { class: "stat-label", "{tile.label}" }
                                span { class: "stat-value", "{tile.value}" }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn DashboardActivity() -> Element {
    rsx! {
        div {
            class: "page",
            h2 { class: "page-title", "Activity" }
            NoticeHistory {}
        }
    }
}
