use dioxus::prelude::*;

use crate::Route;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = format!("/{}", segments.join("/"));

    rsx! {
        div {
            class: "centered-page",
            h1 { "Page not found" }
            p { class: "muted", "Nothing lives at {path}." }
            Link { to: Route::DashboardOverview {}, "Back to the dashboard" }
        }
    }
}
