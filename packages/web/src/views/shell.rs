use dioxus::prelude::*;

use ui::components::Spinner;
use ui::routes::{guard, Access};
use ui::{use_session, NavBar};

use crate::Route;

/// Layout for every signed-in screen. Runs the route guard before the
/// screen renders.
#[component]
pub fn Shell() -> Element {
    let route = use_route::<Route>();
    let session = use_session();
    let nav = use_navigator();

    let Some(screen) = route.screen() else {
        return rsx! { Outlet::<Route> {} };
    };

    let status = session.status.read().clone();
    match guard(screen, &status) {
        Access::Wait => rsx! {
            div { class: "page-loading", Spinner {} }
        },
        Access::Redirect(target) => {
            tracing::info!(screen = screen.title(), to = target.path(), "route guard redirect");
            nav.replace(Route::SignIn {});
            rsx! {}
        }
        Access::Render => rsx! {
            div {
                class: "app-shell",
                NavBar {
                    current_path: route.to_string(),
                    on_navigate: move |path: String| {
                        nav.push(path.as_str());
                    },
                }
                main {
                    class: "app-content",
                    Outlet::<Route> {}
                }
            }
        },
    }
}
