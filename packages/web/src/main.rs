use dioxus::prelude::*;

use ui::routes::Screen;
use ui::{AuthProvider, NoticeToast};
use views::{
    AcceptInvite, CompanyValues, Dashboard, DashboardActivity, DashboardOverview, Employees,
    FeedbackBoard, NotFound, Recognitions, Settings, Shell, SignIn, SignInCallback,
    SignInIdentity, SignUp, WorkLog,
};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Root {},
    #[route("/signin")]
    SignIn {},
    #[route("/signup")]
    SignUp {},
    #[route("/signin/callback?:email")]
    SignInCallback { email: String },
    #[route("/signin/identity?:token")]
    SignInIdentity { token: String },
    #[route("/accept-invite?:token")]
    AcceptInvite { token: String },
    #[layout(Shell)]
        #[route("/dashboard")]
        Dashboard {},
        #[route("/dashboard/overview")]
        DashboardOverview {},
        #[route("/dashboard/activity")]
        DashboardActivity {},
        #[route("/feedback")]
        FeedbackBoard {},
        #[route("/employees")]
        Employees {},
        #[route("/work-log")]
        WorkLog {},
        #[route("/company-values")]
        CompanyValues {},
        #[route("/recognition")]
        Recognitions {},
        #[route("/settings")]
        Settings {},
    #[end_layout]
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

impl Route {
    /// The signed-in screen this route belongs to, if it is guarded.
    fn screen(&self) -> Option<Screen> {
        match self {
            Route::Dashboard {} | Route::DashboardOverview {} | Route::DashboardActivity {} => {
                Some(Screen::Dashboard)
            }
            Route::FeedbackBoard {} => Some(Screen::Feedback),
            Route::Employees {} => Some(Screen::Employees),
            Route::WorkLog {} => Some(Screen::Worklog),
            Route::CompanyValues {} => Some(Screen::CompanyValues),
            Route::Recognitions {} => Some(Screen::Recognition),
            Route::Settings {} => Some(Screen::Settings),
            _ => None,
        }
    }
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    if let Err(e) = dioxus::logger::init(tracing::Level::INFO) {
        eprintln!("failed to initialise logging: {e}");
    }
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        AuthProvider {
            Router::<Route> {}
            NoticeToast {}
        }
    }
}

/// Redirect `/` to the dashboard.
#[component]
fn Root() -> Element {
    let nav = use_navigator();
    nav.replace(Route::DashboardOverview {});
    rsx! {}
}
