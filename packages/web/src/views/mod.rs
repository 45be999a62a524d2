mod shell;
pub use shell::Shell;

mod signin;
pub use signin::SignIn;

mod signup;
pub use signup::SignUp;

mod identity;
pub use identity::{SignInCallback, SignInIdentity};

mod accept_invite;
pub use accept_invite::AcceptInvite;

mod dashboard;
pub use dashboard::{Dashboard, DashboardActivity, DashboardOverview};

mod feedback;
pub use feedback::FeedbackBoard;

mod employees;
pub use employees::Employees;

mod worklog;
pub use worklog::WorkLog;

mod company_values;
pub use company_values::CompanyValues;

mod recognition;
pub use recognition::Recognitions;

mod settings;
pub use settings::Settings;

mod not_found;
pub use not_found::NotFound;

use api::{Role, UserInfo};
use ui::components::SelectOption;

/// Users who can be picked as someone's manager, excluding `except`.
pub(crate) fn manager_options(users: &[UserInfo], except: Option<&str>) -> Vec<SelectOption> {
    users
        .iter()
        .filter(|u| u.role != Role::Employee && Some(u.id.as_str()) != except)
        .map(|u| SelectOption::new(u.id.clone(), u.display_name()))
        .collect()
}
