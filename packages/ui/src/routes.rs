//! # Role-gated screens and navigation
//!
//! Which signed-in screens a role may open is one static table
//! ([`screens_for`]). The navigation rail and the route guard both read it,
//! so what is shown and what is allowed cannot drift apart.
//!
//! | Screen | ADMIN | MANAGER | EMPLOYEE |
//! |--------|:-----:|:-------:|:--------:|
//! | Dashboard | ✓ | ✓ | ✓ |
//! | Feedback | ✓ | ✓ | ✓ |
//! | Employees | ✓ | ✓ | |
//! | Worklog | ✓ | ✓ | ✓ |
//! | Company values | ✓ | | |
//! | Recognition | ✓ | ✓ | ✓ |
//! | Settings | ✓ | ✓ | ✓ |

use api::Role;

use crate::session::SessionStatus;

/// A screen that requires a signed-in user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Screen {
    Dashboard,
    Feedback,
    Employees,
    Worklog,
    CompanyValues,
    Recognition,
    Settings,
}

impl Screen {
    pub fn title(&self) -> &'static str {
        match self {
            Screen::Dashboard => "Dashboard",
            Screen::Feedback => "Feedback",
            Screen::Employees => "Employees",
            Screen::Worklog => "Worklog",
            Screen::CompanyValues => "Company Values",
            Screen::Recognition => "Recognition",
            Screen::Settings => "Settings",
        }
    }

    pub fn path(&self) -> &'static str {
        match self {
            Screen::Dashboard => "/dashboard",
            Screen::Feedback => "/feedback",
            Screen::Employees => "/employees",
            Screen::Worklog => "/work-log",
            Screen::CompanyValues => "/company-values",
            Screen::Recognition => "/recognition",
            Screen::Settings => "/settings",
        }
    }

    pub fn inner_navs(&self) -> &'static [InnerNav] {
        match self {
            Screen::Dashboard => DASHBOARD_INNER,
            _ => &[],
        }
    }
}

const ADMIN_SCREENS: &[Screen] = &[
    Screen::Dashboard,
    Screen::Feedback,
    Screen::Employees,
    Screen::Worklog,
    Screen::CompanyValues,
    Screen::Recognition,
    Screen::Settings,
];

const MANAGER_SCREENS: &[Screen] = &[
    Screen::Dashboard,
    Screen::Feedback,
    Screen::Employees,
    Screen::Worklog,
    Screen::Recognition,
    Screen::Settings,
];

const EMPLOYEE_SCREENS: &[Screen] = &[
    Screen::Dashboard,
    Screen::Feedback,
    Screen::Worklog,
    Screen::Recognition,
    Screen::Settings,
];

/// Screens `role` may open, in navigation order.
pub fn screens_for(role: Role) -> &'static [Screen] {
    match role {
        Role::Admin => ADMIN_SCREENS,
        Role::Manager => MANAGER_SCREENS,
        Role::Employee => EMPLOYEE_SCREENS,
    }
}

pub fn can_access(screen: Screen, role: Role) -> bool {
    screens_for(role).contains(&screen)
}

/// Public page a blocked visitor is sent to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Redirect {
    SignIn,
}

impl Redirect {
    pub fn path(&self) -> &'static str {
        match self {
            Redirect::SignIn => "/signin",
        }
    }
}

/// What the shell does with a protected screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Render,
    /// The session is still being checked; show a spinner.
    Wait,
    Redirect(Redirect),
}

pub fn guard(screen: Screen, status: &SessionStatus) -> Access {
    match status {
        SessionStatus::Loading => Access::Wait,
        SessionStatus::Authenticated(user) if can_access(screen, user.role) => Access::Render,
        _ => Access::Redirect(Redirect::SignIn),
    }
}

/// Secondary navigation under a top-level screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InnerNav {
    pub title: &'static str,
    pub path: &'static str,
}

const DASHBOARD_INNER: &[InnerNav] = &[
    InnerNav {
        title: "Overview",
        path: "/dashboard/overview",
    },
    InnerNav {
        title: "Activity",
        path: "/dashboard/activity",
    },
];

/// One entry in the navigation rail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavItem {
    pub screen: Screen,
    pub title: &'static str,
    pub path: &'static str,
    pub inner: &'static [InnerNav],
}

impl NavItem {
    /// Where clicking the entry goes: its first inner nav, if any.
    pub fn target(&self) -> &'static str {
        self.inner.first().map_or(self.path, |inner| inner.path)
    }

    /// Whether `current_path` belongs to this entry.
    pub fn is_active(&self, current_path: &str) -> bool {
        current_path == self.path
            || current_path
                .strip_prefix(self.path)
                .is_some_and(|rest| rest.starts_with('/'))
    }
}

/// Navigation rail for `role`, built fresh from the table on every call.
pub fn navigation(role: Role) -> Vec<NavItem> {
    screens_for(role)
        .iter()
        .map(|&screen| NavItem {
            screen,
            title: screen.title(),
            path: screen.path(),
            inner: screen.inner_navs(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use api::UserInfo;

    use super::*;

    fn signed_in(role: Role) -> SessionStatus {
        SessionStatus::Authenticated(UserInfo {
            id: "u1".into(),
            role,
            ..Default::default()
        })
    }

    #[test]
    fn test_employee_is_redirected_from_restricted_screens() {
        let status = signed_in(Role::Employee);
        assert_eq!(
            guard(Screen::Employees, &status),
            Access::Redirect(Redirect::SignIn)
        );
        assert_eq!(
            guard(Screen::CompanyValues, &status),
            Access::Redirect(Redirect::SignIn)
        );
        assert_eq!(guard(Screen::Worklog, &status), Access::Render);
    }

    #[test]
    fn test_admin_renders_everything() {
        let status = signed_in(Role::Admin);
        for screen in ADMIN_SCREENS {
            assert_eq!(guard(*screen, &status), Access::Render);
        }
    }

    #[test]
    fn test_manager_cannot_manage_company_values() {
        assert!(can_access(Screen::Employees, Role::Manager));
        assert!(!can_access(Screen::CompanyValues, Role::Manager));
    }

    #[test]
    fn test_guard_waits_while_loading_and_redirects_anonymous() {
        assert_eq!(guard(Screen::Dashboard, &SessionStatus::Loading), Access::Wait);
        assert_eq!(
            guard(Screen::Dashboard, &SessionStatus::Unauthenticated),
            Access::Redirect(Redirect::SignIn)
        );
    }

    #[test]
    fn test_navigation_follows_table() {
        let titles: Vec<_> = navigation(Role::Employee).iter().map(|n| n.title).collect();
        assert_eq!(
            titles,
            ["Dashboard", "Feedback", "Worklog", "Recognition", "Settings"]
        );

        let dashboard = &navigation(Role::Admin)[0];
        assert_eq!(dashboard.target(), "/dashboard/overview");
        assert!(dashboard.is_active("/dashboard/activity"));
        assert!(!dashboard.is_active("/dashboards"));
    }
}
