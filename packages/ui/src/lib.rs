//! Shared UI for the HR workspace: session and navigation logic, the form
//! controllers, and the Dioxus components the screens are built from.
//!
//! The logic modules ([`session`], [`routes`], [`list`], [`forms`],
//! [`ownership`], [`failure`], [`landing`]) are plain Rust and tested without
//! a renderer.

pub mod components;
pub mod dialogs;
pub mod failure;
pub mod fetch;
pub mod forms;
pub mod landing;
pub mod list;
pub mod ownership;
pub mod platform;
pub mod routes;
pub mod session;
pub mod stats;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

mod auth;
pub use auth::{
    report_failure, use_api, use_auth_strategy, use_services, use_session, AuthProvider,
    LogoutButton, SessionHandle,
};

pub use fetch::{use_list, use_remove, ListHandle};

mod navbar;
pub use navbar::NavBar;

pub mod notifications;
pub use notifications::{
    notify, notify_error, notify_success, use_notifications, NoticeHistory, NoticeLevel,
    NoticeToast,
};
