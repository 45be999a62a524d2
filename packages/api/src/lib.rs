//! # API crate — backend client for the HR workspace
//!
//! Everything the frontends say to the REST backend goes through [`Api`]. It
//! wraps a [`Transport`] (the real one is [`HttpTransport`] over `reqwest`),
//! attaches the session token and tenant headers, and normalises every
//! response into `Result<ApiResponse<T>, ApiError>`.
//!
//! ## Modules
//!
//! | Module | Feature gate | Purpose |
//! |--------|-------------|---------|
//! | [`auth`] | — | Local-credential and identity-provider sign-in behind one [`Authenticator`] trait |
//! | [`client`] | — | [`Api`], request options, header attachment, response normalisation |
//! | [`error`] | — | [`ApiError`], its [`ErrorKind`] and the fixed user-facing messages |
//! | [`models`] | — | Wire records (`UserInfo`, `Feedback`, `Worklog`, …) and payloads |
//! | [`tenant`] | — | Tenant subdomain derived from the browser host |
//! | [`testing`] | `testing` | Recording [`testing::MockTransport`] for tests in this and other crates |
//! | [`transport`] | — | The [`Transport`] trait and [`HttpTransport`] |
//!
//! ## Domain functions
//!
//! One method on [`Api`] per backend operation, grouped by resource:
//!
//! - **Users**: `signup`, `signin`, `current_user`, `users`, `update_profile`, `invite`, `accept_invite`
//! - **Feedback**: `feedback`, `create_feedback`, `update_feedback`, `delete_feedback`
//! - **Worklog**: `worklogs`, `create_worklog`, `update_worklog`, `delete_worklog`
//! - **Company values**: `company_values`, `create_company_value`, `update_company_value`, `delete_company_value`
//! - **Recognition**: `recognitions`, `create_recognition`, `update_recognition`, `delete_recognition`
//! - **Dashboard**: `stats`
//!
//! Deletes pass the record id as the `id` query parameter; updates carry it in
//! the body. Nothing is retried, paginated or cached.

pub mod auth;
pub mod client;
mod company_values;
pub mod error;
mod feedback;
pub mod models;
mod recognition;
mod response;
mod stats;
pub mod tenant;
#[cfg(any(test, feature = "testing"))]
pub mod testing;
pub mod transport;
mod users;
mod worklog;

pub use auth::Authenticator;
pub use client::{Api, RequestOptions};
pub use error::{ApiError, ApiResult, ErrorKind, GENERIC_MESSAGE, TRANSPORT_MESSAGE};
pub use models::{
    AcceptInvitePayload, CompanyValue, CompanyValuePayload, Feedback, FeedbackPayload,
    Identified, InvitePayload, OrganizationStats, PersonalStats, ProfilePayload, Recognition,
    RecognitionPayload, Ref, Role, SignInGrant, SigninPayload, SignupPayload, Stats, TeamStats,
    UserInfo, UserSummary, Worklog, WorklogPayload,
};
pub use response::ApiResponse;
pub use tenant::subdomain_from_host;
pub use transport::{HttpTransport, Method, Transport};
