//! # Records exchanged with the backend
//!
//! Every type here is a verbatim mirror of a backend JSON document: camelCase
//! field names, `_id` identifiers, and references that may arrive either as a
//! bare id or as a populated sub-document ([`Ref`]).
//!
//! | Module | Records | Payloads |
//! |--------|---------|----------|
//! | [`user`] | [`UserInfo`], [`UserSummary`], [`Role`], [`SignInGrant`] | [`SignupPayload`], [`SigninPayload`], [`InvitePayload`], [`ProfilePayload`], [`AcceptInvitePayload`] |
//! | [`feedback`] | [`Feedback`] | [`FeedbackPayload`] |
//! | [`worklog`] | [`Worklog`] | [`WorklogPayload`] |
//! | [`company_value`] | [`CompanyValue`] | [`CompanyValuePayload`] |
//! | [`recognition`] | [`Recognition`] | [`RecognitionPayload`] |
//! | [`stats`] | [`Stats`] and its sections | — |
//!
//! Payloads carry an optional `id` that is only serialised when editing.

pub mod company_value;
pub mod feedback;
pub mod recognition;
mod reference;
pub mod stats;
pub mod user;
pub mod worklog;

pub use company_value::{CompanyValue, CompanyValuePayload};
pub use feedback::{Feedback, FeedbackPayload};
pub use recognition::{Recognition, RecognitionPayload};
pub use reference::{Identified, Ref};
pub use stats::{OrganizationStats, PersonalStats, Stats, TeamStats};
pub use user::{
    AcceptInvitePayload, InvitePayload, ProfilePayload, Role, SignInGrant, SigninPayload,
    SignupPayload, UserInfo, UserSummary,
};
pub use worklog::{Worklog, WorklogPayload};
