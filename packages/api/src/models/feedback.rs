use serde::{Deserialize, Serialize};

use super::reference::{Identified, Ref};
use super::user::UserSummary;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Feedback {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub is_anonymous: bool,
    /// The author. Anonymous feedback may arrive without it.
    #[serde(default)]
    pub user: Option<Ref<UserSummary>>,
}

impl Feedback {
    pub fn author_id(&self) -> Option<&str> {
        self.user.as_ref().map(Ref::id)
    }
}

impl Identified for Feedback {
    fn id(&self) -> &str {
        &self.id
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackPayload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub description: String,
    pub is_anonymous: bool,
}
