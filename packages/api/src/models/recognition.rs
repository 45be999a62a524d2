use reqwest::Url;
use serde::{Deserialize, Serialize};

use super::company_value::CompanyValue;
use super::reference::{Identified, Ref};
use super::user::UserSummary;

const SHARE_INTENT_URL: &str = "https://twitter.com/intent/tweet";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recognition {
    #[serde(rename = "_id")]
    pub id: String,
    pub from_user: Ref<UserSummary>,
    pub to_user: Ref<UserSummary>,
    pub company_value: Ref<CompanyValue>,
    #[serde(default)]
    pub description: String,
}

impl Recognition {
    pub fn sender_id(&self) -> &str {
        self.from_user.id()
    }

    pub fn recipient_id(&self) -> &str {
        self.to_user.id()
    }

    /// Title of the tagged value, when the backend populated it.
    pub fn value_title(&self) -> Option<&str> {
        self.company_value.populated().map(|v| v.title.as_str())
    }

    /// Public share link offered to the recipient.
    pub fn share_url(&self) -> Option<String> {
        Url::parse_with_params(SHARE_INTENT_URL, &[("text", self.description.as_str())])
            .ok()
            .map(String::from)
    }
}

impl Identified for Recognition {
    fn id(&self) -> &str {
        &self.id
    }
}

/// `to_user` and `company_value` are ids.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecognitionPayload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub to_user: String,
    pub company_value: String,
    pub description: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_populated_recognition() {
        let rec: Recognition = serde_json::from_value(json!({
            "_id": "r1",
            "fromUser": {"_id": "u1", "firstName": "Ada", "lastName": "Lovelace"},
            "toUser": "u2",
            "companyValue": {"_id": "v1", "title": "Ownership", "description": "..."},
            "description": "Shipped the importer"
        }))
        .unwrap();
        assert_eq!(rec.sender_id(), "u1");
        assert_eq!(rec.recipient_id(), "u2");
        assert_eq!(rec.value_title(), Some("Ownership"));
        assert_eq!(
            rec.share_url().as_deref(),
            Some("https://twitter.com/intent/tweet?text=Shipped+the+importer")
        );
    }
}
