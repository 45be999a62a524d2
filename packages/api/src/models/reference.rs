use serde::{Deserialize, Serialize, Serializer};

/// Anything with a backend `_id`.
pub trait Identified {
    fn id(&self) -> &str;
}

/// A reference to another record: a bare id, or the populated document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Ref<T> {
    Populated(T),
    Id(String),
}

impl<T: Identified> Ref<T> {
    pub fn id(&self) -> &str {
        match self {
            Ref::Populated(doc) => doc.id(),
            Ref::Id(id) => id,
        }
    }

    pub fn populated(&self) -> Option<&T> {
        match self {
            Ref::Populated(doc) => Some(doc),
            Ref::Id(_) => None,
        }
    }
}

/// Writes whole numbers as JSON integers (`8`, not `8.0`).
pub(crate) fn whole_number<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    const EXACT: f64 = 9_007_199_254_740_992.0;
    if value.fract() == 0.0 && value.abs() < EXACT {
        serializer.serialize_i64(*value as i64)
    } else {
        serializer.serialize_f64(*value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::UserSummary;

    #[test]
    fn test_ref_accepts_id_or_document() {
        let bare: Ref<UserSummary> = serde_json::from_str(r#""u1""#).unwrap();
        assert_eq!(bare.id(), "u1");
        assert!(bare.populated().is_none());

        let doc: Ref<UserSummary> =
            serde_json::from_str(r#"{"_id":"u2","firstName":"Ada","lastName":"Lovelace"}"#)
                .unwrap();
        assert_eq!(doc.id(), "u2");
        assert_eq!(doc.populated().unwrap().first_name, "Ada");
    }

    #[derive(Serialize)]
    struct Amount(#[serde(serialize_with = "whole_number")] f64);

    #[test]
    fn test_whole_numbers_serialize_as_integers() {
        assert_eq!(serde_json::to_string(&Amount(8.0)).unwrap(), "8");
        assert_eq!(serde_json::to_string(&Amount(7.5)).unwrap(), "7.5");
    }
}
