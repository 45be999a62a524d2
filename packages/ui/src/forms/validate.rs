//! Field checks shared by the entity forms.

use chrono::NaiveDate;

use super::FieldErrors;

pub const DATE_FORMAT: &str = "%Y-%m-%d";

pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

pub fn required(errors: &mut FieldErrors, field: &'static str, value: &str) {
    if is_blank(value) {
        errors.insert(field);
    }
}

/// Required, and a number greater than zero.
pub fn positive_number(errors: &mut FieldErrors, field: &'static str, value: &str) {
    if parse_positive(value).is_none() {
        errors.insert(field);
    }
}

/// Required, and a `YYYY-MM-DD` calendar date.
pub fn date(errors: &mut FieldErrors, field: &'static str, value: &str) {
    if NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).is_err() {
        errors.insert(field);
    }
}

pub fn parse_positive(value: &str) -> Option<f64> {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|n| n.is_finite() && *n > 0.0)
}

/// Date part of a backend timestamp, for seeding date inputs.
pub fn date_part(value: &str) -> String {
    value
        .split_once('T')
        .map_or(value, |(day, _)| day)
        .to_string()
}

/// Number rendered for a text input: `8` rather than `8.0`.
pub fn number_text(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positive_number() {
        assert_eq!(parse_positive(" 7.5 "), Some(7.5));
        assert_eq!(parse_positive("0"), None);
        assert_eq!(parse_positive("-2"), None);
        assert_eq!(parse_positive("eight"), None);
    }

    #[test]
    fn test_date() {
        let mut errors = FieldErrors::new();
        date(&mut errors, "ok", "2024-01-05");
        date(&mut errors, "bad", "2024-02-30");
        date(&mut errors, "empty", "");
        assert!(!errors.has("ok"));
        assert!(errors.has("bad"));
        assert!(errors.has("empty"));
    }

    #[test]
    fn test_seed_helpers() {
        assert_eq!(date_part("1990-04-01T00:00:00.000Z"), "1990-04-01");
        assert_eq!(number_text(8.0), "8");
        assert_eq!(number_text(12.5), "12.5");
    }
}
