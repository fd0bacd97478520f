//! Author form validation: an ordered pipeline of per-field checks that
//! collects every failure instead of stopping at the first one.

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

static ALPHANUMERIC: Lazy<Regex> =
    Lazy::new(|| Regex::new("^[A-Za-z0-9]+$").expect("alphanumeric pattern compiles"));

/// A failed field rule: field name plus the message shown next to the form.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

/// Raw author form fields, exactly as submitted. Also serialized back into
/// the form template so a failed submission redisplays what was typed.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AuthorForm {
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub family_name: String,
    #[serde(default)]
    pub date_of_birth: String,
    #[serde(default)]
    pub date_of_death: String,
}

impl From<&crate::models::Author> for AuthorForm {
    fn from(author: &crate::models::Author) -> Self {
        Self {
            first_name: author.first_name.clone(),
            family_name: author.family_name.clone(),
            date_of_birth: author
                .date_of_birth
                .map(|d| d.format("%Y-%m-%d").to_string())
                .unwrap_or_default(),
            date_of_death: author
                .date_of_death
                .map(|d| d.format("%Y-%m-%d").to_string())
                .unwrap_or_default(),
        }
    }
}

/// Sanitized output of a fully valid submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorInput {
    pub first_name: String,
    pub family_name: String,
    pub date_of_birth: Option<NaiveDate>,
    pub date_of_death: Option<NaiveDate>,
}

/// Run every rule over the form. Either all fields pass and the sanitized
/// input is returned, or the full list of field errors is. Nothing is
/// persisted on failure.
pub fn validate_author(form: &AuthorForm) -> Result<AuthorInput, Vec<FieldError>> {
    let mut errors = Vec::new();

    let first_name = name_field("first_name", "First name", &form.first_name, &mut errors);
    let family_name = name_field("family_name", "Family name", &form.family_name, &mut errors);
    let date_of_birth = date_field("date_of_birth", "birth", &form.date_of_birth, &mut errors);
    let date_of_death = date_field("date_of_death", "death", &form.date_of_death, &mut errors);

    if errors.is_empty() {
        Ok(AuthorInput {
            first_name,
            family_name,
            date_of_birth,
            date_of_death,
        })
    } else {
        Err(errors)
    }
}

/// Trim, require at least one character, require alphanumeric, then
/// neutralize any markup in the kept value.
fn name_field(field: &'static str, label: &str, raw: &str, errors: &mut Vec<FieldError>) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        errors.push(FieldError {
            field,
            message: format!("{label} must be specified."),
        });
    } else if !ALPHANUMERIC.is_match(trimmed) {
        errors.push(FieldError {
            field,
            message: format!("{label} has non-alphanumeric characters."),
        });
    }
    tera::escape_html(trimmed)
}

/// Optional ISO-8601 date, normalized when present.
fn date_field(
    field: &'static str,
    label: &str,
    raw: &str,
    errors: &mut Vec<FieldError>,
) -> Option<NaiveDate> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    match NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        Ok(date) => Some(date),
        Err(_) => {
            errors.push(FieldError {
                field,
                message: format!("Invalid date of {label}"),
            });
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(first: &str, family: &str, birth: &str, death: &str) -> AuthorForm {
        AuthorForm {
            first_name: first.into(),
            family_name: family.into(),
            date_of_birth: birth.into(),
            date_of_death: death.into(),
        }
    }

    #[test]
    fn valid_submission_passes_with_normalized_dates() {
        let input = validate_author(&form("Jane", "Austen", "1775-12-16", "")).unwrap();
        assert_eq!(input.first_name, "Jane");
        assert_eq!(input.family_name, "Austen");
        assert_eq!(
            input.date_of_birth,
            NaiveDate::from_ymd_opt(1775, 12, 16)
        );
        assert_eq!(input.date_of_death, None);
    }

    #[test]
    fn names_are_trimmed_before_the_rules_run() {
        let input = validate_author(&form("  Jane ", " Austen  ", "", "")).unwrap();
        assert_eq!(input.first_name, "Jane");
        assert_eq!(input.family_name, "Austen");
    }

    #[test]
    fn empty_first_name_is_reported_by_field() {
        let errors = validate_author(&form("", "Austen", "", "")).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "first_name");
        assert_eq!(errors[0].message, "First name must be specified.");
    }

    #[test]
    fn non_alphanumeric_family_name_is_rejected() {
        let errors = validate_author(&form("Jane", "Au sten!", "", "")).unwrap_err();
        assert_eq!(errors[0].field, "family_name");
        assert_eq!(errors[0].message, "Family name has non-alphanumeric characters.");
    }

    #[test]
    fn bad_date_is_rejected_with_its_own_message() {
        let errors = validate_author(&form("Jane", "Austen", "16/12/1775", "")).unwrap_err();
        assert_eq!(errors[0].field, "date_of_birth");
        assert_eq!(errors[0].message, "Invalid date of birth");
    }

    #[test]
    fn all_failures_are_collected_in_field_order() {
        let errors = validate_author(&form("", "", "nope", "also-nope")).unwrap_err();
        let fields: Vec<_> = errors.iter().map(|e| e.field).collect();
        assert_eq!(
            fields,
            ["first_name", "family_name", "date_of_birth", "date_of_death"]
        );
    }
}
