//! Section validation rules.
//!
//! Validation always recomputes the whole error map for a section; stale
//! errors never survive a revalidation.

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;

use super::{fields, FieldId, FieldValue, SectionId};

/// Matches `local@domain.tld` with no whitespace on either side of the `@`.
static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("Invalid email regex")
});

/// Rebuild the error map for one section.
///
/// Choice fields are checked against their option lists; the account section
/// additionally applies the email and username rules. The username length
/// checks run in a fixed order and the over-length message overwrites the
/// under-length one (last write wins).
pub fn validate(section: SectionId, values: &[(FieldId, FieldValue)]) -> HashMap<FieldId, String> {
    let mut errors = HashMap::new();

    let lookup = |field: &str| -> Option<&FieldValue> {
        values.iter().find(|(id, _)| *id == field).map(|(_, v)| v)
    };

    for spec in fields(section) {
        if !spec.is_choice() {
            continue;
        }
        if let Some(FieldValue::Choice(value)) = lookup(spec.id) {
            if spec.option_index(value).is_none() {
                errors.insert(spec.id, spec.invalid_message.to_string());
            }
        }
    }

    if section == SectionId::Account {
        if let Some(FieldValue::Text(email)) = lookup("email") {
            if !EMAIL_REGEX.is_match(email) {
                errors.insert("email", "Enter a valid email address".to_string());
            }
        }
        if let Some(FieldValue::Text(username)) = lookup("username") {
            // Length bounds count the raw string; trim only guards emptiness,
            // so surrounding spaces count toward both limits.
            let len = username.chars().count();
            if username.trim().is_empty() || len < 3 {
                errors.insert(
                    "username",
                    "Username must be at least 3 characters".to_string(),
                );
            }
            if len > 20 {
                errors.insert(
                    "username",
                    "Username must be less than 20 characters".to_string(),
                );
            }
        }
    }

    errors
}
