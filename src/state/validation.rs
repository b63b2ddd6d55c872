//! Per-field validation rules
//!
//! Every rule is a pure function of the raw field value. A failing rule
//! yields a static message; the empty string means the value is valid.
//! Sub-rules short-circuit, so the first failing check wins (length before
//! charset for usernames, length before composition for passwords).

use std::sync::LazyLock;

use regex::Regex;

use super::form::FieldId;

static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("invalid email pattern"));

static USERNAME_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9_]+$").expect("invalid username pattern"));

static PAN_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z]{5}[0-9]{4}[A-Z]{1}$").expect("invalid PAN pattern"));

/// Validate a single field value.
///
/// Returns the error message to surface, or `""` when the value passes.
pub fn validate(field: FieldId, value: &str) -> &'static str {
    match field {
        FieldId::FirstName | FieldId::LastName => {
            if value.trim().chars().count() < 2 {
                "Must be at least 2 characters"
            } else {
                ""
            }
        }
        FieldId::Username => {
            if value.trim().chars().count() < 3 {
                "Must be at least 3 characters"
            } else if !USERNAME_PATTERN.is_match(value) {
                "Only letters, numbers, and underscores allowed"
            } else {
                ""
            }
        }
        FieldId::Email => {
            if !EMAIL_PATTERN.is_match(value) {
                "Invalid email format"
            } else {
                ""
            }
        }
        FieldId::Password => {
            if value.chars().count() < 8 {
                "Must be at least 8 characters"
            } else if !has_password_composition(value) {
                "Must contain uppercase, lowercase, and number"
            } else {
                ""
            }
        }
        FieldId::PhoneNumber => {
            if !is_digits(value, 10) {
                "Must be 10 digits"
            } else {
                ""
            }
        }
        FieldId::Country => {
            if value.is_empty() {
                "Please select a country"
            } else {
                ""
            }
        }
        FieldId::City => {
            if value.is_empty() {
                "Please select a city"
            } else {
                ""
            }
        }
        FieldId::PanNumber => {
            if !PAN_PATTERN.is_match(value) {
                "Invalid PAN format (e.g., ABCDE1234F)"
            } else {
                ""
            }
        }
        FieldId::AadharNumber => {
            if !is_digits(value, 12) {
                "Must be 12 digits"
            } else {
                ""
            }
        }
    }
}

/// Exactly `len` ASCII digits, nothing else
fn is_digits(value: &str, len: usize) -> bool {
    value.len() == len && value.bytes().all(|b| b.is_ascii_digit())
}

fn has_password_composition(value: &str) -> bool {
    value.chars().any(|c| c.is_ascii_lowercase())
        && value.chars().any(|c| c.is_ascii_uppercase())
        && value.chars().any(|c| c.is_ascii_digit())
}
