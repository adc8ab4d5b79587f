//! Advisory field validation for the profile form.
//!
//! The form layer runs these checks before calling
//! [`ProfileStore::save_profile`](super::ProfileStore::save_profile) and
//! shows failures as messages next to the field. Nothing here blocks a
//! store write.
//!
//! | field | rule |
//! |---|---|
//! | first/last name | required, 2-25 chars, letters/spaces/hyphens/apostrophes |
//! | email | required, `local@domain.tld`, max 50 chars |
//! | address | optional, 5-100 chars |
//! | city/state/country | optional, letters and spaces, 2-30 chars |
//! | zip | optional, 5-10 digits |
//! | phone | optional, exactly 10 digits |

use std::sync::LazyLock;

use regex::Regex;

use cartwheel_core::Email;

use super::{ProfileField, UserProfile};

static NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z' -]+$").expect("Invalid regex"));

static PLACE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z]+(?: [A-Za-z]+)*$").expect("Invalid regex"));

static ZIP_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{5,10}$").expect("Invalid regex"));

static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{10}$").expect("Invalid regex"));

/// An advisory validation failure for one field.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{field}: {message}")]
pub struct FieldError {
    pub field: ProfileField,
    pub message: String,
}

impl FieldError {
    fn new(field: ProfileField, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// Validate a single field value.
///
/// # Errors
///
/// Returns a [`FieldError`] describing the first rule the value breaks.
pub fn validate_field(field: ProfileField, value: &str) -> Result<(), FieldError> {
    let trimmed = value.trim();
    match field {
        ProfileField::FirstName | ProfileField::LastName => validate_name(field, trimmed),
        ProfileField::Email => validate_email(field, trimmed),
        ProfileField::Address => validate_address(field, trimmed),
        ProfileField::City | ProfileField::State | ProfileField::Country => {
            validate_place(field, trimmed)
        }
        ProfileField::Zip => validate_optional_pattern(
            field,
            trimmed,
            &ZIP_RE,
            "must be 5 to 10 digits",
        ),
        ProfileField::Phone => validate_optional_pattern(
            field,
            trimmed,
            &PHONE_RE,
            "must be exactly 10 digits",
        ),
        ProfileField::AvatarUrl => Ok(()),
    }
}

/// Validate every field of a profile, collecting all failures.
#[must_use]
pub fn validate_profile(profile: &UserProfile) -> Vec<FieldError> {
    ProfileField::ALL
        .into_iter()
        .filter_map(|field| validate_field(field, profile.get(field)).err())
        .collect()
}

fn validate_name(field: ProfileField, trimmed: &str) -> Result<(), FieldError> {
    if trimmed.is_empty() {
        return Err(FieldError::new(field, "is required"));
    }
    if trimmed.chars().count() < 2 {
        return Err(FieldError::new(field, "must be at least 2 characters"));
    }
    if trimmed.chars().count() > 25 {
        return Err(FieldError::new(field, "must be at most 25 characters"));
    }
    if !NAME_RE.is_match(trimmed) {
        return Err(FieldError::new(
            field,
            "may only contain letters, spaces, hyphens, and apostrophes",
        ));
    }
    Ok(())
}

fn validate_email(field: ProfileField, trimmed: &str) -> Result<(), FieldError> {
    if trimmed.is_empty() {
        return Err(FieldError::new(field, "is required"));
    }
    Email::parse(trimmed)
        .map(|_| ())
        .map_err(|e| FieldError::new(field, e.to_string()))
}

fn validate_address(field: ProfileField, trimmed: &str) -> Result<(), FieldError> {
    if trimmed.is_empty() {
        return Ok(());
    }
    if trimmed.chars().count() < 5 {
        return Err(FieldError::new(field, "must be at least 5 characters"));
    }
    if trimmed.chars().count() > 100 {
        return Err(FieldError::new(field, "must be at most 100 characters"));
    }
    Ok(())
}

fn validate_place(field: ProfileField, trimmed: &str) -> Result<(), FieldError> {
    if trimmed.is_empty() {
        return Ok(());
    }
    if trimmed.chars().count() < 2 {
        return Err(FieldError::new(field, "must be at least 2 characters"));
    }
    if trimmed.chars().count() > 30 {
        return Err(FieldError::new(field, "must be at most 30 characters"));
    }
    if !PLACE_RE.is_match(trimmed) {
        return Err(FieldError::new(field, "may only contain letters"));
    }
    Ok(())
}

fn validate_optional_pattern(
    field: ProfileField,
    trimmed: &str,
    pattern: &Regex,
    message: &str,
) -> Result<(), FieldError> {
    if trimmed.is_empty() || pattern.is_match(trimmed) {
        Ok(())
    } else {
        Err(FieldError::new(field, message))
    }
}
