//! Profile validation tooling.

use tracing::{info, warn};

use cartwheel_stores::ProfileField;
use cartwheel_stores::profile::validate_field;

/// Errors that can occur in profile commands.
#[derive(Debug, thiserror::Error)]
pub enum ProfileCommandError {
    /// The field name is not part of the profile.
    #[error("Unknown field: {0}. Valid fields: first_name, last_name, email, address, city, state, zip, country, phone, avatar_url")]
    UnknownField(String),
}

/// Run one value through the advisory validation rules.
///
/// Prints the advisory result; a failing value is not an error, matching
/// the form layer where validation messages inform rather than block.
///
/// # Errors
///
/// Returns an error only if the field name itself is unknown.
pub fn validate(field: &str, value: &str) -> Result<(), ProfileCommandError> {
    let field: ProfileField = field
        .parse()
        .map_err(|_| ProfileCommandError::UnknownField(field.to_owned()))?;

    match validate_field(field, value) {
        Ok(()) => info!("{field}: ok"),
        Err(e) => warn!("{e}"),
    }
    Ok(())
}
