//! User-related custom validators.

use lazy_static::lazy_static;
use regex::Regex;
use validator::ValidationError;

use crate::constants::ERR_INVALID_USERNAME_FORMAT;

lazy_static! {
    static ref USERNAME_PATTERN: Regex =
        Regex::new(r"^[A-Za-z0-9_-]+$").expect("username pattern is valid");
}

/// Custom validator for usernames.
/// Letters, digits, underscores and hyphens only.
pub fn validate_username_format(username: &str) -> Result<(), ValidationError> {
    if USERNAME_PATTERN.is_match(username) {
        return Ok(());
    }
    let mut error = ValidationError::new("invalid_username");
    error.message = Some(ERR_INVALID_USERNAME_FORMAT.into());
    Err(error)
}
