//! Common validation utilities and helpers.

use mongodb::bson::oid::ObjectId;
use validator::ValidationErrors;

use crate::constants::{CODE_INVALID_ID, CODE_PASSWORD_MISMATCH, ERR_PASSWORD_MISMATCH};
use crate::errors::ApiError;

/// Convert validator errors to ApiError::ValidationError.
///
/// Messages are sorted by field name so responses are stable.
///
/// # Example
/// ```ignore
/// form.validate().map_err(validation_errors_to_api_error)?;
/// ```
pub fn validation_errors_to_api_error(e: ValidationErrors) -> ApiError {
    let mut fields: Vec<_> = e.field_errors().into_iter().collect();
    fields.sort_by(|a, b| a.0.cmp(&b.0));
    let errors: Vec<String> = fields
        .into_iter()
        .flat_map(|(_, errs)| {
            errs.iter()
                .map(|e| e.message.clone().unwrap_or_default().to_string())
        })
        .collect();
    ApiError::validation(errors)
}

/// Validate that the password confirmation matches.
pub fn validate_password_match(password: &str, confirmation: &str) -> Result<(), ApiError> {
    if password != confirmation {
        return Err(ApiError::bad_request(
            CODE_PASSWORD_MISMATCH,
            ERR_PASSWORD_MISMATCH,
        ));
    }
    Ok(())
}

/// Parse a hex ObjectId taken from a path segment.
///
/// `message` names the kind of document the id refers to.
pub fn parse_object_id(id: &str, message: &str) -> Result<ObjectId, ApiError> {
    ObjectId::parse_str(id).map_err(|_| ApiError::bad_request(CODE_INVALID_ID, message))
}
