//! Error code constants for API responses.
//!
//! These codes provide a machine-readable identifier for each error type,
//! making it easier for API clients to handle errors programmatically.

// Validation errors
pub const CODE_VALIDATION_FAILED: &str = "VALIDATION_FAILED";
pub const CODE_INVALID_QUERY: &str = "INVALID_QUERY";
pub const CODE_INVALID_FORM: &str = "INVALID_FORM";

// Session errors
pub const CODE_AUTH_REQUIRED: &str = "AUTH_REQUIRED";
pub const CODE_INVALID_CREDENTIALS: &str = "INVALID_CREDENTIALS";

// User errors
pub const CODE_USERNAME_EXISTS: &str = "USERNAME_EXISTS";
pub const CODE_PASSWORD_MISMATCH: &str = "PASSWORD_MISMATCH";

// Recipe and category errors
pub const CODE_RECIPE_NOT_FOUND: &str = "RECIPE_NOT_FOUND";
pub const CODE_CATEGORY_NOT_FOUND: &str = "CATEGORY_NOT_FOUND";
pub const CODE_INVALID_ID: &str = "INVALID_ID";

// Generic errors
pub const CODE_BAD_REQUEST: &str = "BAD_REQUEST";
pub const CODE_INTERNAL_ERROR: &str = "INTERNAL_ERROR";
