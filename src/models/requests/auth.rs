//! Registration and sign-in form models.

use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

use crate::validators::validate_username_format;

/// Form submitted by the registration page
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct RegisterForm {
    /// Unique username (3-50 characters, letters, numbers, underscores, hyphens only)
    #[validate(
        length(
            min = 3,
            max = 50,
            message = "Username must be between 3 and 50 characters"
        ),
        custom(function = "validate_username_format")
    )]
    #[schema(example = "johndoe")]
    pub username: String,
    /// Email address
    #[validate(email(message = "Invalid email format"))]
    #[schema(example = "john@example.com")]
    pub email: String,
    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    #[schema(example = "pancakes123")]
    pub password: String,
    /// Password confirmation, must equal `password`
    #[schema(example = "pancakes123")]
    pub password2: String,
}

/// Form submitted by the sign-in page
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct SignInForm {
    #[validate(length(min = 1, message = "Username is required"))]
    #[schema(example = "johndoe")]
    pub username: String,
    #[validate(length(min = 1, message = "Password is required"))]
    #[schema(example = "pancakes123")]
    pub password: String,
}
