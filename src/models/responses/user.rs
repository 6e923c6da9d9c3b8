//! User-related response models.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::User;

/// User data returned in API responses (without the password hash)
#[derive(Debug, Serialize, Deserialize, Clone, ToSchema)]
pub struct UserResponse {
    #[schema(example = "507f1f77bcf86cd799439011")]
    pub id: String,
    #[schema(example = "johndoe")]
    pub username: String,
    #[schema(example = "john@example.com")]
    pub email: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id.map(|id| id.to_hex()).unwrap_or_default(),
            username: user.username,
            email: user.email,
        }
    }
}

/// Response for a successful registration or sign-in
#[derive(Debug, Serialize, ToSchema)]
pub struct AuthResponse {
    /// Whether the request was successful
    pub success: bool,
    /// Response message
    #[schema(example = "Welcome, johndoe")]
    pub message: String,
    /// Session token, also set as the `session` cookie
    #[schema(example = "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...")]
    pub token: String,
    /// Page the client should continue to
    #[schema(example = "/myrecipes/johndoe")]
    pub redirect_url: String,
    /// User information
    pub user: UserResponse,
}
