//! Response envelope shared by the recipe, category and account routes.

use serde::Serialize;
use utoipa::ToSchema;

/// `{ success, message, data }` body returned by every successful route
/// except the paged listing and search, which carry their own shapes.
///
/// `message` is the text a page would flash to the user, e.g.
/// "Recipe Successfully Added".
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn success(message: &str, data: T) -> Self {
        Self {
            success: true,
            message: message.to_string(),
            data: Some(data),
        }
    }
}

impl ApiResponse<()> {
    /// Flash message with no payload, e.g. after a delete or sign-out.
    pub fn message(message: &str) -> Self {
        Self {
            success: true,
            message: message.to_string(),
            data: None,
        }
    }
}

/// Body of every failed request, built by `ApiError`
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    #[schema(example = false)]
    pub success: bool,
    /// Machine-readable error code
    #[schema(example = "INVALID_QUERY")]
    pub code: String,
    /// Text shown to the user
    #[schema(example = "Query parameter 'limit' is required")]
    pub message: String,
    /// Per-field messages when a submitted form fails validation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<String>>,
}

/// Liveness body for `GET /health`
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    #[schema(example = "OK")]
    pub status: String,
    #[schema(example = "Server is running")]
    pub message: String,
}
