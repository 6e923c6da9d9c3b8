//! Offset pagination response models.

use serde::Serialize;
use utoipa::ToSchema;

use crate::models::RecipeResponse;

/// One page of the recipe listing with navigation links
#[derive(Debug, Serialize, ToSchema)]
pub struct RecipePage {
    /// Whether the request was successful
    pub success: bool,
    /// Recipes on this page, in collection order
    pub data: Vec<RecipeResponse>,
    /// Requested page size
    #[schema(example = 6)]
    pub limit: i64,
    /// Offset actually used, after clamping
    #[schema(example = 0)]
    pub offset: i64,
    /// Total number of recipes in the collection
    #[schema(example = 10)]
    pub num_results: u64,
    /// Link to the following page
    #[schema(example = "/documents?limit=6&offset=6")]
    pub next_url: String,
    /// Link to the preceding page; its offset may be negative
    #[schema(example = "/documents?limit=6&offset=-6")]
    pub prev_url: String,
}
