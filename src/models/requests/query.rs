//! Query-string and search payloads.

use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

/// Raw `limit`/`offset` query parameters of the recipe listing.
///
/// Kept as strings so that a missing or non-numeric value is reported as a
/// `BadRequest` naming the parameter instead of a generic extractor failure.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PageParams {
    /// Maximum number of recipes on the page (>= 1)
    #[param(value_type = i64, example = 6)]
    pub limit: Option<String>,
    /// Number of leading recipes to skip; clamped into `0..=total`
    #[param(value_type = i64, example = 0)]
    pub offset: Option<String>,
}

/// Free-text recipe search, submitted as a form field or a query parameter.
///
/// A missing or blank query is rejected by the search service.
#[derive(Debug, Deserialize, ToSchema, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SearchForm {
    #[schema(example = "chocolate cake")]
    pub query: Option<String>,
}
