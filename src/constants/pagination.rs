//! Pagination constants for the offset-based recipe listing.

/// Path the navigation links of a recipe page point back to.
pub const DOCUMENTS_PATH: &str = "/documents";

/// Smallest page size a caller may request.
pub const MIN_PAGE_LIMIT: i64 = 1;
