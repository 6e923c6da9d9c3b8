//! Offset pagination for the recipe listing.
//!
//! A caller asks for `limit` recipes starting after `offset` of them. Both
//! values arrive from a hand-editable URL, so the offset is clamped into
//! `0..=num_results` before the query runs. The navigation links are built
//! from the clamped offset without clamping them again: a previous-page link
//! may carry a negative offset and is corrected when it is followed.

use crate::constants::{
    CODE_INVALID_QUERY, DOCUMENTS_PATH, ERR_LIMIT_NOT_INTEGER, ERR_LIMIT_NOT_POSITIVE,
    ERR_LIMIT_REQUIRED, ERR_OFFSET_NOT_INTEGER, ERR_OFFSET_REQUIRED, MIN_PAGE_LIMIT,
};
use crate::errors::ApiError;
use crate::models::PageParams;

/// A validated `limit`/`offset` pair, offset not yet clamped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub limit: i64,
    pub offset: i64,
}

impl PageRequest {
    pub fn new(limit: i64, offset: i64) -> Result<Self, ApiError> {
        if limit < MIN_PAGE_LIMIT {
            return Err(ApiError::bad_request(
                CODE_INVALID_QUERY,
                ERR_LIMIT_NOT_POSITIVE,
            ));
        }
        Ok(Self { limit, offset })
    }

    /// Parse the raw query parameters; both are required integers.
    pub fn from_params(params: &PageParams) -> Result<Self, ApiError> {
        let limit = parse_param(
            params.limit.as_deref(),
            ERR_LIMIT_REQUIRED,
            ERR_LIMIT_NOT_INTEGER,
        )?;
        let offset = parse_param(
            params.offset.as_deref(),
            ERR_OFFSET_REQUIRED,
            ERR_OFFSET_NOT_INTEGER,
        )?;
        Self::new(limit, offset)
    }
}

fn parse_param(raw: Option<&str>, missing: &str, not_integer: &str) -> Result<i64, ApiError> {
    let raw = raw
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .ok_or_else(|| ApiError::bad_request(CODE_INVALID_QUERY, missing))?;
    raw.parse::<i64>()
        .map_err(|_| ApiError::bad_request(CODE_INVALID_QUERY, not_integer))
}

/// The page actually served: the request with its offset clamped against the
/// collection size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub limit: i64,
    pub offset: i64,
    pub num_results: u64,
}

impl PageWindow {
    pub fn clamp(request: PageRequest, num_results: u64) -> Self {
        let total = i64::try_from(num_results).unwrap_or(i64::MAX);
        let mut offset = request.offset;
        if offset < 0 {
            offset = 0;
        }
        if offset > total {
            offset = total;
        }
        Self {
            limit: request.limit,
            offset,
            num_results,
        }
    }

    /// Number of documents to skip; never negative after clamping.
    pub fn skip(&self) -> u64 {
        self.offset.max(0) as u64
    }

    pub fn next_url(&self) -> String {
        page_url(self.limit, self.offset.saturating_add(self.limit))
    }

    pub fn prev_url(&self) -> String {
        page_url(self.limit, self.offset.saturating_sub(self.limit))
    }
}

/// Link to the recipe listing for the given page.
pub fn page_url(limit: i64, offset: i64) -> String {
    format!("{}?limit={}&offset={}", DOCUMENTS_PATH, limit, offset)
}
