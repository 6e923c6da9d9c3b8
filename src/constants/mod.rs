//! Application constants module.
//!
//! Centralizes the strings shared across layers: collection names, error and
//! success messages, machine-readable error codes, and pagination settings.

pub mod collections;
pub mod error_codes;
pub mod errors;
pub mod messages;
pub mod pagination;

pub use collections::*;
pub use error_codes::*;
pub use errors::*;
pub use messages::*;
pub use pagination::*;
