//! Request models for form submissions and query strings.

pub mod auth;
pub mod category;
pub mod query;
pub mod recipe;

pub use auth::*;
pub use category::*;
pub use query::*;
pub use recipe::*;
