//! HTTP request handlers organized by domain.

pub mod auth_handler;
pub mod category_handler;
pub mod recipe_handler;

pub use auth_handler::*;
pub use category_handler::*;
pub use recipe_handler::*;
