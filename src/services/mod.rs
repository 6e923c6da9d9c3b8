//! Services organized by domain concern.

pub mod auth_service;
pub mod category_service;
pub mod pagination;
pub mod recipe_service;
pub mod session_blacklist;

pub use auth_service::AuthService;
pub use category_service::CategoryService;
pub use pagination::PageRequest;
pub use recipe_service::{RecipeService, SearchOutcome};
pub use session_blacklist::SessionBlacklist;
