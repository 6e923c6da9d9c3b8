//! Repository layer for database operations.
//!
//! Services talk to MongoDB only through the `RecipeStore`, `UserStore` and
//! `CategoryStore` traits, so every route can run against the in-memory
//! stores in tests.

pub mod category_repository;
pub mod recipe_repository;
pub mod user_repository;

#[cfg(test)]
pub mod memory;

pub use category_repository::{CategoryRepository, CategoryStore};
pub use recipe_repository::{RecipeRepository, RecipeStore};
pub use user_repository::{UserRepository, UserStore};

#[cfg(test)]
pub use memory::{MemoryCategoryStore, MemoryRecipeStore, MemoryUserStore};
