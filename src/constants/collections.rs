//! MongoDB collection names.

pub const COLLECTION_RECIPES: &str = "recipes";
pub const COLLECTION_CATEGORIES: &str = "categories";
pub const COLLECTION_DIFFICULTY: &str = "difficulty";
pub const COLLECTION_USERS: &str = "users";
