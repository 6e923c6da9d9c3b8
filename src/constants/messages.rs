//! Success message constants used throughout the application.

// Session messages
pub const MSG_REGISTERED: &str = "Registration successful!";
pub const MSG_LOGGED_OUT: &str = "You have been logged out";

// Recipe messages
pub const MSG_RECIPES: &str = "Recipes";
pub const MSG_RECIPE_FOUND: &str = "Recipe found";
pub const MSG_RECIPE_ADDED: &str = "Recipe Successfully Added";
pub const MSG_RECIPE_UPDATED: &str = "Recipe Successfully Updated";
pub const MSG_RECIPE_DELETED: &str = "Recipe Successfully Deleted";
pub const MSG_RECIPE_FORM: &str = "Recipe form options";
pub const MSG_MY_RECIPES: &str = "My recipes";

// Category messages
pub const MSG_CATEGORIES: &str = "Categories";
pub const MSG_CATEGORY_FOUND: &str = "Category found";
pub const MSG_CATEGORY_ADDED: &str = "New Category Added";
pub const MSG_CATEGORY_UPDATED: &str = "Category Successfully Updated";
pub const MSG_CATEGORY_DELETED: &str = "Category Successfully Deleted";
