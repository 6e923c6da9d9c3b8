//! Error message constants used throughout the application.

// Session errors
pub const ERR_AUTH_REQUIRED: &str = "You need to sign in to do that";
pub const ERR_INVALID_CREDENTIALS: &str = "Incorrect Username and/or Password";

// User errors
pub const ERR_USERNAME_EXISTS: &str = "Username already exists, please choose another name.";
pub const ERR_PASSWORD_MISMATCH: &str = "Password does not match";

// Recipe and category errors
pub const ERR_RECIPE_NOT_FOUND: &str = "Recipe not found";
pub const ERR_CATEGORY_NOT_FOUND: &str = "Category not found";
pub const ERR_INVALID_RECIPE_ID: &str = "Invalid recipe ID format";
pub const ERR_INVALID_CATEGORY_ID: &str = "Invalid category ID format";
pub const ERR_FAILED_FETCH_RECIPE: &str = "Failed to fetch stored recipe";

// Query errors
pub const ERR_LIMIT_REQUIRED: &str = "Query parameter 'limit' is required";
pub const ERR_OFFSET_REQUIRED: &str = "Query parameter 'offset' is required";
pub const ERR_LIMIT_NOT_INTEGER: &str = "Query parameter 'limit' must be an integer";
pub const ERR_OFFSET_NOT_INTEGER: &str = "Query parameter 'offset' must be an integer";
pub const ERR_LIMIT_NOT_POSITIVE: &str = "Query parameter 'limit' must be at least 1";
pub const ERR_SEARCH_QUERY_REQUIRED: &str = "Search query is required";
pub const ERR_MALFORMED_QUERY: &str = "Malformed query string";
pub const ERR_MALFORMED_FORM: &str = "Malformed form submission";

// Validation errors
pub const ERR_INVALID_USERNAME_FORMAT: &str =
    "Username can only contain letters, numbers, underscores, and hyphens";
