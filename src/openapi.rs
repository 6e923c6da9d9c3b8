use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::models::{
    AuthResponse, CategoryForm, CategoryResponse, DifficultyResponse, EditRecipeResponse,
    ErrorResponse, HealthResponse, MyRecipesResponse, RecipeForm, RecipeFormOptions, RecipePage,
    RecipeResponse, RegisterForm, SearchForm, SearchResponse, ShareFlag, SignInForm, UserResponse,
};

/// OpenAPI documentation for the Recipe Book API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Recipe Book API",
        version = "1.0.0",
        description = "Share, browse and search recipes. Listing is offset-paginated; search is full-text over recipe names, descriptions and categories.",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development server")
    ),
    tags(
        (name = "Health", description = "Banner and health check"),
        (name = "Authentication", description = "Registration, sign-in and sign-out"),
        (name = "Recipes", description = "Paged listing, search and recipe CRUD"),
        (name = "Categories", description = "Category management")
    ),
    paths(
        crate::routes::home,
        crate::routes::health_check,
        crate::handlers::documents,
        crate::handlers::search_form,
        crate::handlers::search_query,
        crate::handlers::get_recipes,
        crate::handlers::view_recipe,
        crate::handlers::my_recipes,
        crate::handlers::add_recipe_form,
        crate::handlers::add_recipe,
        crate::handlers::edit_recipe_form,
        crate::handlers::edit_recipe,
        crate::handlers::delete_recipe,
        crate::handlers::join_free,
        crate::handlers::sign_in,
        crate::handlers::sign_out,
        crate::handlers::get_categories,
        crate::handlers::add_category,
        crate::handlers::edit_category_form,
        crate::handlers::edit_category,
        crate::handlers::delete_category
    ),
    components(
        schemas(
            RegisterForm,
            SignInForm,
            RecipeForm,
            CategoryForm,
            SearchForm,
            ShareFlag,
            RecipeResponse,
            RecipePage,
            SearchResponse,
            MyRecipesResponse,
            CategoryResponse,
            DifficultyResponse,
            RecipeFormOptions,
            EditRecipeResponse,
            UserResponse,
            AuthResponse,
            ErrorResponse,
            HealthResponse
        )
    ),
    modifiers(&SecurityAddon)
)]
pub struct ApiDoc;

/// Session cookie security scheme
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "session_cookie",
                SecurityScheme::ApiKey(ApiKey::Cookie(ApiKeyValue::with_description(
                    "session",
                    "Session token set by /sign_in and /join_free",
                ))),
            );
        }
    }
}
