//! Recipe handlers: paged listing, search, viewing and CRUD.
//!
//! The handlers are generic over the `RecipeStore` behind `RecipeService`;
//! the server registers them for `RecipeRepository`.

use actix_web::{web, HttpResponse};
use log::{debug, info};
use validator::Validate;

use crate::constants::{
    MSG_MY_RECIPES, MSG_RECIPES, MSG_RECIPE_ADDED, MSG_RECIPE_DELETED, MSG_RECIPE_FORM,
    MSG_RECIPE_FOUND, MSG_RECIPE_UPDATED,
};
use crate::errors::ApiError;
use crate::models::{
    ApiResponse, EditRecipeResponse, MyRecipesResponse, PageParams, RecipeForm, RecipePage,
    RecipeResponse, SearchForm, SearchResponse, Session,
};
use crate::repositories::{CategoryStore, RecipeStore};
use crate::services::{CategoryService, PageRequest, RecipeService, SearchOutcome};
use crate::validators::validation_errors_to_api_error;

/// List one page of recipes
///
/// Out-of-range offsets are clamped into `0..=num_results`. The returned
/// `prev_url` is built from the clamped offset and may carry a negative
/// offset, which is clamped again when followed.
#[utoipa::path(
    get,
    path = "/documents",
    tag = "Recipes",
    params(PageParams),
    responses(
        (status = 200, description = "One page of recipes", body = RecipePage),
        (status = 400, description = "Missing or non-numeric limit/offset", body = crate::models::ErrorResponse)
    )
)]
pub async fn documents<S: RecipeStore + 'static>(
    recipe_service: web::Data<RecipeService<S>>,
    query: web::Query<PageParams>,
) -> Result<HttpResponse, ApiError> {
    let request = PageRequest::from_params(&query)?;
    let page = recipe_service.list_page(request).await?;
    let window = page.window;

    Ok(HttpResponse::Ok().json(RecipePage {
        success: true,
        data: page.recipes.into_iter().map(RecipeResponse::from).collect(),
        limit: window.limit,
        offset: window.offset,
        num_results: window.num_results,
        next_url: window.next_url(),
        prev_url: window.prev_url(),
    }))
}

/// Full-text search from a submitted search form
#[utoipa::path(
    post,
    path = "/search",
    tag = "Recipes",
    request_body(content = SearchForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "Matching recipes, or an empty list with no_matches set", body = SearchResponse),
        (status = 400, description = "Missing or blank query", body = crate::models::ErrorResponse)
    )
)]
pub async fn search_form<S: RecipeStore + 'static>(
    recipe_service: web::Data<RecipeService<S>>,
    form: web::Form<SearchForm>,
) -> Result<HttpResponse, ApiError> {
    run_search(&recipe_service, form.into_inner()).await
}

/// Full-text search from the query string
#[utoipa::path(
    get,
    path = "/search",
    tag = "Recipes",
    params(SearchForm),
    responses(
        (status = 200, description = "Matching recipes, or an empty list with no_matches set", body = SearchResponse),
        (status = 400, description = "Missing or blank query", body = crate::models::ErrorResponse)
    )
)]
pub async fn search_query<S: RecipeStore + 'static>(
    recipe_service: web::Data<RecipeService<S>>,
    query: web::Query<SearchForm>,
) -> Result<HttpResponse, ApiError> {
    run_search(&recipe_service, query.into_inner()).await
}

async fn run_search<S: RecipeStore>(
    recipe_service: &RecipeService<S>,
    form: SearchForm,
) -> Result<HttpResponse, ApiError> {
    let query = form.query.unwrap_or_default();
    let outcome = recipe_service.search(&query).await?;
    let query = query.trim().to_string();

    let response = match outcome {
        SearchOutcome::Matches(recipes) => SearchResponse {
            success: true,
            message: format!("{} matches for \"{}\"", recipes.len(), query),
            query,
            no_matches: false,
            data: recipes.into_iter().map(RecipeResponse::from).collect(),
        },
        SearchOutcome::NoMatches => SearchResponse {
            success: true,
            message: format!("0 matches for \"{}\"", query),
            query,
            no_matches: true,
            data: Vec::new(),
        },
    };

    Ok(HttpResponse::Ok().json(response))
}

/// List every recipe
#[utoipa::path(
    get,
    path = "/get_recipes",
    tag = "Recipes",
    responses(
        (status = 200, description = "All recipes in collection order", body = [RecipeResponse])
    )
)]
pub async fn get_recipes<S: RecipeStore + 'static>(
    recipe_service: web::Data<RecipeService<S>>,
) -> Result<HttpResponse, ApiError> {
    let recipes: Vec<RecipeResponse> = recipe_service
        .list_all()
        .await?
        .into_iter()
        .map(RecipeResponse::from)
        .collect();

    Ok(HttpResponse::Ok().json(ApiResponse::success(MSG_RECIPES, recipes)))
}

/// View a single recipe
#[utoipa::path(
    get,
    path = "/view_recipe/{id}",
    tag = "Recipes",
    params(
        ("id" = String, Path, description = "Recipe ID")
    ),
    responses(
        (status = 200, description = "Recipe found", body = RecipeResponse),
        (status = 400, description = "Invalid recipe ID", body = crate::models::ErrorResponse),
        (status = 404, description = "Recipe not found", body = crate::models::ErrorResponse)
    )
)]
pub async fn view_recipe<S: RecipeStore + 'static>(
    recipe_service: web::Data<RecipeService<S>>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let recipe = recipe_service.get_recipe(&path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(
        MSG_RECIPE_FOUND,
        RecipeResponse::from(recipe),
    )))
}

/// Recipes created by the signed-in user
///
/// The path segment is informational; the listing always belongs to the
/// session user.
#[utoipa::path(
    get,
    path = "/myrecipes/{username}",
    tag = "Recipes",
    params(
        ("username" = String, Path, description = "Username shown in the page URL")
    ),
    responses(
        (status = 200, description = "The session user's recipes", body = MyRecipesResponse),
        (status = 401, description = "Not signed in", body = crate::models::ErrorResponse)
    ),
    security(
        ("session_cookie" = [])
    )
)]
pub async fn my_recipes<S: RecipeStore + 'static>(
    recipe_service: web::Data<RecipeService<S>>,
    session: Session,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    if !session.is_user(&path) {
        debug!(
            "myrecipes requested for {} by {}; serving session user",
            path, session.username
        );
    }

    let recipes = recipe_service
        .list_by_creator(&session.username)
        .await?
        .into_iter()
        .map(RecipeResponse::from)
        .collect();

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        MSG_MY_RECIPES,
        MyRecipesResponse {
            username: session.username,
            recipes,
        },
    )))
}

/// Options for the add recipe form
#[utoipa::path(
    get,
    path = "/add_recipe",
    tag = "Recipes",
    responses(
        (status = 200, description = "Categories and difficulty levels", body = crate::models::RecipeFormOptions),
        (status = 401, description = "Not signed in", body = crate::models::ErrorResponse)
    ),
    security(
        ("session_cookie" = [])
    )
)]
pub async fn add_recipe_form<C: CategoryStore + 'static>(
    category_service: web::Data<CategoryService<C>>,
    _session: Session,
) -> Result<HttpResponse, ApiError> {
    let options = category_service.form_options().await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(MSG_RECIPE_FORM, options)))
}

/// Add a recipe
#[utoipa::path(
    post,
    path = "/add_recipe",
    tag = "Recipes",
    request_body(content = RecipeForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 201, description = "Recipe added", body = RecipeResponse),
        (status = 400, description = "Validation error", body = crate::models::ErrorResponse),
        (status = 401, description = "Not signed in", body = crate::models::ErrorResponse)
    ),
    security(
        ("session_cookie" = [])
    )
)]
pub async fn add_recipe<S: RecipeStore + 'static>(
    recipe_service: web::Data<RecipeService<S>>,
    session: Session,
    form: web::Form<RecipeForm>,
) -> Result<HttpResponse, ApiError> {
    form.validate().map_err(validation_errors_to_api_error)?;

    let recipe = recipe_service
        .create_recipe(form.into_inner(), &session.username)
        .await?;

    Ok(HttpResponse::Created().json(ApiResponse::success(
        MSG_RECIPE_ADDED,
        RecipeResponse::from(recipe),
    )))
}

/// A recipe with the options for its edit form
#[utoipa::path(
    get,
    path = "/edit_recipe/{id}",
    tag = "Recipes",
    params(
        ("id" = String, Path, description = "Recipe ID")
    ),
    responses(
        (status = 200, description = "Recipe and form options", body = EditRecipeResponse),
        (status = 401, description = "Not signed in", body = crate::models::ErrorResponse),
        (status = 404, description = "Recipe not found", body = crate::models::ErrorResponse)
    ),
    security(
        ("session_cookie" = [])
    )
)]
pub async fn edit_recipe_form<S: RecipeStore + 'static, C: CategoryStore + 'static>(
    recipe_service: web::Data<RecipeService<S>>,
    category_service: web::Data<CategoryService<C>>,
    _session: Session,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let recipe = recipe_service.get_recipe(&path.into_inner()).await?;
    let options = category_service.form_options().await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        MSG_RECIPE_FOUND,
        EditRecipeResponse {
            recipe: recipe.into(),
            options,
        },
    )))
}

/// Replace a recipe with the submitted form
#[utoipa::path(
    post,
    path = "/edit_recipe/{id}",
    tag = "Recipes",
    params(
        ("id" = String, Path, description = "Recipe ID")
    ),
    request_body(content = RecipeForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "Recipe updated", body = RecipeResponse),
        (status = 400, description = "Validation error or invalid ID", body = crate::models::ErrorResponse),
        (status = 401, description = "Not signed in", body = crate::models::ErrorResponse),
        (status = 404, description = "Recipe not found", body = crate::models::ErrorResponse)
    ),
    security(
        ("session_cookie" = [])
    )
)]
pub async fn edit_recipe<S: RecipeStore + 'static>(
    recipe_service: web::Data<RecipeService<S>>,
    session: Session,
    path: web::Path<String>,
    form: web::Form<RecipeForm>,
) -> Result<HttpResponse, ApiError> {
    form.validate().map_err(validation_errors_to_api_error)?;

    let recipe = recipe_service
        .update_recipe(&path.into_inner(), form.into_inner(), &session.username)
        .await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        MSG_RECIPE_UPDATED,
        RecipeResponse::from(recipe),
    )))
}

/// Delete a recipe
#[utoipa::path(
    get,
    path = "/delete_recipe/{id}",
    tag = "Recipes",
    params(
        ("id" = String, Path, description = "Recipe ID")
    ),
    responses(
        (status = 200, description = "Recipe deleted"),
        (status = 401, description = "Not signed in", body = crate::models::ErrorResponse),
        (status = 404, description = "Recipe not found", body = crate::models::ErrorResponse)
    ),
    security(
        ("session_cookie" = [])
    )
)]
pub async fn delete_recipe<S: RecipeStore + 'static>(
    recipe_service: web::Data<RecipeService<S>>,
    session: Session,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();
    recipe_service.delete_recipe(&id, &session.username).await?;
    info!("User {} removed recipe {}", session.username, id);

    Ok(HttpResponse::Ok().json(ApiResponse::<()>::message(MSG_RECIPE_DELETED)))
}

#[cfg(test)]
mod tests {
    use actix_web::cookie::Cookie;
    use actix_web::http::StatusCode;
    use actix_web::{test, App};
    use serde_json::Value;

    use super::*;
    use crate::middleware::{SessionMiddleware, SESSION_COOKIE};
    use crate::repositories::{MemoryCategoryStore, MemoryRecipeStore, MemoryUserStore};
    use crate::routes::configure_routes;
    use crate::services::auth_service::generate_session_token;
    use crate::services::SessionBlacklist;

    macro_rules! recipe_app {
        ($store:expr) => {
            test::init_service(
                App::new()
                    .app_data(web::Data::new(RecipeService::new($store)))
                    .app_data(web::Data::new(CategoryService::new(
                        MemoryCategoryStore::with_difficulties(&[("Hard", 3), ("Easy", 1)]),
                    )))
                    .wrap(SessionMiddleware::new(SessionBlacklist::new()))
                    .configure(
                        configure_routes::<MemoryRecipeStore, MemoryUserStore, MemoryCategoryStore>,
                    ),
            )
            .await
        };
    }

    fn session_cookie(username: &str) -> Cookie<'static> {
        let token = generate_session_token(username).unwrap();
        Cookie::new(SESSION_COOKIE, token)
    }

    fn names(body: &Value) -> Vec<String> {
        body["data"]
            .as_array()
            .unwrap()
            .iter()
            .map(|r| r["recipe_name"].as_str().unwrap().to_string())
            .collect()
    }

    #[actix_web::test]
    async fn test_first_page_and_links() {
        let app = recipe_app!(MemoryRecipeStore::with_numbered_recipes(10).await);

        let req = test::TestRequest::get()
            .uri("/documents?limit=6&offset=0")
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(
            names(&body),
            (0..6).map(|i| format!("Recipe {}", i)).collect::<Vec<_>>()
        );
        assert_eq!(body["offset"], 0);
        assert_eq!(body["num_results"], 10);
        assert_eq!(body["next_url"], "/documents?limit=6&offset=6");
        assert_eq!(body["prev_url"], "/documents?limit=6&offset=-6");

        // Following prev_url lands on the same page.
        let req = test::TestRequest::get()
            .uri("/documents?limit=6&offset=-6")
            .to_request();
        let prev: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(prev, body);
    }

    #[actix_web::test]
    async fn test_second_page_is_partial() {
        let app = recipe_app!(MemoryRecipeStore::with_numbered_recipes(10).await);

        let req = test::TestRequest::get()
            .uri("/documents?limit=6&offset=6")
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(names(&body), vec!["Recipe 6", "Recipe 7", "Recipe 8", "Recipe 9"]);
        assert_eq!(body["prev_url"], "/documents?limit=6&offset=0");
    }

    #[actix_web::test]
    async fn test_offset_past_end_gives_empty_page() {
        let app = recipe_app!(MemoryRecipeStore::with_numbered_recipes(10).await);

        let req = test::TestRequest::get()
            .uri("/documents?limit=6&offset=20")
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert!(body["data"].as_array().unwrap().is_empty());
        assert_eq!(body["offset"], 10);
        assert_eq!(body["next_url"], "/documents?limit=6&offset=16");
        assert_eq!(body["prev_url"], "/documents?limit=6&offset=4");
    }

    #[actix_web::test]
    async fn test_bad_page_params_are_400() {
        let app = recipe_app!(MemoryRecipeStore::with_numbered_recipes(3).await);

        for uri in [
            "/documents?offset=0",
            "/documents?limit=6",
            "/documents?limit=six&offset=0",
            "/documents?limit=0&offset=0",
        ] {
            let req = test::TestRequest::get().uri(uri).to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "{}", uri);

            let body: Value = test::read_body_json(resp).await;
            assert_eq!(body["success"], false);
            assert_eq!(body["code"], "INVALID_QUERY");
        }
    }

    #[actix_web::test]
    async fn test_search_without_matches_is_flagged() {
        let app = recipe_app!(MemoryRecipeStore::with_numbered_recipes(3).await);

        let req = test::TestRequest::post()
            .uri("/search")
            .set_form([("query", "tofu")])
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["no_matches"], true);
        assert_eq!(body["message"], "0 matches for \"tofu\"");
        assert!(body["data"].as_array().unwrap().is_empty());
    }

    #[actix_web::test]
    async fn test_search_with_matches() {
        let app = recipe_app!(MemoryRecipeStore::with_numbered_recipes(3).await);

        let req = test::TestRequest::get()
            .uri("/search?query=recipe")
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["no_matches"], false);
        assert_eq!(names(&body).len(), 3);
    }

    #[actix_web::test]
    async fn test_blank_search_is_400() {
        let app = recipe_app!(MemoryRecipeStore::new());

        let req = test::TestRequest::post()
            .uri("/search")
            .set_form([("query", "   ")])
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let req = test::TestRequest::get().uri("/search").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_gated_routes_require_session() {
        let app = recipe_app!(MemoryRecipeStore::with_numbered_recipes(1).await);

        let req = test::TestRequest::get().uri("/myrecipes/cook").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["code"], "AUTH_REQUIRED");

        let req = test::TestRequest::get()
            .uri("/delete_recipe/507f1f77bcf86cd799439011")
            .cookie(Cookie::new(SESSION_COOKIE, "forged"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }

    #[actix_web::test]
    async fn test_add_then_list_own_recipes() {
        let app = recipe_app!(MemoryRecipeStore::with_numbered_recipes(2).await);

        let req = test::TestRequest::post()
            .uri("/add_recipe")
            .cookie(session_cookie("alice"))
            .set_form([
                ("category_name", "Desserts"),
                ("recipe_name", "Brownies"),
                ("recipe_difficulty", "Easy"),
                ("basic_ingredients", "cocoa, butter,,sugar"),
                ("share_recipe", "on"),
            ])
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "Recipe Successfully Added");
        assert_eq!(body["data"]["created_by"], "alice");
        assert_eq!(body["data"]["share_recipe"], "on");
        assert_eq!(
            body["data"]["basic_ingredients"],
            serde_json::json!(["cocoa", "butter", "sugar"])
        );

        let req = test::TestRequest::get()
            .uri("/myrecipes/someone-else")
            .cookie(session_cookie("alice"))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["data"]["username"], "alice");
        let recipes = body["data"]["recipes"].as_array().unwrap();
        assert_eq!(recipes.len(), 1);
        assert_eq!(recipes[0]["recipe_name"], "Brownies");
    }

    #[actix_web::test]
    async fn test_view_and_delete_recipe() {
        let app = recipe_app!(MemoryRecipeStore::with_numbered_recipes(1).await);

        let req = test::TestRequest::get().uri("/get_recipes").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        let id = body["data"][0]["id"].as_str().unwrap().to_string();

        let req = test::TestRequest::get()
            .uri(&format!("/view_recipe/{}", id))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["data"]["recipe_name"], "Recipe 0");

        let req = test::TestRequest::get()
            .uri(&format!("/delete_recipe/{}", id))
            .cookie(session_cookie("cook"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let req = test::TestRequest::get()
            .uri(&format!("/view_recipe/{}", id))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let req = test::TestRequest::get()
            .uri("/view_recipe/not-an-id")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_empty_share_field_is_stored_off() {
        let app = recipe_app!(MemoryRecipeStore::new());

        let req = test::TestRequest::post()
            .uri("/add_recipe")
            .cookie(session_cookie("alice"))
            .set_form([
                ("category_name", "Soups"),
                ("recipe_name", "Minestrone"),
                ("share_recipe", ""),
            ])
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["share_recipe"], "off");
    }

    #[actix_web::test]
    async fn test_long_search_query_is_accepted() {
        let app = recipe_app!(MemoryRecipeStore::with_numbered_recipes(2).await);
        let query = format!("{} recipe", "stew ".repeat(100));

        let req = test::TestRequest::post()
            .uri("/search")
            .set_form([("query", query.as_str())])
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["no_matches"], false);
        assert_eq!(names(&body).len(), 2);
    }

    #[actix_web::test]
    async fn test_add_recipe_form_lists_sorted_options() {
        let app = recipe_app!(MemoryRecipeStore::new());

        let req = test::TestRequest::post()
            .uri("/add_category")
            .cookie(session_cookie("alice"))
            .set_form([("category_name", "Soups")])
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::CREATED);

        let req = test::TestRequest::get()
            .uri("/add_recipe")
            .cookie(session_cookie("alice"))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["data"]["categories"][0]["category_name"], "Soups");
        assert_eq!(body["data"]["difficulty"][0]["recipe_difficulty"], "Easy");
        assert_eq!(body["data"]["difficulty"][1]["recipe_difficulty"], "Hard");
    }
}
