use actix_web::{error, web, HttpResponse};
use log::debug;
use utoipa::OpenApi;

use crate::constants::{CODE_INVALID_FORM, CODE_INVALID_QUERY, ERR_MALFORMED_FORM, ERR_MALFORMED_QUERY};
use crate::errors::ApiError;
use crate::handlers;
use crate::models::HealthResponse;
use crate::openapi::ApiDoc;
use crate::repositories::{CategoryStore, RecipeStore, UserStore};

/// Register every route, binding handlers to the recipe store `S`, the user
/// store `U` and the category store `C`.
pub fn configure_routes<S, U, C>(cfg: &mut web::ServiceConfig)
where
    S: RecipeStore + 'static,
    U: UserStore + 'static,
    C: CategoryStore + 'static,
{
    cfg.app_data(query_config())
        .app_data(form_config())
        // Landing and health
        .route("/", web::get().to(home))
        .route("/home", web::get().to(home))
        .route("/health", web::get().to(health_check))
        .route("/api-docs/openapi.json", web::get().to(openapi_json))
        // Listing and search
        .route("/documents", web::get().to(handlers::documents::<S>))
        .route("/search", web::get().to(handlers::search_query::<S>))
        .route("/search", web::post().to(handlers::search_form::<S>))
        .route("/get_recipes", web::get().to(handlers::get_recipes::<S>))
        .route("/view_recipe/{id}", web::get().to(handlers::view_recipe::<S>))
        // Accounts
        .route("/join_free", web::post().to(handlers::join_free::<U>))
        .route("/sign_in", web::post().to(handlers::sign_in::<U>))
        .route("/sign_out", web::get().to(handlers::sign_out))
        // Recipes (session required)
        .route("/myrecipes/{username}", web::get().to(handlers::my_recipes::<S>))
        .route("/add_recipe", web::get().to(handlers::add_recipe_form::<C>))
        .route("/add_recipe", web::post().to(handlers::add_recipe::<S>))
        .route("/edit_recipe/{id}", web::get().to(handlers::edit_recipe_form::<S, C>))
        .route("/edit_recipe/{id}", web::post().to(handlers::edit_recipe::<S>))
        .route("/delete_recipe/{id}", web::get().to(handlers::delete_recipe::<S>))
        // Categories
        .route("/get_categories", web::get().to(handlers::get_categories::<C>))
        .route("/add_category", web::post().to(handlers::add_category::<C>))
        .route("/edit_category/{id}", web::get().to(handlers::edit_category_form::<C>))
        .route("/edit_category/{id}", web::post().to(handlers::edit_category::<C>))
        .route("/delete_category/{id}", web::get().to(handlers::delete_category::<C>));
}

/// Undecodable query strings become JSON errors instead of plain-text 400s.
fn query_config() -> web::QueryConfig {
    web::QueryConfig::default().error_handler(|err, _req| {
        debug!("Rejected query string: {}", err);
        error::Error::from(ApiError::bad_request(
            CODE_INVALID_QUERY,
            ERR_MALFORMED_QUERY,
        ))
    })
}

fn form_config() -> web::FormConfig {
    web::FormConfig::default().error_handler(|err, _req| {
        debug!("Rejected form body: {}", err);
        error::Error::from(ApiError::bad_request(
            CODE_INVALID_FORM,
            ERR_MALFORMED_FORM,
        ))
    })
}

/// Service banner
#[utoipa::path(
    get,
    path = "/",
    tag = "Health",
    responses(
        (status = 200, description = "Service banner")
    )
)]
pub async fn home() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "success": true,
        "message": "Recipe Book",
        "documents": "/documents?limit=6&offset=0"
    }))
}

/// Health check
#[utoipa::path(
    get,
    path = "/health",
    tag = "Health",
    responses(
        (status = 200, description = "Server is running", body = HealthResponse)
    )
)]
pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(HealthResponse {
        status: "OK".to_string(),
        message: "Server is running".to_string(),
    })
}

async fn openapi_json() -> HttpResponse {
    HttpResponse::Ok().json(ApiDoc::openapi())
}

#[cfg(test)]
mod tests {
    use actix_web::http::StatusCode;
    use actix_web::{test, App};
    use serde_json::Value;

    use super::*;
    use crate::repositories::{MemoryCategoryStore, MemoryRecipeStore, MemoryUserStore};
    use crate::services::RecipeService;

    macro_rules! app {
        () => {
            test::init_service(
                App::new()
                    .app_data(web::Data::new(RecipeService::new(MemoryRecipeStore::new())))
                    .configure(
                        configure_routes::<MemoryRecipeStore, MemoryUserStore, MemoryCategoryStore>,
                    ),
            )
            .await
        };
    }

    #[actix_web::test]
    async fn test_health_and_home() {
        let app = app!();

        let req = test::TestRequest::get().uri("/health").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["status"], "OK");

        for uri in ["/", "/home"] {
            let req = test::TestRequest::get().uri(uri).to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::OK);
        }
    }

    #[actix_web::test]
    async fn test_openapi_document_lists_documents_route() {
        let app = app!();

        let req = test::TestRequest::get()
            .uri("/api-docs/openapi.json")
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert!(body["paths"]["/documents"].is_object());
        assert!(body["paths"]["/search"]["post"].is_object());
    }

    #[actix_web::test]
    async fn test_malformed_form_is_json_400() {
        let app = app!();

        let req = test::TestRequest::post()
            .uri("/search")
            .insert_header(("content-type", "application/json"))
            .set_payload("{\"query\": \"cake\"}")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["code"], "INVALID_FORM");
    }
}
