//! Category handlers.

use actix_web::{web, HttpResponse};
use validator::Validate;

use crate::constants::{
    MSG_CATEGORIES, MSG_CATEGORY_ADDED, MSG_CATEGORY_DELETED, MSG_CATEGORY_FOUND,
    MSG_CATEGORY_UPDATED,
};
use crate::errors::ApiError;
use crate::models::{ApiResponse, CategoryForm, CategoryResponse, Session};
use crate::repositories::CategoryStore;
use crate::services::CategoryService;
use crate::validators::validation_errors_to_api_error;

/// List categories sorted by name
#[utoipa::path(
    get,
    path = "/get_categories",
    tag = "Categories",
    responses(
        (status = 200, description = "All categories", body = [CategoryResponse])
    )
)]
pub async fn get_categories<C: CategoryStore + 'static>(
    category_service: web::Data<CategoryService<C>>,
) -> Result<HttpResponse, ApiError> {
    let categories: Vec<CategoryResponse> = category_service
        .list_categories()
        .await?
        .into_iter()
        .map(CategoryResponse::from)
        .collect();

    Ok(HttpResponse::Ok().json(ApiResponse::success(MSG_CATEGORIES, categories)))
}

/// Add a category
#[utoipa::path(
    post,
    path = "/add_category",
    tag = "Categories",
    request_body(content = CategoryForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 201, description = "Category added", body = CategoryResponse),
        (status = 400, description = "Validation error", body = crate::models::ErrorResponse),
        (status = 401, description = "Not signed in", body = crate::models::ErrorResponse)
    ),
    security(
        ("session_cookie" = [])
    )
)]
pub async fn add_category<C: CategoryStore + 'static>(
    category_service: web::Data<CategoryService<C>>,
    _session: Session,
    form: web::Form<CategoryForm>,
) -> Result<HttpResponse, ApiError> {
    form.validate().map_err(validation_errors_to_api_error)?;

    let category = category_service.create_category(form.into_inner()).await?;

    Ok(HttpResponse::Created().json(ApiResponse::success(
        MSG_CATEGORY_ADDED,
        CategoryResponse::from(category),
    )))
}

/// A category for its edit form
#[utoipa::path(
    get,
    path = "/edit_category/{id}",
    tag = "Categories",
    params(
        ("id" = String, Path, description = "Category ID")
    ),
    responses(
        (status = 200, description = "Category found", body = CategoryResponse),
        (status = 400, description = "Invalid category ID", body = crate::models::ErrorResponse),
        (status = 401, description = "Not signed in", body = crate::models::ErrorResponse),
        (status = 404, description = "Category not found", body = crate::models::ErrorResponse)
    ),
    security(
        ("session_cookie" = [])
    )
)]
pub async fn edit_category_form<C: CategoryStore + 'static>(
    category_service: web::Data<CategoryService<C>>,
    _session: Session,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let category = category_service.get_category(&path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(
        MSG_CATEGORY_FOUND,
        CategoryResponse::from(category),
    )))
}

/// Replace a category with the submitted form
#[utoipa::path(
    post,
    path = "/edit_category/{id}",
    tag = "Categories",
    params(
        ("id" = String, Path, description = "Category ID")
    ),
    request_body(content = CategoryForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "Category updated", body = CategoryResponse),
        (status = 400, description = "Validation error or invalid ID", body = crate::models::ErrorResponse),
        (status = 401, description = "Not signed in", body = crate::models::ErrorResponse),
        (status = 404, description = "Category not found", body = crate::models::ErrorResponse)
    ),
    security(
        ("session_cookie" = [])
    )
)]
pub async fn edit_category<C: CategoryStore + 'static>(
    category_service: web::Data<CategoryService<C>>,
    _session: Session,
    path: web::Path<String>,
    form: web::Form<CategoryForm>,
) -> Result<HttpResponse, ApiError> {
    form.validate().map_err(validation_errors_to_api_error)?;

    let category = category_service
        .update_category(&path.into_inner(), form.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        MSG_CATEGORY_UPDATED,
        CategoryResponse::from(category),
    )))
}

/// Delete a category
#[utoipa::path(
    get,
    path = "/delete_category/{id}",
    tag = "Categories",
    params(
        ("id" = String, Path, description = "Category ID")
    ),
    responses(
        (status = 200, description = "Category deleted"),
        (status = 401, description = "Not signed in", body = crate::models::ErrorResponse),
        (status = 404, description = "Category not found", body = crate::models::ErrorResponse)
    ),
    security(
        ("session_cookie" = [])
    )
)]
pub async fn delete_category<C: CategoryStore + 'static>(
    category_service: web::Data<CategoryService<C>>,
    _session: Session,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    category_service.delete_category(&path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::<()>::message(MSG_CATEGORY_DELETED)))
}
