//! Registration, sign-in and sign-out handlers.

use actix_web::cookie::{time::Duration, Cookie, SameSite};
use actix_web::{web, HttpResponse};
use log::info;
use validator::Validate;

use crate::config::CONFIG;
use crate::constants::{MSG_LOGGED_OUT, MSG_REGISTERED};
use crate::errors::ApiError;
use crate::middleware::SESSION_COOKIE;
use crate::models::{ApiResponse, AuthResponse, RegisterForm, Session, SignInForm, User};
use crate::repositories::UserStore;
use crate::services::{AuthService, SessionBlacklist};
use crate::validators::validation_errors_to_api_error;

/// Register a new account and sign it in
#[utoipa::path(
    post,
    path = "/join_free",
    tag = "Authentication",
    request_body(content = RegisterForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 201, description = "Registration successful, session cookie set", body = AuthResponse),
        (status = 400, description = "Validation error or password mismatch", body = crate::models::ErrorResponse),
        (status = 409, description = "Username already exists", body = crate::models::ErrorResponse)
    )
)]
pub async fn join_free<U: UserStore + 'static>(
    auth_service: web::Data<AuthService<U>>,
    form: web::Form<RegisterForm>,
) -> Result<HttpResponse, ApiError> {
    form.validate().map_err(validation_errors_to_api_error)?;

    let (user, token) = auth_service.register(form.into_inner()).await?;

    Ok(HttpResponse::Created()
        .cookie(session_cookie(&token))
        .json(auth_response(MSG_REGISTERED.to_string(), user, token)))
}

/// Sign in with username and password
#[utoipa::path(
    post,
    path = "/sign_in",
    tag = "Authentication",
    request_body(content = SignInForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "Signed in, session cookie set", body = AuthResponse),
        (status = 400, description = "Validation error", body = crate::models::ErrorResponse),
        (status = 401, description = "Incorrect username and/or password", body = crate::models::ErrorResponse)
    )
)]
pub async fn sign_in<U: UserStore + 'static>(
    auth_service: web::Data<AuthService<U>>,
    form: web::Form<SignInForm>,
) -> Result<HttpResponse, ApiError> {
    form.validate().map_err(validation_errors_to_api_error)?;

    let form = form.into_inner();
    let message = format!("Welcome, {}", form.username);
    let (user, token) = auth_service.sign_in(form).await?;

    Ok(HttpResponse::Ok()
        .cookie(session_cookie(&token))
        .json(auth_response(message, user, token)))
}

/// Sign out
///
/// Revokes the current session token until it expires and clears the
/// session cookie. Succeeds without a session too.
#[utoipa::path(
    get,
    path = "/sign_out",
    tag = "Authentication",
    responses(
        (status = 200, description = "Signed out, session cookie cleared")
    )
)]
pub async fn sign_out(
    blacklist: web::Data<SessionBlacklist>,
    session: Option<Session>,
) -> Result<HttpResponse, ApiError> {
    if let Some(session) = session {
        blacklist.revoke(&session.token, session.expires_at).await;
        info!("User {} signed out", session.username);
    }

    Ok(HttpResponse::Ok()
        .cookie(removal_cookie())
        .json(ApiResponse::<()>::message(MSG_LOGGED_OUT)))
}

fn auth_response(message: String, user: User, token: String) -> AuthResponse {
    AuthResponse {
        success: true,
        message,
        token,
        redirect_url: format!("/myrecipes/{}", user.username),
        user: user.into(),
    }
}

fn session_cookie(token: &str) -> Cookie<'static> {
    Cookie::build(SESSION_COOKIE, token.to_string())
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(CONFIG.secure_cookies)
        .max_age(Duration::hours(CONFIG.session_expiration_hours))
        .finish()
}

fn removal_cookie() -> Cookie<'static> {
    let mut cookie = Cookie::build(SESSION_COOKIE, "").path("/").finish();
    cookie.make_removal();
    cookie
}
