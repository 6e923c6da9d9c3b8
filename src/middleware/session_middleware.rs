//! Session middleware for every route.
//!
//! Reads the session token from the `session` cookie (or an `Authorization:
//! Bearer` header), verifies it, and stores the resulting `Session` in the
//! request extensions. Requests without a valid session pass through
//! untouched; gated handlers reject them through the `Session` extractor.

use actix_web::{
    dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
    Error, HttpMessage,
};
use futures::future::{ok, LocalBoxFuture, Ready};
use log::debug;
use std::rc::Rc;

use crate::models::Session;
use crate::services::auth_service::decode_session_token;
use crate::services::SessionBlacklist;

/// Name of the cookie carrying the session token.
pub const SESSION_COOKIE: &str = "session";

pub struct SessionMiddleware {
    blacklist: SessionBlacklist,
}

impl SessionMiddleware {
    pub fn new(blacklist: SessionBlacklist) -> Self {
        Self { blacklist }
    }
}

impl<S, B> Transform<S, ServiceRequest> for SessionMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Transform = SessionMiddlewareService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ok(SessionMiddlewareService {
            service: Rc::new(service),
            blacklist: self.blacklist.clone(),
        })
    }
}

pub struct SessionMiddlewareService<S> {
    service: Rc<S>,
    blacklist: SessionBlacklist,
}

impl<S, B> Service<ServiceRequest> for SessionMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);

        if let Some(session) = self.resolve_session(&req) {
            req.extensions_mut().insert(session);
        }

        Box::pin(async move { service.call(req).await })
    }
}

impl<S> SessionMiddlewareService<S> {
    fn resolve_session(&self, req: &ServiceRequest) -> Option<Session> {
        let token = session_token(req)?;

        if self.blacklist.is_revoked(&token) {
            debug!("Ignoring signed-out session token");
            return None;
        }

        match decode_session_token(&token) {
            Ok(claims) => Some(Session::from_claims(claims, &token)),
            Err(err) => {
                debug!("Ignoring invalid session token: {}", err);
                None
            }
        }
    }
}

/// Cookie first, then a bearer token.
fn session_token(req: &ServiceRequest) -> Option<String> {
    if let Some(cookie) = req.cookie(SESSION_COOKIE) {
        if !cookie.value().is_empty() {
            return Some(cookie.value().to_string());
        }
    }

    req.headers()
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
        .and_then(|header| header.strip_prefix("Bearer "))
        .map(|token| token.trim().to_string())
        .filter(|token| !token.is_empty())
}
