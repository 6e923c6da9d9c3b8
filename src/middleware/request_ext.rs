//! Access to the `Session` placed in the request by `SessionMiddleware`.

use actix_web::{dev::Payload, FromRequest, HttpMessage, HttpRequest};
use futures::future::{ready, Ready};
use log::warn;

use crate::constants::{CODE_AUTH_REQUIRED, ERR_AUTH_REQUIRED};
use crate::errors::ApiError;
use crate::models::Session;

pub trait RequestExt {
    /// The signed-in session, if the request carried a valid one.
    fn get_session(&self) -> Option<Session>;
}

impl RequestExt for HttpRequest {
    fn get_session(&self) -> Option<Session> {
        self.extensions().get::<Session>().cloned()
    }
}

/// Taking `Session` as a handler argument makes the route session-gated.
/// Use `Option<Session>` where signing in is optional.
impl FromRequest for Session {
    type Error = ApiError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        ready(req.get_session().ok_or_else(|| {
            warn!("Rejected {} {}: no session", req.method(), req.path());
            ApiError::unauthorized(CODE_AUTH_REQUIRED, ERR_AUTH_REQUIRED)
        }))
    }
}
