//! Middleware modules for request processing.

pub mod request_ext;
pub mod session_middleware;

pub use session_middleware::{SessionMiddleware, SESSION_COOKIE};
