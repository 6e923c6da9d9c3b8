//! Session token claims and the per-request session context.

use serde::{Deserialize, Serialize};

/// Claims signed into the session cookie.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct SessionClaims {
    pub sub: String, // username
    pub exp: usize,  // expiration timestamp
    pub iat: usize,  // issued at timestamp
}

/// The signed-in user of the current request.
///
/// Populated by `SessionMiddleware` and handed to handlers as an extractor
/// argument; handlers never read the cookie themselves.
#[derive(Debug, Clone)]
pub struct Session {
    pub username: String,
    pub token: String,
    pub expires_at: usize,
}

impl Session {
    pub fn from_claims(claims: SessionClaims, token: &str) -> Self {
        Self {
            username: claims.sub,
            token: token.to_string(),
            expires_at: claims.exp,
        }
    }

    /// Check if the session belongs to the given username
    pub fn is_user(&self, username: &str) -> bool {
        self.username == username.to_lowercase()
    }
}
