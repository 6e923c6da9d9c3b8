//! Registration, sign-in, and session token utilities.

use bcrypt::{hash, verify};
use chrono::Utc;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use log::{debug, info, warn};

use crate::config::CONFIG;
use crate::constants::{
    CODE_INVALID_CREDENTIALS, CODE_USERNAME_EXISTS, ERR_INVALID_CREDENTIALS, ERR_USERNAME_EXISTS,
};
use crate::errors::ApiError;
use crate::models::{RegisterForm, SessionClaims, SignInForm, User};
use crate::repositories::UserStore;
use crate::utils::log_sanitizer::mask_email;
use crate::validators::validate_password_match;

/// Service for account creation and credential checks.
pub struct AuthService<U> {
    repository: U,
}

impl<U: UserStore> AuthService<U> {
    pub fn new(repository: U) -> Self {
        Self { repository }
    }

    /// Create an account and return it with a fresh session token.
    pub async fn register(&self, form: RegisterForm) -> Result<(User, String), ApiError> {
        let username = form.username.to_lowercase();

        if self.repository.find_by_username(&username).await?.is_some() {
            warn!("Registration failed: username {} already exists", username);
            return Err(ApiError::conflict(CODE_USERNAME_EXISTS, ERR_USERNAME_EXISTS));
        }

        validate_password_match(&form.password, &form.password2)?;

        let mut user = User {
            id: None,
            username,
            email: form.email.to_lowercase(),
            password_hash: hash_password(&form.password)?,
        };

        user.id = Some(self.repository.insert(&user).await?);

        info!(
            "Registered user {} ({})",
            user.username,
            mask_email(&user.email)
        );

        let token = generate_session_token(&user.username)?;
        Ok((user, token))
    }

    /// Check credentials and return the user with a fresh session token.
    ///
    /// Unknown usernames and wrong passwords produce the same error.
    pub async fn sign_in(&self, form: SignInForm) -> Result<(User, String), ApiError> {
        let username = form.username.to_lowercase();

        let user = self
            .repository
            .find_by_username(&username)
            .await?
            .ok_or_else(|| {
                warn!("Sign in failed: unknown username {}", username);
                invalid_credentials()
            })?;

        if !verify_password(&form.password, &user.password_hash)? {
            warn!("Sign in failed: wrong password for {}", username);
            return Err(invalid_credentials());
        }

        let token = generate_session_token(&user.username)?;
        info!("User {} signed in", user.username);
        Ok((user, token))
    }
}

#[cfg(not(test))]
const BCRYPT_COST: u32 = bcrypt::DEFAULT_COST;
#[cfg(test)]
const BCRYPT_COST: u32 = 4;

fn invalid_credentials() -> ApiError {
    ApiError::unauthorized(CODE_INVALID_CREDENTIALS, ERR_INVALID_CREDENTIALS)
}

/// Hash a password using bcrypt.
pub fn hash_password(password: &str) -> Result<String, ApiError> {
    Ok(hash(password, BCRYPT_COST)?)
}

/// Verify a password against a bcrypt hash.
pub fn verify_password(password: &str, hash: &str) -> Result<bool, ApiError> {
    Ok(verify(password, hash)?)
}

/// Sign a session token for `username`.
pub fn generate_session_token(username: &str) -> Result<String, ApiError> {
    let now = Utc::now().timestamp() as usize;
    let exp = now + (CONFIG.session_expiration_hours as usize * 3600);

    let claims = SessionClaims {
        sub: username.to_string(),
        exp,
        iat: now,
    };

    debug!("Generated session token for user {}", username);

    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(CONFIG.secret_key.as_bytes()),
    )?;

    Ok(token)
}

/// Verify the signature and expiry of a session token.
pub fn decode_session_token(token: &str) -> Result<SessionClaims, ApiError> {
    let data = decode::<SessionClaims>(
        token,
        &DecodingKey::from_secret(CONFIG.secret_key.as_bytes()),
        &Validation::default(),
    )?;
    Ok(data.claims)
}
