use std::sync::Arc;

use anyhow::{Result, anyhow};
use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
};
use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use base64::{Engine as _, engine::general_purpose::URL_SAFE_NO_PAD};
use crates::domain::repositories::{
    admin_sessions::AdminSessionRepository, admin_users::AdminUserRepository,
};
use rand::RngCore;
use sha2::{Digest, Sha256};
use tracing::debug;

use crate::{axum_http::error_responses::AppError, usecases::admin_auth::AdminAuthUseCase};

pub const SESSION_COOKIE_NAME: &str = "coach_admin_session";

const SESSION_TOKEN_BYTES: usize = 32;
const SALT_BYTES: usize = 16;

/// Cookie attributes shared by login and logout.
#[derive(Debug, Clone, Copy)]
pub struct CookiePolicy {
    pub secure: bool,
    pub ttl: chrono::Duration,
}

impl CookiePolicy {
    pub fn session_cookie(&self, token: String) -> Cookie<'static> {
        Cookie::build((SESSION_COOKIE_NAME, token))
            .http_only(true)
            .same_site(SameSite::Lax)
            .path("/")
            .secure(self.secure)
            .max_age(cookie::time::Duration::seconds(self.ttl.num_seconds()))
            .build()
    }

    pub fn removal_cookie(&self) -> Cookie<'static> {
        Cookie::build(SESSION_COOKIE_NAME)
            .http_only(true)
            .same_site(SameSite::Lax)
            .path("/")
            .secure(self.secure)
            .build()
    }
}

/// Opaque base64url token handed to the browser. Only its digest is stored.
pub fn generate_session_token() -> String {
    let mut bytes = [0u8; SESSION_TOKEN_BYTES];
    rand::thread_rng().fill_bytes(&mut bytes);
    URL_SAFE_NO_PAD.encode(bytes)
}

pub fn hash_session_token(token: &str) -> String {
    hex::encode(Sha256::digest(token.as_bytes()))
}

pub fn hash_password(password: &str) -> Result<String> {
    let mut salt_bytes = [0u8; SALT_BYTES];
    rand::thread_rng().fill_bytes(&mut salt_bytes);
    let salt = SaltString::encode_b64(&salt_bytes)
        .map_err(|err| anyhow!("failed to encode password salt: {}", err))?;

    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|err| anyhow!("failed to hash password: {}", err))?;

    Ok(hash.to_string())
}

pub fn verify_password(password: &str, password_hash: &str) -> Result<bool> {
    let parsed = PasswordHash::new(password_hash)
        .map_err(|err| anyhow!("stored password hash is malformed: {}", err))?;

    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok())
}

pub fn session_token(jar: &CookieJar) -> Option<String> {
    jar.get(SESSION_COOKIE_NAME)
        .map(|cookie| cookie.value().to_string())
        .filter(|token| !token.is_empty())
}

/// Rejects the request with 401 unless it carries a live admin session, and
/// makes the admin available to handlers as `Extension<AdminIdentity>`.
pub async fn require_admin<U, S>(
    State(admin_auth_usecase): State<Arc<AdminAuthUseCase<U, S>>>,
    jar: CookieJar,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError>
where
    U: AdminUserRepository + Send + Sync + 'static,
    S: AdminSessionRepository + Send + Sync + 'static,
{
    let Some(token) = session_token(&jar) else {
        debug!(path = %request.uri().path(), "auth: missing admin session cookie");
        return Err(AppError::Unauthorized);
    };

    let identity = admin_auth_usecase.authenticate(token).await?;
    request.extensions_mut().insert(identity);

    Ok(next.run(request).await)
}

#[cfg(test)]
mod tests;
