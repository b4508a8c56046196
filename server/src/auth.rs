//! # Sign-in
//!
//! Single-owner authentication.
//!
//! ## Flow
//!
//! - The owner posts the configured sign-in key once
//! - A wrong key is rejected outright, there is no lockout
//! - A right key mints a UUID v4 token stored in Redis with a 30-day TTL
//! - Write requests carry the token as a bearer header, reads never need one
//! - A token Redis no longer knows (expired or never issued) is signed out,
//!   the client repeats the sign-in
use axum::http::{HeaderMap, header::AUTHORIZATION};
use uuid::Uuid;

use crate::{database, error::AppError, state::AppState};

pub async fn sign_in(state: &AppState, key: &str) -> Result<String, AppError> {
    if key != state.config.signin_key {
        return Err(AppError::Unauthorized);
    }

    let token = Uuid::new_v4().to_string();

    let mut connection = state.redis_connection.clone();
    database::create_session(&mut connection, &token).await?;

    Ok(token)
}

/// Resolves "is a user currently signed in" from the request headers.
pub async fn signed_in(state: &AppState, headers: &HeaderMap) -> Result<bool, AppError> {
    let Some(token) = bearer_token(headers) else {
        return Ok(false);
    };

    let mut connection = state.redis_connection.clone();
    database::session_exists(&mut connection, token).await
}

pub async fn require_session(state: &AppState, headers: &HeaderMap) -> Result<(), AppError> {
    if signed_in(state, headers).await? {
        Ok(())
    } else {
        Err(AppError::Unauthorized)
    }
}

fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
}

#[cfg(test)]
mod tests {
    use axum::http::{HeaderMap, HeaderValue, header::AUTHORIZATION};

    use super::bearer_token;

    #[test]
    fn test_bearer_token_extraction() {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, HeaderValue::from_static("Bearer abc-123"));

        assert_eq!(bearer_token(&headers), Some("abc-123"));
    }

    #[test]
    fn test_missing_or_malformed_header() {
        assert_eq!(bearer_token(&HeaderMap::new()), None);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, HeaderValue::from_static("Basic abc"));
        assert_eq!(bearer_token(&headers), None);
    }
}
