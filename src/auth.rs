use axum::http::HeaderMap;

use crate::error::ApiError;

/// Extract the token from a `Bearer <token>` authorization header.
/// Returns `None` for a missing header, a different scheme, a value that
/// is not valid UTF-8, or an empty token.
pub fn extract_bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .and_then(|s| s.strip_prefix("Bearer "))
        .filter(|token| !token.is_empty())
}

/// Check the request credential against the configured secret.
///
/// A missing or unextractable token is unauthenticated (401); a token that
/// does not equal the secret is forbidden (403).
pub fn authenticate(headers: &HeaderMap, expected: &str) -> Result<(), ApiError> {
    let token = extract_bearer_token(headers).ok_or(ApiError::MissingToken)?;
    if token != expected {
        return Err(ApiError::InvalidToken);
    }
    Ok(())
}
