//! Bearer credential extraction from request headers.

use axum::http::{HeaderMap, header};

const BEARER: &str = "Bearer";

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("missing or malformed bearer credential")]
pub struct MissingCredential;

/// Return the token following `Authorization: Bearer `.
///
/// The scheme is matched case-insensitively and everything after the first
/// space is returned as is. A header without the scheme, a different scheme,
/// or a blank remainder is `MissingCredential`.
pub fn extract_bearer(headers: &HeaderMap) -> Result<&str, MissingCredential> {
    let value = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .ok_or(MissingCredential)?;

    let (scheme, token) = value.split_once(' ').ok_or(MissingCredential)?;
    if !scheme.eq_ignore_ascii_case(BEARER) {
        return Err(MissingCredential);
    }

    if token.trim().is_empty() {
        return Err(MissingCredential);
    }

    Ok(token)
}
