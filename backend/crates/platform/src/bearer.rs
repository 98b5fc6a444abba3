//! Bearer Token Extraction
//!
//! Parses `Authorization: Bearer <token>` request headers.

use http::{HeaderMap, header};
use thiserror::Error;

/// Malformed `Authorization` header
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BearerError {
    #[error("Authorization header is not valid ASCII")]
    NotAscii,

    #[error("Authorization header must use the Bearer scheme")]
    WrongScheme,

    #[error("Bearer token is empty")]
    EmptyToken,
}

/// Extract the bearer token from headers
///
/// ## Returns
/// * `Ok(None)` - no `Authorization` header at all
/// * `Ok(Some(token))` - a well-formed bearer credential
/// * `Err(_)` - the header is present but unusable
pub fn extract_bearer(headers: &HeaderMap) -> Result<Option<&str>, BearerError> {
    let Some(value) = headers.get(header::AUTHORIZATION) else {
        return Ok(None);
    };

    let value = value.to_str().map_err(|_| BearerError::NotAscii)?;

    let (scheme, token) = value.split_once(' ').ok_or(BearerError::WrongScheme)?;
    if !scheme.eq_ignore_ascii_case("bearer") {
        return Err(BearerError::WrongScheme);
    }

    let token = token.trim();
    if token.is_empty() {
        return Err(BearerError::EmptyToken);
    }

    Ok(Some(token))
}
