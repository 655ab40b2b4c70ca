//! `Authorization: Bearer <token>` parsing.

use axum::http::{HeaderMap, header};

use crate::error::GateError;

pub const BEARER_SCHEME: &str = "Bearer";

/// Split the credential out of an `Authorization` header value.
///
/// Only the first two whitespace-separated fields are looked at; anything
/// after the token is ignored. The scheme must be exactly `Bearer`.
pub fn extract_bearer(header: Option<&str>) -> Result<&str, GateError> {
    let header = header
        .filter(|h| !h.is_empty())
        .ok_or(GateError::MissingCredential)?;

    let mut fields = header.split_whitespace();
    match (fields.next(), fields.next()) {
        (Some(BEARER_SCHEME), Some(token)) => Ok(token),
        _ => Err(GateError::MalformedHeader),
    }
}

/// Same as [`extract_bearer`], reading the header from a request.
///
/// A header value that is not visible ASCII counts as malformed.
pub fn bearer_from_headers(headers: &HeaderMap) -> Result<&str, GateError> {
    match headers.get(header::AUTHORIZATION) {
        None => extract_bearer(None),
        Some(value) => {
            let value = value.to_str().map_err(|_| GateError::MalformedHeader)?;
            extract_bearer(Some(value))
        }
    }
}
