/*
 * Responsibility
 * - Rejection taxonomy of the gate
 * - IntoResponse: status code only, empty body (callers tell failures apart by status)
 *
 * Status mapping
 * - MissingCredential / MalformedHeader / InvalidToken => 401
 * - MissingGroupsClaim / GroupNotAllowed               => 403
 */
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::services::auth::VerifyError;

#[derive(Debug, Error)]
pub enum GateError {
    #[error("bearer token not present")]
    MissingCredential,
    #[error("malformed bearer authorization header")]
    MalformedHeader,
    #[error("invalid token: {0}")]
    InvalidToken(#[from] VerifyError),
    #[error("missing \"groups\" claim")]
    MissingGroupsClaim,
    #[error("token has none of the allowed groups")]
    GroupNotAllowed,
}

impl GateError {
    pub fn status(&self) -> StatusCode {
        match self {
            GateError::MissingCredential
            | GateError::MalformedHeader
            | GateError::InvalidToken(_) => StatusCode::UNAUTHORIZED,
            GateError::MissingGroupsClaim | GateError::GroupNotAllowed => StatusCode::FORBIDDEN,
        }
    }
}

impl IntoResponse for GateError {
    fn into_response(self) -> Response {
        self.status().into_response()
    }
}
