use std::convert::Infallible;

use axum::extract::FromRequestParts;
use axum::http::{StatusCode, request::Parts};

use crate::middleware::auth::groups_from_extensions;
use crate::services::auth::VerifiedClaims;

/// Verified claims of the caller.
/// Missing claims mean the gate is not in front of this route: 401.
pub struct ClaimsExtractor(pub VerifiedClaims);

impl<S> FromRequestParts<S> for ClaimsExtractor
where
    S: Send + Sync,
{
    type Rejection = StatusCode;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<VerifiedClaims>()
            .cloned()
            .map(ClaimsExtractor)
            .ok_or(StatusCode::UNAUTHORIZED)
    }
}

/// Groups of the caller; empty when nothing was attached.
pub struct GroupsExtractor(pub Vec<String>);

impl<S> FromRequestParts<S> for GroupsExtractor
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(GroupsExtractor(groups_from_extensions(&parts.extensions)))
    }
}
