/*
 * Responsibility
 * - GET /me/groups: groups of the caller (read back from what the gate attached)
 * - GET /me/claims: verified claims as-is
 */
use axum::Json;

use crate::api::v1::dto::me::GroupsResponse;
use crate::api::v1::extractors::{ClaimsExtractor, GroupsExtractor};
use crate::services::auth::VerifiedClaims;

pub async fn my_groups(GroupsExtractor(groups): GroupsExtractor) -> Json<GroupsResponse> {
    Json(GroupsResponse { groups })
}

pub async fn my_claims(ClaimsExtractor(claims): ClaimsExtractor) -> Json<VerifiedClaims> {
    Json(claims)
}
