/*
 * Responsibility
 * - v1 の URL 構造を定義
 * - /health は公開、/me/... は JWT gate の内側
 */
use axum::{Router, routing::get};

use crate::api::v1::handlers::{
    health::health,
    me::{my_claims, my_groups},
};
use crate::middleware::auth::gate;
use crate::state::AppState;

pub fn routes(state: &AppState) -> Router<AppState> {
    let protected = Router::new()
        .route("/me/groups", get(my_groups))
        .route("/me/claims", get(my_claims));

    Router::new()
        .route("/health", get(health))
        .merge(gate::apply(protected, state.gate.clone()))
}
