/// Factory: build `GroupGate` from application `Config`.
use std::sync::Arc;

use crate::config::Config;
use crate::services::auth::{GatePolicy, GroupGate, HmacVerifier};

pub fn build_gate(config: &Config) -> GroupGate {
    let verifier = HmacVerifier::new(config.jwt_secret.as_bytes())
        .with_leeway(config.jwt_leeway_seconds);
    let policy = GatePolicy::from_allowed(config.allowed_groups.iter().cloned());

    match &policy {
        GatePolicy::AllowAll => tracing::info!("jwt gate: any authenticated caller is allowed"),
        GatePolicy::AnyOfGroups(groups) => {
            tracing::info!(allowed_groups = ?groups, "jwt gate: group allow-list enabled")
        }
    }

    GroupGate::new(Arc::new(verifier), policy)
}
