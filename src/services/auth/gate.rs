/*
 * Responsibility
 * - Verification + groups claim + allow-list policy, as one pure decision
 * - No HTTP types here beyond the header string; the middleware owns the wire side
 */
use std::sync::Arc;

use crate::error::GateError;

use super::claims::VerifiedClaims;
use super::hmac_jwt::{HmacVerifier, TokenVerifier};
use super::policy::GatePolicy;

/// Authorization gate: who may pass, and how tokens are checked.
///
/// Cheap to clone; all state is shared and read-only after construction.
#[derive(Clone)]
pub struct GroupGate {
    verifier: Arc<dyn TokenVerifier>,
    policy: Arc<GatePolicy>,
}

impl std::fmt::Debug for GroupGate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GroupGate")
            .field("policy", &self.policy)
            .finish_non_exhaustive()
    }
}

impl GroupGate {
    /// Any caller presenting a valid token passes.
    pub fn allow_all(secret: impl AsRef<[u8]>) -> Self {
        Self::new(Arc::new(HmacVerifier::new(secret)), GatePolicy::AllowAll)
    }

    /// Callers pass if their `groups` claim contains at least one of `groups`.
    ///
    /// An empty `groups` falls back to [`GroupGate::allow_all`] semantics.
    pub fn any_of<I, S>(secret: impl AsRef<[u8]>, groups: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(
            Arc::new(HmacVerifier::new(secret)),
            GatePolicy::from_allowed(groups),
        )
    }

    pub fn new(verifier: Arc<dyn TokenVerifier>, policy: GatePolicy) -> Self {
        Self {
            verifier,
            policy: Arc::new(policy),
        }
    }

    pub fn policy(&self) -> &GatePolicy {
        &self.policy
    }

    /// Verify `token` and apply the group policy.
    ///
    /// `groups` absent is a hard failure; `groups` of the wrong shape only
    /// yields an empty group set.
    pub fn authorize(&self, token: &str) -> Result<VerifiedClaims, GateError> {
        let claims = self.verifier.verify(token)?;

        let groups = claims.groups().ok_or(GateError::MissingGroupsClaim)?;

        if !self.policy.permits(&groups) {
            return Err(GateError::GroupNotAllowed);
        }

        Ok(claims)
    }
}
