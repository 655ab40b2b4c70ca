/*
 * Responsibility
 * - Read what the gate attached to a request (VerifiedClaims in extensions)
 * - Never fails: no claims / no groups / wrong shape => empty list
 */
use axum::http::{Extensions, Request};

use crate::services::auth::VerifiedClaims;

/// Groups of the caller, as attached by the gate.
pub fn groups_from_extensions(extensions: &Extensions) -> Vec<String> {
    let Some(claims) = extensions.get::<VerifiedClaims>() else {
        tracing::debug!("no verified claims on request; is the jwt gate applied?");
        return Vec::new();
    };

    claims.groups().unwrap_or_default()
}

pub fn groups_from_request<B>(req: &Request<B>) -> Vec<String> {
    groups_from_extensions(req.extensions())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value, json};

    fn request_with(claims: Value) -> Request<()> {
        let mut req = Request::new(());
        if let Value::Object(map) = claims {
            req.extensions_mut()
                .insert(VerifiedClaims::from_verified(map));
        }
        req
    }

    #[test]
    fn no_claims_yields_empty() {
        let req = Request::new(());
        assert!(groups_from_request(&req).is_empty());
    }

    #[test]
    fn wrong_data_type_yields_empty() {
        let req = request_with(json!({"groups": "garbage"}));
        assert!(groups_from_request(&req).is_empty());
    }

    #[test]
    fn missing_groups_yields_empty() {
        let req = request_with(json!({"sub": "1234567890"}));
        assert!(groups_from_request(&req).is_empty());
    }

    #[test]
    fn returns_groups_in_order() {
        let req = request_with(json!({"groups": ["groupA", "groupB"]}));
        assert_eq!(groups_from_request(&req), vec!["groupA", "groupB"]);
    }
}
