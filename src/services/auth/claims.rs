/*
 * Responsibility
 * - Verified claims type (only produced by a successful signature check)
 * - Soft accessors over dynamically typed claim values
 */
use serde::Serialize;
use serde_json::{Map, Value};

/// Name of the multi-valued claim holding the caller's group membership.
pub const GROUPS_CLAIM: &str = "groups";

/// Claims of a token whose signature and temporal claims were verified.
///
/// Values keep their JSON shape (`serde_json::Value`) since issuers put
/// arbitrary data next to `groups`. Only a `TokenVerifier` produces one.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct VerifiedClaims(Map<String, Value>);

impl VerifiedClaims {
    pub(crate) fn from_verified(claims: Map<String, Value>) -> Self {
        Self(claims)
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.0.get(name)
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    /// Claim `name` as a list of strings.
    ///
    /// - `None`: the claim is absent
    /// - `Some(vec![])`: present but not an array
    /// - otherwise the string elements, in order (others are dropped)
    pub fn string_list(&self, name: &str) -> Option<Vec<String>> {
        self.0.get(name).map(|value| string_list(name, value))
    }

    /// Group membership carried by the `groups` claim. See [`Self::string_list`].
    pub fn groups(&self) -> Option<Vec<String>> {
        self.string_list(GROUPS_CLAIM)
    }
}

fn string_list(name: &str, value: &Value) -> Vec<String> {
    let Value::Array(items) = value else {
        tracing::debug!(claim = name, value = %value, "claim is not an array; treating as empty");
        return Vec::new();
    };

    items
        .iter()
        .filter_map(|item| match item {
            Value::String(s) => Some(s.clone()),
            other => {
                tracing::debug!(claim = name, element = %other, "dropping non-string claim element");
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn claims(value: Value) -> VerifiedClaims {
        match value {
            Value::Object(map) => VerifiedClaims::from_verified(map),
            _ => panic!("test claims must be an object"),
        }
    }

    #[test]
    fn groups_absent_is_none() {
        let c = claims(json!({"sub": "1234567890"}));
        assert_eq!(c.groups(), None);
    }

    #[test]
    fn groups_not_an_array_is_empty() {
        let c = claims(json!({"groups": "garbage"}));
        assert_eq!(c.groups(), Some(vec![]));

        let c = claims(json!({"groups": {"groupA": true}}));
        assert_eq!(c.groups(), Some(vec![]));
    }

    #[test]
    fn non_string_elements_are_dropped() {
        let c = claims(json!({"groups": ["groupA", 7, null, {"x": 1}, "groupB", true]}));
        assert_eq!(
            c.groups(),
            Some(vec!["groupA".to_string(), "groupB".to_string()])
        );
    }

    #[test]
    fn other_claims_stay_reachable() {
        let c = claims(json!({"sub": "1234567890", "name": "John Doe"}));
        assert_eq!(c.get("name"), Some(&json!("John Doe")));
        assert_eq!(c.as_map().len(), 2);
        assert_eq!(c.string_list("name"), Some(vec![]));
    }
}
