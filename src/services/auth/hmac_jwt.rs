use jsonwebtoken::{Algorithm, DecodingKey, Validation};
use serde_json::{Map, Value};

use super::claims::VerifiedClaims;

// Errors returned by token verification.
//
// Callers only ever see "invalid token"; the variants exist for logs.
#[derive(Debug, thiserror::Error)]
pub enum VerifyError {
    #[error("unexpected signing method: {0:?}")]
    UnsupportedAlgorithm(Algorithm),
    #[error("jwt verification failed: {0}")]
    Jwt(#[from] jsonwebtoken::errors::Error),
}

/// Token verification collaborator used by the gate.
///
/// Implementations must fail closed: anything that is not a well-formed,
/// correctly signed and currently valid token is an error.
pub trait TokenVerifier: Send + Sync {
    fn verify(&self, token: &str) -> Result<VerifiedClaims, VerifyError>;
}

/// HMAC (HS256/HS384/HS512) JWT verifier over a shared secret.
///
/// - Key material is intentionally not printable via Debug.
/// - `exp`/`nbf` are checked when present; neither is required.
#[derive(Clone)]
pub struct HmacVerifier {
    decoding_key: DecodingKey,
    leeway_seconds: u64,
}

impl std::fmt::Debug for HmacVerifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HmacVerifier")
            .field("leeway_seconds", &self.leeway_seconds)
            .finish_non_exhaustive()
    }
}

impl HmacVerifier {
    pub fn new(secret: impl AsRef<[u8]>) -> Self {
        Self {
            decoding_key: DecodingKey::from_secret(secret.as_ref()),
            leeway_seconds: 0,
        }
    }

    /// Clock skew tolerated on `exp`/`nbf`.
    pub fn with_leeway(mut self, leeway_seconds: u64) -> Self {
        self.leeway_seconds = leeway_seconds;
        self
    }

    /// Key-selection callback: hands out the secret only for the HMAC family.
    ///
    /// This is what stops a token declaring e.g. RS256 from being checked
    /// against the shared secret (algorithm confusion).
    fn key_for(&self, alg: Algorithm) -> Result<&DecodingKey, VerifyError> {
        match alg {
            Algorithm::HS256 | Algorithm::HS384 | Algorithm::HS512 => Ok(&self.decoding_key),
            other => {
                tracing::debug!(alg = ?other, "unexpected signing method");
                Err(VerifyError::UnsupportedAlgorithm(other))
            }
        }
    }

    fn validation_for(&self, alg: Algorithm) -> Validation {
        let mut validation = Validation::new(alg);
        // Tokens without `exp` are accepted; `exp`/`nbf` are enforced when present.
        validation.required_spec_claims.clear();
        validation.validate_exp = true;
        validation.validate_nbf = true;
        validation.validate_aud = false;
        validation.leeway = self.leeway_seconds;
        validation
    }
}

impl TokenVerifier for HmacVerifier {
    fn verify(&self, token: &str) -> Result<VerifiedClaims, VerifyError> {
        let header = jsonwebtoken::decode_header(token)?;
        let key = self.key_for(header.alg)?;

        let data = jsonwebtoken::decode::<Map<String, Value>>(
            token,
            key,
            &self.validation_for(header.alg),
        )?;

        Ok(VerifiedClaims::from_verified(data.claims))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};
    use jsonwebtoken::{EncodingKey, Header};
    use serde_json::json;

    const SECRET: &str = "mysecret";

    fn mint(alg: Algorithm, secret: &str, claims: &Value) -> String {
        jsonwebtoken::encode(
            &Header::new(alg),
            claims,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
        .unwrap()
    }

    fn now() -> i64 {
        chrono::Utc::now().timestamp()
    }

    #[test]
    fn accepts_every_hmac_variant() {
        let verifier = HmacVerifier::new(SECRET);
        for alg in [Algorithm::HS256, Algorithm::HS384, Algorithm::HS512] {
            let token = mint(alg, SECRET, &json!({"groups": ["groupA"]}));
            let claims = verifier.verify(&token).unwrap();
            assert_eq!(claims.groups(), Some(vec!["groupA".to_string()]));
        }
    }

    #[test]
    fn token_without_exp_is_accepted() {
        let verifier = HmacVerifier::new(SECRET);
        let token = mint(Algorithm::HS256, SECRET, &json!({"sub": "1234567890"}));
        assert!(verifier.verify(&token).is_ok());
    }

    #[test]
    fn wrong_secret_is_rejected() {
        let verifier = HmacVerifier::new(SECRET);
        let token = mint(Algorithm::HS256, "othersecret", &json!({"groups": []}));
        assert!(matches!(verifier.verify(&token), Err(VerifyError::Jwt(_))));
    }

    #[test]
    fn expired_token_is_rejected() {
        let verifier = HmacVerifier::new(SECRET);
        let token = mint(
            Algorithm::HS256,
            SECRET,
            &json!({"groups": ["groupA"], "exp": now() - 3600}),
        );
        assert!(verifier.verify(&token).is_err());
    }

    #[test]
    fn leeway_covers_small_clock_skew() {
        let token = mint(
            Algorithm::HS256,
            SECRET,
            &json!({"groups": ["groupA"], "exp": now() - 5}),
        );
        assert!(HmacVerifier::new(SECRET).verify(&token).is_err());
        assert!(
            HmacVerifier::new(SECRET)
                .with_leeway(60)
                .verify(&token)
                .is_ok()
        );
    }

    #[test]
    fn not_yet_valid_token_is_rejected() {
        let verifier = HmacVerifier::new(SECRET);
        let token = mint(
            Algorithm::HS256,
            SECRET,
            &json!({"groups": ["groupA"], "nbf": now() + 3600}),
        );
        assert!(verifier.verify(&token).is_err());
    }

    #[test]
    fn non_hmac_algorithm_is_rejected_before_signature_check() {
        let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"RS256","typ":"JWT"}"#);
        let payload = URL_SAFE_NO_PAD.encode(br#"{"groups":["groupA"]}"#);
        let signature = URL_SAFE_NO_PAD.encode(b"not-a-signature");
        let token = format!("{header}.{payload}.{signature}");

        let err = HmacVerifier::new(SECRET).verify(&token).unwrap_err();
        assert!(matches!(
            err,
            VerifyError::UnsupportedAlgorithm(Algorithm::RS256)
        ));
    }

    #[test]
    fn alg_none_is_rejected() {
        let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"none","typ":"JWT"}"#);
        let payload = URL_SAFE_NO_PAD.encode(br#"{"groups":["groupA"]}"#);
        let token = format!("{header}.{payload}.");

        assert!(HmacVerifier::new(SECRET).verify(&token).is_err());
    }

    #[test]
    fn garbage_is_rejected() {
        let verifier = HmacVerifier::new(SECRET);
        for token in ["", "abc", "a.b.c", "a.b"] {
            assert!(verifier.verify(token).is_err(), "accepted {token:?}");
        }
    }

    #[test]
    fn verification_is_repeatable() {
        let verifier = HmacVerifier::new(SECRET);
        let token = mint(
            Algorithm::HS256,
            SECRET,
            &json!({"groups": ["groupA", "groupB"], "name": "John Doe"}),
        );
        assert_eq!(
            verifier.verify(&token).unwrap(),
            verifier.verify(&token).unwrap()
        );
    }

    #[test]
    fn debug_does_not_print_the_key() {
        let rendered = format!("{:?}", HmacVerifier::new(SECRET));
        assert!(!rendered.contains(SECRET));
    }
}
