pub mod claims;
pub mod factory;
pub mod gate;
pub mod hmac_jwt;
pub mod policy;

pub use claims::{GROUPS_CLAIM, VerifiedClaims};
pub use factory::build_gate;
pub use gate::GroupGate;
pub use hmac_jwt::{HmacVerifier, TokenVerifier, VerifyError};
pub use policy::GatePolicy;
