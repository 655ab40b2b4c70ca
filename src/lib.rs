//! Bearer-JWT gate for axum/tower services.
//!
//! Verifies an HMAC-signed JWT from `Authorization: Bearer <token>` and lets
//! the request through only when the token's `groups` claim intersects a
//! configured allow-list (or unconditionally, when the list is empty).
//!
//! ```ignore
//! use axum::{Router, routing::get};
//! use jwt_group_gate::{GroupGate, groups_from_request};
//!
//! let app = Router::new()
//!     .route("/", get(handler))
//!     .layer(GroupGate::any_of("mysecret", ["groupB"]));
//! ```
//!
//! Rejections carry only a status code:
//!
//! | probe                                        | status |
//! |----------------------------------------------|--------|
//! | no `Authorization` header                    | 401    |
//! | scheme other than `Bearer`, or no token part | 401    |
//! | bad signature / expired / non-HMAC `alg`     | 401    |
//! | valid token without a `groups` claim         | 403    |
//! | `groups` shares nothing with the allow-list  | 403    |

pub mod api;
pub mod app;
pub mod config;
pub mod error;
pub mod middleware;
pub mod services;
pub mod state;

pub use error::GateError;
pub use middleware::auth::{
    GroupGateService, extract_bearer, groups_from_extensions, groups_from_request,
};
pub use services::auth::{
    GROUPS_CLAIM, GatePolicy, GroupGate, HmacVerifier, TokenVerifier, VerifiedClaims, VerifyError,
};
