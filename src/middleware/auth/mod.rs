//! Bearer JWT authentication + group authorization.
pub mod bearer;
pub mod context;
pub mod gate;

pub use bearer::{bearer_from_headers, extract_bearer};
pub use context::{groups_from_extensions, groups_from_request};
pub use gate::{GroupGateService, apply};
