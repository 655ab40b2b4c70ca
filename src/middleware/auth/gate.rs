//! JWT group gate as a tower layer.
//!
//! Per request:
//! - `Authorization: Bearer <jwt>` is extracted (401 when absent/malformed)
//! - the token is verified (401) and the `groups` claim checked (403)
//! - on success `VerifiedClaims` is inserted into the request extensions and
//!   the inner service runs; otherwise it is never called
//!
//! ```ignore
//! let app = Router::new()
//!     .route("/", get(handler))
//!     .layer(GroupGate::any_of("mysecret", ["groupB"]));
//! ```

use std::{
    future::Future,
    net::SocketAddr,
    pin::Pin,
    task::{Context, Poll},
};

use axum::{
    Router,
    extract::ConnectInfo,
    http::Request,
    response::{IntoResponse, Response},
};
use tower::{Layer, Service};

use crate::error::GateError;
use crate::middleware::auth::bearer::bearer_from_headers;
use crate::services::auth::{GroupGate, VerifiedClaims};

/// Put `router` behind `gate`.
pub fn apply<S>(router: Router<S>, gate: GroupGate) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    router.layer(gate)
}

impl<S> Layer<S> for GroupGate {
    type Service = GroupGateService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        GroupGateService {
            gate: self.clone(),
            inner,
        }
    }
}

/// Service produced by the [`GroupGate`] layer.
///
/// A rejected request never reaches `inner`. The instance that was driven
/// ready is swapped out for a fresh clone and dropped, so readiness held by
/// bounded services (e.g. `tower::buffer::Buffer`) is released.
#[derive(Clone, Debug)]
pub struct GroupGateService<S> {
    gate: GroupGate,
    inner: S,
}

impl<S> GroupGateService<S> {
    fn check<B>(&self, req: &Request<B>) -> Result<VerifiedClaims, GateError> {
        let token = bearer_from_headers(req.headers())?;
        self.gate.authorize(token)
    }
}

impl<S, B> Service<Request<B>> for GroupGateService<S>
where
    S: Service<Request<B>, Response = Response> + Clone,
    S::Future: Send + 'static,
    S::Error: 'static,
{
    type Response = Response;
    type Error = S::Error;
    type Future = Pin<Box<dyn Future<Output = Result<Response, S::Error>> + Send>>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, mut req: Request<B>) -> Self::Future {
        match self.check(&req) {
            Ok(claims) => {
                // gate -> handler/extractor hand-off
                req.extensions_mut().insert(claims);
                Box::pin(self.inner.call(req))
            }
            Err(err) => {
                let fresh = self.inner.clone();
                drop(std::mem::replace(&mut self.inner, fresh));

                log_rejection(&req, &err);
                let response = err.into_response();
                Box::pin(async move { Ok(response) })
            }
        }
    }
}

fn log_rejection<B>(req: &Request<B>, err: &GateError) {
    let remote_address = req
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| addr.to_string());

    tracing::warn!(
        method = %req.method(),
        uri = %req.uri(),
        remote_address = remote_address.as_deref().unwrap_or("-"),
        status = err.status().as_u16(),
        error = %err,
        "jwt gate rejected request"
    );
}
