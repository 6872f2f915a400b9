// ABOUTME: Identity resolution middleware for the porter server.
// ABOUTME: Runs the active auth strategy per request and attaches the result to request extensions.

use axum::body::Body;
use axum::http::{HeaderMap, Request};
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};

use porter_auth::{AuthStrategy, RequestHeaders};
use tower::{Layer, Service};

/// A tower Layer that resolves a caller identity on every request.
#[derive(Clone)]
pub struct IdentityLayer {
    strategy: Arc<dyn AuthStrategy>,
}

impl IdentityLayer {
    /// Create a new IdentityLayer around the active strategy.
    pub fn new(strategy: Arc<dyn AuthStrategy>) -> Self {
        Self { strategy }
    }
}

impl<S> Layer<S> for IdentityLayer {
    type Service = IdentityMiddleware<S>;

    fn layer(&self, inner: S) -> Self::Service {
        IdentityMiddleware {
            inner,
            strategy: Arc::clone(&self.strategy),
        }
    }
}

/// The middleware service that attaches an `Identity` to each request.
///
/// Resolution is total: requests without a recognizable caller proceed as
/// the anonymous principal, never as an error response. Handlers behind
/// this layer can rely on the `Identity` extension being present.
#[derive(Clone)]
pub struct IdentityMiddleware<S> {
    inner: S,
    strategy: Arc<dyn AuthStrategy>,
}

impl<S> Service<Request<Body>> for IdentityMiddleware<S>
where
    S: Service<Request<Body>> + Clone + Send + 'static,
    S::Future: Send + 'static,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send>>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, mut req: Request<Body>) -> Self::Future {
        let strategy = Arc::clone(&self.strategy);
        let mut inner = self.inner.clone();

        Box::pin(async move {
            let headers = normalize(req.headers());
            let identity = strategy.authenticate(&headers).await;
            tracing::debug!(identity = %identity.identity, "resolved caller identity");
            req.extensions_mut().insert(identity);
            inner.call(req).await
        })
    }
}

/// Build the canonical header mapping strategies consume.
///
/// `http` header names are already lowercase; values may be arbitrary
/// bytes and are decoded lossily. Case variants of one header arrive as
/// duplicate entries of the same name, so one of them wins.
fn normalize(headers: &HeaderMap) -> RequestHeaders {
    headers
        .iter()
        .map(|(name, value)| (name.as_str(), value.as_bytes()))
        .collect()
}
