// ABOUTME: The pluggable authentication strategy contract.
// ABOUTME: Strategies resolve a caller identity from the normalized request headers.

use async_trait::async_trait;

use crate::headers::RequestHeaders;
use crate::identity::Identity;

/// A pluggable authentication strategy.
///
/// Exactly one strategy is active for the lifetime of the process,
/// selected from configuration at startup. `authenticate` is async so
/// that credential-validating strategies can reach out to a verifier.
/// The contract is total over all header inputs: strategies resolve
/// unidentified callers to the anonymous sentinel instead of failing.
#[async_trait]
pub trait AuthStrategy: Send + Sync {
    /// Resolve the caller identity for one request.
    async fn authenticate(&self, headers: &RequestHeaders) -> Identity;
}
