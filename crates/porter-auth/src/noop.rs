// ABOUTME: No-verification authentication strategy for trusted-network deployments.
// ABOUTME: Derives the caller identity from the x-user-id header, falling back to anonymous.

use async_trait::async_trait;

use crate::headers::RequestHeaders;
use crate::identity::Identity;
use crate::strategy::AuthStrategy;

/// Header consulted for the caller's identity, matched case-insensitively.
pub const USER_ID_HEADER: &str = "x-user-id";

/// Authentication strategy that performs no credential verification.
///
/// Intended for local development and trust-the-network deployments. The
/// identity is taken verbatim from [`USER_ID_HEADER`] when present and
/// non-blank; otherwise the caller becomes the anonymous sentinel. Every
/// request is served, none rejected.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopAuth;

#[async_trait]
impl AuthStrategy for NoopAuth {
    async fn authenticate(&self, headers: &RequestHeaders) -> Identity {
        match headers.get(USER_ID_HEADER).filter(|v| !v.trim().is_empty()) {
            Some(user_id) => Identity::user(user_id),
            None => Identity::anonymous(),
        }
    }
}
