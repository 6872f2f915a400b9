// ABOUTME: Identity descriptor produced by authentication strategies.
// ABOUTME: Defines the anonymous sentinel used when no caller identity can be derived.

use serde::{Deserialize, Serialize};

/// Reserved identity value for callers that could not be identified.
pub const ANONYMOUS_IDENTITY: &str = "anonymous";

/// Display name attached to the anonymous sentinel.
const ANONYMOUS_DISPLAY_NAME: &str = "Anonymous User";

/// The caller identity resolved for a single request.
///
/// Constructed fresh per inbound request, carried in request-scoped
/// context, and discarded when the request completes. Never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    /// Non-empty name for the caller. [`ANONYMOUS_IDENTITY`] is reserved
    /// for callers that could not be identified.
    pub identity: String,
    /// Human-readable label; equals `identity` for header-derived users.
    pub display_name: String,
    /// Whether the active strategy accepted the request. Strategies that
    /// verify nothing report `true` for every request they process.
    pub is_authenticated: bool,
}

impl Identity {
    /// Identity for a caller named by a non-empty user id.
    pub fn user(id: impl Into<String>) -> Self {
        let id = id.into();
        debug_assert!(!id.is_empty(), "empty user ids must resolve to anonymous");
        Self {
            display_name: id.clone(),
            identity: id,
            is_authenticated: true,
        }
    }

    /// The anonymous sentinel.
    pub fn anonymous() -> Self {
        Self {
            identity: ANONYMOUS_IDENTITY.to_string(),
            display_name: ANONYMOUS_DISPLAY_NAME.to_string(),
            is_authenticated: true,
        }
    }

    pub fn is_anonymous(&self) -> bool {
        self.identity == ANONYMOUS_IDENTITY
    }
}
