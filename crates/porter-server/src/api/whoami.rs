// ABOUTME: Identity introspection handler.
// ABOUTME: Returns the caller identity the middleware resolved for this request.

use axum::{Extension, Json};
use porter_auth::Identity;

/// GET /api/whoami - Return the identity resolved for this request.
///
/// The `Identity` extension is always present: the identity layer wraps
/// every route and resolution is total.
pub async fn whoami(Extension(identity): Extension<Identity>) -> Json<Identity> {
    Json(identity)
}
