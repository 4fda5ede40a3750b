//! Unauthenticated endpoints: banner and demo token issuance

use axum::extract::State;
use tracing::debug;

use crate::api::state::AppState;
use crate::api::types::ResponseError;

/// GET /
pub async fn index() -> &'static str {
    "User API"
}

/// GET /getJWT
///
/// Issues a short-lived token with demo claims and returns it as a plain
/// string, ready to be pasted into an `Authorization: Bearer` header.
pub async fn issue_token(State(state): State<AppState>) -> Result<String, ResponseError> {
    debug!("Issuing demo token");

    state
        .jwt_service
        .issue("Demo User", "demo.user@example.com")
        .map_err(|e| {
            tracing::error!("Token issuance failed: {}", e);
            ResponseError::system()
        })
}
