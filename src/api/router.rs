//! HTTP router assembly

use axum::{
    routing::{delete, get, post, put},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::api::state::AppState;
use crate::api::{auth, health, users};

/// Build the application router.
///
/// The banner, token issuance, and health endpoints are open; every user
/// endpoint requires a valid bearer token via the `RequireAuth` extractor.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(auth::index))
        .route("/getJWT", get(auth::issue_token))
        .route("/health", get(health::health_check))
        .route("/users", get(users::list_users))
        .route("/user/{id}", get(users::get_user))
        .route("/user/add", post(users::create_user))
        .route("/user/change-password/{id}", put(users::change_password))
        .route("/user/delete/{id}", delete(users::delete_user))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
