//! User CRUD endpoints
//!
//! Every handler validates its input where applicable, calls the
//! repository, and maps the outcome onto the uniform envelope. Business
//! failures (validation, absence, password mismatch) are "failed"
//! envelopes; unexpected repository errors are logged and become the
//! generic "error" envelope. All of these use HTTP 200.

use axum::{
    extract::{Path, State},
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use tracing::{debug, error};
use uuid::Uuid;

use crate::api::middleware::RequireAuth;
use crate::api::state::AppState;
use crate::api::types::{
    ResponseError, ResponseFailed, ResponseSuccess, PASSWORD_MISMATCH, USER_NOT_FOUND,
    VALIDATION_FAILED,
};
use crate::domain::user::{validate_new_user, validate_password_change, NewUser};

/// Request body for POST /user/add
#[derive(Debug, Clone, Deserialize)]
pub struct CreateUserRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

/// Request body for PUT /user/change-password/{id}
#[derive(Debug, Clone, Deserialize)]
pub struct ChangePasswordRequest {
    #[serde(rename = "currentPassword", default)]
    pub current_password: String,
    #[serde(rename = "newPassword", default)]
    pub new_password: String,
}

/// POST /user/add
///
/// Creates a user with a freshly minted id. The success payload is the
/// stored row as returned by the insert, password hash included.
pub async fn create_user(
    State(state): State<AppState>,
    RequireAuth(_): RequireAuth,
    Json(request): Json<CreateUserRequest>,
) -> Response {
    let errors = validate_new_user(&request.name, &request.email, &request.password);
    if !errors.is_empty() {
        return ResponseFailed::with_errors(VALIDATION_FAILED, errors).into_response();
    }

    let user = NewUser {
        id: Uuid::new_v4().to_string(),
        name: request.name,
        email: request.email,
        password: request.password,
    };

    debug!(id = %user.id, "Creating user");

    match state.user_repository.create(user).await {
        Ok(stored) => ResponseSuccess::new(stored).into_response(),
        Err(e) => {
            error!("Create user failed: {}", e);
            ResponseError::system().into_response()
        }
    }
}

/// GET /users
pub async fn list_users(State(state): State<AppState>, RequireAuth(_): RequireAuth) -> Response {
    match state.user_repository.list().await {
        Ok(users) => ResponseSuccess::new(users).into_response(),
        Err(e) => {
            error!("List users failed: {}", e);
            ResponseError::system().into_response()
        }
    }
}

/// GET /user/{id}
pub async fn get_user(
    State(state): State<AppState>,
    RequireAuth(_): RequireAuth,
    Path(id): Path<String>,
) -> Response {
    match state.user_repository.get(&id).await {
        Ok(Some(user)) => ResponseSuccess::new(user).into_response(),
        Ok(None) => ResponseFailed::new(USER_NOT_FOUND).into_response(),
        Err(e) => {
            error!("Get user failed: {}", e);
            ResponseError::system().into_response()
        }
    }
}

/// PUT /user/change-password/{id}
///
/// Pre-checks that the target user exists and that the supplied current
/// password verifies against the stored hash before touching the password
/// column; the repository itself does not re-check existence.
pub async fn change_password(
    State(state): State<AppState>,
    RequireAuth(_): RequireAuth,
    Path(id): Path<String>,
    Json(request): Json<ChangePasswordRequest>,
) -> Response {
    let errors = validate_password_change(&request.current_password, &request.new_password);
    if !errors.is_empty() {
        return ResponseFailed::with_errors(VALIDATION_FAILED, errors).into_response();
    }

    let user = match state.user_repository.get(&id).await {
        Ok(Some(user)) => user,
        Ok(None) => return ResponseFailed::new(USER_NOT_FOUND).into_response(),
        Err(e) => {
            error!("Change password failed: {}", e);
            return ResponseError::system().into_response();
        }
    };

    if !state
        .password_hasher
        .verify(&request.current_password, &user.password)
    {
        return ResponseFailed::new(PASSWORD_MISMATCH).into_response();
    }

    debug!(id = %id, "Changing password");

    match state
        .user_repository
        .change_password(&id, &request.new_password)
        .await
    {
        Ok(_) => ResponseSuccess::empty().into_response(),
        Err(e) => {
            error!("Change password failed: {}", e);
            ResponseError::system().into_response()
        }
    }
}

/// DELETE /user/delete/{id}
pub async fn delete_user(
    State(state): State<AppState>,
    RequireAuth(_): RequireAuth,
    Path(id): Path<String>,
) -> Response {
    match state.user_repository.delete(&id).await {
        Ok(true) => ResponseSuccess::empty().into_response(),
        Ok(false) => ResponseFailed::new(USER_NOT_FOUND).into_response(),
        Err(e) => {
            error!("Delete user failed: {}", e);
            ResponseError::system().into_response()
        }
    }
}
