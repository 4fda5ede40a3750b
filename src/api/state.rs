//! Application state for shared services

use std::sync::Arc;

use crate::domain::user::UserRepository;
use crate::infrastructure::auth::JwtService;
use crate::infrastructure::user::PasswordHasher;

/// Shared services, explicitly constructed at startup and injected into the
/// router. The connection pool lives inside the repository; there is no
/// module-level singleton state.
#[derive(Clone)]
pub struct AppState {
    pub user_repository: Arc<dyn UserRepository>,
    pub password_hasher: Arc<dyn PasswordHasher>,
    pub jwt_service: Arc<JwtService>,
}

impl AppState {
    pub fn new(
        user_repository: Arc<dyn UserRepository>,
        password_hasher: Arc<dyn PasswordHasher>,
        jwt_service: Arc<JwtService>,
    ) -> Self {
        Self {
            user_repository,
            password_hasher,
            jwt_service,
        }
    }
}
