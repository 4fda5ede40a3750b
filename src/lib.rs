//! A small user management HTTP service.
//!
//! CRUD endpoints for a single `users` table backed by PostgreSQL, guarded
//! by bearer-token authentication, with argon2 password hashing.

pub mod api;
pub mod config;
pub mod domain;
pub mod infrastructure;

use std::sync::Arc;

use anyhow::Context;
use rand::distributions::Alphanumeric;
use rand::Rng;
use sqlx::postgres::PgPoolOptions;
use tracing::warn;

use crate::api::AppState;
use crate::config::AppConfig;
use crate::infrastructure::auth::{JwtConfig, JwtService};
use crate::infrastructure::user::{Argon2Hasher, PasswordHasher, PostgresUserRepository};

/// Wire up the shared services from configuration.
///
/// Connects the database pool, builds the hasher and token service, and
/// hands everything to the router through `AppState`. Nothing here is a
/// global; restarting means rebuilding the state from scratch.
pub async fn create_app_state(config: &AppConfig) -> anyhow::Result<AppState> {
    let pool = PgPoolOptions::new()
        .max_connections(config.database.max_connections)
        .connect_with(config.database.connect_options())
        .await
        .context("Failed to connect to the database")?;

    let hasher: Arc<dyn PasswordHasher> = Arc::new(Argon2Hasher::new(
        &config.security.password_pepper,
        config.security.hash_cost,
    ));

    let repository = Arc::new(PostgresUserRepository::new(pool, hasher.clone()));

    let secret = match resolve_jwt_secret(config) {
        Some(secret) => secret,
        None => {
            warn!("No JWT secret configured, generating a random one; tokens will not survive a restart");
            random_secret()
        }
    };

    let jwt_service = Arc::new(JwtService::new(JwtConfig::new(
        secret,
        config.auth.jwt_expiration_hours,
    )));

    Ok(AppState::new(repository, hasher, jwt_service))
}

/// Configured secret first, then the JWT_SECRET environment variable
fn resolve_jwt_secret(config: &AppConfig) -> Option<String> {
    config
        .auth
        .jwt_secret
        .clone()
        .filter(|s| !s.is_empty())
        .or_else(|| std::env::var("JWT_SECRET").ok().filter(|s| !s.is_empty()))
}

fn random_secret() -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(64)
        .map(char::from)
        .collect()
}
