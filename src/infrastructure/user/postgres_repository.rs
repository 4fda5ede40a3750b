//! PostgreSQL user repository implementation

use async_trait::async_trait;
use sqlx::{PgPool, Row};
use std::sync::Arc;

use crate::domain::user::{NewUser, User, UserRepository, UserSummary};
use crate::domain::DomainError;

use super::password::PasswordHasher;

/// PostgreSQL implementation of [`UserRepository`].
///
/// Holds the shared connection pool as an injected dependency; every query
/// checks a connection out of the pool and releases it on all exit paths.
#[derive(Debug, Clone)]
pub struct PostgresUserRepository {
    pool: PgPool,
    hasher: Arc<dyn PasswordHasher>,
}

impl PostgresUserRepository {
    /// Create a new repository with the given pool and password hasher
    pub fn new(pool: PgPool, hasher: Arc<dyn PasswordHasher>) -> Self {
        Self { pool, hasher }
    }
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn create(&self, user: NewUser) -> Result<User, DomainError> {
        let hash = self.hasher.hash(&user.password)?;

        let row = sqlx::query(
            r#"
            INSERT INTO users (id, name, email, password)
            VALUES ($1, $2, $3, $4)
            RETURNING id, name, email, password
            "#,
        )
        .bind(&user.id)
        .bind(&user.name)
        .bind(&user.email)
        .bind(&hash)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to create user: {}", e)))?;

        row_to_user(&row)
    }

    async fn list(&self) -> Result<Vec<UserSummary>, DomainError> {
        let rows = sqlx::query("SELECT id, name, email FROM users")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to list users: {}", e)))?;

        Ok(rows
            .iter()
            .map(|row| UserSummary {
                id: row.get("id"),
                name: row.get("name"),
                email: row.get("email"),
            })
            .collect())
    }

    async fn get(&self, id: &str) -> Result<Option<User>, DomainError> {
        let row = sqlx::query("SELECT id, name, email, password FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to get user: {}", e)))?;

        match row {
            Some(row) => Ok(Some(row_to_user(&row)?)),
            None => Ok(None),
        }
    }

    async fn change_password(&self, id: &str, new_password: &str) -> Result<bool, DomainError> {
        let hash = self.hasher.hash(new_password)?;

        sqlx::query("UPDATE users SET password = $2 WHERE id = $1")
            .bind(id)
            .bind(&hash)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to change password: {}", e)))?;

        // An update matching zero rows still reports success; the handler
        // layer pre-checks existence
        Ok(true)
    }

    async fn delete(&self, id: &str) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to delete user: {}", e)))?;

        Ok(result.rows_affected() == 1)
    }
}

fn row_to_user(row: &sqlx::postgres::PgRow) -> Result<User, DomainError> {
    Ok(User {
        id: row.get("id"),
        name: row.get("name"),
        email: row.get("email"),
        password: row.get("password"),
    })
}
