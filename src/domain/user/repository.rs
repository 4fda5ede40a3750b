//! User repository trait

use async_trait::async_trait;
use std::fmt::Debug;

use super::entity::{NewUser, User, UserSummary};
use crate::domain::DomainError;

/// Repository trait for the `users` table.
///
/// Implementations hash plaintext passwords before they touch the store;
/// callers never pass or receive a plaintext through any other path.
#[async_trait]
pub trait UserRepository: Send + Sync + Debug {
    /// Insert a new user, hashing the plaintext password first.
    /// Returns the stored row, hash included.
    async fn create(&self, user: NewUser) -> Result<User, DomainError>;

    /// List all users, projected to id/name/email. Ordering is the store
    /// default; no ORDER BY is applied.
    async fn list(&self) -> Result<Vec<UserSummary>, DomainError>;

    /// Get the full row for an id. Absence is `Ok(None)`, not an error.
    async fn get(&self, id: &str) -> Result<Option<User>, DomainError>;

    /// Hash the new plaintext and update the password column.
    ///
    /// Reports success even when no row matched the id; existence checks
    /// are the handler's responsibility.
    async fn change_password(&self, id: &str, new_password: &str) -> Result<bool, DomainError>;

    /// Delete a user. Returns `true` iff exactly one row was affected.
    async fn delete(&self, id: &str) -> Result<bool, DomainError>;
}
