//! User entity and related types

use serde::{Deserialize, Serialize};

/// Stored user row.
///
/// `password` always holds the salted hash, never the plaintext. The full
/// row (hash included) is what `create` and `get` hand back to callers;
/// listings use [`UserSummary`] instead.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier, supplied by the caller at creation time, immutable
    pub id: String,
    pub name: String,
    pub email: String,
    /// Salted password hash in PHC string format
    pub password: String,
}

/// Input for creating a user. `password` is still plaintext here; the
/// repository hashes it before the insert.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub id: String,
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Projection of a user without the password column, used for listings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserSummary {
    pub id: String,
    pub name: String,
    pub email: String,
}

impl From<&User> for UserSummary {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.clone(),
            name: user.name.clone(),
            email: user.email.clone(),
        }
    }
}
