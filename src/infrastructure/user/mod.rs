//! User infrastructure module
//!
//! Implementations backing the user domain: Argon2 password hashing and
//! the PostgreSQL repository.

mod password;
mod postgres_repository;

pub use password::{Argon2Hasher, PasswordHasher};
pub use postgres_repository::PostgresUserRepository;
