//! User domain
//!
//! Domain types and traits for the `user` entity: the stored row, creation
//! input, listing projection, field validation rules, and the repository
//! trait.

mod entity;
mod repository;
mod validation;

pub use entity::{NewUser, User, UserSummary};
pub use repository::UserRepository;
pub use validation::{validate_new_user, validate_password_change, FieldError};

#[cfg(test)]
pub use repository::mock::MockUserRepository;
