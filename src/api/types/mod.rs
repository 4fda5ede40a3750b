//! Shared API response types

mod envelope;

pub use envelope::{
    ResponseError, ResponseFailed, ResponseSuccess, PASSWORD_MISMATCH, SYSTEM_ERROR,
    USER_NOT_FOUND, VALIDATION_FAILED,
};
