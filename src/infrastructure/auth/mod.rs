//! Token signing and verification

mod jwt;

pub use jwt::{JwtConfig, JwtService, TokenClaims};
