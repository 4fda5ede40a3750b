//! JWT token generation and validation

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

use crate::domain::DomainError;

/// Claims carried by a bearer token.
///
/// The payload is application-defined and not tied to a stored user record;
/// it exists only for the duration of request handling.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenClaims {
    /// Subject name
    pub name: String,
    /// Subject email
    pub email: String,
    /// Issued at timestamp (Unix epoch)
    pub iat: i64,
    /// Expiration timestamp (Unix epoch)
    pub exp: i64,
}

impl TokenClaims {
    /// Create new claims expiring `expiration_hours` from now
    pub fn new(name: impl Into<String>, email: impl Into<String>, expiration_hours: u64) -> Self {
        let now = Utc::now();
        let exp = now + Duration::hours(expiration_hours as i64);

        Self {
            name: name.into(),
            email: email.into(),
            iat: now.timestamp(),
            exp: exp.timestamp(),
        }
    }
}

/// Configuration for the JWT service
#[derive(Debug, Clone)]
pub struct JwtConfig {
    /// Shared secret for HS256 signing and verification
    pub secret: String,
    /// Token lifetime in hours
    pub expiration_hours: u64,
}

impl JwtConfig {
    pub fn new(secret: impl Into<String>, expiration_hours: u64) -> Self {
        Self {
            secret: secret.into(),
            expiration_hours,
        }
    }
}

/// Signs and verifies bearer tokens with a shared secret
#[derive(Clone)]
pub struct JwtService {
    config: JwtConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl Debug for JwtService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtService")
            .field("expiration_hours", &self.config.expiration_hours)
            .field("secret", &"[hidden]")
            .finish()
    }
}

impl JwtService {
    pub fn new(config: JwtConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.secret.as_bytes());

        Self {
            config,
            encoding_key,
            decoding_key,
        }
    }

    /// Sign a token for the given subject
    pub fn issue(&self, name: &str, email: &str) -> Result<String, DomainError> {
        let claims = TokenClaims::new(name, email, self.config.expiration_hours);

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| DomainError::internal(format!("Failed to sign token: {}", e)))
    }

    /// Verify a token's signature and expiry, returning the decoded claims
    pub fn validate(&self, token: &str) -> Result<TokenClaims, DomainError> {
        let validation = Validation::default();

        let token_data = decode::<TokenClaims>(token, &self.decoding_key, &validation)
            .map_err(|e| DomainError::validation(format!("Invalid token: {}", e)))?;

        Ok(token_data.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_service() -> JwtService {
        JwtService::new(JwtConfig::new("test-secret-key-12345", 24))
    }

    #[test]
    fn test_issue_and_validate() {
        let service = create_service();

        let token = service.issue("Test User", "test@example.com").unwrap();
        assert!(!token.is_empty());

        let claims = service.validate(&token).unwrap();
        assert_eq!(claims.name, "Test User");
        assert_eq!(claims.email, "test@example.com");
        assert!(claims.iat <= Utc::now().timestamp());
        assert!(claims.exp > Utc::now().timestamp());
    }

    #[test]
    fn test_invalid_token() {
        let service = create_service();

        assert!(service.validate("invalid-token").is_err());
        assert!(service.validate("").is_err());
    }

    #[test]
    fn test_wrong_secret() {
        let service1 = JwtService::new(JwtConfig::new("secret-1", 24));
        let service2 = JwtService::new(JwtConfig::new("secret-2", 24));

        let token = service1.issue("Test User", "test@example.com").unwrap();
        assert!(service2.validate(&token).is_err());
    }

    #[test]
    fn test_expired_token() {
        let service = create_service();

        // Craft claims already past their expiry
        let past = Utc::now() - Duration::hours(2);
        let claims = TokenClaims {
            name: "Test User".to_string(),
            email: "test@example.com".to_string(),
            iat: (past - Duration::hours(1)).timestamp(),
            exp: past.timestamp(),
        };

        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(b"test-secret-key-12345"),
        )
        .unwrap();

        assert!(service.validate(&token).is_err());
    }
}
