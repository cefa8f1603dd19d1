//! JWT Token Service
//!
//! Handles bearer token validation and claim extraction. Token issuance is
//! the identity infrastructure's job; this service only verifies.

use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::auth::Role;

/// JWT verification configuration
#[derive(Debug, Clone)]
pub struct JwtConfig {
    /// Shared HS256 secret (should be at least 32 bytes)
    pub secret: String,
}

impl JwtConfig {
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
        }
    }
}

/// Claims carried by a verified bearer token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Caller identity (subject)
    pub sub: String,
    /// Role name as issued (wire form, e.g. "ADMIN")
    pub role: String,
    /// Issued at timestamp
    pub iat: i64,
    /// Expiration timestamp
    pub exp: i64,
}

/// JWT Errors
#[derive(Error, Debug)]
pub enum JwtError {
    #[error("Invalid token: {0}")]
    InvalidToken(String),

    #[error("Token expired")]
    ExpiredToken,

    #[error("Invalid signature")]
    InvalidSignature,
}

/// JWT verification service
///
/// Holds the decoding key and validation rules for the process lifetime.
/// Verification is pure computation; no I/O, no per-request state.
#[derive(Clone)]
pub struct JwtService {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl JwtService {
    pub fn with_config(config: &JwtConfig) -> Self {
        Self {
            decoding_key: DecodingKey::from_secret(config.secret.as_bytes()),
            validation: Validation::new(Algorithm::HS256),
        }
    }

    /// Validate and decode a bearer token
    ///
    /// Expired, tampered, and structurally invalid tokens map to distinct
    /// variants for logging; callers surface them identically.
    pub fn validate_token(&self, token: &str) -> Result<Claims, JwtError> {
        let token_data =
            decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|e| {
                match e.kind() {
                    ErrorKind::ExpiredSignature => JwtError::ExpiredToken,
                    ErrorKind::InvalidSignature => JwtError::InvalidSignature,
                    _ => JwtError::InvalidToken(e.to_string()),
                }
            })?;

        Ok(token_data.claims)
    }

    /// Extract the token from an Authorization header value
    ///
    /// The `Bearer ` prefix is case-sensitive, single space.
    pub fn extract_from_header(header: &str) -> Option<&str> {
        header.strip_prefix("Bearer ")
    }
}

/// Verified caller identity, attached to the request for downstream stages
#[derive(Debug, Clone)]
pub struct CurrentUser {
    pub id: String,
    pub role: String,
}

impl From<Claims> for CurrentUser {
    fn from(claims: Claims) -> Self {
        Self {
            id: claims.sub,
            role: claims.role,
        }
    }
}

impl CurrentUser {
    /// Exact, case-sensitive role check against the claim wire form
    pub fn has_role(&self, role: Role) -> bool {
        Role::from_claim(&self.role) == Some(role)
    }

    pub fn is_admin(&self) -> bool {
        self.has_role(Role::Admin)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};
    use jsonwebtoken::{EncodingKey, Header, encode};

    const SECRET: &str = "unit-test-secret-0123456789abcdef";

    fn service() -> JwtService {
        JwtService::with_config(&JwtConfig::new(SECRET))
    }

    fn mint(secret: &str, role: &str, exp_offset: Duration) -> String {
        let now = Utc::now();
        let claims = Claims {
            sub: "user123".to_string(),
            role: role.to_string(),
            iat: now.timestamp(),
            exp: (now + exp_offset).timestamp(),
        };
        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
        .unwrap()
    }

    #[test]
    fn test_valid_token_round_trip() {
        let token = mint(SECRET, "ADMIN", Duration::hours(1));
        let claims = service().validate_token(&token).unwrap();

        assert_eq!(claims.sub, "user123");
        assert_eq!(claims.role, "ADMIN");
    }

    #[test]
    fn test_expired_token() {
        // Past the default validation leeway
        let token = mint(SECRET, "ADMIN", Duration::hours(-1));
        let err = service().validate_token(&token).unwrap_err();

        assert!(matches!(err, JwtError::ExpiredToken));
    }

    #[test]
    fn test_tampered_signature() {
        let token = mint("a-completely-different-secret-value", "ADMIN", Duration::hours(1));
        let err = service().validate_token(&token).unwrap_err();

        assert!(matches!(err, JwtError::InvalidSignature));
    }

    #[test]
    fn test_structurally_invalid_token() {
        let err = service().validate_token("abc.def.ghi").unwrap_err();

        assert!(matches!(err, JwtError::InvalidToken(_)));
    }

    #[test]
    fn test_extract_from_header() {
        assert_eq!(
            JwtService::extract_from_header("Bearer abc.def.ghi"),
            Some("abc.def.ghi")
        );
        // Scheme is case-sensitive
        assert_eq!(JwtService::extract_from_header("bearer abc"), None);
        assert_eq!(JwtService::extract_from_header("Basic abc"), None);
        assert_eq!(JwtService::extract_from_header("Bearer"), None);
    }

    #[test]
    fn test_current_user_roles() {
        let user = CurrentUser {
            id: "1".to_string(),
            role: "ADMIN".to_string(),
        };
        assert!(user.is_admin());
        assert!(user.has_role(Role::Admin));
        assert!(!user.has_role(Role::User));

        let user = CurrentUser {
            id: "2".to_string(),
            role: "USER".to_string(),
        };
        assert!(!user.is_admin());
        assert!(user.has_role(Role::User));

        // Unknown role strings match nothing
        let user = CurrentUser {
            id: "3".to_string(),
            role: "admin".to_string(),
        };
        assert!(!user.is_admin());
        assert!(!user.has_role(Role::User));
    }
}
