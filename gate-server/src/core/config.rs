use thiserror::Error;

use crate::auth::JwtConfig;

/// Configuration errors surfaced at startup
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("JWT_SECRET is not set; refusing to start without a verification secret")]
    MissingJwtSecret,
}

/// Server configuration
///
/// # Environment variables
///
/// | Variable | Default | Notes |
/// |----------|---------|-------|
/// | HTTP_PORT | 3000 | HTTP listener port |
/// | ENVIRONMENT | development | development \| staging \| production |
/// | JWT_SECRET | (none) | required; startup fails when unset |
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP API listener port
    pub http_port: u16,
    /// Runtime environment: development | staging | production
    pub environment: String,
    /// JWT verification configuration
    pub jwt: JwtConfig,
}

impl Config {
    /// Load configuration from environment variables
    ///
    /// The verification secret has no default in any build profile; a
    /// missing or empty `JWT_SECRET` is a startup error.
    pub fn from_env() -> Result<Self, ConfigError> {
        let secret = std::env::var("JWT_SECRET")
            .ok()
            .filter(|s| !s.is_empty())
            .ok_or(ConfigError::MissingJwtSecret)?;

        if secret.len() < 32 {
            tracing::warn!("JWT_SECRET is shorter than 32 bytes; use a longer secret");
        }

        Ok(Self {
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
            jwt: JwtConfig::new(secret),
        })
    }

    /// Build a config from explicit values, bypassing the environment
    ///
    /// Used by tests and embedding callers.
    pub fn with_overrides(secret: impl Into<String>, http_port: u16) -> Self {
        Self {
            http_port,
            environment: "test".into(),
            jwt: JwtConfig::new(secret),
        }
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_overrides() {
        let config = Config::with_overrides("some-secret", 0);
        assert_eq!(config.http_port, 0);
        assert_eq!(config.jwt.secret, "some-secret");
        assert!(!config.is_production());
        assert!(!config.is_development());
    }
}
