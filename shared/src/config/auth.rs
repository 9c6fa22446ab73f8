//! JWT authentication configuration

use serde::{Deserialize, Serialize};

/// JWT authentication configuration
///
/// A single shared secret signs both access and refresh tokens; rotation is
/// out of scope.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct JwtConfig {
    /// JWT secret key for signing tokens
    pub secret: String,

    /// Access token expiry time in seconds
    pub access_token_expiry: i64,

    /// Refresh token expiry time in seconds
    pub refresh_token_expiry: i64,

    /// JWT issuer claim
    pub issuer: String,
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            secret: String::from("development-secret-change-in-production"),
            access_token_expiry: 60 * 60,              // 1 hour
            refresh_token_expiry: 30 * 24 * 60 * 60,   // 30 days
            issuer: String::from("gatekey"),
        }
    }
}

impl JwtConfig {
    /// Create a new JWT configuration with secret
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            ..Default::default()
        }
    }

    /// Create from environment variables
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(secret) = std::env::var("JWT_SECRET") {
            config.secret = secret;
        }
        if let Ok(expiry) = std::env::var("JWT_ACCESS_TOKEN_EXPIRY") {
            if let Ok(seconds) = expiry.parse() {
                config.access_token_expiry = seconds;
            }
        }
        if let Ok(expiry) = std::env::var("JWT_REFRESH_TOKEN_EXPIRY") {
            if let Ok(seconds) = expiry.parse() {
                config.refresh_token_expiry = seconds;
            }
        }
        config
    }

    /// Check if using default secret (security warning)
    pub fn is_using_default_secret(&self) -> bool {
        self.secret == "development-secret-change-in-production"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_expiry_values() {
        let config = JwtConfig::default();
        assert_eq!(config.access_token_expiry, 3600);
        assert_eq!(config.refresh_token_expiry, 2_592_000);
        assert!(config.is_using_default_secret());
    }

    #[test]
    fn test_custom_secret() {
        let config = JwtConfig::new("a-real-secret");
        assert!(!config.is_using_default_secret());
        assert_eq!(config.issuer, "gatekey");
    }
}
