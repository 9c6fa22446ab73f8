//! Configuration for the authentication service

use std::time::Duration;

use gk_shared::config::OtpConfig;

/// Configuration for the authentication service
#[derive(Debug, Clone)]
pub struct AuthServiceConfig {
    /// Lifetime of a one-time password
    pub otp_ttl: Duration,
}

impl Default for AuthServiceConfig {
    fn default() -> Self {
        Self {
            otp_ttl: Duration::from_secs(60),
        }
    }
}

impl From<&OtpConfig> for AuthServiceConfig {
    fn from(config: &OtpConfig) -> Self {
        Self {
            otp_ttl: config.ttl(),
        }
    }
}
