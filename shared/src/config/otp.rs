//! One-time-password configuration

use serde::{Deserialize, Serialize};

/// Character alphabet OTP codes are drawn from.
///
/// Digits 1-9 only; zero is excluded so codes never carry a leading-zero
/// ambiguity when read aloud or re-typed.
pub const OTP_ALPHABET: &str = "123456789";

/// Number of characters in an OTP code
pub const OTP_LENGTH: usize = 6;

/// OTP shape and lifetime configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OtpConfig {
    /// Code length in characters
    pub length: usize,

    /// Time-to-live for a cached code, in seconds
    pub ttl_seconds: u64,
}

impl Default for OtpConfig {
    fn default() -> Self {
        Self {
            length: OTP_LENGTH,
            ttl_seconds: 60,
        }
    }
}

impl OtpConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(ttl) = std::env::var("OTP_TTL_SECONDS") {
            if let Ok(seconds) = ttl.parse() {
                config.ttl_seconds = seconds;
            }
        }
        config
    }

    /// TTL as a `std::time::Duration`
    pub fn ttl(&self) -> std::time::Duration {
        std::time::Duration::from_secs(self.ttl_seconds)
    }
}
