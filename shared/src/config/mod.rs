//! Configuration module with business-specific sub-modules
//!
//! This module organizes configuration into logical business areas:
//! - `auth` - JWT signing configuration
//! - `cache` - Redis cache configuration for the OTP backend
//! - `database` - Database connection and pool configuration
//! - `mail` - Mail provider and OTP delivery configuration
//! - `otp` - One-time-password shape and lifetime

pub mod auth;
pub mod cache;
pub mod database;
pub mod mail;
pub mod otp;

use serde::{Deserialize, Serialize};

// Re-export commonly used types
pub use auth::JwtConfig;
pub use cache::CacheConfig;
pub use database::DatabaseConfig;
pub use mail::MailConfig;
pub use otp::OtpConfig;

/// Complete application configuration combining all sub-configurations
///
/// Loaded once at startup; immutable thereafter.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    /// Database configuration
    pub database: DatabaseConfig,

    /// JWT signing configuration
    pub jwt: JwtConfig,

    /// Redis cache configuration
    pub cache: CacheConfig,

    /// Mail delivery configuration
    pub mail: MailConfig,

    /// OTP configuration
    pub otp: OtpConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            database: DatabaseConfig::default(),
            jwt: JwtConfig::default(),
            cache: CacheConfig::default(),
            mail: MailConfig::default(),
            otp: OtpConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self {
            database: DatabaseConfig::from_env(),
            jwt: JwtConfig::from_env(),
            cache: CacheConfig::from_env(),
            mail: MailConfig::from_env(),
            otp: OtpConfig::from_env(),
        }
    }
}
