//! Configuration for the mailer service

use std::time::Duration;

use gk_shared::config::MailConfig;

/// Configuration for the mailer service
#[derive(Debug, Clone)]
pub struct MailerServiceConfig {
    /// Subject line for OTP emails
    pub otp_subject: String,
    /// Total delivery attempts before giving up
    pub max_attempts: u32,
    /// Fixed delay between attempts
    pub retry_delay: Duration,
}

impl Default for MailerServiceConfig {
    fn default() -> Self {
        Self {
            otp_subject: "Contraseña de un solo uso para verificar email".to_string(),
            max_attempts: 4,
            retry_delay: Duration::from_millis(3000),
        }
    }
}

impl From<&MailConfig> for MailerServiceConfig {
    fn from(config: &MailConfig) -> Self {
        Self {
            otp_subject: config.otp_subject.clone(),
            max_attempts: config.max_attempts,
            retry_delay: config.retry_delay(),
        }
    }
}
