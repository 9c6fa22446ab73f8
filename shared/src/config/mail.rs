//! Mail delivery configuration

use serde::{Deserialize, Serialize};

/// Mail provider and OTP delivery configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MailConfig {
    /// HTTP endpoint of the mail provider API
    pub api_url: String,

    /// API key for the mail provider
    pub api_key: String,

    /// Sender address
    pub from_address: String,

    /// Sender display name
    pub from_name: String,

    /// Subject line for OTP mails
    pub otp_subject: String,

    /// Total delivery attempts before giving up (first try included)
    pub max_attempts: u32,

    /// Fixed delay between attempts in milliseconds
    pub retry_delay_ms: u64,

    /// Timeout for a single API request in seconds
    pub request_timeout_secs: u64,
}

impl Default for MailConfig {
    fn default() -> Self {
        Self {
            api_url: String::from("https://api.mail.invalid/v1/send"),
            api_key: String::new(),
            from_address: String::from("no-reply@gatekey.dev"),
            from_name: String::from("Gatekey"),
            otp_subject: String::from("Contraseña de un solo uso para verificar email"),
            max_attempts: 4,
            retry_delay_ms: 3000,
            request_timeout_secs: 30,
        }
    }
}

impl MailConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(url) = std::env::var("MAIL_API_URL") {
            config.api_url = url;
        }
        if let Ok(key) = std::env::var("MAIL_API_KEY") {
            config.api_key = key;
        }
        if let Ok(from) = std::env::var("MAIL_FROM_ADDRESS") {
            config.from_address = from;
        }
        if let Ok(name) = std::env::var("MAIL_FROM_NAME") {
            config.from_name = name;
        }
        config
    }

    /// Delay between attempts as a `std::time::Duration`
    pub fn retry_delay(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.retry_delay_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_retry_policy() {
        let config = MailConfig::default();
        assert_eq!(config.max_attempts, 4);
        assert_eq!(config.retry_delay(), std::time::Duration::from_secs(3));
    }
}
