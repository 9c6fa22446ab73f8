//! HTTP mail API transport.

use std::time::Duration;

use async_trait::async_trait;
use serde::Serialize;
use tracing::{debug, error};

use gk_core::services::mailer::EmailTransport;
use gk_shared::config::MailConfig;
use gk_shared::utils::email::mask_email;

use crate::InfrastructureError;

/// Email transport that POSTs messages to a JSON mail API
pub struct HttpEmailProvider {
    client: reqwest::Client,
    config: MailConfig,
}

#[derive(Serialize)]
struct SendRequest<'a> {
    from: Sender<'a>,
    to: &'a str,
    subject: &'a str,
    text: &'a str,
}

#[derive(Serialize)]
struct Sender<'a> {
    email: &'a str,
    name: &'a str,
}

impl HttpEmailProvider {
    /// Create a new provider from mail configuration
    pub fn new(config: MailConfig) -> Result<Self, InfrastructureError> {
        if config.api_url.is_empty() {
            return Err(InfrastructureError::Config(
                "MAIL_API_URL not set".to_string(),
            ));
        }
        if config.api_key.is_empty() {
            return Err(InfrastructureError::Config(
                "MAIL_API_KEY not set".to_string(),
            ));
        }

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(|e| InfrastructureError::Config(format!("HTTP client: {}", e)))?;

        Ok(Self { client, config })
    }

    /// Create from environment variables
    pub fn from_env() -> Result<Self, InfrastructureError> {
        Self::new(MailConfig::from_env())
    }
}

#[async_trait]
impl EmailTransport for HttpEmailProvider {
    async fn send(&self, to: &str, subject: &str, body: &str) -> Result<(), String> {
        let payload = SendRequest {
            from: Sender {
                email: &self.config.from_address,
                name: &self.config.from_name,
            },
            to,
            subject,
            text: body,
        };

        let response = self
            .client
            .post(&self.config.api_url)
            .bearer_auth(&self.config.api_key)
            .json(&payload)
            .send()
            .await
            .map_err(|e| format!("Mail API request failed: {}", e))?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            error!(
                event = "mail_api_error",
                status = status.as_u16(),
                to = %mask_email(to),
            );
            return Err(format!("Mail API returned {}: {}", status, detail));
        }

        debug!(event = "mail_api_accepted", to = %mask_email(to));
        Ok(())
    }
}
