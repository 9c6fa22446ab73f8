//! Development transport that logs instead of sending.

use async_trait::async_trait;
use tracing::info;

use gk_core::services::mailer::EmailTransport;

/// Email transport for local development: every message is logged at INFO
/// and reported as delivered
///
/// The body, and therefore the OTP, lands in the logs. Never wire this up
/// outside a development environment.
#[derive(Default)]
pub struct LoggingEmailProvider;

impl LoggingEmailProvider {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl EmailTransport for LoggingEmailProvider {
    async fn send(&self, to: &str, subject: &str, body: &str) -> Result<(), String> {
        info!(event = "mail_logged", to = to, subject = subject, body = body);
        Ok(())
    }
}
