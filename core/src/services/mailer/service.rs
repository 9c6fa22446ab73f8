//! Mailer service implementation

use tokio::time::sleep;
use tracing::{info, warn};

use gk_shared::utils::email::mask_email;

use crate::errors::{AuthError, DomainError};

use super::config::MailerServiceConfig;
use super::traits::EmailTransport;

/// Sends OTP emails through a pluggable transport, retrying on failure
///
/// Delivery is attempted up to `max_attempts` times with a fixed delay in
/// between. The caller only learns whether the email ultimately went out.
pub struct MailerService<T: EmailTransport> {
    transport: T,
    config: MailerServiceConfig,
}

impl<T: EmailTransport> MailerService<T> {
    pub fn new(transport: T, config: MailerServiceConfig) -> Self {
        Self { transport, config }
    }

    /// Sends a one-time password to an email address
    ///
    /// # Returns
    /// * `Ok(())` - Delivered on some attempt
    /// * `Err(AuthError::EmailDeliveryFailed)` - Every attempt failed
    pub async fn send_otp(&self, email: &str, code: &str) -> Result<(), DomainError> {
        let body = Self::render_body(code);

        for attempt in 1..=self.config.max_attempts {
            match self
                .transport
                .send(email, &self.config.otp_subject, &body)
                .await
            {
                Ok(()) => {
                    info!(
                        event = "otp_email_sent",
                        email = %mask_email(email),
                        attempt = attempt,
                    );
                    return Ok(());
                }
                Err(e) => {
                    warn!(
                        event = "otp_email_attempt_failed",
                        email = %mask_email(email),
                        attempt = attempt,
                        max_attempts = self.config.max_attempts,
                        reason = %e,
                    );
                    if attempt < self.config.max_attempts {
                        sleep(self.config.retry_delay).await;
                    }
                }
            }
        }

        Err(AuthError::EmailDeliveryFailed.into())
    }

    fn render_body(code: &str) -> String {
        format!(
            "Your one-time password is {code}. It expires shortly; if it does, \
             request a new one and retry after 1 minute."
        )
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::sync::Arc;

    use async_trait::async_trait;

    use super::*;
    use crate::errors::AuthError;

    /// Transport that fails a configured number of times before succeeding
    struct FlakyTransport {
        failures: u32,
        calls: Arc<AtomicU32>,
    }

    #[async_trait]
    impl EmailTransport for FlakyTransport {
        async fn send(&self, _to: &str, _subject: &str, body: &str) -> Result<(), String> {
            assert!(body.contains("one-time password"));
            let call = self.calls.fetch_add(1, Ordering::SeqCst);
            if call < self.failures {
                Err("connection refused".to_string())
            } else {
                Ok(())
            }
        }
    }

    fn mailer(failures: u32, calls: Arc<AtomicU32>) -> MailerService<FlakyTransport> {
        MailerService::new(
            FlakyTransport { failures, calls },
            MailerServiceConfig::default(),
        )
    }

    #[tokio::test(start_paused = true)]
    async fn test_first_attempt_success() {
        let calls = Arc::new(AtomicU32::new(0));
        let service = mailer(0, calls.clone());

        service.send_otp("user@example.com", "123456").await.unwrap();
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_retries_until_success() {
        let calls = Arc::new(AtomicU32::new(0));
        let service = mailer(3, calls.clone());

        service.send_otp("user@example.com", "123456").await.unwrap();
        assert_eq!(calls.load(Ordering::SeqCst), 4);
    }

    #[tokio::test(start_paused = true)]
    async fn test_gives_up_after_max_attempts() {
        let calls = Arc::new(AtomicU32::new(0));
        let service = mailer(10, calls.clone());

        let err = service
            .send_otp("user@example.com", "123456")
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            DomainError::Auth(AuthError::EmailDeliveryFailed)
        ));
        assert_eq!(calls.load(Ordering::SeqCst), 4);
    }
}
