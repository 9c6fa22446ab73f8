//! Trait for email provider integration

use async_trait::async_trait;

/// Trait for email provider integration
///
/// One attempt, no retry: the mailer service owns the retry policy and
/// calls this once per attempt. Errors are provider-specific strings.
#[async_trait]
pub trait EmailTransport: Send + Sync {
    /// Deliver a single email
    async fn send(&self, to: &str, subject: &str, body: &str) -> Result<(), String>;
}
