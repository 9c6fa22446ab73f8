//! Cache abstraction for one-time passwords.
//!
//! The cache stores the raw OTP string keyed by normalized email and owns
//! expiry: a `get` or `exists` after the TTL behaves as if the entry was
//! never stored. Implementations live in the infrastructure layer.

use async_trait::async_trait;
use std::time::Duration;

/// Trait for OTP cache integration
#[async_trait]
pub trait OtpCache: Send + Sync {
    /// Store a code for an email, replacing any existing entry and
    /// restarting the TTL
    async fn put(&self, email: &str, code: &str, ttl: Duration) -> Result<(), String>;

    /// Fetch the live code for an email, `None` if absent or expired
    async fn get(&self, email: &str) -> Result<Option<String>, String>;

    /// Remove the entry for an email, a no-op if there is none
    async fn evict(&self, email: &str) -> Result<(), String>;

    /// Check whether a live code exists for an email
    async fn exists(&self, email: &str) -> Result<bool, String>;
}
