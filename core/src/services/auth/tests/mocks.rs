//! Test doubles for the authentication service collaborators

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;

use crate::services::auth::PasswordHasher;
use crate::services::mailer::EmailTransport;
use crate::services::otp::OtpCache;

/// OTP cache backed by a plain map; the TTL is ignored and expiry is
/// simulated explicitly with [`expire`](InMemoryOtpCache::expire)
#[derive(Clone, Default)]
pub struct InMemoryOtpCache {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl InMemoryOtpCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read the stored code without going through the trait
    pub fn peek(&self, email: &str) -> Option<String> {
        self.entries.lock().unwrap().get(email).cloned()
    }

    /// Simulate TTL expiry
    pub fn expire(&self, email: &str) {
        self.entries.lock().unwrap().remove(email);
    }
}

#[async_trait]
impl OtpCache for InMemoryOtpCache {
    async fn put(&self, email: &str, code: &str, _ttl: Duration) -> Result<(), String> {
        self.entries
            .lock()
            .unwrap()
            .insert(email.to_string(), code.to_string());
        Ok(())
    }

    async fn get(&self, email: &str) -> Result<Option<String>, String> {
        Ok(self.entries.lock().unwrap().get(email).cloned())
    }

    async fn evict(&self, email: &str) -> Result<(), String> {
        self.entries.lock().unwrap().remove(email);
        Ok(())
    }

    async fn exists(&self, email: &str) -> Result<bool, String> {
        Ok(self.entries.lock().unwrap().contains_key(email))
    }
}

/// Email transport that records every delivery and can be told to fail
#[derive(Clone, Default)]
pub struct RecordingTransport {
    sent: Arc<Mutex<Vec<(String, String, String)>>>,
    failing: Arc<AtomicBool>,
}

impl RecordingTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    pub fn sent_count(&self) -> usize {
        self.sent.lock().unwrap().len()
    }

    pub fn last_recipient(&self) -> Option<String> {
        self.sent.lock().unwrap().last().map(|(to, _, _)| to.clone())
    }
}

#[async_trait]
impl EmailTransport for RecordingTransport {
    async fn send(&self, to: &str, subject: &str, body: &str) -> Result<(), String> {
        if self.failing.load(Ordering::SeqCst) {
            return Err("smtp unavailable".to_string());
        }
        self.sent
            .lock()
            .unwrap()
            .push((to.to_string(), subject.to_string(), body.to_string()));
        Ok(())
    }
}

/// Hasher with a recognizable, reversible format for assertions
pub struct PlainHasher;

impl PasswordHasher for PlainHasher {
    fn hash(&self, raw: &str) -> Result<String, String> {
        Ok(format!("plain${raw}"))
    }

    fn verify(&self, raw: &str, hash: &str) -> Result<bool, String> {
        Ok(hash == format!("plain${raw}"))
    }
}
