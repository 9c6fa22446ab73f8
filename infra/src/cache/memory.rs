//! In-process OTP cache.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use tokio::time::Instant;

use gk_core::services::otp::OtpCache;

/// OTP cache backed by a map in process memory
///
/// Expiry is lazy: entries past their deadline are dropped on the next read
/// of that key. Suitable for single-instance deployments and tests; codes
/// do not survive a restart and are invisible to other replicas.
#[derive(Clone, Default)]
pub struct MemoryOtpCache {
    entries: Arc<Mutex<HashMap<String, Entry>>>,
}

struct Entry {
    code: String,
    deadline: Instant,
}

impl MemoryOtpCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read the live code for a key, dropping it if expired
    fn read_live(&self, email: &str) -> Option<String> {
        let mut entries = match self.entries.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        match entries.get(email) {
            Some(entry) if entry.deadline > Instant::now() => Some(entry.code.clone()),
            Some(_) => {
                entries.remove(email);
                None
            }
            None => None,
        }
    }

    fn with_entries<R>(&self, f: impl FnOnce(&mut HashMap<String, Entry>) -> R) -> R {
        let mut entries = match self.entries.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        f(&mut entries)
    }
}

#[async_trait]
impl OtpCache for MemoryOtpCache {
    async fn put(&self, email: &str, code: &str, ttl: Duration) -> Result<(), String> {
        let entry = Entry {
            code: code.to_string(),
            deadline: Instant::now() + ttl,
        };
        self.with_entries(|entries| {
            entries.insert(email.to_string(), entry);
        });
        Ok(())
    }

    async fn get(&self, email: &str) -> Result<Option<String>, String> {
        Ok(self.read_live(email))
    }

    async fn evict(&self, email: &str) -> Result<(), String> {
        self.with_entries(|entries| {
            entries.remove(email);
        });
        Ok(())
    }

    async fn exists(&self, email: &str) -> Result<bool, String> {
        Ok(self.read_live(email).is_some())
    }
}
