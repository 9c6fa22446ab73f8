//! Redis-backed OTP cache.

use std::time::Duration;

use async_trait::async_trait;
use redis::{aio::MultiplexedConnection, AsyncCommands, Client};
use tracing::{debug, info};

use gk_core::services::otp::OtpCache;
use gk_shared::config::CacheConfig;
use gk_shared::utils::email::mask_email;

use crate::InfrastructureError;

/// OTP cache backed by Redis
///
/// Expiry is delegated to Redis via `SET ... EX`, so codes disappear on
/// time even if this process never touches the key again, and all replicas
/// see the same entries.
#[derive(Clone)]
pub struct RedisOtpCache {
    connection: MultiplexedConnection,
    key_prefix: String,
}

impl RedisOtpCache {
    /// Connect to Redis using the given cache configuration
    pub async fn new(config: &CacheConfig) -> Result<Self, InfrastructureError> {
        let client = Client::open(config.url.as_str())?;
        let connection = client.get_multiplexed_async_connection().await?;

        info!(event = "redis_otp_cache_connected");
        Ok(Self {
            connection,
            key_prefix: config.key_prefix.clone().unwrap_or_default(),
        })
    }

    fn key(&self, email: &str) -> String {
        format!("{}otp:{}", self.key_prefix, email)
    }
}

#[async_trait]
impl OtpCache for RedisOtpCache {
    async fn put(&self, email: &str, code: &str, ttl: Duration) -> Result<(), String> {
        let mut conn = self.connection.clone();
        // Zero-second expiry is a Redis error; clamp to the minimum
        let seconds = ttl.as_secs().max(1);
        conn.set_ex::<_, _, ()>(self.key(email), code, seconds)
            .await
            .map_err(|e| e.to_string())?;
        debug!(event = "otp_cached", email = %mask_email(email), ttl_seconds = seconds);
        Ok(())
    }

    async fn get(&self, email: &str) -> Result<Option<String>, String> {
        let mut conn = self.connection.clone();
        conn.get(self.key(email)).await.map_err(|e| e.to_string())
    }

    async fn evict(&self, email: &str) -> Result<(), String> {
        let mut conn = self.connection.clone();
        conn.del::<_, ()>(self.key(email))
            .await
            .map_err(|e| e.to_string())?;
        debug!(event = "otp_evicted", email = %mask_email(email));
        Ok(())
    }

    async fn exists(&self, email: &str) -> Result<bool, String> {
        let mut conn = self.connection.clone();
        conn.exists(self.key(email)).await.map_err(|e| e.to_string())
    }
}
