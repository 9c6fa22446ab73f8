//! OTP cache backends.
//!
//! Two implementations of `gk_core::services::otp::OtpCache`: an in-process
//! map for single-instance deployments and tests, and Redis for anything
//! running more than one replica.

pub mod memory;
#[cfg(feature = "redis-cache")]
pub mod redis_otp;

pub use memory::MemoryOtpCache;
#[cfg(feature = "redis-cache")]
pub use redis_otp::RedisOtpCache;
