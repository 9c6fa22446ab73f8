//! # Infrastructure Layer
//!
//! Concrete implementations of the collaborator traits declared in
//! `gk_core`: MySQL persistence via SQLx, the OTP cache backed by Redis or
//! process memory, the HTTP email provider, and bcrypt password hashing.

use thiserror::Error;

pub mod cache;
#[cfg(feature = "mysql")]
pub mod database;
pub mod hasher;
pub mod mail;

pub use cache::MemoryOtpCache;
#[cfg(feature = "redis-cache")]
pub use cache::RedisOtpCache;
#[cfg(feature = "mysql")]
pub use database::MySqlAccountRepository;
pub use hasher::BcryptPasswordHasher;
pub use mail::{HttpEmailProvider, LoggingEmailProvider};

/// Errors raised while constructing or configuring infrastructure pieces
///
/// Runtime failures of a constructed piece flow through the core traits
/// instead; this type only covers setup.
#[derive(Error, Debug)]
pub enum InfrastructureError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Database connection error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Cache connection error: {0}")]
    Cache(#[from] redis::RedisError),
}
