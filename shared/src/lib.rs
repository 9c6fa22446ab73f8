//! Shared utilities and common types for the Gatekey server
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types
//! - Error types and response structures
//! - Utility functions (email normalization, etc.)
//! - Common type definitions

pub mod config;
pub mod errors;
pub mod types;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{AppConfig, CacheConfig, DatabaseConfig, JwtConfig, MailConfig, OtpConfig};
pub use errors::{error_codes, ErrorResponse};
pub use types::{ApiResponse, MessageResponse};
pub use utils::email;
