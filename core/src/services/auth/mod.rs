//! Email/password authentication flows.
//!
//! The orchestrator behind registration, OTP verification, login, password
//! reset and token refresh. Collaborators (repository, OTP cache, email
//! transport, password hasher) are all trait objects supplied by the
//! infrastructure layer.

mod config;
mod password;
mod service;
mod types;

#[cfg(test)]
mod tests;

pub use config::AuthServiceConfig;
pub use password::PasswordHasher;
pub use service::AuthService;
pub use types::{RegisterRequest, ResetPasswordRequest};
