//! # Gatekey Core
//!
//! Core business logic and domain layer for the Gatekey authentication
//! service. This crate contains domain entities, business services,
//! repository interfaces, and error types that form the foundation of the
//! application architecture.

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;

// Re-export commonly used types for convenience. Kept explicit because the
// layer modules share submodule names (account, otp, token) and glob
// re-exports of all four would be ambiguous at the crate root.
pub use domain::entities::{Account, Claims, Gender, OtpCode, Role, TokenKind};
pub use domain::value_objects::{AccountProfile, AuthResponse, RefreshResponse};
pub use errors::{AuthError, DomainError, DomainResult, TokenError};
pub use repositories::{AccountRepository, MockAccountRepository};
pub use services::{
    AuthService, AuthServiceConfig, EmailTransport, MailerService, MailerServiceConfig, OtpCache,
    PasswordHasher, RegisterRequest, ResetPasswordRequest, TokenService, TokenServiceConfig,
};
