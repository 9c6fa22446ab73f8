//! Business services containing domain logic and use cases.

pub mod auth;
pub mod mailer;
pub mod otp;
pub mod token;

// Re-export commonly used types
pub use auth::{AuthService, AuthServiceConfig, PasswordHasher, RegisterRequest, ResetPasswordRequest};
pub use mailer::{EmailTransport, MailerService, MailerServiceConfig};
pub use otp::OtpCache;
pub use token::{TokenService, TokenServiceConfig};
