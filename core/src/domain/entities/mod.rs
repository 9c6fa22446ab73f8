//! Domain entities representing core business objects.

pub mod account;
pub mod otp;
pub mod token;

// Re-export commonly used types
pub use account::{Account, Gender, Role};
pub use otp::OtpCode;
pub use token::{Claims, TokenKind};
