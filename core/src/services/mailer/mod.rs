//! OTP email delivery with retry.

mod config;
mod service;
mod traits;

pub use config::MailerServiceConfig;
pub use service::MailerService;
pub use traits::EmailTransport;
