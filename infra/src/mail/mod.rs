//! Email transports.
//!
//! `HttpEmailProvider` talks to a JSON mail API; `LoggingEmailProvider`
//! just logs the message for local development. Retry policy lives in the
//! core mailer service, each transport makes exactly one attempt per call.

pub mod http_provider;
pub mod logging_provider;

pub use http_provider::HttpEmailProvider;
pub use logging_provider::LoggingEmailProvider;
