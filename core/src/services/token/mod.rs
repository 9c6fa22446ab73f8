//! JWT issuing and validation.
//!
//! Tokens are stateless: nothing is persisted server side, and a refresh
//! token stays valid until its expiry. The `kind` claim keeps access and
//! refresh tokens from being used in each other's place.

mod config;
mod service;

#[cfg(test)]
mod tests;

pub use config::TokenServiceConfig;
pub use service::TokenService;
