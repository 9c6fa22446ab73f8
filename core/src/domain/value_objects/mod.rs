//! Value objects returned by the authentication flows.

pub mod auth_response;
pub mod profile;

pub use auth_response::{AuthResponse, RefreshResponse};
pub use profile::AccountProfile;
