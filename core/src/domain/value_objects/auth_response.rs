//! Token payloads returned after successful verification, login and refresh.

use serde::{Deserialize, Serialize};

use super::profile::AccountProfile;

/// Full token pair plus profile, returned by login and registration
/// verification
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthResponse {
    pub access_token: String,
    pub refresh_token: String,

    /// Access token lifetime in seconds
    pub expires_in: i64,

    pub profile: AccountProfile,
}

/// Fresh access token plus profile, returned by the refresh operation
///
/// The refresh token itself is not rotated; clients keep using the one they
/// already hold until it expires.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefreshResponse {
    pub access_token: String,
    pub expires_in: i64,
    pub profile: AccountProfile,
}
