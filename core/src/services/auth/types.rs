//! Request payloads accepted by the authentication service.

use serde::{Deserialize, Serialize};

use crate::domain::entities::account::{Gender, Role};

/// Registration request
///
/// The password field is accepted for wire compatibility but never stored:
/// accounts start with a random placeholder hash and only the reset-password
/// flow sets a credential the user chose.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub gender: Gender,
    pub role: Role,
}

/// Password reset request, submitted together with a verified OTP
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResetPasswordRequest {
    pub email: String,
    pub otp: String,
    pub new_password: String,
    pub confirm_password: String,
}
