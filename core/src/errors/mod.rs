//! Domain-specific error types and error handling.
//!
//! Expected business outcomes (unknown email, wrong OTP, ...) are typed
//! variants returned to the caller, never escalated. Transport and
//! persistence failures are retried or mapped internally and surface only as
//! `EmailDeliveryFailed` or `Internal`; underlying library error text never
//! crosses the service boundary.

use gk_shared::errors::{error_codes, ErrorResponse};
use thiserror::Error;

/// Authentication-related errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("Account with this email does not exist")]
    NotFound,

    #[error("Account already exists")]
    AlreadyExists,

    #[error("Otp has expired, kindly retry")]
    OtpExpired,

    #[error("Incorrect otp has been entered")]
    OtpMismatch,

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Account is not verified")]
    NotVerified,

    #[error("Password and confirmation password do not match")]
    PasswordMismatch,

    #[error("An otp is already live for this account, kindly retry later")]
    TooManyRequests,

    #[error("Failed to send OTP email, please try again later")]
    EmailDeliveryFailed,
}

impl AuthError {
    /// Stable error code for the routing layer
    pub fn code(&self) -> &'static str {
        match self {
            AuthError::NotFound => error_codes::NOT_FOUND,
            AuthError::AlreadyExists => error_codes::ALREADY_EXISTS,
            AuthError::OtpExpired => error_codes::OTP_EXPIRED,
            AuthError::OtpMismatch => error_codes::OTP_MISMATCH,
            AuthError::InvalidCredentials => error_codes::INVALID_CREDENTIALS,
            AuthError::NotVerified => error_codes::NOT_VERIFIED,
            AuthError::PasswordMismatch => error_codes::PASSWORD_MISMATCH,
            AuthError::TooManyRequests => error_codes::TOO_MANY_REQUESTS,
            AuthError::EmailDeliveryFailed => error_codes::EMAIL_DELIVERY_FAILED,
        }
    }

    /// HTTP status code the routing layer should answer with
    pub fn status_code(&self) -> u16 {
        match self {
            AuthError::NotFound => 404,
            AuthError::OtpExpired => 408,
            AuthError::TooManyRequests => 429,
            AuthError::EmailDeliveryFailed => 500,
            AuthError::AlreadyExists
            | AuthError::OtpMismatch
            | AuthError::InvalidCredentials
            | AuthError::NotVerified
            | AuthError::PasswordMismatch => 400,
        }
    }
}

/// Token-related errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    #[error("Token has expired")]
    Expired,

    #[error("Malformed token")]
    Malformed,

    #[error("Token is of the wrong type for this operation")]
    InvalidTokenType,

    #[error("Token generation failed")]
    GenerationFailed,
}

impl TokenError {
    /// Stable error code for the routing layer
    pub fn code(&self) -> &'static str {
        match self {
            TokenError::Expired => error_codes::TOKEN_EXPIRED,
            TokenError::Malformed => error_codes::TOKEN_MALFORMED,
            TokenError::InvalidTokenType => error_codes::INVALID_TOKEN_TYPE,
            TokenError::GenerationFailed => error_codes::INTERNAL_ERROR,
        }
    }

    /// HTTP status code the routing layer should answer with
    pub fn status_code(&self) -> u16 {
        match self {
            TokenError::GenerationFailed => 500,
            _ => 400,
        }
    }
}

/// Core domain errors (general purpose)
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Internal error: {message}")]
    Internal { message: String },

    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Database error: {0}")]
    Database(String),

    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Token(#[from] TokenError),
}

impl DomainError {
    /// HTTP status code the routing layer should answer with
    pub fn status_code(&self) -> u16 {
        match self {
            DomainError::Internal { .. } => 500,
            DomainError::Database(_) => 500,
            DomainError::Validation { .. } => 400,
            DomainError::Auth(e) => e.status_code(),
            DomainError::Token(e) => e.status_code(),
        }
    }
}

impl From<&DomainError> for ErrorResponse {
    fn from(err: &DomainError) -> Self {
        match err {
            DomainError::Auth(e) => ErrorResponse::new(e.code(), e.to_string(), e.status_code()),
            DomainError::Token(e) => ErrorResponse::new(e.code(), e.to_string(), e.status_code()),
            DomainError::Validation { message } => {
                ErrorResponse::new(error_codes::VALIDATION_ERROR, message.clone(), 400)
            }
            DomainError::Database(_) | DomainError::Internal { .. } => ErrorResponse::new(
                error_codes::INTERNAL_ERROR,
                "Internal error, please try again later",
                500,
            ),
        }
    }
}

pub type DomainResult<T> = Result<T, DomainError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_error_status_codes() {
        assert_eq!(AuthError::NotFound.status_code(), 404);
        assert_eq!(AuthError::OtpExpired.status_code(), 408);
        assert_eq!(AuthError::TooManyRequests.status_code(), 429);
        assert_eq!(AuthError::EmailDeliveryFailed.status_code(), 500);
        assert_eq!(AuthError::OtpMismatch.status_code(), 400);
        assert_eq!(AuthError::NotVerified.status_code(), 400);
    }

    #[test]
    fn test_token_error_status_codes() {
        assert_eq!(TokenError::Expired.status_code(), 400);
        assert_eq!(TokenError::InvalidTokenType.status_code(), 400);
        assert_eq!(TokenError::GenerationFailed.status_code(), 500);
    }

    #[test]
    fn test_error_response_conversion() {
        let err = DomainError::Auth(AuthError::OtpMismatch);
        let response: ErrorResponse = (&err).into();
        assert_eq!(response.error, "OTP_MISMATCH");
        assert_eq!(response.status, 400);
    }

    #[test]
    fn test_internal_error_hides_details() {
        let err = DomainError::Internal {
            message: "redis timed out at 10.0.0.3:6379".to_string(),
        };
        let response: ErrorResponse = (&err).into();
        assert_eq!(response.error, "INTERNAL_ERROR");
        assert!(!response.message.contains("redis"));
    }
}
