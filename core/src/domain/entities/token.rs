//! JWT claims and token-kind tagging.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Discriminates access tokens from refresh tokens
///
/// Carried as a dedicated `kind` claim so that the two token types can never
/// be confused, regardless of how the subject is formatted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenKind {
    Access,
    Refresh,
}

impl TokenKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenKind::Access => "access",
            TokenKind::Refresh => "refresh",
        }
    }
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Claims embedded in every issued JWT
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject: the account's email address
    pub sub: String,

    /// Issued-at, seconds since epoch
    pub iat: i64,

    /// Expiry, seconds since epoch
    pub exp: i64,

    /// Issuer identifier
    pub iss: String,

    /// Unique token id
    pub jti: String,

    /// Token kind discriminator
    pub kind: TokenKind,
}

impl Claims {
    /// Builds claims for an access token
    pub fn access(email: &str, issuer: &str, expiry_seconds: i64) -> Self {
        Self::new(email, issuer, expiry_seconds, TokenKind::Access)
    }

    /// Builds claims for a refresh token
    pub fn refresh(email: &str, issuer: &str, expiry_seconds: i64) -> Self {
        Self::new(email, issuer, expiry_seconds, TokenKind::Refresh)
    }

    fn new(email: &str, issuer: &str, expiry_seconds: i64, kind: TokenKind) -> Self {
        let now = Utc::now();
        Self {
            sub: email.to_string(),
            iat: now.timestamp(),
            exp: (now + Duration::seconds(expiry_seconds)).timestamp(),
            iss: issuer.to_string(),
            jti: Uuid::new_v4().to_string(),
            kind,
        }
    }

    /// Expiry as a UTC timestamp
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.exp, 0)
    }
}
