//! Account entity representing a registered account in the Gatekey system.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Gender declared at registration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Gender {
    Male,
    Female,
    Other,
}

/// Role assigned to an account
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Role {
    User,
    Admin,
}

/// Account entity representing a registered account
///
/// The normalized email is the unique key; uniqueness is ultimately enforced
/// by the backing store's unique constraint, not by the read-check-write
/// sequence in the registration flow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    /// Unique identifier for the account
    pub id: Uuid,

    /// Normalized (trimmed, lowercased) email address
    pub email: String,

    /// First name
    pub first_name: String,

    /// Last name
    pub last_name: String,

    /// Opaque password hash; never the raw password
    pub password_hash: String,

    /// Gender declared at registration
    pub gender: Gender,

    /// Role assigned to the account
    pub role: Role,

    /// Whether the email address has been verified via OTP
    pub is_verified: bool,

    /// Whether the account is active
    pub is_active: bool,

    /// Whether the account holder has ever set their own password
    /// through the reset flow
    pub password_updated: bool,

    /// Timestamp when the account was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when the account was last updated
    pub updated_at: DateTime<Utc>,
}

impl Account {
    /// Creates a new unverified account
    ///
    /// New accounts always start `verified=false, active=true,
    /// password_updated=false`. The email must already be normalized.
    pub fn new(
        email: String,
        first_name: String,
        last_name: String,
        password_hash: String,
        gender: Gender,
        role: Role,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            email,
            first_name,
            last_name,
            password_hash,
            gender,
            role,
            is_verified: false,
            is_active: true,
            password_updated: false,
            created_at: now,
            updated_at: now,
        }
    }

    /// Marks the account's email as verified
    ///
    /// Verification is one-directional; nothing ever clears the flag.
    pub fn verify(&mut self) {
        self.is_verified = true;
        self.updated_at = Utc::now();
    }

    /// Replaces the password hash via the reset flow
    pub fn set_password(&mut self, password_hash: String) {
        self.password_hash = password_hash;
        self.password_updated = true;
        self.updated_at = Utc::now();
    }

    /// Overwrites the profile fields on re-registration of an unverified
    /// account
    pub fn overwrite_profile(
        &mut self,
        first_name: String,
        last_name: String,
        password_hash: String,
        gender: Gender,
        role: Role,
    ) {
        self.first_name = first_name;
        self.last_name = last_name;
        self.password_hash = password_hash;
        self.gender = gender;
        self.role = role;
        self.is_verified = false;
        self.is_active = true;
        self.password_updated = false;
        self.updated_at = Utc::now();
    }
}
