//! Public view of an account.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::entities::account::{Account, Gender, Role};

/// Account profile exposed to clients
///
/// Everything on the account except the password hash.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountProfile {
    pub id: Uuid,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub gender: Gender,
    pub role: Role,
    pub is_verified: bool,
    pub is_active: bool,
}

impl From<&Account> for AccountProfile {
    fn from(account: &Account) -> Self {
        Self {
            id: account.id,
            email: account.email.clone(),
            first_name: account.first_name.clone(),
            last_name: account.last_name.clone(),
            gender: account.gender,
            role: account.role,
            is_verified: account.is_verified,
            is_active: account.is_active,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_omits_password_hash() {
        let account = Account::new(
            "user@example.com".to_string(),
            "Ada".to_string(),
            "Lovelace".to_string(),
            "$2b$12$hash".to_string(),
            Gender::Female,
            Role::User,
        );
        let profile = AccountProfile::from(&account);
        let json = serde_json::to_string(&profile).unwrap();
        assert!(!json.contains("hash"));
        assert_eq!(profile.email, "user@example.com");
        assert!(!profile.is_verified);
    }
}
