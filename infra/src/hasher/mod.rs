//! Bcrypt password hashing.

use bcrypt::{hash, verify, DEFAULT_COST};

use gk_core::services::auth::PasswordHasher;

/// Password hasher backed by bcrypt
///
/// The cost factor is fixed at construction; older hashes created with a
/// different cost still verify, bcrypt embeds the cost in the hash.
pub struct BcryptPasswordHasher {
    cost: u32,
}

impl BcryptPasswordHasher {
    pub fn new() -> Self {
        Self { cost: DEFAULT_COST }
    }

    pub fn with_cost(cost: u32) -> Self {
        Self { cost }
    }
}

impl Default for BcryptPasswordHasher {
    fn default() -> Self {
        Self::new()
    }
}

impl PasswordHasher for BcryptPasswordHasher {
    fn hash(&self, raw: &str) -> Result<String, String> {
        hash(raw, self.cost).map_err(|e| e.to_string())
    }

    fn verify(&self, raw: &str, stored: &str) -> Result<bool, String> {
        verify(raw, stored).map_err(|e| e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Minimum cost keeps these tests fast
    fn hasher() -> BcryptPasswordHasher {
        BcryptPasswordHasher::with_cost(4)
    }

    #[test]
    fn test_hash_and_verify() {
        let h = hasher();
        let stored = h.hash("secret").unwrap();
        assert_ne!(stored, "secret");
        assert!(h.verify("secret", &stored).unwrap());
        assert!(!h.verify("wrong", &stored).unwrap());
    }

    #[test]
    fn test_same_password_hashes_differently() {
        let h = hasher();
        assert_ne!(h.hash("secret").unwrap(), h.hash("secret").unwrap());
    }

    #[test]
    fn test_garbage_hash_is_an_error() {
        assert!(hasher().verify("secret", "not-a-bcrypt-hash").is_err());
    }
}
