//! One-time-password entity for email verification.

use chrono::{DateTime, Duration, Utc};
use constant_time_eq::constant_time_eq;
use rand::{rngs::OsRng, Rng};
use serde::{Deserialize, Serialize};

use gk_shared::config::otp::{OTP_ALPHABET, OTP_LENGTH};

/// A generated one-time password bound to an email address
///
/// The entity is transient: the cache holds only the raw code string, keyed
/// by normalized email, and enforces the TTL itself. The timestamps here
/// exist for logging and for callers that want the expiry echoed back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OtpCode {
    /// The generated code
    pub code: String,

    /// Normalized email the code was issued for
    pub email: String,

    /// Timestamp when the code was generated
    pub created_at: DateTime<Utc>,

    /// Timestamp when the code expires
    pub expires_at: DateTime<Utc>,
}

impl OtpCode {
    /// Generates a new code for an email address
    ///
    /// # Arguments
    ///
    /// * `email` - Normalized email address
    /// * `ttl_seconds` - Lifetime of the code
    pub fn generate(email: String, ttl_seconds: u64) -> Self {
        let now = Utc::now();
        Self {
            code: Self::generate_code(OTP_LENGTH),
            email,
            created_at: now,
            expires_at: now + Duration::seconds(ttl_seconds as i64),
        }
    }

    /// Generates a random code of the given length from the restricted
    /// alphabet (digits 1-9, zero excluded)
    ///
    /// Uses the OS CSPRNG; each position is drawn independently and
    /// uniformly, so repeated calls are not correlated.
    pub fn generate_code(length: usize) -> String {
        let alphabet: Vec<char> = OTP_ALPHABET.chars().collect();
        let mut rng = OsRng;
        (0..length)
            .map(|_| alphabet[rng.gen_range(0..alphabet.len())])
            .collect()
    }

    /// Compares a candidate code in constant time
    pub fn matches(stored: &str, candidate: &str) -> bool {
        if stored.len() != candidate.len() {
            return false;
        }
        constant_time_eq(stored.as_bytes(), candidate.as_bytes())
    }

    /// Checks whether the code has expired
    pub fn is_expired(&self) -> bool {
        Utc::now() > self.expires_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_code_length() {
        let code = OtpCode::generate_code(6);
        assert_eq!(code.len(), 6);
    }

    #[test]
    fn test_generated_code_alphabet() {
        // Zero must never appear in a code
        for _ in 0..50 {
            let code = OtpCode::generate_code(6);
            assert!(code.chars().all(|c| ('1'..='9').contains(&c)), "bad code: {}", code);
        }
    }

    #[test]
    fn test_codes_are_not_a_counter() {
        let codes: Vec<String> = (0..20).map(|_| OtpCode::generate_code(6)).collect();
        let distinct: std::collections::HashSet<_> = codes.iter().collect();
        // 20 draws from 9^6 possibilities colliding entirely is effectively
        // impossible; a counter would produce 20 distinct sequential values,
        // so also check they are not monotonically increasing
        assert!(distinct.len() > 1);
        let sorted = {
            let mut s = codes.clone();
            s.sort();
            s
        };
        assert_ne!(codes, sorted);
    }

    #[test]
    fn test_matches_is_exact() {
        assert!(OtpCode::matches("123456", "123456"));
        assert!(!OtpCode::matches("123456", "123457"));
        assert!(!OtpCode::matches("123456", "12345"));
        assert!(!OtpCode::matches("123456", ""));
    }

    #[test]
    fn test_generate_sets_expiry() {
        let otp = OtpCode::generate("user@example.com".to_string(), 60);
        assert!(!otp.is_expired());
        assert_eq!(otp.expires_at - otp.created_at, Duration::seconds(60));
    }
}
