//! Password hashing seam and placeholder password generation.

use rand::rngs::OsRng;
use rand::seq::SliceRandom;
use rand::Rng;

/// Trait for password hashing integration
///
/// Hashing is CPU-bound and synchronous; implementations that need to keep
/// the executor responsive can wrap calls in `spawn_blocking` at the call
/// site.
pub trait PasswordHasher: Send + Sync {
    /// Hash a raw password
    fn hash(&self, raw: &str) -> Result<String, String>;

    /// Check a raw password against a stored hash
    fn verify(&self, raw: &str, hash: &str) -> Result<bool, String>;
}

const LOWER: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
const UPPER: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const DIGITS: &[u8] = b"0123456789";
const SPECIAL: &[u8] = b"!@#$%^&*()-_=+";

/// Generates the random 12-character placeholder password assigned at
/// registration
///
/// Contains at least one character from each class so it passes any password
/// policy, then shuffled so class positions are not predictable. The value
/// is hashed and immediately forgotten; nobody can log in with it.
pub fn generate_placeholder_password() -> String {
    let mut rng = OsRng;
    let mut chars: Vec<u8> = vec![
        LOWER[rng.gen_range(0..LOWER.len())],
        UPPER[rng.gen_range(0..UPPER.len())],
        DIGITS[rng.gen_range(0..DIGITS.len())],
        SPECIAL[rng.gen_range(0..SPECIAL.len())],
    ];

    let all: Vec<u8> = [LOWER, UPPER, DIGITS, SPECIAL].concat();
    while chars.len() < 12 {
        chars.push(all[rng.gen_range(0..all.len())]);
    }
    chars.shuffle(&mut rng);

    // Alphabet is ASCII throughout
    String::from_utf8(chars).unwrap_or_default()
}
