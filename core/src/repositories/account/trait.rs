//! Account repository trait defining the interface for account persistence.
//!
//! The trait is async-first and keeps the abstraction boundary between the
//! domain layer and whatever database sits behind it.

use async_trait::async_trait;

use crate::domain::entities::account::Account;
use crate::errors::DomainError;

/// Repository trait for Account entity persistence operations
///
/// Implementations handle the actual database access; the domain services
/// only see this contract. Emails passed in are expected to be normalized
/// (trimmed, lowercased) by the caller.
#[async_trait]
pub trait AccountRepository: Send + Sync {
    /// Find an account by its normalized email address
    ///
    /// # Returns
    /// * `Ok(Some(Account))` - Account found
    /// * `Ok(None)` - No account with that email
    /// * `Err(DomainError)` - Database error
    async fn find_by_email(&self, email: &str) -> Result<Option<Account>, DomainError>;

    /// Persist a new account
    ///
    /// Fails with `AuthError::AlreadyExists` if the email is already taken,
    /// relying on the unique constraint rather than a prior lookup.
    async fn create(&self, account: Account) -> Result<Account, DomainError>;

    /// Update an existing account
    ///
    /// Fails with `AuthError::NotFound` if the account does not exist.
    async fn update(&self, account: Account) -> Result<Account, DomainError>;

    /// Check whether an email is already registered
    async fn exists_by_email(&self, email: &str) -> Result<bool, DomainError>;
}
