//! Account repository trait defining the interface for account persistence.
//!
//! The trait is async-first and keeps the abstraction boundary between
//! the domain and infrastructure layers: implementations own the
//! email-uniqueness invariant (unique index) and are the correctness
//! backstop for the orchestration's check-then-insert sequence.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::account::Account;
use crate::errors::DomainError;

/// Repository trait for Account entity persistence operations
#[async_trait]
pub trait AccountRepository: Send + Sync {
    /// Find an account by its case-normalized email address.
    ///
    /// # Returns
    /// * `Ok(Some(Account))` - Account found
    /// * `Ok(None)` - No account with this email
    /// * `Err(DomainError)` - Database or other error occurred
    async fn find_by_email(&self, email: &str) -> Result<Option<Account>, DomainError>;

    /// Find an account by its unique identifier.
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Account>, DomainError>;

    /// Insert a new account.
    ///
    /// Fails with `AuthError::AccountExists` when the email is already
    /// registered - including the case where a concurrent signup won
    /// the insert race after this caller's existence check passed.
    async fn insert(&self, account: Account) -> Result<Account, DomainError>;
}
