// Ports define what the registration flow needs from the outside world, without implementing it.
//
// Responsibilities
// - Describe account lookup, password hashing and account creation as async traits.
// - Keep the core independent of any database or hashing library.
//
// Boundaries
// - Adapters implement these traits. Email uniqueness is enforced by the `AddAccount`
//   implementation; callers may check beforehand but cannot guarantee it.

use crate::modules::accounts::core::account::{Account, NewAccount};
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AccountStoreError {
    #[error("an account with email {email} already exists")]
    DuplicateEmail { email: String },

    #[error("backend error: {0}")]
    Backend(String),
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum HashError {
    #[error("could not generate salt: {0}")]
    Salt(String),

    #[error("hashing failed: {0}")]
    Backend(String),
}

#[async_trait]
pub trait LoadAccountByEmail: Send + Sync {
    async fn load_by_email(&self, email: &str) -> Result<Option<Account>, AccountStoreError>;
}

#[async_trait]
pub trait PasswordHasher: Send + Sync {
    async fn hash(&self, plaintext: &str) -> Result<String, HashError>;
}

#[async_trait]
pub trait AddAccount: Send + Sync {
    async fn add(&self, account: NewAccount) -> Result<Account, AccountStoreError>;
}
