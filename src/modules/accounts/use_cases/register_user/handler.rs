// Registration handler orchestrates the write flow.
//
// Responsibilities
// - Look up an existing account by email and stop if one is found.
// - Hash the plaintext password.
// - Hand the account with the hashed password to the store and return what it returns.
//
// Boundaries
// - No retries and no recovery: a failing collaborator ends the flow with its own error.
// - Two concurrent calls for one email can both pass the lookup. The store rejects the
//   second insert and that rejection comes back as `RegisterUserError::Persist`.

use crate::modules::accounts::core::account::NewAccount;
use crate::modules::accounts::core::ports::{
    AccountStoreError, AddAccount, HashError, LoadAccountByEmail, PasswordHasher,
};
use crate::modules::accounts::use_cases::register_user::command::RegisterUser;
use crate::modules::accounts::use_cases::register_user::outcome::RegisterUserOutcome;
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegisterUserError {
    #[error("account lookup failed: {0}")]
    Lookup(AccountStoreError),

    #[error("password hashing failed: {0}")]
    Hash(HashError),

    #[error("account persistence failed: {0}")]
    Persist(AccountStoreError),
}

pub struct RegisterUserHandler<TLookup, THasher, TStore>
where
    TLookup: LoadAccountByEmail + Send + Sync + 'static,
    THasher: PasswordHasher + Send + Sync + 'static,
    TStore: AddAccount + Send + Sync + 'static,
{
    accounts_by_email: Arc<TLookup>,
    hasher: Arc<THasher>,
    account_store: Arc<TStore>,
}

impl<TLookup, THasher, TStore> RegisterUserHandler<TLookup, THasher, TStore>
where
    TLookup: LoadAccountByEmail + Send + Sync + 'static,
    THasher: PasswordHasher + Send + Sync + 'static,
    TStore: AddAccount + Send + Sync + 'static,
{
    pub fn new(
        accounts_by_email: Arc<TLookup>,
        hasher: Arc<THasher>,
        account_store: Arc<TStore>,
    ) -> Self {
        Self {
            accounts_by_email,
            hasher,
            account_store,
        }
    }

    #[tracing::instrument(name = "register_user", skip_all, fields(email = %command.email))]
    pub async fn register(
        &self,
        command: RegisterUser,
    ) -> Result<RegisterUserOutcome, RegisterUserError> {
        let existing = self
            .accounts_by_email
            .load_by_email(&command.email)
            .await
            .map_err(|error| {
                tracing::warn!(%error, "account lookup failed");
                RegisterUserError::Lookup(error)
            })?;

        if existing.is_some() {
            tracing::info!("email already registered");
            return Ok(RegisterUserOutcome::EmailTaken);
        }

        let hashed_password = self
            .hasher
            .hash(&command.password)
            .await
            .map_err(|error| {
                tracing::warn!(%error, "password hashing failed");
                RegisterUserError::Hash(error)
            })?;

        let account = self
            .account_store
            .add(NewAccount {
                name: command.name,
                email: command.email,
                password: hashed_password,
            })
            .await
            .map_err(|error| {
                tracing::warn!(%error, "account persistence failed");
                RegisterUserError::Persist(error)
            })?;

        tracing::info!(account_id = %account.id, "account registered");
        Ok(RegisterUserOutcome::Registered(account))
    }
}
