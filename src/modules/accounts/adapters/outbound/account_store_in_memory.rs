// In memory implementation of the account lookup and account creation ports.
//
// Purpose
// - Support handler tests and local development without a database.
//
// Responsibilities
// - Store accounts keyed by email.
// - Enforce email uniqueness atomically on insert.
// - Assign a time ordered id and an avatar URI to every new account.

use crate::modules::accounts::core::account::{Account, NewAccount};
use crate::modules::accounts::core::ports::{AccountStoreError, AddAccount, LoadAccountByEmail};
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;
use tokio::sync::RwLock;
use uuid::Uuid;

pub struct InMemoryAccountStore {
    accounts: RwLock<HashMap<String, Account>>,
    avatar_base_url: String,
    offline: bool,
    delay_add_ms: AtomicU64,
}

impl InMemoryAccountStore {
    pub fn new(avatar_base_url: impl Into<String>) -> Self {
        Self {
            accounts: RwLock::new(HashMap::new()),
            avatar_base_url: avatar_base_url.into(),
            offline: false,
            delay_add_ms: AtomicU64::new(0),
        }
    }

    pub fn toggle_offline(&mut self) {
        self.offline = !self.offline;
    }

    /// Delay every insert, before the uniqueness check, by `ms` milliseconds.
    pub fn set_delay_add_ms(&self, ms: u64) {
        self.delay_add_ms.store(ms, Ordering::Relaxed);
    }

    pub async fn len(&self) -> usize {
        self.accounts.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    fn avatar_for(&self, id: &str) -> String {
        format!("{}/{id}.png", self.avatar_base_url.trim_end_matches('/'))
    }

    fn ensure_online(&self) -> Result<(), AccountStoreError> {
        if self.offline {
            return Err(AccountStoreError::Backend("Account store offline".into()));
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl LoadAccountByEmail for InMemoryAccountStore {
    async fn load_by_email(&self, email: &str) -> Result<Option<Account>, AccountStoreError> {
        self.ensure_online()?;
        Ok(self.accounts.read().await.get(email).cloned())
    }
}

#[async_trait::async_trait]
impl AddAccount for InMemoryAccountStore {
    async fn add(&self, account: NewAccount) -> Result<Account, AccountStoreError> {
        self.ensure_online()?;
        let delay = self.delay_add_ms.load(Ordering::Relaxed);
        if delay > 0 {
            tokio::time::sleep(Duration::from_millis(delay)).await;
        }

        let mut guard = self.accounts.write().await;
        match guard.entry(account.email) {
            Entry::Occupied(occupied) => Err(AccountStoreError::DuplicateEmail {
                email: occupied.key().clone(),
            }),
            Entry::Vacant(vacant) => {
                let id = Uuid::now_v7().to_string();
                let stored = Account {
                    avatar: self.avatar_for(&id),
                    id,
                    name: account.name,
                    email: vacant.key().clone(),
                    password: account.password,
                };
                vacant.insert(stored.clone());
                Ok(stored)
            }
        }
    }
}
