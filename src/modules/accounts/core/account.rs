use serde::{Deserialize, Serialize};

/// A registered user as persisted by the account store.
/// `password` always holds the hasher's output.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Account {
    pub id: String,
    pub name: String,
    pub email: String,
    pub password: String,
    pub avatar: String,
}

/// Account creation request handed to the store. The store assigns `id` and `avatar`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAccount {
    pub name: String,
    pub email: String,
    pub password: String,
}
