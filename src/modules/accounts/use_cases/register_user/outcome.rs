use crate::modules::accounts::core::account::Account;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegisterUserOutcome {
    Registered(Account),
    EmailTaken,
}

impl RegisterUserOutcome {
    /// `None` when the email was already registered.
    pub fn into_account(self) -> Option<Account> {
        match self {
            RegisterUserOutcome::Registered(account) => Some(account),
            RegisterUserOutcome::EmailTaken => None,
        }
    }
}
