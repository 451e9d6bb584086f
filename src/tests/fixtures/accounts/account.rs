use crate::modules::accounts::core::account::Account;

/// Canonical stored account with per-field overrides.
pub struct AccountBuilder {
    inner: Account,
}

impl Default for AccountBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl AccountBuilder {
    pub fn new() -> Self {
        Self {
            inner: Account {
                id: "account-fixed-0001".to_string(),
                name: "existing".to_string(),
                email: "existing@x.com".to_string(),
                password: "$argon2id$v=19$m=19456,t=2,p=1$c2FsdA$aGFzaA".to_string(),
                avatar: "https://avatars.example.com/account-fixed-0001.png".to_string(),
            },
        }
    }

    pub fn id(mut self, v: impl Into<String>) -> Self {
        self.inner.id = v.into();
        self
    }

    pub fn name(mut self, v: impl Into<String>) -> Self {
        self.inner.name = v.into();
        self
    }

    pub fn email(mut self, v: impl Into<String>) -> Self {
        self.inner.email = v.into();
        self
    }

    pub fn password(mut self, v: impl Into<String>) -> Self {
        self.inner.password = v.into();
        self
    }

    pub fn avatar(mut self, v: impl Into<String>) -> Self {
        self.inner.avatar = v.into();
        self
    }

    pub fn build(self) -> Account {
        self.inner
    }
}

#[cfg(test)]
mod account_builder_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn setters_override_only_the_given_fields() {
        let account = AccountBuilder::new().email("b@x.com").password("h2").build();
        assert_eq!(account.email, "b@x.com");
        assert_eq!(account.password, "h2");
        assert_eq!(account.id, "account-fixed-0001");
        assert_eq!(account.name, "existing");
    }
}
