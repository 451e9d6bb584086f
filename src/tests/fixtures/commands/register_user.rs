use crate::modules::accounts::use_cases::register_user::command::RegisterUser;

pub struct RegisterUserBuilder {
    inner: RegisterUser,
}

impl Default for RegisterUserBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl RegisterUserBuilder {
    pub fn new() -> Self {
        Self {
            inner: RegisterUser {
                name: "alice".to_string(),
                email: "a@x.com".to_string(),
                password: "pw1".to_string(),
            },
        }
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

    pub fn build(self) -> RegisterUser {
        self.inner
    }
}

#[cfg(test)]
mod register_user_builder_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn default_delegates_to_new() {
        let built = RegisterUserBuilder::default().build();
        assert_eq!(built.name, "alice");
        assert_eq!(built.email, "a@x.com");
        assert_eq!(built.password, "pw1");
    }

    #[rstest]
    fn setters_override_all_fields() {
        let custom = RegisterUserBuilder::new()
            .name("bob")
            .email("b@x.com")
            .password("pw2")
            .build();
        assert_eq!(custom.name, "bob");
        assert_eq!(custom.email, "b@x.com");
        assert_eq!(custom.password, "pw2");
    }
}
