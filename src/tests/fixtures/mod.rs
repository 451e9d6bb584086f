// Shared test fixtures, compiled only under cfg(test).

pub mod accounts {
    pub mod account;
}

pub mod collaborators {
    pub mod spy_account_store;
    pub mod stub_password_hasher;
}

pub mod commands {
    pub mod register_user;
}
