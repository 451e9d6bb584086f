use crate::modules::accounts::adapters::outbound::account_store_in_memory::InMemoryAccountStore;
use crate::modules::accounts::adapters::outbound::argon2_hasher::Argon2PasswordHasher;
use crate::modules::accounts::core::ports::HashError;
use crate::modules::accounts::use_cases::register_user::handler::RegisterUserHandler;
use crate::shell::config::AppConfig;
use std::sync::Arc;

pub type AppRegisterUserHandler =
    RegisterUserHandler<InMemoryAccountStore, Argon2PasswordHasher, InMemoryAccountStore>;

#[derive(Clone)]
pub struct AppState {
    pub register_handler: Arc<AppRegisterUserHandler>,
}

impl AppState {
    pub fn from_config(config: &AppConfig) -> Result<Self, HashError> {
        let account_store = Arc::new(InMemoryAccountStore::new(config.avatar_base_url.clone()));
        let hasher = Arc::new(Argon2PasswordHasher::with_params(
            config.argon2_memory_kib,
            config.argon2_iterations,
            config.argon2_parallelism,
        )?);
        let register_handler = Arc::new(RegisterUserHandler::new(
            account_store.clone(),
            hasher,
            account_store,
        ));
        Ok(Self { register_handler })
    }
}
