use async_graphql::{Context, ID, Object, Result as GqlResult, SimpleObject};

use crate::modules::accounts::core::account::Account;
use crate::modules::accounts::use_cases::register_user::command::RegisterUser;
use crate::shell::state::AppState;

#[derive(SimpleObject, Clone)]
#[graphql(name = "Account")]
pub struct GqlAccount {
    pub id: ID,
    pub name: String,
    pub email: String,
    pub avatar: String,
}

impl From<Account> for GqlAccount {
    fn from(account: Account) -> Self {
        Self {
            id: ID(account.id),
            name: account.name,
            email: account.email,
            avatar: account.avatar,
        }
    }
}

pub struct MutationRoot;

#[Object]
impl MutationRoot {
    /// Returns null when the email is already registered.
    async fn register_user(
        &self,
        context: &Context<'_>,
        name: String,
        email: String,
        password: String,
    ) -> GqlResult<Option<GqlAccount>> {
        let state = context.data_unchecked::<AppState>();

        let outcome = state
            .register_handler
            .register(RegisterUser {
                name,
                email,
                password,
            })
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;

        Ok(outcome.into_account().map(GqlAccount::from))
    }
}
