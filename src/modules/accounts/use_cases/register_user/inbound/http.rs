use axum::{
    Json, extract::State, extract::rejection::JsonRejection, http::StatusCode,
    response::IntoResponse,
};
use serde::{Deserialize, Serialize};

use crate::modules::accounts::core::account::Account;
use crate::modules::accounts::core::ports::AccountStoreError;
use crate::modules::accounts::use_cases::register_user::command::RegisterUser;
use crate::modules::accounts::use_cases::register_user::handler::RegisterUserError;
use crate::modules::accounts::use_cases::register_user::outcome::RegisterUserOutcome;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct RegisterUserBody {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Public view of an account. The password hash stays on the server.
#[derive(Serialize)]
pub struct AccountResponse {
    pub id: String,
    pub name: String,
    pub email: String,
    pub avatar: String,
}

impl From<Account> for AccountResponse {
    fn from(account: Account) -> Self {
        Self {
            id: account.id,
            name: account.name,
            email: account.email,
            avatar: account.avatar,
        }
    }
}

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<RegisterUserBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    let command = RegisterUser {
        name: body.name,
        email: body.email,
        password: body.password,
    };

    match state.register_handler.register(command).await {
        Ok(RegisterUserOutcome::Registered(account)) => {
            (StatusCode::CREATED, Json(AccountResponse::from(account))).into_response()
        }
        Ok(RegisterUserOutcome::EmailTaken)
        | Err(RegisterUserError::Persist(AccountStoreError::DuplicateEmail { .. })) => {
            StatusCode::CONFLICT.into_response()
        }
        Err(_) => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
    }
}
