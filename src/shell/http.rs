use axum::{Router, routing::post};

use crate::modules::accounts::use_cases::register_user::inbound::http as register_http;
use crate::shell::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/register-user", post(register_http::handle))
        .with_state(state)
}
