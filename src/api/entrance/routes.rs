// Entrance route definitions

use axum::{routing::get, Router};

use crate::config::state::AppState;
use super::handler;

pub fn entrance_routes() -> Router<AppState> {
    Router::new()
        .route("/entrance", get(handler::list_entrances_handler))
        .route("/entrance/{id}", get(handler::get_entrance_handler))
}
