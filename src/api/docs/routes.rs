// Documentation page and root redirect (HTML, outside the JSON API)

use axum::{routing::get, Router};

use crate::config::state::AppState;
use super::handler;

pub fn docs_routes(base_path: &str) -> Router<AppState> {
    Router::new()
        .route("/", get(handler::redirect_to_docs_handler))
        .route(base_path, get(handler::docs_handler))
}
