// HTTP surface: one folder per resource, each with routes + handlers

pub mod docs;
pub mod entrance;
pub mod notifications;
pub mod status;

use axum::Router;

use crate::config::state::AppState;

/// Every JSON route, relative to `{base}/api`
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(notifications::routes::notification_routes())
        .merge(entrance::routes::entrance_routes())
        .merge(status::routes::status_routes())
}

/// Ids are integers; anything else can't match a row
pub(crate) fn parse_id(raw: &str) -> Option<i32> {
    raw.trim().parse().ok()
}
