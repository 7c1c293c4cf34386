// Notification route definitions

use axum::{
    routing::{get, put},
    Router,
};

use crate::config::state::AppState;
use super::handler;

/// Creates router with all notification endpoints
pub fn notification_routes() -> Router<AppState> {
    Router::new()
        .route("/notifications", get(handler::list_notifications_handler))
        // Static segments win over `{id}`, so this never reaches the lookup
        .route("/notifications/with-entrance", get(handler::list_notifications_with_entrance_handler))
        .route("/notifications/{id}", get(handler::get_notification_handler))
        .route(
            "/notifications/entrance/{entrance_id}",
            get(handler::list_notifications_by_entrance_handler),
        )
        .route("/notifications/{id}/status", put(handler::update_notification_status_handler))
}
