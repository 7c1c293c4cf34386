// Liveness endpoint

use axum::http::StatusCode;
use chrono::{SecondsFormat, Utc};
use serde_json::json;
use tracing::{info, instrument};

use crate::utils::response_handler::HandlerResponse;

pub const API_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns API status; never touches the database, so it answers even when it is down
#[instrument]
pub async fn status_handler() -> HandlerResponse {
    info!("Status endpoint called");

    HandlerResponse::new(StatusCode::OK)
        .message("API funcionando normalmente")
        .field(
            "timestamp",
            json!(Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)),
        )
        .field("version", json!(API_VERSION))
}
