// Entrance (flex_entrance) handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
};
use serde_json::json;
use tracing::{info, instrument};

use crate::api::parse_id;
use crate::config::state::AppState;
use crate::utils::error_handler::ApiError;
use crate::utils::response_handler::HandlerResponse;

pub const ENTRANCE_NOT_FOUND: &str = "Entrada não encontrada";

/// Lists every entrance by recorded timestamp, newest first
#[instrument(skip(state))]
pub async fn list_entrances_handler(
    State(state): State<AppState>,
) -> Result<HandlerResponse, ApiError> {
    let entrances = state
        .store
        .list_entrances()
        .await
        .map_err(|e| ApiError::store("Erro ao buscar entradas", e))?;

    info!("Returning {} entrances", entrances.len());
    Ok(HandlerResponse::new(StatusCode::OK).data(json!(entrances)))
}

#[instrument(skip(state))]
pub async fn get_entrance_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<HandlerResponse, ApiError> {
    let id: i32 = parse_id(&id).ok_or(ApiError::NotFound(ENTRANCE_NOT_FOUND))?;

    let entrance = state
        .store
        .find_entrance(id)
        .await
        .map_err(|e| ApiError::store("Erro ao buscar entrada", e))?
        .ok_or(ApiError::NotFound(ENTRANCE_NOT_FOUND))?;

    Ok(HandlerResponse::new(StatusCode::OK).data(json!(entrance)))
}
