// Notification handlers: listings, lookup and the status update

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::{header::CONTENT_TYPE, HeaderMap, StatusCode},
};
use chrono::{DateTime, NaiveDateTime};
use serde_json::json;
use tracing::{info, instrument};

use crate::api::parse_id;
use crate::config::state::AppState;
use crate::models::{StatusUpdate, UpdateStatusRequest};
use crate::utils::error_handler::ApiError;
use crate::utils::response_handler::HandlerResponse;

pub const NOTIFICATION_NOT_FOUND: &str = "Notificação não encontrada";
pub const STATUS_REQUIRED: &str = "Status é obrigatório";
pub const INVALID_SENT_DATE: &str = "sent_date inválido";
pub const INVALID_BODY: &str = "Corpo da requisição inválido";
pub const STATUS_UPDATED: &str = "Status da notificação atualizado com sucesso";

/// Lists every notification, newest first
#[instrument(skip(state))]
pub async fn list_notifications_handler(
    State(state): State<AppState>,
) -> Result<HandlerResponse, ApiError> {
    let notifications = state
        .store
        .list_notifications()
        .await
        .map_err(|e| ApiError::store("Erro ao buscar notificações", e))?;

    info!("Returning {} notifications", notifications.len());
    Ok(HandlerResponse::new(StatusCode::OK).data(json!(notifications)))
}

/// Lists every notification with the columns of its entrance (null when unmatched)
#[instrument(skip(state))]
pub async fn list_notifications_with_entrance_handler(
    State(state): State<AppState>,
) -> Result<HandlerResponse, ApiError> {
    let rows = state
        .store
        .list_notifications_with_entrance()
        .await
        .map_err(|e| ApiError::store("Erro ao buscar notificações com entradas", e))?;

    info!("Returning {} notifications with entrance data", rows.len());
    Ok(HandlerResponse::new(StatusCode::OK).data(json!(rows)))
}

#[instrument(skip(state))]
pub async fn get_notification_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<HandlerResponse, ApiError> {
    let id: i32 = parse_id(&id).ok_or(ApiError::NotFound(NOTIFICATION_NOT_FOUND))?;

    let notification = state
        .store
        .find_notification(id)
        .await
        .map_err(|e| ApiError::store("Erro ao buscar notificação", e))?
        .ok_or(ApiError::NotFound(NOTIFICATION_NOT_FOUND))?;

    Ok(HandlerResponse::new(StatusCode::OK).data(json!(notification)))
}

/// Lists the notifications of one entrance; an unknown entrance yields an empty list
#[instrument(skip(state))]
pub async fn list_notifications_by_entrance_handler(
    State(state): State<AppState>,
    Path(entrance_id): Path<String>,
) -> Result<HandlerResponse, ApiError> {
    let Some(entrance_id) = parse_id(&entrance_id) else {
        return Ok(HandlerResponse::new(StatusCode::OK).data(json!([])));
    };

    let notifications = state
        .store
        .list_notifications_by_entrance(entrance_id)
        .await
        .map_err(|e| ApiError::store("Erro ao buscar notificações por entrance_id", e))?;

    Ok(HandlerResponse::new(StatusCode::OK).data(json!(notifications)))
}

/// Sets the status of one notification, and its sent_date when one is given.
/// The body is checked before anything touches the database.
#[instrument(skip(state, headers, body))]
pub async fn update_notification_status_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<HandlerResponse, ApiError> {
    let request: UpdateStatusRequest = parse_update_body(&headers, &body)?;
    let update: StatusUpdate = validate_status_update(request)?;
    let id: i32 = parse_id(&id).ok_or(ApiError::NotFound(NOTIFICATION_NOT_FOUND))?;

    let matched: u64 = state
        .store
        .update_notification_status(id, &update)
        .await
        .map_err(|e| ApiError::store("Erro ao atualizar status da notificação", e))?;

    if matched == 0 {
        return Err(ApiError::NotFound(NOTIFICATION_NOT_FOUND));
    }

    info!("Notification {} status set to '{}'", id, update.status);
    Ok(HandlerResponse::new(StatusCode::OK).message(STATUS_UPDATED))
}

/// An empty body, or one not sent as JSON, reads as `{}`
fn parse_update_body(headers: &HeaderMap, body: &[u8]) -> Result<UpdateStatusRequest, ApiError> {
    if !has_json_content_type(headers) || body.trim_ascii().is_empty() {
        return Ok(UpdateStatusRequest::default());
    }

    serde_json::from_slice(body).map_err(|e| ApiError::Validation {
        message: INVALID_BODY,
        detail: Some(e.to_string()),
    })
}

fn has_json_content_type(headers: &HeaderMap) -> bool {
    headers
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(';').next())
        .map(|mime| {
            let mime = mime.trim().to_ascii_lowercase();
            mime == "application/json" || mime.ends_with("+json")
        })
        .unwrap_or(false)
}

fn validate_status_update(request: UpdateStatusRequest) -> Result<StatusUpdate, ApiError> {
    let status: String = request
        .status
        .filter(|status| !status.is_empty())
        .ok_or_else(|| ApiError::validation(STATUS_REQUIRED))?;

    let sent_date: Option<NaiveDateTime> = match request.sent_date.as_deref() {
        None | Some("") => None,
        Some(raw) => Some(parse_sent_date(raw).map_err(|e| ApiError::Validation {
            message: INVALID_SENT_DATE,
            detail: Some(format!("'{raw}': {e}")),
        })?),
    };

    Ok(StatusUpdate { status, sent_date })
}

/// Accepts RFC 3339 (normalized to UTC) or a naive ISO-8601 date-time
fn parse_sent_date(raw: &str) -> Result<NaiveDateTime, chrono::ParseError> {
    if let Ok(with_offset) = DateTime::parse_from_rfc3339(raw) {
        return Ok(with_offset.naive_utc());
    }

    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f"))
}
