// Unified response system for consistent API responses
// Provides HandlerResponse struct and middleware for standardizing all responses

use axum::{
    body::Body,
    http::{
        header::{CONTENT_LENGTH, CONTENT_TYPE},
        response::Parts,
        HeaderValue, Request, Response, StatusCode,
    },
    middleware::Next,
    response::IntoResponse,
    Json,
};
use http_body_util::BodyExt; // needed for collect()
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::convert::Infallible;
use tracing::{error, info};

/// Standard JSON envelope for all API endpoints.
/// `success` mirrors the HTTP status; the remaining keys appear only when set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Top-level keys specific to one endpoint (e.g. `timestamp` on the status route)
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Convenience struct for building responses in handlers
#[derive(Debug, Clone)]
pub struct HandlerResponse {
    pub status_code: StatusCode,
    pub envelope: Envelope,
}

impl HandlerResponse {
    /// Creates a new response with specified status code
    pub fn new(status_code: StatusCode) -> Self {
        Self {
            status_code,
            envelope: Envelope {
                success: status_code.is_success(),
                data: None,
                message: None,
                error: None,
                extra: Map::new(),
            },
        }
    }

    /// Adds JSON data payload to the response
    pub fn data(mut self, data: Value) -> Self {
        self.envelope.data = Some(data);
        self
    }

    /// Sets the human-readable message
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.envelope.message = Some(message.into());
        self
    }

    /// Attaches the underlying failure detail
    pub fn error(mut self, error: impl Into<String>) -> Self {
        self.envelope.error = Some(error.into());
        self
    }

    /// Adds an extra top-level key
    pub fn field(mut self, key: impl Into<String>, value: Value) -> Self {
        self.envelope.extra.insert(key.into(), value);
        self
    }
}

impl IntoResponse for HandlerResponse {
    fn into_response(self) -> axum::response::Response {
        let mut response: Response<Body> = Json(&self.envelope).into_response();

        *response.status_mut() = self.status_code;

        // Mark the response as already enveloped for the middleware
        response.extensions_mut().insert(self);
        response
    }
}

// Two-space indented JSON for the logs
fn pretty_envelope(envelope: &Envelope) -> serde_json::Result<String> {
    serde_json::to_string_pretty(envelope)
}

/// Logs the formatted response with proper JSON indentation
fn log_formatted_response(status: StatusCode, envelope: &Envelope) {
    match pretty_envelope(envelope) {
        Ok(spaced_json) => info!("\nFinal response ({}):\n{}", status.as_u16(), spaced_json),
        Err(err) => error!("Failed to format response JSON: {:?}", err),
    }
}

/// Builds the final response with JSON content type
fn build_final_response(parts: Parts, envelope: &Envelope) -> Response<Body> {
    let json_body: Vec<u8> = serde_json::to_vec(envelope).unwrap_or_else(|_| b"{}".to_vec());
    let mut new_parts: Parts = parts;

    new_parts.headers.remove(CONTENT_LENGTH);
    new_parts
        .headers
        .insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

    Response::from_parts(new_parts, Body::from(json_body))
}

/// Middleware that guarantees every API response is an Envelope.
/// Handler output passes through untouched; error responses produced by axum
/// itself (JSON rejections, body limits) are re-wrapped with their text in `error`.
pub async fn response_wrapper(
    req: Request<Body>,
    next: Next,
) -> Result<Response<Body>, Infallible> {
    let response: Response<Body> = next.run(req).await;

    if let Some(handled) = response.extensions().get::<HandlerResponse>() {
        log_formatted_response(handled.status_code, &handled.envelope);
        return Ok(response);
    }

    let status: StatusCode = response.status();
    if !status.is_client_error() && !status.is_server_error() {
        return Ok(response);
    }

    let (parts, body) = response.into_parts();

    let detail: String = match body.collect().await {
        Ok(collected) => String::from_utf8_lossy(&collected.to_bytes()).trim().to_string(),
        Err(err) => format!("Failed to read body: {err}"),
    };

    let mut wrapped: HandlerResponse = HandlerResponse::new(status)
        .message(status.canonical_reason().unwrap_or("Unknown Status"));
    if !detail.is_empty() {
        wrapped = wrapped.error(detail);
    }

    log_formatted_response(status, &wrapped.envelope);

    Ok(build_final_response(parts, &wrapped.envelope))
}
