// Error taxonomy for the HTTP boundary and the catch-all 404

use axum::{
    extract::OriginalUri,
    http::{Method, StatusCode},
    response::{IntoResponse, Response},
};
use thiserror::Error;
use tracing::{error, info};

use crate::utils::response_handler::HandlerResponse;

pub const ROUTE_NOT_FOUND: &str = "Rota não encontrada";

/// Every way a handler can fail. Converted into the envelope at the boundary.
#[derive(Debug, Error)]
pub enum ApiError {
    /// A required field is missing or unparseable (400)
    #[error("{message}")]
    Validation {
        message: &'static str,
        detail: Option<String>,
    },

    /// Lookup by identifier found no row (404)
    #[error("{0}")]
    NotFound(&'static str),

    /// Connecting to or querying the database failed (500)
    #[error("{message}")]
    Store {
        message: &'static str,
        detail: anyhow::Error,
    },
}

impl ApiError {
    pub fn validation(message: &'static str) -> Self {
        Self::Validation { message, detail: None }
    }

    pub fn store(message: &'static str, detail: anyhow::Error) -> Self {
        Self::Store { message, detail }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation { .. } => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Store { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<ApiError> for HandlerResponse {
    fn from(err: ApiError) -> Self {
        let response: HandlerResponse = HandlerResponse::new(err.status_code());

        match err {
            ApiError::Validation { message, detail } => match detail {
                Some(detail) => response.message(message).error(detail),
                None => response.message(message),
            },
            ApiError::NotFound(message) => response.message(message),
            ApiError::Store { message, detail } => {
                error!("{}: {:#}", message, detail);
                response.message(message).error(format!("{detail:#}"))
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        HandlerResponse::from(self).into_response()
    }
}

/// Fallback for unmatched paths and unsupported methods on known paths
pub async fn route_not_found(method: Method, OriginalUri(uri): OriginalUri) -> HandlerResponse {
    info!("No route for {} {}", method, uri);

    HandlerResponse::new(StatusCode::NOT_FOUND).message(ROUTE_NOT_FOUND)
}
