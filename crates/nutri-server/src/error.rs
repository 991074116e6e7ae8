//! HTTP error mapping
//!
//! Turns a `DomainError` into a status code plus `{"detail": ...}` body.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

use nutri::DomainError;

/// Error body returned for every failed request
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorBody {
    pub detail: String,
}

/// Route-level error wrapper
#[derive(Debug, Error)]
#[error(transparent)]
pub struct ApiError(#[from] pub DomainError);

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match &self.0 {
            DomainError::InvalidArgument(_) => StatusCode::UNPROCESSABLE_ENTITY,
            DomainError::Misconfigured(_) => StatusCode::INTERNAL_SERVER_ERROR,
            DomainError::UpstreamError { status, .. } => {
                StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY)
            }
            DomainError::UpstreamUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            DomainError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn detail(&self) -> String {
        match &self.0 {
            DomainError::InvalidArgument(msg) => msg.clone(),
            DomainError::Misconfigured(msg) => msg.clone(),
            DomainError::UpstreamError { body, .. } => format!("Edamam API error: {}", body),
            DomainError::UpstreamUnavailable(msg) => {
                format!("Failed to connect to Edamam API: {}", msg)
            }
            DomainError::Internal(_) => "Internal server error".to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();

        match &self.0 {
            DomainError::Internal(cause) => tracing::error!("❌ Internal error: {}", cause),
            DomainError::InvalidArgument(_) => {}
            other => tracing::warn!("⚠️  Food search failed ({}): {}", status, other),
        }

        (status, Json(ErrorBody { detail: self.detail() })).into_response()
    }
}
