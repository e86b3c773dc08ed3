//! Error-to-response mapping for the HTTP surface.
//!
//! Not-found conditions and bad input are reported distinctly; every other
//! failure collapses into a generic server-error body. Response bodies are
//! structured JSON so clients never have to scrape free-form text.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::{DateTime, Utc};
use serde::Serialize;

use stockroom_core::item::{ItemError, ParseItemStatusError};
use stockroom_core::storage::{repository_error_to_status_code, RepositoryError};

/// JSON body returned for every error response.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub timestamp: DateTime<Utc>,
    pub status: u16,
    pub error: String,
    pub message: String,
}

/// Builds an error response with the structured JSON body.
pub fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    let message = message.into();
    tracing::warn!(status = %status, message = %message, "API error");

    let body = ErrorBody {
        timestamp: Utc::now(),
        status: status.as_u16(),
        error: status
            .canonical_reason()
            .unwrap_or("Unknown Error")
            .to_string(),
        message,
    };
    (status, Json(body)).into_response()
}

/// Application error type that wraps `anyhow::Error`.
///
/// Lets handlers use `?` on anything convertible into `anyhow::Error`.
/// Known error kinds are recovered by downcast: repository errors use the
/// pure status mapping from core, and boundary validation errors report as
/// bad requests.
pub struct AppError(pub anyhow::Error);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status_code = if let Some(repo_error) = self.0.downcast_ref::<RepositoryError>() {
            StatusCode::from_u16(repository_error_to_status_code(repo_error))
                .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
        } else if self.0.downcast_ref::<ParseItemStatusError>().is_some()
            || self.0.downcast_ref::<ItemError>().is_some()
        {
            StatusCode::BAD_REQUEST
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        };

        if status_code.is_server_error() {
            tracing::error!(error = %self.0, "Request failed");
        }

        error_response(status_code, self.0.to_string())
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_maps_to_404() {
        let error = AppError(RepositoryError::item_not_found(9).into());

        let response = error.into_response();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_connection_failure_maps_to_503() {
        let error = AppError(RepositoryError::ConnectionFailed("down".to_string()).into());

        let response = error.into_response();

        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[test]
    fn test_invalid_status_token_maps_to_400() {
        let error = AppError(ParseItemStatusError("retired".to_string()).into());

        let response = error.into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_draft_validation_maps_to_400() {
        let error = AppError(ItemError::EmptyName.into());

        let response = error.into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_unknown_error_maps_to_500() {
        let error = AppError(anyhow::anyhow!("something unexpected"));

        let response = error.into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
