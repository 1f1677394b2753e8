use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use wordchain_core::WordChainError;

use crate::dto::ErrorResponse;

/// A [`WordChainError`] on its way out as an HTTP response.
#[derive(Debug)]
pub struct ApiError(pub WordChainError);

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match &self.0 {
            WordChainError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            WordChainError::DataSourceUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            WordChainError::EmptyCorpus
            | WordChainError::ChainExhausted { .. }
            | WordChainError::Serialization { .. }
            | WordChainError::Config(_)
            | WordChainError::Io { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<WordChainError> for ApiError {
    fn from(err: WordChainError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(status = status.as_u16(), error = %self.0, "request failed");
        } else {
            tracing::warn!(status = status.as_u16(), error = %self.0, "request rejected");
        }
        (status, Json(ErrorResponse::new(self.0.to_string()))).into_response()
    }
}
