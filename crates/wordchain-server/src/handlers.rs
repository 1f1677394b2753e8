use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use wordchain_application::MISSING_FIELDS;
use wordchain_core::WordChainError;

use crate::AppState;
use crate::dto::{HealthResponse, NewGameResponse, ValidateBody, ValidateResponse};
use crate::error::ApiError;

pub async fn new_game(State(state): State<AppState>) -> Result<Json<NewGameResponse>, ApiError> {
    let game = state.game.new_game().await?;
    Ok(Json(game.into()))
}

/// An unparsable body is reported the same way as missing fields.
pub async fn validate_word(
    State(state): State<AppState>,
    body: Result<Json<ValidateBody>, JsonRejection>,
) -> Result<Json<ValidateResponse>, ApiError> {
    let Json(body) = body.map_err(|rejection| {
        tracing::debug!("Rejected validate body: {}", rejection);
        WordChainError::invalid_request(MISSING_FIELDS)
    })?;

    let result = state.game.validate_word(body.into())?;
    Ok(Json(result.into()))
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        timestamp: chrono::Utc::now().to_rfc3339(),
    })
}
