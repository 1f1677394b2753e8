//! Wire shapes. Success bodies use camelCase keys.

use serde::{Deserialize, Serialize};
use wordchain_application::{NewGame, ValidateRequest, WordValidation};

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewGameResponse {
    pub success: bool,
    pub chain: Vec<String>,
    pub first_word: String,
    pub last_word: String,
    pub hints: Vec<String>,
}

impl From<NewGame> for NewGameResponse {
    fn from(game: NewGame) -> Self {
        Self {
            success: true,
            chain: game.chain.into_words(),
            first_word: game.first_word,
            last_word: game.last_word,
            hints: game.hints,
        }
    }
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct ValidateBody {
    pub word: Option<String>,
    pub position: Option<i64>,
    pub chain: Option<Vec<String>>,
}

impl From<ValidateBody> for ValidateRequest {
    fn from(body: ValidateBody) -> Self {
        Self {
            word: body.word,
            position: body.position,
            chain: body.chain,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidateResponse {
    pub success: bool,
    pub valid: bool,
    pub correct_word: String,
}

impl From<WordValidation> for ValidateResponse {
    fn from(result: WordValidation) -> Self {
        Self {
            success: true,
            valid: result.valid,
            correct_word: result.correct_word,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: error.into(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    /// RFC 3339.
    pub timestamp: String,
}
