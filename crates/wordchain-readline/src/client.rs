//! HTTP client for the game server.

use anyhow::{Context, Result, anyhow, bail};
use serde::Deserialize;
use std::time::Duration;
use wordchain_core::{Chain, GameSession};

pub const DEFAULT_SERVER: &str = "http://localhost:3001";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Body of `GET /api/game/new`, success or failure.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewGamePayload {
    pub success: bool,
    #[serde(default)]
    pub chain: Vec<String>,
    #[serde(default)]
    pub first_word: String,
    #[serde(default)]
    pub last_word: String,
    #[serde(default)]
    pub hints: Vec<String>,
    #[serde(default)]
    pub error: Option<String>,
}

impl NewGamePayload {
    /// Starts a local session from this payload.
    pub fn into_session(self) -> Result<GameSession> {
        if !self.success {
            bail!(
                "{}",
                self.error
                    .unwrap_or_else(|| "server reported a failure".to_string())
            );
        }
        Ok(GameSession::new(Chain::new(self.chain))?)
    }
}

pub struct GameClient {
    http: reqwest::Client,
    base_url: String,
}

impl GameClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .context("failed to build HTTP client")?;
        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Requests a fresh chain.
    ///
    /// Non-2xx responses that still carry a JSON error body are surfaced with
    /// the server's message.
    pub async fn new_game(&self) -> Result<NewGamePayload> {
        let url = format!("{}/api/game/new", self.base_url);
        let response = self
            .http
            .get(&url)
            .send()
            .await
            .with_context(|| format!("request to {} failed", url))?;

        let status = response.status();
        let payload: NewGamePayload = response
            .json()
            .await
            .with_context(|| format!("unexpected response from {} ({})", url, status))?;

        if !status.is_success() || !payload.success {
            return Err(anyhow!(
                "{}",
                payload
                    .error
                    .unwrap_or_else(|| format!("server returned {}", status))
            ));
        }
        Ok(payload)
    }

    /// True when `/api/health` answers with status ok.
    pub async fn health(&self) -> bool {
        #[derive(Deserialize)]
        struct Health {
            status: String,
        }

        let url = format!("{}/api/health", self.base_url);
        match self.http.get(&url).send().await {
            Ok(resp) => resp
                .json::<Health>()
                .await
                .map(|h| h.status == "ok")
                .unwrap_or(false),
            Err(_) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_into_session() {
        let payload: NewGamePayload = serde_json_like(
            r#"{"success":true,"chain":["straw","berry","jam","session","musician"],
                "firstWord":"straw","lastWord":"musician","hints":["b","j","s"]}"#,
        );
        let session = payload.into_session().unwrap();
        assert_eq!(session.chain().first(), Some("straw"));
    }

    #[test]
    fn test_failure_payload_keeps_message() {
        let payload: NewGamePayload =
            serde_json_like(r#"{"success":false,"error":"No word pairs in database"}"#);
        let err = payload.into_session().unwrap_err();
        assert_eq!(err.to_string(), "No word pairs in database");
    }

    #[test]
    fn test_short_chain_is_rejected() {
        let payload: NewGamePayload = serde_json_like(r#"{"success":true,"chain":["a","b"]}"#);
        assert!(payload.into_session().is_err());
    }

    #[test]
    fn test_trailing_slash_trimmed() {
        let client = GameClient::new("http://localhost:3001/").unwrap();
        assert_eq!(client.base_url(), "http://localhost:3001");
    }

    fn serde_json_like(raw: &str) -> NewGamePayload {
        serde_json::from_str(raw).unwrap()
    }
}
