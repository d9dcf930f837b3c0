//! Transport to the suggestion backend.
//!
//! The backend receives the text plus the provider/model/key triple and answers
//! with index-based spelling and grammar suggestions. How it talks to the
//! model is its own business; this module only knows the JSON shapes:
//!
//! ```text
//! POST {backend_url}{endpoint}
//! { "text": "...", "provider": "...", "model": "...", "key": "...", "suggestionType": "spelling" }
//!
//! 200 { "spelling_suggestions": [...], "grammar_suggestions": [...] }
//! ```
//!
//! Uses the `reqwest` blocking client: one request per check, no runtime.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use grammarcheck_core::{CheckMode, SuggestionResponse};

use crate::config::CheckerConfig;

/// Message shown to the user for any backend failure.
pub const GENERIC_FAILURE: &str = "Failed to get suggestions from the server";

/// Request body sent to the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckRequest {
    pub text: String,
    pub provider: String,
    pub model: String,
    pub key: String,
    #[serde(rename = "suggestionType")]
    pub suggestion_type: CheckMode,
}

impl CheckRequest {
    /// Build a request for `text` using the provider settings in `config`.
    pub fn from_config<T: Into<String>>(text: T, mode: CheckMode, config: &CheckerConfig) -> Self {
        Self {
            text: text.into(),
            provider: config.provider.clone(),
            model: config.model.clone(),
            key: config.api_key.clone().unwrap_or_default(),
            suggestion_type: mode,
        }
    }
}

/// Why a backend round-trip failed.
#[derive(Debug, Error)]
pub enum BackendError {
    /// Connection failure, timeout or unreadable body
    #[error("request to suggestion backend failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Backend answered with a non-success status
    #[error("suggestion backend returned {status}: {message}")]
    Status { status: u16, message: String },

    /// Body is not a suggestion response
    #[error("unexpected suggestion backend response: {0}")]
    Decode(#[from] grammarcheck_core::Error),
}

/// Error body the backend (or a proxy in front of it) sends on failure.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

/// Blocking client for the suggestion backend.
#[derive(Debug, Clone)]
pub struct BackendClient {
    url: String,
    timeout_ms: u64,
    client: reqwest::blocking::Client,
}

impl BackendClient {
    /// Create a client posting to `url` with the given timeout.
    pub fn new<U: Into<String>>(url: U, timeout_ms: u64) -> Result<Self, BackendError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_millis(timeout_ms))
            .build()?;
        Ok(Self {
            url: url.into(),
            timeout_ms,
            client,
        })
    }

    /// Create a client for the endpoint configured in `config`.
    pub fn from_config(config: &CheckerConfig) -> Result<Self, BackendError> {
        Self::new(config.check_url(), config.timeout_ms)
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn timeout_ms(&self) -> u64 {
        self.timeout_ms
    }

    /// Send `request` and decode the suggestions (blocking).
    pub fn check(&self, request: &CheckRequest) -> Result<SuggestionResponse, BackendError> {
        debug!(
            url = %self.url,
            provider = %request.provider,
            model = %request.model,
            mode = %request.suggestion_type,
            chars = request.text.len(),
            "sending check request"
        );

        let response = self.client.post(&self.url).json(request).send()?;
        let status = response.status();
        let body = response.text()?;

        if !status.is_success() {
            let message = serde_json::from_str::<ErrorBody>(&body)
                .map(|e| e.message)
                .unwrap_or_else(|_| body.trim().to_string());
            warn!(status = status.as_u16(), %message, "suggestion backend error");
            return Err(BackendError::Status {
                status: status.as_u16(),
                message,
            });
        }

        let suggestions = SuggestionResponse::from_json(&body)?;
        debug!(
            spelling = suggestions.spelling_suggestions.len(),
            grammar = suggestions.grammar_suggestions.len(),
            "received suggestions"
        );
        Ok(suggestions)
    }
}
