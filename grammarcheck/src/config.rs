//! Client configuration that extends the base `Config` from core.
//!
//! This configuration includes:
//! - All generic options from `grammarcheck_core::Config` (flattened via serde)
//! - Where the suggestion backend lives and how long to wait for it
//! - The provider/model/key triple forwarded untouched to the backend
//! - Terminal output options
//!
//! # Example
//!
//! ```rust
//! use grammarcheck::CheckerConfig;
//!
//! let config = CheckerConfig::from_toml_str(r#"
//!     backend_url = "http://checker.internal:8000"
//!     default_mode = "grammar"
//! "#).unwrap();
//! assert_eq!(config.check_url(), "http://checker.internal:8000/check_grammar");
//! ```
use std::path::Path;

use serde::{Deserialize, Serialize};

use grammarcheck_core::{Config, Error, Result};

/// Environment variable overriding `backend_url`.
pub const BACKEND_URL_ENV: &str = "GRAMMARCHECK_BACKEND_URL";
/// Environment variable overriding `api_key`.
pub const API_KEY_ENV: &str = "GRAMMARCHECK_API_KEY";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct CheckerConfig {
    /// Base configuration fields (default mode, realignment)
    #[serde(flatten)]
    pub base: Config,

    /// Base URL of the suggestion backend
    pub backend_url: String,
    /// Path of the check endpoint, appended to `backend_url`
    pub endpoint: String,

    // Forwarded as-is; the backend owns provider handling
    pub provider: String,
    pub model: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    /// Request timeout for one backend round-trip
    pub timeout_ms: u64,

    /// Style highlighted segments with ANSI colors
    pub color: bool,
}

impl Default for CheckerConfig {
    fn default() -> Self {
        Self {
            base: Config::default(),
            backend_url: "http://localhost:8000".to_string(),
            endpoint: "/check_grammar".to_string(),
            provider: "OpenAI".to_string(),
            model: "gpt-4-turbo".to_string(),
            api_key: None,
            timeout_ms: 30_000,
            color: true,
        }
    }
}

impl CheckerConfig {
    /// Load configuration from a TOML file.
    pub fn load_toml<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Load configuration from TOML string.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::Config(e.to_string()))
    }

    /// Serialize configuration to TOML string.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| Error::Config(e.to_string()))
    }

    /// Apply `GRAMMARCHECK_BACKEND_URL` / `GRAMMARCHECK_API_KEY` when set.
    pub fn apply_env(&mut self) {
        self.apply_overrides(
            std::env::var(BACKEND_URL_ENV).ok(),
            std::env::var(API_KEY_ENV).ok(),
        );
    }

    fn apply_overrides(&mut self, backend_url: Option<String>, api_key: Option<String>) {
        if let Some(url) = backend_url.filter(|u| !u.trim().is_empty()) {
            self.backend_url = url;
        }
        if let Some(key) = api_key.filter(|k| !k.is_empty()) {
            self.api_key = Some(key);
        }
    }

    /// Full URL of the check endpoint.
    pub fn check_url(&self) -> String {
        format!(
            "{}/{}",
            self.backend_url.trim_end_matches('/'),
            self.endpoint.trim_start_matches('/')
        )
    }

    /// Get a reference to the base config
    pub fn base(&self) -> &Config {
        &self.base
    }

    /// Get a mutable reference to the base config
    pub fn base_mut(&mut self) -> &mut Config {
        &mut self.base
    }
}
