use thiserror::Error;

/// Errors surfaced by the core crate.
///
/// Malformed suggestion *indices* are never errors; the annotators ignore or
/// clamp them. Only payloads that do not have the suggestion shape at all end
/// up here.
#[derive(Debug, Error)]
pub enum Error {
    /// Suggestion JSON is missing required fields or has the wrong types
    #[error("invalid suggestion payload: {0}")]
    InvalidSuggestions(#[from] serde_json::Error),

    #[error("unknown check mode '{0}' (expected 'spelling' or 'grammar')")]
    UnknownMode(String),

    #[error("invalid config: {0}")]
    Config(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
