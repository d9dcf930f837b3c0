//! grammarcheck-core
//!
//! Annotation engine shared by the grammarcheck front-ends: given a text and
//! the index-based suggestions a backend produced for it, build the ordered
//! list of plain and highlighted segments a renderer displays.
//!
//! Public API:
//! - `tokenize` / `Token` - the single-space tokenization suggestion indices refer to
//! - `Segment` - plain or highlighted (with tooltip) unit of render output
//! - `SpellingSuggestion`, `GrammarSuggestion`, `SuggestionResponse` - backend wire types
//! - `annotate_spelling`, `annotate_grammar` - the two annotators
//! - `CheckMode`, `annotate` - mode dispatch
//! - `Annotator` - config-aware entry point
//! - `Config` - configuration shared with front-end crates
use serde::{Deserialize, Serialize};

pub mod error;
pub use error::{Error, Result};

pub mod token;
pub use token::{join_tokens, tokenize, Token, TOKEN_DELIMITER};

pub mod segment;
pub use segment::{highlighted_count, reconstruct, Segment, SEGMENT_SEPARATOR};

pub mod suggestion;
pub use suggestion::{GrammarSuggestion, SpellingSuggestion, SuggestionResponse};

pub mod spelling;
pub use spelling::{annotate_spelling, realign_spelling};

pub mod grammar;
pub use grammar::annotate_grammar;

pub mod mode;
pub use mode::{annotate, CheckMode};

pub mod engine;
pub use engine::Annotator;

/// Generic configuration for the annotation engine.
///
/// Front-end crates flatten this into their own config (backend address,
/// output options and so on).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    /// Mode used when the caller does not pick one
    pub default_mode: CheckMode,

    /// Move spelling suggestions onto the first token equal to their `word`
    /// before annotating. Off by default: indices from the backend are
    /// trusted as-is.
    pub realign_spelling_indices: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_mode: CheckMode::Spelling,
            realign_spelling_indices: false,
        }
    }
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load_toml<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Save configuration to a TOML file.
    pub fn save_toml<P: AsRef<std::path::Path>>(&self, path: P) -> Result<()> {
        let content = self.to_toml_string()?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Load configuration from TOML string.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::Config(e.to_string()))
    }

    /// Serialize configuration to TOML string.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| Error::Config(e.to_string()))
    }
}
