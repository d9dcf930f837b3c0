//! Check mode: which annotator feeds the renderer.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::grammar::annotate_grammar;
use crate::segment::Segment;
use crate::spelling::annotate_spelling;
use crate::suggestion::SuggestionResponse;
use crate::token::tokenize;

/// Kind of check requested from the backend and rendered to the user.
///
/// Serialized as `"spelling"` / `"grammar"`, which is also the value of the
/// backend request's `suggestionType` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckMode {
    /// Single-word corrections
    #[default]
    Spelling,
    /// Corrections over word ranges
    Grammar,
}

impl CheckMode {
    pub const ALL: [CheckMode; 2] = [CheckMode::Spelling, CheckMode::Grammar];

    pub fn as_str(&self) -> &'static str {
        match self {
            CheckMode::Spelling => "spelling",
            CheckMode::Grammar => "grammar",
        }
    }
}

impl fmt::Display for CheckMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CheckMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "spelling" => Ok(CheckMode::Spelling),
            "grammar" => Ok(CheckMode::Grammar),
            _ => Err(Error::UnknownMode(s.to_string())),
        }
    }
}

/// Tokenize `text` and run the annotator selected by `mode`.
///
/// Only the suggestion list belonging to `mode` is consulted.
pub fn annotate(mode: CheckMode, text: &str, response: &SuggestionResponse) -> Vec<Segment> {
    let tokens = tokenize(text);
    match mode {
        CheckMode::Spelling => annotate_spelling(&tokens, &response.spelling_suggestions),
        CheckMode::Grammar => annotate_grammar(&tokens, &response.grammar_suggestions),
    }
}
