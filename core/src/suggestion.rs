//! Suggestion types as exchanged with the suggestion backend.
//!
//! Indices are signed on the wire: a model that answers with `-1` should lead
//! to an ignored suggestion, not a rejected response.

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// A correction bound to a single token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpellingSuggestion {
    pub word_index: i64,
    pub word_correction: String,
    pub explanation: String,

    /// The flagged word as the backend saw it, used for index realignment
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub word: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub previous_words: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub subsequent_words: Vec<String>,
}

impl SpellingSuggestion {
    pub fn new<C: Into<String>, E: Into<String>>(
        word_index: i64,
        word_correction: C,
        explanation: E,
    ) -> Self {
        Self {
            word_index,
            word_correction: word_correction.into(),
            explanation: explanation.into(),
            word: None,
            previous_words: Vec::new(),
            subsequent_words: Vec::new(),
        }
    }

    /// Attach the flagged word.
    pub fn with_word<W: Into<String>>(mut self, word: W) -> Self {
        self.word = Some(word.into());
        self
    }

    /// Token position, `None` when the index is negative.
    pub fn position(&self) -> Option<usize> {
        usize::try_from(self.word_index).ok()
    }

    /// Tooltip text: `"{word_correction}: {explanation}"`.
    pub fn tooltip(&self) -> String {
        format!("{}: {}", self.word_correction, self.explanation)
    }
}

/// A correction bound to an inclusive run of tokens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GrammarSuggestion {
    pub first_word_index: i64,
    pub last_word_index: i64,
    pub improved_sentence: String,
    pub explanation: String,
}

impl GrammarSuggestion {
    pub fn new<S: Into<String>, E: Into<String>>(
        first_word_index: i64,
        last_word_index: i64,
        improved_sentence: S,
        explanation: E,
    ) -> Self {
        Self {
            first_word_index,
            last_word_index,
            improved_sentence: improved_sentence.into(),
            explanation: explanation.into(),
        }
    }

    /// Tooltip text: `"{improved_sentence} ({explanation})"`.
    pub fn tooltip(&self) -> String {
        format!("{} ({})", self.improved_sentence, self.explanation)
    }
}

/// Backend response body. Either list may be absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuggestionResponse {
    #[serde(default)]
    pub spelling_suggestions: Vec<SpellingSuggestion>,
    #[serde(default)]
    pub grammar_suggestions: Vec<GrammarSuggestion>,
}

impl SuggestionResponse {
    /// Parse a response body.
    ///
    /// Suggestions missing a required field are reported as
    /// [`Error::InvalidSuggestions`](crate::Error::InvalidSuggestions).
    pub fn from_json(body: &str) -> Result<Self> {
        Ok(serde_json::from_str(body)?)
    }

    /// Serialize to pretty JSON (e.g. to save a response for offline use).
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn is_empty(&self) -> bool {
        self.spelling_suggestions.is_empty() && self.grammar_suggestions.is_empty()
    }
}
