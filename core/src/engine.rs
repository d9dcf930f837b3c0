// core/src/engine.rs
//
// Config-aware entry point over the pure annotators.

use tracing::debug;

use crate::mode::{annotate, CheckMode};
use crate::segment::Segment;
use crate::spelling::realign_spelling;
use crate::suggestion::SuggestionResponse;
use crate::token::tokenize;
use crate::Config;

/// Annotation engine holding the caller's configuration.
///
/// Stateless between calls: every `annotate*` call works on its own inputs and
/// returns a fresh segment list, so one engine can be shared freely.
#[derive(Debug, Clone, Default)]
pub struct Annotator {
    config: Config,
}

impl Annotator {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Annotate `text` in the given mode.
    ///
    /// When `realign_spelling_indices` is set, spelling suggestions that carry
    /// their word are moved onto the token holding it before annotating.
    pub fn annotate(&self, text: &str, response: &SuggestionResponse, mode: CheckMode) -> Vec<Segment> {
        if mode == CheckMode::Spelling && self.config.realign_spelling_indices {
            let tokens = tokenize(text);
            let realigned = SuggestionResponse {
                spelling_suggestions: realign_spelling(&tokens, &response.spelling_suggestions),
                grammar_suggestions: Vec::new(),
            };
            debug!(count = realigned.spelling_suggestions.len(), "annotating with realigned indices");
            return annotate(mode, text, &realigned);
        }
        annotate(mode, text, response)
    }

    /// Annotate in the configured default mode.
    pub fn annotate_default(&self, text: &str, response: &SuggestionResponse) -> Vec<Segment> {
        self.annotate(text, response, self.config.default_mode)
    }
}
