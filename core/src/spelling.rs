//! Spelling annotation: one segment per token, highlighting flagged words.

use std::collections::HashMap;

use tracing::{debug, trace};

use crate::segment::Segment;
use crate::suggestion::SpellingSuggestion;
use crate::token::Token;

/// Annotate `tokens` with single-word suggestions.
///
/// Every token becomes exactly one segment, so joining the result with a
/// single space restores the text. A flagged token keeps its original text;
/// the correction only appears in the tooltip. When several suggestions share
/// a `word_index` the first one in list order is used and the rest are
/// ignored. Indices outside the token range match nothing.
pub fn annotate_spelling(tokens: &[Token<'_>], suggestions: &[SpellingSuggestion]) -> Vec<Segment> {
    let mut by_index: HashMap<usize, &SpellingSuggestion> = HashMap::with_capacity(suggestions.len());
    for suggestion in suggestions {
        let Some(pos) = suggestion.position().filter(|&p| p < tokens.len()) else {
            debug!(
                word_index = suggestion.word_index,
                token_count = tokens.len(),
                "ignoring spelling suggestion outside the text"
            );
            continue;
        };
        if by_index.contains_key(&pos) {
            debug!(word_index = pos, "ignoring duplicate spelling suggestion");
            continue;
        }
        by_index.insert(pos, suggestion);
    }

    let segments: Vec<Segment> = tokens
        .iter()
        .map(|token| match by_index.get(&token.index) {
            Some(suggestion) => Segment::highlighted(token.text, suggestion.tooltip()),
            None => Segment::plain(token.text),
        })
        .collect();

    trace!(
        tokens = tokens.len(),
        highlighted = by_index.len(),
        "spelling annotation done"
    );
    segments
}

/// Re-point suggestions at the first token equal to their `word`.
///
/// Models are unreliable at counting words, so a suggestion that carries the
/// flagged word is moved to where that word actually occurs. Suggestions
/// without a word, or whose word is not in the text, are returned unchanged.
/// The input list is not modified.
pub fn realign_spelling(
    tokens: &[Token<'_>],
    suggestions: &[SpellingSuggestion],
) -> Vec<SpellingSuggestion> {
    suggestions
        .iter()
        .map(|suggestion| {
            let mut aligned = suggestion.clone();
            if let Some(word) = suggestion.word.as_deref() {
                if let Some(token) = tokens.iter().find(|t| t.text == word) {
                    if token.index as i64 != suggestion.word_index {
                        debug!(
                            word,
                            from = suggestion.word_index,
                            to = token.index,
                            "realigned spelling suggestion"
                        );
                    }
                    aligned.word_index = token.index as i64;
                }
            }
            aligned
        })
        .collect()
}
