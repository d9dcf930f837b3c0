//! Grammar annotation: highlight token runs, keep the text in between plain.
//!
//! Suggestions arrive in no particular order and are sorted on a private copy
//! by `first_word_index`. The walk keeps a cursor into the token list, emits
//! the plain run up to each suggestion and then the suggestion's own run.
//!
//! Malformed ranges are resolved locally:
//! - `first_word_index < 0` is clamped to 0 and `last_word_index` past the
//!   end is clamped to the last token;
//! - a range that is still empty after clamping is dropped;
//! - when ranges overlap, the one that sorts first wins and every later
//!   suggestion starting before the cursor is dropped whole.
//!
//! Each token therefore ends up in exactly one segment.

use std::ops::RangeInclusive;

use tracing::{debug, trace};

use crate::segment::Segment;
use crate::suggestion::GrammarSuggestion;
use crate::token::{join_tokens, Token};

/// Annotate `tokens` with multi-word suggestions.
///
/// With no suggestions the whole text comes back as a single plain segment.
/// Otherwise segments alternate between plain runs and highlighted runs; a
/// plain run is only emitted when it covers at least one token, so there is
/// never an empty leading or trailing segment around a suggestion touching
/// the start or end of the text.
pub fn annotate_grammar(tokens: &[Token<'_>], suggestions: &[GrammarSuggestion]) -> Vec<Segment> {
    if suggestions.is_empty() {
        return vec![Segment::plain(join_tokens(tokens))];
    }

    // stable: equal starts keep input order
    let mut sorted: Vec<&GrammarSuggestion> = suggestions.iter().collect();
    sorted.sort_by_key(|s| s.first_word_index);

    let mut segments = Vec::with_capacity(sorted.len() * 2 + 1);
    let mut cursor = 0usize;

    for suggestion in sorted {
        let Some(range) = clamp_range(suggestion, tokens.len()) else {
            debug!(
                first = suggestion.first_word_index,
                last = suggestion.last_word_index,
                token_count = tokens.len(),
                "ignoring grammar suggestion with empty range"
            );
            continue;
        };
        let (first, last) = (*range.start(), *range.end());

        if first < cursor {
            debug!(
                first,
                last,
                cursor,
                "ignoring grammar suggestion overlapping an earlier one"
            );
            continue;
        }

        if cursor < first {
            segments.push(Segment::plain(join_tokens(&tokens[cursor..first])));
        }
        segments.push(Segment::highlighted(
            join_tokens(&tokens[range]),
            suggestion.tooltip(),
        ));
        cursor = last + 1;
    }

    if cursor < tokens.len() {
        segments.push(Segment::plain(join_tokens(&tokens[cursor..])));
    }

    trace!(
        tokens = tokens.len(),
        segments = segments.len(),
        "grammar annotation done"
    );
    segments
}

/// Clamp a suggestion's range to `[0, token_count)`.
///
/// Returns `None` when nothing of the range is left.
fn clamp_range(suggestion: &GrammarSuggestion, token_count: usize) -> Option<RangeInclusive<usize>> {
    if token_count == 0 {
        return None;
    }
    let max = token_count as i64 - 1;
    let first = suggestion.first_word_index.max(0);
    let last = suggestion.last_word_index.min(max);
    if last < 0 || first > last {
        return None;
    }
    Some(first as usize..=last as usize)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::segment::reconstruct;
    use crate::token::tokenize;

    #[test]
    fn test_leading_suggestion() {
        let tokens = tokenize("I is happy today");
        let segments = annotate_grammar(
            &tokens,
            &[GrammarSuggestion::new(0, 1, "I am", "verb agreement")],
        );
        assert_eq!(
            segments,
            vec![
                Segment::highlighted("I is", "I am (verb agreement)"),
                Segment::plain("happy today"),
            ]
        );
    }

    #[test]
    fn test_no_suggestions_returns_text_verbatim() {
        let text = "  spaced   out text ";
        let segments = annotate_grammar(&tokenize(text), &[]);
        assert_eq!(segments, vec![Segment::plain(text)]);
    }

    #[test]
    fn test_no_suggestions_on_empty_text() {
        assert_eq!(annotate_grammar(&tokenize(""), &[]), vec![Segment::plain("")]);
    }

    #[test]
    fn test_trailing_suggestion_has_no_empty_tail() {
        let tokens = tokenize("she go home");
        let segments = annotate_grammar(&tokens, &[GrammarSuggestion::new(1, 2, "goes home", "tense")]);
        assert_eq!(
            segments,
            vec![
                Segment::plain("she"),
                Segment::highlighted("go home", "goes home (tense)"),
            ]
        );
    }

    #[test]
    fn test_adjacent_suggestions() {
        let tokens = tokenize("a b c d");
        let segments = annotate_grammar(
            &tokens,
            &[
                GrammarSuggestion::new(2, 3, "C D", "second"),
                GrammarSuggestion::new(0, 1, "A B", "first"),
            ],
        );
        assert_eq!(
            segments,
            vec![
                Segment::highlighted("a b", "A B (first)"),
                Segment::highlighted("c d", "C D (second)"),
            ]
        );
    }

    #[test]
    fn test_caller_list_is_not_reordered() {
        let tokens = tokenize("a b c d e f g");
        let suggestions = vec![
            GrammarSuggestion::new(5, 6, "x", "late"),
            GrammarSuggestion::new(1, 2, "y", "early"),
        ];
        let _ = annotate_grammar(&tokens, &suggestions);
        assert_eq!(suggestions[0].first_word_index, 5);
    }

    #[test]
    fn test_overlap_first_sorted_wins() {
        let text = "one two three four five";
        let tokens = tokenize(text);
        let segments = annotate_grammar(
            &tokens,
            &[
                GrammarSuggestion::new(1, 3, "wide", "a"),
                GrammarSuggestion::new(2, 2, "inner", "b"),
                GrammarSuggestion::new(3, 4, "tail", "c"),
            ],
        );
        assert_eq!(
            segments,
            vec![
                Segment::plain("one"),
                Segment::highlighted("two three four", "wide (a)"),
                Segment::plain("five"),
            ]
        );
        assert_eq!(reconstruct(&segments), text);
    }

    #[test]
    fn test_tied_starts_keep_input_order() {
        let tokens = tokenize("a b c");
        let segments = annotate_grammar(
            &tokens,
            &[
                GrammarSuggestion::new(0, 0, "first", "x"),
                GrammarSuggestion::new(0, 2, "second", "y"),
            ],
        );
        assert_eq!(segments[0], Segment::highlighted("a", "first (x)"));
        assert_eq!(segments[1], Segment::plain("b c"));
    }

    #[test]
    fn test_out_of_range_is_clamped_or_ignored() {
        let text = "a b c";
        let tokens = tokenize(text);
        let segments = annotate_grammar(
            &tokens,
            &[
                GrammarSuggestion::new(-2, 0, "A", "clamped start"),
                GrammarSuggestion::new(2, 40, "C", "clamped end"),
                GrammarSuggestion::new(10, 12, "gone", "past the end"),
                GrammarSuggestion::new(-5, -1, "gone", "before the start"),
            ],
        );
        assert_eq!(
            segments,
            vec![
                Segment::highlighted("a", "A (clamped start)"),
                Segment::plain("b"),
                Segment::highlighted("c", "C (clamped end)"),
            ]
        );
    }

    #[test]
    fn test_inverted_range_is_ignored() {
        let text = "x y z";
        let segments = annotate_grammar(&tokenize(text), &[GrammarSuggestion::new(2, 1, "?", "inverted")]);
        assert_eq!(segments, vec![Segment::plain(text)]);
    }

    #[test]
    fn test_empty_token_run_is_kept() {
        let text = "a  b";
        let tokens = tokenize(text);
        let segments = annotate_grammar(&tokens, &[GrammarSuggestion::new(2, 2, "B", "caps")]);
        assert_eq!(
            segments,
            vec![Segment::plain("a "), Segment::highlighted("b", "B (caps)")]
        );
        assert_eq!(reconstruct(&segments), text);
    }

    #[test]
    fn test_suggestions_on_empty_text() {
        let segments = annotate_grammar(&tokenize(""), &[GrammarSuggestion::new(0, 0, "x", "y")]);
        assert!(segments.is_empty());
        assert_eq!(reconstruct(&segments), "");
    }
}
