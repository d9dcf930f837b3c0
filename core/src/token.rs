//! Word tokenization shared by the annotators and the suggestion backend.
//!
//! The backend computes every `word_index` against exactly this scheme, so the
//! rule is deliberately naive: split on the single ASCII space and nothing
//! else. Repeated spaces produce empty tokens that keep their position, and no
//! trimming or normalization is applied.

/// The only token delimiter. Tabs, newlines and other whitespace stay inside
/// tokens.
pub const TOKEN_DELIMITER: char = ' ';

/// A word-like slice of the input together with its ordinal position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    /// Token text, borrowed from the original input (may be empty)
    pub text: &'a str,
    /// 0-based position in the token sequence
    pub index: usize,
}

impl<'a> Token<'a> {
    pub fn new(text: &'a str, index: usize) -> Self {
        Self { text, index }
    }

    /// True for the empty tokens produced by consecutive delimiters.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// Split `text` into tokens.
///
/// Empty text yields no tokens at all; any non-empty text yields
/// `delimiter_count + 1` tokens.
pub fn tokenize(text: &str) -> Vec<Token<'_>> {
    if text.is_empty() {
        return Vec::new();
    }

    text.split(TOKEN_DELIMITER)
        .enumerate()
        .map(|(index, word)| Token::new(word, index))
        .collect()
}

/// Join token texts back together with the delimiter.
///
/// `join_tokens(&tokenize(s)) == s` for every `s`.
pub fn join_tokens(tokens: &[Token<'_>]) -> String {
    let mut out = String::with_capacity(tokens.iter().map(|t| t.text.len() + 1).sum());
    for (i, token) in tokens.iter().enumerate() {
        if i > 0 {
            out.push(TOKEN_DELIMITER);
        }
        out.push_str(token.text);
    }
    out
}
