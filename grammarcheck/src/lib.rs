//! grammarcheck crate root
//!
//! This crate puts a front-end around the `grammarcheck-core` annotation
//! engine: it sends text to the suggestion backend, annotates the answer and
//! renders the result.
//!
//! Public API exported here:
//! - `CheckerConfig` from `config`
//! - `BackendClient`, `CheckRequest`, `BackendError` from `backend`
//! - `CheckSession`, `RequestTicket` from `session`
//! - `Checker` from `checker`
//! - `ConfigOverrides`, `read_input` from `cli`
//! - `render`, `render_terminal`, `render_json`, `OutputFormat` from `render`

pub mod backend;
pub mod checker;
pub mod cli;
pub mod config;
pub mod render;
pub mod session;

// Re-export engine types from core so callers need a single dependency.
pub use grammarcheck_core::{
    annotate, annotate_grammar, annotate_spelling, reconstruct, tokenize, Annotator, CheckMode,
    Config, GrammarSuggestion, Segment, SpellingSuggestion, SuggestionResponse, Token,
};

pub use backend::{BackendClient, BackendError, CheckRequest, GENERIC_FAILURE};
pub use checker::Checker;
pub use cli::{read_input, ConfigOverrides};
pub use config::CheckerConfig;
pub use render::{render, render_json, render_terminal, OutputFormat};
pub use session::{CheckSession, RequestTicket};
