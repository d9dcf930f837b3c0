//! High-level checker tying config, backend, annotator and session together.

use tracing::info;

use grammarcheck_core::{Annotator, CheckMode, Segment, SuggestionResponse};

use crate::backend::{BackendClient, BackendError, CheckRequest};
use crate::config::CheckerConfig;
use crate::session::{CheckSession, RequestTicket};

/// One user's checker: submits text, annotates the answer, keeps the newest
/// result.
#[derive(Debug)]
pub struct Checker {
    config: CheckerConfig,
    annotator: Annotator,
    client: BackendClient,
    session: CheckSession,
}

impl Checker {
    /// Create a checker for the backend configured in `config`.
    pub fn new(config: CheckerConfig) -> Result<Self, BackendError> {
        let client = BackendClient::from_config(&config)?;
        Ok(Self {
            annotator: Annotator::new(config.base.clone()),
            config,
            client,
            session: CheckSession::new(),
        })
    }

    pub fn config(&self) -> &CheckerConfig {
        &self.config
    }

    pub fn session(&self) -> &CheckSession {
        &self.session
    }

    /// Ask the backend for suggestions and annotate `text` with them.
    ///
    /// Returns `Ok(None)` when a newer check was started while this one was
    /// waiting on the backend; its result is dropped.
    pub fn check(&self, text: &str, mode: CheckMode) -> Result<Option<Vec<Segment>>, BackendError> {
        let ticket = self.session.begin();
        let request = CheckRequest::from_config(text, mode, &self.config);
        let response = self.client.check(&request)?;
        Ok(self.finish(ticket, text, &response, mode))
    }

    /// Annotate with suggestions obtained elsewhere (e.g. a saved response).
    pub fn annotate_offline(
        &self,
        text: &str,
        response: &SuggestionResponse,
        mode: CheckMode,
    ) -> Option<Vec<Segment>> {
        let ticket = self.session.begin();
        self.finish(ticket, text, response, mode)
    }

    fn finish(
        &self,
        ticket: RequestTicket,
        text: &str,
        response: &SuggestionResponse,
        mode: CheckMode,
    ) -> Option<Vec<Segment>> {
        let segments = self.annotator.annotate(text, response, mode);
        if !self.session.complete(ticket, segments.clone()) {
            return None;
        }
        info!(
            ticket = ticket.sequence(),
            %mode,
            segments = segments.len(),
            highlighted = grammarcheck_core::highlighted_count(&segments),
            "check complete"
        );
        Some(segments)
    }
}
