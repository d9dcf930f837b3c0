//! Check session: keeps the most recent result and drops stale ones.
//!
//! A user may resubmit while an earlier backend call is still in flight. Each
//! submission takes a [`RequestTicket`] from [`CheckSession::begin`]; when the
//! call returns, [`CheckSession::complete`] only stores the segments if no
//! newer ticket has been issued since. A slow, stale answer can therefore
//! never overwrite a newer one.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;

use tracing::debug;

use grammarcheck_core::Segment;

/// Sequence number identifying one check request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestTicket(u64);

impl RequestTicket {
    pub fn sequence(&self) -> u64 {
        self.0
    }
}

#[derive(Debug, Default)]
struct Displayed {
    ticket: Option<RequestTicket>,
    segments: Vec<Segment>,
}

/// Result holder shared between the submitting side and in-flight checks.
///
/// All methods take `&self`; wrap in an `Arc` to share across threads.
#[derive(Debug, Default)]
pub struct CheckSession {
    issued: AtomicU64,
    displayed: Mutex<Displayed>,
}

impl CheckSession {
    /// Create a new empty session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new request, superseding every earlier ticket.
    pub fn begin(&self) -> RequestTicket {
        RequestTicket(self.issued.fetch_add(1, Ordering::SeqCst) + 1)
    }

    /// True if `ticket` is the most recently issued one.
    pub fn is_current(&self, ticket: RequestTicket) -> bool {
        self.issued.load(Ordering::SeqCst) == ticket.0
    }

    /// Store `segments` for `ticket` unless a newer request was started.
    ///
    /// Returns whether the segments were accepted.
    pub fn complete(&self, ticket: RequestTicket, segments: Vec<Segment>) -> bool {
        let mut displayed = self.displayed.lock().unwrap_or_else(|e| e.into_inner());
        if !self.is_current(ticket) || displayed.ticket.is_some_and(|t| t >= ticket) {
            debug!(
                ticket = ticket.0,
                latest = self.issued.load(Ordering::SeqCst),
                "discarding stale check result"
            );
            return false;
        }
        displayed.ticket = Some(ticket);
        displayed.segments = segments;
        true
    }

    /// Segments of the latest accepted result (empty before the first one).
    pub fn latest(&self) -> Vec<Segment> {
        self.displayed
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .segments
            .clone()
    }

    /// Ticket of the latest accepted result.
    pub fn latest_ticket(&self) -> Option<RequestTicket> {
        self.displayed.lock().unwrap_or_else(|e| e.into_inner()).ticket
    }

    /// Forget the displayed result. Outstanding tickets stay valid.
    pub fn clear(&self) {
        let mut displayed = self.displayed.lock().unwrap_or_else(|e| e.into_inner());
        displayed.ticket = None;
        displayed.segments.clear();
    }
}
