// SPDX-License-Identifier: MPL-2.0
//! Off-thread folder traversal protocol.
//!
//! Every traversal the viewer asks for carries a ticket. Issuing a new
//! ticket cancels the previous traversal's token and makes its ticket
//! stale, so at most one result can ever be applied: the newest.

use crate::directory_scanner::{self, CancelToken, ImageSequence};
use crate::error::Result;
use std::path::{Path, PathBuf};

/// Identifies one traversal request. Only the most recently issued ticket
/// is accepted back by the viewer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScanTicket(u64);

/// A traversal the caller must run, inline or on a worker thread.
#[derive(Debug, Clone)]
pub struct ScanRequest {
    ticket: ScanTicket,
    folder: PathBuf,
    target: Option<PathBuf>,
    cancel: CancelToken,
}

impl ScanRequest {
    pub fn ticket(&self) -> ScanTicket {
        self.ticket
    }

    /// Folder to traverse.
    pub fn folder(&self) -> &Path {
        &self.folder
    }

    /// File to make current once the sequence is built, if any.
    pub fn target(&self) -> Option<&Path> {
        self.target.as_deref()
    }

    /// Runs the traversal. Blocking; may take long on large trees.
    pub fn run(self) -> ScanOutcome {
        let result = directory_scanner::list_cancellable(&self.folder, &self.cancel);
        ScanOutcome {
            ticket: self.ticket,
            folder: self.folder,
            target: self.target,
            result,
        }
    }
}

/// Result of running a [`ScanRequest`], to be handed back to the viewer.
#[derive(Debug, Clone)]
pub struct ScanOutcome {
    pub ticket: ScanTicket,
    pub folder: PathBuf,
    pub target: Option<PathBuf>,
    pub result: Result<ImageSequence>,
}

/// Issues tickets and remembers which one is current.
#[derive(Debug, Default)]
pub(crate) struct ScanTracker {
    generation: u64,
    in_flight: Option<CancelToken>,
}

impl ScanTracker {
    /// Supersedes any traversal in flight and returns a request for a new one.
    pub(crate) fn issue(&mut self, folder: PathBuf, target: Option<PathBuf>) -> ScanRequest {
        if let Some(previous) = self.in_flight.take() {
            previous.cancel();
        }
        self.generation += 1;
        let cancel = CancelToken::new();
        self.in_flight = Some(cancel.clone());

        ScanRequest {
            ticket: ScanTicket(self.generation),
            folder,
            target,
            cancel,
        }
    }

    /// Cancels any traversal in flight so its outcome will be discarded.
    pub(crate) fn abandon(&mut self) {
        if let Some(previous) = self.in_flight.take() {
            previous.cancel();
            self.generation += 1;
        }
    }

    /// Returns true if `ticket` is the newest one issued.
    pub(crate) fn accepts(&self, ticket: ScanTicket) -> bool {
        ticket.0 == self.generation
    }

    /// Marks the current traversal as finished.
    pub(crate) fn settle(&mut self, ticket: ScanTicket) {
        if self.accepts(ticket) {
            self.in_flight = None;
        }
    }

    /// Returns true while a traversal is outstanding.
    pub(crate) fn is_pending(&self) -> bool {
        self.in_flight.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn newer_ticket_supersedes_older() {
        let mut tracker = ScanTracker::default();
        let first = tracker.issue(PathBuf::from("/a"), None);
        let second = tracker.issue(PathBuf::from("/b"), None);

        assert!(!tracker.accepts(first.ticket()));
        assert!(tracker.accepts(second.ticket()));
    }

    #[test]
    fn issuing_cancels_the_previous_token() {
        let mut tracker = ScanTracker::default();
        let first = tracker.issue(PathBuf::from("/a"), None);
        let _second = tracker.issue(PathBuf::from("/b"), None);

        assert!(first.cancel.is_cancelled());
    }

    #[test]
    fn settle_clears_pending_only_for_current_ticket() {
        let mut tracker = ScanTracker::default();
        let first = tracker.issue(PathBuf::from("/a"), None);
        let second = tracker.issue(PathBuf::from("/b"), None);

        tracker.settle(first.ticket());
        assert!(tracker.is_pending());

        tracker.settle(second.ticket());
        assert!(!tracker.is_pending());
    }

    #[test]
    fn abandon_makes_pending_ticket_stale() {
        let mut tracker = ScanTracker::default();
        let request = tracker.issue(PathBuf::from("/a"), None);

        tracker.abandon();

        assert!(!tracker.accepts(request.ticket()));
        assert!(request.cancel.is_cancelled());
        assert!(!tracker.is_pending());
    }

    #[test]
    fn request_exposes_folder_and_target() {
        let mut tracker = ScanTracker::default();
        let request = tracker.issue(PathBuf::from("/a"), Some(PathBuf::from("/a/x.png")));
        assert_eq!(request.folder(), Path::new("/a"));
        assert_eq!(request.target(), Some(Path::new("/a/x.png")));
    }
}
