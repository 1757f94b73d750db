//! Hooks for reporting what a redaction pass did.
//!
//! The engine does no logging of its own. Callers that want to log, count, or
//! alert on pruned subtrees and rejected documents pass a
//! [`RedactionObserver`] to [`crate::Redactor::with_observer`]. Adapters for
//! `tracing` and `slog` live behind their feature flags.

use crate::{document::NodePath, marking::Marking, policy::ForbiddenReason};

/// Receives events from a redaction pass.
///
/// Every method defaults to doing nothing. Paths are JSON Pointers to the
/// mapping node that carries the marking.
pub trait RedactionObserver {
    /// A node carries the marking key, but its value is absent or empty.
    fn empty_marking(&self, _path: &NodePath) {}

    /// A forbidden marking was skipped while searching for the overall marking.
    fn candidate_rejected(&self, _path: &NodePath, _marking: &Marking, _reason: &ForbiddenReason) {
    }

    /// A subtree was removed because its marking is forbidden.
    fn node_pruned(&self, _path: &NodePath, _marking: &Marking, _reason: &ForbiddenReason) {}

    /// No admissible marking exists; the document produces no output.
    fn no_admissible_marking(&self) {}
}

/// Observer that ignores every event.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopObserver;

impl RedactionObserver for NoopObserver {}

impl<T: RedactionObserver + ?Sized> RedactionObserver for &T {
    fn empty_marking(&self, path: &NodePath) {
        (**self).empty_marking(path);
    }

    fn candidate_rejected(&self, path: &NodePath, marking: &Marking, reason: &ForbiddenReason) {
        (**self).candidate_rejected(path, marking, reason);
    }

    fn node_pruned(&self, path: &NodePath, marking: &Marking, reason: &ForbiddenReason) {
        (**self).node_pruned(path, marking, reason);
    }

    fn no_admissible_marking(&self) {
        (**self).no_admissible_marking();
    }
}

#[cfg(test)]
pub(crate) mod recording {
    //! Observer that records events as strings, for tests.

    use std::cell::RefCell;

    use super::*;

    #[derive(Default)]
    pub(crate) struct RecordingObserver {
        pub(crate) events: RefCell<Vec<String>>,
    }

    impl RedactionObserver for RecordingObserver {
        fn empty_marking(&self, path: &NodePath) {
            self.events.borrow_mut().push(format!("empty {path}"));
        }

        fn candidate_rejected(&self, path: &NodePath, _marking: &Marking, reason: &ForbiddenReason) {
            self.events
                .borrow_mut()
                .push(format!("rejected {path}: {reason}"));
        }

        fn node_pruned(&self, path: &NodePath, _marking: &Marking, reason: &ForbiddenReason) {
            self.events
                .borrow_mut()
                .push(format!("pruned {path}: {reason}"));
        }

        fn no_admissible_marking(&self) {
            self.events.borrow_mut().push("none".to_string());
        }
    }
}
