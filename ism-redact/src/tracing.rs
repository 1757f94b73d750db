//! Adapter for reporting redaction events through `tracing`.
//!
//! [`TracingObserver`] turns observer callbacks into `tracing` events under
//! the `ism_redact` target. Pruned subtrees and rejected candidates are logged
//! at `debug`; empty markings and documents without any admissible marking are
//! logged at `warn`, since both usually point at a problem upstream.
//!
//! # Example
//!
//! ```ignore
//! use ism_redact::{Redactor, tracing::TracingObserver};
//!
//! let redactor = Redactor::new(&policy).with_observer(TracingObserver::new());
//! let output = redactor.redact(doc)?;
//! ```
//!
//! It does not install or configure a subscriber.

use crate::{
    document::NodePath, marking::Marking, policy::ForbiddenReason,
    redaction::RedactionObserver,
};

/// Observer that emits `tracing` events.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingObserver {
    record_id: Option<u64>,
}

impl TracingObserver {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Attaches a record identifier to every event, so events from one
    /// document can be correlated.
    #[must_use]
    pub fn with_record_id(mut self, record_id: u64) -> Self {
        self.record_id = Some(record_id);
        self
    }
}

impl RedactionObserver for TracingObserver {
    fn empty_marking(&self, path: &NodePath) {
        tracing::warn!(
            target: "ism_redact",
            record_id = self.record_id,
            path = %path,
            "marking is empty, cannot determine classification"
        );
    }

    fn candidate_rejected(&self, path: &NodePath, marking: &Marking, reason: &ForbiddenReason) {
        tracing::debug!(
            target: "ism_redact",
            record_id = self.record_id,
            path = %path,
            classification = marking.classification(),
            reason = %reason,
            "marking rejected as overall classification"
        );
    }

    fn node_pruned(&self, path: &NodePath, marking: &Marking, reason: &ForbiddenReason) {
        tracing::debug!(
            target: "ism_redact",
            record_id = self.record_id,
            path = %path,
            classification = marking.classification(),
            reason = %reason,
            "removing node due to forbidden marking"
        );
    }

    fn no_admissible_marking(&self) {
        tracing::warn!(
            target: "ism_redact",
            record_id = self.record_id,
            "no admissible marking found, dropping document"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_id_is_carried() {
        let observer = TracingObserver::new().with_record_id(42);
        assert_eq!(observer.record_id, Some(42));
    }

    #[test]
    fn events_without_subscriber_do_not_panic() {
        let observer = TracingObserver::new();
        let marking = Marking::new("TS");
        let path = NodePath::root().join_key("location");
        observer.empty_marking(&path);
        observer.candidate_rejected(&path, &marking, &ForbiddenReason::TopClassification);
        observer.node_pruned(&path, &marking, &ForbiddenReason::TopClassification);
        observer.no_admissible_marking();
    }
}
