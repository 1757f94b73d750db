//! The redaction entrypoint and its configuration.

use std::borrow::Cow;

use super::{error::RedactError, observer::NoopObserver, observer::RedactionObserver};
use crate::{document::Node, marking::Marking, policy::Policy};

/// Key under which mapping nodes carry their raw marking.
pub const DEFAULT_MARKING_KEY: &str = "ism";

/// Key of the top-level field stamped with the document's overall marking.
pub const DEFAULT_STAMP_KEY: &str = "overallClassification";

/// Applies a [`Policy`] to documents.
///
/// A `Redactor` borrows the policy and holds no per-document state, so one
/// instance can process any number of documents, and the policy can be shared
/// by redactors on other threads.
///
/// ```rust
/// use ism_redact::{Node, Policy, Redactor};
///
/// let policy = Policy::new().with_classifications(["U", "C", "S", "TS"]);
/// let doc = Node::mapping([(
///     "ism",
///     Node::mapping([("classification", "C")]),
/// )]);
///
/// let redacted = Redactor::new(&policy).redact(doc).unwrap().unwrap();
/// let stamp = redacted.get("overallClassification").unwrap();
/// assert_eq!(stamp.get("classification").and_then(Node::as_str), Some("C"));
/// ```
#[derive(Clone, Debug)]
pub struct Redactor<'p, O = NoopObserver> {
    pub(super) policy: &'p Policy,
    pub(super) marking_key: Cow<'static, str>,
    pub(super) stamp_key: Cow<'static, str>,
    pub(super) observer: O,
}

impl<'p> Redactor<'p> {
    /// Creates a redactor with the default keys and no observer.
    #[must_use]
    pub fn new(policy: &'p Policy) -> Self {
        Self {
            policy,
            marking_key: Cow::Borrowed(DEFAULT_MARKING_KEY),
            stamp_key: Cow::Borrowed(DEFAULT_STAMP_KEY),
            observer: NoopObserver,
        }
    }
}

impl<'p, O> Redactor<'p, O> {
    /// Replaces the observer that receives pruning and rejection events.
    pub fn with_observer<P: RedactionObserver>(self, observer: P) -> Redactor<'p, P> {
        Redactor {
            policy: self.policy,
            marking_key: self.marking_key,
            stamp_key: self.stamp_key,
            observer,
        }
    }

    /// Uses a different key for embedded markings.
    #[must_use]
    pub fn with_marking_key(mut self, key: impl Into<Cow<'static, str>>) -> Self {
        self.marking_key = key.into();
        self
    }

    /// Uses a different key for the overall classification stamp.
    #[must_use]
    pub fn with_stamp_key(mut self, key: impl Into<Cow<'static, str>>) -> Self {
        self.stamp_key = key.into();
        self
    }

    #[must_use]
    pub fn policy(&self) -> &'p Policy {
        self.policy
    }

    #[must_use]
    pub fn marking_key(&self) -> &str {
        &self.marking_key
    }

    #[must_use]
    pub fn stamp_key(&self) -> &str {
        &self.stamp_key
    }
}

impl<O: RedactionObserver> Redactor<'_, O> {
    /// Redacts a document.
    ///
    /// Finds the most restrictive admissible marking, prunes every subtree
    /// whose own marking is forbidden, and stamps the result with the marking
    /// found. Returns `Ok(None)` when the document has no admissible marking;
    /// that is an expected outcome, reported to the observer, not an error.
    ///
    /// The stamp is only attached when the pruned root is still a mapping. A
    /// root that itself carries a forbidden marking comes back as
    /// [`Node::Absent`].
    ///
    /// The overall marking is located before pruning, so admissible markings
    /// nested under a forbidden node still count toward the stamp. Redacting
    /// the output again is therefore not idempotent for such documents: the
    /// nested markings are gone on the second pass and the stamp can drop to
    /// a lower classification. Documents whose forbidden nodes carry no
    /// marked descendants produce the same output on every pass.
    ///
    /// # Errors
    ///
    /// Returns [`RedactError::MalformedMarking`] if any marking in the
    /// document cannot be normalized.
    pub fn redact(&self, doc: Node) -> Result<Option<Node>, RedactError> {
        let Some(overall) = self.locate(&doc)? else {
            self.observer.no_admissible_marking();
            return Ok(None);
        };

        let mut redacted = self.prune(doc)?;
        if let Node::Mapping(map) = &mut redacted {
            map.insert(self.stamp_key.to_string(), overall.to_node());
        }
        Ok(Some(redacted))
    }

    /// Redacts a JSON document; see [`Redactor::redact`].
    #[cfg(feature = "json")]
    pub fn redact_json(
        &self,
        doc: serde_json::Value,
    ) -> Result<Option<serde_json::Value>, RedactError> {
        self.redact(Node::from(doc))
            .map(|redacted| redacted.map(serde_json::Value::from))
    }
}

/// Finds the most restrictive admissible marking in `doc`, using default keys.
///
/// # Errors
///
/// Returns [`RedactError::MalformedMarking`] if a marking cannot be normalized.
pub fn locate_most_restrictive(doc: &Node, policy: &Policy) -> Result<Option<Marking>, RedactError> {
    Redactor::new(policy).locate(doc)
}

/// Redacts `doc` under `policy`, using default keys and no observer.
///
/// # Errors
///
/// Returns [`RedactError::MalformedMarking`] if a marking cannot be normalized.
pub fn redact(doc: Node, policy: &Policy) -> Result<Option<Node>, RedactError> {
    Redactor::new(policy).redact(doc)
}
