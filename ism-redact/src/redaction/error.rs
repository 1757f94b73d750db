//! Hard failures of the redaction engine.
//!
//! Only one condition stops a redaction pass: a marking that cannot be read
//! with confidence. Missing markings, unknown classifications, and documents
//! without any admissible marking are normal outcomes and never appear here.

use thiserror::Error;

use crate::document::NodePath;

/// Errors returned while locating or pruning markings.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum RedactError {
    /// A marking association exists but is not shaped like a marking.
    ///
    /// `path` is the JSON Pointer of the marking value itself.
    #[error("malformed marking at `{path}`: {reason}")]
    MalformedMarking { path: String, reason: String },
}

impl RedactError {
    pub(crate) fn malformed(path: &NodePath, reason: impl Into<String>) -> Self {
        Self::MalformedMarking {
            path: path.to_string(),
            reason: reason.into(),
        }
    }

    /// JSON Pointer of the node that caused the error.
    #[must_use]
    pub fn path(&self) -> &str {
        match self {
            Self::MalformedMarking { path, .. } => path,
        }
    }
}
