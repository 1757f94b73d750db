//! The forbidden-marking test.
//!
//! A marking is forbidden when it can never appear in output: it is at the top
//! classification, it carries a forbidden SCI or dissemination control, or its
//! banner mentions a forbidden term. Rules are checked in that order and the
//! first match is reported.

use std::fmt;

use super::config::{Policy, TOP_CLASSIFICATION};
use crate::marking::Marking;

/// The rule that made a marking forbidden.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ForbiddenReason {
    TopClassification,
    SciControl(String),
    DisseminationControl(String),
    Term(String),
}

impl fmt::Display for ForbiddenReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TopClassification => write!(f, "classification {TOP_CLASSIFICATION}"),
            Self::SciControl(control) => write!(f, "forbidden SCI control {control}"),
            Self::DisseminationControl(control) => {
                write!(f, "forbidden dissemination control {control}")
            }
            Self::Term(term) => write!(f, "forbidden banner term {term}"),
        }
    }
}

impl Policy {
    /// Returns the first rule the marking violates, or `None` if it is admissible.
    ///
    /// Control sets are scanned in sorted order, so the reported control is
    /// the same on every run.
    #[must_use]
    pub fn forbidden_reason(&self, marking: &Marking) -> Option<ForbiddenReason> {
        if marking.classification() == Some(TOP_CLASSIFICATION) {
            return Some(ForbiddenReason::TopClassification);
        }

        if let Some(control) = marking
            .sci_controls()
            .intersection(self.forbidden_sci())
            .next()
        {
            return Some(ForbiddenReason::SciControl(control.clone()));
        }

        if let Some(control) = marking
            .dissemination_controls()
            .intersection(self.forbidden_controls())
            .next()
        {
            return Some(ForbiddenReason::DisseminationControl(control.clone()));
        }

        let banner = marking.banner().to_uppercase();
        self.forbidden_terms()
            .iter()
            .find(|term| banner.contains(&term.to_uppercase()))
            .map(|term| ForbiddenReason::Term(term.clone()))
    }

    /// Whether the marking must never appear in output.
    #[must_use]
    pub fn is_forbidden(&self, marking: &Marking) -> bool {
        self.forbidden_reason(marking).is_some()
    }
}

/// Forbidden test over an optional marking.
///
/// An absent marking is not forbidden. It is not a candidate either; callers
/// must keep the two cases apart.
#[must_use]
pub fn is_forbidden(marking: Option<&Marking>, policy: &Policy) -> bool {
    marking.is_some_and(|marking| policy.is_forbidden(marking))
}
