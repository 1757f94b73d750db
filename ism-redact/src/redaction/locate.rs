//! Search for the single marking that labels a whole document.
//!
//! Every mapping node carrying a marking is a candidate unless the marking is
//! absent, empty, or forbidden. The most restrictive remaining candidate wins.
//! The walk is depth-first pre-order with mapping keys in sorted order; a
//! later candidate only replaces the current best when it is strictly more
//! restrictive, so among incomparable candidates the first one visited wins.
//!
//! Top-classification markings are never candidates: the forbidden test
//! already excludes them, so there is no early exit for them here.

use super::{error::RedactError, observer::RedactionObserver, redactor::Redactor};
use crate::{
    document::{Node, NodePath, PathSegment},
    marking::Marking,
};

impl<O: RedactionObserver> Redactor<'_, O> {
    /// Returns the most restrictive admissible marking anywhere in `doc`.
    ///
    /// Marking values themselves are not searched for nested markings.
    ///
    /// # Errors
    ///
    /// Returns [`RedactError::MalformedMarking`] if a marking cannot be
    /// normalized.
    pub fn locate(&self, doc: &Node) -> Result<Option<Marking>, RedactError> {
        let key = self.marking_key();
        let mut best: Option<Marking> = None;
        let mut path = NodePath::root();
        let mut stack: Vec<(&Node, usize, Option<PathSegment>)> = vec![(doc, 0, None)];

        while let Some((node, depth, segment)) = stack.pop() {
            // Everything popped since this node's parent lives under the
            // parent, so truncating restores the parent's path.
            match segment {
                Some(segment) => {
                    path.truncate(depth - 1);
                    path.push(segment);
                }
                None => path.truncate(0),
            }

            match node {
                Node::Mapping(map) => {
                    if let Some(raw) = map.get(key) {
                        match Marking::from_node(raw, &path.join_key(key))? {
                            None => self.observer.empty_marking(&path),
                            Some(marking) => match self.policy.forbidden_reason(&marking) {
                                Some(reason) => {
                                    self.observer.candidate_rejected(&path, &marking, &reason);
                                }
                                None => {
                                    if best.as_ref().is_none_or(|current| {
                                        self.policy.is_more_restrictive(&marking, current)
                                    }) {
                                        best = Some(marking);
                                    }
                                }
                            },
                        }
                    }

                    for (child_key, child) in map.iter().rev() {
                        if child_key != key {
                            stack.push((
                                child,
                                depth + 1,
                                Some(PathSegment::Key(child_key.clone())),
                            ));
                        }
                    }
                }
                Node::Sequence(items) => {
                    for (index, child) in items.iter().enumerate().rev() {
                        stack.push((child, depth + 1, Some(PathSegment::Index(index))));
                    }
                }
                Node::Scalar(_) | Node::Absent => {}
            }
        }

        Ok(best)
    }
}
