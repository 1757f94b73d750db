//! Removal of subtrees whose own marking is forbidden.
//!
//! A mapping node with a forbidden marking is replaced by [`Node::Absent`] as
//! a whole, keys and all. Everything else is rebuilt from its pruned children;
//! scalars and marking values pass through untouched.

use super::{error::RedactError, observer::RedactionObserver, redactor::Redactor};
use crate::{
    document::{Mapping, Node, NodePath, PathSegment},
    marking::Marking,
};

impl<O: RedactionObserver> Redactor<'_, O> {
    /// Prunes every subtree whose marking is forbidden, without stamping.
    ///
    /// # Errors
    ///
    /// Returns [`RedactError::MalformedMarking`] if a marking cannot be
    /// normalized.
    pub fn prune(&self, doc: Node) -> Result<Node, RedactError> {
        let mut path = NodePath::root();
        self.prune_node(doc, &mut path)
    }

    fn prune_node(&self, node: Node, path: &mut NodePath) -> Result<Node, RedactError> {
        match node {
            Node::Mapping(map) => self.prune_mapping(map, path),
            Node::Sequence(items) => {
                let mut pruned = Vec::with_capacity(items.len());
                for (index, item) in items.into_iter().enumerate() {
                    path.push(PathSegment::Index(index));
                    pruned.push(self.prune_node(item, path)?);
                    path.pop();
                }
                Ok(Node::Sequence(pruned))
            }
            leaf @ (Node::Scalar(_) | Node::Absent) => Ok(leaf),
        }
    }

    fn prune_mapping(&self, map: Mapping, path: &mut NodePath) -> Result<Node, RedactError> {
        let key = self.marking_key();

        if let Some(raw) = map.get(key) {
            let marking = Marking::from_node(raw, &path.join_key(key))?;
            if let Some(marking) = marking {
                if let Some(reason) = self.policy.forbidden_reason(&marking) {
                    self.observer.node_pruned(path, &marking, &reason);
                    return Ok(Node::Absent);
                }
            }
        }

        let mut pruned = Mapping::new();
        for (child_key, child) in map {
            if child_key == key {
                pruned.insert(child_key, child);
                continue;
            }
            path.push(PathSegment::Key(child_key.clone()));
            let child = self.prune_node(child, path)?;
            path.pop();
            pruned.insert(child_key, child);
        }
        Ok(Node::Mapping(pruned))
    }
}
