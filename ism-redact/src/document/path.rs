//! Locations inside a document tree.

use std::fmt;

/// One step from a parent node to a child.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum PathSegment {
    Key(String),
    Index(usize),
}

/// The location of a node, rendered as an RFC 6901 JSON Pointer.
///
/// The root is the empty pointer `""`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct NodePath {
    segments: Vec<PathSegment>,
}

impl NodePath {
    #[must_use]
    pub fn root() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, segment: PathSegment) {
        self.segments.push(segment);
    }

    pub(crate) fn pop(&mut self) {
        self.segments.pop();
    }

    pub(crate) fn truncate(&mut self, depth: usize) {
        self.segments.truncate(depth);
    }

    /// Returns a copy of this path extended by `key`.
    #[must_use]
    pub fn join_key(&self, key: &str) -> Self {
        let mut path = self.clone();
        path.push(PathSegment::Key(key.to_string()));
        path
    }
}

impl fmt::Display for NodePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for segment in &self.segments {
            f.write_str("/")?;
            match segment {
                PathSegment::Key(key) => {
                    for ch in key.chars() {
                        match ch {
                            '~' => f.write_str("~0")?,
                            '/' => f.write_str("~1")?,
                            other => fmt::Write::write_char(f, other)?,
                        }
                    }
                }
                PathSegment::Index(index) => write!(f, "{index}")?,
            }
        }
        Ok(())
    }
}
