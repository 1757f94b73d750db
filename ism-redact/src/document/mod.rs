//! Document trees handed to the redaction engine.
//!
//! - **`node`**: The tagged [`Node`] value (`Mapping | Sequence | Scalar | Absent`)
//! - **`path`**: [`NodePath`], the JSON-Pointer location of a node
//! - **`json`**: conversions to and from `serde_json::Value` (feature `json`)
//!
//! A document is built by an upstream mapping stage, consumed once by
//! [`crate::Redactor`], and handed on to serialization. Nothing here is
//! retained between calls.

#[cfg(feature = "json")]
mod json;
mod node;
mod path;

pub use node::{Mapping, Node, Scalar};
pub use path::{NodePath, PathSegment};
