//! Policy-driven redaction of documents carrying embedded security markings.
//!
//! Documents arrive as trees of mappings and sequences in which any mapping
//! may carry a marking: a classification, control codes, and a releasability
//! list. This crate separates:
//! - **Policy**: which markings are forbidden outright, how classifications
//!   rank, and which releasability groups are privileged.
//! - **Redaction**: finding the most restrictive admissible marking in a
//!   document, removing every subtree whose marking is forbidden, and stamping
//!   the result with the marking found.
//!
//! What this crate does:
//! - defines [`Marking`], [`Policy`] and the [`Node`] document tree
//! - provides [`Redactor`] and the [`redact`] / [`locate_most_restrictive`]
//!   entrypoints
//! - provides integrations behind feature flags (`json`, `yaml`, `tracing`,
//!   `slog`)
//!
//! What it does not do:
//! - extract markings from raw upstream records
//! - open configuration files or write output documents; YAML policy text is
//!   parsed with the `yaml` feature, but I/O stays with the caller
//!
//! ```rust
//! use ism_redact::{Node, Policy, redact};
//!
//! let policy = Policy::new()
//!     .with_classifications(["U", "C", "S", "TS"])
//!     .with_forbidden_sci(["HCS"]);
//!
//! let doc = Node::mapping([
//!     ("name", Node::mapping([
//!         ("value", Node::from("alpha")),
//!         ("ism", Node::mapping([("classification", "S")])),
//!     ])),
//!     ("source", Node::mapping([
//!         ("value", Node::from("beta")),
//!         ("ism", Node::mapping([("classification", "TS")])),
//!     ])),
//! ]);
//!
//! let redacted = redact(doc, &policy).unwrap().unwrap();
//! assert!(redacted.get("source").unwrap().is_absent());
//! let stamp = redacted.get("overallClassification").unwrap();
//! assert_eq!(stamp.get("classification").and_then(Node::as_str), Some("S"));
//! ```

// <https://doc.rust-lang.org/rustc/lints/listing/allowed-by-default.html>
#![warn(
    anonymous_parameters,
    bare_trait_objects,
    elided_lifetimes_in_paths,
    missing_copy_implementations,
    rust_2018_idioms,
    trivial_casts,
    trivial_numeric_casts,
    unreachable_pub,
    unsafe_code,
    unused_extern_crates,
    unused_import_braces
)]
// <https://rust-lang.github.io/rust-clippy/stable>
#![warn(
    clippy::all,
    clippy::cargo,
    clippy::dbg_macro,
    clippy::float_cmp_const,
    clippy::get_unwrap,
    clippy::mem_forget,
    clippy::nursery,
    clippy::pedantic,
    clippy::todo,
    clippy::unwrap_used,
    clippy::uninlined_format_args
)]
// Allow some clippy lints
#![allow(
    clippy::doc_markdown,
    clippy::module_name_repetitions,
    clippy::multiple_crate_versions,
    clippy::must_use_candidate,
    clippy::needless_pass_by_value,
    clippy::use_self,
    clippy::cargo_common_metadata,
    clippy::missing_errors_doc,
    clippy::missing_const_for_fn,
    clippy::redundant_pub_crate,
    clippy::option_if_let_else,
    clippy::collapsible_if
)]
// Allow some lints while testing
#![cfg_attr(test, allow(clippy::non_ascii_literal, clippy::unwrap_used))]

// Module declarations
pub mod document;
pub mod marking;
pub mod policy;
mod redaction;
#[cfg(feature = "slog")]
pub mod slog;
#[cfg(feature = "tracing")]
pub mod tracing;

// Re-exports from document module
pub use document::{Mapping, Node, NodePath, PathSegment, Scalar};
// Re-exports from marking module
pub use marking::{Marking, UNCLASSIFIED};
// Re-exports from policy module
pub use policy::{
    ForbiddenReason, Policy, TOP_CLASSIFICATION, Tier, Verdict, is_forbidden, is_more_restrictive,
};
#[cfg(feature = "yaml")]
pub use policy::PolicyError;
// Re-exports from redaction module
pub use redaction::{
    DEFAULT_MARKING_KEY, DEFAULT_STAMP_KEY, NoopObserver, RedactError, RedactionObserver,
    Redactor, locate_most_restrictive, redact,
};
