//! Locating the overall marking and pruning forbidden subtrees.
//!
//! - **`redactor`**: [`Redactor`], its configuration, and the `redact` entrypoints
//! - **`locate`**: the most-restrictive-marking search
//! - **`prune`**: removal of subtrees whose marking is forbidden
//! - **`observer`**: [`RedactionObserver`] hooks for logging and alerting
//! - **`error`**: [`RedactError`]
//!
//! `redact(doc) = stamp(prune(doc), locate(doc))`, or nothing when `locate`
//! finds no admissible marking.

mod error;
mod locate;
pub(crate) mod observer;
mod prune;
mod redactor;

pub use error::RedactError;
pub use observer::{NoopObserver, RedactionObserver};
pub use redactor::{
    DEFAULT_MARKING_KEY, DEFAULT_STAMP_KEY, Redactor, locate_most_restrictive, redact,
};
