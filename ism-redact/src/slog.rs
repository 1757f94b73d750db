//! Adapters for reporting markings and redaction events through `slog`.
//!
//! This module provides:
//! - a `slog::Value` implementation for [`Marking`], serialized as nested
//!   structured data through `slog`'s nested-values support, and
//! - [`SlogObserver`], which forwards [`RedactionObserver`] callbacks to a
//!   `slog::Logger`.
//!
//! It does not configure drains or decide where records go.

use slog::{Key, Logger, Record, Result as SlogResult, Serializer, Value as SlogValue};

use crate::{
    document::NodePath, marking::Marking, policy::ForbiddenReason,
    redaction::RedactionObserver,
};

impl SlogValue for Marking {
    fn serialize(
        &self,
        record: &Record<'_>,
        key: Key,
        serializer: &mut dyn Serializer,
    ) -> SlogResult {
        let nested = slog::Serde(self.clone());
        SlogValue::serialize(&nested, record, key, serializer)
    }
}

impl SlogValue for NodePath {
    fn serialize(
        &self,
        _record: &Record<'_>,
        key: Key,
        serializer: &mut dyn Serializer,
    ) -> SlogResult {
        serializer.emit_arguments(key, &format_args!("{self}"))
    }
}

/// Observer that logs redaction events to a `slog::Logger`.
///
/// Pruned subtrees and rejected candidates are logged at `debug`, empty
/// markings and rejected documents at `warning`.
#[derive(Clone, Debug)]
pub struct SlogObserver {
    logger: Logger,
}

impl SlogObserver {
    #[must_use]
    pub fn new(logger: Logger) -> Self {
        Self { logger }
    }
}

impl RedactionObserver for SlogObserver {
    fn empty_marking(&self, path: &NodePath) {
        slog::warn!(self.logger, "marking is empty, cannot determine classification"; "path" => path);
    }

    fn candidate_rejected(&self, path: &NodePath, marking: &Marking, reason: &ForbiddenReason) {
        slog::debug!(
            self.logger,
            "marking rejected as overall classification";
            "path" => path,
            "reason" => %reason,
            "marking" => marking
        );
    }

    fn node_pruned(&self, path: &NodePath, marking: &Marking, reason: &ForbiddenReason) {
        slog::debug!(
            self.logger,
            "removing node due to forbidden marking";
            "path" => path,
            "reason" => %reason,
            "marking" => marking
        );
    }

    fn no_admissible_marking(&self) {
        slog::warn!(self.logger, "no admissible marking found, dropping document");
    }
}
