//! The restriction policy applied to every document in a run.
//!
//! A [`Policy`] is loaded once and then only read. It names the control codes
//! and banner terms that make a marking forbidden, ranks classification
//! symbols, and lists the privileged releasability groups used when comparing
//! REL markings.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};
#[cfg(feature = "yaml")]
use thiserror::Error;

/// Classification that is never allowed to surface in output.
pub const TOP_CLASSIFICATION: &str = "TS";

/// Errors produced while loading a policy from configuration text.
#[cfg(feature = "yaml")]
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum PolicyError {
    #[error("failed to parse policy: {0}")]
    Parse(#[from] serde_yaml::Error),
}

/// Restriction policy.
///
/// Field names on the wire follow the `restrictions` block of the pipeline
/// configuration file: `forbidden_sci`, `forbidden_controls`,
/// `forbidden_terms`, `classifications`, `special_groups`. Every field
/// defaults to empty.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Policy {
    forbidden_sci: BTreeSet<String>,
    forbidden_controls: BTreeSet<String>,
    forbidden_terms: BTreeSet<String>,
    #[serde(rename = "classifications")]
    classification_ordinals: BTreeMap<String, i64>,
    special_groups: BTreeSet<String>,
}

#[cfg(feature = "yaml")]
#[derive(Deserialize)]
struct PolicyFile {
    restrictions: Policy,
}

impl Policy {
    /// Creates an empty policy: nothing forbidden beyond the top
    /// classification, every symbol ranked 0, no special groups.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_forbidden_sci<I, S>(mut self, controls: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.forbidden_sci.extend(controls.into_iter().map(Into::into));
        self
    }

    #[must_use]
    pub fn with_forbidden_controls<I, S>(mut self, controls: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.forbidden_controls
            .extend(controls.into_iter().map(Into::into));
        self
    }

    /// Adds banner terms; matching is case-insensitive.
    #[must_use]
    pub fn with_forbidden_terms<I, S>(mut self, terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.forbidden_terms.extend(terms.into_iter().map(Into::into));
        self
    }

    /// Ranks a single classification symbol. Higher is more restrictive.
    #[must_use]
    pub fn with_classification(mut self, symbol: impl Into<String>, ordinal: i64) -> Self {
        self.classification_ordinals.insert(symbol.into(), ordinal);
        self
    }

    /// Ranks symbols in the order given, starting at 0.
    ///
    /// `["U", "C", "S", "TS"]` ranks `U` = 0 through `TS` = 3.
    #[must_use]
    pub fn with_classifications<I, S>(mut self, symbols: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for (ordinal, symbol) in (0_i64..).zip(symbols) {
            self.classification_ordinals.insert(symbol.into(), ordinal);
        }
        self
    }

    #[must_use]
    pub fn with_special_groups<I, S>(mut self, groups: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.special_groups.extend(groups.into_iter().map(Into::into));
        self
    }

    #[must_use]
    pub fn forbidden_sci(&self) -> &BTreeSet<String> {
        &self.forbidden_sci
    }

    #[must_use]
    pub fn forbidden_controls(&self) -> &BTreeSet<String> {
        &self.forbidden_controls
    }

    #[must_use]
    pub fn forbidden_terms(&self) -> &BTreeSet<String> {
        &self.forbidden_terms
    }

    #[must_use]
    pub fn special_groups(&self) -> &BTreeSet<String> {
        &self.special_groups
    }

    /// Rank of a classification symbol; unknown symbols rank 0.
    #[must_use]
    pub fn ordinal(&self, classification: &str) -> i64 {
        self.classification_ordinals
            .get(classification)
            .copied()
            .unwrap_or(0)
    }

    /// Parses a policy from a YAML configuration file body.
    ///
    /// The policy is read from the top-level `restrictions` mapping:
    ///
    /// ```yaml
    /// restrictions:
    ///   forbidden_sci: [HCS]
    ///   forbidden_controls: [ORCON]
    ///   forbidden_terms: [NOCONTRACT]
    ///   classifications: { U: 0, C: 1, S: 2, TS: 3 }
    ///   special_groups: [FVEY]
    /// ```
    #[cfg(feature = "yaml")]
    pub fn from_yaml_str(text: &str) -> Result<Self, PolicyError> {
        let file: PolicyFile = serde_yaml::from_str(text)?;
        Ok(file.restrictions)
    }

    /// Reads a policy from YAML; see [`Policy::from_yaml_str`].
    #[cfg(feature = "yaml")]
    pub fn from_yaml_reader<R: std::io::Read>(reader: R) -> Result<Self, PolicyError> {
        let file: PolicyFile = serde_yaml::from_reader(reader)?;
        Ok(file.restrictions)
    }
}
