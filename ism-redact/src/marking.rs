//! Normalized security markings.
//!
//! A [`Marking`] is the classification block attached to one fragment of a
//! document: a classification symbol, SCI control codes, dissemination
//! controls, a releasability list, and the free-text banner. Markings are
//! immutable once built; the engine only ever reads them.
//!
//! Documents carry markings as raw mapping nodes. [`Marking::from_node`]
//! normalizes such a node, degrading missing fields to their emptiest
//! interpretation and rejecting anything that is present but mis-shaped.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::{
    document::{Mapping, Node, NodePath, Scalar},
    redaction::RedactError,
};

/// Classification assumed when a marking does not state one.
pub const UNCLASSIFIED: &str = "U";

const CLASSIFICATION: &str = "classification";
const SCI_CONTROLS: &str = "sciControls";
const DISSEMINATION_CONTROLS: &str = "disseminationControls";
const RELEASABLE_TO: &str = "releasableTo";
// Spelling emitted by the upstream attribute mapping stage.
const RELEASABLE_TO_ALIAS: &str = "releaseableTo";
const BANNER: &str = "banner";
const OWNER_PRODUCER: &str = "ownerProducer";

/// A security marking attached to a document fragment.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Marking {
    #[serde(skip_serializing_if = "Option::is_none")]
    classification: Option<String>,
    sci_controls: BTreeSet<String>,
    dissemination_controls: BTreeSet<String>,
    #[serde(alias = "releaseableTo")]
    releasable_to: BTreeSet<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    banner: Option<String>,
    #[serde(skip_serializing_if = "BTreeSet::is_empty")]
    owner_producer: BTreeSet<String>,
}

impl Marking {
    /// Creates a marking with the given classification and no controls.
    pub fn new(classification: impl Into<String>) -> Self {
        Self {
            classification: Some(classification.into()),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_sci_controls<I, S>(mut self, controls: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.sci_controls = controls.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_dissemination_controls<I, S>(mut self, controls: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.dissemination_controls = controls.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_releasable_to<I, S>(mut self, entities: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.releasable_to = entities.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_banner(mut self, banner: impl Into<String>) -> Self {
        self.banner = Some(banner.into());
        self
    }

    #[must_use]
    pub fn with_owner_producer<I, S>(mut self, owners: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.owner_producer = owners.into_iter().map(Into::into).collect();
        self
    }

    /// The classification symbol exactly as stated, if any.
    #[must_use]
    pub fn classification(&self) -> Option<&str> {
        self.classification.as_deref()
    }

    /// The classification used for ranking: the stated one, or [`UNCLASSIFIED`].
    #[must_use]
    pub fn effective_classification(&self) -> &str {
        self.classification.as_deref().unwrap_or(UNCLASSIFIED)
    }

    #[must_use]
    pub fn sci_controls(&self) -> &BTreeSet<String> {
        &self.sci_controls
    }

    #[must_use]
    pub fn dissemination_controls(&self) -> &BTreeSet<String> {
        &self.dissemination_controls
    }

    #[must_use]
    pub fn releasable_to(&self) -> &BTreeSet<String> {
        &self.releasable_to
    }

    /// The banner text; empty when the marking has none.
    #[must_use]
    pub fn banner(&self) -> &str {
        self.banner.as_deref().unwrap_or_default()
    }

    #[must_use]
    pub fn owner_producer(&self) -> &BTreeSet<String> {
        &self.owner_producer
    }

    /// Normalizes a raw marking node found at `path`.
    ///
    /// Returns `Ok(None)` for an absent or empty mapping: such a node is
    /// neither a candidate nor forbidden. Fields that are missing or `null`
    /// fall back to empty values; unknown keys are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`RedactError::MalformedMarking`] when the node is not a
    /// mapping, or when a known field has the wrong shape (a control list
    /// that is not a sequence of strings, a banner that is not a string).
    pub fn from_node(node: &Node, path: &NodePath) -> Result<Option<Self>, RedactError> {
        match node {
            Node::Absent => Ok(None),
            Node::Mapping(map) if map.is_empty() => Ok(None),
            Node::Mapping(map) => Self::from_mapping(map, path).map(Some),
            other => Err(RedactError::malformed(
                path,
                format!("expected a mapping, found {}", other.kind()),
            )),
        }
    }

    fn from_mapping(map: &Mapping, path: &NodePath) -> Result<Self, RedactError> {
        Ok(Self {
            classification: string_field(map, CLASSIFICATION, path)?,
            sci_controls: set_field(map, &[SCI_CONTROLS], path)?,
            dissemination_controls: set_field(map, &[DISSEMINATION_CONTROLS], path)?,
            releasable_to: set_field(map, &[RELEASABLE_TO, RELEASABLE_TO_ALIAS], path)?,
            banner: string_field(map, BANNER, path)?,
            owner_producer: set_field(map, &[OWNER_PRODUCER], path)?,
        })
    }

    /// Renders the marking as a mapping node in canonical field names.
    #[must_use]
    pub fn to_node(&self) -> Node {
        let mut map = Mapping::new();
        if let Some(classification) = &self.classification {
            map.insert(CLASSIFICATION.into(), Node::from(classification.as_str()));
        }
        map.insert(SCI_CONTROLS.into(), set_node(&self.sci_controls));
        map.insert(
            DISSEMINATION_CONTROLS.into(),
            set_node(&self.dissemination_controls),
        );
        map.insert(RELEASABLE_TO.into(), set_node(&self.releasable_to));
        if let Some(banner) = &self.banner {
            map.insert(BANNER.into(), Node::from(banner.as_str()));
        }
        if !self.owner_producer.is_empty() {
            map.insert(OWNER_PRODUCER.into(), set_node(&self.owner_producer));
        }
        Node::Mapping(map)
    }
}

fn string_field(map: &Mapping, key: &str, path: &NodePath) -> Result<Option<String>, RedactError> {
    match map.get(key) {
        None | Some(Node::Absent) => Ok(None),
        Some(Node::Scalar(Scalar::String(value))) => Ok(Some(value.clone())),
        Some(other) => Err(RedactError::malformed(
            path,
            format!("`{key}` must be a string, found {}", other.kind()),
        )),
    }
}

fn set_field(
    map: &Mapping,
    keys: &[&str],
    path: &NodePath,
) -> Result<BTreeSet<String>, RedactError> {
    let Some((key, node)) = keys
        .iter()
        .find_map(|key| map.get(*key).map(|node| (*key, node)))
    else {
        return Ok(BTreeSet::new());
    };

    match node {
        Node::Absent => Ok(BTreeSet::new()),
        Node::Sequence(items) => {
            let mut values = BTreeSet::new();
            for (index, item) in items.iter().enumerate() {
                match item {
                    Node::Absent => {}
                    Node::Scalar(Scalar::String(value)) => {
                        values.insert(value.clone());
                    }
                    other => {
                        return Err(RedactError::malformed(
                            path,
                            format!("`{key}[{index}]` must be a string, found {}", other.kind()),
                        ));
                    }
                }
            }
            Ok(values)
        }
        other => Err(RedactError::malformed(
            path,
            format!("`{key}` must be a sequence of strings, found {}", other.kind()),
        )),
    }
}

fn set_node(values: &BTreeSet<String>) -> Node {
    Node::sequence(values.iter().map(String::as_str))
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(entries: Vec<(&str, Node)>) -> Node {
        Node::mapping(entries)
    }

    #[test]
    fn normalizes_complete_marking() {
        let node = raw(vec![
            ("classification", "S".into()),
            ("sciControls", Node::sequence(["SI", "TK"])),
            ("disseminationControls", Node::sequence(["REL"])),
            ("releasableTo", Node::sequence(["USA", "GBR", "USA"])),
            ("banner", "SECRET//REL TO USA, GBR".into()),
            ("ownerProducer", Node::sequence(["USA"])),
        ]);

        let marking = Marking::from_node(&node, &NodePath::root())
            .unwrap()
            .unwrap();
        assert_eq!(marking.classification(), Some("S"));
        assert_eq!(marking.sci_controls().len(), 2);
        assert!(marking.dissemination_controls().contains("REL"));
        assert_eq!(marking.releasable_to().len(), 2);
        assert_eq!(marking.banner(), "SECRET//REL TO USA, GBR");
        assert!(marking.owner_producer().contains("USA"));
    }

    #[test]
    fn missing_fields_degrade_to_empty() {
        let node = raw(vec![("classification", "C".into()), ("banner", Node::Absent)]);
        let marking = Marking::from_node(&node, &NodePath::root())
            .unwrap()
            .unwrap();
        assert!(marking.sci_controls().is_empty());
        assert!(marking.dissemination_controls().is_empty());
        assert!(marking.releasable_to().is_empty());
        assert_eq!(marking.banner(), "");
    }

    #[test]
    fn missing_classification_ranks_as_unclassified() {
        let node = raw(vec![("banner", "UNCLASSIFIED".into())]);
        let marking = Marking::from_node(&node, &NodePath::root())
            .unwrap()
            .unwrap();
        assert_eq!(marking.classification(), None);
        assert_eq!(marking.effective_classification(), UNCLASSIFIED);
    }

    #[test]
    fn accepts_upstream_releasable_spelling() {
        let node = raw(vec![
            ("classification", "S".into()),
            ("releaseableTo", Node::sequence(["USA", "AUS"])),
        ]);
        let marking = Marking::from_node(&node, &NodePath::root())
            .unwrap()
            .unwrap();
        assert_eq!(marking.releasable_to().len(), 2);
    }

    #[test]
    fn absent_and_empty_nodes_are_not_markings() {
        assert_eq!(Marking::from_node(&Node::Absent, &NodePath::root()), Ok(None));
        assert_eq!(
            Marking::from_node(&Node::Mapping(Mapping::new()), &NodePath::root()),
            Ok(None)
        );
    }

    #[test]
    fn rejects_non_mapping_marking() {
        let path = NodePath::root().join_key("ism");
        let err = Marking::from_node(&Node::from("SECRET"), &path).unwrap_err();
        assert_eq!(err.path(), "/ism");
        assert!(err.to_string().contains("expected a mapping, found string"));
    }

    #[test]
    fn rejects_bare_string_control_list() {
        let node = raw(vec![("disseminationControls", "NOFORN".into())]);
        let err = Marking::from_node(&node, &NodePath::root()).unwrap_err();
        assert!(err.to_string().contains("`disseminationControls` must be a sequence"));
    }

    #[test]
    fn rejects_non_string_control_entry() {
        let node = raw(vec![("sciControls", Node::sequence([Node::from(7_i64)]))]);
        let err = Marking::from_node(&node, &NodePath::root()).unwrap_err();
        assert!(err.to_string().contains("`sciControls[0]` must be a string"));
    }

    #[test]
    fn to_node_renders_canonical_fields() {
        let marking = Marking::new("C")
            .with_dissemination_controls(["REL"])
            .with_releasable_to(["USA"]);
        let node = marking.to_node();
        assert_eq!(node.get("classification").and_then(Node::as_str), Some("C"));
        assert_eq!(
            node.get("releasableTo"),
            Some(&Node::sequence(["USA"]))
        );
        assert!(node.get("banner").is_none());

        let reparsed = Marking::from_node(&node, &NodePath::root())
            .unwrap()
            .unwrap();
        assert_eq!(reparsed, marking);
    }
}
