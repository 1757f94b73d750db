//! Restrictiveness ordering between two markings.
//!
//! Comparison is a lexicographic cascade over four tiers. Each tier either
//! decides or ties; only ties fall through.
//!
//! 1. **Foreign government information**: an SCI control starting with `FGI`.
//! 2. **NOFORN**: the `NOFORN` dissemination control.
//! 3. **Releasability**: only when *both* markings carry a REL control. Fewer
//!    special groups released to is tighter; with equal counts, fewer
//!    releasable entities overall is tighter.
//! 4. **Classification**: the policy ordinal of each classification.
//!
//! Because tier 3 applies only to pairs of REL markings, the relation is not
//! transitive across mixed REL and non-REL markings. The locator never relies
//! on transitivity: it keeps a running maximum and replaces it only when a
//! candidate is strictly more restrictive.

use std::cmp::Ordering;

use super::config::Policy;
use crate::marking::Marking;

/// Prefix of SCI controls that mark foreign government information.
pub const FGI_PREFIX: &str = "FGI";

/// Dissemination control forbidding release to foreign nationals.
pub const NOFORN: &str = "NOFORN";

/// Dissemination control restricting release to named entities.
pub const REL: &str = "REL";

/// The tier that settled a comparison.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Tier {
    ForeignGovernment,
    NoForeign,
    Releasability,
    Classification,
}

/// Outcome of comparing `a` against `b`.
///
/// `ordering` is `Greater` when `a` is more restrictive, `Less` when `b` is,
/// and `Equal` when neither is. `Equal` is only ever reported by the
/// classification tier.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Verdict {
    pub tier: Tier,
    pub ordering: Ordering,
}

/// Whether a dissemination control restricts release to named entities.
///
/// Accepts the bare `REL` token and spelled-out forms such as `REL TO USA, GBR`.
#[must_use]
pub fn is_rel_control(control: &str) -> bool {
    control == REL
        || control
            .strip_prefix(REL)
            .is_some_and(|rest| rest.starts_with(' '))
}

fn has_fgi(marking: &Marking) -> bool {
    marking
        .sci_controls()
        .iter()
        .any(|control| control.starts_with(FGI_PREFIX))
}

fn has_noforn(marking: &Marking) -> bool {
    marking.dissemination_controls().contains(NOFORN)
}

fn has_rel(marking: &Marking) -> bool {
    marking
        .dissemination_controls()
        .iter()
        .any(|control| is_rel_control(control))
}

impl Policy {
    fn special_release_count(&self, marking: &Marking) -> usize {
        marking
            .releasable_to()
            .intersection(self.special_groups())
            .count()
    }

    /// Compares two markings and reports which tier decided.
    #[must_use]
    pub fn compare_restrictiveness(&self, a: &Marking, b: &Marking) -> Verdict {
        let decided = |tier, ordering| Verdict { tier, ordering };

        let fgi = has_fgi(a).cmp(&has_fgi(b));
        if fgi != Ordering::Equal {
            return decided(Tier::ForeignGovernment, fgi);
        }

        let noforn = has_noforn(a).cmp(&has_noforn(b));
        if noforn != Ordering::Equal {
            return decided(Tier::NoForeign, noforn);
        }

        if has_rel(a) && has_rel(b) {
            // Smaller release sets are tighter, hence the reversed comparisons.
            let groups = self
                .special_release_count(b)
                .cmp(&self.special_release_count(a));
            if groups != Ordering::Equal {
                return decided(Tier::Releasability, groups);
            }

            let entities = b.releasable_to().len().cmp(&a.releasable_to().len());
            if entities != Ordering::Equal {
                return decided(Tier::Releasability, entities);
            }
        }

        let level = self
            .ordinal(a.effective_classification())
            .cmp(&self.ordinal(b.effective_classification()));
        decided(Tier::Classification, level)
    }

    /// Whether `a` is strictly more restrictive than `b`.
    #[must_use]
    pub fn is_more_restrictive(&self, a: &Marking, b: &Marking) -> bool {
        self.compare_restrictiveness(a, b).ordering == Ordering::Greater
    }
}

/// Restrictiveness test over optional markings.
///
/// Absent operands are never more restrictive, and nothing is more
/// restrictive than an absent operand.
#[must_use]
pub fn is_more_restrictive(a: Option<&Marking>, b: Option<&Marking>, policy: &Policy) -> bool {
    match (a, b) {
        (Some(a), Some(b)) => policy.is_more_restrictive(a, b),
        _ => false,
    }
}
