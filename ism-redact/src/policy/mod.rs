//! Restriction policy and the pure tests built on it.
//!
//! This module provides:
//!
//! - **Configuration** (`config`): the [`Policy`] value, its builders, and
//!   YAML loading behind the `yaml` feature.
//!
//! - **Forbidden test** (`forbidden`): [`Policy::is_forbidden`] and
//!   [`Policy::forbidden_reason`], deciding whether a marking may ever appear
//!   in output.
//!
//! - **Restrictiveness** (`restrictiveness`): [`Policy::is_more_restrictive`]
//!   and [`Policy::compare_restrictiveness`], the tiered ordering used to pick
//!   one marking for a whole document.
//!
//! Everything here is pure and total: malformed input is rejected earlier,
//! when a marking is normalized.
//!
//! # Example
//!
//! ```rust
//! use ism_redact::{Marking, Policy};
//!
//! let policy = Policy::new()
//!     .with_classifications(["U", "C", "S", "TS"])
//!     .with_forbidden_controls(["ORCON"]);
//!
//! let secret = Marking::new("S");
//! let fgi = Marking::new("U").with_sci_controls(["FGI-CAN"]);
//!
//! assert!(policy.is_more_restrictive(&fgi, &secret));
//! assert!(policy.is_forbidden(&Marking::new("TS")));
//! ```

pub mod config;
pub mod forbidden;
pub mod restrictiveness;

#[cfg(feature = "yaml")]
pub use config::PolicyError;
pub use config::{Policy, TOP_CLASSIFICATION};
pub use forbidden::{ForbiddenReason, is_forbidden};
pub use restrictiveness::{
    FGI_PREFIX, NOFORN, REL, Tier, Verdict, is_more_restrictive, is_rel_control,
};
