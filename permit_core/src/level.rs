//! Platform release levels.
//!
//! This module defines the ordered release identifier that the delegate
//! chain is organized around. The value is injected once at selector
//! construction time rather than queried ad hoc, so tests can simulate any
//! release deterministically.

use serde::{Deserialize, Serialize};
use std::fmt;

/// An ordered platform release identifier.
///
/// Release boundaries are the levels at which the rules for one or more
/// permissions changed. Each delegate link in the chain is bound to exactly
/// one boundary.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ApiLevel(u32);

impl ApiLevel {
    /// The oldest release the chain supports.
    pub const BASE: ApiLevel = ApiLevel(21);

    /// The release that introduced the runtime permission model.
    pub const M: ApiLevel = ApiLevel(23);

    /// The release that gated package installation behind a special permission.
    pub const O: ApiLevel = ApiLevel(26);

    /// Intermediate release; no permission semantics changed for this chain.
    pub const P: ApiLevel = ApiLevel(28);

    /// The release that made activity recognition a dangerous permission.
    pub const Q: ApiLevel = ApiLevel(29);

    /// The release that introduced the all-files storage manager.
    pub const R: ApiLevel = ApiLevel(30);

    /// The release that gated exact alarms behind a special permission.
    pub const S: ApiLevel = ApiLevel(31);

    /// The release that introduced the runtime notification permission.
    pub const T: ApiLevel = ApiLevel(33);

    /// Create a level from a raw release number.
    pub fn new(level: u32) -> Self {
        Self(level)
    }

    /// Get the raw release number.
    pub fn value(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for ApiLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for ApiLevel {
    fn from(level: u32) -> Self {
        Self(level)
    }
}
