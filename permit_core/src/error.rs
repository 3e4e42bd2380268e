//! Error types for the permit system.
//!
//! The query path is total by design: grant checks, permanent-denial checks,
//! and intent resolution always return a definite value. The only fallible
//! surface is delegate-chain construction.

use crate::level::ApiLevel;
use thiserror::Error;

/// Root error type for the permit system.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Chain error: {0}")]
    Chain(#[from] ChainError),
}

/// Errors raised while assembling a delegate chain.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ChainError {
    #[error("Delegate chain has no links")]
    Empty,

    #[error("Boundary {found} is not above the previous boundary {previous}")]
    NonMonotonicBoundary {
        /// The boundary of the preceding link.
        previous: ApiLevel,

        /// The offending boundary.
        found: ApiLevel,
    },

    #[error("Boundary {0} is below the minimum supported level {min}", min = ApiLevel::BASE)]
    BoundaryBelowMinimum(ApiLevel),
}

/// Result type alias for the permit system.
pub type Result<T> = std::result::Result<T, Error>;
