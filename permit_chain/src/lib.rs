//! # Permit Chain
//!
//! `permit_chain` answers three platform-version-dependent questions about a
//! single named permission: whether it is granted, whether it has been
//! permanently denied, and which settings screen lets the user grant it.
//!
//! The platform's permission model changes across releases. New categories
//! appear, old ones are superseded, and the right settings screen differs
//! per release. Callers still see one stable contract, because the chain
//! dispatches each call to the newest delegate link whose release boundary
//! the runtime has reached, and links defer to older links for everything
//! they do not specifically override.
//!
//! Key concepts:
//!
//! 1. **ReleaseDelegate**: The capability contract every link implements.
//!    A link answers only for the categories that changed at its boundary
//!    and defers (returns `None`) for everything else.
//!
//! 2. **DelegateChain**: The explicit, ordered list of links. Boundaries are
//!    strictly increasing; the order is validated at construction.
//!
//! 3. **DelegateSelector**: Routes each call through the active links,
//!    newest first, with the runtime release injected once at construction.
//!
//! 4. **Intent fallback**: Settings intents degrade in specificity until one
//!    resolves; the application-details screen is the terminal tier and
//!    always resolves.

pub mod chain;
pub mod delegates;
pub mod model;
pub mod resolve;

// Re-export key types for convenience
pub use chain::{DelegateChain, DelegateSelector};
pub use delegates::{
    BaseDelegate, DelegateV26, DelegateV29, DelegateV30, DelegateV31, DelegateV33,
};
pub use model::ReleaseDelegate;
