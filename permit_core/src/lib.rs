//! # Permit Core
//!
//! `permit_core` provides the shared vocabulary for the permit permission
//! system: release levels, permission identifiers, settings intents, and the
//! host-platform traits the delegate chain queries.
//!
//! Key concepts:
//!
//! 1. **ApiLevel**: An ordered platform release identifier. The chain is
//!    organized around the releases at which permission semantics changed.
//!
//! 2. **Permission identifier**: An opaque string naming a platform
//!    permission category. Identifiers are only ever compared through a
//!    canonicalization helper because some spellings are historical aliases.
//!
//! 3. **SettingsIntent**: A navigation target pointing the user at the
//!    settings screen where a permission can be granted by hand.
//!
//! 4. **Host platform traits**: The narrow interfaces through which the
//!    chain queries the running device (grant state, capability flags,
//!    intent navigability, package identity).

pub mod error;
pub mod intent;
pub mod level;
pub mod permission;
pub mod platform;

// Re-export key types for convenience
pub use error::{ChainError, Error, Result};
pub use intent::SettingsIntent;
pub use level::ApiLevel;
pub use platform::{HostActivity, HostContext, PlatformCapability};
