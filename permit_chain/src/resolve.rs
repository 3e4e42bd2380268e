//! Intent fallback resolver.
//!
//! Settings screens move around between OEM platform variants; the most
//! specific screen for a permission is frequently absent or relocated. The
//! resolver walks candidate intents from most to least specific and returns
//! the first one the device can actually open, ending at the
//! application-details screen, which resolves everywhere. The contract is:
//! always return a navigable intent, never an unresolvable one.

use permit_core::intent::{actions, SettingsIntent};
use permit_core::platform::HostContext;
use tracing::debug;

/// Return the first candidate with a registered handler.
///
/// Candidates are tried in the given order; an unresolvable candidate is
/// silently skipped. If none resolves, the application-details screen for
/// the host package is returned.
pub fn first_navigable(
    ctx: &dyn HostContext,
    candidates: impl IntoIterator<Item = SettingsIntent>,
) -> SettingsIntent {
    for candidate in candidates {
        if ctx.has_intent_handler(&candidate) {
            return candidate;
        }
        debug!(
            action = candidate.action(),
            "settings intent has no handler, degrading to next tier"
        );
    }
    application_details(ctx)
}

/// Application-details settings screen for the host package.
///
/// Terminal fallback tier; defined by the platform to resolve on every
/// device.
pub fn application_details(ctx: &dyn HostContext) -> SettingsIntent {
    SettingsIntent::with_package(actions::APPLICATION_DETAILS_SETTINGS, ctx.package_name())
}
