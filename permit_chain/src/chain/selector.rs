//! Call-time delegate selection.
//!
//! The selector holds the runtime release, injected once at construction,
//! and routes each call through the links active for that release. Most
//! specific boundary wins; a link that defers hands the call to the next
//! older link.

use crate::chain::DelegateChain;
use crate::resolve;
use permit_core::intent::SettingsIntent;
use permit_core::level::ApiLevel;
use permit_core::platform::{HostActivity, HostContext};
use tracing::debug;

/// Routes permission queries to the delegate link matching the runtime
/// release.
///
/// Stateless beyond the chain and the injected release; safe to share
/// across concurrent callers.
#[derive(Clone, Debug)]
pub struct DelegateSelector {
    /// The ordered link chain.
    chain: DelegateChain,

    /// The running platform's release, fixed at construction.
    runtime: ApiLevel,
}

impl DelegateSelector {
    /// Create a selector over an explicit chain.
    ///
    /// # Arguments
    ///
    /// * `chain` - The validated delegate chain.
    /// * `runtime` - The running platform's release identifier.
    pub fn new(chain: DelegateChain, runtime: ApiLevel) -> Self {
        Self { chain, runtime }
    }

    /// Create a selector over the standard chain.
    pub fn standard(runtime: ApiLevel) -> Self {
        Self::new(DelegateChain::standard(), runtime)
    }

    /// The release this selector dispatches for.
    pub fn runtime(&self) -> ApiLevel {
        self.runtime
    }

    /// Check whether the permission is currently granted.
    ///
    /// Total for any identifier: if no link claims the permission, the
    /// platform predates it and the behavior was never gated, so the answer
    /// is granted.
    pub fn is_granted(&self, ctx: &dyn HostContext, permission: &str) -> bool {
        for link in self.chain.active_links(self.runtime) {
            if let Some(granted) = link.is_granted(self.runtime, ctx, permission) {
                debug!(
                    boundary = %link.boundary(),
                    permission,
                    granted,
                    "grant check answered"
                );
                return granted;
            }
        }
        true
    }

    /// Check whether the permission has been permanently denied.
    ///
    /// Defaults to `false` when no link claims the permission; a permission
    /// the platform does not gate cannot have been denied.
    pub fn is_permanently_denied(&self, activity: &dyn HostActivity, permission: &str) -> bool {
        for link in self.chain.active_links(self.runtime) {
            if let Some(denied) = link.is_permanently_denied(self.runtime, activity, permission) {
                debug!(
                    boundary = %link.boundary(),
                    permission,
                    denied,
                    "permanent denial check answered"
                );
                return denied;
            }
        }
        false
    }

    /// Produce a navigable settings intent for granting the permission.
    ///
    /// Falls back to the application-details screen when no link resolves a
    /// more specific target.
    pub fn resolve_intent(&self, ctx: &dyn HostContext, permission: &str) -> SettingsIntent {
        for link in self.chain.active_links(self.runtime) {
            if let Some(intent) = link.resolve_intent(self.runtime, ctx, permission) {
                debug!(
                    boundary = %link.boundary(),
                    permission,
                    action = intent.action(),
                    "intent resolution answered"
                );
                return intent;
            }
        }
        resolve::application_details(ctx)
    }
}
