//! Core delegate trait.
//!
//! This module defines the `ReleaseDelegate` trait that every link in the
//! chain implements.

use permit_core::intent::SettingsIntent;
use permit_core::level::ApiLevel;
use permit_core::platform::{HostActivity, HostContext};
use std::fmt::Debug;

/// One release-scoped link in the delegate chain.
///
/// A link is bound to exactly one release boundary and overrides only the
/// behaviors that changed at that boundary. Every operation returns an
/// `Option`; `None` means "defer to the next-older link". The base link is
/// total, so dispatched calls always produce a definite answer.
///
/// Links are immutable and stateless, and are shared read-only across
/// concurrent callers.
pub trait ReleaseDelegate: Debug + Send + Sync {
    /// The release boundary this link is bound to.
    ///
    /// The link is only consulted when the runtime release is at or above
    /// this value. It stays active on every later release too, so overrides
    /// that wrap a release-gated native capability must re-check the runtime
    /// level themselves.
    fn boundary(&self) -> ApiLevel;

    /// Check whether the permission is currently granted.
    ///
    /// Must never fail for an unrecognized identifier; a link that does not
    /// handle the category defers instead.
    fn is_granted(
        &self,
        runtime: ApiLevel,
        ctx: &dyn HostContext,
        permission: &str,
    ) -> Option<bool> {
        let _ = (runtime, ctx, permission);
        None
    }

    /// Check whether the permission has been permanently denied.
    ///
    /// Settings-only categories answer `false`: with no request dialog there
    /// is nothing to permanently deny, and the caller should present the
    /// settings redirect every time.
    fn is_permanently_denied(
        &self,
        runtime: ApiLevel,
        activity: &dyn HostActivity,
        permission: &str,
    ) -> Option<bool> {
        let _ = (runtime, activity, permission);
        None
    }

    /// Produce a navigable settings intent for granting the permission.
    ///
    /// Implementations degrade specificity through the fallback resolver
    /// rather than returning a target with no handler.
    fn resolve_intent(
        &self,
        runtime: ApiLevel,
        ctx: &dyn HostContext,
        permission: &str,
    ) -> Option<SettingsIntent> {
        let _ = (runtime, ctx, permission);
        None
    }
}
