//! Level 31 delegate: exact alarms.
//!
//! This release gated exact alarm scheduling behind a settings-only special
//! permission backed by a native capability flag.

use crate::model::ReleaseDelegate;
use crate::resolve;
use permit_core::intent::{actions, SettingsIntent};
use permit_core::level::ApiLevel;
use permit_core::permission;
use permit_core::platform::{HostActivity, HostContext, PlatformCapability};

/// Overrides exact-alarm scheduling; defers everything else.
#[derive(Debug, Default)]
pub struct DelegateV31;

impl ReleaseDelegate for DelegateV31 {
    fn boundary(&self) -> ApiLevel {
        ApiLevel::S
    }

    fn is_granted(
        &self,
        runtime: ApiLevel,
        ctx: &dyn HostContext,
        permission: &str,
    ) -> Option<bool> {
        if !permission::equals_permission(permission, permission::SCHEDULE_EXACT_ALARM) {
            return None;
        }
        // Native flag exists from this boundary onward only.
        Some(runtime >= ApiLevel::S && ctx.has_capability(PlatformCapability::ExactAlarms))
    }

    fn is_permanently_denied(
        &self,
        _runtime: ApiLevel,
        _activity: &dyn HostActivity,
        permission: &str,
    ) -> Option<bool> {
        if !permission::equals_permission(permission, permission::SCHEDULE_EXACT_ALARM) {
            return None;
        }
        Some(false)
    }

    fn resolve_intent(
        &self,
        _runtime: ApiLevel,
        ctx: &dyn HostContext,
        permission: &str,
    ) -> Option<SettingsIntent> {
        if !permission::equals_permission(permission, permission::SCHEDULE_EXACT_ALARM) {
            return None;
        }
        Some(resolve::first_navigable(
            ctx,
            [SettingsIntent::with_package(
                actions::REQUEST_SCHEDULE_EXACT_ALARM,
                ctx.package_name(),
            )],
        ))
    }
}
