//! Level 33 delegate: runtime notifications.
//!
//! This release introduced a runtime permission for posting notifications.
//! Grant state mirrors the notifications-enabled flag rather than the plain
//! native grant, because the user can flip notifications off in settings
//! without the grant ever being revoked.

use crate::model::ReleaseDelegate;
use crate::resolve;
use permit_core::intent::{actions, SettingsIntent};
use permit_core::level::ApiLevel;
use permit_core::permission;
use permit_core::platform::{HostContext, PlatformCapability};

/// Overrides post-notifications; defers everything else.
#[derive(Debug, Default)]
pub struct DelegateV33;

impl ReleaseDelegate for DelegateV33 {
    fn boundary(&self) -> ApiLevel {
        ApiLevel::T
    }

    fn is_granted(
        &self,
        runtime: ApiLevel,
        ctx: &dyn HostContext,
        permission: &str,
    ) -> Option<bool> {
        if !permission::equals_permission(permission, permission::POST_NOTIFICATIONS) {
            return None;
        }
        // Flag exists from this boundary onward only.
        Some(runtime >= ApiLevel::T && ctx.has_capability(PlatformCapability::NotificationsEnabled))
    }

    // Permanent denial follows standard dangerous-permission logic; the
    // base link already implements it.

    fn resolve_intent(
        &self,
        _runtime: ApiLevel,
        ctx: &dyn HostContext,
        permission: &str,
    ) -> Option<SettingsIntent> {
        if !permission::equals_permission(permission, permission::POST_NOTIFICATIONS) {
            return None;
        }
        Some(resolve::first_navigable(
            ctx,
            [SettingsIntent::with_package(
                actions::APP_NOTIFICATION_SETTINGS,
                ctx.package_name(),
            )],
        ))
    }
}
