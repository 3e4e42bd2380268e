//! Level 30 delegate: all-files storage manager.
//!
//! This release replaced broad external-storage access with a settings-only
//! all-files permission backed by a native storage-manager flag.

use crate::model::ReleaseDelegate;
use crate::resolve;
use permit_core::intent::{actions, SettingsIntent};
use permit_core::level::ApiLevel;
use permit_core::permission;
use permit_core::platform::{HostActivity, HostContext, PlatformCapability};

/// Overrides all-files access; defers everything else.
#[derive(Debug, Default)]
pub struct DelegateV30;

impl ReleaseDelegate for DelegateV30 {
    fn boundary(&self) -> ApiLevel {
        ApiLevel::R
    }

    fn is_granted(
        &self,
        runtime: ApiLevel,
        ctx: &dyn HostContext,
        permission: &str,
    ) -> Option<bool> {
        if !permission::equals_permission(permission, permission::MANAGE_EXTERNAL_STORAGE) {
            return None;
        }
        Some(is_granted_manage_storage(runtime, ctx))
    }

    fn is_permanently_denied(
        &self,
        _runtime: ApiLevel,
        _activity: &dyn HostActivity,
        permission: &str,
    ) -> Option<bool> {
        if !permission::equals_permission(permission, permission::MANAGE_EXTERNAL_STORAGE) {
            return None;
        }
        // Granted through settings only; there is no dialog to deny.
        Some(false)
    }

    fn resolve_intent(
        &self,
        _runtime: ApiLevel,
        ctx: &dyn HostContext,
        permission: &str,
    ) -> Option<SettingsIntent> {
        if !permission::equals_permission(permission, permission::MANAGE_EXTERNAL_STORAGE) {
            return None;
        }
        Some(manage_storage_intent(ctx))
    }
}

/// Whether the native storage-manager flag reports all-files access.
///
/// The flag only exists from this boundary onward, and the link stays active
/// on later releases, so the runtime level is re-checked here.
fn is_granted_manage_storage(runtime: ApiLevel, ctx: &dyn HostContext) -> bool {
    runtime >= ApiLevel::R && ctx.has_capability(PlatformCapability::ExternalStorageManager)
}

/// All-files settings intent: per-app screen, device-wide screen, generic
/// application details.
fn manage_storage_intent(ctx: &dyn HostContext) -> SettingsIntent {
    resolve::first_navigable(
        ctx,
        [
            SettingsIntent::with_package(
                actions::MANAGE_APP_ALL_FILES_ACCESS_PERMISSION,
                ctx.package_name(),
            ),
            SettingsIntent::new(actions::MANAGE_ALL_FILES_ACCESS_PERMISSION),
        ],
    )
}
