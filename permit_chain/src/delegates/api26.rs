//! Level 26 delegate: package installation.
//!
//! This release gated installing packages behind a settings-only special
//! permission backed by a native capability flag.

use crate::model::ReleaseDelegate;
use crate::resolve;
use permit_core::intent::{actions, SettingsIntent};
use permit_core::level::ApiLevel;
use permit_core::permission;
use permit_core::platform::{HostActivity, HostContext, PlatformCapability};

/// Overrides install-packages; defers everything else.
#[derive(Debug, Default)]
pub struct DelegateV26;

impl ReleaseDelegate for DelegateV26 {
    fn boundary(&self) -> ApiLevel {
        ApiLevel::O
    }

    fn is_granted(
        &self,
        runtime: ApiLevel,
        ctx: &dyn HostContext,
        permission: &str,
    ) -> Option<bool> {
        if !permission::equals_permission(permission, permission::REQUEST_INSTALL_PACKAGES) {
            return None;
        }
        // Native flag exists from this boundary onward only.
        Some(runtime >= ApiLevel::O && ctx.has_capability(PlatformCapability::InstallPackages))
    }

    fn is_permanently_denied(
        &self,
        _runtime: ApiLevel,
        _activity: &dyn HostActivity,
        permission: &str,
    ) -> Option<bool> {
        if !permission::equals_permission(permission, permission::REQUEST_INSTALL_PACKAGES) {
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
        if !permission::equals_permission(permission, permission::REQUEST_INSTALL_PACKAGES) {
            return None;
        }
        Some(resolve::first_navigable(
            ctx,
            [SettingsIntent::with_package(
                actions::MANAGE_UNKNOWN_APP_SOURCES,
                ctx.package_name(),
            )],
        ))
    }
}
