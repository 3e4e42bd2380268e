//! Oldest-supported-release delegate.
//!
//! Defines the legacy semantics every younger link falls back to. Releases
//! before the runtime permission model gated nothing at all, so the default
//! answer for anything the chain does not recognize is "granted".

use crate::model::ReleaseDelegate;
use crate::resolve;
use permit_core::intent::{actions, SettingsIntent};
use permit_core::level::ApiLevel;
use permit_core::permission;
use permit_core::platform::{HostActivity, HostContext, PlatformCapability};

/// Terminal link: legacy semantics for every permission category.
#[derive(Debug, Default)]
pub struct BaseDelegate;

impl ReleaseDelegate for BaseDelegate {
    fn boundary(&self) -> ApiLevel {
        ApiLevel::BASE
    }

    fn is_granted(
        &self,
        runtime: ApiLevel,
        ctx: &dyn HostContext,
        permission: &str,
    ) -> Option<bool> {
        if runtime < ApiLevel::M {
            // Before the runtime permission model nothing was gated.
            return Some(true);
        }
        if permission::equals_permission(permission, permission::MANAGE_EXTERNAL_STORAGE) {
            // Legacy semantics: broad external storage stands in for
            // all-files access on releases before the storage manager.
            return Some(
                ctx.is_native_permission_granted(permission::READ_EXTERNAL_STORAGE)
                    && ctx.is_native_permission_granted(permission::WRITE_EXTERNAL_STORAGE),
            );
        }
        if permission::equals_permission(permission, permission::SYSTEM_ALERT_WINDOW) {
            return Some(ctx.has_capability(PlatformCapability::OverlayWindows));
        }
        if permission::equals_permission(permission, permission::WRITE_SETTINGS) {
            return Some(ctx.has_capability(PlatformCapability::WriteSystemSettings));
        }
        if let Some(introduced) = permission::introduced_at(permission) {
            if runtime < introduced {
                // The permission postdates this release; the behavior it
                // gates is still ungated here.
                return Some(true);
            }
        }
        Some(ctx.is_native_permission_granted(permission::canonical(permission)))
    }

    fn is_permanently_denied(
        &self,
        runtime: ApiLevel,
        activity: &dyn HostActivity,
        permission: &str,
    ) -> Option<bool> {
        if runtime < ApiLevel::M {
            return Some(false);
        }
        if permission::is_settings_only(permission) {
            // No request dialog exists, so nothing can be permanently denied.
            return Some(false);
        }
        if let Some(introduced) = permission::introduced_at(permission) {
            if runtime < introduced {
                return Some(false);
            }
        }
        let canonical = permission::canonical(permission);
        Some(
            !activity.is_native_permission_granted(canonical)
                && !activity.should_show_rationale(canonical),
        )
    }

    fn resolve_intent(
        &self,
        _runtime: ApiLevel,
        ctx: &dyn HostContext,
        permission: &str,
    ) -> Option<SettingsIntent> {
        if permission::equals_permission(permission, permission::SYSTEM_ALERT_WINDOW) {
            return Some(resolve::first_navigable(
                ctx,
                [SettingsIntent::with_package(
                    actions::MANAGE_OVERLAY_PERMISSION,
                    ctx.package_name(),
                )],
            ));
        }
        if permission::equals_permission(permission, permission::WRITE_SETTINGS) {
            return Some(resolve::first_navigable(
                ctx,
                [SettingsIntent::with_package(
                    actions::MANAGE_WRITE_SETTINGS,
                    ctx.package_name(),
                )],
            ));
        }
        Some(resolve::application_details(ctx))
    }
}
