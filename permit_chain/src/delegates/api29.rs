//! Level 29 delegate: activity recognition.
//!
//! This release turned activity recognition into a dangerous permission with
//! its own framework identifier. The older Play-services spelling stays in
//! circulation, so this link routes both spellings through the framework
//! identifier before touching the native grant primitive.

use crate::model::ReleaseDelegate;
use permit_core::level::ApiLevel;
use permit_core::permission;
use permit_core::platform::{HostActivity, HostContext};

/// Overrides activity recognition; defers everything else.
#[derive(Debug, Default)]
pub struct DelegateV29;

impl ReleaseDelegate for DelegateV29 {
    fn boundary(&self) -> ApiLevel {
        ApiLevel::Q
    }

    fn is_granted(
        &self,
        _runtime: ApiLevel,
        ctx: &dyn HostContext,
        permission: &str,
    ) -> Option<bool> {
        if !permission::equals_permission(permission, permission::ACTIVITY_RECOGNITION) {
            return None;
        }
        Some(ctx.is_native_permission_granted(permission::ACTIVITY_RECOGNITION))
    }

    fn is_permanently_denied(
        &self,
        _runtime: ApiLevel,
        activity: &dyn HostActivity,
        permission: &str,
    ) -> Option<bool> {
        if !permission::equals_permission(permission, permission::ACTIVITY_RECOGNITION) {
            return None;
        }
        Some(
            !activity.is_native_permission_granted(permission::ACTIVITY_RECOGNITION)
                && !activity.should_show_rationale(permission::ACTIVITY_RECOGNITION),
        )
    }
}
