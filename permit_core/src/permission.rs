//! Permission identifiers and canonicalization.
//!
//! Identifiers are opaque strings in the platform namespace. Some spellings
//! are historical aliases for the same logical permission, so comparison is
//! only ever done through [`equals_permission`], never by raw string
//! equality. The module also records which categories are settings-only
//! (no in-app request dialog) and the release at which the platform began
//! gating each known category.

use crate::level::ApiLevel;
use lazy_static::lazy_static;
use std::collections::HashMap;

/// Broad external-storage read access (legacy storage model).
pub const READ_EXTERNAL_STORAGE: &str = "android.permission.READ_EXTERNAL_STORAGE";

/// Broad external-storage write access (legacy storage model).
pub const WRITE_EXTERNAL_STORAGE: &str = "android.permission.WRITE_EXTERNAL_STORAGE";

/// All-files storage management; settings-only, introduced at level 30.
pub const MANAGE_EXTERNAL_STORAGE: &str = "android.permission.MANAGE_EXTERNAL_STORAGE";

/// Draw-over-other-apps windows; settings-only.
pub const SYSTEM_ALERT_WINDOW: &str = "android.permission.SYSTEM_ALERT_WINDOW";

/// Modify system settings; settings-only.
pub const WRITE_SETTINGS: &str = "android.permission.WRITE_SETTINGS";

/// Install packages from this application; settings-only, introduced at level 26.
pub const REQUEST_INSTALL_PACKAGES: &str = "android.permission.REQUEST_INSTALL_PACKAGES";

/// Physical-activity recognition, introduced at level 29.
pub const ACTIVITY_RECOGNITION: &str = "android.permission.ACTIVITY_RECOGNITION";

/// Historical Play-services spelling of [`ACTIVITY_RECOGNITION`].
pub const ACTIVITY_RECOGNITION_GMS: &str = "com.google.android.gms.permission.ACTIVITY_RECOGNITION";

/// Exact alarm scheduling; settings-only, introduced at level 31.
pub const SCHEDULE_EXACT_ALARM: &str = "android.permission.SCHEDULE_EXACT_ALARM";

/// Runtime notification permission, introduced at level 33.
pub const POST_NOTIFICATIONS: &str = "android.permission.POST_NOTIFICATIONS";

lazy_static! {
    /// Alias spelling to canonical spelling.
    static ref ALIASES: HashMap<&'static str, &'static str> = {
        let mut aliases = HashMap::new();
        aliases.insert(ACTIVITY_RECOGNITION_GMS, ACTIVITY_RECOGNITION);
        aliases
    };

    /// Release at which the platform began gating each known category.
    static ref INTRODUCED_AT: HashMap<&'static str, ApiLevel> = {
        let mut levels = HashMap::new();
        levels.insert(READ_EXTERNAL_STORAGE, ApiLevel::M);
        levels.insert(WRITE_EXTERNAL_STORAGE, ApiLevel::M);
        levels.insert(SYSTEM_ALERT_WINDOW, ApiLevel::M);
        levels.insert(WRITE_SETTINGS, ApiLevel::M);
        levels.insert(REQUEST_INSTALL_PACKAGES, ApiLevel::O);
        levels.insert(ACTIVITY_RECOGNITION, ApiLevel::Q);
        levels.insert(MANAGE_EXTERNAL_STORAGE, ApiLevel::R);
        levels.insert(SCHEDULE_EXACT_ALARM, ApiLevel::S);
        levels.insert(POST_NOTIFICATIONS, ApiLevel::T);
        levels
    };
}

/// Settings-only categories: granted through a settings screen, never
/// through an in-app request dialog.
const SETTINGS_ONLY: &[&str] = &[
    SYSTEM_ALERT_WINDOW,
    WRITE_SETTINGS,
    REQUEST_INSTALL_PACKAGES,
    MANAGE_EXTERNAL_STORAGE,
    SCHEDULE_EXACT_ALARM,
];

/// Resolve an identifier to its canonical spelling.
///
/// Unrecognized identifiers pass through unchanged.
pub fn canonical(permission: &str) -> &str {
    ALIASES.get(permission).copied().unwrap_or(permission)
}

/// Check whether two identifiers denote the same logical permission.
///
/// This is the only supported way to compare identifiers; raw string
/// equality misses historical aliases.
pub fn equals_permission(left: &str, right: &str) -> bool {
    canonical(left) == canonical(right)
}

/// Check whether a permission is settings-only.
///
/// Permanent denial is meaningless for these categories because there is no
/// request dialog for the user to decline.
pub fn is_settings_only(permission: &str) -> bool {
    let permission = canonical(permission);
    SETTINGS_ONLY
        .iter()
        .any(|candidate| *candidate == permission)
}

/// Get the release at which the platform began gating a permission.
///
/// Returns `None` for identifiers this registry does not know about.
pub fn introduced_at(permission: &str) -> Option<ApiLevel> {
    INTRODUCED_AT.get(canonical(permission)).copied()
}
