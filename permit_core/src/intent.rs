//! Settings-intent model.
//!
//! A [`SettingsIntent`] is a navigation target: an action identifier plus
//! optional package-scoped data. Intents are constructed fresh per call and
//! never cached, since which settings screens resolve can differ between
//! devices and change between calls.

use serde::{Deserialize, Serialize};

/// Settings action identifiers used by the delegate chain.
pub mod actions {
    /// Per-application all-files access screen (primary tier).
    pub const MANAGE_APP_ALL_FILES_ACCESS_PERMISSION: &str =
        "android.settings.MANAGE_APP_ALL_FILES_ACCESS_PERMISSION";

    /// Device-wide all-files access screen (secondary tier).
    pub const MANAGE_ALL_FILES_ACCESS_PERMISSION: &str =
        "android.settings.MANAGE_ALL_FILES_ACCESS_PERMISSION";

    /// Application details screen; resolves on every device.
    pub const APPLICATION_DETAILS_SETTINGS: &str = "android.settings.APPLICATION_DETAILS_SETTINGS";

    /// Draw-over-other-apps screen.
    pub const MANAGE_OVERLAY_PERMISSION: &str = "android.settings.action.MANAGE_OVERLAY_PERMISSION";

    /// Modify-system-settings screen.
    pub const MANAGE_WRITE_SETTINGS: &str = "android.settings.action.MANAGE_WRITE_SETTINGS";

    /// Unknown-app-sources install screen.
    pub const MANAGE_UNKNOWN_APP_SOURCES: &str = "android.settings.MANAGE_UNKNOWN_APP_SOURCES";

    /// Exact-alarm settings screen.
    pub const REQUEST_SCHEDULE_EXACT_ALARM: &str = "android.settings.REQUEST_SCHEDULE_EXACT_ALARM";

    /// Application notification settings screen.
    pub const APP_NOTIFICATION_SETTINGS: &str = "android.settings.APP_NOTIFICATION_SETTINGS";
}

/// A navigable settings target.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettingsIntent {
    /// The settings action to launch.
    action: String,

    /// Optional data URI scoping the screen to one package.
    data: Option<String>,
}

impl SettingsIntent {
    /// Create an intent with no data URI.
    pub fn new(action: impl Into<String>) -> Self {
        Self {
            action: action.into(),
            data: None,
        }
    }

    /// Create an intent scoped to the given package.
    pub fn with_package(action: impl Into<String>, package_name: &str) -> Self {
        Self {
            action: action.into(),
            data: Some(package_uri(package_name)),
        }
    }

    /// Get the settings action.
    pub fn action(&self) -> &str {
        &self.action
    }

    /// Get the data URI, if any.
    pub fn data(&self) -> Option<&str> {
        self.data.as_deref()
    }
}

/// Build a package-scoped data URI, e.g. `package:com.example.app`.
pub fn package_uri(package_name: &str) -> String {
    format!("package:{package_name}")
}
