//! Host-platform traits.
//!
//! These are the narrow seams between the delegate chain and the running
//! device. The chain never touches platform state directly; every query goes
//! through one of these traits, so tests can substitute a fake device.

use crate::intent::SettingsIntent;

/// Release-gated native capability flags a delegate may consult.
///
/// Each flag wraps one platform primitive that only exists from a certain
/// release onward. Delegates re-check the runtime level before consulting a
/// flag, because a link stays active on every release after its boundary.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PlatformCapability {
    /// The application manages all files on external storage (level 30+).
    ExternalStorageManager,

    /// The application may draw windows over other applications.
    OverlayWindows,

    /// The application may modify system settings.
    WriteSystemSettings,

    /// The application may install packages (level 26+).
    InstallPackages,

    /// The application may schedule exact alarms (level 31+).
    ExactAlarms,

    /// Notifications are enabled for the application.
    NotificationsEnabled,
}

/// Host-context query interface.
///
/// Implementations wrap the platform's package-manager and settings lookups.
/// All queries are fast, local, in-process, and side-effect free.
pub trait HostContext: Send + Sync {
    /// Package identifier of the host application.
    fn package_name(&self) -> &str;

    /// Whether the platform reports the permission as granted.
    ///
    /// This is the native grant primitive; callers are expected to pass a
    /// canonical identifier (see [`crate::permission::canonical`]).
    fn is_native_permission_granted(&self, permission: &str) -> bool;

    /// Whether a release-gated native capability is present and enabled.
    fn has_capability(&self, capability: PlatformCapability) -> bool;

    /// Whether any activity on the current device can handle the intent.
    fn has_intent_handler(&self, intent: &SettingsIntent) -> bool;
}

/// Host-activity query interface.
///
/// Extends [`HostContext`] with the one query that needs a foreground
/// activity: whether the platform would still show a request rationale.
pub trait HostActivity: HostContext {
    /// Whether the platform would show a request rationale for the permission.
    ///
    /// Once the user denies with "don't ask again" semantics this turns
    /// `false`, which is how permanent denial is detected.
    fn should_show_rationale(&self, permission: &str) -> bool;
}
