//! End-to-end dispatch through the standard chain on a simulated device.

mod common;

use common::{init_tracing, FakeDevice};
use permit_chain::DelegateSelector;
use permit_core::intent::actions;
use permit_core::level::ApiLevel;
use permit_core::permission;
use permit_core::platform::PlatformCapability;

#[test]
fn test_storage_manager_flag_false_at_level_30() {
    init_tracing();
    let selector = DelegateSelector::standard(ApiLevel::R);
    let device = FakeDevice::new()
        .handling_action(actions::MANAGE_APP_ALL_FILES_ACCESS_PERMISSION)
        .handling_action(actions::MANAGE_ALL_FILES_ACCESS_PERMISSION);

    assert!(!selector.is_granted(&device, permission::MANAGE_EXTERNAL_STORAGE));
    assert!(!selector.is_permanently_denied(&device, permission::MANAGE_EXTERNAL_STORAGE));
    let intent = selector.resolve_intent(&device, permission::MANAGE_EXTERNAL_STORAGE);
    assert_eq!(
        intent.action(),
        actions::MANAGE_APP_ALL_FILES_ACCESS_PERMISSION
    );
    assert_eq!(intent.data(), Some("package:com.example.host"));
}

#[test]
fn test_storage_manager_intent_degrades_per_device() {
    init_tracing();
    let selector = DelegateSelector::standard(ApiLevel::R);

    // OEM variant without the per-app screen.
    let device = FakeDevice::new().handling_action(actions::MANAGE_ALL_FILES_ACCESS_PERMISSION);
    let intent = selector.resolve_intent(&device, permission::MANAGE_EXTERNAL_STORAGE);
    assert_eq!(intent.action(), actions::MANAGE_ALL_FILES_ACCESS_PERMISSION);

    // OEM variant without either storage screen.
    let device = FakeDevice::new();
    let intent = selector.resolve_intent(&device, permission::MANAGE_EXTERNAL_STORAGE);
    assert_eq!(intent.action(), actions::APPLICATION_DETAILS_SETTINGS);
    assert_eq!(intent.data(), Some("package:com.example.host"));
}

#[test]
fn test_storage_manager_granted_when_flag_set() {
    init_tracing();
    let selector = DelegateSelector::standard(ApiLevel::S);
    let device = FakeDevice::new().with_capability(PlatformCapability::ExternalStorageManager);
    assert!(selector.is_granted(&device, permission::MANAGE_EXTERNAL_STORAGE));
}

#[test]
fn test_storage_below_boundary_uses_legacy_external_storage() {
    init_tracing();
    let selector = DelegateSelector::standard(ApiLevel::Q);

    // The storage-manager flag is irrelevant below the boundary.
    let device = FakeDevice::new()
        .with_capability(PlatformCapability::ExternalStorageManager)
        .grant(permission::READ_EXTERNAL_STORAGE);
    assert!(!selector.is_granted(&device, permission::MANAGE_EXTERNAL_STORAGE));

    let device = FakeDevice::new()
        .grant(permission::READ_EXTERNAL_STORAGE)
        .grant(permission::WRITE_EXTERNAL_STORAGE);
    assert!(selector.is_granted(&device, permission::MANAGE_EXTERNAL_STORAGE));
}

#[test]
fn test_granted_below_introduction_boundary() {
    init_tracing();
    let device = FakeDevice::new();

    let selector = DelegateSelector::standard(ApiLevel::R);
    assert!(selector.is_granted(&device, permission::POST_NOTIFICATIONS));

    let selector = DelegateSelector::standard(ApiLevel::Q);
    assert!(selector.is_granted(&device, permission::SCHEDULE_EXACT_ALARM));

    let selector = DelegateSelector::standard(ApiLevel::new(25));
    assert!(selector.is_granted(&device, permission::REQUEST_INSTALL_PACKAGES));
}

#[test]
fn test_everything_granted_before_runtime_permissions() {
    init_tracing();
    let selector = DelegateSelector::standard(ApiLevel::new(22));
    let device = FakeDevice::new();

    assert!(selector.is_granted(&device, permission::READ_EXTERNAL_STORAGE));
    assert!(selector.is_granted(&device, "com.example.custom.PERMISSION"));
    assert!(!selector.is_permanently_denied(&device, permission::READ_EXTERNAL_STORAGE));
    let intent = selector.resolve_intent(&device, permission::READ_EXTERNAL_STORAGE);
    assert_eq!(intent.action(), actions::APPLICATION_DETAILS_SETTINGS);
}

#[test]
fn test_unrecognized_identifier_is_total() {
    init_tracing();
    let selector = DelegateSelector::standard(ApiLevel::T);
    let device = FakeDevice::new();

    // Never a panic, always a definite answer.
    assert!(!selector.is_granted(&device, "com.example.custom.PERMISSION"));
    assert!(selector.is_permanently_denied(&device, "com.example.custom.PERMISSION"));
    let intent = selector.resolve_intent(&device, "com.example.custom.PERMISSION");
    assert_eq!(intent.action(), actions::APPLICATION_DETAILS_SETTINGS);
}

#[test]
fn test_settings_only_never_permanently_denied() {
    init_tracing();
    for runtime in [ApiLevel::M, ApiLevel::O, ApiLevel::R, ApiLevel::S, ApiLevel::T] {
        let selector = DelegateSelector::standard(runtime);
        let device = FakeDevice::new();
        for settings_only in [
            permission::SYSTEM_ALERT_WINDOW,
            permission::WRITE_SETTINGS,
            permission::REQUEST_INSTALL_PACKAGES,
            permission::MANAGE_EXTERNAL_STORAGE,
            permission::SCHEDULE_EXACT_ALARM,
        ] {
            assert!(
                !selector.is_permanently_denied(&device, settings_only),
                "{settings_only} at level {runtime} must not be permanently denied"
            );
        }
    }
}

#[test]
fn test_install_packages_gated_by_flag() {
    init_tracing();
    let selector = DelegateSelector::standard(ApiLevel::T);

    let device = FakeDevice::new().handling_action(actions::MANAGE_UNKNOWN_APP_SOURCES);
    assert!(!selector.is_granted(&device, permission::REQUEST_INSTALL_PACKAGES));
    let intent = selector.resolve_intent(&device, permission::REQUEST_INSTALL_PACKAGES);
    assert_eq!(intent.action(), actions::MANAGE_UNKNOWN_APP_SOURCES);
    assert_eq!(intent.data(), Some("package:com.example.host"));

    let device = FakeDevice::new().with_capability(PlatformCapability::InstallPackages);
    assert!(selector.is_granted(&device, permission::REQUEST_INSTALL_PACKAGES));
}

#[test]
fn test_exact_alarm_gated_by_flag() {
    init_tracing();
    let selector = DelegateSelector::standard(ApiLevel::S);

    let device = FakeDevice::new().handling_action(actions::REQUEST_SCHEDULE_EXACT_ALARM);
    assert!(!selector.is_granted(&device, permission::SCHEDULE_EXACT_ALARM));
    let intent = selector.resolve_intent(&device, permission::SCHEDULE_EXACT_ALARM);
    assert_eq!(intent.action(), actions::REQUEST_SCHEDULE_EXACT_ALARM);

    let device = FakeDevice::new().with_capability(PlatformCapability::ExactAlarms);
    assert!(selector.is_granted(&device, permission::SCHEDULE_EXACT_ALARM));
}

#[test]
fn test_notifications_track_enabled_flag_at_level_33() {
    init_tracing();
    let selector = DelegateSelector::standard(ApiLevel::T);

    let device = FakeDevice::new().with_capability(PlatformCapability::NotificationsEnabled);
    assert!(selector.is_granted(&device, permission::POST_NOTIFICATIONS));

    let device = FakeDevice::new().handling_action(actions::APP_NOTIFICATION_SETTINGS);
    assert!(!selector.is_granted(&device, permission::POST_NOTIFICATIONS));
    let intent = selector.resolve_intent(&device, permission::POST_NOTIFICATIONS);
    assert_eq!(intent.action(), actions::APP_NOTIFICATION_SETTINGS);
}

#[test]
fn test_notification_denial_uses_dangerous_permission_logic() {
    init_tracing();
    let selector = DelegateSelector::standard(ApiLevel::T);

    // Denied with rationale still available: not permanent.
    let device = FakeDevice::new().showing_rationale(permission::POST_NOTIFICATIONS);
    assert!(!selector.is_permanently_denied(&device, permission::POST_NOTIFICATIONS));

    // Denied with rationale suppressed: permanent.
    let device = FakeDevice::new();
    assert!(selector.is_permanently_denied(&device, permission::POST_NOTIFICATIONS));
}

#[test]
fn test_alias_spellings_answer_identically() {
    init_tracing();
    let spellings = [
        permission::ACTIVITY_RECOGNITION,
        permission::ACTIVITY_RECOGNITION_GMS,
    ];
    for runtime in [ApiLevel::new(25), ApiLevel::Q, ApiLevel::T] {
        let selector = DelegateSelector::standard(runtime);
        let granted_device = FakeDevice::new().grant(permission::ACTIVITY_RECOGNITION);
        let bare_device = FakeDevice::new();
        for spelling in spellings {
            assert_eq!(
                selector.is_granted(&granted_device, spelling),
                selector.is_granted(&granted_device, permission::ACTIVITY_RECOGNITION),
                "grant for {spelling} diverged at level {runtime}"
            );
            assert_eq!(
                selector.is_permanently_denied(&bare_device, spelling),
                selector.is_permanently_denied(&bare_device, permission::ACTIVITY_RECOGNITION),
                "denial for {spelling} diverged at level {runtime}"
            );
            assert_eq!(
                selector.resolve_intent(&bare_device, spelling),
                selector.resolve_intent(&bare_device, permission::ACTIVITY_RECOGNITION),
                "intent for {spelling} diverged at level {runtime}"
            );
        }
    }
}

#[test]
fn test_activity_recognition_below_boundary_is_granted() {
    init_tracing();
    let selector = DelegateSelector::standard(ApiLevel::new(28));
    let device = FakeDevice::new();
    assert!(selector.is_granted(&device, permission::ACTIVITY_RECOGNITION_GMS));
}

#[test]
fn test_resolved_intents_are_always_navigable_or_generic() {
    init_tracing();
    let permissions = [
        permission::MANAGE_EXTERNAL_STORAGE,
        permission::REQUEST_INSTALL_PACKAGES,
        permission::SCHEDULE_EXACT_ALARM,
        permission::POST_NOTIFICATIONS,
        permission::SYSTEM_ALERT_WINDOW,
        permission::WRITE_SETTINGS,
        permission::READ_EXTERNAL_STORAGE,
        "com.example.custom.PERMISSION",
    ];
    // A device with no specific settings screens at all.
    let device = FakeDevice::new();
    for runtime in [
        ApiLevel::new(22),
        ApiLevel::M,
        ApiLevel::O,
        ApiLevel::Q,
        ApiLevel::R,
        ApiLevel::S,
        ApiLevel::T,
    ] {
        let selector = DelegateSelector::standard(runtime);
        for perm in permissions {
            let intent = selector.resolve_intent(&device, perm);
            assert_eq!(
                intent.action(),
                permit_core::intent::actions::APPLICATION_DETAILS_SETTINGS,
                "{perm} at level {runtime} must degrade to the generic screen"
            );
        }
    }
}
