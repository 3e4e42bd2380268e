//! Shared test support: a configurable fake device.

use permit_core::intent::SettingsIntent;
use permit_core::platform::{HostActivity, HostContext, PlatformCapability};
use std::collections::HashSet;

/// A simulated device: grant table, capability flags, registered settings
/// screens, and rationale state.
#[derive(Debug, Default)]
pub struct FakeDevice {
    granted: HashSet<String>,
    capabilities: HashSet<PlatformCapability>,
    handled_actions: HashSet<String>,
    rationale: HashSet<String>,
}

impl FakeDevice {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn grant(mut self, permission: &str) -> Self {
        self.granted.insert(permission.to_string());
        self
    }

    pub fn with_capability(mut self, capability: PlatformCapability) -> Self {
        self.capabilities.insert(capability);
        self
    }

    pub fn handling_action(mut self, action: &str) -> Self {
        self.handled_actions.insert(action.to_string());
        self
    }

    pub fn showing_rationale(mut self, permission: &str) -> Self {
        self.rationale.insert(permission.to_string());
        self
    }
}

impl HostContext for FakeDevice {
    fn package_name(&self) -> &str {
        "com.example.host"
    }

    fn is_native_permission_granted(&self, permission: &str) -> bool {
        self.granted.contains(permission)
    }

    fn has_capability(&self, capability: PlatformCapability) -> bool {
        self.capabilities.contains(&capability)
    }

    fn has_intent_handler(&self, intent: &SettingsIntent) -> bool {
        self.handled_actions.contains(intent.action())
    }
}

impl HostActivity for FakeDevice {
    fn should_show_rationale(&self, permission: &str) -> bool {
        self.rationale.contains(permission)
    }
}

/// Install a test subscriber once so failing runs show dispatch logs.
pub fn init_tracing() {
    use tracing_subscriber::EnvFilter;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
