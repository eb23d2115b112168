use erm_core::AllocationPolicy;

use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CapacityConfig {
    /// Policy used for displayed allocation when a request does not name one.
    /// Conflict validation always uses temporal overlap and ignores this.
    pub display_policy: AllocationPolicy,
}
