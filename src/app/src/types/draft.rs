use serde::{Deserialize, Serialize};

use super::device::Device;

/// Name/MAC pair the user is composing before pressing wake.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct WakeDraft {
    pub name: String,
    pub mac_address: String,
}

impl WakeDraft {
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn set_mac_address(&mut self, mac_address: impl Into<String>) {
        self.mac_address = mac_address.into();
    }

    /// Independent copy of the draft, safe to hand to an in-flight request.
    pub fn snapshot(&self) -> Device {
        Device::new(self.name.clone(), self.mac_address.clone())
    }

    pub fn clear(&mut self) {
        self.name.clear();
        self.mac_address.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.mac_address.is_empty()
    }
}
