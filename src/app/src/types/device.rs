use serde::{Deserialize, Serialize};

/// A wake-on-LAN target. Identity is the MAC address, the name is cosmetic.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Device {
    #[serde(default)]
    pub name: String,
    pub mac_address: String,
}

impl Device {
    pub fn new(name: impl Into<String>, mac_address: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            mac_address: mac_address.into(),
        }
    }
}

/// Body of `GET /api/v1/wake`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct DeviceList {
    #[serde(default)]
    pub devices: Vec<Device>,
}

/// Local copy of the devices known to the server.
///
/// Entries are unique by MAC address. Every `add` leaves the sequence sorted
/// ascending by MAC address (byte-wise, case-sensitive, no normalization).
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct DeviceRegistry {
    devices: Vec<Device>,
}

impl DeviceRegistry {
    pub fn list(&self) -> &[Device] {
        &self.devices
    }

    pub fn contains(&self, mac_address: &str) -> bool {
        self.devices.iter().any(|d| d.mac_address == mac_address)
    }

    /// Insert `device` unless its MAC address is already registered.
    ///
    /// The first registration wins, a later one with the same address is
    /// ignored even if its name differs. Returns `true` if inserted.
    pub fn add(&mut self, device: Device) -> bool {
        if self.contains(&device.mac_address) {
            return false;
        }
        self.devices.push(device);
        self.devices.sort_by(|a, b| a.mac_address.cmp(&b.mac_address));
        true
    }

    /// Remove the device with `mac_address`. Returns `true` if one was removed.
    pub fn remove(&mut self, mac_address: &str) -> bool {
        let before = self.devices.len();
        self.devices.retain(|d| d.mac_address != mac_address);
        self.devices.len() != before
    }

    /// Replace the whole registry with a server listing, order kept as received.
    pub fn replace_all(&mut self, devices: Vec<Device>) {
        self.devices = devices;
    }
}

impl From<Vec<Device>> for DeviceRegistry {
    fn from(devices: Vec<Device>) -> Self {
        Self { devices }
    }
}
