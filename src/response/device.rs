// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Device list entries.

use serde::{Deserialize, Serialize};

/// A device registered to the account.
///
/// The API returns entries like:
/// `{"sn": "R331ZEB4ZE123456", "deviceName": "Wave 3", "online": 1}`.
/// Additional fields are ignored.
///
/// # Examples
///
/// ```
/// use ecoflow_lib::response::Device;
///
/// let json = r#"{"sn": "R331ZEB4ZE123456", "deviceName": "Wave 3", "online": 1}"#;
/// let device: Device = serde_json::from_str(json).unwrap();
/// assert_eq!(device.serial_number, "R331ZEB4ZE123456");
/// assert!(device.is_online());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Device {
    /// Unique serial number.
    #[serde(rename = "sn")]
    pub serial_number: String,
    /// Display name chosen in the `EcoFlow` app.
    pub device_name: String,
    /// Online indicator as reported (`1` = online).
    pub online: i32,
}

impl Device {
    /// Returns `true` when the device reports itself online.
    #[must_use]
    pub fn is_online(&self) -> bool {
        self.online == 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offline_device() {
        let device: Device =
            serde_json::from_str(r#"{"sn":"X","deviceName":"Garage","online":0,"extra":true}"#)
                .unwrap();
        assert!(!device.is_online());
        assert_eq!(device.device_name, "Garage");
    }

    #[test]
    fn only_one_means_online() {
        let device: Device =
            serde_json::from_str(r#"{"sn":"X","deviceName":"Garage","online":2}"#).unwrap();
        assert!(!device.is_online());
    }
}
