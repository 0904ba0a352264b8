// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! `EcoFlow` command definitions.
//!
//! A command is a write that changes device state. It travels twice: once as
//! the JSON body of a `PUT`, and once flattened into string pairs that feed
//! the request signature. Both forms come from the same [`CommandEnvelope`].
//!
//! # Available Commands
//!
//! | Payload | `operateType` | Flattened key |
//! |---------|---------------|---------------|
//! | [`PowerStateParams`] | `powerMode` | `params.powerMode` |
//! | [`SubModeParams`] | `subMode` | `params.subMode` |
//!
//! # Examples
//!
//! ```
//! use ecoflow_lib::command::{CommandEnvelope, PowerStateParams};
//! use ecoflow_lib::types::PowerState;
//!
//! let cmd = CommandEnvelope::new("R331ZEB4ZE123456", PowerStateParams::from(PowerState::On))
//!     .with_id(1_700_000_000_000);
//!
//! let params = cmd.to_params();
//! assert_eq!(params[0], ("id".to_string(), "1700000000000".to_string()));
//! assert_eq!(params[5], ("params.powerMode".to_string(), "1".to_string()));
//! ```

mod power;
mod sub_mode;

pub use power::PowerStateParams;
pub use sub_mode::SubModeParams;

use serde::Serialize;

/// An ordered list of string key/value pairs used for signing.
pub type Params = Vec<(String, String)>;

/// A command payload that knows how to flatten itself for signing.
pub trait ParamSource: Serialize {
    /// The `operateType` tag identifying this payload on the wire.
    const OPERATE_TYPE: &'static str;

    /// Returns this payload's own pairs, keyed `params.<field>`.
    fn to_params(&self) -> Params;
}

/// Protocol version sent with every command.
pub const PROTOCOL_VERSION: &str = "1.0";

/// Module type sent with every command.
pub const MODULE_TYPE: u8 = 1;

/// One outbound command.
///
/// Serializes to the JSON body expected by `/iot-open/sign/device/quota`.
/// The `id` is taken from the wall clock in milliseconds and is only an
/// opaque per-call tag; the server does not deduplicate on it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommandEnvelope<P> {
    id: i64,
    version: &'static str,
    #[serde(rename = "sn")]
    serial_number: String,
    module_type: u8,
    operate_type: &'static str,
    params: P,
}

impl<P: ParamSource> CommandEnvelope<P> {
    /// Creates a command for the given device with a time-derived id.
    #[must_use]
    pub fn new(serial_number: impl Into<String>, params: P) -> Self {
        Self {
            id: chrono::Utc::now().timestamp_millis(),
            version: PROTOCOL_VERSION,
            serial_number: serial_number.into(),
            module_type: MODULE_TYPE,
            operate_type: P::OPERATE_TYPE,
            params,
        }
    }

    /// Replaces the command id.
    #[must_use]
    pub fn with_id(mut self, id: i64) -> Self {
        self.id = id;
        self
    }

    /// Returns the command id.
    #[must_use]
    pub fn id(&self) -> i64 {
        self.id
    }

    /// Returns the target device serial number.
    #[must_use]
    pub fn serial_number(&self) -> &str {
        &self.serial_number
    }

    /// Returns the `operateType` tag.
    #[must_use]
    pub fn operate_type(&self) -> &'static str {
        self.operate_type
    }

    /// Returns the command-specific payload.
    #[must_use]
    pub fn params(&self) -> &P {
        &self.params
    }

    /// Flattens the command into signing pairs.
    ///
    /// The envelope fields always come first in the order `id`, `version`,
    /// `sn`, `moduleType`, `operateType`, followed by the payload pairs.
    #[must_use]
    pub fn to_params(&self) -> Params {
        let mut pairs = vec![
            ("id".to_string(), self.id.to_string()),
            ("version".to_string(), self.version.to_string()),
            ("sn".to_string(), self.serial_number.clone()),
            ("moduleType".to_string(), self.module_type.to_string()),
            ("operateType".to_string(), self.operate_type.to_string()),
        ];
        pairs.extend(self.params.to_params());
        pairs
    }

    /// Serializes the command as the JSON request body.
    ///
    /// # Errors
    ///
    /// Returns `serde_json::Error` if the payload fails to serialize.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
