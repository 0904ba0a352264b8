// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! `EcoFlow` Lib - A Rust library to control `EcoFlow` portable power stations.
//!
//! This library talks to the `EcoFlow` IoT Open API: it discovers the devices
//! bound to an account, reads their full telemetry and sends power and
//! sub-mode commands.
//!
//! # Supported Operations
//!
//! - **Discovery**: list devices with name and online status
//! - **Telemetry**: read every quota reported by a device
//! - **Power control**: On, Standby, `ShutDown`
//! - **Sub-mode control**: Max, Eco, Sleep, Manual
//!
//! # Request Signing
//!
//! Every call is authenticated with an HMAC-SHA256 signature computed over
//! the sorted request parameters. See [`protocol::signer`] for the exact
//! canonical form and [`EcoFlowClient::test_call`] for a self-check against
//! the published reference vector.
//!
//! # Quick Start
//!
//! ```no_run
//! use ecoflow_lib::{ClientConfig, EcoFlowClient, SubMode};
//!
//! #[tokio::main]
//! async fn main() -> ecoflow_lib::Result<()> {
//!     let config = ClientConfig::new("my-access-key", "my-secret-key");
//!     let client = EcoFlowClient::new(config)?;
//!
//!     let devices = client.list_devices().await?;
//!     if let Some(device) = devices.iter().find(|d| d.is_online()) {
//!         client.power_on(&device.serial_number).await?;
//!         client.change_sub_mode(&device.serial_number, SubMode::Eco).await?;
//!
//!         if let Some(state) = client.get_full_state(&device.serial_number).await? {
//!             println!("{} quotas reported", state.len());
//!         }
//!     }
//!
//!     Ok(())
//! }
//! ```

mod client;
pub mod command;
pub mod config;
pub mod error;
pub mod protocol;
pub mod response;
pub mod types;

pub use client::{DEVICE_LIST_PATH, EcoFlowClient, QUOTA_ALL_PATH, QUOTA_PATH};
pub use command::{CommandEnvelope, ParamSource, Params, PowerStateParams, SubModeParams};
pub use config::{ClientConfig, Credentials};
pub use error::{
    ConfigError, Error, ParseError, ProtocolError, RemoteError, Result, ValueError,
};
#[cfg(feature = "http")]
pub use protocol::HttpTransport;
pub use protocol::{RawResponse, RequestBuilder, SignedRequest, Transport};
pub use response::{Device, FullState};
pub use types::{PowerState, SubMode};
