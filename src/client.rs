// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! High-level client for `EcoFlow` devices.

use serde::de::DeserializeOwned;

use crate::command::{CommandEnvelope, ParamSource, Params, PowerStateParams, SubModeParams};
use crate::config::{ClientConfig, Credentials};
use crate::error::{ConfigError, ParseError, Result};
use crate::protocol::signer::reference;
use crate::protocol::{RequestBuilder, SignedRequest, Transport, decode};
use crate::response::{Device, FullState};
use crate::types::{PowerState, SubMode};

#[cfg(feature = "http")]
use crate::protocol::HttpTransport;

/// Path of the device list query.
pub const DEVICE_LIST_PATH: &str = "/iot-open/sign/device/list";
/// Path of the command endpoint.
pub const QUOTA_PATH: &str = "/iot-open/sign/device/quota";
/// Path of the full telemetry query.
pub const QUOTA_ALL_PATH: &str = "/iot-open/sign/device/quota/all";

/// Client for the `EcoFlow` IoT Open API.
///
/// Each operation is one independent signed request/response exchange.
/// The client keeps no mutable state and performs no retries.
///
/// # Examples
///
/// ```no_run
/// use ecoflow_lib::{ClientConfig, EcoFlowClient, PowerState};
///
/// #[tokio::main]
/// async fn main() -> ecoflow_lib::Result<()> {
///     let client = EcoFlowClient::new(ClientConfig::from_env()?)?;
///
///     for device in client.list_devices().await? {
///         println!(
///             "{} ({}) online={}",
///             device.device_name,
///             device.serial_number,
///             device.is_online()
///         );
///     }
///
///     client.change_power_state("R331ZEB4ZE123456", PowerState::On).await?;
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct EcoFlowClient<T> {
    config: ClientConfig,
    transport: T,
}

#[cfg(feature = "http")]
impl EcoFlowClient<HttpTransport> {
    /// Creates a client using the reqwest transport.
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP client cannot be created.
    pub fn new(config: ClientConfig) -> Result<Self> {
        let transport = HttpTransport::new(config.timeout())?;
        Ok(Self::with_transport(config, transport))
    }
}

impl<T: Transport> EcoFlowClient<T> {
    /// Creates a client using a custom transport.
    #[must_use]
    pub fn with_transport(config: ClientConfig, transport: T) -> Self {
        Self { config, transport }
    }

    /// Returns the client configuration.
    #[must_use]
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Returns the configured default serial number.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::MissingSerialNumber` if none was configured.
    pub fn default_serial_number(&self) -> Result<&str> {
        self.config
            .serial_number()
            .ok_or_else(|| ConfigError::MissingSerialNumber.into())
    }

    /// Lists the devices bound to the account.
    ///
    /// A success without payload yields an empty list.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or is rejected.
    pub async fn list_devices(&self) -> Result<Vec<Device>> {
        let request = self.request(DEVICE_LIST_PATH).sign(self.credentials());
        let devices: Option<Vec<Device>> = self.call(&request).await?;
        Ok(devices.unwrap_or_default())
    }

    /// Changes the power state of a device.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or is rejected.
    pub async fn change_power_state(&self, serial_number: &str, state: PowerState) -> Result<()> {
        tracing::debug!(serial_number, state = %state, "Changing power state");
        self.send_command(CommandEnvelope::new(
            serial_number,
            PowerStateParams::from(state),
        ))
        .await
    }

    /// Changes the operating sub-mode of a device.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or is rejected.
    pub async fn change_sub_mode(&self, serial_number: &str, mode: SubMode) -> Result<()> {
        tracing::debug!(serial_number, mode = %mode, "Changing sub-mode");
        self.send_command(CommandEnvelope::new(serial_number, SubModeParams::from(mode)))
            .await
    }

    /// Turns a device on.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or is rejected.
    pub async fn power_on(&self, serial_number: &str) -> Result<()> {
        self.change_power_state(serial_number, PowerState::On).await
    }

    /// Puts a device in standby.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or is rejected.
    pub async fn standby(&self, serial_number: &str) -> Result<()> {
        self.change_power_state(serial_number, PowerState::Standby).await
    }

    /// Shuts a device down.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or is rejected.
    pub async fn shut_down(&self, serial_number: &str) -> Result<()> {
        self.change_power_state(serial_number, PowerState::ShutDown).await
    }

    /// Reads the full telemetry of a device.
    ///
    /// Returns `None` when the device reports nothing.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or is rejected.
    pub async fn get_full_state(&self, serial_number: &str) -> Result<Option<FullState>> {
        let path = format!(
            "{QUOTA_ALL_PATH}?sn={}",
            urlencoding::encode(serial_number)
        );
        let params: Params = vec![("sn".to_string(), serial_number.to_string())];
        let request = self.request(path).params(params).sign(self.credentials());
        self.call(&request).await
    }

    /// Signs the reference vector and returns the `sign` header value.
    ///
    /// Uses fixed keys, nonce, timestamp and serial number; nothing is sent.
    /// The result should equal [`reference::EXPECTED_SIGN`].
    #[must_use]
    pub fn test_call(&self) -> String {
        let request = RequestBuilder::new(self.config.base_url(), "/")
            .params(reference::params())
            .nonce(reference::NONCE)
            .timestamp(reference::TIMESTAMP)
            .sign(&Credentials::new(
                reference::ACCESS_KEY,
                reference::SECRET_KEY,
            ));
        request.signature().sign().to_string()
    }

    async fn send_command<P: ParamSource>(&self, command: CommandEnvelope<P>) -> Result<()> {
        let body = command.to_json().map_err(ParseError::from)?;
        let request = self
            .request(QUOTA_PATH)
            .params(command.to_params())
            .json_body(body)
            .sign(self.credentials());
        // The payload type is irrelevant: commands never decode one.
        let _: Option<serde_json::Value> = self.call(&request).await?;
        Ok(())
    }

    async fn call<R: DeserializeOwned>(&self, request: &SignedRequest) -> Result<Option<R>> {
        let response = self.transport.execute(request).await?;
        decode(response.status, &response.body, request.is_command())
    }

    fn request(&self, path: impl Into<String>) -> RequestBuilder {
        RequestBuilder::new(self.config.base_url(), path)
    }

    fn credentials(&self) -> &Credentials {
        self.config.credentials()
    }
}
