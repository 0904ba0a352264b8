// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Client configuration.

use std::fmt;
use std::time::Duration;

use crate::error::ConfigError;

/// Environment variable holding the access key.
pub const ENV_ACCESS_KEY: &str = "ECOFLOW_ACCESS_KEY";
/// Environment variable holding the secret key.
pub const ENV_SECRET_KEY: &str = "ECOFLOW_SECRET_KEY";
/// Environment variable holding the default device serial number.
pub const ENV_SERIAL_NUMBER: &str = "ECOFLOW_SERIAL_NUMBER";
/// Environment variable overriding the API base URL.
pub const ENV_BASE_URL: &str = "ECOFLOW_BASE_URL";

/// Access key and secret key issued by the `EcoFlow` developer portal.
///
/// The secret key never appears in `Debug` output.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    access_key: String,
    secret_key: String,
}

impl Credentials {
    /// Creates credentials from an access key and secret key.
    #[must_use]
    pub fn new(access_key: impl Into<String>, secret_key: impl Into<String>) -> Self {
        Self {
            access_key: access_key.into(),
            secret_key: secret_key.into(),
        }
    }

    /// Returns the access key.
    #[must_use]
    pub fn access_key(&self) -> &str {
        &self.access_key
    }

    /// Returns the secret key.
    #[must_use]
    pub fn secret_key(&self) -> &str {
        &self.secret_key
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("access_key", &self.access_key)
            .field("secret_key", &"<redacted>")
            .finish()
    }
}

/// Configuration for an [`EcoFlowClient`](crate::EcoFlowClient).
///
/// # Examples
///
/// ```
/// use ecoflow_lib::ClientConfig;
/// use std::time::Duration;
///
/// let config = ClientConfig::new("access", "secret")
///     .with_serial_number("R331ZEB4ZE123456")
///     .with_timeout(Duration::from_secs(5));
///
/// assert_eq!(config.base_url(), "https://api-a.ecoflow.com");
/// assert_eq!(config.serial_number(), Some("R331ZEB4ZE123456"));
/// ```
#[derive(Debug, Clone)]
pub struct ClientConfig {
    credentials: Credentials,
    serial_number: Option<String>,
    base_url: String,
    timeout: Duration,
}

impl ClientConfig {
    /// Default API base URL.
    pub const DEFAULT_BASE_URL: &'static str = "https://api-a.ecoflow.com";
    /// Default request timeout.
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

    /// Creates a configuration with the given keys and default settings.
    #[must_use]
    pub fn new(access_key: impl Into<String>, secret_key: impl Into<String>) -> Self {
        Self {
            credentials: Credentials::new(access_key, secret_key),
            serial_number: None,
            base_url: Self::DEFAULT_BASE_URL.to_string(),
            timeout: Self::DEFAULT_TIMEOUT,
        }
    }

    /// Loads the configuration from `ECOFLOW_*` environment variables.
    ///
    /// `ECOFLOW_ACCESS_KEY` and `ECOFLOW_SECRET_KEY` are required;
    /// `ECOFLOW_SERIAL_NUMBER` and `ECOFLOW_BASE_URL` are optional.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::MissingVariable` if a required variable is
    /// unset, or `ConfigError::Invalid` if a value is empty.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Loads the configuration through an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Same as [`ClientConfig::from_env`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |name: &'static str| -> Result<String, ConfigError> {
            let value = lookup(name).ok_or(ConfigError::MissingVariable(name))?;
            if value.trim().is_empty() {
                return Err(ConfigError::Invalid(format!("{name} is empty")));
            }
            Ok(value)
        };

        let mut config = Self::new(required(ENV_ACCESS_KEY)?, required(ENV_SECRET_KEY)?);
        if let Some(serial) = lookup(ENV_SERIAL_NUMBER).filter(|s| !s.trim().is_empty()) {
            config = config.with_serial_number(serial);
        }
        if let Some(base_url) = lookup(ENV_BASE_URL).filter(|s| !s.trim().is_empty()) {
            config = config.with_base_url(base_url);
        }
        Ok(config)
    }

    /// Sets the default device serial number.
    #[must_use]
    pub fn with_serial_number(mut self, serial_number: impl Into<String>) -> Self {
        self.serial_number = Some(serial_number.into());
        self
    }

    /// Sets the API base URL.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Sets the request timeout used by the HTTP transport.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Returns the credentials.
    #[must_use]
    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// Returns the default serial number, if set.
    #[must_use]
    pub fn serial_number(&self) -> Option<&str> {
        self.serial_number.as_deref()
    }

    /// Returns the API base URL.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns the request timeout.
    #[must_use]
    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}
