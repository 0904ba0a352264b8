// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for the `EcoFlow` library.
//!
//! The hierarchy separates three failure families that callers usually need
//! to tell apart:
//!
//! - [`RemoteError`]: the cloud API answered and rejected the request
//! - [`ParseError`]: the cloud API answered with data that fits no known envelope
//! - [`ProtocolError`]: the exchange itself failed (connection, TLS, address)

use thiserror::Error;

/// The main error type for this library.
#[derive(Debug, Error)]
pub enum Error {
    /// The server rejected the request.
    #[error("remote error: {0}")]
    Remote(#[from] RemoteError),

    /// The response body could not be decoded.
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    /// The HTTP exchange failed.
    #[error("protocol error: {0}")]
    Protocol(#[from] ProtocolError),

    /// The client configuration is incomplete or invalid.
    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    /// A value could not be mapped to a known enumeration member.
    #[error("value error: {0}")]
    Value(#[from] ValueError),
}

/// A rejection reported by the `EcoFlow` cloud.
///
/// The error keeps the raw, undecoded response body. Queries and commands
/// answer with different envelope shapes, so no structured form is kept.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("EcoFlow rejected the request (HTTP {status}): {body}")]
pub struct RemoteError {
    status: u16,
    body: String,
}

impl RemoteError {
    /// Creates a remote error from an HTTP status and the raw body text.
    #[must_use]
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Returns the HTTP status code of the rejected exchange.
    #[must_use]
    pub fn status(&self) -> u16 {
        self.status
    }

    /// Returns the response body exactly as received.
    #[must_use]
    pub fn body(&self) -> &str {
        &self.body
    }
}

/// Errors related to decoding `EcoFlow` responses or encoding requests.
#[derive(Debug, Error)]
pub enum ParseError {
    /// JSON serialization or parsing failed.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// The body matched neither the data envelope nor the simple envelope.
    #[error("unrecognized response envelope ({source}): {body}")]
    Envelope {
        /// The raw response body.
        body: String,
        /// The failure from the last envelope shape attempted.
        #[source]
        source: serde_json::Error,
    },
}

/// Errors related to the HTTP transport.
#[derive(Debug, Error)]
pub enum ProtocolError {
    /// HTTP request failed.
    #[cfg(feature = "http")]
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Connection to the API failed.
    #[error("connection failed: {0}")]
    ConnectionFailed(String),

    /// Invalid URL or address.
    #[error("invalid address: {0}")]
    InvalidAddress(String),
}

/// Errors related to client configuration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A required environment variable is not set.
    #[error("environment variable {0} is not set")]
    MissingVariable(&'static str),

    /// No default device serial number was configured.
    #[error("no default serial number configured")]
    MissingSerialNumber,

    /// A configuration value is malformed.
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

/// Errors related to mapping values onto enumerations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValueError {
    /// An unknown power state name or code was provided.
    #[error("invalid power state: {0}")]
    InvalidPowerState(String),

    /// An unknown sub-mode name or code was provided.
    #[error("invalid sub-mode: {0}")]
    InvalidSubMode(String),
}

/// A specialized Result type for this library.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remote_error_keeps_body_verbatim() {
        let body = r#"{"code":"8521","message":"signature is wrong"}"#;
        let err = RemoteError::new(200, body);
        assert_eq!(err.body(), body);
        assert_eq!(err.status(), 200);
        assert_eq!(
            err.to_string(),
            format!("EcoFlow rejected the request (HTTP 200): {body}")
        );
    }

    #[test]
    fn error_from_remote_error() {
        let err: Error = RemoteError::new(500, "boom").into();
        assert!(matches!(err, Error::Remote(ref e) if e.body() == "boom"));
    }

    #[test]
    fn config_error_display() {
        let err = ConfigError::MissingVariable("ECOFLOW_ACCESS_KEY");
        assert_eq!(
            err.to_string(),
            "environment variable ECOFLOW_ACCESS_KEY is not set"
        );
    }

    #[test]
    fn value_error_display() {
        let err = ValueError::InvalidSubMode("turbo".to_string());
        assert_eq!(err.to_string(), "invalid sub-mode: turbo");
    }
}
