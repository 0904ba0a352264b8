// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! HTTP transport backed by reqwest.

use std::time::Duration;

use reqwest::Client;

use crate::error::ProtocolError;
use crate::protocol::{Method, RawResponse, SignedRequest, Transport};

/// HTTP transport for the `EcoFlow` cloud.
///
/// Cloning is cheap: the underlying connection pool is shared.
///
/// # Examples
///
/// ```no_run
/// use std::time::Duration;
/// use ecoflow_lib::protocol::HttpTransport;
///
/// let transport = HttpTransport::new(Duration::from_secs(5))?;
/// # Ok::<(), ecoflow_lib::error::ProtocolError>(())
/// ```
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    /// Default request timeout.
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

    /// Creates a transport with the given request timeout.
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP client cannot be created.
    pub fn new(timeout: Duration) -> Result<Self, ProtocolError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(ProtocolError::Http)?;

        Ok(Self { client })
    }

    /// Wraps an existing reqwest client.
    #[must_use]
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

impl Transport for HttpTransport {
    async fn execute(&self, request: &SignedRequest) -> Result<RawResponse, ProtocolError> {
        let url = reqwest::Url::parse(request.url())
            .map_err(|e| ProtocolError::InvalidAddress(format!("{}: {e}", request.url())))?;

        tracing::debug!(method = %request.method(), url = %url, "Sending HTTP request");

        let mut builder = match request.method() {
            Method::Get => self.client.get(url),
            Method::Put => self.client.put(url),
        };
        for (name, value) in request.headers() {
            builder = builder.header(name, value);
        }
        if let Some(body) = request.body() {
            tracing::debug!(body = %body, "Request body");
            builder = builder.body(body.to_string());
        }

        let response = builder.send().await.map_err(|e| {
            if e.is_connect() {
                ProtocolError::ConnectionFailed(format!("{}: {e}", request.url()))
            } else {
                ProtocolError::Http(e)
            }
        })?;
        let status = response.status().as_u16();
        let body = response.text().await.map_err(ProtocolError::Http)?;

        tracing::debug!(status, body = %body, "Received HTTP response");

        Ok(RawResponse::new(status, body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Credentials;
    use crate::protocol::RequestBuilder;

    #[tokio::test]
    async fn invalid_url_is_reported() {
        let transport = HttpTransport::new(HttpTransport::DEFAULT_TIMEOUT).unwrap();
        let request = RequestBuilder::new("not a url", "/x").sign(&Credentials::new("ak", "sk"));
        let err = transport.execute(&request).await.unwrap_err();
        assert!(matches!(err, ProtocolError::InvalidAddress(_)));
    }

    #[tokio::test]
    async fn unreachable_host_is_connection_failed() {
        let transport = HttpTransport::new(HttpTransport::DEFAULT_TIMEOUT).unwrap();
        let request = RequestBuilder::new("http://127.0.0.1:1", "/iot-open/sign/device/list")
            .sign(&Credentials::new("ak", "sk"));
        let err = transport.execute(&request).await.unwrap_err();
        match err {
            ProtocolError::ConnectionFailed(message) => assert!(message.contains("127.0.0.1:1")),
            other => panic!("expected connection failure, got {other:?}"),
        }
    }
}
