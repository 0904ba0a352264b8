// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Construction of signed API requests.

use std::fmt;

use crate::command::Params;
use crate::config::Credentials;
use crate::protocol::signer::{self, Signature};

/// Content type attached to command bodies.
pub const JSON_CONTENT_TYPE: &str = "application/json;charset=UTF-8";

/// HTTP method of a signed request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    /// Parameterless read.
    Get,
    /// Body-carrying write.
    Put,
}

impl Method {
    /// Returns the method name as sent on the wire.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Put => "PUT",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A fully authenticated request, ready for a transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedRequest {
    method: Method,
    url: String,
    body: Option<String>,
    signature: Signature,
}

impl SignedRequest {
    /// Returns the HTTP method.
    #[must_use]
    pub fn method(&self) -> Method {
        self.method
    }

    /// Returns the absolute URL.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Returns the JSON body, if this is a command.
    #[must_use]
    pub fn body(&self) -> Option<&str> {
        self.body.as_deref()
    }

    /// Returns `true` when the request carries a command body.
    #[must_use]
    pub fn is_command(&self) -> bool {
        self.body.is_some()
    }

    /// Returns the signature attached to this request.
    #[must_use]
    pub fn signature(&self) -> &Signature {
        &self.signature
    }

    /// Returns all headers to send, authentication first.
    #[must_use]
    pub fn headers(&self) -> Vec<(&'static str, String)> {
        let mut headers = self.signature.headers().to_vec();
        if self.body.is_some() {
            headers.push(("Content-Type", JSON_CONTENT_TYPE.to_string()));
        }
        headers
    }

    /// Looks up a header value by name (case-insensitive).
    #[must_use]
    pub fn header(&self, name: &str) -> Option<String> {
        self.headers()
            .into_iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value)
    }
}

/// Builder for a [`SignedRequest`].
///
/// The signature is computed over the logical parameter list, never over the
/// literal query string of the path.
///
/// # Examples
///
/// ```
/// use ecoflow_lib::config::Credentials;
/// use ecoflow_lib::protocol::{Method, RequestBuilder};
///
/// let credentials = Credentials::new("ak", "sk");
/// let request = RequestBuilder::new("https://api-a.ecoflow.com", "/iot-open/sign/device/list")
///     .nonce("123456")
///     .timestamp(1_700_000_000_000)
///     .sign(&credentials);
///
/// assert_eq!(request.method(), Method::Get);
/// assert_eq!(request.url(), "https://api-a.ecoflow.com/iot-open/sign/device/list");
/// assert_eq!(request.header("nonce").as_deref(), Some("123456"));
/// ```
#[derive(Debug, Clone)]
pub struct RequestBuilder {
    base_url: String,
    path: String,
    params: Params,
    body: Option<String>,
    nonce: Option<String>,
    timestamp: Option<i64>,
}

impl RequestBuilder {
    /// Starts a request for `path` under `base_url`.
    #[must_use]
    pub fn new(base_url: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            path: path.into(),
            params: Vec::new(),
            body: None,
            nonce: None,
            timestamp: None,
        }
    }

    /// Sets the logical parameters covered by the signature.
    #[must_use]
    pub fn params(mut self, params: Params) -> Self {
        self.params = params;
        self
    }

    /// Attaches a JSON body, turning the request into a `PUT`.
    #[must_use]
    pub fn json_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Fixes the nonce instead of generating one.
    #[must_use]
    pub fn nonce(mut self, nonce: impl Into<String>) -> Self {
        self.nonce = Some(nonce.into());
        self
    }

    /// Fixes the timestamp instead of reading the clock.
    #[must_use]
    pub fn timestamp(mut self, timestamp: i64) -> Self {
        self.timestamp = Some(timestamp);
        self
    }

    /// Signs the request with the given credentials.
    #[must_use]
    pub fn sign(self, credentials: &Credentials) -> SignedRequest {
        let timestamp = self.timestamp.unwrap_or_else(signer::current_timestamp);
        let nonce = self.nonce.unwrap_or_else(signer::generate_nonce);
        let signature = signer::sign(
            &self.params,
            credentials.access_key(),
            credentials.secret_key(),
            timestamp,
            &nonce,
        );
        let method = if self.body.is_some() {
            Method::Put
        } else {
            Method::Get
        };

        SignedRequest {
            method,
            url: format!("{}{}", self.base_url.trim_end_matches('/'), self.path),
            body: self.body,
            signature,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::signer::reference;

    #[test]
    fn read_request_is_get_without_body() {
        let request = RequestBuilder::new("https://api-a.ecoflow.com", "/iot-open/sign/device/list")
            .sign(&Credentials::new("ak", "sk"));
        assert_eq!(request.method(), Method::Get);
        assert!(!request.is_command());
        assert!(request.header("Content-Type").is_none());
        assert_eq!(request.headers().len(), 4);
    }

    #[test]
    fn command_request_is_put_with_json_content_type() {
        let request =
            RequestBuilder::new("https://api-a.ecoflow.com", "/iot-open/sign/device/quota")
                .json_body(r#"{"sn":"X"}"#)
            .sign(&Credentials::new("ak", "sk"));
        assert_eq!(request.method(), Method::Put);
        assert_eq!(request.body(), Some(r#"{"sn":"X"}"#));
        assert_eq!(
            request.header("content-type").as_deref(),
            Some("application/json;charset=UTF-8")
        );
    }

    #[test]
    fn signature_covers_params_not_query_string() {
        let credentials = Credentials::new(reference::ACCESS_KEY, reference::SECRET_KEY);
        let request = RequestBuilder::new("https://example.test", "/path?ignored=1")
            .params(reference::params())
            .nonce(reference::NONCE)
            .timestamp(reference::TIMESTAMP)
            .sign(&credentials);
        assert_eq!(request.header("sign").as_deref(), Some(reference::EXPECTED_SIGN));
        assert_eq!(request.url(), "https://example.test/path?ignored=1");
    }

    #[test]
    fn headers_carry_the_signed_nonce_and_timestamp() {
        let request = RequestBuilder::new("https://example.test/", "/x")
            .nonce("222333")
            .timestamp(77)
            .sign(&Credentials::new("ak", "sk"));
        assert_eq!(request.url(), "https://example.test/x");
        assert_eq!(request.header("accessKey").as_deref(), Some("ak"));
        assert_eq!(request.header("nonce").as_deref(), Some("222333"));
        assert_eq!(request.header("timestamp").as_deref(), Some("77"));
        let expected = signer::sign(&[], "ak", "sk", 77, "222333");
        assert_eq!(request.signature(), &expected);
    }
}
