// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Request/response protocol for the `EcoFlow` IoT Open API.
//!
//! # Components
//!
//! - [`signer`]: canonical string and HMAC-SHA256 signature
//! - [`RequestBuilder`]: turns a path, parameters and optional body into a
//!   [`SignedRequest`]
//! - [`decode`]: turns a status and raw body into a typed payload or error
//! - [`Transport`]: the "send request, receive status + body" seam
//! - [`HttpTransport`]: reqwest-backed transport (feature `http`)
//!
//! Signing and decoding are synchronous and pure; only [`Transport::execute`]
//! suspends.

mod decoder;
#[cfg(feature = "http")]
mod http;
mod request;
pub mod signer;

pub use decoder::{DataEnvelope, HTTP_OK, SUCCESS_CODE, SimpleEnvelope, decode};
#[cfg(feature = "http")]
pub use http::HttpTransport;
pub use request::{JSON_CONTENT_TYPE, Method, RequestBuilder, SignedRequest};

use crate::error::ProtocolError;

/// Raw answer of a transport: status code and body text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    /// HTTP status code.
    pub status: u16,
    /// Response body as text.
    pub body: String,
}

impl RawResponse {
    /// Creates a raw response.
    #[must_use]
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

/// Trait for transports that can deliver signed requests.
///
/// Implementations own connection pooling, TLS and timeouts. The client adds
/// no retries on top.
#[allow(async_fn_in_trait)]
pub trait Transport {
    /// Sends the request and returns the raw response.
    ///
    /// # Errors
    ///
    /// Returns `ProtocolError` if the exchange fails before a response
    /// is received.
    async fn execute(&self, request: &SignedRequest) -> Result<RawResponse, ProtocolError>;
}
