// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Request signing for the `EcoFlow` IoT Open API.
//!
//! Every request carries four headers: `accessKey`, `nonce`, `timestamp` and
//! `sign`. The signature is an HMAC-SHA256 over a canonical string:
//!
//! 1. the logical parameters, stably sorted by key, percent-encoded and
//!    joined as `key=value&...`
//! 2. followed by `accessKey=<ak>&nonce=<nonce>&timestamp=<ts>` (unsorted)
//!
//! The digest is keyed with the secret key and rendered as lowercase hex.
//! The server recomputes the same string, so any byte of difference in
//! ordering or encoding yields a rejected call.

use hmac::{Hmac, Mac};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// Lower bound (inclusive) of generated nonces.
pub const NONCE_MIN: u32 = 100_000;
/// Upper bound (exclusive) of generated nonces.
pub const NONCE_MAX: u32 = 999_999;

/// Header carrying the access key.
pub const HEADER_ACCESS_KEY: &str = "accessKey";
/// Header carrying the nonce.
pub const HEADER_NONCE: &str = "nonce";
/// Header carrying the timestamp.
pub const HEADER_TIMESTAMP: &str = "timestamp";
/// Header carrying the signature.
pub const HEADER_SIGN: &str = "sign";

/// The result of signing one request.
///
/// Holds the nonce/timestamp pair the signature was computed from, so the
/// headers attached to the request always match the signature.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Signature {
    access_key: String,
    nonce: String,
    timestamp: i64,
    sign: String,
}

impl Signature {
    /// Returns the access key header value.
    #[must_use]
    pub fn access_key(&self) -> &str {
        &self.access_key
    }

    /// Returns the nonce header value.
    #[must_use]
    pub fn nonce(&self) -> &str {
        &self.nonce
    }

    /// Returns the timestamp in epoch milliseconds.
    #[must_use]
    pub fn timestamp(&self) -> i64 {
        self.timestamp
    }

    /// Returns the lowercase hex signature.
    #[must_use]
    pub fn sign(&self) -> &str {
        &self.sign
    }

    /// Returns the four authentication headers in wire order.
    #[must_use]
    pub fn headers(&self) -> [(&'static str, String); 4] {
        [
            (HEADER_ACCESS_KEY, self.access_key.clone()),
            (HEADER_NONCE, self.nonce.clone()),
            (HEADER_TIMESTAMP, self.timestamp.to_string()),
            (HEADER_SIGN, self.sign.clone()),
        ]
    }
}

/// Generates a random 6-digit decimal nonce.
#[must_use]
pub fn generate_nonce() -> String {
    rand::random_range(NONCE_MIN..NONCE_MAX).to_string()
}

/// Returns the current time in epoch milliseconds.
#[must_use]
pub fn current_timestamp() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// Percent-encodes one query component the way the API's reference encoder does.
///
/// Unreserved characters are ASCII alphanumerics and `*-._`. `urlencoding`
/// treats `~` as unreserved and `*` as reserved, so both are swapped back.
/// Every `%` in its output starts a full escape, so `%2A` only ever stands
/// for `*`.
fn encode_component(raw: &str) -> String {
    urlencoding::encode(raw)
        .replace('~', "%7E")
        .replace("%2A", "*")
}

/// Builds the canonical string that is fed to the HMAC.
///
/// Duplicate keys are kept as-is and keep their relative order.
///
/// # Examples
///
/// ```
/// use ecoflow_lib::protocol::signer::canonical_string;
///
/// let params = vec![
///     ("sn".to_string(), "ABC".to_string()),
///     ("id".to_string(), "1".to_string()),
/// ];
/// assert_eq!(
///     canonical_string(&params, "ak", "123456", 1000),
///     "id=1&sn=ABC&accessKey=ak&nonce=123456&timestamp=1000"
/// );
/// assert_eq!(
///     canonical_string(&[], "ak", "123456", 1000),
///     "accessKey=ak&nonce=123456&timestamp=1000"
/// );
/// ```
#[must_use]
pub fn canonical_string(
    params: &[(String, String)],
    access_key: &str,
    nonce: &str,
    timestamp: i64,
) -> String {
    let mut sorted: Vec<&(String, String)> = params.iter().collect();
    // `sort_by` is stable: equal keys keep their original order.
    sorted.sort_by(|a, b| a.0.cmp(&b.0));

    let mut canonical = sorted
        .iter()
        .map(|(key, value)| {
            format!(
                "{}={}",
                encode_component(key),
                encode_component(value)
            )
        })
        .collect::<Vec<_>>()
        .join("&");

    if !canonical.is_empty() {
        canonical.push('&');
    }
    canonical.push_str(&format!(
        "accessKey={access_key}&nonce={nonce}&timestamp={timestamp}"
    ));
    canonical
}

/// Signs a parameter list with explicit nonce and timestamp.
///
/// This is a pure function: equal inputs always produce equal signatures.
///
/// # Panics
///
/// Never in practice; HMAC accepts keys of any length.
#[must_use]
pub fn sign(
    params: &[(String, String)],
    access_key: &str,
    secret_key: &str,
    timestamp: i64,
    nonce: &str,
) -> Signature {
    let canonical = canonical_string(params, access_key, nonce, timestamp);

    tracing::debug!(
        param_count = params.len(),
        canonical_len = canonical.len(),
        "Signing request"
    );

    let mut mac = HmacSha256::new_from_slice(secret_key.as_bytes())
        .expect("HMAC accepts keys of any length");
    mac.update(canonical.as_bytes());
    let digest = mac.finalize().into_bytes();

    Signature {
        access_key: access_key.to_string(),
        nonce: nonce.to_string(),
        timestamp,
        sign: format!("{digest:x}"),
    }
}

/// Signs a parameter list with a fresh nonce and the current time.
#[must_use]
pub fn sign_now(params: &[(String, String)], access_key: &str, secret_key: &str) -> Signature {
    sign(
        params,
        access_key,
        secret_key,
        current_timestamp(),
        &generate_nonce(),
    )
}

/// Fixed inputs of the published signing example.
pub mod reference {
    /// Access key of the reference vector.
    pub const ACCESS_KEY: &str = "Fp4SvIprYSDPXtYJidEtUAd1o";
    /// Secret key of the reference vector.
    pub const SECRET_KEY: &str = "WIbFEKre0s6sLnh4ei7SPUeYnptHG6V";
    /// Nonce of the reference vector.
    pub const NONCE: &str = "345164";
    /// Timestamp of the reference vector.
    pub const TIMESTAMP: i64 = 1_671_171_709_428;
    /// Device serial of the reference vector.
    pub const SERIAL_NUMBER: &str = "123456789";
    /// Expected signature of the reference vector.
    pub const EXPECTED_SIGN: &str =
        "07c13b65e037faf3b153d51613638fa80003c4c38d2407379a7f52851af1473e";

    /// Parameters of the reference vector.
    #[must_use]
    pub fn params() -> Vec<(String, String)> {
        [
            ("params.cmdSet", "11"),
            ("params.eps", "0"),
            ("params.id", "24"),
            ("sn", SERIAL_NUMBER),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
    }
}

/// Signs the reference vector and returns its signature.
///
/// Compare against [`reference::EXPECTED_SIGN`] to check that this build
/// canonicalizes and hashes exactly like the server.
#[must_use]
pub fn self_test_signature() -> String {
    sign(
        &reference::params(),
        reference::ACCESS_KEY,
        reference::SECRET_KEY,
        reference::TIMESTAMP,
        reference::NONCE,
    )
    .sign
}
