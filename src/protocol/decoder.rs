// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Decoding of `EcoFlow` response envelopes.
//!
//! The API answers with one of two shapes:
//!
//! - data envelope: `{"code": "...", "message": "...", "data": <T>}` (queries)
//! - simple envelope: `{"code": "...", "message": "..."}` (commands, failures)
//!
//! A code of `"0"` means success. Unknown fields are ignored.

use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::error::{Error, ParseError, RemoteError};

/// HTTP status the API uses for regular answers.
pub const HTTP_OK: u16 = 200;

/// Result code denoting success.
pub const SUCCESS_CODE: &str = "0";

/// Envelope of a query response.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DataEnvelope<T> {
    /// Result code, `"0"` on success.
    pub code: String,
    /// Human readable message.
    #[serde(default)]
    pub message: String,
    /// Operation specific payload.
    pub data: Option<T>,
}

/// Envelope of a command response or a failure.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SimpleEnvelope {
    /// Result code, `"0"` on success.
    pub code: String,
    /// Human readable message.
    #[serde(default)]
    pub message: String,
}

impl SimpleEnvelope {
    /// Returns `true` when the code denotes success.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.code == SUCCESS_CODE
    }
}

/// Decodes a raw response into an optional typed payload.
///
/// `Ok(None)` is a success that carried no payload. Rejections surface as
/// [`Error::Remote`] with the untouched body; bodies that fit neither envelope
/// surface as [`Error::Parse`].
///
/// # Errors
///
/// Returns [`Error::Remote`] when the server reports a non-`"0"` code, or
/// [`Error::Parse`] when the body is not a recognizable envelope.
///
/// # Examples
///
/// ```
/// use ecoflow_lib::protocol::decode;
///
/// let devices: Option<Vec<serde_json::Value>> =
///     decode(200, r#"{"code":"0","message":"ok","data":[]}"#, false).unwrap();
/// assert_eq!(devices, Some(vec![]));
///
/// let err = decode::<()>(200, r#"{"code":"1","message":"no"}"#, true).unwrap_err();
/// assert!(matches!(err, ecoflow_lib::Error::Remote(_)));
/// ```
pub fn decode<T: DeserializeOwned>(
    status: u16,
    body: &str,
    was_command: bool,
) -> Result<Option<T>, Error> {
    if status == HTTP_OK && body.trim().is_empty() {
        tracing::debug!("Empty body on HTTP 200, treating as success");
        return Ok(None);
    }

    if status != HTTP_OK || was_command {
        return decode_simple(status, body);
    }

    match serde_json::from_str::<DataEnvelope<T>>(body) {
        Ok(envelope) if envelope.code == SUCCESS_CODE => Ok(envelope.data),
        Ok(envelope) => {
            tracing::debug!(code = %envelope.code, "Data envelope carries a failure code");
            decode_simple(status, body)
        }
        Err(e) => {
            tracing::warn!(
                error = %e,
                "Data envelope does not match, falling back to simple envelope"
            );
            decode_simple(status, body)
        }
    }
}

/// Decodes a simple envelope: success yields no payload.
fn decode_simple<T>(status: u16, body: &str) -> Result<Option<T>, Error> {
    let envelope: SimpleEnvelope =
        serde_json::from_str(body).map_err(|source| ParseError::Envelope {
            body: body.to_string(),
            source,
        })?;

    if !envelope.is_success() {
        tracing::debug!(
            status,
            code = %envelope.code,
            message = %envelope.message,
            "Request rejected"
        );
        return Err(RemoteError::new(status, body).into());
    }

    if status != HTTP_OK {
        tracing::warn!(status, "Accepting non-200 response carrying success code");
    }

    Ok(None)
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::io;
    use std::sync::{Arc, Mutex};

    use super::*;
    use crate::response::Device;

    #[test]
    fn list_with_empty_data_is_empty_not_absent() {
        let devices: Option<Vec<Device>> =
            decode(200, r#"{"code":"0","message":"ok","data":[]}"#, false).unwrap();
        assert_eq!(devices, Some(vec![]));
    }

    #[test]
    fn list_with_devices() {
        let body = r#"{"code":"0","message":"Success","eagleEyeTraceId":"x","data":[
            {"sn":"R331ZEB4ZE123456","deviceName":"Wave 3","online":1,"productName":"WAVE 3"}
        ]}"#;
        let devices: Vec<Device> = decode(200, body, false).unwrap().unwrap();
        assert_eq!(devices.len(), 1);
        assert_eq!(devices[0].serial_number, "R331ZEB4ZE123456");
        assert!(devices[0].is_online());
    }

    #[test]
    fn command_success_has_no_payload() {
        let result: Option<()> = decode(200, r#"{"code":"0","message":"ok"}"#, true).unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn command_ignores_data_field() {
        let result: Option<Vec<Device>> =
            decode(200, r#"{"code":"0","message":"ok","data":[]}"#, true).unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn failure_code_carries_body_verbatim() {
        let body = r#"{"code":"1","message":"device offline"}"#;
        for was_command in [true, false] {
            let err = decode::<HashMap<String, String>>(200, body, was_command).unwrap_err();
            match err {
                Error::Remote(remote) => assert_eq!(remote.body(), body),
                other => panic!("expected remote error, got {other:?}"),
            }
        }
    }

    #[test]
    fn failure_code_with_data_is_remote_error() {
        let body = r#"{"code":"8521","message":"signature is wrong","data":{}}"#;
        let err = decode::<HashMap<String, String>>(200, body, false).unwrap_err();
        assert!(matches!(err, Error::Remote(ref e) if e.body() == body));
    }

    #[test]
    fn payload_shape_mismatch_falls_back_to_simple_envelope() {
        let body = r#"{"code":"0","message":"ok","data":{"a":1}}"#;
        let result: Option<Vec<Device>> = decode(200, body, false).unwrap();
        assert!(result.is_none());
    }

    /// Shared buffer collecting formatted log lines.
    #[derive(Clone, Default)]
    struct LogBuffer(Arc<Mutex<Vec<u8>>>);

    impl LogBuffer {
        fn contents(&self) -> String {
            String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
        }
    }

    impl io::Write for LogBuffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    /// Runs `f` with a subscriber that keeps `warn` and above.
    fn warnings_during(f: impl FnOnce()) -> String {
        let buffer = LogBuffer::default();
        let writer = buffer.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_max_level(tracing::Level::WARN)
            .with_ansi(false)
            .finish();
        tracing::subscriber::with_default(subscriber, f);
        buffer.contents()
    }

    #[test]
    fn shape_mismatch_fallback_logs_warning() {
        let logs = warnings_during(|| {
            let body = r#"{"code":"0","message":"ok","data":{"a":1}}"#;
            let result: Option<Vec<Device>> = decode(200, body, false).unwrap();
            assert!(result.is_none());
        });
        assert!(logs.contains("WARN"), "{logs}");
        assert!(logs.contains("falling back to simple envelope"), "{logs}");
    }

    #[test]
    fn rejection_is_not_a_warning() {
        let logs = warnings_during(|| {
            let body = r#"{"code":"1","message":"device offline"}"#;
            assert!(decode::<()>(200, body, true).is_err());
        });
        assert!(logs.is_empty(), "{logs}");
    }

    #[test]
    fn null_data_is_absent() {
        let result: Option<HashMap<String, String>> =
            decode(200, r#"{"code":"0","message":"ok","data":null}"#, false).unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn empty_body_on_200_is_success() {
        let result: Option<Vec<Device>> = decode(200, "", false).unwrap();
        assert!(result.is_none());
        let result: Option<()> = decode(200, "  \n", true).unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn non_200_with_success_code_is_success() {
        let result: Option<Vec<Device>> =
            decode(500, r#"{"code":"0","message":"ok","data":[]}"#, false).unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn non_200_with_failure_code_is_remote_error() {
        let body = r#"{"code":"401","message":"unauthorized"}"#;
        let err = decode::<()>(401, body, false).unwrap_err();
        match err {
            Error::Remote(remote) => {
                assert_eq!(remote.status(), 401);
                assert_eq!(remote.body(), body);
            }
            other => panic!("expected remote error, got {other:?}"),
        }
    }

    #[test]
    fn unparseable_body_is_parse_error() {
        let err = decode::<Vec<Device>>(200, "<html>gateway</html>", false).unwrap_err();
        assert!(matches!(
            err,
            Error::Parse(ParseError::Envelope { ref body, .. }) if body == "<html>gateway</html>"
        ));

        let err = decode::<()>(502, "Bad Gateway", false).unwrap_err();
        assert!(matches!(err, Error::Parse(_)));
    }

    #[test]
    fn missing_message_is_tolerated() {
        let result: Option<()> = decode(200, r#"{"code":"0"}"#, true).unwrap();
        assert!(result.is_none());
    }
}
