// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Communication with the bridge.
//!
//! - [`HttpClient`]: JSON over HTTP, one request per call
//! - [`RetryPolicy`]: bounded, fixed-delay retry combinator
//! - [`Pairing`]: the link-button handshake issuing a username
//!
//! The bridge reports failures inside a `200 OK` body, either as a bare
//! `{"error": {...}}` object or as the first element of a result list.
//! [`find_error`] extracts it.

mod http;
mod pairing;
mod retry;

pub use http::{HttpClient, HttpConfig};
pub use pairing::{DEFAULT_DEVICE_TYPE, Pairing, PairingFailure, PairingState};
pub use retry::RetryPolicy;

use serde::Deserialize;
use serde_json::Value;

/// An error object returned by the bridge.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct BridgeError {
    /// Numeric error type, [`BridgeError::UNKNOWN`] if absent or unreadable.
    #[serde(rename = "type", default)]
    pub kind: u16,
    /// Resource the error relates to.
    #[serde(default)]
    pub address: String,
    /// Human readable description.
    #[serde(default)]
    pub description: String,
}

impl BridgeError {
    /// Placeholder type for errors that carry no usable `type`.
    pub const UNKNOWN: u16 = 0;
    /// Error type the bridge uses for a rejected `devicetype`.
    pub const INVALID_DEVICE_TYPE: u16 = 1;
    /// Error type for "link button not pressed".
    pub const LINK_BUTTON_NOT_PRESSED: u16 = 101;

    // Any value under an `error` key is an error; fields are read when present.
    fn from_value(error: &Value) -> Self {
        if let Ok(parsed) = Self::deserialize(error) {
            return parsed;
        }

        let text = |key: &str| error.get(key).and_then(Value::as_str).map(str::to_string);
        Self {
            kind: Self::UNKNOWN,
            address: text("address").unwrap_or_default(),
            description: match error {
                Value::String(description) => description.clone(),
                _ => text("description").unwrap_or_else(|| error.to_string()),
            },
        }
    }
}

/// Returns the bridge error `response` reports, if any.
///
/// A list reply is classified by its first element, so a partial success
/// (`[{"success": ...}, {"error": ...}]`) is not an error. The presence of
/// an `error` key is enough; a malformed error object still counts.
///
/// # Examples
///
/// ```
/// use hue_sdk::protocol::find_error;
/// use serde_json::json;
///
/// let response = json!([{"error": {"type": 101, "address": "", "description": "link button not pressed"}}]);
/// assert_eq!(find_error(&response).unwrap().kind, 101);
///
/// assert!(find_error(&json!([{"success": {"/lights/1/state/on": true}}])).is_none());
/// assert_eq!(find_error(&json!({"error": "unauthorized"})).unwrap().description, "unauthorized");
/// ```
#[must_use]
pub fn find_error(response: &Value) -> Option<BridgeError> {
    let first = match response {
        Value::Array(items) => items.first()?,
        other => other,
    };
    first.get("error").map(BridgeError::from_value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn finds_error_in_object() {
        let response = json!({"error": {"type": 1, "address": "/", "description": "unauthorized user"}});
        assert_eq!(
            find_error(&response),
            Some(BridgeError {
                kind: 1,
                address: "/".to_string(),
                description: "unauthorized user".to_string(),
            })
        );
    }

    #[test]
    fn partial_success_is_not_an_error() {
        let response = json!([
            {"success": {"/lights/1/state/on": true}},
            {"error": {"type": 201, "description": "parameter not modifiable"}}
        ]);
        assert!(find_error(&response).is_none());
    }

    #[test]
    fn first_element_error() {
        let response = json!([
            {"error": {"type": 7, "description": "invalid value"}},
            {"success": {"/lights/1/state/on": true}}
        ]);
        let error = find_error(&response).unwrap();
        assert_eq!(error.kind, 7);
        assert_eq!(error.address, "");
    }

    #[test]
    fn untyped_error_object() {
        let response = json!([{"error": {"address": "/", "description": "unauthorized user"}}]);
        assert_eq!(
            find_error(&response),
            Some(BridgeError {
                kind: BridgeError::UNKNOWN,
                address: "/".to_string(),
                description: "unauthorized user".to_string(),
            })
        );
    }

    #[test]
    fn unreadable_type_still_an_error() {
        let response = json!({"error": {"type": "bad", "description": "oops"}});
        let error = find_error(&response).unwrap();
        assert_eq!(error.kind, BridgeError::UNKNOWN);
        assert_eq!(error.description, "oops");

        let response = json!({"error": {"type": 70_000}});
        assert_eq!(find_error(&response).unwrap().kind, BridgeError::UNKNOWN);
    }

    #[test]
    fn string_and_scalar_errors() {
        let error = find_error(&json!({"error": "unauthorized"})).unwrap();
        assert_eq!(error.description, "unauthorized");

        let error = find_error(&json!([{"error": 5}])).unwrap();
        assert_eq!(error.description, "5");
    }

    #[test]
    fn plain_resources_have_no_error() {
        assert!(find_error(&json!({"1": {"name": "Hall"}})).is_none());
        assert!(find_error(&json!({"state": {"on": true}})).is_none());
        assert!(find_error(&json!("text")).is_none());
    }
}
