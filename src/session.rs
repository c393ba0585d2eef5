// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Bridge session: address plus the username issued by pairing.

use std::net::{Ipv4Addr, SocketAddrV4};

use crate::error::ValueError;

/// Credentials for one bridge.
///
/// A session is never modified after construction; pairing again produces
/// a new one.
///
/// # Examples
///
/// ```
/// use hue_sdk::{BridgeSession, endpoint};
///
/// let session = BridgeSession::new("192.168.1.2", "abcdef");
/// assert_eq!(session.base_url(), "http://192.168.1.2/api/abcdef");
/// assert_eq!(endpoint(&session, "lights/1"), "http://192.168.1.2/api/abcdef/lights/1");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BridgeSession {
    address: String,
    username: String,
}

impl BridgeSession {
    /// Creates a session for the bridge at `address` (host or `host:port`).
    #[must_use]
    pub fn new(address: impl Into<String>, username: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            username: username.into(),
        }
    }

    /// Returns the bridge address.
    #[must_use]
    pub fn address(&self) -> &str {
        &self.address
    }

    /// Returns the whitelisted username.
    #[must_use]
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Returns `http://<address>/api/<username>`.
    #[must_use]
    pub fn base_url(&self) -> String {
        format!("http://{}/api/{}", self.address, self.username)
    }
}

/// Builds the URL of `path` for an authenticated request.
///
/// Leading slashes in `path` are ignored; an empty path addresses the
/// base URL itself.
#[must_use]
pub fn endpoint(session: &BridgeSession, path: &str) -> String {
    let path = path.trim_start_matches('/');
    if path.is_empty() {
        session.base_url()
    } else {
        format!("{}/{path}", session.base_url())
    }
}

/// Returns the unauthenticated pairing URL `http://<address>/api`.
#[must_use]
pub fn pairing_endpoint(address: &str) -> String {
    format!("http://{address}/api")
}

/// Checks that `address` is a dotted IPv4 address, with an optional port.
///
/// # Errors
///
/// Returns `ValueError::InvalidAddress` otherwise.
///
/// # Examples
///
/// ```
/// use hue_sdk::check_address;
///
/// assert!(check_address("192.168.1.2").is_ok());
/// assert!(check_address("192.168.1.2:8080").is_ok());
/// assert!(check_address("192.168.1").is_err());
/// assert!(check_address("bridge.local").is_err());
/// ```
pub fn check_address(address: &str) -> Result<(), ValueError> {
    if address.parse::<Ipv4Addr>().is_ok() || address.parse::<SocketAddrV4>().is_ok() {
        Ok(())
    } else {
        Err(ValueError::InvalidAddress(address.to_string()))
    }
}
