// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for the `hue_sdk` library.
//!
//! Errors fall into four families:
//!
//! - [`ValueError`]: malformed or out-of-range input, rejected before any
//!   request leaves the process
//! - [`ProtocolError`]: transport failures and error payloads returned by the
//!   bridge
//! - [`ParseError`]: responses that do not have the expected shape
//! - [`ConfigError`]: missing or unreadable connection settings

use std::path::PathBuf;

use thiserror::Error;

/// The main error type for this library.
#[derive(Debug, Error)]
pub enum Error {
    /// Error occurred during value validation.
    #[error("value error: {0}")]
    Value(#[from] ValueError),

    /// Error occurred while talking to the bridge.
    #[error("protocol error: {0}")]
    Protocol(#[from] ProtocolError),

    /// Error occurred while parsing a response.
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    /// Connection settings are missing or unusable.
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The fetched resource carries no `state` object.
    #[error("could not read the current state of {path}")]
    AttributeFetch {
        /// Resource path that was fetched.
        path: String,
    },
}

/// Errors related to value validation and constraints.
///
/// All of these are raised locally; none of them is ever retried.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ValueError {
    /// A numeric attribute is outside its allowed range.
    #[error("{name} value {actual} is out of range [{min}, {max}]")]
    OutOfRange {
        /// Bridge attribute name (`bri`, `hue`, `sat`).
        name: &'static str,
        /// Minimum allowed value.
        min: u32,
        /// Maximum allowed value.
        max: u32,
        /// The value that was provided.
        actual: i64,
    },

    /// An RGB channel is outside [0, 255].
    #[error("{channel} channel value {actual} is out of range [0, 255]")]
    ColorChannelOutOfRange {
        /// Channel name.
        channel: &'static str,
        /// The value that was provided.
        actual: i64,
    },

    /// All RGB channels are zero, so the color has no chromaticity.
    #[error("color #000000 has no luminance and cannot be converted to xy")]
    NoLuminance,

    /// A hex color is not of the form `#RRGGBB`.
    #[error("invalid hex color {0:?}, expected #RRGGBB")]
    InvalidHexColor(String),

    /// Explicit xy coordinates are outside the CIE unit triangle.
    #[error("xy coordinates ({x}, {y}) are outside the unit range")]
    InvalidXy {
        /// x coordinate.
        x: f64,
        /// y coordinate.
        y: f64,
    },

    /// A device identifier contains something other than decimal digits.
    #[error("invalid identifier {0:?}, expected decimal digits")]
    InvalidIdentifier(String),

    /// A scene key is empty or contains unsupported characters.
    #[error("invalid scene id {0:?}")]
    InvalidSceneId(String),

    /// A bridge address is not a valid IPv4 address.
    #[error("invalid bridge address {0:?}")]
    InvalidAddress(String),
}

/// Errors related to communication with the bridge.
#[derive(Debug, Error)]
pub enum ProtocolError {
    /// HTTP request failed.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The bridge answered with a non-success HTTP status.
    #[error("connection failed: {0}")]
    ConnectionFailed(String),

    /// The bridge rejected the `devicetype` sent during pairing.
    #[error("invalid devicetype: {0}")]
    DeviceTypeRejected(String),

    /// The link button was not pressed within the pairing window.
    #[error("link button was not pressed")]
    ButtonNotPressed,

    /// The bridge kept answering authenticated requests with an error.
    #[error("could not authenticate with the bridge: {0}")]
    CouldNotAuthenticate(String),
}

/// Errors related to parsing bridge responses.
#[derive(Debug, Error)]
pub enum ParseError {
    /// JSON parsing failed.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// Expected field is missing from the response.
    #[error("missing field in response: {0}")]
    MissingField(String),

    /// Unexpected response format.
    #[error("unexpected response format: {0}")]
    UnexpectedFormat(String),
}

/// Errors related to stored connection settings.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// No credentials have been stored yet.
    #[error("no connection settings at {}, run `hueconn --ip <bridge>` to pair", .0.display())]
    NoConnectionSettings(PathBuf),

    /// The platform has no configuration directory.
    #[error("could not determine the configuration directory")]
    NoConfigDir,

    /// Reading or writing the credential file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The credential file is not valid YAML.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl Error {
    /// Returns `true` for the bridge errors that are worth retrying.
    #[must_use]
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            Self::Protocol(ProtocolError::ButtonNotPressed | ProtocolError::CouldNotAuthenticate(_))
        )
    }
}

/// A specialized Result type for this library.
pub type Result<T> = std::result::Result<T, Error>;
