// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Link-button pairing.
//!
//! A bridge only issues a username after someone presses the physical link
//! button on it. [`Pairing::pair`] posts the registration request and keeps
//! polling, per its [`RetryPolicy`], until the button has been pressed or
//! the attempts run out.
//!
//! ```text
//! Idle --POST /api--> AwaitingButtonPress --button pressed--> Authenticated
//!   |                     |    ^
//!   |                     +----+ link button not pressed (retry)
//!   +--type 1 error--> Failed(DeviceTypeRejected)
//!                         attempts exhausted --> Failed(ButtonNotPressed)
//! ```

use reqwest::Method;
use serde_json::{Value, json};

use crate::error::{Error, ParseError, ProtocolError, Result};
use crate::protocol::{BridgeError, HttpClient, HttpConfig, RetryPolicy, find_error};
use crate::session::{BridgeSession, pairing_endpoint};

/// `devicetype` sent when none is configured.
pub const DEFAULT_DEVICE_TYPE: &str = "hue_cli";

/// Why a pairing ended without a username.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PairingFailure {
    /// The bridge rejected the `devicetype`; retrying cannot help.
    DeviceTypeRejected(String),
    /// Nobody pressed the link button in time.
    ButtonNotPressed,
}

impl From<PairingFailure> for ProtocolError {
    fn from(failure: PairingFailure) -> Self {
        match failure {
            PairingFailure::DeviceTypeRejected(description) => {
                Self::DeviceTypeRejected(description)
            }
            PairingFailure::ButtonNotPressed => Self::ButtonNotPressed,
        }
    }
}

/// State of one pairing call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PairingState {
    /// Nothing sent yet.
    Idle,
    /// The bridge is waiting for the link button.
    AwaitingButtonPress {
        /// Attempts made so far.
        attempts: u32,
    },
    /// The bridge issued a username.
    Authenticated {
        /// The new username.
        username: String,
    },
    /// Pairing ended without a username.
    Failed(PairingFailure),
}

impl PairingState {
    /// The state before attempt number `attempt` (1-based).
    #[must_use]
    pub fn before_attempt(attempt: u32) -> Self {
        if attempt <= 1 {
            Self::Idle
        } else {
            Self::AwaitingButtonPress {
                attempts: attempt - 1,
            }
        }
    }

    /// Advances the state machine with a registration response.
    ///
    /// Terminal states are returned unchanged.
    ///
    /// # Errors
    ///
    /// Returns `ParseError::UnexpectedFormat` if the response carries neither
    /// a username nor an error.
    ///
    /// # Examples
    ///
    /// ```
    /// use hue_sdk::protocol::{PairingFailure, PairingState};
    /// use serde_json::json;
    ///
    /// let waiting = json!([{"error": {"type": 101, "description": "link button not pressed"}}]);
    /// let state = PairingState::Idle.advance(&waiting).unwrap();
    /// assert_eq!(state, PairingState::AwaitingButtonPress { attempts: 1 });
    ///
    /// let issued = json!([{"success": {"username": "83b7780291a6ceffbe0bd049104df"}}]);
    /// let state = state.advance(&issued).unwrap();
    /// assert!(matches!(state, PairingState::Authenticated { .. }));
    /// ```
    pub fn advance(self, response: &Value) -> std::result::Result<Self, ParseError> {
        let attempts = match self {
            Self::Idle => 1,
            Self::AwaitingButtonPress { attempts } => attempts + 1,
            terminal @ (Self::Authenticated { .. } | Self::Failed(_)) => return Ok(terminal),
        };

        if let Some(error) = find_error(response) {
            return Ok(if error.kind == BridgeError::INVALID_DEVICE_TYPE {
                Self::Failed(PairingFailure::DeviceTypeRejected(error.description))
            } else {
                Self::AwaitingButtonPress { attempts }
            });
        }

        let first = match response {
            Value::Array(items) => items.first(),
            other => Some(other),
        };
        first
            .and_then(|item| item.pointer("/success/username"))
            .and_then(Value::as_str)
            .map(|username| Self::Authenticated {
                username: username.to_string(),
            })
            .ok_or_else(|| {
                ParseError::UnexpectedFormat(format!(
                    "pairing response without username: {response}"
                ))
            })
    }

    /// Returns `true` for `Authenticated` and `Failed`.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Authenticated { .. } | Self::Failed(_))
    }
}

/// A pairing request against one bridge.
///
/// # Examples
///
/// ```no_run
/// use hue_sdk::protocol::Pairing;
///
/// # async fn example() -> hue_sdk::Result<()> {
/// // Press the link button on the bridge, then:
/// let session = Pairing::new("192.168.1.2")?
///     .with_device_type("my_app#kitchen")
///     .pair()
///     .await?;
/// println!("username: {}", session.username());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Pairing {
    address: String,
    device_type: String,
    http: HttpClient,
    retry: RetryPolicy,
}

impl Pairing {
    /// Creates a pairing request with default HTTP and retry settings.
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP client cannot be created.
    pub fn new(address: impl Into<String>) -> Result<Self> {
        Self::with_config(address, HttpConfig::default())
    }

    /// Creates a pairing request with custom HTTP settings.
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP client cannot be created.
    pub fn with_config(address: impl Into<String>, config: HttpConfig) -> Result<Self> {
        Ok(Self {
            address: address.into(),
            device_type: DEFAULT_DEVICE_TYPE.to_string(),
            http: config.into_client()?,
            retry: RetryPolicy::default(),
        })
    }

    /// Sets the `devicetype` the bridge records for the new username.
    #[must_use]
    pub fn with_device_type(mut self, device_type: impl Into<String>) -> Self {
        self.device_type = device_type.into();
        self
    }

    /// Sets how long to wait for the link button.
    #[must_use]
    pub fn with_retry(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    /// Returns the bridge address.
    #[must_use]
    pub fn address(&self) -> &str {
        &self.address
    }

    /// Runs the handshake, returning a session for the new username.
    ///
    /// # Errors
    ///
    /// - `ProtocolError::DeviceTypeRejected` if the bridge refuses the
    ///   `devicetype` (not retried)
    /// - `ProtocolError::ButtonNotPressed` if every attempt found the link
    ///   button unpressed
    /// - transport and parse errors from the last attempt
    pub async fn pair(&self) -> Result<BridgeSession> {
        tracing::info!(address = %self.address, state = ?PairingState::Idle, "Pairing with bridge");

        let username = self
            .retry
            .run(
                |attempt| self.attempt(attempt),
                |err| matches!(err, Error::Protocol(ProtocolError::ButtonNotPressed)),
            )
            .await
            .inspect_err(|err| {
                tracing::warn!(address = %self.address, error = %err, "Pairing failed");
            })?;

        Ok(BridgeSession::new(self.address.clone(), username))
    }

    async fn attempt(&self, attempt: u32) -> Result<String> {
        let url = pairing_endpoint(&self.address);
        let body = json!({"devicetype": self.device_type});
        let response = self.http.send(Method::POST, &url, Some(&body)).await?;

        let state = PairingState::before_attempt(attempt).advance(&response)?;
        tracing::info!(attempt, state = ?state, "Pairing state");

        match state {
            PairingState::Authenticated { username } => Ok(username),
            PairingState::Failed(failure) => Err(ProtocolError::from(failure).into()),
            PairingState::Idle | PairingState::AwaitingButtonPress { .. } => {
                Err(ProtocolError::ButtonNotPressed.into())
            }
        }
    }
}
