// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! HTTP transport for the bridge REST API.

use std::time::Duration;

use reqwest::{Client, Method};
use serde_json::Value;

use crate::error::ProtocolError;

/// HTTP settings shared by every request to a bridge.
///
/// # Examples
///
/// ```
/// use hue_sdk::protocol::HttpConfig;
/// use std::time::Duration;
///
/// let config = HttpConfig::new().with_timeout(Duration::from_secs(3));
/// assert_eq!(config.timeout(), Duration::from_secs(3));
/// ```
#[derive(Debug, Clone)]
pub struct HttpConfig {
    timeout: Duration,
}

impl HttpConfig {
    /// Default request timeout.
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

    /// Creates a configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self {
            timeout: Self::DEFAULT_TIMEOUT,
        }
    }

    /// Sets the request timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Returns the timeout.
    #[must_use]
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Creates an `HttpClient` from this configuration.
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP client cannot be created.
    pub fn into_client(self) -> Result<HttpClient, ProtocolError> {
        let client = Client::builder()
            .timeout(self.timeout)
            .build()
            .map_err(ProtocolError::Http)?;

        Ok(HttpClient { client })
    }
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// JSON-over-HTTP client.
///
/// Sends one request per call and returns the decoded body. Bridge-level
/// errors embedded in the body are not inspected here.
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    /// Creates a client with the default configuration.
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP client cannot be created.
    pub fn new() -> Result<Self, ProtocolError> {
        HttpConfig::new().into_client()
    }

    /// Sends `payload` as JSON to `url` and decodes the JSON response.
    ///
    /// # Errors
    ///
    /// Returns `ProtocolError::Http` on transport or decode failure and
    /// `ProtocolError::ConnectionFailed` on a non-success status.
    pub async fn send(
        &self,
        method: Method,
        url: &str,
        payload: Option<&Value>,
    ) -> Result<Value, ProtocolError> {
        tracing::debug!(%method, url = %url, "Sending HTTP request");

        let mut request = self.client.request(method, url);
        if let Some(body) = payload {
            tracing::debug!(body = %body, "Request body");
            request = request.json(body);
        }

        let response = request.send().await.map_err(ProtocolError::Http)?;

        if !response.status().is_success() {
            return Err(ProtocolError::ConnectionFailed(format!(
                "HTTP {} - {}",
                response.status().as_u16(),
                response.status().canonical_reason().unwrap_or("Unknown")
            )));
        }

        let body: Value = response.json().await.map_err(ProtocolError::Http)?;

        tracing::debug!(body = %body, "Received HTTP response");

        Ok(body)
    }
}
