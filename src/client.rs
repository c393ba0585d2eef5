// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Authenticated request loop.

use std::sync::Arc;

use serde_json::Value;

use crate::command::{Command, Request};
use crate::error::{Error, ProtocolError, Result};
use crate::protocol::{HttpClient, RetryPolicy, find_error};
use crate::session::{BridgeSession, endpoint};

/// Sends requests on behalf of a paired session.
///
/// A response carrying a bridge error is treated as a transient
/// authentication failure and retried per the [`RetryPolicy`]; once the
/// attempts run out, `ProtocolError::CouldNotAuthenticate` is returned.
/// Successful bodies are returned untouched.
#[derive(Debug, Clone)]
pub struct BridgeClient {
    session: Arc<BridgeSession>,
    http: HttpClient,
    retry: RetryPolicy,
}

impl BridgeClient {
    /// Creates a client for `session`.
    #[must_use]
    pub fn new(session: Arc<BridgeSession>, http: HttpClient, retry: RetryPolicy) -> Self {
        Self {
            session,
            http,
            retry,
        }
    }

    /// Returns the session requests are sent for.
    #[must_use]
    pub fn session(&self) -> &BridgeSession {
        &self.session
    }

    /// Returns the retry policy.
    #[must_use]
    pub fn retry_policy(&self) -> RetryPolicy {
        self.retry
    }

    /// Builds and sends a command.
    ///
    /// # Errors
    ///
    /// See [`send`](Self::send).
    pub async fn execute<C: Command + ?Sized>(&self, command: &C) -> Result<Value> {
        self.send(&command.to_request()).await
    }

    /// Sends a request, retrying while the bridge answers with an error.
    ///
    /// # Errors
    ///
    /// Returns `ProtocolError::CouldNotAuthenticate` once every attempt was
    /// answered with a bridge error, or the transport error of the failing
    /// attempt.
    pub async fn send(&self, request: &Request) -> Result<Value> {
        let url = endpoint(&self.session, request.path());
        self.retry
            .run(|_| self.send_once(&url, request), Error::is_transient)
            .await
    }

    async fn send_once(&self, url: &str, request: &Request) -> Result<Value> {
        let response = self
            .http
            .send(request.method().clone(), url, request.payload())
            .await?;

        if let Some(error) = find_error(&response) {
            tracing::debug!(
                kind = error.kind,
                address = %error.address,
                description = %error.description,
                "Bridge returned an error"
            );
            return Err(ProtocolError::CouldNotAuthenticate(error.description).into());
        }

        Ok(response)
    }
}
