// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Entry point for controlling a paired bridge.

use std::sync::Arc;

use serde_json::Value;

use crate::client::BridgeClient;
use crate::command::Request;
use crate::credentials::{CredentialStore, YamlCredentialStore};
use crate::error::Result;
use crate::protocol::{HttpConfig, RetryPolicy};
use crate::resource::{All, Groups, Lights, Scenes, Schedules};
use crate::session::BridgeSession;

/// A paired bridge.
///
/// # Examples
///
/// ```no_run
/// use hue_sdk::Bridge;
/// use hue_sdk::types::{DeviceId, TransitionTime};
///
/// # async fn example() -> hue_sdk::Result<()> {
/// // Uses the credentials written by `hueconn`
/// let bridge = Bridge::connect()?;
///
/// let everything = DeviceId::from(0);
/// bridge.groups().off(&everything, TransitionTime::default()).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Bridge {
    client: BridgeClient,
}

impl Bridge {
    /// Starts building a bridge for an existing session.
    #[must_use]
    pub fn builder(session: BridgeSession) -> BridgeBuilder {
        BridgeBuilder::new(session)
    }

    /// Creates a bridge with default HTTP and retry settings.
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP client cannot be created.
    pub fn new(session: BridgeSession) -> Result<Self> {
        Self::builder(session).build()
    }

    /// Creates a bridge from the credentials in the default YAML store.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NoConnectionSettings` if no pairing has been
    /// stored yet.
    pub fn connect() -> Result<Self> {
        Self::from_store(&YamlCredentialStore::default_location()?)
    }

    /// Creates a bridge from the credentials in `store`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NoConnectionSettings` if `store` is empty, or
    /// the error reading it.
    pub fn from_store(store: &impl CredentialStore) -> Result<Self> {
        let credentials = store.load()?;
        Self::new(credentials.into())
    }

    /// Returns the session requests are sent for.
    #[must_use]
    pub fn session(&self) -> &BridgeSession {
        self.client.session()
    }

    /// Returns the underlying request client.
    #[must_use]
    pub fn client(&self) -> &BridgeClient {
        &self.client
    }

    /// Light operations.
    #[must_use]
    pub fn lights(&self) -> Lights<'_> {
        Lights::new(&self.client)
    }

    /// Group operations.
    #[must_use]
    pub fn groups(&self) -> Groups<'_> {
        Groups::new(&self.client)
    }

    /// Scene operations.
    #[must_use]
    pub fn scenes(&self) -> Scenes<'_> {
        Scenes::new(&self.client)
    }

    /// Schedule operations.
    #[must_use]
    pub fn schedules(&self) -> Schedules<'_> {
        Schedules::new(&self.client)
    }

    /// Whole-collection listings.
    #[must_use]
    pub fn all(&self) -> All<'_> {
        All::new(&self.client)
    }

    /// Sends an arbitrary request.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails.
    pub async fn request(&self, request: &Request) -> Result<Value> {
        self.client.send(request).await
    }
}

/// Builder for [`Bridge`].
///
/// ```
/// use hue_sdk::{Bridge, BridgeSession};
/// use hue_sdk::protocol::{HttpConfig, RetryPolicy};
/// use std::time::Duration;
///
/// let bridge = Bridge::builder(BridgeSession::new("192.168.1.2", "abcdef"))
///     .with_http_config(HttpConfig::new().with_timeout(Duration::from_secs(2)))
///     .with_retry(RetryPolicy::new(3, Duration::from_secs(1)))
///     .build()
///     .unwrap();
/// assert_eq!(bridge.session().username(), "abcdef");
/// ```
#[derive(Debug)]
pub struct BridgeBuilder {
    session: BridgeSession,
    http: HttpConfig,
    retry: RetryPolicy,
}

impl BridgeBuilder {
    fn new(session: BridgeSession) -> Self {
        Self {
            session,
            http: HttpConfig::default(),
            retry: RetryPolicy::default(),
        }
    }

    /// Sets HTTP settings.
    #[must_use]
    pub fn with_http_config(mut self, config: HttpConfig) -> Self {
        self.http = config;
        self
    }

    /// Sets how authenticated requests are retried.
    #[must_use]
    pub fn with_retry(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    /// Builds the bridge.
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP client cannot be created.
    pub fn build(self) -> Result<Bridge> {
        let http = self.http.into_client()?;
        Ok(Bridge {
            client: BridgeClient::new(Arc::new(self.session), http, self.retry),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::credentials::StoredCredentials;
    use crate::error::{ConfigError, Error};

    #[test]
    fn from_empty_store_fails() {
        let dir = tempfile::tempdir().unwrap();
        let store = YamlCredentialStore::new(dir.path().join("config.yml"));
        assert!(matches!(
            Bridge::from_store(&store),
            Err(Error::Config(ConfigError::NoConnectionSettings(_)))
        ));
    }

    #[test]
    fn from_store_uses_saved_session() {
        let dir = tempfile::tempdir().unwrap();
        let store = YamlCredentialStore::new(dir.path().join("config.yml"));
        store
            .write(&StoredCredentials {
                ip: "10.1.1.1".to_string(),
                user_name: "me".to_string(),
            })
            .unwrap();

        let bridge = Bridge::from_store(&store).unwrap();
        assert_eq!(bridge.session(), &BridgeSession::new("10.1.1.1", "me"));
    }

    #[test]
    fn builder_defaults() {
        let bridge = Bridge::new(BridgeSession::new("10.1.1.1", "me")).unwrap();
        assert_eq!(bridge.client().retry_policy(), RetryPolicy::default());
    }
}
