// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Persistence of pairing results.
//!
//! Credentials are kept in a small YAML file:
//!
//! ```yaml
//! Auth:
//!   ip: 192.168.1.2
//!   user_name: 83b7780291a6ceffbe0bd049104df
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::session::BridgeSession;

/// Address and username of a paired bridge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredCredentials {
    /// Bridge address.
    pub ip: String,
    /// Username issued by the bridge.
    pub user_name: String,
}

impl From<&BridgeSession> for StoredCredentials {
    fn from(session: &BridgeSession) -> Self {
        Self {
            ip: session.address().to_string(),
            user_name: session.username().to_string(),
        }
    }
}

impl From<StoredCredentials> for BridgeSession {
    fn from(credentials: StoredCredentials) -> Self {
        Self::new(credentials.ip, credentials.user_name)
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct CredentialFile {
    #[serde(rename = "Auth")]
    auth: StoredCredentials,
}

/// Where pairing results are read from and written to.
pub trait CredentialStore {
    /// Returns `true` if credentials have been stored.
    fn exists(&self) -> bool;

    /// Loads the stored credentials.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NoConnectionSettings` if nothing is stored, or
    /// the underlying read/decode error.
    fn load(&self) -> Result<StoredCredentials, ConfigError>;

    /// Stores credentials, replacing any previous ones.
    ///
    /// # Errors
    ///
    /// Returns the underlying write/encode error.
    fn write(&self, credentials: &StoredCredentials) -> Result<(), ConfigError>;
}

/// Credential store backed by a YAML file.
///
/// # Examples
///
/// ```no_run
/// use hue_sdk::credentials::{CredentialStore, StoredCredentials, YamlCredentialStore};
///
/// # fn example() -> Result<(), hue_sdk::error::ConfigError> {
/// let store = YamlCredentialStore::default_location()?;
/// store.write(&StoredCredentials {
///     ip: "192.168.1.2".to_string(),
///     user_name: "abcdef".to_string(),
/// })?;
/// assert!(store.exists());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YamlCredentialStore {
    path: PathBuf,
}

impl YamlCredentialStore {
    /// Directory name under the platform configuration directory.
    pub const APP_DIR: &'static str = "hue_sdk";
    /// File name of the credential file.
    pub const FILE_NAME: &'static str = "config.yml";

    /// Creates a store using the file at `path`.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Creates a store at `<config dir>/hue_sdk/config.yml`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NoConfigDir` if the platform has no
    /// configuration directory.
    pub fn default_location() -> Result<Self, ConfigError> {
        let mut path = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
        path.push(Self::APP_DIR);
        path.push(Self::FILE_NAME);
        Ok(Self::new(path))
    }

    /// Returns the path of the credential file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CredentialStore for YamlCredentialStore {
    fn exists(&self) -> bool {
        self.path.is_file()
    }

    fn load(&self) -> Result<StoredCredentials, ConfigError> {
        if !self.exists() {
            return Err(ConfigError::NoConnectionSettings(self.path.clone()));
        }

        let contents = fs::read_to_string(&self.path)?;
        let file: CredentialFile = serde_yaml::from_str(&contents)?;
        tracing::debug!(path = %self.path.display(), ip = %file.auth.ip, "Loaded credentials");
        Ok(file.auth)
    }

    fn write(&self, credentials: &StoredCredentials) -> Result<(), ConfigError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let contents = serde_yaml::to_string(&CredentialFile {
            auth: credentials.clone(),
        })?;
        fs::write(&self.path, contents)?;

        tracing::info!(path = %self.path.display(), "Saved credentials");
        Ok(())
    }
}
