// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Read-only listings of every resource collection.

use serde_json::Value;

use crate::client::BridgeClient;
use crate::command::Listing;
use crate::error::Result;

/// Whole-collection listings.
#[derive(Debug, Clone, Copy)]
pub struct All<'a> {
    client: &'a BridgeClient,
}

impl<'a> All<'a> {
    pub(crate) fn new(client: &'a BridgeClient) -> Self {
        Self { client }
    }

    /// Fetches one listing.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails.
    pub async fn get(&self, listing: Listing) -> Result<Value> {
        self.client.execute(&listing).await
    }

    /// Lists lights.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails.
    pub async fn lights(&self) -> Result<Value> {
        self.get(Listing::Lights).await
    }

    /// Lists groups.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails.
    pub async fn groups(&self) -> Result<Value> {
        self.get(Listing::Groups).await
    }

    /// Lists schedules.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails.
    pub async fn schedules(&self) -> Result<Value> {
        self.get(Listing::Schedules).await
    }

    /// Lists scenes.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails.
    pub async fn scenes(&self) -> Result<Value> {
        self.get(Listing::Scenes).await
    }

    /// Lists sensors.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails.
    pub async fn sensors(&self) -> Result<Value> {
        self.get(Listing::Sensors).await
    }

    /// Lists rules.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails.
    pub async fn rules(&self) -> Result<Value> {
        self.get(Listing::Rules).await
    }

    /// Lists the time zones the bridge knows.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails.
    pub async fn timezones(&self) -> Result<Value> {
        self.get(Listing::Timezones).await
    }

    /// Lists resource links.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails.
    pub async fn resourcelinks(&self) -> Result<Value> {
        self.get(Listing::ResourceLinks).await
    }

    /// Fetches the bridge's resource capacity.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails.
    pub async fn capabilities(&self) -> Result<Value> {
        self.get(Listing::Capabilities).await
    }
}
