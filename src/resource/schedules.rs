// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Schedule management.

use serde_json::{Map, Value};

use crate::client::BridgeClient;
use crate::command::{Listing, ScheduleCommand, ScheduleDraft};
use crate::error::Result;
use crate::types::DeviceId;

/// Operations on `/schedules`.
#[derive(Debug, Clone, Copy)]
pub struct Schedules<'a> {
    client: &'a BridgeClient,
}

impl<'a> Schedules<'a> {
    pub(crate) fn new(client: &'a BridgeClient) -> Self {
        Self { client }
    }

    /// Lists every schedule.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails.
    pub async fn list(&self) -> Result<Value> {
        self.client.execute(&Listing::Schedules).await
    }

    /// Creates a schedule.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails.
    pub async fn create(&self, draft: ScheduleDraft) -> Result<Value> {
        self.client.execute(&ScheduleCommand::Create(draft)).await
    }

    /// Fetches one schedule.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails.
    pub async fn get(&self, id: &DeviceId) -> Result<Value> {
        self.client.execute(&ScheduleCommand::Get(id.clone())).await
    }

    /// Updates schedule attributes.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails.
    pub async fn set_attributes(
        &self,
        id: &DeviceId,
        attributes: Map<String, Value>,
    ) -> Result<Value> {
        self.client
            .execute(&ScheduleCommand::SetAttributes {
                id: id.clone(),
                attributes,
            })
            .await
    }

    /// Removes a schedule.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails.
    pub async fn delete(&self, id: &DeviceId) -> Result<Value> {
        self.client.execute(&ScheduleCommand::Delete(id.clone())).await
    }
}
