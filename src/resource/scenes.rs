// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Scene management.

use serde_json::{Map, Value};

use crate::client::BridgeClient;
use crate::command::{Listing, SceneCommand, SceneDraft};
use crate::error::Result;
use crate::types::SceneId;

/// Operations on `/scenes`.
///
/// Scenes are recalled through a group, see
/// [`Groups::apply_scene`](crate::resource::Groups::apply_scene).
#[derive(Debug, Clone, Copy)]
pub struct Scenes<'a> {
    client: &'a BridgeClient,
}

impl<'a> Scenes<'a> {
    pub(crate) fn new(client: &'a BridgeClient) -> Self {
        Self { client }
    }

    /// Lists every scene.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails.
    pub async fn list(&self) -> Result<Value> {
        self.client.execute(&Listing::Scenes).await
    }

    /// Creates a scene from the current state of its lights.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails.
    pub async fn create(&self, draft: SceneDraft) -> Result<Value> {
        self.client.execute(&SceneCommand::Create(draft)).await
    }

    /// Fetches one scene.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails.
    pub async fn get(&self, id: &SceneId) -> Result<Value> {
        self.client.execute(&SceneCommand::Get(id.clone())).await
    }

    /// Updates scene attributes.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails.
    pub async fn modify(&self, id: &SceneId, attributes: Map<String, Value>) -> Result<Value> {
        self.client
            .execute(&SceneCommand::Modify {
                id: id.clone(),
                attributes,
            })
            .await
    }

    /// Removes a scene.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails.
    pub async fn delete(&self, id: &SceneId) -> Result<Value> {
        self.client.execute(&SceneCommand::Delete(id.clone())).await
    }
}
