// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Group control.

use serde_json::{Map, Value};

use crate::client::BridgeClient;
use crate::command::{GroupCommand, GroupDraft, Listing, StateChange};
use crate::error::Result;
use crate::types::{
    AlertMode, Brightness, ColorCommand, DeviceId, EffectMode, Hue, RgbColor, Saturation, SceneId,
    TransitionTime, Xy,
};

/// Operations on `/groups`.
///
/// Group `0` always exists and contains every light.
#[derive(Debug, Clone, Copy)]
pub struct Groups<'a> {
    client: &'a BridgeClient,
}

impl<'a> Groups<'a> {
    pub(crate) fn new(client: &'a BridgeClient) -> Self {
        Self { client }
    }

    /// Lists every group.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails.
    pub async fn list(&self) -> Result<Value> {
        self.client.execute(&Listing::Groups).await
    }

    /// Creates a group.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails.
    pub async fn create(&self, draft: GroupDraft) -> Result<Value> {
        self.client.execute(&GroupCommand::Create(draft)).await
    }

    /// Fetches one group.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails.
    pub async fn get(&self, id: &DeviceId) -> Result<Value> {
        self.client.execute(&GroupCommand::Get(id.clone())).await
    }

    /// Updates group attributes.
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
            .execute(&GroupCommand::SetAttributes {
                id: id.clone(),
                attributes,
            })
            .await
    }

    /// Renames a group and sets its room class.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails.
    pub async fn rename(
        &self,
        id: &DeviceId,
        name: impl Into<String>,
        class: impl Into<String>,
    ) -> Result<Value> {
        self.client
            .execute(&GroupCommand::Rename {
                id: id.clone(),
                name: name.into(),
                class: class.into(),
            })
            .await
    }

    /// Replaces the member lights of a group.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails.
    pub async fn set_lights(
        &self,
        id: &DeviceId,
        lights: Vec<DeviceId>,
        class: impl Into<String>,
    ) -> Result<Value> {
        self.client
            .execute(&GroupCommand::SetLights {
                id: id.clone(),
                lights,
                class: class.into(),
            })
            .await
    }

    /// Applies a state change to every light in the group.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails.
    pub async fn action(&self, id: &DeviceId, change: StateChange) -> Result<Value> {
        self.client
            .execute(&GroupCommand::Action {
                id: id.clone(),
                change,
            })
            .await
    }

    /// Switches the group on.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails.
    pub async fn on(&self, id: &DeviceId, transition: TransitionTime) -> Result<Value> {
        self.action(id, StateChange::on(transition)).await
    }

    /// Switches the group off.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails.
    pub async fn off(&self, id: &DeviceId, transition: TransitionTime) -> Result<Value> {
        self.action(id, StateChange::off(transition)).await
    }

    /// Sets the brightness.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails.
    pub async fn set_brightness(&self, id: &DeviceId, brightness: Brightness) -> Result<Value> {
        self.action(id, StateChange::Brightness(brightness)).await
    }

    /// Sets the hue.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails.
    pub async fn set_hue(&self, id: &DeviceId, hue: Hue) -> Result<Value> {
        self.action(id, StateChange::Hue(hue)).await
    }

    /// Sets the saturation.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails.
    pub async fn set_saturation(&self, id: &DeviceId, saturation: Saturation) -> Result<Value> {
        self.action(id, StateChange::Saturation(saturation)).await
    }

    /// Runs an alert effect.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails.
    pub async fn alert(&self, id: &DeviceId, mode: AlertMode) -> Result<Value> {
        self.action(id, StateChange::Alert(mode)).await
    }

    /// Starts or stops a dynamic effect.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails.
    pub async fn effect(&self, id: &DeviceId, mode: EffectMode) -> Result<Value> {
        self.action(id, StateChange::Effect(mode)).await
    }

    /// Sets the color by chromaticity.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails.
    pub async fn set_xy(&self, id: &DeviceId, xy: Xy, transition: TransitionTime) -> Result<Value> {
        self.action(id, StateChange::Color { xy, transition }).await
    }

    /// Sets the color from RGB channels.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::NoLuminance` for black, before anything is sent,
    /// or the request error.
    pub async fn set_rgb(
        &self,
        id: &DeviceId,
        color: RgbColor,
        transition: TransitionTime,
    ) -> Result<Value> {
        let change = StateChange::color(&ColorCommand::Rgb(color), transition)?;
        self.action(id, change).await
    }

    /// Sets the color from a `#RRGGBB` string.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::InvalidHexColor` or `ValueError::NoLuminance`
    /// before anything is sent, or the request error.
    pub async fn set_hex(
        &self,
        id: &DeviceId,
        hex: &str,
        transition: TransitionTime,
    ) -> Result<Value> {
        let change = StateChange::color(&ColorCommand::Hex(hex.to_string()), transition)?;
        self.action(id, change).await
    }

    /// Recalls a stored scene on the group.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails.
    pub async fn apply_scene(&self, id: &DeviceId, scene: SceneId) -> Result<Value> {
        self.action(id, StateChange::Scene(scene)).await
    }

    /// Removes a group.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails.
    pub async fn delete(&self, id: &DeviceId) -> Result<Value> {
        self.client.execute(&GroupCommand::Delete(id.clone())).await
    }
}
