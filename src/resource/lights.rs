// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Light control.

use serde_json::Value;

use crate::client::BridgeClient;
use crate::command::{Command, LightCommand, Listing, StateChange};
use crate::error::{Error, Result};
use crate::types::{
    AlertMode, Brightness, ColorCommand, DeviceId, EffectMode, Hue, RgbColor, Saturation,
    TransitionTime, Xy,
};

/// Operations on `/lights`.
///
/// Obtained from [`Bridge::lights`](crate::Bridge::lights).
///
/// # Examples
///
/// ```no_run
/// use hue_sdk::Bridge;
/// use hue_sdk::types::{Brightness, DeviceId, RgbColor, TransitionTime};
///
/// # async fn example() -> hue_sdk::Result<()> {
/// let bridge = Bridge::connect()?;
/// let lights = bridge.lights();
/// let desk = DeviceId::from(1);
///
/// lights.on(&desk, TransitionTime::default()).await?;
/// lights.set_brightness(&desk, Brightness::new(200)?).await?;
/// lights.set_rgb(&desk, RgbColor::new(255, 120, 0), TransitionTime::default()).await?;
/// lights.toggle(&desk, TransitionTime::default()).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Lights<'a> {
    client: &'a BridgeClient,
}

impl<'a> Lights<'a> {
    pub(crate) fn new(client: &'a BridgeClient) -> Self {
        Self { client }
    }

    /// Lists every light.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails.
    pub async fn list(&self) -> Result<Value> {
        self.client.execute(&Listing::Lights).await
    }

    /// Lists lights found by the last search.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails.
    pub async fn new_lights(&self) -> Result<Value> {
        self.client.execute(&LightCommand::GetNew).await
    }

    /// Starts a search for new lights, optionally by serial number.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails.
    pub async fn search(&self, device_ids: Vec<String>) -> Result<Value> {
        self.client
            .execute(&LightCommand::Search { device_ids })
            .await
    }

    /// Fetches the attributes and state of a light.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails.
    pub async fn get(&self, id: &DeviceId) -> Result<Value> {
        self.client.execute(&LightCommand::Get(id.clone())).await
    }

    /// Renames a light.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails.
    pub async fn rename(&self, id: &DeviceId, name: impl Into<String>) -> Result<Value> {
        self.client
            .execute(&LightCommand::Rename {
                id: id.clone(),
                name: name.into(),
            })
            .await
    }

    /// Applies a state change.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails.
    pub async fn set_state(&self, id: &DeviceId, change: StateChange) -> Result<Value> {
        self.client
            .execute(&LightCommand::SetState {
                id: id.clone(),
                change,
            })
            .await
    }

    /// Switches a light on.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails.
    pub async fn on(&self, id: &DeviceId, transition: TransitionTime) -> Result<Value> {
        self.set_state(id, StateChange::on(transition)).await
    }

    /// Switches a light off.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails.
    pub async fn off(&self, id: &DeviceId, transition: TransitionTime) -> Result<Value> {
        self.set_state(id, StateChange::off(transition)).await
    }

    /// Switches a light to the opposite of its current power state.
    ///
    /// Reads the light first, then sends the opposite on/off change.
    ///
    /// # Errors
    ///
    /// Returns `Error::AttributeFetch` if the light has no `state`, or the
    /// error of either request.
    pub async fn toggle(&self, id: &DeviceId, transition: TransitionTime) -> Result<Value> {
        let attributes = self.get(id).await?;
        let change = StateChange::toggle_from(&attributes, transition).ok_or_else(|| {
            Error::AttributeFetch {
                path: LightCommand::Get(id.clone()).path(),
            }
        })?;
        self.set_state(id, change).await
    }

    /// Sets the brightness.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails.
    pub async fn set_brightness(&self, id: &DeviceId, brightness: Brightness) -> Result<Value> {
        self.set_state(id, StateChange::Brightness(brightness)).await
    }

    /// Sets the hue.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails.
    pub async fn set_hue(&self, id: &DeviceId, hue: Hue) -> Result<Value> {
        self.set_state(id, StateChange::Hue(hue)).await
    }

    /// Sets the saturation.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails.
    pub async fn set_saturation(&self, id: &DeviceId, saturation: Saturation) -> Result<Value> {
        self.set_state(id, StateChange::Saturation(saturation)).await
    }

    /// Runs an alert effect.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails.
    pub async fn alert(&self, id: &DeviceId, mode: AlertMode) -> Result<Value> {
        self.set_state(id, StateChange::Alert(mode)).await
    }

    /// Starts or stops a dynamic effect.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails.
    pub async fn effect(&self, id: &DeviceId, mode: EffectMode) -> Result<Value> {
        self.set_state(id, StateChange::Effect(mode)).await
    }

    /// Sets the color by chromaticity.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails.
    pub async fn set_xy(&self, id: &DeviceId, xy: Xy, transition: TransitionTime) -> Result<Value> {
        self.set_state(id, StateChange::Color { xy, transition })
            .await
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
        self.set_state(id, change).await
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
        self.set_state(id, change).await
    }

    /// Removes a light from the bridge.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails.
    pub async fn delete(&self, id: &DeviceId) -> Result<Value> {
        self.client.execute(&LightCommand::Delete(id.clone())).await
    }
}
