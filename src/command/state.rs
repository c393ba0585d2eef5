// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! State changes shared by lights (`lights/<id>/state`) and groups
//! (`groups/<id>/action`).

use serde_json::{Map, Value, json};

use crate::error::ValueError;
use crate::types::{
    AlertMode, Brightness, ColorCommand, EffectMode, Hue, Saturation, SceneId, TransitionTime, Xy,
};

/// A change to the state of a light or a group.
///
/// # Examples
///
/// ```
/// use hue_sdk::command::StateChange;
/// use hue_sdk::types::{ColorCommand, TransitionTime};
///
/// let on = StateChange::on(TransitionTime::default());
/// assert_eq!(on.payload(), serde_json::json!({"on": true, "transitiontime": 5}));
///
/// let red = StateChange::color(
///     &ColorCommand::Hex("#FF0000".to_string()),
///     TransitionTime::default(),
/// )
/// .unwrap();
/// assert!(red.payload().get("xy").is_some());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum StateChange {
    /// Switch on or off.
    Power {
        /// Target power state.
        on: bool,
        /// Transition to the new state.
        transition: TransitionTime,
    },
    /// Set brightness.
    Brightness(Brightness),
    /// Set hue.
    Hue(Hue),
    /// Set saturation.
    Saturation(Saturation),
    /// Set color by chromaticity.
    Color {
        /// Target chromaticity.
        xy: Xy,
        /// Transition to the new color.
        transition: TransitionTime,
    },
    /// Run an alert effect.
    Alert(AlertMode),
    /// Start or stop a dynamic effect.
    Effect(EffectMode),
    /// Recall a stored scene (groups only).
    Scene(SceneId),
    /// A raw attribute map, sent as-is.
    Raw(Map<String, Value>),
}

impl StateChange {
    /// Switches on.
    #[must_use]
    pub const fn on(transition: TransitionTime) -> Self {
        Self::Power {
            on: true,
            transition,
        }
    }

    /// Switches off.
    #[must_use]
    pub const fn off(transition: TransitionTime) -> Self {
        Self::Power {
            on: false,
            transition,
        }
    }

    /// Converts a caller color to an xy state change.
    ///
    /// # Errors
    ///
    /// Returns the color translation error for malformed hex or black.
    pub fn color(color: &ColorCommand, transition: TransitionTime) -> Result<Self, ValueError> {
        Ok(Self::Color {
            xy: color.to_chromaticity()?,
            transition,
        })
    }

    /// Decides the opposite power state from a fetched light.
    ///
    /// Returns `None` if `attributes` has no `state` object. A missing or
    /// non-boolean `state.on` reads as off.
    ///
    /// # Examples
    ///
    /// ```
    /// use hue_sdk::command::StateChange;
    /// use hue_sdk::types::TransitionTime;
    /// use serde_json::json;
    ///
    /// let t = TransitionTime::default();
    /// let lit = json!({"state": {"on": true}});
    /// assert_eq!(StateChange::toggle_from(&lit, t), Some(StateChange::off(t)));
    /// assert_eq!(StateChange::toggle_from(&json!({}), t), None);
    /// ```
    #[must_use]
    pub fn toggle_from(attributes: &Value, transition: TransitionTime) -> Option<Self> {
        let state = attributes.get("state")?.as_object()?;
        let is_on = state.get("on").and_then(Value::as_bool).unwrap_or(false);
        Some(if is_on {
            Self::off(transition)
        } else {
            Self::on(transition)
        })
    }

    /// Returns the JSON body for this change.
    #[must_use]
    pub fn payload(&self) -> Value {
        match self {
            Self::Power { on, transition } => json!({"on": on, "transitiontime": transition}),
            Self::Brightness(bri) => json!({"bri": bri.value()}),
            Self::Hue(hue) => json!({"hue": hue.value()}),
            Self::Saturation(sat) => json!({"sat": sat.value()}),
            Self::Color { xy, transition } => {
                json!({"xy": xy.to_array(), "transitiontime": transition})
            }
            Self::Alert(mode) => json!({"alert": mode}),
            Self::Effect(mode) => json!({"effect": mode}),
            Self::Scene(scene) => json!({"scene": scene.as_str()}),
            Self::Raw(map) => Value::Object(map.clone()),
        }
    }
}
