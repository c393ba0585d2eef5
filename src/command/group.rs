// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Group commands.

use serde_json::{Map, Value, json};

use crate::command::{Command, Method, StateChange};
use crate::types::DeviceId;

/// A group to be created on the bridge.
///
/// # Examples
///
/// ```
/// use hue_sdk::command::GroupDraft;
/// use hue_sdk::types::DeviceId;
///
/// let draft = GroupDraft::new("Kitchen", vec![DeviceId::from(1), DeviceId::from(2)])
///     .with_type("Room")
///     .with_class("Kitchen");
/// assert_eq!(draft.group_type(), "Room");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupDraft {
    name: String,
    lights: Vec<DeviceId>,
    group_type: String,
    class: String,
}

impl GroupDraft {
    /// Default group type.
    pub const DEFAULT_TYPE: &'static str = "LightGroup";
    /// Default room class.
    pub const DEFAULT_CLASS: &'static str = "Other";

    /// Creates a `LightGroup` of class `Other`.
    #[must_use]
    pub fn new(name: impl Into<String>, lights: Vec<DeviceId>) -> Self {
        Self {
            name: name.into(),
            lights,
            group_type: Self::DEFAULT_TYPE.to_string(),
            class: Self::DEFAULT_CLASS.to_string(),
        }
    }

    /// Sets the group type (`LightGroup`, `Room`, `Zone`, ...).
    #[must_use]
    pub fn with_type(mut self, group_type: impl Into<String>) -> Self {
        self.group_type = group_type.into();
        self
    }

    /// Sets the room class (`Living room`, `Kitchen`, ...).
    #[must_use]
    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.class = class.into();
        self
    }

    /// Returns the group type.
    #[must_use]
    pub fn group_type(&self) -> &str {
        &self.group_type
    }

    fn payload(&self) -> Value {
        json!({
            "lights": self.lights,
            "name": self.name,
            "type": self.group_type,
            "class": self.class,
        })
    }
}

/// Command addressing the `groups` resource.
#[derive(Debug, Clone, PartialEq)]
pub enum GroupCommand {
    /// Create a group.
    Create(GroupDraft),
    /// Fetch one group.
    Get(DeviceId),
    /// Update group attributes from a raw map.
    SetAttributes {
        /// Target group.
        id: DeviceId,
        /// Attributes to set.
        attributes: Map<String, Value>,
    },
    /// Rename a group and set its class.
    Rename {
        /// Target group.
        id: DeviceId,
        /// New name.
        name: String,
        /// Room class.
        class: String,
    },
    /// Replace the member lights of a group.
    SetLights {
        /// Target group.
        id: DeviceId,
        /// New members.
        lights: Vec<DeviceId>,
        /// Room class.
        class: String,
    },
    /// Apply a state change to every light in the group.
    Action {
        /// Target group.
        id: DeviceId,
        /// The change to apply.
        change: StateChange,
    },
    /// Remove a group.
    Delete(DeviceId),
}

impl Command for GroupCommand {
    fn method(&self) -> Method {
        match self {
            Self::Create(_) => Method::POST,
            Self::Get(_) => Method::GET,
            Self::SetAttributes { .. }
            | Self::Rename { .. }
            | Self::SetLights { .. }
            | Self::Action { .. } => Method::PUT,
            Self::Delete(_) => Method::DELETE,
        }
    }

    fn path(&self) -> String {
        match self {
            Self::Create(_) => "groups".to_string(),
            Self::Get(id)
            | Self::SetAttributes { id, .. }
            | Self::Rename { id, .. }
            | Self::SetLights { id, .. }
            | Self::Delete(id) => format!("groups/{id}"),
            Self::Action { id, .. } => format!("groups/{id}/action"),
        }
    }

    fn payload(&self) -> Option<Value> {
        match self {
            Self::Create(draft) => Some(draft.payload()),
            Self::Get(_) | Self::Delete(_) => None,
            Self::SetAttributes { attributes, .. } => Some(Value::Object(attributes.clone())),
            Self::Rename { name, class, .. } => Some(json!({"name": name, "class": class})),
            Self::SetLights { lights, class, .. } => {
                Some(json!({"lights": lights, "class": class}))
            }
            Self::Action { change, .. } => Some(change.payload()),
        }
    }
}
