// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Scene commands.

use serde_json::{Map, Value, json};

use crate::command::{Command, Method, merge};
use crate::types::{DeviceId, SceneId};

/// What a new scene captures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SceneTarget {
    /// Every light of a group (`GroupScene`).
    Group(DeviceId),
    /// An explicit list of lights (`LightScene`).
    Lights(Vec<DeviceId>),
}

/// A scene to be created on the bridge.
///
/// The bridge snapshots the current state of the target lights.
///
/// ```
/// use hue_sdk::command::{SceneDraft, SceneTarget};
/// use hue_sdk::types::DeviceId;
///
/// let draft = SceneDraft::new("Evening", SceneTarget::Group(DeviceId::from(1)))
///     .with_attribute("transitiontime", serde_json::json!(20));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SceneDraft {
    name: String,
    recycle: bool,
    target: SceneTarget,
    extra: Map<String, Value>,
}

impl SceneDraft {
    /// Creates a non-recyclable scene.
    #[must_use]
    pub fn new(name: impl Into<String>, target: SceneTarget) -> Self {
        Self {
            name: name.into(),
            recycle: false,
            target,
            extra: Map::new(),
        }
    }

    /// Lets the bridge delete the scene when it runs out of space.
    #[must_use]
    pub fn recyclable(mut self, recycle: bool) -> Self {
        self.recycle = recycle;
        self
    }

    /// Adds an extra attribute to the request body.
    #[must_use]
    pub fn with_attribute(mut self, key: impl Into<String>, value: Value) -> Self {
        self.extra.insert(key.into(), value);
        self
    }

    fn payload(&self) -> Value {
        let mut base = Map::new();
        base.insert("name".into(), json!(self.name));
        base.insert("recycle".into(), json!(self.recycle));
        match &self.target {
            SceneTarget::Group(group) => {
                base.insert("type".into(), json!("GroupScene"));
                base.insert("group".into(), json!(group));
            }
            SceneTarget::Lights(lights) => {
                base.insert("type".into(), json!("LightScene"));
                base.insert("lights".into(), json!(lights));
            }
        }
        merge(base, &self.extra)
    }
}

/// Command addressing the `scenes` resource.
#[derive(Debug, Clone, PartialEq)]
pub enum SceneCommand {
    /// Create a scene.
    Create(SceneDraft),
    /// Fetch one scene, including its light states.
    Get(SceneId),
    /// Update scene attributes (`name`, `lights`, `storelightstate`, ...).
    Modify {
        /// Target scene.
        id: SceneId,
        /// Attributes to set.
        attributes: Map<String, Value>,
    },
    /// Remove a scene.
    Delete(SceneId),
}

impl Command for SceneCommand {
    fn method(&self) -> Method {
        match self {
            Self::Create(_) => Method::POST,
            Self::Get(_) => Method::GET,
            Self::Modify { .. } => Method::PUT,
            Self::Delete(_) => Method::DELETE,
        }
    }

    fn path(&self) -> String {
        match self {
            Self::Create(_) => "scenes".to_string(),
            Self::Get(id) | Self::Modify { id, .. } | Self::Delete(id) => format!("scenes/{id}"),
        }
    }

    fn payload(&self) -> Option<Value> {
        match self {
            Self::Create(draft) => Some(draft.payload()),
            Self::Modify { attributes, .. } => Some(Value::Object(attributes.clone())),
            Self::Get(_) | Self::Delete(_) => None,
        }
    }
}
