// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Light commands.

use serde_json::{Value, json};

use crate::command::{Command, Method, StateChange};
use crate::types::DeviceId;

/// Command addressing the `lights` resource.
///
/// # Examples
///
/// ```
/// use hue_sdk::command::{Command, LightCommand, Method};
/// use hue_sdk::types::DeviceId;
///
/// let rename = LightCommand::Rename {
///     id: DeviceId::from(2),
///     name: "Desk".to_string(),
/// };
/// assert_eq!(rename.method(), Method::PUT);
/// assert_eq!(rename.path(), "lights/2");
///
/// let delete = LightCommand::Delete(DeviceId::from(2));
/// assert_eq!(delete.method(), Method::DELETE);
/// assert_eq!(delete.payload(), None);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum LightCommand {
    /// Fetch the attributes and state of one light.
    Get(DeviceId),
    /// List lights found by the last search.
    GetNew,
    /// Start a search for new lights, optionally for specific serials.
    Search {
        /// Serial numbers to look for; empty searches for any light.
        device_ids: Vec<String>,
    },
    /// Rename a light.
    Rename {
        /// Target light.
        id: DeviceId,
        /// New name.
        name: String,
    },
    /// Change the state of a light.
    SetState {
        /// Target light.
        id: DeviceId,
        /// The change to apply.
        change: StateChange,
    },
    /// Remove a light from the bridge.
    Delete(DeviceId),
}

impl Command for LightCommand {
    fn method(&self) -> Method {
        match self {
            Self::Get(_) | Self::GetNew => Method::GET,
            Self::Search { .. } => Method::POST,
            Self::Rename { .. } | Self::SetState { .. } => Method::PUT,
            Self::Delete(_) => Method::DELETE,
        }
    }

    fn path(&self) -> String {
        match self {
            Self::Get(id) | Self::Rename { id, .. } | Self::Delete(id) => format!("lights/{id}"),
            Self::GetNew => "lights/new".to_string(),
            Self::Search { .. } => "lights".to_string(),
            Self::SetState { id, .. } => format!("lights/{id}/state"),
        }
    }

    fn payload(&self) -> Option<Value> {
        match self {
            Self::Get(_) | Self::GetNew | Self::Delete(_) => None,
            Self::Search { device_ids } if device_ids.is_empty() => Some(json!({})),
            Self::Search { device_ids } => Some(json!({"deviceid": device_ids})),
            Self::Rename { name, .. } => Some(json!({"name": name})),
            Self::SetState { change, .. } => Some(change.payload()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::TransitionTime;

    #[test]
    fn get_paths() {
        assert_eq!(LightCommand::Get(DeviceId::from(7)).path(), "lights/7");
        assert_eq!(LightCommand::GetNew.path(), "lights/new");
        assert_eq!(LightCommand::GetNew.method(), Method::GET);
    }

    #[test]
    fn set_state_targets_state_endpoint() {
        let cmd = LightCommand::SetState {
            id: DeviceId::from(1),
            change: StateChange::on(TransitionTime::default()),
        };
        let request = cmd.to_request();
        assert_eq!(request.method(), &Method::PUT);
        assert_eq!(request.path(), "lights/1/state");
        assert_eq!(
            request.payload(),
            Some(&json!({"on": true, "transitiontime": 5}))
        );
    }

    #[test]
    fn search_payloads() {
        let any = LightCommand::Search { device_ids: vec![] };
        assert_eq!(any.method(), Method::POST);
        assert_eq!(any.payload(), Some(json!({})));

        let specific = LightCommand::Search {
            device_ids: vec!["45AF34".to_string()],
        };
        assert_eq!(specific.payload(), Some(json!({"deviceid": ["45AF34"]})));
    }

    #[test]
    fn rename_payload() {
        let cmd = LightCommand::Rename {
            id: DeviceId::from(3),
            name: "Porch".to_string(),
        };
        assert_eq!(cmd.payload(), Some(json!({"name": "Porch"})));
    }
}
