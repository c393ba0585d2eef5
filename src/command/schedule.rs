// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Schedule commands.

use serde_json::{Map, Value, json};

use crate::command::{Command, Method, merge};
use crate::types::DeviceId;

/// A schedule to be created on the bridge.
///
/// `command` is the request the bridge will issue on its own, in the
/// bridge's `{address, method, body}` form.
#[derive(Debug, Clone, PartialEq)]
pub struct ScheduleDraft {
    command: Value,
    time: String,
    localtime: String,
    extra: Map<String, Value>,
}

impl ScheduleDraft {
    /// Creates a schedule firing `command` at `time` / `localtime`.
    #[must_use]
    pub fn new(command: Value, time: impl Into<String>, localtime: impl Into<String>) -> Self {
        Self {
            command,
            time: time.into(),
            localtime: localtime.into(),
            extra: Map::new(),
        }
    }

    /// Adds an extra attribute (`name`, `description`, `status`, ...).
    #[must_use]
    pub fn with_attribute(mut self, key: impl Into<String>, value: Value) -> Self {
        self.extra.insert(key.into(), value);
        self
    }

    fn payload(&self) -> Value {
        let mut base = Map::new();
        base.insert("command".into(), self.command.clone());
        base.insert("time".into(), json!(self.time));
        base.insert("localtime".into(), json!(self.localtime));
        merge(base, &self.extra)
    }
}

/// Command addressing the `schedules` resource.
#[derive(Debug, Clone, PartialEq)]
pub enum ScheduleCommand {
    /// Create a schedule.
    Create(ScheduleDraft),
    /// Fetch one schedule.
    Get(DeviceId),
    /// Update schedule attributes.
    SetAttributes {
        /// Target schedule.
        id: DeviceId,
        /// Attributes to set.
        attributes: Map<String, Value>,
    },
    /// Remove a schedule.
    Delete(DeviceId),
}

impl Command for ScheduleCommand {
    fn method(&self) -> Method {
        match self {
            Self::Create(_) => Method::POST,
            Self::Get(_) => Method::GET,
            Self::SetAttributes { .. } => Method::PUT,
            Self::Delete(_) => Method::DELETE,
        }
    }

    fn path(&self) -> String {
        match self {
            Self::Create(_) => "schedules".to_string(),
            Self::Get(id) | Self::SetAttributes { id, .. } | Self::Delete(id) => {
                format!("schedules/{id}")
            }
        }
    }

    fn payload(&self) -> Option<Value> {
        match self {
            Self::Create(draft) => Some(draft.payload()),
            Self::SetAttributes { attributes, .. } => Some(Value::Object(attributes.clone())),
            Self::Get(_) | Self::Delete(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_payload() {
        let command = json!({
            "address": "/api/user/groups/0/action",
            "method": "PUT",
            "body": {"on": false}
        });
        let draft = ScheduleDraft::new(command.clone(), "W127/T22:00:00", "W127/T22:00:00")
            .with_attribute("name", json!("Lights out"));
        let cmd = ScheduleCommand::Create(draft);

        assert_eq!(cmd.method(), Method::POST);
        assert_eq!(cmd.path(), "schedules");
        assert_eq!(
            cmd.payload(),
            Some(json!({
                "command": command,
                "time": "W127/T22:00:00",
                "localtime": "W127/T22:00:00",
                "name": "Lights out"
            }))
        );
    }

    #[test]
    fn update_and_delete() {
        let mut attributes = Map::new();
        attributes.insert("status".into(), json!("disabled"));
        let update = ScheduleCommand::SetAttributes {
            id: DeviceId::from(4),
            attributes,
        };
        assert_eq!(update.path(), "schedules/4");
        assert_eq!(update.payload(), Some(json!({"status": "disabled"})));

        let delete = ScheduleCommand::Delete(DeviceId::from(4));
        assert_eq!(delete.method(), Method::DELETE);
        assert!(delete.payload().is_none());
    }
}
