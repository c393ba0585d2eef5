// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Bridge command definitions.
//!
//! Commands are pure descriptions of a request: a method, a resource path
//! relative to `/api/<username>`, and an optional JSON payload. Building a
//! command never performs I/O.
//!
//! # Available Commands
//!
//! | Command Type | Resource | Example |
//! |-------------|----------|---------|
//! | [`LightCommand`] | `lights` | Rename, set state, delete |
//! | [`GroupCommand`] | `groups` | Create, action, apply scene |
//! | [`SceneCommand`] | `scenes` | Create, modify |
//! | [`ScheduleCommand`] | `schedules` | Create, update |
//! | [`Listing`] | any | List every resource of a kind |
//!
//! State changes shared by lights and groups live in [`StateChange`].
//!
//! # Examples
//!
//! ```
//! use hue_sdk::command::{Command, LightCommand, Method, StateChange};
//! use hue_sdk::types::{Brightness, DeviceId};
//!
//! let cmd = LightCommand::SetState {
//!     id: DeviceId::from(1),
//!     change: StateChange::Brightness(Brightness::new(200).unwrap()),
//! };
//!
//! let request = cmd.to_request();
//! assert_eq!(request.method(), &Method::PUT);
//! assert_eq!(request.path(), "lights/1/state");
//! assert_eq!(request.payload(), Some(&serde_json::json!({"bri": 200})));
//! ```

mod group;
mod light;
mod listing;
mod scene;
mod schedule;
mod state;

pub use group::{GroupCommand, GroupDraft};
pub use light::LightCommand;
pub use listing::Listing;
pub use reqwest::Method;
pub use scene::{SceneCommand, SceneDraft, SceneTarget};
pub use schedule::{ScheduleCommand, ScheduleDraft};
pub use state::StateChange;

use serde_json::{Map, Value};

/// A command that can be sent to the bridge.
pub trait Command {
    /// Returns the HTTP method.
    fn method(&self) -> Method;

    /// Returns the resource path relative to the authenticated base URL.
    ///
    /// For example, `"lights"`, `"lights/3/state"`, `"groups/1/action"`.
    fn path(&self) -> String;

    /// Returns the JSON body, if any.
    fn payload(&self) -> Option<Value>;

    /// Assembles the full request description.
    fn to_request(&self) -> Request {
        Request::new(self.method(), self.path(), self.payload())
    }
}

/// A request ready to be sent: method, relative path and optional body.
#[derive(Debug, Clone, PartialEq)]
pub struct Request {
    method: Method,
    path: String,
    payload: Option<Value>,
}

impl Request {
    /// Creates a request.
    #[must_use]
    pub fn new(method: Method, path: impl Into<String>, payload: Option<Value>) -> Self {
        Self {
            method,
            path: path.into(),
            payload,
        }
    }

    /// Creates a `GET` request without a body.
    #[must_use]
    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path, None)
    }

    /// Returns the HTTP method.
    #[must_use]
    pub fn method(&self) -> &Method {
        &self.method
    }

    /// Returns the resource path.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Returns the JSON body.
    #[must_use]
    pub fn payload(&self) -> Option<&Value> {
        self.payload.as_ref()
    }
}

// Merges `extra` into `base`; keys already in `base` are overwritten.
fn merge(mut base: Map<String, Value>, extra: &Map<String, Value>) -> Value {
    for (key, value) in extra {
        base.insert(key.clone(), value.clone());
    }
    Value::Object(base)
}
