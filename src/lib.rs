// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! `hue_sdk` - A Rust library to control Philips Hue bridges.
//!
//! This library provides async APIs for the bridge's local REST interface:
//! pairing with the link button, then controlling lights, groups, scenes
//! and schedules with the issued username.
//!
//! # Supported Features
//!
//! - **Pairing**: link-button handshake with bounded retries, credentials
//!   persisted to a YAML file
//! - **Lights and groups**: power, brightness, hue, saturation, alerts,
//!   effects and colors given as RGB, `#RRGGBB` or CIE xy
//! - **Scenes and schedules**: create, inspect, modify and delete
//! - **Listings**: every collection the bridge exposes, optionally
//!   flattened into a [`Table`](table::Table)
//!
//! Values are validated before anything is sent; an out-of-range
//! brightness or a malformed id never reaches the bridge.
//!
//! # Quick Start
//!
//! ## Pairing
//!
//! ```no_run
//! use hue_sdk::credentials::{CredentialStore, StoredCredentials, YamlCredentialStore};
//! use hue_sdk::protocol::Pairing;
//!
//! #[tokio::main]
//! async fn main() -> hue_sdk::Result<()> {
//!     // Press the link button on the bridge first
//!     let session = Pairing::new("192.168.1.2")?.pair().await?;
//!
//!     let store = YamlCredentialStore::default_location()?;
//!     store.write(&StoredCredentials::from(&session))?;
//!     Ok(())
//! }
//! ```
//!
//! The `hueconn` binary does the same from the command line.
//!
//! ## Controlling Lights
//!
//! ```no_run
//! use hue_sdk::Bridge;
//! use hue_sdk::types::{Brightness, DeviceId, RgbColor, TransitionTime};
//!
//! #[tokio::main]
//! async fn main() -> hue_sdk::Result<()> {
//!     let bridge = Bridge::connect()?;
//!     let lights = bridge.lights();
//!     let hall = DeviceId::new("1")?;
//!
//!     lights.on(&hall, TransitionTime::default()).await?;
//!     lights.set_brightness(&hall, Brightness::new(200)?).await?;
//!     lights
//!         .set_rgb(&hall, RgbColor::new(255, 160, 40), TransitionTime::default())
//!         .await?;
//!     lights.toggle(&hall, TransitionTime::INSTANT).await?;
//!     Ok(())
//! }
//! ```
//!
//! ## Raw Requests
//!
//! ```no_run
//! use hue_sdk::Bridge;
//! use hue_sdk::command::{Command, Listing};
//!
//! #[tokio::main]
//! async fn main() -> hue_sdk::Result<()> {
//!     let bridge = Bridge::connect()?;
//!     let sensors = bridge.request(&Listing::Sensors.to_request()).await?;
//!     println!("{sensors}");
//!     Ok(())
//! }
//! ```

mod bridge;
pub mod client;
pub mod command;
pub mod credentials;
pub mod error;
pub mod protocol;
pub mod resource;
mod session;
pub mod table;
pub mod types;

pub use bridge::{Bridge, BridgeBuilder};
pub use client::BridgeClient;
pub use command::{Command, Request};
pub use credentials::{CredentialStore, StoredCredentials, YamlCredentialStore};
pub use error::{ConfigError, Error, ParseError, ProtocolError, Result, ValueError};
pub use protocol::{HttpConfig, Pairing, RetryPolicy};
pub use session::{BridgeSession, check_address, endpoint, pairing_endpoint};
pub use types::{
    AlertMode, Brightness, ColorCommand, DeviceId, EffectMode, Hue, RgbColor, Saturation, SceneId,
    TransitionTime, Xy,
};
