// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Value types for bridge commands.
//!
//! Each type checks its value at construction time, so anything that
//! reaches a command builder is already valid.
//!
//! # Types
//!
//! - [`RgbColor`] / [`ColorCommand`] - caller-facing colors, converted to [`Xy`]
//! - [`Xy`] - CIE 1931 chromaticity, the bridge's native color space
//! - [`Brightness`] (1-254), [`Hue`] (0-65535), [`Saturation`] (0-254)
//! - [`DeviceId`] - numeric light, group or schedule id
//! - [`SceneId`] - alphanumeric scene key
//! - [`TransitionTime`], [`AlertMode`], [`EffectMode`]

mod attribute;
mod device_id;
mod rgb_color;
mod transition;
mod xy;

pub use attribute::{AttributeBound, Brightness, Hue, Saturation, check_range};
pub use device_id::{DeviceId, SceneId, check_identifier};
pub use rgb_color::{ColorCommand, RgbColor};
pub use transition::{AlertMode, EffectMode, TransitionTime};
pub use xy::Xy;
