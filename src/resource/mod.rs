// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Per-resource facades.
//!
//! Each facade borrows the bridge's [`BridgeClient`](crate::client::BridgeClient),
//! builds commands for its resource and returns the raw bridge response.
//! Validation happens when the typed arguments are constructed, so an
//! invalid value never reaches the network.

mod all;
mod groups;
mod lights;
mod scenes;
mod schedules;

pub use all::All;
pub use groups::Groups;
pub use lights::Lights;
pub use scenes::Scenes;
pub use schedules::Schedules;
