// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Transition time and effect modes.

use std::time::Duration;

use serde::Serialize;

/// Duration of a state change, in bridge units of 100 ms.
///
/// # Examples
///
/// ```
/// use hue_sdk::types::TransitionTime;
/// use std::time::Duration;
///
/// assert_eq!(TransitionTime::default().value(), 5);
/// assert_eq!(TransitionTime::new(10).as_duration(), Duration::from_secs(1));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct TransitionTime(u16);

impl TransitionTime {
    /// Transition used when none is given (500 ms).
    pub const DEFAULT: Self = Self(5);

    /// Changes apply immediately.
    pub const INSTANT: Self = Self(0);

    /// Creates a transition time from a number of 100 ms units.
    #[must_use]
    pub const fn new(units: u16) -> Self {
        Self(units)
    }

    /// Returns the number of 100 ms units.
    #[must_use]
    pub const fn value(&self) -> u16 {
        self.0
    }

    /// Returns the transition as a [`Duration`].
    #[must_use]
    pub fn as_duration(&self) -> Duration {
        Duration::from_millis(u64::from(self.0) * 100)
    }
}

impl Default for TransitionTime {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Temporary alert effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertMode {
    /// Stop any running alert.
    None,
    /// A single breathe cycle.
    #[default]
    Select,
    /// Breathe cycles for 15 seconds.
    LSelect,
}

/// Dynamic light effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EffectMode {
    /// No effect.
    None,
    /// Cycle through all hues at the current brightness and saturation.
    #[default]
    ColorLoop,
}
