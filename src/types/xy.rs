// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! CIE 1931 xy chromaticity.

use std::fmt;

use crate::error::ValueError;

/// A point in the CIE 1931 xy chromaticity diagram.
///
/// Both coordinates lie in [0, 1] and `x + y <= 1`; the implicit
/// `z = 1 - x - y` is never stored.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Xy {
    x: f64,
    y: f64,
}

impl Xy {
    /// Creates a chromaticity from explicit coordinates.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::InvalidXy` if either coordinate is outside
    /// [0, 1], is not finite, or their sum exceeds 1.
    ///
    /// # Examples
    ///
    /// ```
    /// use hue_sdk::types::Xy;
    ///
    /// let xy = Xy::new(0.3, 0.3).unwrap();
    /// assert_eq!(xy.to_array(), [0.3, 0.3]);
    ///
    /// assert!(Xy::new(0.8, 0.4).is_err());
    /// ```
    pub fn new(x: f64, y: f64) -> Result<Self, ValueError> {
        let unit = 0.0..=1.0;
        if !unit.contains(&x) || !unit.contains(&y) || x + y > 1.0 {
            return Err(ValueError::InvalidXy { x, y });
        }
        Ok(Self { x, y })
    }

    /// Returns the x coordinate.
    #[must_use]
    pub const fn x(&self) -> f64 {
        self.x
    }

    /// Returns the y coordinate.
    #[must_use]
    pub const fn y(&self) -> f64 {
        self.y
    }

    /// Returns `[x, y]`, the shape the bridge expects.
    #[must_use]
    pub const fn to_array(&self) -> [f64; 2] {
        [self.x, self.y]
    }
}

impl fmt::Display for Xy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.4}, {:.4})", self.x, self.y)
    }
}
