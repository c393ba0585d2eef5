// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Range-checked light attributes.
//!
//! Each attribute type runs [`check_range`] against its [`AttributeBound`]
//! when constructed, so an out-of-range value is rejected before a request
//! is built.

use std::fmt;

use crate::error::ValueError;

/// Inclusive bounds for a numeric bridge attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttributeBound {
    /// Attribute name as used in bridge payloads.
    pub name: &'static str,
    /// Smallest accepted value.
    pub min: u32,
    /// Largest accepted value.
    pub max: u32,
}

impl AttributeBound {
    /// Brightness, `bri`: 1-254.
    pub const BRIGHTNESS: Self = Self {
        name: "bri",
        min: 1,
        max: 254,
    };

    /// Hue, `hue`: 0-65535.
    pub const HUE: Self = Self {
        name: "hue",
        min: 0,
        max: 65_535,
    };

    /// Saturation, `sat`: 0-254.
    pub const SATURATION: Self = Self {
        name: "sat",
        min: 0,
        max: 254,
    };

    /// Returns `true` if `value` lies within the bound.
    #[must_use]
    pub fn contains(&self, value: i64) -> bool {
        (i64::from(self.min)..=i64::from(self.max)).contains(&value)
    }
}

/// Checks `value` against `bound`, returning it unchanged when it fits.
///
/// # Errors
///
/// Returns `ValueError::OutOfRange` carrying the bound and the value.
///
/// # Examples
///
/// ```
/// use hue_sdk::types::{check_range, AttributeBound};
///
/// assert_eq!(check_range(&AttributeBound::BRIGHTNESS, 1), Ok(1));
/// assert_eq!(check_range(&AttributeBound::BRIGHTNESS, 254), Ok(254));
/// assert!(check_range(&AttributeBound::BRIGHTNESS, 0).is_err());
/// assert!(check_range(&AttributeBound::BRIGHTNESS, 255).is_err());
/// ```
pub fn check_range(bound: &AttributeBound, value: i64) -> Result<i64, ValueError> {
    if bound.contains(value) {
        Ok(value)
    } else {
        Err(ValueError::OutOfRange {
            name: bound.name,
            min: bound.min,
            max: bound.max,
            actual: value,
        })
    }
}

macro_rules! bounded_attribute {
    ($(#[$meta:meta])* $name:ident($repr:ty), $bound:expr) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name($repr);

        impl $name {
            /// Bound this attribute is checked against.
            pub const BOUND: AttributeBound = $bound;

            /// Creates a new value, checking it against [`Self::BOUND`].
            ///
            /// # Errors
            ///
            /// Returns `ValueError::OutOfRange` if the value is out of bounds.
            pub fn new(value: impl Into<i64>) -> Result<Self, ValueError> {
                let value = check_range(&Self::BOUND, value.into())?;
                // In range, so the conversion cannot fail.
                <$repr>::try_from(value)
                    .map(Self)
                    .map_err(|_| ValueError::OutOfRange {
                        name: Self::BOUND.name,
                        min: Self::BOUND.min,
                        max: Self::BOUND.max,
                        actual: value,
                    })
            }

            /// Returns the raw value.
            #[must_use]
            pub const fn value(&self) -> $repr {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl TryFrom<i64> for $name {
            type Error = ValueError;

            fn try_from(value: i64) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }
    };
}

bounded_attribute!(
    /// Light brightness, 1 (dimmest) to 254 (brightest).
    ///
    /// ```
    /// use hue_sdk::types::Brightness;
    ///
    /// assert_eq!(Brightness::new(128).unwrap().value(), 128);
    /// assert!(Brightness::new(0).is_err());
    /// ```
    Brightness(u8),
    AttributeBound::BRIGHTNESS
);

bounded_attribute!(
    /// Hue on the bridge's wheel, 0 to 65535 (both red).
    Hue(u16),
    AttributeBound::HUE
);

bounded_attribute!(
    /// Color saturation, 0 (white) to 254 (fully colored).
    Saturation(u8),
    AttributeBound::SATURATION
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn brightness_bounds_are_inclusive() {
        assert!(Brightness::new(1).is_ok());
        assert!(Brightness::new(254).is_ok());
        assert_eq!(
            Brightness::new(0),
            Err(ValueError::OutOfRange {
                name: "bri",
                min: 1,
                max: 254,
                actual: 0
            })
        );
        assert!(Brightness::new(255).is_err());
    }

    #[test]
    fn hue_bounds() {
        assert_eq!(Hue::new(0).unwrap().value(), 0);
        assert_eq!(Hue::new(65_535).unwrap().value(), 65_535);
        assert!(Hue::new(65_536).is_err());
        assert!(Hue::new(-1).is_err());
    }

    #[test]
    fn saturation_bounds() {
        assert!(Saturation::new(0).is_ok());
        assert!(Saturation::new(254).is_ok());
        assert!(Saturation::new(255).is_err());
    }

    #[test]
    fn check_range_returns_value() {
        assert_eq!(check_range(&AttributeBound::HUE, 1234), Ok(1234));
    }

    #[test]
    fn error_carries_attribute_name() {
        let err = Saturation::new(300).unwrap_err();
        assert_eq!(err.to_string(), "sat value 300 is out of range [0, 254]");
    }

    #[test]
    fn try_from_i64() {
        let bri = Brightness::try_from(42_i64).unwrap();
        assert_eq!(bri.to_string(), "42");
    }
}
