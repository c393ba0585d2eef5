// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! RGB color type with hex parsing and xy conversion.
//!
//! The bridge does not accept RGB directly; colors are converted to CIE xy
//! chromaticity with [`RgbColor::to_xy`] before they are sent.

use std::fmt;
use std::str::FromStr;

use crate::error::ValueError;

use super::Xy;

/// RGB color with 8-bit channels (0-255).
///
/// # Examples
///
/// ```
/// use hue_sdk::types::RgbColor;
///
/// let orange = RgbColor::new(255, 128, 0);
/// assert_eq!(orange.to_hex(), "#FF8000");
///
/// let red = RgbColor::from_hex("#FF0000").unwrap();
/// assert_eq!(red.red(), 255);
/// assert_eq!(red.green(), 0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct RgbColor {
    red: u8,
    green: u8,
    blue: u8,
}

impl RgbColor {
    /// Creates a new RGB color.
    #[must_use]
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// Creates an RGB color from wider integers, checking each channel.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::ColorChannelOutOfRange` naming the first channel
    /// outside [0, 255].
    ///
    /// # Examples
    ///
    /// ```
    /// use hue_sdk::types::RgbColor;
    ///
    /// assert!(RgbColor::checked(255, 0, 10).is_ok());
    /// assert!(RgbColor::checked(256, 0, 0).is_err());
    /// assert!(RgbColor::checked(0, -1, 0).is_err());
    /// ```
    pub fn checked(red: i64, green: i64, blue: i64) -> Result<Self, ValueError> {
        Ok(Self::new(
            channel("red", red)?,
            channel("green", green)?,
            channel("blue", blue)?,
        ))
    }

    /// Parses an RGB color from a `#RRGGBB` string.
    ///
    /// The leading `#` is required and exactly six hex digits must follow.
    /// The three-digit `#RGB` shorthand is not accepted.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::InvalidHexColor` if the string is not `#RRGGBB`.
    pub fn from_hex(hex: &str) -> Result<Self, ValueError> {
        let invalid = || ValueError::InvalidHexColor(hex.to_string());

        let digits = hex.strip_prefix('#').ok_or_else(invalid)?;
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        let pair = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16).map_err(|_| invalid())
        };
        Ok(Self::new(pair(0..2)?, pair(2..4)?, pair(4..6)?))
    }

    /// Returns the red component.
    #[must_use]
    pub const fn red(&self) -> u8 {
        self.red
    }

    /// Returns the green component.
    #[must_use]
    pub const fn green(&self) -> u8 {
        self.green
    }

    /// Returns the blue component.
    #[must_use]
    pub const fn blue(&self) -> u8 {
        self.blue
    }

    /// Returns `true` if every channel is zero.
    #[must_use]
    pub const fn is_black(&self) -> bool {
        self.red == 0 && self.green == 0 && self.blue == 0
    }

    /// Returns the color as an uppercase `#RRGGBB` string.
    #[must_use]
    pub fn to_hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.red, self.green, self.blue)
    }

    /// Converts this color to CIE xy chromaticity.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::NoLuminance` for black, which has no defined
    /// chromaticity.
    ///
    /// # Examples
    ///
    /// ```
    /// use hue_sdk::types::RgbColor;
    ///
    /// let xy = RgbColor::new(255, 255, 255).to_xy().unwrap();
    /// assert!((xy.x() - 0.3457).abs() < 1e-3);
    /// assert!((xy.y() - 0.3585).abs() < 1e-3);
    ///
    /// assert!(RgbColor::new(0, 0, 0).to_xy().is_err());
    /// ```
    pub fn to_xy(&self) -> Result<Xy, ValueError> {
        if self.is_black() {
            return Err(ValueError::NoLuminance);
        }

        let r = linearize(self.red);
        let g = linearize(self.green);
        let b = linearize(self.blue);

        // sRGB to XYZ, Bradford-adapted to the D50 white point.
        let x = 0.436_074_7 * r + 0.385_064_9 * g + 0.143_080_4 * b;
        let y = 0.222_504_5 * r + 0.716_878_6 * g + 0.060_616_9 * b;
        let z = 0.013_932_2 * r + 0.097_104_5 * g + 0.714_173_3 * b;

        let sum = x + y + z;
        if sum <= 0.0 {
            return Err(ValueError::NoLuminance);
        }
        Xy::new(x / sum, y / sum)
    }
}

impl fmt::Display for RgbColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for RgbColor {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl From<(u8, u8, u8)> for RgbColor {
    fn from((red, green, blue): (u8, u8, u8)) -> Self {
        Self::new(red, green, blue)
    }
}

/// A color as supplied by a caller, either as channels or as a hex string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColorCommand {
    /// Explicit RGB channels.
    Rgb(RgbColor),
    /// A `#RRGGBB` string, decoded on conversion.
    Hex(String),
}

impl ColorCommand {
    /// Converts the color to CIE xy chromaticity.
    ///
    /// # Errors
    ///
    /// Returns `InvalidHexColor` for a malformed hex string and
    /// `NoLuminance` for black.
    pub fn to_chromaticity(&self) -> Result<Xy, ValueError> {
        match self {
            Self::Rgb(rgb) => rgb.to_xy(),
            Self::Hex(hex) => RgbColor::from_hex(hex)?.to_xy(),
        }
    }
}

impl From<RgbColor> for ColorCommand {
    fn from(rgb: RgbColor) -> Self {
        Self::Rgb(rgb)
    }
}

fn channel(name: &'static str, value: i64) -> Result<u8, ValueError> {
    u8::try_from(value).map_err(|_| ValueError::ColorChannelOutOfRange {
        channel: name,
        actual: value,
    })
}

// sRGB transfer function, gamma-encoded 8-bit channel to linear [0, 1].
fn linearize(channel: u8) -> f64 {
    let c = f64::from(channel) / 255.0;
    if c <= 0.040_45 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}
