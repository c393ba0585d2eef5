// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Resource identifiers.

use std::fmt;
use std::str::FromStr;

use crate::error::ValueError;

/// Checks that a textual identifier consists only of decimal digits.
///
/// # Errors
///
/// Returns `ValueError::InvalidIdentifier` for an empty string or any
/// non-digit character.
///
/// # Examples
///
/// ```
/// use hue_sdk::types::check_identifier;
///
/// assert!(check_identifier("12").is_ok());
/// assert!(check_identifier("12a").is_err());
/// ```
pub fn check_identifier(id: &str) -> Result<(), ValueError> {
    if !id.is_empty() && id.bytes().all(|b| b.is_ascii_digit()) {
        Ok(())
    } else {
        Err(ValueError::InvalidIdentifier(id.to_string()))
    }
}

/// Identifier of a light, group or schedule on the bridge.
///
/// Integers always form a valid identifier; text is accepted only if every
/// character is a decimal digit.
///
/// # Examples
///
/// ```
/// use hue_sdk::types::DeviceId;
///
/// let light = DeviceId::from(3);
/// let group: DeviceId = "12".parse().unwrap();
/// assert_eq!(light.as_str(), "3");
/// assert_eq!(group.to_string(), "12");
///
/// assert!("12a".parse::<DeviceId>().is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DeviceId(String);

impl DeviceId {
    /// Creates an identifier from text, checking its format.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::InvalidIdentifier` if the text is not all digits.
    pub fn new(id: impl Into<String>) -> Result<Self, ValueError> {
        let id = id.into();
        check_identifier(&id)?;
        Ok(Self(id))
    }

    /// Returns the identifier as it appears in resource paths.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DeviceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<u32> for DeviceId {
    fn from(id: u32) -> Self {
        Self(id.to_string())
    }
}

impl FromStr for DeviceId {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<&str> for DeviceId {
    type Error = ValueError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl serde::Serialize for DeviceId {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

/// Key of a scene stored on the bridge.
///
/// Scene keys are generated by the bridge and are alphanumeric, unlike the
/// numeric ids of lights and groups.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SceneId(String);

impl SceneId {
    /// Creates a scene key.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::InvalidSceneId` for an empty key or characters
    /// other than ASCII alphanumerics and `-`.
    pub fn new(id: impl Into<String>) -> Result<Self, ValueError> {
        let id = id.into();
        if id.is_empty() || !id.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'-') {
            return Err(ValueError::InvalidSceneId(id));
        }
        Ok(Self(id))
    }

    /// Returns the key as it appears in resource paths.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SceneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for SceneId {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn check_identifier_accepts_digits() {
        assert!(check_identifier("0").is_ok());
        assert!(check_identifier("12").is_ok());
    }

    #[test]
    fn check_identifier_rejects_other_text() {
        for id in ["12a", "", " 1", "-1", "1.0", "١٢"] {
            assert_eq!(
                check_identifier(id),
                Err(ValueError::InvalidIdentifier(id.to_string()))
            );
        }
    }

    #[test]
    fn integers_always_valid() {
        assert_eq!(DeviceId::from(12).as_str(), "12");
        assert_eq!(DeviceId::from(0), DeviceId::new("0").unwrap());
    }

    #[test]
    fn serializes_as_string() {
        let ids = vec![DeviceId::from(1), DeviceId::from(2)];
        assert_eq!(serde_json::to_value(&ids).unwrap(), serde_json::json!(["1", "2"]));
    }

    #[test]
    fn scene_ids() {
        assert!(SceneId::new("3T2SvsxvwteNNys").is_ok());
        assert!(SceneId::new("abc-123").is_ok());
        assert!(SceneId::new("").is_err());
        assert!(SceneId::new("a/b").is_err());
    }
}
