// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Whole-collection queries.

use serde_json::Value;

use crate::command::{Command, Method};

/// Lists every resource of one kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Listing {
    /// `lights`
    Lights,
    /// `groups`
    Groups,
    /// `schedules`
    Schedules,
    /// `scenes`
    Scenes,
    /// `sensors`
    Sensors,
    /// `rules`
    Rules,
    /// `info/timezones`
    Timezones,
    /// `resourcelinks`
    ResourceLinks,
    /// `capabilities`
    Capabilities,
}

impl Listing {
    /// Every listing, in the order the bridge documents them.
    pub const ALL: [Self; 9] = [
        Self::Lights,
        Self::Groups,
        Self::Schedules,
        Self::Scenes,
        Self::Sensors,
        Self::Rules,
        Self::Timezones,
        Self::ResourceLinks,
        Self::Capabilities,
    ];
}

impl Command for Listing {
    fn method(&self) -> Method {
        Method::GET
    }

    fn path(&self) -> String {
        match self {
            Self::Lights => "lights",
            Self::Groups => "groups",
            Self::Schedules => "schedules",
            Self::Scenes => "scenes",
            Self::Sensors => "sensors",
            Self::Rules => "rules",
            Self::Timezones => "info/timezones",
            Self::ResourceLinks => "resourcelinks",
            Self::Capabilities => "capabilities",
        }
        .to_string()
    }

    fn payload(&self) -> Option<Value> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn listings_are_bodiless_gets() {
        for listing in Listing::ALL {
            let request = listing.to_request();
            assert_eq!(request.method(), &Method::GET);
            assert!(request.payload().is_none());
        }
    }

    #[test]
    fn timezones_path() {
        assert_eq!(Listing::Timezones.path(), "info/timezones");
    }
}
