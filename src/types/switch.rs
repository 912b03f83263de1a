// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Switch state and kind types.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::ValueError;

/// On/off state of a switch.
///
/// # Examples
///
/// ```
/// use homewizard_lib::types::SwitchState;
///
/// let state = SwitchState::On;
/// assert_eq!(state.reverse(), SwitchState::Off);
/// assert_eq!(state.reverse().reverse(), state);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SwitchState {
    /// The switch is on.
    On,
    /// The switch is off.
    Off,
}

impl SwitchState {
    /// Returns the opposite state. Pure; the switch record itself is never
    /// mutated.
    #[must_use]
    pub const fn reverse(self) -> Self {
        match self {
            Self::On => Self::Off,
            Self::Off => Self::On,
        }
    }

    /// Returns the path segment used by the controller.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::On => "on",
            Self::Off => "off",
        }
    }
}

impl fmt::Display for SwitchState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SwitchState {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "on" => Ok(Self::On),
            "off" => Ok(Self::Off),
            _ => Err(ValueError::InvalidSwitchState(s.to_string())),
        }
    }
}

/// Kind of switch known to the controller.
///
/// The controller may report kinds this library does not know; those decode
/// as [`SwitchKind::Unknown`] instead of failing the whole list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SwitchKind {
    /// A plain on/off switch.
    Switch,
    /// A dimmer with a 0-100 level.
    Dimmer,
    /// A radiator valve with a temperature target.
    Radiator,
    /// Any kind this library does not recognize.
    Unknown,
}

impl SwitchKind {
    /// Returns the wire name of the kind.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Switch => "switch",
            Self::Dimmer => "dimmer",
            Self::Radiator => "radiator",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for SwitchKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Serialize for SwitchKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for SwitchKind {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(match raw.as_str() {
            "switch" => Self::Switch,
            "dimmer" => Self::Dimmer,
            "radiator" => Self::Radiator,
            _ => Self::Unknown,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reverse_is_an_involution() {
        assert_eq!(SwitchState::On.reverse(), SwitchState::Off);
        assert_eq!(SwitchState::Off.reverse(), SwitchState::On);
        assert_eq!(SwitchState::On.reverse().reverse(), SwitchState::On);
        assert_eq!(SwitchState::Off.reverse().reverse(), SwitchState::Off);
    }

    #[test]
    fn switch_state_from_str() {
        assert_eq!("on".parse::<SwitchState>().unwrap(), SwitchState::On);
        assert_eq!("off".parse::<SwitchState>().unwrap(), SwitchState::Off);
        assert!("dimmed".parse::<SwitchState>().is_err());
    }

    #[test]
    fn switch_state_wire_format() {
        assert_eq!(serde_json::to_string(&SwitchState::On).unwrap(), "\"on\"");
        let state: SwitchState = serde_json::from_str("\"off\"").unwrap();
        assert_eq!(state, SwitchState::Off);
    }

    #[test]
    fn switch_kind_wire_format() {
        let kind: SwitchKind = serde_json::from_str("\"dimmer\"").unwrap();
        assert_eq!(kind, SwitchKind::Dimmer);
    }

    #[test]
    fn unrecognized_kind_decodes_as_unknown() {
        let kind: SwitchKind = serde_json::from_str("\"hue\"").unwrap();
        assert_eq!(kind, SwitchKind::Unknown);
    }
}
