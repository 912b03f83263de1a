// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Timestamps in the controller's wire format.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDateTime;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::ParseError;

/// A timestamp as sent by the controller: `"2015-07-05 22:18"`.
///
/// The controller reports local time without a timezone or seconds, so this
/// wraps a [`NaiveDateTime`] with minute precision. Use [`Timestamp::naive`]
/// and chrono's `format()` for custom rendering.
///
/// # Examples
///
/// ```
/// use homewizard_lib::types::Timestamp;
///
/// let ts: Timestamp = "2015-07-05 22:18".parse().unwrap();
/// assert_eq!(ts.naive().format("%H:%M").to_string(), "22:18");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(NaiveDateTime);

impl Timestamp {
    /// The controller's wire format, as a chrono format string.
    pub const WIRE_FORMAT: &'static str = "%Y-%m-%d %H:%M";

    /// Returns the wrapped datetime.
    #[must_use]
    pub const fn naive(&self) -> NaiveDateTime {
        self.0
    }
}

impl FromStr for Timestamp {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NaiveDateTime::parse_from_str(s, Self::WIRE_FORMAT)
            .map(Self)
            .map_err(|_| ParseError::Timestamp(s.to_string()))
    }
}

impl From<NaiveDateTime> for Timestamp {
    fn from(naive: NaiveDateTime) -> Self {
        Self(naive)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(Self::WIRE_FORMAT))
    }
}

impl Serialize for Timestamp {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&self.0.format(Self::WIRE_FORMAT))
    }
}

impl<'de> Deserialize<'de> for Timestamp {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(D::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    #[test]
    fn parse_wire_format() {
        let ts: Timestamp = "2015-07-05 22:18".parse().unwrap();
        assert_eq!(ts.naive().year(), 2015);
        assert_eq!(ts.naive().month(), 7);
        assert_eq!(ts.naive().day(), 5);
        assert_eq!(ts.naive().hour(), 22);
        assert_eq!(ts.naive().minute(), 18);
    }

    #[test]
    fn parse_invalid_returns_error() {
        let err = "05-07-2015 22:18".parse::<Timestamp>().unwrap_err();
        assert!(matches!(err, ParseError::Timestamp(s) if s == "05-07-2015 22:18"));
        assert!("".parse::<Timestamp>().is_err());
    }

    #[test]
    fn display_round_trips() {
        let ts: Timestamp = "2015-07-05 22:18".parse().unwrap();
        assert_eq!(ts.to_string(), "2015-07-05 22:18");
    }

    #[test]
    fn json_round_trip() {
        let ts: Timestamp = serde_json::from_str("\"2015-07-05 22:18\"").unwrap();
        assert_eq!(serde_json::to_string(&ts).unwrap(), "\"2015-07-05 22:18\"");
    }

    #[test]
    fn json_rejects_other_formats() {
        let result: Result<Timestamp, _> = serde_json::from_str("\"2015-07-05T22:18:00Z\"");
        assert!(result.is_err());
    }

    #[test]
    fn ordering_follows_time() {
        let earlier: Timestamp = "2015-07-05 22:18".parse().unwrap();
        let later: Timestamp = "2015-07-06 08:00".parse().unwrap();
        assert!(earlier < later);
    }
}
