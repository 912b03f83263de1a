// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Time periods for thermometer history graphs.

use std::fmt;
use std::str::FromStr;

use crate::error::ValueError;

/// Time window of a thermometer history graph.
///
/// The controller only understands these four windows; anything else is
/// rejected at parse time, before a request is built.
///
/// # Examples
///
/// ```
/// use homewizard_lib::types::Period;
///
/// let period: Period = "week".parse().unwrap();
/// assert_eq!(period, Period::Week);
/// assert!("nextweek".parse::<Period>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Period {
    /// The last 24 hours.
    Day,
    /// The last 7 days.
    Week,
    /// The last month.
    Month,
    /// The last year.
    Year,
}

impl Period {
    /// Returns the path segment used by the controller.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Day => "day",
            Self::Week => "week",
            Self::Month => "month",
            Self::Year => "year",
        }
    }

    /// Returns the point shape the controller uses for this window.
    ///
    /// Day and week graphs carry one reading per point; month and year
    /// graphs carry a minimum and a maximum per point. The mapping is fixed
    /// by the controller firmware and decided here, before any request is
    /// made.
    #[must_use]
    pub const fn shape(&self) -> GraphShape {
        match self {
            Self::Day | Self::Week => GraphShape::Sampled,
            Self::Month | Self::Year => GraphShape::MinMax,
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Period {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "day" => Ok(Self::Day),
            "week" => Ok(Self::Week),
            "month" => Ok(Self::Month),
            "year" => Ok(Self::Year),
            _ => Err(ValueError::InvalidPeriod(s.to_string())),
        }
    }
}

/// Wire shape of the points in a graph response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GraphShape {
    /// One reading per timestamp.
    Sampled,
    /// Minimum and maximum reading per timestamp.
    MinMax,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn period_as_str() {
        assert_eq!(Period::Day.as_str(), "day");
        assert_eq!(Period::Week.as_str(), "week");
        assert_eq!(Period::Month.as_str(), "month");
        assert_eq!(Period::Year.as_str(), "year");
    }

    #[test]
    fn period_from_str() {
        assert_eq!("day".parse::<Period>().unwrap(), Period::Day);
        assert_eq!("year".parse::<Period>().unwrap(), Period::Year);
    }

    #[test]
    fn period_from_str_invalid() {
        let err = "nextweek".parse::<Period>().unwrap_err();
        assert!(matches!(err, ValueError::InvalidPeriod(s) if s == "nextweek"));
    }

    #[test]
    fn period_shape_mapping() {
        assert_eq!(Period::Day.shape(), GraphShape::Sampled);
        assert_eq!(Period::Week.shape(), GraphShape::Sampled);
        assert_eq!(Period::Month.shape(), GraphShape::MinMax);
        assert_eq!(Period::Year.shape(), GraphShape::MinMax);
    }

    #[test]
    fn period_display_round_trip() {
        for period in [Period::Day, Period::Week, Period::Month, Period::Year] {
            assert_eq!(period.to_string().parse::<Period>().unwrap(), period);
        }
    }
}
