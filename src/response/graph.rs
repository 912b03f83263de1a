// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Thermometer history graphs.
//!
//! The controller answers the same graph endpoint with two incompatible
//! point formats: day and week graphs carry one reading per timestamp,
//! month and year graphs carry a minimum and a maximum per timestamp. The
//! caller picks the matching response shape before dispatch (the mapping
//! lives in [`Period::shape`](crate::types::Period::shape)); afterwards the
//! [`GraphPoint`] trait reads both shapes through the same accessors.

use serde::Deserialize;

use crate::response::{ApiResponse, Envelope};
use crate::types::{GraphShape, Timestamp};

/// One timestamped reading in a temperature/humidity history.
///
/// The `extreme` selector picks the reading: `0` for the point value, a
/// positive value for the maximum, a negative value for the minimum. A
/// shape that does not carry the requested reading returns zero.
///
/// # Examples
///
/// ```
/// use homewizard_lib::response::{GraphPoint, SampledPoint};
///
/// let point = SampledPoint {
///     timestamp: "2015-07-05 22:15".parse().unwrap(),
///     temperature: 21.3,
///     humidity: 52,
/// };
/// assert_eq!(point.temperature(0), 21.3);
/// assert_eq!(point.temperature(1), 0.0);
/// ```
pub trait GraphPoint {
    /// Returns the point's timestamp.
    fn timestamp(&self) -> Timestamp;

    /// Returns the temperature reading selected by `extreme`, in degrees
    /// Celsius.
    fn temperature(&self, extreme: i8) -> f64;

    /// Returns the humidity reading selected by `extreme`, in percent.
    fn humidity(&self, extreme: i8) -> i64;
}

/// Point carrying a single reading; used by day and week graphs.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SampledPoint {
    /// Timestamp of the reading.
    #[serde(rename = "t")]
    pub timestamp: Timestamp,
    /// Temperature in degrees Celsius.
    #[serde(rename = "te")]
    pub temperature: f64,
    /// Relative humidity in percent.
    #[serde(rename = "hu")]
    pub humidity: i64,
}

impl GraphPoint for SampledPoint {
    fn timestamp(&self) -> Timestamp {
        self.timestamp
    }

    fn temperature(&self, extreme: i8) -> f64 {
        if extreme == 0 { self.temperature } else { 0.0 }
    }

    fn humidity(&self, extreme: i8) -> i64 {
        if extreme == 0 { self.humidity } else { 0 }
    }
}

/// Point carrying minimum and maximum readings; used by month and year
/// graphs.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MinMaxPoint {
    /// Timestamp of the aggregation window.
    #[serde(rename = "t")]
    pub timestamp: Timestamp,
    /// Highest temperature in the window.
    #[serde(rename = "te+")]
    pub temperature_max: f64,
    /// Lowest temperature in the window.
    #[serde(rename = "te-")]
    pub temperature_min: f64,
    /// Highest humidity in the window.
    #[serde(rename = "hu+")]
    pub humidity_max: i64,
    /// Lowest humidity in the window.
    #[serde(rename = "hu-")]
    pub humidity_min: i64,
}

impl GraphPoint for MinMaxPoint {
    fn timestamp(&self) -> Timestamp {
        self.timestamp
    }

    fn temperature(&self, extreme: i8) -> f64 {
        match extreme {
            0 => 0.0,
            e if e > 0 => self.temperature_max,
            _ => self.temperature_min,
        }
    }

    fn humidity(&self, extreme: i8) -> i64 {
        match extreme {
            0 => 0,
            e if e > 0 => self.humidity_max,
            _ => self.humidity_min,
        }
    }
}

/// Reply shape for day and week graphs.
#[derive(Debug, Clone, Deserialize)]
pub struct SampledGraphResponse {
    /// Common envelope.
    #[serde(flatten)]
    pub envelope: Envelope,
    /// The graph points.
    pub response: Vec<SampledPoint>,
}

impl ApiResponse for SampledGraphResponse {
    fn envelope(&self) -> &Envelope {
        &self.envelope
    }
}

/// Reply shape for month and year graphs.
#[derive(Debug, Clone, Deserialize)]
pub struct MinMaxGraphResponse {
    /// Common envelope.
    #[serde(flatten)]
    pub envelope: Envelope,
    /// The graph points.
    pub response: Vec<MinMaxPoint>,
}

impl ApiResponse for MinMaxGraphResponse {
    fn envelope(&self) -> &Envelope {
        &self.envelope
    }
}

/// A temperature/humidity history with the period-dependent point shape
/// resolved.
///
/// Once built, every point conforms to the variant's shape; the two shapes
/// are never mixed within one graph. Points are read through
/// [`GraphPoint`], so consumers never match on the variant themselves.
#[derive(Debug, Clone)]
pub enum TemperatureGraph {
    /// One reading per point (day and week windows).
    Sampled(Vec<SampledPoint>),
    /// Minimum and maximum per point (month and year windows).
    MinMax(Vec<MinMaxPoint>),
}

impl TemperatureGraph {
    /// Returns the number of points.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Sampled(points) => points.len(),
            Self::MinMax(points) => points.len(),
        }
    }

    /// Returns true when the graph has no points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the point at `index`, shape-independently.
    #[must_use]
    pub fn point(&self, index: usize) -> Option<&dyn GraphPoint> {
        match self {
            Self::Sampled(points) => points.get(index).map(|p| p as &dyn GraphPoint),
            Self::MinMax(points) => points.get(index).map(|p| p as &dyn GraphPoint),
        }
    }

    /// Iterates over the points, shape-independently.
    pub fn iter(&self) -> Box<dyn Iterator<Item = &dyn GraphPoint> + '_> {
        match self {
            Self::Sampled(points) => Box::new(points.iter().map(|p| p as &dyn GraphPoint)),
            Self::MinMax(points) => Box::new(points.iter().map(|p| p as &dyn GraphPoint)),
        }
    }

    /// Returns the shape of this graph's points.
    #[must_use]
    pub const fn shape(&self) -> GraphShape {
        match self {
            Self::Sampled(_) => GraphShape::Sampled,
            Self::MinMax(_) => GraphShape::MinMax,
        }
    }
}
