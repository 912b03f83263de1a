// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Thermometer records.

use serde::{Deserialize, Serialize};

/// A thermometer as reported by the controller, with the day's extremes.
///
/// The `+`/`-` wire suffixes mark maximum and minimum readings; the `…t`
/// companions carry the clock time the extreme was seen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Thermometer {
    /// Controller-assigned id.
    pub id: u32,
    /// User-visible name.
    pub name: String,
    /// Radio pairing code.
    pub code: String,
    /// `"yes"` when marked as a favorite.
    pub favorite: String,
    /// Hardware model number.
    pub model: i64,
    /// `"yes"` when the sensor reports a low battery.
    #[serde(rename = "lowBattery")]
    pub low_battery: String,
    /// `"yes"` when the sensor is mounted outside.
    pub outside: String,
    /// Sensor firmware version.
    pub version: f64,
    /// Current temperature in degrees Celsius.
    #[serde(rename = "te")]
    pub temperature: f64,
    /// Highest temperature seen today.
    #[serde(rename = "te+")]
    pub temperature_max: f64,
    /// Clock time of today's highest temperature.
    #[serde(rename = "te+t")]
    pub temperature_max_at: String,
    /// Lowest temperature seen today.
    #[serde(rename = "te-")]
    pub temperature_min: f64,
    /// Clock time of today's lowest temperature.
    #[serde(rename = "te-t")]
    pub temperature_min_at: String,
    /// Current relative humidity in percent.
    #[serde(rename = "hu")]
    pub humidity: i64,
    /// Highest humidity seen today.
    #[serde(rename = "hu+")]
    pub humidity_max: i64,
    /// Clock time of today's highest humidity.
    #[serde(rename = "hu+t")]
    pub humidity_max_at: String,
    /// Lowest humidity seen today.
    #[serde(rename = "hu-")]
    pub humidity_min: i64,
    /// Clock time of today's lowest humidity.
    #[serde(rename = "hu-t")]
    pub humidity_min_at: String,
}
