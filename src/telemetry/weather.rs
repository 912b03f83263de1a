// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Weather sensor records: rain and wind meters.

use serde::{Deserialize, Serialize};

/// A rain meter as reported by the controller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RainMeter {
    /// Rainfall today in millimeters.
    #[serde(rename = "mm")]
    pub millimeters: f64,
    /// Rainfall over the last three hours in millimeters.
    #[serde(rename = "3h")]
    pub last_three_hours: f64,
}

/// A wind meter as reported by the controller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindMeter {
    /// Current wind speed in km/h.
    #[serde(rename = "ws")]
    pub speed: f64,
    /// Compass direction, e.g. `"NW"`.
    #[serde(rename = "dir")]
    pub direction: String,
    /// Current gust speed in km/h.
    #[serde(rename = "gu")]
    pub gust: f64,
    /// Perceived temperature (wind chill) in degrees Celsius.
    #[serde(rename = "wc")]
    pub wind_chill: f64,
    /// Highest wind speed seen today.
    #[serde(rename = "ws+")]
    pub speed_max: f64,
    /// Clock time of today's highest wind speed.
    #[serde(rename = "ws+t")]
    pub speed_max_at: String,
    /// Lowest wind speed seen today.
    #[serde(rename = "ws-")]
    pub speed_min: f64,
    /// Clock time of today's lowest wind speed.
    #[serde(rename = "ws-t")]
    pub speed_min_at: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rain_meter_decodes_numeric_keys() {
        let json = r#"{"mm": 1.5, "3h": 0.2}"#;
        let rain: RainMeter = serde_json::from_str(json).unwrap();
        assert_eq!(rain.millimeters, 1.5);
        assert_eq!(rain.last_three_hours, 0.2);
    }

    #[test]
    fn wind_meter_decodes_wire_payload() {
        let json = r#"{
            "ws": 12.0,
            "dir": "NW",
            "gu": 25.5,
            "wc": 8.3,
            "ws+": 30.0,
            "ws+t": "11:20",
            "ws-": 0.0,
            "ws-t": "03:10"
        }"#;
        let wind: WindMeter = serde_json::from_str(json).unwrap();
        assert_eq!(wind.direction, "NW");
        assert_eq!(wind.speed_max, 30.0);
    }
}
