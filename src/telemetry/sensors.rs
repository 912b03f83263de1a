// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The aggregated sensor overview and its camera/motion-sensor records.

use serde::{Deserialize, Serialize};

use crate::telemetry::{EnergyMeter, RainMeter, SwitchList, Thermometer, WindMeter};
use crate::types::Timestamp;

/// An IP camera registered with the controller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Camera {
    /// Controller-assigned id.
    pub id: u32,
    /// Camera address on the local network.
    pub ip: String,
    /// Operating mode number.
    pub mode: i64,
    /// Hardware model number.
    pub model: i64,
    /// User-visible name.
    pub name: String,
    /// Camera password.
    pub password: String,
    /// Camera port, as a string on the wire.
    pub port: String,
    /// Camera username.
    pub username: String,
    /// Stream URL parts.
    pub url: CameraUrl,
}

/// Stream URL parts of a [`Camera`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CameraUrl {
    /// Authentication part of the URL.
    pub auth: String,
    /// Path part of the URL.
    pub path: String,
    /// Query part of the URL.
    pub query: String,
}

/// A wireless motion or contact sensor ("kakusensor" on the wire).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MotionSensor {
    /// Controller-assigned id.
    pub id: u32,
    /// User-visible name.
    pub name: String,
    /// Sensor type, e.g. `"motion"` or `"doorbell"`.
    #[serde(rename = "type")]
    pub kind: String,
    /// Last reported status.
    pub status: String,
    /// Clock time of the last trigger.
    pub timestamp: String,
    /// Id of a linked camera, or a negative value when none is linked.
    #[serde(rename = "cameraid")]
    pub camera_id: i64,
    /// `"yes"` when marked as a favorite.
    pub favorite: String,
}

/// Everything the controller knows, in one payload (`/get-sensors`).
///
/// Collections the controller omits decode as empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensorOverview {
    /// Registered IP cameras.
    #[serde(default)]
    pub cameras: Vec<Camera>,
    /// Energy meters.
    #[serde(default)]
    pub energymeters: Vec<EnergyMeter>,
    /// Motion and contact sensors.
    #[serde(default)]
    pub kakusensors: Vec<MotionSensor>,
    /// Active preset number (home/away/sleep/holiday).
    pub preset: u8,
    /// Rain meters.
    #[serde(default)]
    pub rainmeters: Vec<RainMeter>,
    /// Switches.
    #[serde(default)]
    pub switches: SwitchList,
    /// Thermometers.
    #[serde(default)]
    pub thermometers: Vec<Thermometer>,
    /// The controller's local time.
    pub time: Timestamp,
    /// Wind meters.
    #[serde(default)]
    pub windmeters: Vec<WindMeter>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overview_decodes_with_missing_collections() {
        let json = r#"{
            "preset": 0,
            "time": "2015-07-05 22:18",
            "switches": [
                {"id":0,"name":"Lamp","type":"switch","status":"on","favorite":"no"}
            ],
            "kakusensors": [
                {"id":0,"name":"Hall motion","type":"motion","status":"no",
                 "timestamp":"22:02","cameraid":-1,"favorite":"no"}
            ]
        }"#;
        let overview: SensorOverview = serde_json::from_str(json).unwrap();
        assert_eq!(overview.preset, 0);
        assert_eq!(overview.switches.len(), 1);
        assert_eq!(overview.kakusensors[0].kind, "motion");
        assert!(overview.thermometers.is_empty());
        assert!(overview.cameras.is_empty());
        assert_eq!(overview.time.to_string(), "2015-07-05 22:18");
    }

    #[test]
    fn overview_ignores_unknown_collections() {
        // Device classes this library does not model stay invisible.
        let json = r#"{
            "preset": 2,
            "time": "2015-07-05 22:18",
            "heatlinks": [{}],
            "uvmeters": [{}]
        }"#;
        let overview: SensorOverview = serde_json::from_str(json).unwrap();
        assert_eq!(overview.preset, 2);
    }
}
