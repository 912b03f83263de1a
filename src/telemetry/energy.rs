// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Energy meter records.

use serde::{Deserialize, Serialize};

/// An energy meter as reported by the controller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnergyMeter {
    /// Controller-assigned id.
    pub id: u32,
    /// User-visible name.
    pub name: String,
    /// Radio pairing code.
    pub code: String,
    /// Meter channel key.
    pub key: String,
    /// `"yes"` when marked as a favorite.
    pub favorite: String,
    /// `"yes"` when the sensor reports a low battery.
    #[serde(rename = "lowBattery")]
    pub low_battery: String,
    /// Energy used today in kWh.
    #[serde(rename = "dayTotal")]
    pub day_total: f64,
    /// Current power draw in watts.
    #[serde(rename = "po")]
    pub power: i64,
    /// Highest power draw seen today.
    #[serde(rename = "po+")]
    pub power_max: i64,
    /// Clock time of today's highest power draw.
    #[serde(rename = "po+t")]
    pub power_max_at: String,
    /// Lowest power draw seen today.
    #[serde(rename = "po-")]
    pub power_min: i64,
    /// Clock time of today's lowest power draw.
    #[serde(rename = "po-t")]
    pub power_min_at: String,
}
