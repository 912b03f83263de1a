// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Sensor overview response.

use serde::Deserialize;

use crate::response::{ApiResponse, Envelope};
use crate::telemetry::SensorOverview;

/// Reply to [`SensorOverviewRequest`](crate::request::SensorOverviewRequest).
#[derive(Debug, Clone, Deserialize)]
pub struct SensorOverviewResponse {
    /// Common envelope.
    #[serde(flatten)]
    pub envelope: Envelope,
    /// The aggregated overview.
    pub response: SensorOverview,
}

impl ApiResponse for SensorOverviewResponse {
    fn envelope(&self) -> &Envelope {
        &self.envelope
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_wire_payload() {
        let json = r#"{
            "status": "ok",
            "version": "2.185",
            "request": {"route": "/get-sensors"},
            "response": {
                "preset": 1,
                "time": "2015-07-05 22:18",
                "switches": [],
                "thermometers": []
            }
        }"#;
        let decoded: SensorOverviewResponse = serde_json::from_str(json).unwrap();
        assert_eq!(decoded.response.preset, 1);
        assert_eq!(
            decoded.envelope.request.unwrap().route,
            "/get-sensors"
        );
    }
}
