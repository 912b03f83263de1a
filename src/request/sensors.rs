// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Request for the full sensor overview.

use crate::request::{Endpoint, Route};

/// Requests the controller's complete sensor overview.
///
/// The reply bundles every device class the controller knows about in one
/// payload; see [`SensorOverview`](crate::telemetry::SensorOverview).
#[derive(Debug, Clone, Copy, Default)]
pub struct SensorOverviewRequest;

impl Endpoint for SensorOverviewRequest {
    fn route(&self) -> Route {
        Route::get("/get-sensors")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn route_matches_wire_protocol() {
        assert_eq!(SensorOverviewRequest.route(), Route::get("/get-sensors"));
    }
}
