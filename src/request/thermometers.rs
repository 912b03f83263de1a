// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Thermometer listing and history graph requests.

use crate::request::{Endpoint, Route};
use crate::types::Period;

/// Requests the list of thermometers.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThermometerListRequest;

impl Endpoint for ThermometerListRequest {
    fn route(&self) -> Route {
        Route::get("/telist")
    }
}

/// Requests the temperature/humidity history of one thermometer.
///
/// The period decides the point shape of the reply; see
/// [`Period::shape`](crate::types::Period::shape). The caller picks the
/// matching response type before dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThermometerGraphRequest {
    id: u32,
    period: Period,
}

impl ThermometerGraphRequest {
    /// Creates a graph request for the given thermometer and window.
    #[must_use]
    pub const fn new(id: u32, period: Period) -> Self {
        Self { id, period }
    }

    /// Returns the thermometer id.
    #[must_use]
    pub const fn id(&self) -> u32 {
        self.id
    }

    /// Returns the requested window.
    #[must_use]
    pub const fn period(&self) -> Period {
        self.period
    }
}

impl Endpoint for ThermometerGraphRequest {
    fn route(&self) -> Route {
        Route::get(format!("/te/graph/{}/{}", self.id, self.period))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_route_matches_wire_protocol() {
        assert_eq!(ThermometerListRequest.route(), Route::get("/telist"));
    }

    #[test]
    fn graph_route_embeds_id_and_period() {
        let route = ThermometerGraphRequest::new(4, Period::Week).route();
        assert_eq!(route.path(), "/te/graph/4/week");

        let route = ThermometerGraphRequest::new(0, Period::Year).route();
        assert_eq!(route.path(), "/te/graph/0/year");
    }
}
