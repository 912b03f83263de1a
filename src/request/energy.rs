// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Energy meter listing request.

use crate::request::{Endpoint, Route};

/// Requests the list of energy meters.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnergyMeterListRequest;

impl Endpoint for EnergyMeterListRequest {
    fn route(&self) -> Route {
        Route::get("/enlist")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn route_matches_wire_protocol() {
        assert_eq!(EnergyMeterListRequest.route(), Route::get("/enlist"));
    }
}
