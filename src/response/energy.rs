// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Energy meter list response.

use serde::Deserialize;

use crate::response::{ApiResponse, Envelope};
use crate::telemetry::EnergyMeter;

/// Reply to [`EnergyMeterListRequest`](crate::request::EnergyMeterListRequest).
#[derive(Debug, Clone, Deserialize)]
pub struct EnergyMeterListResponse {
    /// Common envelope.
    #[serde(flatten)]
    pub envelope: Envelope,
    /// The energy meters.
    pub response: Vec<EnergyMeter>,
}

impl ApiResponse for EnergyMeterListResponse {
    fn envelope(&self) -> &Envelope {
        &self.envelope
    }
}
