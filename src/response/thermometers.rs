// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Thermometer list response.

use serde::Deserialize;

use crate::response::{ApiResponse, Envelope};
use crate::telemetry::Thermometer;

/// Reply to [`ThermometerListRequest`](crate::request::ThermometerListRequest).
#[derive(Debug, Clone, Deserialize)]
pub struct ThermometerListResponse {
    /// Common envelope.
    #[serde(flatten)]
    pub envelope: Envelope,
    /// The thermometers.
    pub response: Vec<Thermometer>,
}

impl ApiResponse for ThermometerListResponse {
    fn envelope(&self) -> &Envelope {
        &self.envelope
    }
}
