// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Decoded controller responses.
//!
//! Every response body carries the same [`Envelope`] (status and protocol
//! version, sometimes an echo of the requested route) next to an
//! operation-specific payload under the `response` key. The envelope's
//! status string is the single source of truth for whether the payload is
//! usable; an HTTP 200 alone proves nothing.

mod energy;
mod graph;
mod handshake;
mod sensors;
mod switches;
mod thermometers;

use serde::Deserialize;

pub use energy::EnergyMeterListResponse;
pub use graph::{
    GraphPoint, MinMaxGraphResponse, MinMaxPoint, SampledGraphResponse, SampledPoint,
    TemperatureGraph,
};
pub use handshake::{Handshake, HandshakeResponse};
pub use sensors::SensorOverviewResponse;
pub use switches::{OperateSwitchResponse, SwitchListResponse};
pub use thermometers::ThermometerListResponse;

/// The envelope status value that marks a usable payload.
pub const STATUS_OK: &str = "ok";

/// Status and version wrapper common to every controller response.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Envelope {
    /// Application-level outcome; `"ok"` on success.
    pub status: String,
    /// Protocol version of the controller firmware.
    pub version: String,
    /// Echo of the requested route; only some endpoints send it.
    #[serde(default)]
    pub request: Option<RequestEcho>,
}

impl Envelope {
    /// Returns true when the controller reported success.
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.status == STATUS_OK
    }
}

/// The `request` block some endpoints echo back.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RequestEcho {
    /// The route the controller believes it answered.
    pub route: String,
}

/// A decoded response carrying the common envelope.
///
/// The dispatcher uses this to read the application-level status without
/// knowing the concrete payload shape.
pub trait ApiResponse {
    /// Returns the common envelope.
    fn envelope(&self) -> &Envelope;

    /// Returns the application-level status string.
    fn status(&self) -> &str {
        &self.envelope().status
    }

    /// Returns the controller's protocol version string.
    fn version(&self) -> &str {
        &self.envelope().version
    }
}
