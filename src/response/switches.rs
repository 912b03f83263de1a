// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Switch list and operation responses.

use serde::Deserialize;

use crate::response::{ApiResponse, Envelope};
use crate::telemetry::SwitchList;

/// Reply to [`SwitchListRequest`](crate::request::SwitchListRequest).
#[derive(Debug, Clone, Deserialize)]
pub struct SwitchListResponse {
    /// Common envelope.
    #[serde(flatten)]
    pub envelope: Envelope,
    /// The switches.
    pub response: SwitchList,
}

impl ApiResponse for SwitchListResponse {
    fn envelope(&self) -> &Envelope {
        &self.envelope
    }
}

/// Reply to [`OperateSwitchRequest`](crate::request::OperateSwitchRequest).
///
/// Carries no payload; the envelope status is the whole answer.
#[derive(Debug, Clone, Deserialize)]
pub struct OperateSwitchResponse {
    /// Common envelope.
    #[serde(flatten)]
    pub envelope: Envelope,
}

impl ApiResponse for OperateSwitchResponse {
    fn envelope(&self) -> &Envelope {
        &self.envelope
    }
}
