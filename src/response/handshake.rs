// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Controller handshake response.

use serde::Deserialize;

use crate::response::{ApiResponse, Envelope};

/// Controller identity and firmware details.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Handshake {
    /// Product name, e.g. `"HomeWizard"`.
    pub homewizard: String,
    /// Firmware version.
    pub version: String,
    /// `"yes"` when a firmware update is available.
    #[serde(rename = "firmwareupdateavailable")]
    pub firmware_update_available: String,
    /// `"yes"` when the companion app must be updated first.
    #[serde(rename = "appupdaterequired")]
    pub app_update_required: String,
    /// Hardware serial number.
    pub serial: String,
}

/// Reply to [`HandshakeRequest`](crate::request::HandshakeRequest).
#[derive(Debug, Clone, Deserialize)]
pub struct HandshakeResponse {
    /// Common envelope.
    #[serde(flatten)]
    pub envelope: Envelope,
    /// The handshake details.
    pub response: Handshake,
}

impl ApiResponse for HandshakeResponse {
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
            "response": {
                "homewizard": "HomeWizard",
                "version": "2.185",
                "firmwareupdateavailable": "no",
                "appupdaterequired": "no",
                "serial": "ABC123456"
            }
        }"#;
        let decoded: HandshakeResponse = serde_json::from_str(json).unwrap();
        assert_eq!(decoded.response.serial, "ABC123456");
        assert_eq!(decoded.version(), "2.185");
    }
}
