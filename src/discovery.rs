// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Controller address discovery via the vendor gateway.
//!
//! A controller periodically reports its local address to the vendor's
//! gateway; asking the gateway is the fallback when no address is
//! configured. The gateway answers `{"ip": "...", "status": "ok"}`.

use std::net::IpAddr;

use serde::Deserialize;

use crate::error::{DiscoveryError, ParseError, ProtocolError, Result};

/// The vendor endpoint that reports the controller address.
pub const GATEWAY_URL: &str = "http://gateway.homewizard.nl/discovery.php";

#[derive(Debug, Clone, Deserialize)]
struct GatewayReply {
    ip: String,
    status: String,
}

/// Looks up the controller address through the vendor gateway.
///
/// # Errors
///
/// Returns a protocol error when the gateway cannot be reached or answers
/// with a non-success status code, a parse error for an undecodable body,
/// and a discovery error when the gateway reports a non-ok status or an
/// unparseable address.
pub async fn discover() -> Result<IpAddr> {
    discover_at(GATEWAY_URL).await
}

/// Looks up the controller address through a specific gateway endpoint.
///
/// [`discover`] uses the vendor gateway; this variant exists for alternate
/// or self-hosted gateways.
///
/// # Errors
///
/// Same failure modes as [`discover`].
pub async fn discover_at(endpoint: &str) -> Result<IpAddr> {
    let reply = reqwest::get(endpoint).await.map_err(ProtocolError::Http)?;
    let code = reply.status();
    let body = reply.text().await.map_err(ProtocolError::Http)?;

    if !code.is_success() {
        return Err(ProtocolError::HttpStatus {
            code: code.as_u16(),
            body,
        }
        .into());
    }

    let decoded: GatewayReply = serde_json::from_str(&body).map_err(ParseError::Json)?;

    if decoded.status != "ok" {
        return Err(DiscoveryError::Status(decoded.status).into());
    }

    match decoded.ip.parse() {
        Ok(address) => Ok(address),
        Err(_) => Err(DiscoveryError::InvalidAddress(decoded.ip).into()),
    }
}
