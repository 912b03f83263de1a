// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for the `HomeWizard` library.
//!
//! This module provides the error hierarchy for failures across the library:
//! value validation, HTTP communication, response decoding, address discovery
//! and configuration loading.
//!
//! A dispatched operation can fail on three distinct tiers, each with its own
//! representation:
//!
//! 1. transport or HTTP status: [`ProtocolError`]
//! 2. JSON decoding: [`ParseError`]
//! 3. the controller's own status field: [`Error::Status`]

use thiserror::Error;

/// The main error type for this library.
#[derive(Debug, Error)]
pub enum Error {
    /// Error occurred during value validation.
    #[error("value error: {0}")]
    Value(#[from] ValueError),

    /// Error occurred while talking to the controller.
    #[error("protocol error: {0}")]
    Protocol(#[from] ProtocolError),

    /// Error occurred while decoding a response body.
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    /// The response decoded cleanly but the controller reported a non-ok
    /// status in its envelope.
    #[error("controller reported status {0:?}")]
    Status(String),

    /// Error occurred during controller address discovery.
    #[error("discovery error: {0}")]
    Discovery(#[from] DiscoveryError),

    /// Error occurred while loading the configuration file.
    #[error("config error: {0}")]
    Config(#[from] ConfigError),
}

/// Errors related to value validation and constraints.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValueError {
    /// An invalid graph period string was provided.
    #[error("invalid graph period {0:?} (expected day, week, month or year)")]
    InvalidPeriod(String),

    /// An invalid switch state string was provided.
    #[error("invalid switch state {0:?} (expected on or off)")]
    InvalidSwitchState(String),

    /// A switch of an unrecognized kind cannot be operated.
    #[error("cannot operate a switch of unknown kind")]
    UnknownSwitchKind,

    /// An address string could not be parsed.
    #[error("invalid controller address: {0}")]
    InvalidAddress(String),
}

/// Errors related to HTTP communication with the controller.
#[derive(Debug, Error)]
pub enum ProtocolError {
    /// The HTTP request itself failed (connection refused, timeout, DNS).
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The controller address is unspecified; nothing was sent.
    #[error("controller address is not set")]
    AddressNotSet,

    /// The route uses an HTTP method the controller does not accept.
    #[error("unsupported HTTP method {0} (the controller API is GET only)")]
    UnsupportedMethod(String),

    /// The controller answered with a non-success HTTP status code.
    #[error("controller returned HTTP {code}: {body}")]
    HttpStatus {
        /// The HTTP status code received.
        code: u16,
        /// The raw response body, kept for diagnostics.
        body: String,
    },
}

/// Errors related to decoding controller responses.
#[derive(Debug, Error)]
pub enum ParseError {
    /// JSON decoding failed.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// A timestamp string did not match the controller's wire format.
    #[error("invalid timestamp {0:?} (expected YYYY-MM-DD HH:MM)")]
    Timestamp(String),
}

/// Errors reported by the vendor discovery gateway.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DiscoveryError {
    /// The gateway was reachable but reported a non-ok status.
    #[error("gateway reported status {0:?}")]
    Status(String),

    /// The gateway returned an address that could not be parsed.
    #[error("gateway returned unparseable address {0:?}")]
    InvalidAddress(String),
}

/// Errors related to reading the configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    /// The file contents are not valid JSON.
    #[error("failed to parse config file: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for this library.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value_error_display() {
        let err = ValueError::InvalidPeriod("nextweek".to_string());
        assert_eq!(
            err.to_string(),
            "invalid graph period \"nextweek\" (expected day, week, month or year)"
        );
    }

    #[test]
    fn error_from_value_error() {
        let err: Error = ValueError::UnknownSwitchKind.into();
        assert!(matches!(err, Error::Value(ValueError::UnknownSwitchKind)));
    }

    #[test]
    fn status_error_display() {
        let err = Error::Status("error".to_string());
        assert_eq!(err.to_string(), "controller reported status \"error\"");
    }

    #[test]
    fn protocol_error_display() {
        let err = ProtocolError::HttpStatus {
            code: 404,
            body: "not found".to_string(),
        };
        assert_eq!(err.to_string(), "controller returned HTTP 404: not found");
    }

    #[test]
    fn discovery_error_display() {
        let err = DiscoveryError::InvalidAddress("not-an-ip".to_string());
        assert_eq!(
            err.to_string(),
            "gateway returned unparseable address \"not-an-ip\""
        );
    }
}
