// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Configuration file support.

use std::net::IpAddr;
use std::path::Path;

use serde::Deserialize;

use crate::error::{ConfigError, ValueError};

/// On-disk client configuration.
///
/// The file is plain JSON with capitalized keys:
///
/// ```json
/// {"IP": "192.168.1.20", "Password": "s3cret", "Verbose": false}
/// ```
///
/// An empty `IP` means the address should be looked up through the vendor
/// discovery gateway; see
/// [`Controller::from_config`](crate::Controller::from_config).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ConfigFile {
    /// Controller address, or empty to use discovery.
    #[serde(rename = "IP", default)]
    pub ip: String,
    /// The shared secret.
    #[serde(rename = "Password")]
    pub password: String,
    /// Whether to log request lines and response bodies.
    #[serde(rename = "Verbose", default)]
    pub verbose: bool,
}

impl ConfigFile {
    /// Reads and parses a configuration file.
    ///
    /// # Errors
    ///
    /// Returns an error when the file cannot be read or is not valid JSON.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// Returns the configured address, or `None` when discovery should be
    /// used.
    ///
    /// # Errors
    ///
    /// Returns an error when the `IP` field is non-empty but not a valid
    /// address.
    pub fn address(&self) -> Result<Option<IpAddr>, ValueError> {
        if self.ip.is_empty() {
            return Ok(None);
        }
        match self.ip.parse() {
            Ok(address) => Ok(Some(address)),
            Err(_) => Err(ValueError::InvalidAddress(self.ip.clone())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write as _;

    #[test]
    fn load_parses_capitalized_keys() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"IP": "192.168.1.20", "Password": "s3cret", "Verbose": true}}"#
        )
        .unwrap();

        let config = ConfigFile::load(file.path()).unwrap();
        assert_eq!(config.ip, "192.168.1.20");
        assert_eq!(config.password, "s3cret");
        assert!(config.verbose);
        assert_eq!(
            config.address().unwrap(),
            Some("192.168.1.20".parse().unwrap())
        );
    }

    #[test]
    fn load_defaults_optional_fields() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"Password": "s3cret"}}"#).unwrap();

        let config = ConfigFile::load(file.path()).unwrap();
        assert!(config.ip.is_empty());
        assert!(!config.verbose);
        // Empty address selects the discovery fallback.
        assert_eq!(config.address().unwrap(), None);
    }

    #[test]
    fn load_rejects_malformed_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();

        assert!(matches!(
            ConfigFile::load(file.path()),
            Err(ConfigError::Json(_))
        ));
    }

    #[test]
    fn load_missing_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("absent.json");
        assert!(matches!(
            ConfigFile::load(missing),
            Err(ConfigError::Io(_))
        ));
    }

    #[test]
    fn address_rejects_malformed_ip() {
        let config = ConfigFile {
            ip: "not-an-ip".to_string(),
            password: "s3cret".to_string(),
            verbose: false,
        };
        assert!(matches!(
            config.address(),
            Err(ValueError::InvalidAddress(_))
        ));
    }
}
