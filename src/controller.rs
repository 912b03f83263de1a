// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The controller client: one dispatch pipeline, one facade method per
//! controller action.

use std::net::IpAddr;
use std::path::Path;

use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::config::ConfigFile;
use crate::discovery;
use crate::error::{Error, ParseError, ProtocolError, Result};
use crate::request::{
    Endpoint, EnergyMeterListRequest, HandshakeRequest, Method, OperateSwitchRequest,
    SensorOverviewRequest, SwitchListRequest, ThermometerGraphRequest, ThermometerListRequest,
};
use crate::response::{
    ApiResponse, EnergyMeterListResponse, Handshake, HandshakeResponse, MinMaxGraphResponse,
    OperateSwitchResponse, SampledGraphResponse, SensorOverviewResponse, SwitchListResponse,
    TemperatureGraph, ThermometerListResponse, STATUS_OK,
};
use crate::telemetry::{EnergyMeter, SensorOverview, SwitchList, Thermometer};
use crate::types::{GraphShape, Period};

/// Default controller port.
pub const DEFAULT_PORT: u16 = 80;

/// Client for one HomeWizard controller.
///
/// Address, secret and verbosity are fixed for the lifetime of the client,
/// so concurrent calls share no mutable state; each call runs its own
/// independent dispatch.
///
/// # Examples
///
/// ```no_run
/// use homewizard_lib::Controller;
/// use homewizard_lib::types::SwitchState;
///
/// #[tokio::main]
/// async fn main() -> homewizard_lib::Result<()> {
///     let controller = Controller::new("192.168.1.20".parse().unwrap(), "secret");
///
///     let switches = controller.switches().await?;
///     if let Some(lamp) = switches.by_name("Reading lamp") {
///         controller
///             .operate_switch(homewizard_lib::request::OperateSwitchRequest::switch(
///                 lamp.id,
///                 lamp.reversed_status(),
///             ))
///             .await?;
///     }
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct Controller {
    name: String,
    address: IpAddr,
    port: u16,
    secret: String,
    verbose: bool,
    http: Client,
}

impl Controller {
    /// Creates a client for the controller at `address`.
    ///
    /// `secret` is the shared credential the controller expects as the
    /// first path segment of every request.
    #[must_use]
    pub fn new(address: IpAddr, secret: impl Into<String>) -> Self {
        Self {
            name: String::new(),
            address,
            port: DEFAULT_PORT,
            secret: secret.into(),
            verbose: false,
            http: Client::new(),
        }
    }

    /// Creates a client from a configuration file.
    ///
    /// An empty `IP` field in the file triggers a lookup through the vendor
    /// discovery gateway before the client is built.
    ///
    /// # Errors
    ///
    /// Returns a config error when the file cannot be read or parsed, a
    /// value error when the configured address is malformed, and any
    /// discovery failure when the fallback lookup is needed and fails.
    pub async fn from_config(path: impl AsRef<Path>) -> Result<Self> {
        let config = ConfigFile::load(path)?;
        match config.address()? {
            Some(address) => Ok(Self::new(address, config.password).with_verbose(config.verbose)),
            None => Self::from_discovery(config.password, config.verbose).await,
        }
    }

    /// Creates a client by looking the controller address up through the
    /// vendor discovery gateway.
    ///
    /// # Errors
    ///
    /// Returns a protocol or discovery error when the gateway cannot be
    /// reached or reports a failure.
    pub async fn from_discovery(secret: impl Into<String>, verbose: bool) -> Result<Self> {
        let address = discovery::discover().await?;
        if verbose {
            tracing::info!(%address, "discovery OK");
        }
        Ok(Self::new(address, secret).with_verbose(verbose))
    }

    /// Sets a display name for this controller.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets a non-default port. Useful when the controller sits behind a
    /// forwarder.
    #[must_use]
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Enables diagnostic logging of every request line and response body.
    /// Never affects control flow.
    #[must_use]
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Replaces the HTTP client, e.g. to set a timeout.
    #[must_use]
    pub fn with_http_client(mut self, http: Client) -> Self {
        self.http = http;
        self
    }

    /// Returns the display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the controller address.
    #[must_use]
    pub const fn address(&self) -> IpAddr {
        self.address
    }

    /// Returns the controller port.
    #[must_use]
    pub const fn port(&self) -> u16 {
        self.port
    }

    /// Returns whether diagnostic logging is enabled.
    #[must_use]
    pub const fn verbose(&self) -> bool {
        self.verbose
    }

    /// Dispatches one request and decodes the reply into `R`.
    ///
    /// This is the single execution pipeline behind every facade method,
    /// public so callers can add their own endpoint/response pairs. Success
    /// requires all three tiers to pass:
    ///
    /// 1. the HTTP call completes with a success status code,
    /// 2. the body decodes into `R`,
    /// 3. the decoded envelope reports status `"ok"`.
    ///
    /// # Errors
    ///
    /// Fails before any I/O when the route's method is not `GET` or the
    /// controller address is unspecified. Afterwards: a transport error for
    /// network failures, a protocol error carrying the code and raw body
    /// for non-success status codes, a parse error for undecodable bodies,
    /// and a status error when the envelope is not `"ok"`.
    pub async fn dispatch<E, R>(&self, endpoint: &E) -> Result<R>
    where
        E: Endpoint,
        R: ApiResponse + DeserializeOwned,
    {
        let route = endpoint.route();

        if route.method() != Method::Get {
            return Err(ProtocolError::UnsupportedMethod(route.method().to_string()).into());
        }
        if self.address.is_unspecified() {
            return Err(ProtocolError::AddressNotSet.into());
        }

        let url = self.url_for(route.path());
        tracing::debug!(url = %url, "dispatching GET");
        if self.verbose {
            tracing::info!("GET {url}");
        }

        let reply = self.http.get(&url).send().await.map_err(ProtocolError::Http)?;
        let code = reply.status();
        let body = reply.text().await.map_err(ProtocolError::Http)?;

        if self.verbose {
            tracing::info!(code = code.as_u16(), body = %body, "reply");
        }

        if !code.is_success() {
            return Err(ProtocolError::HttpStatus {
                code: code.as_u16(),
                body,
            }
            .into());
        }

        let decoded: R = serde_json::from_str(&body).map_err(ParseError::Json)?;

        if decoded.status() != STATUS_OK {
            return Err(Error::Status(decoded.status().to_string()));
        }
        Ok(decoded)
    }

    /// Builds the request URL for a route path.
    ///
    /// The secret sits in the path, right after the authority; that is the
    /// controller's wire protocol and must stay byte-compatible.
    fn url_for(&self, path: &str) -> String {
        if self.port == DEFAULT_PORT {
            format!("http://{}/{}{path}", self.address, self.secret)
        } else {
            format!("http://{}:{}/{}{path}", self.address, self.port, self.secret)
        }
    }

    /// Fetches the complete sensor overview.
    ///
    /// # Errors
    ///
    /// Propagates any dispatch failure.
    pub async fn sensors(&self) -> Result<SensorOverview> {
        let reply: SensorOverviewResponse = self.dispatch(&SensorOverviewRequest).await?;
        Ok(reply.response)
    }

    /// Fetches the list of switches.
    ///
    /// # Errors
    ///
    /// Propagates any dispatch failure.
    pub async fn switches(&self) -> Result<SwitchList> {
        let reply: SwitchListResponse = self.dispatch(&SwitchListRequest).await?;
        Ok(reply.response)
    }

    /// Operates one switch.
    ///
    /// # Errors
    ///
    /// Propagates any dispatch failure.
    pub async fn operate_switch(&self, request: OperateSwitchRequest) -> Result<()> {
        let _reply: OperateSwitchResponse = self.dispatch(&request).await?;
        Ok(())
    }

    /// Fetches the list of thermometers.
    ///
    /// # Errors
    ///
    /// Propagates any dispatch failure.
    pub async fn thermometers(&self) -> Result<Vec<Thermometer>> {
        let reply: ThermometerListResponse = self.dispatch(&ThermometerListRequest).await?;
        Ok(reply.response)
    }

    /// Fetches the temperature/humidity history of one thermometer.
    ///
    /// The period decides the reply's point shape before the request is
    /// made; the returned [`TemperatureGraph`] hides the difference.
    ///
    /// # Errors
    ///
    /// Propagates any dispatch failure.
    pub async fn thermometer_graph(&self, id: u32, period: Period) -> Result<TemperatureGraph> {
        let request = ThermometerGraphRequest::new(id, period);
        match period.shape() {
            GraphShape::Sampled => {
                let reply: SampledGraphResponse = self.dispatch(&request).await?;
                Ok(TemperatureGraph::Sampled(reply.response))
            }
            GraphShape::MinMax => {
                let reply: MinMaxGraphResponse = self.dispatch(&request).await?;
                Ok(TemperatureGraph::MinMax(reply.response))
            }
        }
    }

    /// Fetches the list of energy meters.
    ///
    /// # Errors
    ///
    /// Propagates any dispatch failure.
    pub async fn energy_meters(&self) -> Result<Vec<EnergyMeter>> {
        let reply: EnergyMeterListResponse = self.dispatch(&EnergyMeterListRequest).await?;
        Ok(reply.response)
    }

    /// Fetches the controller's identity and firmware details.
    ///
    /// # Errors
    ///
    /// Propagates any dispatch failure.
    pub async fn handshake(&self) -> Result<Handshake> {
        let reply: HandshakeResponse = self.dispatch(&HandshakeRequest).await?;
        Ok(reply.response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_embeds_secret_in_path() {
        let controller = Controller::new("192.168.1.20".parse().unwrap(), "s3cret");
        assert_eq!(
            controller.url_for("/swlist"),
            "http://192.168.1.20/s3cret/swlist"
        );
    }

    #[test]
    fn url_keeps_non_default_port() {
        let controller =
            Controller::new("192.168.1.20".parse().unwrap(), "s3cret").with_port(8080);
        assert_eq!(
            controller.url_for("/handshake"),
            "http://192.168.1.20:8080/s3cret/handshake"
        );
    }

    #[test]
    fn builder_setters() {
        let controller = Controller::new("192.168.1.20".parse().unwrap(), "s3cret")
            .with_name("Living room")
            .with_verbose(true);
        assert_eq!(controller.name(), "Living room");
        assert!(controller.verbose());
        assert_eq!(controller.port(), DEFAULT_PORT);
    }
}
