// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! `HomeWizard` Lib - A Rust library to read and control a HomeWizard
//! home-automation controller.
//!
//! The controller exposes its state and actions over plain HTTP with JSON
//! bodies; this library wraps that API in typed, async calls.
//!
//! # Supported Features
//!
//! - **Switch control**: List switches, turn them on/off, set dimmer levels
//!   and radiator targets
//! - **Telemetry**: Thermometers, energy meters, rain/wind meters, cameras
//!   and motion sensors in one overview
//! - **History graphs**: Temperature/humidity history per thermometer, with
//!   the period-dependent point format resolved for you
//! - **Discovery**: Look the controller address up through the vendor
//!   gateway when it is not configured
//!
//! # Quick Start
//!
//! ```no_run
//! use homewizard_lib::Controller;
//! use homewizard_lib::request::OperateSwitchRequest;
//! use homewizard_lib::types::{Period, SwitchState};
//!
//! #[tokio::main]
//! async fn main() -> homewizard_lib::Result<()> {
//!     let controller = Controller::new("192.168.1.20".parse().unwrap(), "s3cret");
//!
//!     // Toggle a switch by name
//!     let switches = controller.switches().await?;
//!     if let Some(lamp) = switches.by_name("Reading lamp") {
//!         controller
//!             .operate_switch(OperateSwitchRequest::switch(lamp.id, lamp.reversed_status()))
//!             .await?;
//!     }
//!
//!     // Read a week of temperature history
//!     let graph = controller.thermometer_graph(0, Period::Week).await?;
//!     for point in graph.iter() {
//!         println!("{}: {:.1} °C", point.timestamp(), point.temperature(0));
//!     }
//!     Ok(())
//! }
//! ```
//!
//! # Configuration File
//!
//! ```no_run
//! # async fn example() -> homewizard_lib::Result<()> {
//! // {"IP": "", "Password": "s3cret", "Verbose": false}
//! // An empty IP falls back to gateway discovery.
//! let controller = homewizard_lib::Controller::from_config("homewizard.json").await?;
//! # Ok(())
//! # }
//! ```

mod config;
mod controller;
pub mod discovery;
pub mod error;
pub mod request;
pub mod response;
pub mod telemetry;
pub mod types;

pub use config::ConfigFile;
pub use controller::{Controller, DEFAULT_PORT};
pub use error::{
    ConfigError, DiscoveryError, Error, ParseError, ProtocolError, Result, ValueError,
};
pub use request::{Endpoint, Method, OperateSwitchRequest, Route};
pub use response::{ApiResponse, Envelope, GraphPoint, Handshake, TemperatureGraph};
pub use telemetry::{EnergyMeter, SensorOverview, Switch, SwitchList, Thermometer};
pub use types::{GraphShape, Period, SwitchKind, SwitchState, Timestamp};
