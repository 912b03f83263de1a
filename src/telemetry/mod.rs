// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Flat telemetry records decoded from controller payloads.
//!
//! These are plain value containers: immutable once decoded, no identity
//! beyond their own fields. The only behavior they carry is trivial
//! filtering on [`SwitchList`] and the derived reverse state on
//! [`Switch`].

mod energy;
mod sensors;
mod switch;
mod thermometer;
mod weather;

pub use energy::EnergyMeter;
pub use sensors::{Camera, CameraUrl, MotionSensor, SensorOverview};
pub use switch::{Switch, SwitchList};
pub use thermometer::Thermometer;
pub use weather::{RainMeter, WindMeter};
