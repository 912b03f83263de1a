// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Value types shared across requests, responses and telemetry records.
//!
//! # Types
//!
//! - [`Period`] - Graph time window (day/week/month/year)
//! - [`GraphShape`] - Point shape a period maps to
//! - [`SwitchState`] - On/off state with a pure `reverse()`
//! - [`SwitchKind`] - Switch/dimmer/radiator, with an `Unknown` catch-all
//! - [`Timestamp`] - Controller wire-format datetime (`YYYY-MM-DD HH:MM`)

mod period;
mod switch;
mod time;

pub use period::{GraphShape, Period};
pub use switch::{SwitchKind, SwitchState};
pub use time::Timestamp;
