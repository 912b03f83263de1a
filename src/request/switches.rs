// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Switch listing and operation requests.

use crate::error::ValueError;
use crate::request::{Endpoint, Route};
use crate::types::{SwitchKind, SwitchState};

/// Requests the list of switches.
#[derive(Debug, Clone, Copy, Default)]
pub struct SwitchListRequest;

impl Endpoint for SwitchListRequest {
    fn route(&self) -> Route {
        Route::get("/swlist")
    }
}

/// What to do with the addressed switch. The variant fixes the route shape.
#[derive(Debug, Clone, Copy, PartialEq)]
enum SwitchAction {
    /// Turn a plain switch on or off.
    Set(SwitchState),
    /// Set a dimmer level (0-100).
    Dim(f64),
    /// Set a radiator temperature target in degrees.
    SetTarget(f64),
}

/// Operates one switch: the only action in the API that changes controller
/// state, even though it travels over `GET` like everything else.
///
/// # Examples
///
/// ```
/// use homewizard_lib::request::{Endpoint, OperateSwitchRequest};
/// use homewizard_lib::types::SwitchState;
///
/// let request = OperateSwitchRequest::switch(5, SwitchState::On);
/// assert_eq!(request.route().path(), "/sw/5/on");
///
/// let request = OperateSwitchRequest::dimmer(3, 21.5);
/// assert_eq!(request.route().path(), "/sw/dim/3/21.50");
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OperateSwitchRequest {
    id: u32,
    action: SwitchAction,
}

impl OperateSwitchRequest {
    /// Turns a plain switch on or off.
    #[must_use]
    pub const fn switch(id: u32, state: SwitchState) -> Self {
        Self {
            id,
            action: SwitchAction::Set(state),
        }
    }

    /// Sets a dimmer to the given level.
    #[must_use]
    pub const fn dimmer(id: u32, level: f64) -> Self {
        Self {
            id,
            action: SwitchAction::Dim(level),
        }
    }

    /// Sets a radiator valve to the given temperature target.
    #[must_use]
    pub const fn radiator(id: u32, target: f64) -> Self {
        Self {
            id,
            action: SwitchAction::SetTarget(target),
        }
    }

    /// Builds the request for a switch of the given kind.
    ///
    /// `state` applies to plain switches, `target` to dimmers (level) and
    /// radiators (temperature).
    ///
    /// # Errors
    ///
    /// Returns [`ValueError::UnknownSwitchKind`] for a kind this library
    /// does not recognize. The controller firmware would silently answer
    /// such a call with the switch list instead of operating anything, so
    /// it is rejected here before any request is made.
    pub fn for_kind(
        id: u32,
        kind: SwitchKind,
        state: SwitchState,
        target: f64,
    ) -> Result<Self, ValueError> {
        match kind {
            SwitchKind::Switch => Ok(Self::switch(id, state)),
            SwitchKind::Dimmer => Ok(Self::dimmer(id, target)),
            SwitchKind::Radiator => Ok(Self::radiator(id, target)),
            SwitchKind::Unknown => Err(ValueError::UnknownSwitchKind),
        }
    }

    /// Returns the id of the addressed switch.
    #[must_use]
    pub const fn id(&self) -> u32 {
        self.id
    }
}

impl Endpoint for OperateSwitchRequest {
    fn route(&self) -> Route {
        // Dimmer and radiator targets always travel with two decimals.
        match self.action {
            SwitchAction::Set(state) => Route::get(format!("/sw/{}/{state}", self.id)),
            SwitchAction::Dim(level) => Route::get(format!("/sw/dim/{}/{level:.2}", self.id)),
            SwitchAction::SetTarget(target) => {
                Route::get(format!("/sw/{}/settarget/{target:.2}", self.id))
            }
        }
    }
}
