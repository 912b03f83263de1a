// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Typed requests for the controller's HTTP endpoints.
//!
//! Every logical controller action is a small value implementing
//! [`Endpoint`]: it knows how to turn its own fields into the one [`Route`]
//! that addresses the action. The dispatcher in
//! [`Controller`](crate::Controller) is generic over this trait, so new
//! actions only need a new request type and a matching response shape.
//!
//! # Routes
//!
//! | Request | Route |
//! |---------|-------|
//! | [`SensorOverviewRequest`] | `GET /get-sensors` |
//! | [`SwitchListRequest`] | `GET /swlist` |
//! | [`OperateSwitchRequest`] | `GET /sw/{id}/{state}` and variants |
//! | [`ThermometerListRequest`] | `GET /telist` |
//! | [`ThermometerGraphRequest`] | `GET /te/graph/{id}/{period}` |
//! | [`EnergyMeterListRequest`] | `GET /enlist` |
//! | [`HandshakeRequest`] | `GET /handshake` |

mod energy;
mod handshake;
mod sensors;
mod switches;
mod thermometers;

use std::fmt;

pub use energy::EnergyMeterListRequest;
pub use handshake::HandshakeRequest;
pub use sensors::SensorOverviewRequest;
pub use switches::{OperateSwitchRequest, SwitchListRequest};
pub use thermometers::{ThermometerGraphRequest, ThermometerListRequest};

/// HTTP method of a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    /// The read verb; the only one the controller accepts.
    Get,
    /// Rejected by the dispatcher before any I/O.
    Post,
}

impl Method {
    /// Returns the method name as sent on the wire.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Concrete address of one controller action: an HTTP method plus the path
/// fragment that follows the secret.
///
/// Routes are built fresh for every dispatch and immediately consumed; they
/// are never cached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    method: Method,
    path: String,
}

impl Route {
    /// Creates a route with an explicit method.
    #[must_use]
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
        }
    }

    /// Creates a `GET` route.
    #[must_use]
    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::Get, path)
    }

    /// Returns the HTTP method.
    #[must_use]
    pub const fn method(&self) -> Method {
        self.method
    }

    /// Returns the path fragment, starting with `/`.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }
}

/// A request that can be dispatched to the controller.
///
/// Implementations must be pure: the same request value always produces the
/// same route, with no side effects and no I/O.
pub trait Endpoint {
    /// Builds the route addressing this request.
    fn route(&self) -> Route;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn method_display() {
        assert_eq!(Method::Get.to_string(), "GET");
        assert_eq!(Method::Post.to_string(), "POST");
    }

    #[test]
    fn route_get_constructor() {
        let route = Route::get("/handshake");
        assert_eq!(route.method(), Method::Get);
        assert_eq!(route.path(), "/handshake");
    }
}
