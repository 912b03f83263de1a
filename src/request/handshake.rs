// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Controller handshake request.

use crate::request::{Endpoint, Route};

/// Requests the controller's identity and firmware details.
#[derive(Debug, Clone, Copy, Default)]
pub struct HandshakeRequest;

impl Endpoint for HandshakeRequest {
    fn route(&self) -> Route {
        Route::get("/handshake")
    }
}
