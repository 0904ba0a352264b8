// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Typed payloads carried inside `EcoFlow` data envelopes.

mod device;

pub use device::Device;

use std::collections::HashMap;

/// Full device telemetry as returned by `/iot-open/sign/device/quota/all`.
///
/// Keys are quota names such as `pd.soc`; values are kept as strings.
pub type FullState = HashMap<String, String>;
