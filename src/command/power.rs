// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Power state command payload.

use serde::Serialize;

use crate::command::{ParamSource, Params};
use crate::types::PowerState;

/// Payload of a `powerMode` command.
///
/// # Examples
///
/// ```
/// use ecoflow_lib::command::{ParamSource, PowerStateParams};
/// use ecoflow_lib::types::PowerState;
///
/// let params = PowerStateParams::from(PowerState::ShutDown);
/// assert_eq!(params.power_mode, 3);
/// assert_eq!(
///     params.to_params(),
///     vec![("params.powerMode".to_string(), "3".to_string())]
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PowerStateParams {
    /// Wire code of the requested [`PowerState`].
    pub power_mode: i32,
}

impl From<PowerState> for PowerStateParams {
    fn from(state: PowerState) -> Self {
        Self {
            power_mode: state.code(),
        }
    }
}

impl ParamSource for PowerStateParams {
    const OPERATE_TYPE: &'static str = "powerMode";

    fn to_params(&self) -> Params {
        vec![("params.powerMode".to_string(), self.power_mode.to_string())]
    }
}
