// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Sub-mode command payload.

use serde::Serialize;

use crate::command::{ParamSource, Params};
use crate::types::SubMode;

/// Payload of a `subMode` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubModeParams {
    /// Wire code of the requested [`SubMode`].
    pub sub_mode: i32,
}

impl From<SubMode> for SubModeParams {
    fn from(mode: SubMode) -> Self {
        Self {
            sub_mode: mode.code(),
        }
    }
}

impl ParamSource for SubModeParams {
    const OPERATE_TYPE: &'static str = "subMode";

    fn to_params(&self) -> Params {
        vec![("params.subMode".to_string(), self.sub_mode.to_string())]
    }
}
