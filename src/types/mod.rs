// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Value types for `EcoFlow` device control.
//!
//! Both enumerations carry fixed integer codes. The codes overlap numerically
//! (`PowerState::On` and `SubMode::Eco` are both `1`) but each only has meaning
//! under its own parameter key.
//!
//! # Types
//!
//! - [`PowerState`] - On/Standby/ShutDown, sent as `params.powerMode`
//! - [`SubMode`] - Max/Eco/Sleep/Manual, sent as `params.subMode`

mod power;
mod sub_mode;

pub use power::PowerState;
pub use sub_mode::SubMode;
