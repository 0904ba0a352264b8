// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Operating sub-mode of a portable power station.

use std::fmt;
use std::str::FromStr;

use crate::error::ValueError;

/// Operating sub-mode (fan/compressor profile) of a device.
///
/// # Examples
///
/// ```
/// use ecoflow_lib::types::SubMode;
///
/// assert_eq!(SubMode::Max.code(), 0);
/// assert_eq!(SubMode::Eco.code(), 1);
/// assert_eq!("sleep".parse::<SubMode>().unwrap(), SubMode::Sleep);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SubMode {
    /// Maximum output.
    Max,
    /// Energy saving.
    Eco,
    /// Quiet night operation.
    Sleep,
    /// User-controlled settings.
    Manual,
}

impl SubMode {
    /// Returns the integer code sent as `params.subMode`.
    #[must_use]
    pub const fn code(&self) -> i32 {
        match self {
            Self::Max => 0,
            Self::Eco => 1,
            Self::Sleep => 2,
            Self::Manual => 3,
        }
    }

    /// Returns a lowercase name for display and parsing.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Max => "max",
            Self::Eco => "eco",
            Self::Sleep => "sleep",
            Self::Manual => "manual",
        }
    }
}

impl fmt::Display for SubMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SubMode {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "max" | "0" => Ok(Self::Max),
            "eco" | "1" => Ok(Self::Eco),
            "sleep" | "2" => Ok(Self::Sleep),
            "manual" | "3" => Ok(Self::Manual),
            _ => Err(ValueError::InvalidSubMode(s.to_string())),
        }
    }
}

impl TryFrom<i32> for SubMode {
    type Error = ValueError;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(Self::Max),
            1 => Ok(Self::Eco),
            2 => Ok(Self::Sleep),
            3 => Ok(Self::Manual),
            other => Err(ValueError::InvalidSubMode(other.to_string())),
        }
    }
}
