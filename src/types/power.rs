// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Power state of a portable power station.

use std::fmt;
use std::str::FromStr;

use crate::error::ValueError;

/// Represents the power state requested from a device.
///
/// Each variant maps to a fixed integer code expected by the `EcoFlow` API.
///
/// # Examples
///
/// ```
/// use ecoflow_lib::types::PowerState;
///
/// assert_eq!(PowerState::On.code(), 1);
/// assert_eq!(PowerState::Standby.code(), 2);
/// assert_eq!(PowerState::ShutDown.code(), 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PowerState {
    /// Device is running.
    On,
    /// Device is idle but reachable.
    Standby,
    /// Device is shut down.
    ShutDown,
}

impl PowerState {
    /// Returns the integer code sent as `params.powerMode`.
    #[must_use]
    pub const fn code(&self) -> i32 {
        match self {
            Self::On => 1,
            Self::Standby => 2,
            Self::ShutDown => 3,
        }
    }

    /// Returns a lowercase name for display and parsing.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::On => "on",
            Self::Standby => "standby",
            Self::ShutDown => "shutdown",
        }
    }
}

impl fmt::Display for PowerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PowerState {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "on" | "1" => Ok(Self::On),
            "standby" | "2" => Ok(Self::Standby),
            "shutdown" | "shut_down" | "off" | "3" => Ok(Self::ShutDown),
            _ => Err(ValueError::InvalidPowerState(s.to_string())),
        }
    }
}

impl TryFrom<i32> for PowerState {
    type Error = ValueError;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        match code {
            1 => Ok(Self::On),
            2 => Ok(Self::Standby),
            3 => Ok(Self::ShutDown),
            other => Err(ValueError::InvalidPowerState(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn power_state_codes_are_fixed() {
        assert_eq!(PowerState::On.code(), 1);
        assert_eq!(PowerState::Standby.code(), 2);
        assert_eq!(PowerState::ShutDown.code(), 3);
    }

    #[test]
    fn power_state_from_str() {
        assert_eq!("ON".parse::<PowerState>().unwrap(), PowerState::On);
        assert_eq!("standby".parse::<PowerState>().unwrap(), PowerState::Standby);
        assert_eq!("ShutDown".parse::<PowerState>().unwrap(), PowerState::ShutDown);
        assert_eq!("3".parse::<PowerState>().unwrap(), PowerState::ShutDown);
    }

    #[test]
    fn power_state_from_str_invalid() {
        let result = "reboot".parse::<PowerState>();
        assert!(matches!(
            result.unwrap_err(),
            ValueError::InvalidPowerState(_)
        ));
    }

    #[test]
    fn power_state_try_from_code() {
        for state in [PowerState::On, PowerState::Standby, PowerState::ShutDown] {
            assert_eq!(PowerState::try_from(state.code()).unwrap(), state);
        }
        assert!(PowerState::try_from(0).is_err());
    }

    #[test]
    fn power_state_display() {
        assert_eq!(PowerState::ShutDown.to_string(), "shutdown");
    }
}
