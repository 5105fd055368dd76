//! Channel ownership roles.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which side of a channel owns the write path.
///
/// The platform publishes telemetry into `PlatformOwned` regions; callers
/// publish commands into `UserOwned` ones. A channel may only be written by
/// a handle opened with the role its configuration declares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Unknown or unassigned
    #[default]
    Unset,
    /// Written by the platform, read by callers
    PlatformOwned,
    /// Written by callers, read by the platform
    UserOwned,
}

impl Role {
    /// Map the configuration integer: `1` platform, `2` user, anything else unset.
    pub const fn from_raw(value: i64) -> Self {
        match value {
            1 => Role::PlatformOwned,
            2 => Role::UserOwned,
            _ => Role::Unset,
        }
    }

    /// Integer written in configuration files.
    pub const fn as_raw(self) -> i64 {
        match self {
            Role::Unset => 0,
            Role::PlatformOwned => 1,
            Role::UserOwned => 2,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Role::Unset => "unset",
            Role::PlatformOwned => "platform",
            Role::UserOwned => "user",
        })
    }
}

impl FromStr for Role {
    type Err = String;

    /// Accepts the display names or the raw integers.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "platform" | "platform_owned" | "1" => Ok(Role::PlatformOwned),
            "user" | "user_owned" | "2" => Ok(Role::UserOwned),
            "unset" | "0" => Ok(Role::Unset),
            other => Err(format!("unknown role '{other}'")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_mapping() {
        assert_eq!(Role::from_raw(1), Role::PlatformOwned);
        assert_eq!(Role::from_raw(2), Role::UserOwned);
        assert_eq!(Role::from_raw(0), Role::Unset);
        assert_eq!(Role::from_raw(7), Role::Unset);
        assert_eq!(Role::from_raw(-1), Role::Unset);
        assert_eq!(Role::from_raw(Role::UserOwned.as_raw()), Role::UserOwned);
    }

    #[test]
    fn parse_names() {
        assert_eq!("platform".parse::<Role>(), Ok(Role::PlatformOwned));
        assert_eq!("USER".parse::<Role>(), Ok(Role::UserOwned));
        assert_eq!("2".parse::<Role>(), Ok(Role::UserOwned));
        assert!("writer".parse::<Role>().is_err());
    }
}
