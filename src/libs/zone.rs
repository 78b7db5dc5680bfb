//! Calendar used to read the hour of day from a timestamp.
//!
//! Records are interpreted in local calendar time unless configuration or a
//! command-line flag names another zone. Accepted spellings are `local`,
//! `utc` and any IANA identifier such as `Europe/Berlin`.

use super::error::ActivityError;
use chrono::{Local, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Zone {
    #[default]
    Local,
    Utc,
    Named(Tz),
}

/// Runs `f` with the concrete chrono zone behind a [`Zone`].
///
/// The allocator is generic over `chrono::TimeZone`; this macro lets callers
/// holding a runtime zone value instantiate it without boxing.
#[macro_export]
macro_rules! with_zone {
    ($zone:expr, |$tz:ident| $body:expr) => {
        match $zone {
            $crate::libs::zone::Zone::Local => {
                let $tz = ::chrono::Local;
                $body
            }
            $crate::libs::zone::Zone::Utc => {
                let $tz = ::chrono::Utc;
                $body
            }
            $crate::libs::zone::Zone::Named(named) => {
                let $tz = named;
                $body
            }
        }
    };
}

impl Zone {
    /// Name of the zone as written in configuration.
    pub fn name(&self) -> String {
        match self {
            Zone::Local => "local".to_string(),
            Zone::Utc => "utc".to_string(),
            Zone::Named(tz) => tz.name().to_string(),
        }
    }

    /// Short label for table headers, e.g. `UTC+02:00`.
    pub fn describe(&self) -> String {
        match self {
            Zone::Local => format!("local ({})", Local::now().offset()),
            Zone::Utc => Utc.to_string(),
            Zone::Named(tz) => tz.name().to_string(),
        }
    }
}

impl FromStr for Zone {
    type Err = ActivityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        match name.to_ascii_lowercase().as_str() {
            "" | "local" => Ok(Zone::Local),
            "utc" | "z" => Ok(Zone::Utc),
            _ => name
                .parse::<Tz>()
                .map(Zone::Named)
                .map_err(|_| ActivityError::UnknownZone(name.to_string())),
        }
    }
}

impl TryFrom<String> for Zone {
    type Error = ActivityError;

    fn try_from(name: String) -> Result<Self, Self::Error> {
        name.parse()
    }
}

impl From<Zone> for String {
    fn from(zone: Zone) -> Self {
        zone.name()
    }
}

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_spellings() {
        assert_eq!("local".parse::<Zone>().unwrap(), Zone::Local);
        assert_eq!("UTC".parse::<Zone>().unwrap(), Zone::Utc);
        assert_eq!(
            "Europe/Berlin".parse::<Zone>().unwrap(),
            Zone::Named(chrono_tz::Europe::Berlin)
        );
    }

    #[test]
    fn rejects_unknown_names() {
        assert_eq!(
            "Mars/Olympus".parse::<Zone>(),
            Err(ActivityError::UnknownZone("Mars/Olympus".to_string()))
        );
    }
}
