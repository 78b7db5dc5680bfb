//! Unit conversion and duration formatting for display.
//!
//! Allocation works in seconds. Charts and tables usually want minutes or
//! hours, with a fixed number of decimals:
//!
//! | unit      | divisor | rounding   |
//! |-----------|---------|------------|
//! | `seconds` | 1       | integer    |
//! | `minutes` | 60      | 1 decimal  |
//! | `hours`   | 3600    | 2 decimals |
//!
//! ## Examples
//!
//! ```rust
//! use hourmap::libs::formatter::{format_duration, format_seconds};
//! use chrono::Duration;
//!
//! assert_eq!(format_duration(&Duration::minutes(90)), "01:30");
//! assert_eq!(format_seconds(5400.0), "1h 30m");
//! ```

use super::activity::HourlyActivitySet;
use chrono::Duration;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Display unit for bucket values.
#[derive(ValueEnum, Copy, Clone, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Unit {
    Seconds,
    #[default]
    Minutes,
    Hours,
}

impl Unit {
    pub fn divisor(&self) -> f64 {
        match self {
            Unit::Seconds => 1.0,
            Unit::Minutes => 60.0,
            Unit::Hours => 3600.0,
        }
    }

    pub fn decimals(&self) -> i32 {
        match self {
            Unit::Seconds => 0,
            Unit::Minutes => 1,
            Unit::Hours => 2,
        }
    }

    /// Converts seconds into this unit, rounded to its precision.
    pub fn convert(&self, seconds: f64) -> f64 {
        self.round(seconds / self.divisor())
    }

    pub fn round(&self, value: f64) -> f64 {
        round_to(value, self.decimals())
    }

    /// Short suffix used in table headers.
    pub fn suffix(&self) -> &'static str {
        match self {
            Unit::Seconds => "s",
            Unit::Minutes => "min",
            Unit::Hours => "h",
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Unit::Seconds => write!(f, "seconds"),
            Unit::Minutes => write!(f, "minutes"),
            Unit::Hours => write!(f, "hours"),
        }
    }
}

/// Rounds half away from zero to `decimals` places.
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

/// Converts every value of `set` into `unit` and fills in per-hour totals.
///
/// Each total is the sum of the converted category values of its hour,
/// rounded to the unit's precision. With [`Unit::Seconds`] the values are
/// only rounded to whole seconds.
pub fn to_unit(set: &HourlyActivitySet, unit: Unit) -> HourlyActivitySet {
    let mut converted = set.clone();
    for bucket in converted.buckets_mut() {
        for value in bucket.category_totals.values_mut() {
            *value = unit.convert(*value);
        }
        bucket.total = Some(unit.round(bucket.sum()));
    }
    converted
}

/// Formats a chrono duration as "HH:MM".
///
/// Seconds are dropped and negative durations display as "00:00".
pub fn format_duration(duration: &Duration) -> String {
    let hours = duration.num_hours();
    let mins = duration.num_minutes() % 60;

    format!("{:02}:{:02}", hours.max(0), mins.max(0))
}

/// Formats a number of seconds as "Xh YYm", or "Ym" below an hour.
pub fn format_seconds(seconds: f64) -> String {
    let total_minutes = if seconds.is_finite() && seconds > 0.0 {
        (seconds / 60.0).floor() as i64
    } else {
        0
    };
    let hours = total_minutes / 60;
    let minutes = total_minutes % 60;

    if hours > 0 {
        format!("{}h {:02}m", hours, minutes)
    } else {
        format!("{}m", minutes)
    }
}
