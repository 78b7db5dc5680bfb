//! Redistribution of duration records over the hours of the day.
//!
//! Each record is walked through wall-clock time hour by hour. The first hour
//! receives the seconds up to the next top of the hour, each fully covered
//! hour receives 3600 seconds, and the last hour receives whatever falls past
//! its top. A record ending exactly on the hour credits nothing to the hour
//! it ends on.
//!
//! ```text
//!  08:30            09:00            10:00     10:30
//!    |---- 1800s ----|---- 3600s -----|- 1800s -|
//!       hour 8           hour 9          hour 10
//! ```
//!
//! Buckets are keyed by hour of day only. A record running past midnight
//! keeps walking into hours 0, 1, ... of the same set, so every second is
//! credited exactly once even for records longer than a day. Use
//! [`Allocator::allocate_by_day`] when the calendar date matters.
//!
//! ## Validation
//!
//! The whole batch is validated before anything is returned:
//! - non-finite `time` or `duration` rejects the batch
//! - timestamps outside chrono's calendar range reject the batch
//! - durations above [`MAX_RECORD_DURATION`] reject the batch
//! - negative durations reject the batch under [`NegativeDurationPolicy::Reject`]
//!   and count as zero under [`NegativeDurationPolicy::Clamp`]

use super::activity::{DailyActivity, HourlyActivitySet, SECONDS_PER_HOUR};
use super::error::{ActivityError, Result};
use super::record::{DurationRecord, SliceBy};
use chrono::{DateTime, Local, NaiveDate, TimeZone, Timelike};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Longest duration a single record may have: one leap year.
///
/// The walk costs one step per hour touched, so this also bounds the work
/// done for any one record.
pub const MAX_RECORD_DURATION: f64 = 366.0 * 24.0 * SECONDS_PER_HOUR;

/// How a record with a negative duration is treated.
#[derive(ValueEnum, Copy, Clone, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NegativeDurationPolicy {
    /// Fail the whole batch.
    #[default]
    Reject,
    /// Treat the duration as zero and log a warning.
    Clamp,
}

impl fmt::Display for NegativeDurationPolicy {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            NegativeDurationPolicy::Reject => write!(f, "reject"),
            NegativeDurationPolicy::Clamp => write!(f, "clamp"),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AllocationOptions {
    pub slice_by: SliceBy,
    pub negative_durations: NegativeDurationPolicy,
}

/// Part of a record that falls into one local hour.
#[derive(Debug, Clone, PartialEq)]
pub struct HourSlice {
    pub date: NaiveDate,
    pub hour: usize,
    pub seconds: f64,
}

/// Splits duration records into hour buckets in a given time zone.
#[derive(Debug, Clone)]
pub struct Allocator<Tz: TimeZone> {
    tz: Tz,
    options: AllocationOptions,
}

impl Allocator<Local> {
    /// Allocator reading hours in the machine's local time.
    pub fn local() -> Self {
        Self::new(Local)
    }
}

impl<Tz: TimeZone> Allocator<Tz> {
    pub fn new(tz: Tz) -> Self {
        Self {
            tz,
            options: AllocationOptions::default(),
        }
    }

    pub fn with_options(mut self, options: AllocationOptions) -> Self {
        self.options = options;
        self
    }

    /// Distributes every record over the 24 hour-of-day buckets.
    pub fn allocate(&self, records: &[DurationRecord]) -> Result<HourlyActivitySet> {
        let mut set = HourlyActivitySet::new();
        for (index, record) in records.iter().enumerate() {
            let key = record.slice_key(&self.options.slice_by);
            self.walk(index, record, |slice| set.credit(slice.hour, &key, slice.seconds))?;
        }

        tracing::debug!(
            records = records.len(),
            seconds = set.total_seconds(),
            "allocated records into hour buckets"
        );
        Ok(set)
    }

    /// Like [`allocate`](Self::allocate), but keeps one set per local date.
    ///
    /// A record crossing midnight contributes to two dates instead of being
    /// folded into the early hours of the same set. Dates without activity
    /// are absent from the map.
    pub fn allocate_by_day(&self, records: &[DurationRecord]) -> Result<DailyActivity> {
        let mut days = DailyActivity::new();
        for (index, record) in records.iter().enumerate() {
            let key = record.slice_key(&self.options.slice_by);
            self.walk(index, record, |slice| {
                days.entry(slice.date)
                    .or_default()
                    .credit(slice.hour, &key, slice.seconds)
            })?;
        }

        tracing::debug!(records = records.len(), days = days.len(), "allocated records by day");
        Ok(days)
    }

    /// Wall-clock hour slices of one record, in chronological order.
    ///
    /// `index` is the record's position in its batch and only serves error
    /// reporting.
    pub fn slices(&self, index: usize, record: &DurationRecord) -> Result<Vec<HourSlice>> {
        let mut slices = Vec::new();
        self.walk(index, record, |slice| slices.push(slice))?;
        Ok(slices)
    }

    /// Hands each hour slice of `record` to `visit` as it is produced.
    fn walk<F>(&self, index: usize, record: &DurationRecord, mut visit: F) -> Result<()>
    where
        F: FnMut(HourSlice),
    {
        let duration = self.effective_duration(index, record)?;
        if duration == 0.0 {
            return Ok(());
        }

        let start = record.time;
        let end = start + duration;
        let mut cursor = start;
        loop {
            let (local, hour_start) = self.locate(index, cursor)?;
            let boundary = hour_start as f64 + SECONDS_PER_HOUR;
            let slice_end = end.min(boundary);

            visit(HourSlice {
                date: local.date_naive(),
                hour: local.hour() as usize,
                seconds: slice_end - cursor,
            });

            if end <= boundary {
                return Ok(());
            }
            cursor = boundary;
        }
    }

    fn effective_duration(&self, index: usize, record: &DurationRecord) -> Result<f64> {
        if !record.time.is_finite() {
            return Err(ActivityError::NonFinite { index, field: "time" });
        }
        if !record.duration.is_finite() {
            return Err(ActivityError::NonFinite { index, field: "duration" });
        }
        if record.duration > MAX_RECORD_DURATION {
            return Err(ActivityError::DurationTooLong {
                index,
                duration: record.duration,
            });
        }
        if record.duration >= 0.0 {
            return Ok(record.duration);
        }

        match self.options.negative_durations {
            NegativeDurationPolicy::Reject => Err(ActivityError::NegativeDuration {
                index,
                duration: record.duration,
            }),
            NegativeDurationPolicy::Clamp => {
                tracing::warn!(index, duration = record.duration, "negative duration clamped to zero");
                Ok(0.0)
            }
        }
    }

    /// Local date-time at `instant` plus the unix second at which its local
    /// hour began.
    fn locate(&self, index: usize, instant: f64) -> Result<(DateTime<Tz>, i64)> {
        let out_of_range = || ActivityError::TimestampOutOfRange { index, time: instant };

        let secs = instant.floor();
        if secs < i64::MIN as f64 || secs > i64::MAX as f64 {
            return Err(out_of_range());
        }
        let secs = secs as i64;
        let nanos = (((instant - secs as f64) * 1e9) as u32).min(999_999_999);

        let local = self.tz.timestamp_opt(secs, nanos).single().ok_or_else(out_of_range)?;
        let into_hour = i64::from(local.minute() * 60 + local.second());
        Ok((local, secs - into_hour))
    }
}

/// Allocates `records` in local calendar time with default options.
pub fn allocate(records: &[DurationRecord]) -> Result<HourlyActivitySet> {
    Allocator::local().allocate(records)
}
