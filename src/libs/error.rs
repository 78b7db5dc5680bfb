//! Error types for record validation and activity set construction.
//!
//! Allocation either accepts a whole batch of records or rejects it with the
//! index of the first offending record. No partially filled set is ever
//! returned, so callers never observe negative or non-finite bucket values.

use thiserror::Error;

/// Errors raised while validating records or building hour bucket sets.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ActivityError {
    /// A record carried a negative duration and the policy is `reject`.
    #[error("record #{index} has a negative duration ({duration}s)")]
    NegativeDuration { index: usize, duration: f64 },

    /// A record lasted longer than `allocator::MAX_RECORD_DURATION`.
    #[error("record #{index} lasts {duration}s, longer than one leap year")]
    DurationTooLong { index: usize, duration: f64 },

    /// A record field was NaN or infinite.
    #[error("record #{index} has a non-finite {field}")]
    NonFinite { index: usize, field: &'static str },

    /// A timestamp could not be mapped onto the calendar.
    #[error("record #{index} timestamp {time} is outside the supported calendar range")]
    TimestampOutOfRange { index: usize, time: f64 },

    /// Hour index outside `0..=23`.
    #[error("hour {0} is outside the range 0..=23")]
    HourOutOfRange(usize),

    /// Seconds added to a bucket must be finite and non-negative.
    #[error("invalid seconds value {0}")]
    InvalidSeconds(f64),

    /// A serialized set did not contain exactly 24 buckets.
    #[error("expected 24 hour buckets, found {0}")]
    BucketCount(usize),

    /// A serialized bucket was labelled with the wrong hour.
    #[error("bucket at position {position} is labelled hour {hour}")]
    BucketOrder { position: usize, hour: u32 },

    /// Unknown zone name in configuration or on the command line.
    #[error("unknown time zone '{0}'")]
    UnknownZone(String),
}

pub type Result<T> = std::result::Result<T, ActivityError>;
