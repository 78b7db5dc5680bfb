//! Hour-of-day buckets of categorized seconds.
//!
//! An [`HourlyActivitySet`] always holds exactly 24 [`HourBucket`]s, one per
//! hour of the day, regardless of how sparse the underlying data is. Each
//! bucket maps a category label to the seconds attributed to it in that
//! hour. Categories are open-ended strings coming from the tracking service,
//! so the map is keyed by name rather than by a closed set of fields.
//! Categories keep the order in which they were first credited; sorted
//! legends come from [`category_breakdown`](super::summary::category_breakdown).
//!
//! The serialized form is the one charting consumers read directly:
//!
//! ```json
//! [{ "hour": 0, "categories": {} }, { "hour": 1, "categories": { "coding": 1800.0 } }, ...]
//! ```

use super::error::{ActivityError, Result};
use chrono::NaiveDate;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::ops::Index;

pub const HOURS_PER_DAY: usize = 24;
pub const SECONDS_PER_HOUR: f64 = 3600.0;

/// Seconds (or a converted unit) per category label, in insertion order.
pub type CategoryTotals = IndexMap<String, f64>;

/// Per-day hour sets, keyed by local calendar date.
pub type DailyActivity = BTreeMap<NaiveDate, HourlyActivitySet>;

/// Accumulator for a single hour of the day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HourBucket {
    pub hour: usize,
    #[serde(rename = "categories", default)]
    pub category_totals: CategoryTotals,
    /// Sum of the category values, filled in by unit conversion only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total: Option<f64>,
}

impl HourBucket {
    pub fn new(hour: usize) -> Self {
        Self {
            hour,
            category_totals: CategoryTotals::new(),
            total: None,
        }
    }

    /// Seconds recorded for `category` in this hour, zero when absent.
    pub fn seconds(&self, category: &str) -> f64 {
        self.category_totals.get(category).copied().unwrap_or(0.0)
    }

    /// Sum over all categories.
    pub fn sum(&self) -> f64 {
        self.category_totals.values().sum()
    }

    pub fn is_empty(&self) -> bool {
        self.category_totals.is_empty()
    }

    pub(crate) fn credit(&mut self, category: &str, seconds: f64) {
        match self.category_totals.get_mut(category) {
            Some(total) => *total += seconds,
            None => {
                self.category_totals.insert(category.to_string(), seconds);
            }
        }
    }
}

/// The 24 hour buckets of a day, indexed by hour.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<HourBucket>", into = "Vec<HourBucket>")]
pub struct HourlyActivitySet {
    buckets: [HourBucket; HOURS_PER_DAY],
}

impl HourlyActivitySet {
    /// Creates 24 empty buckets.
    pub fn new() -> Self {
        Self {
            buckets: std::array::from_fn(HourBucket::new),
        }
    }

    pub fn bucket(&self, hour: usize) -> Option<&HourBucket> {
        self.buckets.get(hour)
    }

    pub fn buckets(&self) -> &[HourBucket] {
        &self.buckets
    }

    pub fn iter(&self) -> std::slice::Iter<'_, HourBucket> {
        self.buckets.iter()
    }

    /// Adds `seconds` of `category` to `hour`.
    ///
    /// Rejects hours outside `0..=23` and negative or non-finite seconds.
    /// Adding zero seconds leaves the set untouched.
    pub fn add(&mut self, hour: usize, category: &str, seconds: f64) -> Result<()> {
        if hour >= HOURS_PER_DAY {
            return Err(ActivityError::HourOutOfRange(hour));
        }
        if !seconds.is_finite() || seconds < 0.0 {
            return Err(ActivityError::InvalidSeconds(seconds));
        }
        if seconds > 0.0 {
            self.credit(hour, category, seconds);
        }
        Ok(())
    }

    pub(crate) fn credit(&mut self, hour: usize, category: &str, seconds: f64) {
        self.buckets[hour].credit(category, seconds);
    }

    pub(crate) fn buckets_mut(&mut self) -> &mut [HourBucket] {
        &mut self.buckets
    }

    /// Sum over every hour and category.
    pub fn total_seconds(&self) -> f64 {
        self.buckets.iter().map(HourBucket::sum).sum()
    }

    /// Every category label present in at least one hour.
    pub fn categories(&self) -> BTreeSet<&str> {
        self.buckets
            .iter()
            .flat_map(|bucket| bucket.category_totals.keys().map(String::as_str))
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.iter().all(HourBucket::is_empty)
    }
}

impl Default for HourlyActivitySet {
    fn default() -> Self {
        Self::new()
    }
}

impl Index<usize> for HourlyActivitySet {
    type Output = HourBucket;

    fn index(&self, hour: usize) -> &Self::Output {
        &self.buckets[hour]
    }
}

impl<'a> IntoIterator for &'a HourlyActivitySet {
    type Item = &'a HourBucket;
    type IntoIter = std::slice::Iter<'a, HourBucket>;

    fn into_iter(self) -> Self::IntoIter {
        self.buckets.iter()
    }
}

impl TryFrom<Vec<HourBucket>> for HourlyActivitySet {
    type Error = ActivityError;

    fn try_from(buckets: Vec<HourBucket>) -> Result<Self> {
        if buckets.len() != HOURS_PER_DAY {
            return Err(ActivityError::BucketCount(buckets.len()));
        }
        for (position, bucket) in buckets.iter().enumerate() {
            if bucket.hour != position {
                return Err(ActivityError::BucketOrder {
                    position,
                    hour: bucket.hour as u32,
                });
            }
            if let Some(seconds) = bucket.category_totals.values().find(|s| !s.is_finite() || **s < 0.0) {
                return Err(ActivityError::InvalidSeconds(*seconds));
            }
        }
        let buckets: [HourBucket; HOURS_PER_DAY] = buckets
            .try_into()
            .map_err(|rest: Vec<HourBucket>| ActivityError::BucketCount(rest.len()))?;
        Ok(Self { buckets })
    }
}

impl From<HourlyActivitySet> for Vec<HourBucket> {
    fn from(set: HourlyActivitySet) -> Self {
        set.buckets.into()
    }
}
