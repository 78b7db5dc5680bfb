//! Merging of several hour bucket sets into one.
//!
//! Used to combine the sets of individual team members. The category space
//! of the result is the union of the inputs; a category a set never reported
//! simply counts as zero for that set. Merging is a per-cell sum, so the
//! order of the inputs does not matter.

use super::activity::{DailyActivity, HourlyActivitySet};
use std::iter::Sum;

impl HourlyActivitySet {
    /// Adds every cell of `other` into `self`.
    pub fn merge(&mut self, other: &HourlyActivitySet) {
        for bucket in other.iter() {
            for (category, seconds) in &bucket.category_totals {
                self.credit(bucket.hour, category, *seconds);
            }
        }
    }

    /// Copy of the set in which every category of the set appears in every
    /// hour, with `0.0` where it had no activity.
    ///
    /// Chart series need a value for each hour; sparse sets are fine for
    /// everything else.
    pub fn densify(&self) -> HourlyActivitySet {
        let categories: Vec<String> = self.categories().into_iter().map(str::to_string).collect();
        let mut dense = self.clone();
        for bucket in dense.buckets_mut() {
            for category in &categories {
                bucket.category_totals.entry(category.clone()).or_insert(0.0);
            }
        }
        dense
    }
}

impl<'a> Sum<&'a HourlyActivitySet> for HourlyActivitySet {
    fn sum<I: Iterator<Item = &'a HourlyActivitySet>>(iter: I) -> Self {
        iter.fold(HourlyActivitySet::new(), |mut acc, set| {
            acc.merge(set);
            acc
        })
    }
}

/// Sums hour sets cell by cell. An empty input yields 24 empty buckets.
pub fn aggregate<'a, I>(sets: I) -> HourlyActivitySet
where
    I: IntoIterator<Item = &'a HourlyActivitySet>,
{
    let mut sets_merged = 0usize;
    let combined = sets
        .into_iter()
        .inspect(|_| sets_merged += 1)
        .sum::<HourlyActivitySet>();

    tracing::debug!(sets = sets_merged, "aggregated hour sets");
    combined
}

/// Merges per-day maps date by date.
///
/// The output holds every date seen in any input; each date's set is the
/// aggregate of the sets reported for it.
pub fn aggregate_daily<'a, I>(days: I) -> DailyActivity
where
    I: IntoIterator<Item = &'a DailyActivity>,
{
    let mut combined = DailyActivity::new();
    for member in days {
        for (date, set) in member {
            combined.entry(*date).or_default().merge(set);
        }
    }
    combined
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn densify_fills_union_with_zero() {
        let mut set = HourlyActivitySet::new();
        set.add(3, "coding", 60.0).unwrap();
        set.add(4, "meeting", 30.0).unwrap();

        let dense = set.densify();
        for bucket in dense.iter() {
            assert_eq!(bucket.category_totals.len(), 2);
        }
        assert_eq!(dense[3].seconds("coding"), 60.0);
        assert_eq!(dense[3].category_totals["meeting"], 0.0);
        assert_eq!(dense.total_seconds(), set.total_seconds());
    }
}
