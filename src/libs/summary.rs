//! Summaries derived from an hour bucket set.
//!
//! All functions here work on whatever unit the set currently holds; the
//! field names say "seconds" because that is what the allocator produces.

use super::activity::{CategoryTotals, HourlyActivitySet, HOURS_PER_DAY};
use super::formatter::Unit;
use serde::{Deserialize, Serialize};

/// Total time of one category with its share of the grand total.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryStat {
    pub name: String,
    pub seconds: f64,
    /// Whole-number percentage of the grand total.
    pub percent: u32,
}

/// Busiest category and busiest hour of a set.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MostActive {
    pub category: Option<String>,
    pub category_seconds: f64,
    pub hour: Option<usize>,
    pub hour_seconds: f64,
}

/// Sums each category across all 24 hours.
///
/// Categories appear in the order they are first met walking hours 0..=23.
pub fn totals_by_category(set: &HourlyActivitySet) -> CategoryTotals {
    let mut totals = CategoryTotals::new();
    for bucket in set {
        for (category, seconds) in &bucket.category_totals {
            *totals.entry(category.clone()).or_insert(0.0) += *seconds;
        }
    }
    totals
}

/// [`totals_by_category`] converted into `unit` with the unit's rounding.
pub fn totals_by_category_in(set: &HourlyActivitySet, unit: Unit) -> CategoryTotals {
    totals_by_category(set)
        .into_iter()
        .map(|(category, seconds)| (category, unit.convert(seconds)))
        .collect()
}

/// Per-hour sums over all categories.
pub fn hourly_totals(set: &HourlyActivitySet) -> [f64; HOURS_PER_DAY] {
    std::array::from_fn(|hour| set[hour].sum())
}

/// Finds the busiest category and the busiest hour.
///
/// Ties go to the first candidate in iteration order: the category credited
/// first, the earliest hour. Either field is `None` when nothing was
/// recorded.
pub fn most_active(set: &HourlyActivitySet) -> MostActive {
    let mut result = MostActive::default();

    for (category, seconds) in totals_by_category(set) {
        if seconds > result.category_seconds {
            result.category_seconds = seconds;
            result.category = Some(category);
        }
    }

    for (hour, seconds) in hourly_totals(set).into_iter().enumerate() {
        if seconds > result.hour_seconds {
            result.hour_seconds = seconds;
            result.hour = Some(hour);
        }
    }

    result
}

/// Category totals sorted by time, largest first, with percentages.
///
/// Equal totals are ordered by name. This is the legend order for charts
/// and the column order for tables.
pub fn category_breakdown(set: &HourlyActivitySet) -> Vec<CategoryStat> {
    let totals = totals_by_category(set);
    let grand_total: f64 = totals.values().sum();

    let mut stats: Vec<CategoryStat> = totals
        .into_iter()
        .map(|(name, seconds)| CategoryStat {
            percent: if grand_total > 0.0 {
                (seconds / grand_total * 100.0).round() as u32
            } else {
                0
            },
            name,
            seconds,
        })
        .collect();

    stats.sort_by(|a, b| b.seconds.total_cmp(&a.seconds).then_with(|| a.name.cmp(&b.name)));
    stats
}
