#[cfg(test)]
mod tests {
    use hourmap::libs::activity::HourlyActivitySet;
    use hourmap::libs::formatter::Unit;
    use hourmap::libs::summary::{
        category_breakdown, hourly_totals, most_active, totals_by_category, totals_by_category_in, MostActive,
    };

    fn sample() -> HourlyActivitySet {
        let mut set = HourlyActivitySet::new();
        set.add(9, "coding", 1800.0).unwrap();
        set.add(9, "meeting", 600.0).unwrap();
        set.add(10, "coding", 1200.0).unwrap();
        set.add(15, "browsing", 2400.0).unwrap();
        set
    }

    #[test]
    fn test_totals_by_category() {
        let totals = totals_by_category(&sample());
        assert_eq!(totals.len(), 3);
        assert_eq!(totals["coding"], 3000.0);
        assert_eq!(totals["meeting"], 600.0);
        assert_eq!(totals["browsing"], 2400.0);
    }

    #[test]
    fn test_totals_keep_first_seen_order() {
        let totals = totals_by_category(&sample());
        let names: Vec<&str> = totals.keys().map(String::as_str).collect();
        assert_eq!(names, vec!["coding", "meeting", "browsing"]);
    }

    #[test]
    fn test_totals_by_category_in_units() {
        let mut set = HourlyActivitySet::new();
        set.add(9, "coding", 1234.4).unwrap();
        set.add(10, "meeting", 100.0).unwrap();

        let seconds = totals_by_category_in(&set, Unit::Seconds);
        assert_eq!(seconds["coding"], 1234.0);

        let minutes = totals_by_category_in(&set, Unit::Minutes);
        assert_eq!(minutes["coding"], 20.6);
        assert_eq!(minutes["meeting"], 1.7);

        let hours = totals_by_category_in(&set, Unit::Hours);
        assert_eq!(hours["coding"], 0.34);
        assert_eq!(hours["meeting"], 0.03);
    }

    #[test]
    fn test_hourly_totals() {
        let totals = hourly_totals(&sample());
        assert_eq!(totals[9], 2400.0);
        assert_eq!(totals[10], 1200.0);
        assert_eq!(totals[15], 2400.0);
        assert_eq!(totals.iter().sum::<f64>(), 6000.0);
    }

    #[test]
    fn test_most_active() {
        let result = most_active(&sample());
        assert_eq!(result.category.as_deref(), Some("coding"));
        assert_eq!(result.category_seconds, 3000.0);
        // hours 9 and 15 tie at 2400; the earlier hour wins
        assert_eq!(result.hour, Some(9));
        assert_eq!(result.hour_seconds, 2400.0);
    }

    #[test]
    fn test_most_active_category_tie_goes_to_first_inserted() {
        let mut set = HourlyActivitySet::new();
        set.add(9, "writing", 100.0).unwrap();
        set.add(10, "building", 100.0).unwrap();

        let result = most_active(&set);
        assert_eq!(result.category.as_deref(), Some("writing"));
        assert_eq!(result.hour, Some(9));
    }

    #[test]
    fn test_most_active_tie_within_one_hour() {
        let mut set = HourlyActivitySet::new();
        set.add(9, "zeta", 10.0).unwrap();
        set.add(9, "alpha", 10.0).unwrap();

        assert_eq!(most_active(&set).category.as_deref(), Some("zeta"));
    }

    #[test]
    fn test_most_active_empty_set() {
        let result = most_active(&HourlyActivitySet::new());
        assert_eq!(result, MostActive::default());
        assert_eq!(result.category, None);
        assert_eq!(result.hour, None);
        assert_eq!(result.category_seconds, 0.0);
    }

    #[test]
    fn test_category_breakdown_order_and_percentages() {
        let stats = category_breakdown(&sample());
        let names: Vec<&str> = stats.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["coding", "browsing", "meeting"]);

        let percents: Vec<u32> = stats.iter().map(|s| s.percent).collect();
        assert_eq!(percents, vec![50, 40, 10]);
    }

    #[test]
    fn test_category_breakdown_ties_sorted_by_name() {
        let mut set = HourlyActivitySet::new();
        set.add(1, "zeta", 50.0).unwrap();
        set.add(2, "alpha", 50.0).unwrap();

        let stats = category_breakdown(&set);
        assert_eq!(stats[0].name, "alpha");
        assert_eq!(stats[1].name, "zeta");
        assert_eq!(stats[0].percent, 50);
    }

    #[test]
    fn test_category_breakdown_empty() {
        assert!(category_breakdown(&HourlyActivitySet::new()).is_empty());
    }
}
