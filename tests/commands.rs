#[cfg(test)]
mod tests {
    use hourmap::commands::input::Source;
    use hourmap::commands::{PipelineArgs, Settings};
    use hourmap::libs::aggregator::aggregate;
    use hourmap::libs::allocator::{AllocationOptions, NegativeDurationPolicy};
    use hourmap::libs::formatter::Unit;
    use hourmap::libs::record::SliceBy;
    use hourmap::libs::zone::Zone;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    // 2025-03-09 09:15:00 UTC
    const MORNING: f64 = 1_741_511_700.0;

    struct InputTestContext {
        temp_dir: TempDir,
    }

    impl InputTestContext {
        fn write(&self, name: &str, content: &str) -> PathBuf {
            let path = self.temp_dir.path().join(name);
            fs::write(&path, content).unwrap();
            path
        }
    }

    impl TestContext for InputTestContext {
        fn setup() -> Self {
            InputTestContext {
                temp_dir: tempfile::tempdir().unwrap(),
            }
        }
    }

    fn utc_settings() -> Settings {
        Settings {
            zone: Zone::Utc,
            options: AllocationOptions::default(),
            unit: Unit::Minutes,
        }
    }

    #[test]
    fn test_source_from_path() {
        assert_eq!(Source::from(None), Source::Stdin);
        assert_eq!(Source::from(Some(PathBuf::from("-"))), Source::Stdin);
        assert_eq!(
            Source::from(Some(PathBuf::from("alice.json"))),
            Source::File(PathBuf::from("alice.json"))
        );
        assert_eq!(Source::Stdin.to_string(), "stdin");
    }

    #[test_context(InputTestContext)]
    #[test]
    fn test_load_file(ctx: &mut InputTestContext) {
        let path = ctx.write(
            "alice.json",
            &format!(r#"{{ "data": [{{ "time": {}, "duration": 1200, "category": "coding" }}] }}"#, MORNING),
        );

        let records = Source::File(path).load().unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].time, MORNING);
    }

    #[test_context(InputTestContext)]
    #[test]
    fn test_load_missing_or_malformed_file(ctx: &mut InputTestContext) {
        let missing = ctx.temp_dir.path().join("nobody.json");
        assert!(Source::File(missing).load().is_err());

        let broken = ctx.write("broken.json", "{ not json");
        let err = Source::File(broken).load().unwrap_err();
        assert!(format!("{:#}", err).contains("broken.json"));
    }

    #[test_context(InputTestContext)]
    #[test]
    fn test_team_pipeline(ctx: &mut InputTestContext) {
        let alice = ctx.write(
            "alice.json",
            &format!(r#"[{{ "time": {}, "duration": 1200, "category": "coding" }}]"#, MORNING),
        );
        let bob = ctx.write(
            "bob.json",
            &format!(
                r#"[{{ "time": {}, "duration": 600, "category": "coding" }}, {{ "time": {}, "duration": 300, "category": "meeting" }}]"#,
                MORNING,
                MORNING + 3600.0
            ),
        );

        let settings = utc_settings();
        let members: Vec<_> = [alice, bob]
            .into_iter()
            .map(|path| settings.allocate(&Source::File(path).load().unwrap()).unwrap())
            .collect();
        let team = aggregate(&members);

        assert_eq!(team[9].seconds("coding"), 1800.0);
        assert_eq!(team[10].seconds("meeting"), 300.0);
        assert_eq!(team.total_seconds(), 2100.0);
    }

    #[test]
    fn test_settings_allocate_by_day_uses_zone() {
        let records = vec![hourmap::libs::record::DurationRecord::new(MORNING, 600.0, "coding")];

        let tokyo = Settings {
            zone: Zone::Named(chrono_tz::Asia::Tokyo),
            ..utc_settings()
        };
        let days = tokyo.allocate_by_day(&records).unwrap();
        let (date, set) = days.iter().next().unwrap();

        // 09:15 UTC is 18:15 in Tokyo
        assert_eq!(date.to_string(), "2025-03-09");
        assert_eq!(set[18].seconds("coding"), 600.0);
    }

    #[test]
    fn test_settings_apply_options() {
        let args = PipelineArgs {
            negative: Some(NegativeDurationPolicy::Clamp),
            slice_by: Some(SliceBy::Project),
            timezone: Some(Zone::Utc),
            ..PipelineArgs::default()
        };
        let settings = args.resolve(&Default::default());
        let records = vec![
            hourmap::libs::record::DurationRecord::new(MORNING, 600.0, "coding").with_project("api"),
            hourmap::libs::record::DurationRecord::new(MORNING, -5.0, "coding"),
        ];

        let set = settings.allocate(&records).unwrap();
        assert_eq!(set[9].seconds("api"), 600.0);
        assert_eq!(set.total_seconds(), 600.0);
    }
}
