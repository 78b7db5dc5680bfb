#[cfg(test)]
mod tests {
    use hourmap::commands::PipelineArgs;
    use hourmap::libs::allocator::NegativeDurationPolicy;
    use hourmap::libs::config::{AllocationConfig, Config, DisplayConfig, CONFIG_FILE_NAME};
    use hourmap::libs::data_storage::DataStorage;
    use hourmap::libs::formatter::Unit;
    use hourmap::libs::record::SliceBy;
    use hourmap::libs::zone::Zone;
    use std::sync::{Mutex, MutexGuard};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    static HOME_LOCK: Mutex<()> = Mutex::new(());

    /// Points the data directory at a fresh temporary home for each test.
    /// The lock keeps tests from swapping HOME under each other.
    struct ConfigTestContext {
        _guard: MutexGuard<'static, ()>,
        _temp_dir: TempDir,
    }

    impl TestContext for ConfigTestContext {
        fn setup() -> Self {
            let guard = HOME_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            ConfigTestContext {
                _guard: guard,
                _temp_dir: temp_dir,
            }
        }
    }

    fn sample_config() -> Config {
        Config {
            allocation: Some(AllocationConfig {
                slice_by: SliceBy::Project,
                negative_durations: NegativeDurationPolicy::Clamp,
                timezone: Zone::Named(chrono_tz::Asia::Tokyo),
            }),
            display: Some(DisplayConfig { unit: Unit::Hours }),
        }
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.allocation.is_none());
        assert!(config.display.is_none());

        let allocation = config.allocation_or_default();
        assert_eq!(allocation.slice_by, SliceBy::Category);
        assert_eq!(allocation.negative_durations, NegativeDurationPolicy::Reject);
        assert_eq!(allocation.timezone, Zone::Local);
        assert_eq!(config.display_or_default().unit, Unit::Minutes);
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_read_nonexistent_config(_ctx: &mut ConfigTestContext) {
        let config = Config::read().unwrap();
        assert_eq!(config.allocation, None);
        assert_eq!(config.display, None);
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_save_and_read_config(_ctx: &mut ConfigTestContext) {
        let config = sample_config();
        config.save().unwrap();

        let read_config = Config::read().unwrap();
        assert_eq!(read_config.allocation, config.allocation);
        assert_eq!(read_config.display, config.display);
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_config_file_format(_ctx: &mut ConfigTestContext) {
        sample_config().save().unwrap();

        let path = DataStorage::new().get_path(CONFIG_FILE_NAME).unwrap();
        let raw: serde_json::Value = serde_json::from_str(&std::fs::read_to_string(path).unwrap()).unwrap();
        assert_eq!(raw["allocation"]["slice_by"], "project");
        assert_eq!(raw["allocation"]["negative_durations"], "clamp");
        assert_eq!(raw["allocation"]["timezone"], "Asia/Tokyo");
        assert_eq!(raw["display"]["unit"], "hours");
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_partial_config_uses_defaults(_ctx: &mut ConfigTestContext) {
        let path = DataStorage::new().get_path(CONFIG_FILE_NAME).unwrap();
        std::fs::write(&path, r#"{ "allocation": { "timezone": "utc" } }"#).unwrap();

        let config = Config::read().unwrap();
        let allocation = config.allocation_or_default();
        assert_eq!(allocation.timezone, Zone::Utc);
        assert_eq!(allocation.slice_by, SliceBy::Category);
        assert_eq!(config.display, None);
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_invalid_config_is_an_error(_ctx: &mut ConfigTestContext) {
        let path = DataStorage::new().get_path(CONFIG_FILE_NAME).unwrap();
        std::fs::write(&path, r#"{ "allocation": { "timezone": "Mars/Olympus" } }"#).unwrap();
        assert!(Config::read().is_err());

        std::fs::write(&path, "not json").unwrap();
        assert!(Config::read().is_err());
    }

    #[test]
    fn test_flags_override_config() {
        let config = sample_config();

        let settings = PipelineArgs::default().resolve(&config);
        assert_eq!(settings.zone, Zone::Named(chrono_tz::Asia::Tokyo));
        assert_eq!(settings.options.slice_by, SliceBy::Project);
        assert_eq!(settings.options.negative_durations, NegativeDurationPolicy::Clamp);
        assert_eq!(settings.unit, Unit::Hours);

        let args = PipelineArgs {
            unit: Some(Unit::Seconds),
            timezone: Some(Zone::Utc),
            slice_by: Some(SliceBy::Field("language".into())),
            negative: Some(NegativeDurationPolicy::Reject),
            ..PipelineArgs::default()
        };
        let settings = args.resolve(&config);
        assert_eq!(settings.zone, Zone::Utc);
        assert_eq!(settings.options.slice_by, SliceBy::Field("language".into()));
        assert_eq!(settings.options.negative_durations, NegativeDurationPolicy::Reject);
        assert_eq!(settings.unit, Unit::Seconds);
    }

    #[test]
    fn test_allocation_options_from_config() {
        let options = sample_config().allocation_or_default().options();
        assert_eq!(options.slice_by, SliceBy::Project);
        assert_eq!(options.negative_durations, NegativeDurationPolicy::Clamp);
    }
}
