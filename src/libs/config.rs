//! Configuration management for hourmap.
//!
//! Settings are stored as JSON in the platform data directory and grouped in
//! optional modules, so a fresh installation works without any file at all.
//!
//! ## Configuration Structure
//!
//! - **Allocation**: record field to slice by, negative duration policy,
//!   time zone used to read the hour of day
//! - **Display**: unit used by tables and exports
//!
//! Command-line flags override whatever is configured here.
//!
//! ## Usage Examples
//!
//! ```rust,no_run
//! use hourmap::libs::config::Config;
//!
//! let config = Config::read()?;
//! let allocation = config.allocation_or_default();
//! println!("Slicing by {}", allocation.slice_by);
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::allocator::{AllocationOptions, NegativeDurationPolicy};
use super::data_storage::DataStorage;
use super::formatter::Unit;
use super::record::SliceBy;
use super::zone::Zone;
use crate::libs::messages::Message;
use crate::msg_print;
use anyhow::{Context, Result};
use dialoguer::{theme::ColorfulTheme, Input, MultiSelect, Select};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};

/// Configuration file name inside the data directory.
pub const CONFIG_FILE_NAME: &str = "config.json";

/// A configurable module as listed by the setup wizard.
#[derive(Debug, Clone)]
pub struct ConfigModule {
    pub key: String,
    pub name: String,
}

/// How records are turned into hour buckets.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
pub struct AllocationConfig {
    /// Record field whose value labels the buckets.
    #[serde(default)]
    pub slice_by: SliceBy,

    /// What to do with records whose duration is negative.
    #[serde(default)]
    pub negative_durations: NegativeDurationPolicy,

    /// Zone in which the hour of day is read.
    #[serde(default)]
    pub timezone: Zone,
}

impl AllocationConfig {
    pub fn options(&self) -> AllocationOptions {
        AllocationOptions {
            slice_by: self.slice_by.clone(),
            negative_durations: self.negative_durations,
        }
    }
}

/// How results are presented.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
pub struct DisplayConfig {
    #[serde(default)]
    pub unit: Unit,
}

/// Root configuration object. Unset modules are omitted from the file.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct Config {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allocation: Option<AllocationConfig>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub display: Option<DisplayConfig>,
}

impl Config {
    /// Reads the configuration file, or returns defaults when there is none.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        if !config_file_path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(&config_file_path)
            .with_context(|| format!("reading {}", config_file_path.display()))?;
        let config: Config = serde_json::from_str(&config_str)
            .with_context(|| format!("parsing {}", config_file_path.display()))?;
        Ok(config)
    }

    /// Writes the configuration as pretty-printed JSON.
    pub fn save(&self) -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        let config_file = File::create(config_file_path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    pub fn allocation_or_default(&self) -> AllocationConfig {
        self.allocation.clone().unwrap_or_default()
    }

    pub fn display_or_default(&self) -> DisplayConfig {
        self.display.clone().unwrap_or_default()
    }

    /// Interactive setup wizard. Current values are offered as defaults.
    pub fn init() -> Result<Self> {
        let mut config = Self::read().unwrap_or_default();

        let modules = vec![
            ConfigModule {
                key: "allocation".to_string(),
                name: Message::ConfigModuleAllocation.to_string(),
            },
            ConfigModule {
                key: "display".to_string(),
                name: Message::ConfigModuleDisplay.to_string(),
            },
        ];

        let selected = MultiSelect::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptSelectModules.to_string())
            .items(&modules.iter().map(|module| &module.name).collect::<Vec<_>>())
            .interact()?;

        for &selection in &selected {
            match modules[selection].key.as_str() {
                "allocation" => {
                    let default = config.allocation_or_default();
                    msg_print!(Message::ConfigModuleAllocation);

                    let slice_by: String = Input::with_theme(&ColorfulTheme::default())
                        .with_prompt(Message::PromptSliceBy.to_string())
                        .default(default.slice_by.to_string())
                        .interact_text()?;

                    let timezone: String = Input::with_theme(&ColorfulTheme::default())
                        .with_prompt(Message::PromptTimezone.to_string())
                        .default(default.timezone.name())
                        .validate_with(|input: &String| -> std::result::Result<(), String> {
                            input.parse::<Zone>().map(|_| ()).map_err(|e| e.to_string())
                        })
                        .interact_text()?;

                    let policies = [NegativeDurationPolicy::Reject, NegativeDurationPolicy::Clamp];
                    let policy = Select::with_theme(&ColorfulTheme::default())
                        .with_prompt(Message::PromptNegativePolicy.to_string())
                        .items(&policies)
                        .default(policies.iter().position(|p| *p == default.negative_durations).unwrap_or(0))
                        .interact()?;

                    config.allocation = Some(AllocationConfig {
                        slice_by: slice_by.parse().unwrap_or_default(),
                        negative_durations: policies[policy],
                        timezone: timezone.parse()?,
                    });
                }
                "display" => {
                    let default = config.display_or_default();
                    msg_print!(Message::ConfigModuleDisplay);

                    let units = [Unit::Seconds, Unit::Minutes, Unit::Hours];
                    let unit = Select::with_theme(&ColorfulTheme::default())
                        .with_prompt(Message::PromptUnit.to_string())
                        .items(&units)
                        .default(units.iter().position(|u| *u == default.unit).unwrap_or(1))
                        .interact()?;

                    config.display = Some(DisplayConfig { unit: units[unit] });
                }
                _ => {}
            }
        }

        Ok(config)
    }
}
