pub mod hourly;
pub mod init;
pub mod input;
pub mod render;
pub mod team;

use crate::libs::allocator::{AllocationOptions, Allocator, NegativeDurationPolicy};
use crate::libs::activity::{DailyActivity, HourlyActivitySet};
use crate::libs::config::Config;
use crate::libs::error::Result as ActivityResult;
use crate::libs::formatter::Unit;
use crate::libs::messages::Message;
use crate::libs::record::{DurationRecord, SliceBy};
use crate::libs::zone::Zone;
use crate::{msg_error, with_zone};
use anyhow::Result;
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Break one person's duration records down by hour of day")]
    Hourly(hourly::HourlyArgs),
    #[command(about = "Combine the hourly breakdowns of several people", arg_required_else_help = true)]
    Team(team::TeamArgs),
    #[command(about = "Configuration initialization")]
    Init,
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Hourly(args) => hourly::cmd(args),
            Commands::Team(args) => team::cmd(args),
            Commands::Init => init::cmd(),
        }
    }
}

/// How results are written out.
#[derive(ValueEnum, Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
    Csv,
}

/// Flags shared by the reporting commands. Unset flags fall back to the
/// configuration file.
#[derive(Debug, Args, Clone, Default)]
pub struct PipelineArgs {
    #[arg(long, value_enum, help = "Unit for reported values")]
    pub unit: Option<Unit>,
    #[arg(long, help = "Record field to group by (category, project, language, ...)")]
    pub slice_by: Option<SliceBy>,
    #[arg(long = "tz", help = "Time zone for hour of day: local, utc or an IANA name")]
    pub timezone: Option<Zone>,
    #[arg(long, value_enum, help = "Treatment of negative durations")]
    pub negative: Option<NegativeDurationPolicy>,
    #[arg(long, help = "Keep a separate breakdown per calendar day")]
    pub by_day: bool,
    #[arg(long, value_enum, default_value_t = OutputFormat::Table, help = "Output format")]
    pub format: OutputFormat,
    #[arg(long, short, help = "Write JSON or CSV output to this file instead of stdout")]
    pub output: Option<PathBuf>,
}

/// Effective settings after merging flags over configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub zone: Zone,
    pub options: AllocationOptions,
    pub unit: Unit,
}

impl PipelineArgs {
    pub fn resolve(&self, config: &Config) -> Settings {
        let allocation = config.allocation_or_default();
        let display = config.display_or_default();

        let mut options = allocation.options();
        if let Some(slice_by) = &self.slice_by {
            options.slice_by = slice_by.clone();
        }
        if let Some(policy) = self.negative {
            options.negative_durations = policy;
        }

        Settings {
            zone: self.timezone.unwrap_or(allocation.timezone),
            options,
            unit: self.unit.unwrap_or(display.unit),
        }
    }
}

impl Settings {
    pub fn allocate(&self, records: &[DurationRecord]) -> ActivityResult<HourlyActivitySet> {
        with_zone!(self.zone, |tz| Allocator::new(tz)
            .with_options(self.options.clone())
            .allocate(records))
    }

    pub fn allocate_by_day(&self, records: &[DurationRecord]) -> ActivityResult<DailyActivity> {
        with_zone!(self.zone, |tz| Allocator::new(tz)
            .with_options(self.options.clone())
            .allocate_by_day(records))
    }
}

/// Reads the configuration, reporting but tolerating a broken file.
fn read_config() -> Config {
    Config::read().unwrap_or_else(|e| {
        msg_error!(Message::ConfigReadFailed(e.to_string()));
        Config::default()
    })
}
