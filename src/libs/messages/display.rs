//! Display implementation for hourmap messages.
//!
//! All user-facing text lives in one `match`, so wording stays consistent
//! and every variant has to be given text explicitly.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let s = match self {
            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigReadFailed(err) => format!("Failed to read configuration: {}", err),
            Message::ConfigModuleAllocation => "Allocation".to_string(),
            Message::ConfigModuleDisplay => "Display".to_string(),

            // === INPUT MESSAGES ===
            Message::RecordsLoaded { source, count } => format!("Loaded {} records from {}", count, source),
            Message::RecordsParseFailed(source) => format!("Failed to parse duration records from {}", source),
            Message::InputReadFailed(source) => format!("Failed to read input from {}", source),
            Message::NoInputFiles => "At least one input file is required".to_string(),

            // === ALLOCATION MESSAGES ===
            Message::AllocationFailed(source) => format!("Records from {} were rejected", source),
            Message::NoActivity => "No activity recorded".to_string(),

            // === REPORT MESSAGES ===
            Message::HourlyHeader { zone, unit } => format!("Hourly activity ({}, {})", zone, unit),
            Message::TeamHeader(count) => format!("Team hourly activity for {} members", count),
            Message::DayHeader(date) => format!("Activity on {}", date),
            Message::TotalTime(duration) => format!("Total time: {}", duration),
            Message::MostActiveCategory { name, duration } => format!("Most active category: {} ({})", name, duration),
            Message::MostActiveHour { hour, duration } => {
                format!("Most active hour: {:02}:00-{:02}:00 ({})", hour, (hour + 1) % 24, duration)
            }
            Message::NoMostActive => "No most active category or hour".to_string(),

            // === EXPORT MESSAGES ===
            Message::ExportWritten(path) => format!("Export written to {}", path),

            // === PROMPTS ===
            Message::PromptSelectModules => "Select modules to configure".to_string(),
            Message::PromptSliceBy => "Record field to group by (category, project, language, ...)".to_string(),
            Message::PromptTimezone => "Time zone for hour of day (local, utc or IANA name)".to_string(),
            Message::PromptNegativePolicy => "Negative durations".to_string(),
            Message::PromptUnit => "Display unit".to_string(),
        };
        write!(f, "{}", s)
    }
}
