use super::{OutputFormat, PipelineArgs, Settings};
use crate::libs::activity::{DailyActivity, HourlyActivitySet};
use crate::libs::export::{ExportFormat, Exporter};
use crate::libs::formatter::{format_seconds, to_unit};
use crate::libs::messages::Message;
use crate::libs::summary::most_active;
use crate::libs::view::View;
use crate::{msg_print, msg_success};
use anyhow::Result;

/// Prints or exports a single hour-of-day set given in seconds.
pub fn hourly(set: &HourlyActivitySet, settings: &Settings, args: &PipelineArgs, header: Message) -> Result<()> {
    let converted = to_unit(set, settings.unit);
    match exporter(args) {
        Some(exporter) => {
            exporter.export_hourly(&converted)?;
            report_written(&exporter);
        }
        None => {
            msg_print!(header, true);
            table(set, &converted, settings);
        }
    }
    Ok(())
}

/// Prints or exports one set per calendar date.
pub fn daily(days: &DailyActivity, settings: &Settings, args: &PipelineArgs, header: Message) -> Result<()> {
    match exporter(args) {
        Some(exporter) => {
            let converted: DailyActivity = days
                .iter()
                .map(|(date, set)| (*date, to_unit(set, settings.unit)))
                .collect();
            exporter.export_daily(&converted)?;
            report_written(&exporter);
        }
        None => {
            msg_print!(header, true);
            if days.is_empty() {
                msg_print!(Message::NoActivity);
            }
            for (date, set) in days {
                msg_print!(Message::DayHeader(date.format("%A, %Y-%m-%d").to_string()), true);
                table(set, &to_unit(set, settings.unit), settings);
            }
        }
    }
    Ok(())
}

fn table(set: &HourlyActivitySet, converted: &HourlyActivitySet, settings: &Settings) {
    View::hourly(converted, settings.unit);
    if !set.is_empty() {
        msg_print!(Message::TotalTime(format_seconds(set.total_seconds())));
        View::most_active(&most_active(set));
    }
}

fn exporter(args: &PipelineArgs) -> Option<Exporter> {
    let format = match args.format {
        OutputFormat::Table => return None,
        OutputFormat::Json => ExportFormat::Json,
        OutputFormat::Csv => ExportFormat::Csv,
    };
    Some(Exporter::new(format, args.output.clone()))
}

fn report_written(exporter: &Exporter) {
    if let Some(path) = exporter.output_path() {
        msg_success!(Message::ExportWritten(path.display().to_string()));
    }
}
