//! Export of hour bucket sets to JSON and CSV.
//!
//! JSON output is the serialized set itself: 24 entries of
//! `{ hour, categories, total }`, directly consumable by charting code.
//! Per-day exports wrap the sets in an object keyed by date.
//!
//! CSV output uses a long layout, one row per non-empty (hour, category)
//! cell, which spreadsheets pivot easily:
//!
//! ```text
//! date,hour,category,value,hour_total
//! 2025-03-09,10,coding,20.0,25.0
//! ```
//!
//! Output goes to a file when a path is given and to stdout otherwise.

use super::activity::{DailyActivity, HourlyActivitySet};
use anyhow::{Context, Result};
use serde::Serialize;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

/// Machine-readable export formats.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExportFormat {
    Json,
    Csv,
}

#[derive(Debug, Serialize)]
struct CsvRow<'a> {
    date: Option<String>,
    hour: usize,
    category: &'a str,
    value: f64,
    hour_total: f64,
}

/// Writes activity sets in one format to one destination.
#[derive(Debug, Clone)]
pub struct Exporter {
    format: ExportFormat,
    output_path: Option<PathBuf>,
}

impl Exporter {
    pub fn new(format: ExportFormat, output_path: Option<PathBuf>) -> Self {
        Self { format, output_path }
    }

    pub fn output_path(&self) -> Option<&PathBuf> {
        self.output_path.as_ref()
    }

    /// Exports a single hour-of-day set.
    pub fn export_hourly(&self, set: &HourlyActivitySet) -> Result<()> {
        let mut sink = self.sink()?;
        match self.format {
            ExportFormat::Json => {
                serde_json::to_writer_pretty(&mut sink, set)?;
                writeln!(sink)?;
            }
            ExportFormat::Csv => {
                let mut wtr = csv::Writer::from_writer(&mut sink);
                for row in csv_rows(None, set) {
                    wtr.serialize(row)?;
                }
                wtr.flush()?;
            }
        }
        sink.flush()?;
        Ok(())
    }

    /// Exports one set per calendar date.
    pub fn export_daily(&self, days: &DailyActivity) -> Result<()> {
        let mut sink = self.sink()?;
        match self.format {
            ExportFormat::Json => {
                serde_json::to_writer_pretty(&mut sink, days)?;
                writeln!(sink)?;
            }
            ExportFormat::Csv => {
                let mut wtr = csv::Writer::from_writer(&mut sink);
                for (date, set) in days {
                    for row in csv_rows(Some(date.to_string()), set) {
                        wtr.serialize(row)?;
                    }
                }
                wtr.flush()?;
            }
        }
        sink.flush()?;
        Ok(())
    }

    fn sink(&self) -> Result<Box<dyn Write>> {
        match &self.output_path {
            Some(path) => {
                let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
                Ok(Box::new(BufWriter::new(file)))
            }
            None => Ok(Box::new(io::stdout().lock())),
        }
    }
}

fn csv_rows(date: Option<String>, set: &HourlyActivitySet) -> Vec<CsvRow<'_>> {
    set.iter()
        .flat_map(|bucket| {
            let hour_total = bucket.total.unwrap_or_else(|| bucket.sum());
            let date = date.clone();
            bucket.category_totals.iter().map(move |(category, value)| CsvRow {
                date: date.clone(),
                hour: bucket.hour,
                category,
                value: *value,
                hour_total,
            })
        })
        .collect()
}
