use crate::libs::messages::Message;
use crate::libs::record::{parse_records, DurationRecord};
use crate::msg_debug;
use anyhow::{Context, Result};
use std::fmt;
use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

/// Where a batch of duration records comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    Stdin,
    File(PathBuf),
}

impl From<Option<PathBuf>> for Source {
    fn from(path: Option<PathBuf>) -> Self {
        match path {
            Some(path) if path.as_os_str() != "-" => Source::File(path),
            _ => Source::Stdin,
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Source::Stdin => write!(f, "stdin"),
            Source::File(path) => write!(f, "{}", path.display()),
        }
    }
}

impl Source {
    /// Reads and parses every record of the source.
    pub fn load(&self) -> Result<Vec<DurationRecord>> {
        let json = match self {
            Source::Stdin => {
                let mut buffer = String::new();
                io::stdin()
                    .read_to_string(&mut buffer)
                    .with_context(|| Message::InputReadFailed(self.to_string()))?;
                buffer
            }
            Source::File(path) => {
                fs::read_to_string(path).with_context(|| Message::InputReadFailed(self.to_string()))?
            }
        };

        let records = parse_records(&json).with_context(|| Message::RecordsParseFailed(self.to_string()))?;
        msg_debug!(Message::RecordsLoaded {
            source: self.to_string(),
            count: records.len(),
        });
        Ok(records)
    }
}
