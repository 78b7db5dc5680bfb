//! Raw activity duration records as delivered by a time-tracking service.
//!
//! A record is one logged interval: when it started (unix seconds, fractional
//! allowed), how long it lasted, and what it was about. The shape follows the
//! durations endpoint of the upstream service verbatim:
//!
//! ```json
//! { "time": 1741510800.5, "duration": 1200, "category": "coding", "project": "api" }
//! ```
//!
//! Fields other than `time`, `duration`, `category` and `project` are kept in
//! an open map. They play no part in allocation unless a [`SliceBy::Field`]
//! selects one of them as the bucket key.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use std::str::FromStr;

/// Label used when a record has no usable value for the slice key.
pub const UNCATEGORIZED: &str = "uncategorized";

/// One logged interval of activity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DurationRecord {
    /// Start instant in unix seconds.
    pub time: f64,
    /// Length of the interval in seconds.
    pub duration: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project: Option<String>,
    /// Any further keyed fields (language, editor, machine, ...).
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl DurationRecord {
    pub fn new(time: f64, duration: f64, category: impl Into<String>) -> Self {
        Self {
            time,
            duration,
            category: Some(category.into()),
            project: None,
            extra: Map::new(),
        }
    }

    /// A record with no category at all.
    pub fn uncategorized(time: f64, duration: f64) -> Self {
        Self {
            time,
            duration,
            category: None,
            project: None,
            extra: Map::new(),
        }
    }

    pub fn with_project(mut self, project: impl Into<String>) -> Self {
        self.project = Some(project.into());
        self
    }

    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(name.into(), value.into());
        self
    }

    /// End instant in unix seconds.
    pub fn end(&self) -> f64 {
        self.time + self.duration
    }

    /// Category label with the sentinel substituted for missing values.
    pub fn category(&self) -> &str {
        match self.category.as_deref() {
            Some(category) if !category.is_empty() => category,
            _ => UNCATEGORIZED,
        }
    }

    /// Bucket key for this record under the given slicing.
    ///
    /// Missing, null or empty values map to [`UNCATEGORIZED`] so the record's
    /// seconds are never dropped.
    pub fn slice_key(&self, slice_by: &SliceBy) -> String {
        let value = match slice_by {
            SliceBy::Category => return self.category().to_string(),
            SliceBy::Project => self.project.clone(),
            SliceBy::Field(name) => self.extra.get(name).and_then(field_text),
        };

        match value {
            Some(value) if !value.is_empty() => value,
            _ => UNCATEGORIZED.to_string(),
        }
    }
}

fn field_text(value: &Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text.clone()),
        Value::Number(number) => Some(number.to_string()),
        Value::Bool(flag) => Some(flag.to_string()),
        _ => None,
    }
}

/// Record field whose value labels the hour bucket entries.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SliceBy {
    #[default]
    Category,
    Project,
    /// Any other field found in the record's extra map.
    Field(String),
}

impl From<String> for SliceBy {
    fn from(name: String) -> Self {
        match name.as_str() {
            "category" => SliceBy::Category,
            "project" => SliceBy::Project,
            _ => SliceBy::Field(name),
        }
    }
}

impl From<SliceBy> for String {
    fn from(slice_by: SliceBy) -> Self {
        slice_by.to_string()
    }
}

impl FromStr for SliceBy {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(SliceBy::from(s.trim().to_string()))
    }
}

impl fmt::Display for SliceBy {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SliceBy::Category => write!(f, "category"),
            SliceBy::Project => write!(f, "project"),
            SliceBy::Field(name) => write!(f, "{}", name),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RecordsPayload {
    Envelope { data: Vec<DurationRecord> },
    Bare(Vec<DurationRecord>),
}

/// Parses a JSON payload of duration records.
///
/// Accepts either a bare array of records or the `{ "data": [...] }`
/// envelope returned by the durations API.
pub fn parse_records(json: &str) -> serde_json::Result<Vec<DurationRecord>> {
    let records = match serde_json::from_str::<RecordsPayload>(json)? {
        RecordsPayload::Envelope { data } => data,
        RecordsPayload::Bare(records) => records,
    };
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_category_falls_back_to_sentinel() {
        let record = DurationRecord::new(0.0, 10.0, "");
        assert_eq!(record.category(), UNCATEGORIZED);
        assert_eq!(record.slice_key(&SliceBy::Category), UNCATEGORIZED);
    }

    #[test]
    fn numeric_extra_field_is_stringified() {
        let record = DurationRecord::new(0.0, 10.0, "coding").with_field("lineno", 42);
        assert_eq!(record.slice_key(&SliceBy::Field("lineno".into())), "42");
    }

    #[test]
    fn slice_by_round_trips_through_strings() {
        assert_eq!("category".parse::<SliceBy>().unwrap(), SliceBy::Category);
        assert_eq!("project".parse::<SliceBy>().unwrap(), SliceBy::Project);
        assert_eq!(
            "language".parse::<SliceBy>().unwrap(),
            SliceBy::Field("language".to_string())
        );
        assert_eq!(SliceBy::Field("editor".into()).to_string(), "editor");
    }
}
