use crate::errors::{AppError, AppResult};
use crate::utils::date::from_timestamp_in;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::debug;

/// Names of the three logical input columns. Any other column is ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Columns {
    #[serde(default = "default_date_col")]
    pub date: String,
    #[serde(default = "default_duration_col")]
    pub duration: String,
    #[serde(default = "default_id_col")]
    pub id: String,
}

fn default_date_col() -> String {
    "date".to_string()
}
fn default_duration_col() -> String {
    "duration".to_string()
}
fn default_id_col() -> String {
    "id".to_string()
}

impl Default for Columns {
    fn default() -> Self {
        Self {
            date: default_date_col(),
            duration: default_duration_col(),
            id: default_id_col(),
        }
    }
}

/// One logged working slot: at `timestamp`, `person_id` worked `duration` hours.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Record {
    timestamp: i64,
    person_id: String,
    duration: f64,
}

impl Record {
    /// Validated constructor. Errors carry line 0 (no source file).
    pub fn new(timestamp: i64, person_id: impl Into<String>, duration: f64) -> AppResult<Self> {
        Self::checked(timestamp, person_id.into(), duration)
            .map_err(|reason| AppError::MalformedRecord { line: 0, reason })
    }

    fn checked(timestamp: i64, person_id: String, duration: f64) -> Result<Self, String> {
        if from_timestamp_in(timestamp, &Utc).is_none() {
            return Err(format!("timestamp {timestamp} out of range"));
        }
        if !duration.is_finite() || duration < 0.0 {
            return Err(format!("duration must be a non-negative number, got {duration}"));
        }

        let person_id = person_id.trim().to_string();
        if person_id.is_empty() {
            return Err("empty person id".to_string());
        }

        Ok(Self {
            timestamp,
            person_id,
            duration,
        })
    }

    pub fn timestamp(&self) -> i64 {
        self.timestamp
    }

    pub fn person_id(&self) -> &str {
        &self.person_id
    }

    /// Hours worked, always finite and non-negative.
    pub fn duration(&self) -> f64 {
        self.duration
    }
}

/// Positions of the configured columns inside a concrete header row.
struct ColumnIndex {
    date: usize,
    duration: usize,
    id: usize,
}

impl ColumnIndex {
    fn resolve(headers: &csv::StringRecord, columns: &Columns) -> AppResult<Self> {
        let find = |name: &str| {
            headers
                .iter()
                .position(|h| h == name)
                .ok_or_else(|| AppError::MissingColumn(name.to_string()))
        };

        Ok(Self {
            date: find(&columns.date)?,
            duration: find(&columns.duration)?,
            id: find(&columns.id)?,
        })
    }
}

/// The loaded time sheet. Never mutated after construction.
#[derive(Debug, Clone)]
pub struct RecordSet {
    records: Vec<Record>,
    columns: Columns,
}

impl RecordSet {
    pub fn new(records: Vec<Record>, columns: Columns) -> Self {
        Self { records, columns }
    }

    pub fn from_path(path: &Path, columns: &Columns) -> AppResult<Self> {
        debug!("Reading time sheet from {}", path.display());
        let file = File::open(path)?;
        Self::from_reader(file, columns)
    }

    /// Parse a CSV table with a header row. Columns are matched by name,
    /// so their order does not matter; fields are trimmed. Rows shorter
    /// than the header are reported as malformed on their own line.
    pub fn from_reader<R: Read>(reader: R, columns: &Columns) -> AppResult<Self> {
        let mut rdr = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(reader);

        let index = ColumnIndex::resolve(rdr.headers()?, columns)?;
        let mut records = Vec::new();

        for row in rdr.records() {
            let row = row?;
            let line = row.position().map(|p| p.line()).unwrap_or(0);
            let malformed = |reason: String| AppError::MalformedRecord { line, reason };

            let field = |i: usize, name: &str| {
                row.get(i)
                    .ok_or_else(|| malformed(format!("missing field '{name}'")))
            };

            let raw_date = field(index.date, &columns.date)?;
            let timestamp: i64 = raw_date
                .parse()
                .map_err(|_| malformed(format!("invalid timestamp '{raw_date}'")))?;

            let raw_duration = field(index.duration, &columns.duration)?;
            let duration: f64 = raw_duration
                .parse()
                .map_err(|_| malformed(format!("invalid duration '{raw_duration}'")))?;

            let person_id = field(index.id, &columns.id)?;

            let record = Record::checked(timestamp, person_id.to_string(), duration)
                .map_err(malformed)?;
            records.push(record);
        }

        debug!("Loaded {} records", records.len());
        Ok(Self::new(records, columns.clone()))
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn columns(&self) -> &Columns {
        &self.columns
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Distinct person ids across the whole table.
    pub fn person_count(&self) -> usize {
        self.records
            .iter()
            .map(Record::person_id)
            .collect::<BTreeSet<_>>()
            .len()
    }
}
