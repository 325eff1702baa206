// src/export/model.rs

use crate::config::OutputColumns;
use crate::models::{AverageRow, OvertimeRow};
use crate::utils::format_hours;
use serde_json::{Map, Value};

/// Una cella della tabella: testo oppure ore (stampate con un decimale).
#[derive(Clone, Debug, PartialEq)]
pub enum Cell {
    Text(String),
    Hours(f64),
}

impl Cell {
    pub fn to_text(&self) -> String {
        match self {
            Cell::Text(s) => s.clone(),
            Cell::Hours(h) => format_hours(*h),
        }
    }

    pub fn to_json(&self) -> Value {
        match self {
            Cell::Text(s) => Value::String(s.clone()),
            Cell::Hours(h) => serde_json::Number::from_f64(*h)
                .map(Value::Number)
                .unwrap_or(Value::Null),
        }
    }
}

/// A derived table with the configured column names, ready for any writer.
#[derive(Clone, Debug)]
pub struct TableExport {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<Cell>>,
}

impl TableExport {
    pub fn average_time(rows: &[AverageRow], names: &OutputColumns) -> Self {
        Self {
            headers: vec![names.week.clone(), names.avg_time.clone()],
            rows: rows
                .iter()
                .map(|r| vec![Cell::Text(r.week_key.clone()), Cell::Hours(r.avg_hours)])
                .collect(),
        }
    }

    pub fn overtime(rows: &[OvertimeRow], names: &OutputColumns) -> Self {
        Self {
            headers: vec![
                names.person.clone(),
                names.actual.clone(),
                names.quota.clone(),
                names.overtime.clone(),
            ],
            rows: rows
                .iter()
                .map(|r| {
                    vec![
                        Cell::Text(r.person_id.clone()),
                        Cell::Hours(r.actual_hours),
                        Cell::Hours(r.quota_hours),
                        Cell::Hours(r.overtime_hours),
                    ]
                })
                .collect(),
        }
    }

    pub fn header_refs(&self) -> Vec<&str> {
        self.headers.iter().map(String::as_str).collect()
    }

    pub fn to_text_rows(&self) -> Vec<Vec<String>> {
        self.rows
            .iter()
            .map(|row| row.iter().map(Cell::to_text).collect())
            .collect()
    }

    /// One JSON object per row, keyed by column name.
    pub fn to_json(&self) -> Value {
        Value::Array(
            self.rows
                .iter()
                .map(|row| {
                    let obj: Map<String, Value> = self
                        .headers
                        .iter()
                        .cloned()
                        .zip(row.iter().map(Cell::to_json))
                        .collect();
                    Value::Object(obj)
                })
                .collect(),
        )
    }
}
