use crate::errors::{AppError, AppResult};
use crate::utils::date::iso_to_timestamp;
use serde::Serialize;

/// A contract period: every tracked person owes `quota` hours in total
/// between `start` and `end` (both POSIX timestamps, both inclusive).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Contract {
    start: i64,
    end: i64,
    quota: f64,
}

impl Contract {
    pub fn new(start: i64, end: i64, quota: f64) -> AppResult<Self> {
        if start >= end {
            return Err(AppError::InvalidContractRange { start, end });
        }

        Ok(Self { start, end, quota })
    }

    /// Build a contract from local ISO datetimes, e.g. `2020-09-01 00:00:00`.
    pub fn from_iso(start: &str, end: &str, quota: f64) -> AppResult<Self> {
        Self::new(iso_to_timestamp(start)?, iso_to_timestamp(end)?, quota)
    }

    pub fn start(&self) -> i64 {
        self.start
    }

    pub fn end(&self) -> i64 {
        self.end
    }

    pub fn quota(&self) -> f64 {
        self.quota
    }

    /// `true` iff `start <= timestamp <= end`.
    pub fn covers(&self, timestamp: i64) -> bool {
        self.start <= timestamp && timestamp <= self.end
    }

    /// Two closed intervals share at least one timestamp.
    pub fn overlaps(&self, other: &Contract) -> bool {
        self.start <= other.end && other.start <= self.end
    }
}
