//! Unified application error type.
//! Core (contracts, aggregation), config, export and cli all return
//! AppError so a failed run surfaces as one diagnostic line.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO / serialization
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // ---------------------------
    // Contracts
    // ---------------------------
    #[error("Invalid contract range: start ({start}) must be before end ({end})")]
    InvalidContractRange { start: i64, end: i64 },

    #[error("Overlapping contracts: #{first} and #{second} cover a common timestamp")]
    OverlappingContracts { first: usize, second: usize },

    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    // ---------------------------
    // Input table
    // ---------------------------
    #[error("No valid entries found: the input contains no persons")]
    EmptyInput,

    #[error("Malformed record at line {line}: {reason}")]
    MalformedRecord { line: u64, reason: String },

    #[error("Missing column '{0}' in input header")]
    MissingColumn(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration: {0}")]
    ConfigLoad(String),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),
}

pub type AppResult<T> = Result<T, AppError>;
