// src/export/mod.rs

mod csv;
mod fs_utils;
mod json_csv;
pub mod logic;
mod model;
pub mod pdf;
mod pdf_export;

pub use self::csv::write_records_csv;
pub use logic::ExportLogic;
pub use model::{Cell, TableExport};
pub(crate) use fs_utils::ensure_writable;

use crate::ui::messages::success;
use clap::ValueEnum;
use std::path::Path;

/// Helper comune per messaggi di completamento export.
pub(crate) fn notify_export_success(label: &str, path: &Path) {
    success(format!("{label} export completed: {}", path.display()));
}

/// Formats of the `dump` command.
#[derive(Clone, Copy, Debug, PartialEq, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }
}
