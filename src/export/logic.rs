// src/export/logic.rs

use crate::core::logic::Analysis;
use crate::errors::AppResult;
use crate::export::ExportFormat;
use crate::export::fs_utils::{ensure_dir, ensure_writable};
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::TableExport;
use crate::export::pdf_export::export_pdf;
use crate::ui::messages::{info, warning};
use crate::utils::path::output_file;
use std::path::{Path, PathBuf};

/// File stems of the `dump` command.
pub const AVG_TIME_STEM: &str = "avg_time";
pub const OVER_QUOTA_STEM: &str = "over_quota";

/// Logica di alto livello per l'export delle due tabelle.
pub struct ExportLogic;

impl ExportLogic {
    /// Two-page PDF report at `file`.
    pub fn pdf(analysis: &Analysis, file: &Path, force: bool) -> AppResult<()> {
        ensure_writable(file, force)?;
        if let Some(dir) = file.parent() {
            ensure_dir(dir)?;
        }

        info(format!("Exporting to PDF: {}", file.display()));

        let cfg = &analysis.config;
        let overtime = TableExport::overtime(&analysis.report.overtime, &cfg.output);
        if overtime.rows.is_empty() {
            warning("No overtime found.");
        }

        export_pdf(&analysis.report.average, &overtime, &cfg.plot, file)
    }

    /// Write `avg_time.<ext>` and `over_quota.<ext>` into `dir`.
    ///
    /// Both targets are checked before either is written.
    pub fn dump(
        analysis: &Analysis,
        dir: &Path,
        format: ExportFormat,
        force: bool,
    ) -> AppResult<(PathBuf, PathBuf)> {
        let avg_path = output_file(dir, AVG_TIME_STEM, format.as_str());
        let over_path = output_file(dir, OVER_QUOTA_STEM, format.as_str());

        ensure_dir(dir)?;
        ensure_writable(&avg_path, force)?;
        ensure_writable(&over_path, force)?;

        let cfg = &analysis.config;
        let average = TableExport::average_time(&analysis.report.average, &cfg.output);
        let overtime = TableExport::overtime(&analysis.report.overtime, &cfg.output);

        match format {
            ExportFormat::Csv => {
                export_csv(&average, &avg_path)?;
                export_csv(&overtime, &over_path)?;
            }
            ExportFormat::Json => {
                export_json(&average, &avg_path)?;
                export_json(&overtime, &over_path)?;
            }
        }

        Ok((avg_path, over_path))
    }
}
