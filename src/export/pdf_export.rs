// src/export/pdf_export.rs

use crate::config::PlotConfig;
use crate::errors::{AppError, AppResult};
use crate::export::model::TableExport;
use crate::export::notify_export_success;
use crate::export::pdf::PdfManager;
use crate::models::AverageRow;
use std::path::Path;
use tracing::debug;

/// Report in due pagine: grafico delle medie settimanali, poi tabella
/// degli straordinari.
pub(crate) fn export_pdf(
    average: &[AverageRow],
    overtime: &TableExport,
    plot: &PlotConfig,
    path: &Path,
) -> AppResult<()> {
    let labels: Vec<String> = average.iter().map(|r| r.week_key.clone()).collect();
    let values: Vec<f64> = average.iter().map(|r| r.avg_hours).collect();

    let mut pdf = PdfManager::new();
    pdf.write_bar_chart(
        &plot.avg_time_title,
        &plot.avg_time_xlabel,
        &plot.avg_time_ylabel,
        &labels,
        &values,
    );
    pdf.write_table(
        &plot.overtime_title,
        &overtime.header_refs(),
        &overtime.to_text_rows(),
    );

    debug!("PDF report has {} pages", pdf.page_count());

    pdf.save(path)
        .map_err(|e| AppError::Export(format!("PDF export error: {e}")))?;

    notify_export_success("PDF", path);
    Ok(())
}
