// src/export/json_csv.rs

use crate::errors::AppResult;
use crate::export::model::TableExport;
use crate::export::notify_export_success;
use std::fs::File;
use std::io::Write;
use std::path::Path;
use tracing::debug;

/// Export JSON pretty-printed: un oggetto per riga.
pub(crate) fn export_json(table: &TableExport, path: &Path) -> AppResult<()> {
    debug!("Writing {} rows as JSON to {}", table.rows.len(), path.display());

    let json_data = serde_json::to_string_pretty(&table.to_json())?;

    let mut file = File::create(path)?;
    file.write_all(json_data.as_bytes())?;
    file.write_all(b"\n")?;

    notify_export_success("JSON", path);
    Ok(())
}

/// Export CSV con header dai nomi di colonna configurati.
pub(crate) fn export_csv(table: &TableExport, path: &Path) -> AppResult<()> {
    debug!("Writing {} rows as CSV to {}", table.rows.len(), path.display());

    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record(&table.headers)?;
    for row in table.to_text_rows() {
        wtr.write_record(&row)?;
    }

    wtr.flush()?;

    notify_export_success("CSV", path);
    Ok(())
}
