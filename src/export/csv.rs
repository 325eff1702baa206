use crate::errors::AppResult;
use crate::models::{Columns, Record};
use csv::Writer;
use std::path::Path;

/// Scrive un time sheet (es. generato da `sample`) nel file indicato,
/// con i nomi di colonna configurati.
pub fn write_records_csv(path: &Path, columns: &Columns, records: &[Record]) -> AppResult<()> {
    let mut wtr = Writer::from_path(path)?;

    wtr.write_record([&columns.date, &columns.id, &columns.duration])?;

    for r in records {
        wtr.write_record(&[
            r.timestamp().to_string(),
            r.person_id().to_string(),
            format!("{:.1}", r.duration()),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}
