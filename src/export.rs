//! CSV serialization of record sets. Export works on an already-fetched
//! slice so the caller controls which snapshot gets written (typically the
//! full current set).

use std::path::Path;

use crate::error::Result;
use crate::models::BookRecord;

/// Fixed header row written before any record.
const HEADER: [&str; 4] = ["ID", "Title", "Category", "Year"];

/// Write `records` to `destination` as UTF-8 CSV, overwriting whatever is
/// there. Rows appear in slice order beneath the fixed four-column header.
/// If writing fails midway, the partial file is left behind and the caller
/// should retry the whole export.
pub fn export_csv<P: AsRef<Path>>(records: &[BookRecord], destination: P) -> Result<()> {
    let mut writer = csv::Writer::from_path(destination)?;

    writer.write_record(HEADER)?;
    for record in records {
        writer.write_record([
            record.id.to_string(),
            record.title.clone(),
            record.category.clone(),
            record.year.to_string(),
        ])?;
    }

    writer.flush().map_err(csv::Error::from)?;
    Ok(())
}
