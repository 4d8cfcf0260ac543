//! Run log bootstrap: create a missing log and upgrade logs written before
//! the Notes column existed.

use super::HEADER;
use crate::errors::{AppError, AppResult};
use std::fs;
use std::path::Path;

/// Make sure `path` exists and carries the full header.
pub fn ensure_log_file(path: &Path) -> AppResult<()> {
    if !path.exists() {
        create_log_file(path)?;
        return Ok(());
    }

    ensure_notes_column(path)?;
    Ok(())
}

fn create_log_file(path: &Path) -> AppResult<()> {
    if let Some(dir) = path.parent()
        && !dir.as_os_str().is_empty()
    {
        fs::create_dir_all(dir)?;
    }

    let mut wtr = csv::Writer::from_path(path)?;
    wtr.write_record(HEADER)?;
    wtr.flush()?;

    tracing::info!(path = %path.display(), "Created run log");
    Ok(())
}

/// Rewrite the log with an empty Notes value per row when the column is
/// missing.
///   Returns:
///   Ok(true)  → log rewritten
///   Ok(false) → no change needed
pub fn ensure_notes_column(path: &Path) -> AppResult<bool> {
    if fs::metadata(path)?.len() == 0 {
        // empty file: write the header so later appends have something to hang on
        create_log_file(path)?;
        return Ok(true);
    }

    let mut rdr = csv::ReaderBuilder::new().flexible(true).from_path(path)?;
    let headers = rdr.headers()?.clone();

    if headers.iter().any(|h| h.trim() == HEADER[3]) {
        return Ok(false);
    }

    let legacy: Vec<&str> = HEADER[..3].to_vec();
    for col in &legacy {
        if !headers.iter().any(|h| h.trim() == *col) {
            return Err(AppError::Migration(format!(
                "{}: expected a '{col}' column, found {:?}",
                path.display(),
                headers.iter().collect::<Vec<_>>()
            )));
        }
    }

    let mut records = Vec::new();
    for rec in rdr.records() {
        let mut rec = rec?;
        rec.push_field("");
        records.push(rec);
    }

    let tmp = path.with_extension("csv.migrating");
    {
        let mut wtr = csv::WriterBuilder::new().flexible(true).from_path(&tmp)?;
        let mut header = headers.clone();
        header.push_field(HEADER[3]);
        wtr.write_record(&header)?;
        for rec in &records {
            wtr.write_record(rec)?;
        }
        wtr.flush()?;
    }
    fs::rename(&tmp, path)?;

    tracing::info!(
        path = %path.display(),
        rows = records.len(),
        "Added Notes column to run log"
    );
    Ok(true)
}
