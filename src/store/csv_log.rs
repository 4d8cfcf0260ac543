use super::HEADER;
use super::migrate::ensure_log_file;
use crate::errors::{AppError, AppResult};
use crate::models::{LogRow, NewRun};
use csv::StringRecord;
use std::fs::{File, OpenOptions};
use std::io::{Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

/// Append-only CSV run log.
///
/// Rows come back in file order and their `sequence` is their index in that
/// order. Callers sharing a store across threads must serialize access.
#[derive(Debug, Clone)]
pub struct RunStore {
    path: PathBuf,
}

/// Column positions resolved from the header row.
struct Columns {
    pokemon: usize,
    location: usize,
    date: usize,
    notes: Option<usize>,
}

impl Columns {
    fn resolve(headers: &StringRecord) -> AppResult<Self> {
        let find = |name: &str| headers.iter().position(|h| h.trim() == name);
        let required = |name: &str| {
            find(name).ok_or_else(|| AppError::Migration(format!("run log has no '{name}' column")))
        };

        Ok(Self {
            pokemon: required(HEADER[0])?,
            location: required(HEADER[1])?,
            date: required(HEADER[2])?,
            notes: find(HEADER[3]),
        })
    }
}

impl RunStore {
    /// Open the log at `path`, creating it (or adding the Notes column) first
    /// when needed.
    pub fn open(path: impl Into<PathBuf>) -> AppResult<Self> {
        let path = path.into();
        ensure_log_file(&path)?;
        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Every row, in insertion order.
    pub fn read_all(&self) -> AppResult<Vec<LogRow>> {
        let mut rdr = csv::ReaderBuilder::new()
            .flexible(true)
            .from_path(&self.path)?;

        let cols = Columns::resolve(rdr.headers()?)?;
        let mut rows = Vec::new();

        for (sequence, record) in rdr.records().enumerate() {
            let record = record?;
            let field = |i: usize| record.get(i).unwrap_or("").to_string();

            rows.push(LogRow::new(
                sequence,
                field(cols.pokemon),
                field(cols.location),
                field(cols.date),
                cols.notes.map(field).unwrap_or_default(),
            ));
        }

        Ok(rows)
    }

    /// Append one run and sync it to disk before returning.
    pub fn append(&self, run: &NewRun) -> AppResult<()> {
        let mut file = OpenOptions::new()
            .read(true)
            .append(true)
            .open(&self.path)?;

        // a hand-edited log may lack the trailing newline
        if !ends_with_newline(&mut file)? {
            file.write_all(b"\n")?;
        }

        let mut wtr = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(file);
        wtr.write_record(run.to_record())?;

        let file = wtr.into_inner().map_err(|e| AppError::Io(e.into_error()))?;
        file.sync_all()?;

        tracing::debug!(
            pokemon = %run.pokemon,
            location = %run.location,
            date = %run.date,
            "Run appended"
        );
        Ok(())
    }
}

fn ends_with_newline(file: &mut File) -> AppResult<bool> {
    let len = file.metadata()?.len();
    if len == 0 {
        return Ok(true);
    }

    let mut last = [0u8; 1];
    file.seek(SeekFrom::Start(len - 1))?;
    file.read_exact(&mut last)?;
    Ok(last[0] == b'\n')
}
