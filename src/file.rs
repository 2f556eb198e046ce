// src/file.rs
//
// Flat-file output of extracted records (CSV/TSV through the `csv` crate),
// plus reading an earlier export back for the Receipts tab.

use std::{
    fs,
    path::{Path, PathBuf},
};

use csv::{ReaderBuilder, WriterBuilder};
use tracing::info;

use crate::config::consts::RECORD_HEADERS;
use crate::config::options::{ExportFormat, ExportOptions};
use crate::error::ExportError;
use crate::extract::SalesLineRecord;

/// Write records to the path `export` resolves to. Returns that path.
pub fn write_records(
    records: &[SalesLineRecord],
    export: &ExportOptions,
) -> Result<PathBuf, ExportError> {
    let path = export.out_path();
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }

    let writer = WriterBuilder::new()
        .delimiter(export.format.delim())
        .has_headers(false)
        .from_path(&path)?;
    write_all(writer, records, export.include_headers)?;

    info!(path = %path.display(), records = records.len(), "export written");
    Ok(path)
}

/// Same output as `write_records`, as a string (clipboard / preview).
pub fn records_to_string(
    records: &[SalesLineRecord],
    export: &ExportOptions,
) -> Result<String, ExportError> {
    let writer = WriterBuilder::new()
        .delimiter(export.format.delim())
        .has_headers(false)
        .from_writer(Vec::<u8>::new());
    let bytes = write_all(writer, records, export.include_headers)?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

fn write_all<W: std::io::Write>(
    mut writer: csv::Writer<W>,
    records: &[SalesLineRecord],
    include_headers: bool,
) -> Result<W, ExportError> {
    if include_headers {
        writer.write_record(RECORD_HEADERS)?;
    }
    for record in records {
        writer.write_record(record.to_row())?;
    }
    writer.flush()?;
    writer
        .into_inner()
        .map_err(|e| ExportError::Io(e.into_error()))
}

/// Read an export back. Without a header line, columns are taken by position.
pub fn read_records(
    path: &Path,
    format: ExportFormat,
    has_headers: bool,
) -> Result<Vec<SalesLineRecord>, ExportError> {
    let mut reader = ReaderBuilder::new()
        .delimiter(format.delim())
        .has_headers(has_headers)
        .from_path(path)?;
    let mut out = Vec::new();
    for row in reader.deserialize() {
        out.push(row?);
    }
    Ok(out)
}

pub fn ensure_directory(dir: &Path) -> Result<(), ExportError> {
    if dir.exists() && !dir.is_dir() {
        return Err(ExportError::NotADirectory(dir.to_path_buf()));
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}
