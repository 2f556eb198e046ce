// src/report/table.rs
//
// A loaded artifact: headers + string rows, with column lookup by name.
// Values stay as text; numeric columns are parsed on access.

use std::path::Path;

use csv::ReaderBuilder;
use tracing::{debug, warn};

use crate::config::consts::INDEX_HEADERS;
use crate::core::sanitize::strip_thousands;
use crate::error::SchemaError;

#[derive(Clone, Debug, PartialEq)]
pub struct Table {
    pub name: &'static str,
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(name: &'static str, headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self { name, headers, rows }
    }

    /// Load a comma-separated artifact with a header line.
    pub fn load(name: &'static str, path: &Path) -> Result<Self, SchemaError> {
        let load_err = |source| SchemaError::Load { artifact: name, path: path.to_path_buf(), source };

        let mut reader = ReaderBuilder::new()
            .flexible(true)
            .from_path(path)
            .map_err(load_err)?;
        let headers = reader
            .headers()
            .map_err(load_err)?
            .iter()
            .map(|h| s!(h.trim()))
            .collect();

        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record.map_err(load_err)?;
            rows.push(record.iter().map(|c| s!(c)).collect());
        }

        debug!(artifact = name, path = %path.display(), rows = rows.len(), "artifact loaded");
        Ok(Self { name, headers, rows })
    }

    pub fn len(&self) -> usize { self.rows.len() }
    pub fn is_empty(&self) -> bool { self.rows.is_empty() }

    pub fn has_column(&self, column: &str) -> bool {
        self.headers.iter().any(|h| h == column)
    }

    pub fn column(&self, column: &str) -> Result<usize, SchemaError> {
        self.headers
            .iter()
            .position(|h| h == column)
            .ok_or_else(|| SchemaError::MissingColumn { artifact: self.name, column: s!(column) })
    }

    /// Fail on the first absent column.
    pub fn require(&self, columns: &[&str]) -> Result<(), SchemaError> {
        for c in columns {
            self.column(c)?;
        }
        Ok(())
    }

    /// Cell text; short rows read as empty.
    pub fn text(&self, row: usize, col: usize) -> &str {
        self.rows
            .get(row)
            .and_then(|r| r.get(col))
            .map(|s| s.trim())
            .unwrap_or("")
    }

    /// Numeric cell. Empty and `nan` cells are `None`; thousands separators are tolerated.
    pub fn number(&self, row: usize, col: usize) -> Result<Option<f64>, SchemaError> {
        let raw = self.text(row, col);
        if raw.is_empty() || raw.eq_ignore_ascii_case("nan") {
            return Ok(None);
        }
        strip_thousands(raw)
            .parse::<f64>()
            .map(Some)
            .map_err(|_| SchemaError::NotNumeric {
                artifact: self.name,
                column: self.headers.get(col).cloned().unwrap_or_default(),
                row,
                value: s!(raw),
            })
    }

    /// All values of a numeric column, `None` for missing cells.
    pub fn numbers(&self, column: &str) -> Result<Vec<Option<f64>>, SchemaError> {
        let col = self.column(column)?;
        (0..self.rows.len()).map(|r| self.number(r, col)).collect()
    }

    /// All values of a text column.
    pub fn texts(&self, column: &str) -> Result<Vec<String>, SchemaError> {
        let col = self.column(column)?;
        Ok((0..self.rows.len()).map(|r| s!(self.text(r, col))).collect())
    }

    /// Drop a leading column that is just a written-out row index
    /// (empty header or `Unnamed: 0`).
    pub fn drop_index_columns(&mut self) {
        let Some(first) = self.headers.first() else { return };
        if !INDEX_HEADERS.contains(&first.as_str()) {
            return;
        }
        debug!(artifact = self.name, header = %first, "dropping index column");
        self.headers.remove(0);
        for row in &mut self.rows {
            if !row.is_empty() {
                row.remove(0);
            }
        }
    }

    /// If `column` is absent, insert it first, filled with each row's position.
    pub fn ensure_row_index_column(&mut self, column: &str) {
        if self.has_column(column) {
            return;
        }
        warn!(artifact = self.name, column, "column missing; using row position");
        self.headers.insert(0, s!(column));
        for (i, row) in self.rows.iter_mut().enumerate() {
            row.insert(0, i.to_string());
        }
    }
}
