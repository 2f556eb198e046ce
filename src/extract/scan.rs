// src/extract/scan.rs
//
// Single pass over the rows of one report. Date and time printed once apply
// to every following row until replaced; a header row opens a line item and
// the next detail row closes it.

use std::path::Path;

use tracing::trace;

use crate::config::consts::*;
use crate::core::sanitize::strip_thousands;
use crate::error::ParseError;

use super::record::{LineHeader, SalesLineRecord};

pub struct ReceiptScan<'a> {
    path: &'a Path,
    current_date: Option<String>,
    current_time: Option<String>,
    current_entry: LineHeader,
}

impl<'a> ReceiptScan<'a> {
    /// `path` only labels errors.
    pub fn new(path: &'a Path) -> Self {
        Self {
            path,
            current_date: None,
            current_time: None,
            current_entry: LineHeader::default(),
        }
    }

    /// Consume one row; returns a record when the row completes a line item.
    pub fn feed(&mut self, row: usize, cells: &[String]) -> Result<Option<SalesLineRecord>, ParseError> {
        if let Some(date) = cells.iter().find(|c| c.contains(DATE_MARKER)) {
            self.current_date = Some(date.clone());
        }
        if let Some(time) = cells.iter().find(|c| TIME_MARKERS.iter().any(|m| c.contains(m))) {
            self.current_time = Some(time.clone());
        }

        if is_header_row(cells) {
            // Replaces any line item that never got its detail row.
            self.current_entry = LineHeader {
                date: self.current_date.clone(),
                time: self.current_time.clone(),
                receipt: Some(cells[COL_RECEIPT].clone()),
                stock_name: Some(cells[COL_STOCK_NAME].clone()),
                unit_price: cells.get(COL_UNIT_PRICE).cloned(),
            };
        }

        if !is_detail_row(cells) {
            return Ok(None);
        }

        let qty = self.integer::<u32>(row, COL_QTY, &cells[COL_QTY], &cells[COL_QTY])?;
        let amount = self.integer::<i64>(row, COL_AMOUNT, &strip_thousands(&cells[COL_AMOUNT]), &cells[COL_AMOUNT])?;
        let record = self.current_entry.complete(qty, amount, &cells[COL_SALES_PERSON]);
        trace!(row, stock = ?record.stock_name, qty, amount, "line item");
        Ok(Some(record))
    }

    fn integer<T: std::str::FromStr>(&self, row: usize, column: usize, digits: &str, shown: &str) -> Result<T, ParseError> {
        digits.parse::<T>().map_err(|_| ParseError::Numeric {
            path: self.path.to_path_buf(),
            row,
            column,
            value: s!(shown),
        })
    }
}

fn is_header_row(cells: &[String]) -> bool {
    cells.len() >= HEADER_MIN_CELLS && !cells[COL_STOCK_NAME].is_empty()
}

fn is_detail_row(cells: &[String]) -> bool {
    cells.len() >= DETAIL_MIN_CELLS && is_digits(&cells[COL_QTY])
}

fn is_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

/// Scan already-tokenized rows of one document.
pub fn extract_rows(rows: &[Vec<String>], path: &Path) -> Result<Vec<SalesLineRecord>, ParseError> {
    let mut scan = ReceiptScan::new(path);
    let mut out = Vec::new();
    for (i, cells) in rows.iter().enumerate() {
        if let Some(record) = scan.feed(i, cells)? {
            out.push(record);
        }
    }
    Ok(out)
}
