// src/extract/mod.rs
//! # Receipt extractor
//!
//! Turns the daily receipt reports (HTML exports, one business day each) into
//! a flat list of [`SalesLineRecord`]s.
//!
//! Call chain:
//! ```text
//! extract_documents → extract_document → core::html::table_rows → scan::extract_rows
//! ```
//!
//! The layout is fixed: see the `COL_*` constants in `config::consts`. Other
//! report layouts are not supported. Records are never deduplicated; the same
//! receipt line appearing in two reports yields two records.

mod record;
mod scan;

use std::{
    fs,
    path::{Path, PathBuf},
};

use encoding_rs::{Encoding, UTF_8};
use tracing::{debug, info};

use crate::core::html;
use crate::error::ParseError;
use crate::progress::Progress;

pub use record::SalesLineRecord;
pub use scan::{extract_rows, ReceiptScan};

/// Read one report and extract its line items.
pub fn extract_document(path: &Path) -> Result<Vec<SalesLineRecord>, ParseError> {
    let bytes = fs::read(path).map_err(|source| ParseError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let doc = decode(&bytes, path)?;
    debug!(path = %path.display(), bytes = doc.len(), "report loaded");
    extract_str(&doc, path)
}

/// Extract from an in-memory document; `path` only labels errors.
pub fn extract_str(doc: &str, path: &Path) -> Result<Vec<SalesLineRecord>, ParseError> {
    let rows = html::table_rows(doc).map_err(|e| ParseError::Malformed {
        path: path.to_path_buf(),
        tag: e.tag,
        offset: e.offset,
    })?;
    let records = extract_rows(&rows, path)?;
    info!(path = %path.display(), rows = rows.len(), records = records.len(), "report scanned");
    Ok(records)
}

/// Extract every report in order. Output is document-then-row ordered; the
/// first failing report ends the run.
pub fn extract_documents(
    paths: &[PathBuf],
    mut progress: Option<&mut dyn Progress>,
) -> Result<Vec<SalesLineRecord>, ParseError> {
    if let Some(p) = progress.as_deref_mut() {
        p.begin(paths.len());
    }

    let mut all = Vec::new();
    for path in paths {
        if let Some(p) = progress.as_deref_mut() {
            p.log(&format!("Reading {}", path.display()));
        }
        let records = extract_document(path)?;
        if let Some(p) = progress.as_deref_mut() {
            p.item_done(path, records.len());
        }
        all.extend(records);
    }

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }
    Ok(all)
}

/// Decode by BOM, UTF-8 when there is none. Any malformed sequence fails the report.
fn decode(bytes: &[u8], path: &Path) -> Result<String, ParseError> {
    let (encoding, bom_len) = Encoding::for_bom(bytes).unwrap_or((UTF_8, 0));
    let (text, had_errors) = encoding.decode_without_bom_handling(&bytes[bom_len..]);
    if had_errors {
        return Err(ParseError::Decode {
            path: path.to_path_buf(),
            encoding: encoding.name(),
        });
    }
    Ok(text.into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn utf8_with_and_without_bom() {
        let p = Path::new("x.htm");
        assert_eq!(decode("<td>Café</td>".as_bytes(), p).unwrap(), "<td>Café</td>");
        assert_eq!(decode(b"\xef\xbb\xbf<td>A</td>", p).unwrap(), "<td>A</td>");
    }

    #[test]
    fn utf16_bom_is_honoured() {
        let mut bytes = vec![0xFF, 0xFE];
        for unit in "<td>Crème</td>".encode_utf16() {
            bytes.extend_from_slice(&unit.to_le_bytes());
        }
        assert_eq!(decode(&bytes, Path::new("x.htm")).unwrap(), "<td>Crème</td>");
    }

    #[test]
    fn latin1_byte_is_a_decode_error() {
        let err = decode(b"<td>Caf\xe9 Cr\xe8me</td>", Path::new("day.htm")).unwrap_err();
        assert!(matches!(err, ParseError::Decode { encoding: "UTF-8", .. }));
        assert!(err.to_string().contains("day.htm"));
    }

    #[test]
    fn malformed_markup_names_the_document() {
        let err = extract_str("<tr><td", Path::new("bad.htm")).unwrap_err();
        assert!(matches!(err, ParseError::Malformed { tag: "td", offset: 4, .. }));
        assert!(err.to_string().contains("bad.htm"));
    }

    #[test]
    fn no_reports_no_records() {
        let out = extract_documents(&[], Some(&mut crate::progress::NullProgress)).unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn document_without_rows_is_empty() {
        let out = extract_str("<html><body><p>closed</p></body></html>", Path::new("x.htm")).unwrap();
        assert!(out.is_empty());
    }
}
