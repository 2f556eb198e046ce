// src/error.rs
use std::{io, path::PathBuf};

use thiserror::Error;

/// Failures while turning a receipt report into records.
/// Every variant names the document it came from.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("cannot read report {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot decode report {} as {encoding}", path.display())]
    Decode {
        path: PathBuf,
        encoding: &'static str,
    },

    #[error("malformed report {}: unterminated <{tag}> at byte {offset}", path.display())]
    Malformed {
        path: PathBuf,
        tag: &'static str,
        offset: usize,
    },

    #[error("report {}: row {row}, column {column}: {value:?} is not a valid integer", path.display())]
    Numeric {
        path: PathBuf,
        row: usize,
        column: usize,
        value: String,
    },
}

/// Failures while loading or reading one of the dashboard artifacts.
#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("cannot load {artifact} from {}: {source}", path.display())]
    Load {
        artifact: &'static str,
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("{artifact}: required column {column:?} is missing")]
    MissingColumn {
        artifact: &'static str,
        column: String,
    },

    #[error("{artifact}: column {column:?}, row {row}: {value:?} is not a number")]
    NotNumeric {
        artifact: &'static str,
        column: String,
        row: usize,
        value: String,
    },
}

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("CSV write error: {0}")]
    Csv(#[from] csv::Error),

    #[error("path exists but is not a directory: {}", .0.display())]
    NotADirectory(PathBuf),
}

/// Umbrella for the binaries.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Schema(#[from] SchemaError),

    #[error(transparent)]
    Export(#[from] ExportError),

    #[error("logging setup failed: {0}")]
    Log(String),
}
