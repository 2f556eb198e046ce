// src/log.rs
//
// Subscriber setup for the two binaries. The GUI has no console, so it logs
// to a file under the local store; the CLI logs to stderr.

use std::fs::{self, OpenOptions};
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::fmt::time::Uptime;
use tracing_subscriber::EnvFilter;

use crate::error::AppError;

const CRATE_TARGET: &str = "sales_dash";

/// `RUST_LOG` wins; otherwise this crate at `default` and everything else at warn.
fn filter(default: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("warn,{CRATE_TARGET}={default}")))
}

/// Append to `path` (parent directories are created).
pub fn init_file(path: &Path) -> Result<(), AppError> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir).map_err(|e| AppError::Log(e.to_string()))?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| AppError::Log(format!("{}: {e}", path.display())))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter("debug"))
        .with_timer(Uptime::default())
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .try_init()
        .map_err(|e| AppError::Log(e.to_string()))
}

/// Stderr logging; `verbosity` counts `-v` flags.
pub fn init_stderr(verbosity: u8) -> Result<(), AppError> {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter(level))
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init()
        .map_err(|e| AppError::Log(e.to_string()))
}
