// src/cli.rs
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use tracing::info;

use crate::config::options::{AppOptions, ExportFormat};
use crate::error::AppError;
use crate::progress::Progress;
use crate::report::{render_text, ArtifactCache, Artifacts, DashboardModel};
use crate::{extract, file, log};

/// Receipt report extractor and sales dashboard.
#[derive(Debug, Parser)]
#[command(name = "sales_dash", author, version, about, long_about = None)]
pub struct Cli {
    /// More log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Extract line items from receipt reports into a flat file
    Extract(ExtractArgs),
    /// Print the dashboard computed from the aggregated artifacts
    Report(ReportArgs),
}

#[derive(Debug, Args)]
pub struct ExtractArgs {
    /// Reports to read, in order (defaults to the six April 2025 dailies)
    pub files: Vec<PathBuf>,

    /// Output file (default: out/structured_sales_data.<format>)
    #[arg(short, long)]
    pub out: Option<String>,

    /// csv or tsv
    #[arg(long, default_value = "csv", value_parser = parse_format)]
    pub format: ExportFormat,

    /// Omit the header line
    #[arg(long)]
    pub no_headers: bool,
}

#[derive(Debug, Args)]
pub struct ReportArgs {
    /// Directory holding the five artifacts
    #[arg(long, default_value = ".")]
    pub data_dir: PathBuf,
}

fn parse_format(s: &str) -> Result<ExportFormat, String> {
    ExportFormat::parse(s).ok_or_else(|| format!("unknown format: {s} (expected csv or tsv)"))
}

impl Cli {
    /// Map arguments onto the option structs.
    pub fn options(&self) -> AppOptions {
        let mut opts = AppOptions::default();
        match &self.command {
            Command::Extract(a) => {
                if !a.files.is_empty() {
                    opts.extract.inputs = a.files.clone();
                }
                opts.export.format = a.format;
                opts.export.include_headers = !a.no_headers;
                if let Some(out) = &a.out {
                    opts.export.set_path(out);
                }
            }
            Command::Report(a) => opts.report.data_dir = a.data_dir.clone(),
        }
        opts
    }
}

/// Per-report lines on stderr.
#[derive(Default)]
struct CliProgress {
    total: usize,
    done: usize,
    records: usize,
}

impl Progress for CliProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
    }
    fn item_done(&mut self, path: &Path, records: usize) {
        self.done += 1;
        self.records += records;
        eprintln!("[{}/{}] {}: {} record(s)", self.done, self.total, path.display(), records);
    }
    fn finish(&mut self) {
        eprintln!("{} record(s) from {} report(s)", self.records, self.done);
    }
}

pub fn run() -> Result<(), AppError> {
    run_with(Cli::parse())
}

pub fn run_with(cli: Cli) -> Result<(), AppError> {
    log::init_stderr(cli.verbose)?;
    let opts = cli.options();

    match cli.command {
        Command::Extract(_) => {
            let mut progress = CliProgress::default();
            let records = extract::extract_documents(&opts.extract.inputs, Some(&mut progress))?;
            let path = file::write_records(&records, &opts.export)?;
            info!(path = %path.display(), "done");
            println!("{}", path.display());
        }
        Command::Report(_) => {
            let mut cache = ArtifactCache::new();
            let artifacts = Artifacts::load(&opts.report.data_dir, &mut cache)?;
            let model = DashboardModel::build(&artifacts)?;
            print!("{}", render_text(&model));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extract_args_map_onto_options() {
        let cli = Cli::parse_from(["sales_dash", "extract", "a.htm", "b.htm", "-o", "x/y", "--format", "TSV", "--no-headers"]);
        let o = cli.options();
        assert_eq!(o.extract.inputs, vec![PathBuf::from("a.htm"), PathBuf::from("b.htm")]);
        assert_eq!(o.export.format, ExportFormat::Tsv);
        assert!(!o.export.include_headers);
        assert_eq!(o.export.out_path(), Path::new("x").join("y.tsv"));
    }

    #[test]
    fn extract_defaults() {
        let o = Cli::parse_from(["sales_dash", "extract"]).options();
        assert_eq!(o.extract.inputs.len(), 6);
        assert_eq!(o.export.out_path(), Path::new("out").join("structured_sales_data.csv"));
        assert!(o.export.include_headers);
    }

    #[test]
    fn report_data_dir_and_verbosity() {
        let cli = Cli::parse_from(["sales_dash", "-vv", "report", "--data-dir", "artifacts"]);
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.options().report.data_dir, PathBuf::from("artifacts"));
    }

    #[test]
    fn unknown_format_is_rejected() {
        assert!(Cli::try_parse_from(["sales_dash", "extract", "--format", "xml"]).is_err());
    }
}
