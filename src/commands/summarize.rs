//! The summarize command: collect records, derive metrics, write both reports.

use crate::commands::common::{self, LogLevel};
use crate::metrics::{self, MetricRecord};
use crate::records;
use crate::reports::{generate_csv, generate_markdown};
use crate::Result;
use camino::Utf8PathBuf;
use clap::Parser;
use clap::builder::Styles;
use clap::builder::styling::{AnsiColor, Effects};
use ohno::{IntoAppError, bail};
use std::fs;

const LOG_TARGET: &str = "summarize";

const CLAP_STYLES: Styles = Styles::styled()
    .header(AnsiColor::Green.on_default().effects(Effects::BOLD))
    .usage(AnsiColor::Green.on_default().effects(Effects::BOLD))
    .literal(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
    .placeholder(AnsiColor::Cyan.on_default());

#[derive(Parser, Debug)]
#[command(name = "pacs-summary", version, about)]
#[command(styles = CLAP_STYLES)]
pub struct SummarizeArgs {
    /// Directory containing benchmark result JSON files
    #[arg(long = "in", value_name = "DIR", default_value = "out")]
    pub input: Utf8PathBuf,

    /// Output Markdown file path
    #[arg(long = "md", value_name = "PATH", default_value = "summary.md")]
    pub markdown: Utf8PathBuf,

    /// Output CSV file path
    #[arg(long = "csv", value_name = "PATH", default_value = "summary.csv")]
    pub csv: Utf8PathBuf,

    /// Set the logging level for diagnostic output
    #[arg(long, value_name = "LEVEL", default_value = "none")]
    pub log_level: LogLevel,
}

/// Run the full pipeline: load raw records, derive metrics, render both reports.
///
/// # Errors
///
/// Returns an error if the input directory cannot be enumerated, if no records
/// were collected from it, or if either output file cannot be written. Individual
/// unreadable input files only produce warnings.
pub fn summarize(args: &SummarizeArgs) -> Result<()> {
    common::init_logging(args.log_level);

    let raw = records::load_dir(&args.input)?;
    if raw.is_empty() {
        bail!("no benchmark records found in '{}'", args.input);
    }
    log::debug!(target: LOG_TARGET, "collected {} record(s) from '{}'", raw.len(), args.input);

    let derived: Vec<MetricRecord> = raw.iter().map(metrics::derive).collect();

    let mut markdown = String::new();
    generate_markdown(&derived, &mut markdown)?;
    fs::write(&args.markdown, &markdown).into_app_err_with(|| format!("unable to write '{}'", args.markdown))?;
    println!("Wrote {}", args.markdown);

    let mut csv = String::new();
    generate_csv(&derived, &mut csv)?;
    fs::write(&args.csv, &csv).into_app_err_with(|| format!("unable to write '{}'", args.csv))?;
    println!("Wrote {}", args.csv);

    Ok(())
}
