//! A tool to summarize PACS benchmark results into Markdown and CSV tables.
//!
//! # Overview
//!
//! `pacs-summary` reads a directory of benchmark-result JSON files produced by the
//! PACS proof benchmarking harness, derives a fixed set of summary metrics for each
//! run, and writes two reports sorted by the benchmark parameters: a Markdown table
//! for humans and a CSV file for spreadsheets and scripts.
//!
//! # Quick Start
//!
//! Summarize the results in the default `out` directory:
//!
//! ```bash
//! pacs-summary
//! ```
//!
//! This writes `summary.md` and `summary.csv` to the current directory.
//!
//! # Basic Usage
//!
//! **Choose the input directory:**
//! ```bash
//! pacs-summary --in bench-results
//! ```
//!
//! **Choose the output paths:**
//! ```bash
//! pacs-summary --md reports/summary.md --csv reports/summary.csv
//! ```
//!
//! # Input Format
//!
//! Every `*.json` file directly inside the input directory is read (non-recursive).
//! A file's top-level value may be a single result object or an array of result
//! objects; both forms are accepted. Each result object may carry:
//!
//! - `Opts`: the benchmark parameters (`NCols`, `Ell`, `EllPrime`, `Rho`, `Eta`,
//!   `Theta`); a parameter may also appear as a top-level field instead
//! - `Verdict`: the proof sub-verdicts (`OkLin`, `OkEq4`, `OkSum`)
//! - `TimingsUS`: per-phase durations in microseconds, optionally with a
//!   precomputed `__total__` entry
//! - `SizesB`: per-component byte counts keyed by hierarchical names such as
//!   `piop/Fpar/core`
//!
//! Absent fields fall back to zero or false; a file that cannot be parsed, or whose
//! top-level value has any other shape, is skipped with a warning on stderr and the
//! run continues.
//!
//! # Output
//!
//! The Markdown table has 15 display columns with byte counts rendered in
//! human-readable units (B/KiB/MiB/GiB) and durations rounded to whole
//! milliseconds. The CSV file has 18 columns with raw, unformatted values. Both
//! files list one row per result, ordered by the parameter tuple
//! `(Ncols, ell, ellp, rho, eta, theta)`.
//!
//! # Exit Codes
//!
//! - `0`: both output files were written
//! - non-zero: no records could be collected from the input directory, or an
//!   output file could not be written; nothing is written in either case
//!
//! # Diagnostics
//!
//! Per-file warnings and fatal errors go to stderr; the per-file confirmation
//! lines go to stdout. Additional diagnostic logging is available via
//! `--log-level`:
//!
//! ```bash
//! pacs-summary --in bench-results --log-level debug
//! ```

use clap::Parser;
use pacs_summary::Result;
use pacs_summary::commands::{SummarizeArgs, summarize};

fn main() -> Result<()> {
    let args = SummarizeArgs::parse();
    summarize(&args)
}
