//! Report generation for derived benchmark metrics.
//!
//! Two generators are provided, each accessed through a `generate` function:
//! - **Markdown**: a pipe-delimited table with human-readable byte sizes
//! - **CSV**: raw field values for spreadsheets and scripts
//!
//! Both operate on the same input, a slice of [`MetricRecord`], and write to any
//! `core::fmt::Write` sink. Each generator sorts its own view of the input by the
//! canonical parameter key, so the two outputs always agree on row order.
//!
//! [`MetricRecord`]: crate::metrics::MetricRecord

mod common;
mod csv;
mod markdown;

pub use csv::generate as generate_csv;
pub use markdown::generate as generate_markdown;
