//! Markdown table generator.

use super::common;
use crate::Result;
use crate::metrics::MetricRecord;
use core::fmt::Write;

const HEADER: [&str; 15] = [
    "Ncols",
    "ell",
    "ellp",
    "rho",
    "eta",
    "theta",
    "OK",
    "t_total(ms)",
    "t_norm(ms)",
    "Fpar(core)",
    "Fpar(norm)",
    "Fpar(total)",
    "Wit(norm)",
    "Wit(total)",
    "All(sizes)",
];

/// Write the records as a pipe-delimited Markdown table, sorted by the
/// canonical parameter key.
///
/// The overall verdict renders as a check/cross glyph, durations as whole
/// milliseconds, and byte counts through the human-readable formatter.
pub fn generate<W: Write>(records: &[MetricRecord], writer: &mut W) -> Result<()> {
    writeln!(writer, "| {} |", HEADER.join(" | "))?;
    writeln!(writer, "|{}|", ["---"; HEADER.len()].join("|"))?;

    for record in common::sort_records(records) {
        let ok = if record.ok_all { "✔" } else { "✘" };
        writeln!(
            writer,
            "| {} | {} | {} | {} | {} | {} | {ok} | {:.0} | {:.0} | {} | {} | {} | {} | {} | {} |",
            record.ncols,
            record.ell,
            record.ellp,
            record.rho,
            record.eta,
            record.theta,
            record.t_total_ms,
            record.t_norm_ms,
            common::format_bytes(record.size_fpar_core),
            common::format_bytes(record.size_fpar_norm),
            common::format_bytes(record.size_fpar_total),
            common::format_bytes(record.size_witness_norm),
            common::format_bytes(record.size_witness_total),
            common::format_bytes(record.size_total_bytes),
        )?;
    }

    Ok(())
}
