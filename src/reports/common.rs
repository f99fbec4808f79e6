//! Common utilities shared across report generators.

use crate::metrics::MetricRecord;

/// Produce a stably sorted view of the records, ordered by the canonical
/// parameter key `(Ncols, ell, ellp, rho, eta, theta)`.
pub fn sort_records(records: &[MetricRecord]) -> Vec<&MetricRecord> {
    let mut sorted: Vec<&MetricRecord> = records.iter().collect();
    sorted.sort_by_key(|record| record.sort_key());
    sorted
}

/// Format a byte count using binary units.
///
/// Whole bytes below 1 KiB render without decimals; KiB/MiB values render with
/// one decimal; anything at or above 1 GiB renders in GiB regardless of
/// magnitude.
pub fn format_bytes(bytes: u64) -> String {
    let mut value = bytes as f64;
    for unit in ["B", "KiB", "MiB"] {
        if value < 1024.0 {
            return if unit == "B" {
                format!("{value:.0} {unit}")
            } else {
                format!("{value:.1} {unit}")
            };
        }
        value /= 1024.0;
    }
    format!("{value:.1} GiB")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_format_bytes_zero() {
        assert_eq!(format_bytes(0), "0 B");
    }

    #[test]
    fn test_format_bytes_just_below_one_kib() {
        assert_eq!(format_bytes(1023), "1023 B");
    }

    #[test]
    fn test_format_bytes_one_kib() {
        assert_eq!(format_bytes(1024), "1.0 KiB");
    }

    #[test]
    fn test_format_bytes_one_and_a_half_kib() {
        assert_eq!(format_bytes(1536), "1.5 KiB");
    }

    #[test]
    fn test_format_bytes_one_mib() {
        assert_eq!(format_bytes(1_048_576), "1.0 MiB");
    }

    #[test]
    fn test_format_bytes_one_gib() {
        assert_eq!(format_bytes(1024 * 1024 * 1024), "1.0 GiB");
    }

    #[test]
    fn test_format_bytes_beyond_gib_stays_in_gib() {
        assert_eq!(format_bytes(5 * 1024 * 1024 * 1024 * 1024), "5120.0 GiB");
    }

    fn record_with_params(ncols: i64, ell: i64) -> MetricRecord {
        crate::metrics::derive(&json!({"Opts": {"NCols": ncols, "Ell": ell}}))
    }

    #[test]
    fn test_sort_records_orders_by_canonical_key() {
        let records = vec![
            record_with_params(8, 1),
            record_with_params(4, 2),
            record_with_params(4, 1),
        ];
        let sorted = sort_records(&records);
        let keys: Vec<(i64, i64)> = sorted.iter().map(|r| (r.ncols, r.ell)).collect();
        assert_eq!(keys, vec![(4, 1), (4, 2), (8, 1)]);
    }

    #[test]
    fn test_sort_records_is_stable_on_ties() {
        let first = crate::metrics::derive(&json!({"Opts": {"NCols": 4}, "TimingsUS": {"__total__": 1000}}));
        let second = crate::metrics::derive(&json!({"Opts": {"NCols": 4}, "TimingsUS": {"__total__": 2000}}));

        let records = vec![first, second];
        let sorted = sort_records(&records);
        assert_eq!(sorted[0].t_total_ms, 1.0);
        assert_eq!(sorted[1].t_total_ms, 2.0);
    }
}
