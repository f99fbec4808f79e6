//! Metric derivation: map one raw benchmark record to a fixed-shape summary record.
//!
//! Raw records are arbitrary JSON shapes, so every field access goes through an
//! optional-field accessor that treats anything absent or non-coercible as the
//! field's default (zero or false). Derivation is therefore total: a record
//! accepted by the loader always yields a `MetricRecord`.

use serde_json::Value;

/// Reserved key inside `TimingsUS` holding a precomputed total, preferred over
/// summing the individual phases.
const TOTAL_TIMING_KEY: &str = "__total__";

/// The phase whose duration is reported separately as the norm-chain time.
const NORM_TIMING_KEY: &str = "buildFparLinfChain";

const FPAR_CORE_KEY: &str = "piop/Fpar/core";
const FPAR_NORM_KEY: &str = "piop/Fpar/linf_chain";
const FPAR_PREFIX: &str = "piop/Fpar/";
const WITNESS_NORM_M_KEY: &str = "piop/witness/linf_chain/M";
const WITNESS_NORM_D_KEY: &str = "piop/witness/linf_chain/D";
const WITNESS_PREFIX: &str = "piop/witness/";

/// The derived summary of one benchmark run.
///
/// Instances are produced once by [`derive`] and never mutated afterward.
#[derive(Debug, Clone, PartialEq)]
pub struct MetricRecord {
    pub ncols: i64,
    pub ell: i64,
    pub ellp: i64,
    pub rho: i64,
    pub eta: i64,
    pub theta: i64,

    pub ok_lin: bool,
    pub ok_eq4: bool,
    pub ok_sum: bool,
    pub ok_all: bool,

    /// Total run duration in milliseconds.
    pub t_total_ms: f64,
    /// Duration of the norm-chain build phase in milliseconds.
    pub t_norm_ms: f64,

    pub size_fpar_core: u64,
    pub size_fpar_norm: u64,
    pub size_fpar_total: u64,
    pub size_witness_norm: u64,
    pub size_witness_total: u64,
    pub size_total_bytes: u64,
}

impl MetricRecord {
    /// The canonical sort key ordering all report rows.
    #[must_use]
    pub const fn sort_key(&self) -> (i64, i64, i64, i64, i64, i64) {
        (self.ncols, self.ell, self.ellp, self.rho, self.eta, self.theta)
    }
}

/// Derive the summary metrics for one raw record.
///
/// Pure and total: missing or non-coercible fields fall back to zero/false.
#[must_use]
pub fn derive(raw: &Value) -> MetricRecord {
    let ok_lin = verdict_flag(raw, "OkLin");
    let ok_eq4 = verdict_flag(raw, "OkEq4");
    let ok_sum = verdict_flag(raw, "OkSum");

    let times = field(raw, "TimingsUS");
    let total_us = times
        .and_then(|t| field(t, TOTAL_TIMING_KEY))
        .and_then(Value::as_f64)
        .unwrap_or_else(|| sum_values(times));
    let norm_us = times.and_then(|t| field(t, NORM_TIMING_KEY)).and_then(Value::as_f64).unwrap_or(0.0);

    let sizes = field(raw, "SizesB");

    MetricRecord {
        ncols: param(raw, "NCols"),
        ell: param(raw, "Ell"),
        ellp: param(raw, "EllPrime"),
        rho: param(raw, "Rho"),
        eta: param(raw, "Eta"),
        theta: param(raw, "Theta"),
        ok_lin,
        ok_eq4,
        ok_sum,
        ok_all: ok_lin && ok_eq4 && ok_sum,
        t_total_ms: total_us / 1000.0,
        t_norm_ms: norm_us / 1000.0,
        size_fpar_core: size_at(sizes, FPAR_CORE_KEY),
        size_fpar_norm: size_at(sizes, FPAR_NORM_KEY),
        size_fpar_total: size_sum(sizes, |key| key.starts_with(FPAR_PREFIX)),
        size_witness_norm: size_at(sizes, WITNESS_NORM_M_KEY) + size_at(sizes, WITNESS_NORM_D_KEY),
        size_witness_total: size_sum(sizes, |key| key.starts_with(WITNESS_PREFIX)),
        size_total_bytes: size_sum(sizes, |_| true),
    }
}

/// Lookup-with-default building block: the value under `key` if `value` is an
/// object containing it.
fn field<'a>(value: &'a Value, key: &str) -> Option<&'a Value> {
    value.as_object().and_then(|map| map.get(key))
}

fn as_int(value: &Value) -> Option<i64> {
    value.as_i64().or_else(|| value.as_f64().map(|f| f as i64))
}

fn as_byte_count(value: &Value) -> Option<u64> {
    value.as_u64().or_else(|| value.as_f64().filter(|f| *f >= 0.0).map(|f| f as u64))
}

/// Resolve one benchmark parameter through the ordered fallback chain: the
/// `Opts` mapping first, then a same-named top-level field, then zero. The first
/// scope containing the key wins; coercion applies afterward.
fn param(raw: &Value, name: &str) -> i64 {
    [field(raw, "Opts"), Some(raw)]
        .into_iter()
        .flatten()
        .find_map(|scope| field(scope, name))
        .and_then(as_int)
        .unwrap_or(0)
}

fn verdict_flag(raw: &Value, name: &str) -> bool {
    field(raw, "Verdict").and_then(|v| field(v, name)).and_then(Value::as_bool).unwrap_or(false)
}

/// Sum every numeric value in an object, skipping anything non-numeric.
fn sum_values(value: Option<&Value>) -> f64 {
    value
        .and_then(Value::as_object)
        .map_or(0.0, |map| map.values().filter_map(Value::as_f64).sum())
}

fn size_at(sizes: Option<&Value>, key: &str) -> u64 {
    sizes.and_then(|s| field(s, key)).and_then(as_byte_count).unwrap_or(0)
}

fn size_sum(sizes: Option<&Value>, pred: impl Fn(&str) -> bool) -> u64 {
    sizes.and_then(Value::as_object).map_or(0, |map| {
        map.iter().filter(|(key, _)| pred(key)).filter_map(|(_, v)| as_byte_count(v)).sum()
    })
}
