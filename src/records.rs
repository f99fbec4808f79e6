//! Record loading: turn a directory of result files into a flat sequence of raw records.

use crate::Result;
use camino::{Utf8Path, Utf8PathBuf};
use ohno::{IntoAppError, app_err};
use serde_json::Value;
use std::fs;

const LOG_TARGET: &str = "records";

/// Load every benchmark record found in `dir`.
///
/// Files ending in `.json` directly inside the directory are processed in
/// lexicographic path order. A file holding a single object contributes one
/// record; a file holding an array contributes its elements in order. Files that
/// cannot be read or parsed, or whose top-level value has any other shape, are
/// skipped with a warning on stderr.
///
/// # Errors
///
/// Returns an error only if the directory itself cannot be enumerated; per-file
/// failures never fail the run.
pub fn load_dir(dir: &Utf8Path) -> Result<Vec<Value>> {
    let mut paths: Vec<Utf8PathBuf> = Vec::new();
    for entry in dir
        .read_dir_utf8()
        .into_app_err_with(|| format!("unable to read input directory '{dir}'"))?
    {
        let entry = entry.into_app_err_with(|| format!("unable to enumerate input directory '{dir}'"))?;
        let path = entry.into_path();
        if path.extension() == Some("json") && path.is_file() {
            paths.push(path);
        }
    }
    paths.sort();
    log::debug!(target: LOG_TARGET, "found {} candidate file(s) in '{dir}'", paths.len());

    let mut records = Vec::new();
    for path in &paths {
        match load_file(path) {
            Ok(mut file_records) => {
                log::debug!(target: LOG_TARGET, "loaded {} record(s) from '{path}'", file_records.len());
                records.append(&mut file_records);
            }
            Err(e) => eprintln!("⚠️  Skipping '{path}': {e}"),
        }
    }

    Ok(records)
}

/// Parse one file into a sequence of records, or a diagnostic explaining why it
/// cannot contribute any.
fn load_file(path: &Utf8Path) -> Result<Vec<Value>> {
    let text = fs::read_to_string(path).into_app_err("unable to read file")?;
    let doc: Value = serde_json::from_str(&text).into_app_err("unable to parse JSON")?;

    match doc {
        Value::Object(_) => Ok(vec![doc]),
        Value::Array(items) => Ok(items),
        _ => Err(app_err!("top-level value is neither an object nor an array")),
    }
}
