use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use globset::{Glob, GlobMatcher};
use serde_json::Value as JsonValue;
use walkdir::WalkDir;

use super::model::{Report, RunRecord};
use crate::error::ReportError;

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Load one report file.
///
/// Expected schema (what the benchmark runner writes):
///
/// ```json
/// [
///   { "size": 10, "k": 2, "density": 0.5, "num_runs": 5,
///     "average_spanner_size": 25 },
///   { "size": 20, "k": 2, "density": 0.5, "num_runs": 5,
///     "average_spanner_size": 60 }
/// ]
/// ```
///
/// Only the outer shape is checked here; field presence and types are the
/// extractor's and classifier's business.
pub fn load(path: &Path) -> Result<Report, ReportError> {
    let text = std::fs::read_to_string(path).map_err(|source| match source.kind() {
        ErrorKind::NotFound => ReportError::NotFound(path.to_path_buf()),
        _ => ReportError::Io {
            path: path.to_path_buf(),
            source,
        },
    })?;
    parse(path, &text)
}

/// Files directly inside `dir` whose name contains `report_id`, sorted by
/// name so runs are reproducible.
pub fn discover(dir: &Path, report_id: &str) -> Result<Vec<PathBuf>, ReportError> {
    if !dir.is_dir() {
        return Err(ReportError::NotFound(dir.to_path_buf()));
    }
    let matcher = name_matcher(report_id)?;

    let mut files = Vec::new();
    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                log::warn!("Skipping unreadable entry in {}: {e}", dir.display());
                continue;
            }
        };
        if !entry.file_type().is_file() {
            continue;
        }
        if matcher.is_match(entry.file_name()) {
            files.push(entry.into_path());
        }
    }

    log::debug!(
        "Discovered {} report(s) matching '*{report_id}*' in {}",
        files.len(),
        dir.display()
    );
    Ok(files)
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn name_matcher(report_id: &str) -> Result<GlobMatcher, ReportError> {
    let pattern = format!("*{}*", globset::escape(report_id));
    Glob::new(&pattern)
        .map(|glob| glob.compile_matcher())
        .map_err(|e| ReportError::InvalidParameter(format!("report id '{report_id}': {e}")))
}

fn parse(path: &Path, text: &str) -> Result<Report, ReportError> {
    let root: JsonValue =
        serde_json::from_str(text).map_err(|e| ReportError::malformed(path, e))?;

    let JsonValue::Array(rows) = root else {
        return Err(ReportError::malformed(path, "expected top-level JSON array"));
    };

    let records = rows
        .into_iter()
        .enumerate()
        .map(|(i, row)| match row {
            JsonValue::Object(obj) => Ok(obj),
            _ => Err(ReportError::malformed(
                path,
                format!("record {i} is not a JSON object"),
            )),
        })
        .collect::<Result<Vec<RunRecord>, _>>()?;

    Ok(Report::new(records))
}
