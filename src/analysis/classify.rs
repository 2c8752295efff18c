use serde_json::Value as JsonValue;

use crate::data::model::{AlgorithmDescriptor, Report, SpannerKind};
use crate::data::series;
use crate::error::ReportError;

/// Work out which algorithm produced `report` from its first record.
///
/// A negative `k` (or none at all, which the runner writes as `-1`) is the
/// three-spanner; anything else is the 2k−1 spanner with that `k`.
pub fn classify(report: &Report) -> Result<AlgorithmDescriptor, ReportError> {
    let first = report
        .first()
        .ok_or_else(|| ReportError::InvalidParameter("cannot classify an empty report".to_string()))?;

    let kind = match first.get("k") {
        None => SpannerKind::ThreeSpanner,
        Some(value) => spanner_kind(value)?,
    };
    let density = series::number(first, "density", 0)?;

    Ok(AlgorithmDescriptor { kind, density })
}

fn spanner_kind(value: &JsonValue) -> Result<SpannerKind, ReportError> {
    let k = value
        .as_i64()
        .or_else(|| value.as_f64().filter(|f| f.fract() == 0.0).map(|f| f as i64))
        .ok_or_else(|| ReportError::mismatch("k", 0))?;

    if k < 0 {
        return Ok(SpannerKind::ThreeSpanner);
    }
    u32::try_from(k)
        .map(SpannerKind::TwoKMinusOne)
        .map_err(|_| ReportError::InvalidParameter(format!("k = {k} is out of range")))
}

/// Legend text for a report's measured series.
pub fn label(descriptor: &AlgorithmDescriptor) -> String {
    descriptor.to_string()
}

/// File-name-safe identifier from `k` and the density in tenths.
///
/// Density is rounded to one decimal so float noise in the runner's output
/// does not change file names.
pub fn output_id(descriptor: &AlgorithmDescriptor) -> String {
    let tenths = (descriptor.density * 10.0).round() as i64;
    format!("edgegraph_{}_{tenths}", descriptor.kind.id_k())
}
