use std::fmt;

use serde_json::{Map, Value as JsonValue};

use crate::config::ReportKind;

// ---------------------------------------------------------------------------
// RunRecord / Report – one benchmark file
// ---------------------------------------------------------------------------

/// One line of a benchmark sweep: field name → JSON value, in file order.
pub type RunRecord = Map<String, JsonValue>;

/// All records of one report file, in file order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Report {
    records: Vec<RunRecord>,
}

impl Report {
    pub fn new(records: Vec<RunRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[RunRecord] {
        &self.records
    }

    /// The record classification reads its parameters from.
    pub fn first(&self) -> Option<&RunRecord> {
        self.records.first()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Series – x/y pairs ready for plotting
// ---------------------------------------------------------------------------

/// Two equal-length numeric sequences.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Series {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
}

impl Series {
    /// `x` and `y` must have the same length.
    pub fn new(x: Vec<f64>, y: Vec<f64>) -> Self {
        debug_assert_eq!(x.len(), y.len());
        Self { x, y }
    }

    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.x.iter().copied().zip(self.y.iter().copied())
    }
}

// ---------------------------------------------------------------------------
// AlgorithmDescriptor – what produced a report
// ---------------------------------------------------------------------------

/// The spanner construction a report measured.
///
/// Report files encode the three-spanner with a negative `k`; that sentinel
/// is resolved once, here, and never looked at again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpannerKind {
    ThreeSpanner,
    TwoKMinusOne(u32),
}

impl SpannerKind {
    /// Value written to file names, `-1` for the three-spanner as the
    /// benchmark runner writes it.
    pub fn id_k(self) -> i64 {
        match self {
            SpannerKind::ThreeSpanner => -1,
            SpannerKind::TwoKMinusOne(k) => i64::from(k),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AlgorithmDescriptor {
    pub kind: SpannerKind,
    pub density: f64,
}

impl fmt::Display for AlgorithmDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let density = DensityDisplay(self.density);
        match self.kind {
            SpannerKind::ThreeSpanner => write!(f, "Three - Spanner, density = {density}"),
            SpannerKind::TwoKMinusOne(k) => {
                write!(f, "2k - 1 Spanner, k = {k}, density = {density}")
            }
        }
    }
}

/// Prints whole densities as `1.0` rather than `1`.
struct DensityDisplay(f64);

impl fmt::Display for DensityDisplay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.fract() == 0.0 {
            write!(f, "{:.1}", self.0)
        } else {
            write!(f, "{}", self.0)
        }
    }
}

// ---------------------------------------------------------------------------
// ComparisonBundle – what the pipeline hands to a sink
// ---------------------------------------------------------------------------

/// A measured series with its theoretical baseline, labelled and named.
#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonBundle {
    pub kind: ReportKind,
    pub descriptor: AlgorithmDescriptor,
    pub measured: Series,
    /// `None` for kinds without a theoretical curve.
    pub baseline: Option<Series>,
    pub label: String,
    pub baseline_label: Option<String>,
    pub output_id: String,
}

impl ComparisonBundle {
    /// File stem of the chart written for this bundle.
    pub fn file_stem(&self) -> String {
        format!("{}_{}", self.kind.file_prefix(), self.output_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_follow_kind() {
        let three = AlgorithmDescriptor {
            kind: SpannerKind::ThreeSpanner,
            density: 0.3,
        };
        let two_k = AlgorithmDescriptor {
            kind: SpannerKind::TwoKMinusOne(4),
            density: 1.0,
        };
        assert_eq!(three.to_string(), "Three - Spanner, density = 0.3");
        assert_eq!(two_k.to_string(), "2k - 1 Spanner, k = 4, density = 1.0");
    }

    #[test]
    fn three_spanner_keeps_runner_sentinel_in_ids() {
        assert_eq!(SpannerKind::ThreeSpanner.id_k(), -1);
        assert_eq!(SpannerKind::TwoKMinusOne(3).id_k(), 3);
    }
}
