//! Backend-neutral description of a chart: titled axes and coloured lines.

use crate::color::{series_colors, Rgb};
use crate::config::ReportKind;
use crate::data::model::{ComparisonBundle, Series};

#[derive(Debug, Clone, PartialEq)]
pub struct ChartLine {
    pub label: String,
    pub series: Series,
    pub color: Rgb,
    pub is_baseline: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartSpec {
    pub title: String,
    pub x_label: &'static str,
    pub y_label: &'static str,
    pub lines: Vec<ChartLine>,
}

impl ChartSpec {
    /// Chart of one bundle: measured line plus its baseline.
    pub fn single(bundle: &ComparisonBundle) -> Self {
        Self {
            title: bundle.label.clone(),
            x_label: bundle.kind.x_label(),
            y_label: bundle.kind.y_label(),
            lines: chart_lines(&[bundle], true),
        }
    }

    /// All bundles of one kind on shared axes.
    pub fn overlay(kind: ReportKind, bundles: &[&ComparisonBundle]) -> Self {
        Self {
            title: format!("{} comparison", kind.file_prefix().replace('_', " ")),
            x_label: kind.x_label(),
            y_label: kind.y_label(),
            lines: chart_lines(bundles, true),
        }
    }

    /// Smallest and largest x and y over every line, widened when flat.
    pub fn bounds(&self) -> Option<((f64, f64), (f64, f64))> {
        let mut points = self.lines.iter().flat_map(|l| l.series.points()).peekable();
        points.peek()?;
        let (mut x0, mut x1, mut y0, mut y1) = (
            f64::INFINITY,
            f64::NEG_INFINITY,
            f64::INFINITY,
            f64::NEG_INFINITY,
        );
        for (x, y) in points {
            x0 = x0.min(x);
            x1 = x1.max(x);
            y0 = y0.min(y);
            y1 = y1.max(y);
        }
        Some((widen(x0, x1), widen(y0.min(0.0), y1)))
    }
}

fn widen(lo: f64, hi: f64) -> (f64, f64) {
    if (hi - lo).abs() < f64::EPSILON {
        (lo - 1.0, hi + 1.0)
    } else {
        (lo, hi + (hi - lo) * 0.05)
    }
}

/// Lines for `bundles`, each bundle in its own hue.
pub fn chart_lines(bundles: &[&ComparisonBundle], show_baseline: bool) -> Vec<ChartLine> {
    let colors = series_colors(bundles.len());
    let mut lines = Vec::with_capacity(bundles.len() * 2);

    for (bundle, color) in bundles.iter().zip(colors) {
        lines.push(ChartLine {
            label: bundle.label.clone(),
            series: bundle.measured.clone(),
            color: color.measured,
            is_baseline: false,
        });
        if !show_baseline {
            continue;
        }
        if let (Some(series), Some(label)) = (&bundle.baseline, &bundle.baseline_label) {
            lines.push(ChartLine {
                label: format!("{label} ({})", bundle.output_id),
                series: series.clone(),
                color: color.baseline,
                is_baseline: true,
            });
        }
    }
    lines
}
