use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use clap::ValueEnum;

use crate::error::ReportError;

// ---------------------------------------------------------------------------
// ReportKind – which comparison to draw from a set of report files
// ---------------------------------------------------------------------------

/// The four comparisons the tool knows how to draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReportKind {
    /// Spanner edge count against graph size.
    Edge,
    /// Stretch factor against graph size.
    Stretch,
    /// Spanner edge count against graph density.
    Density,
    /// Stretch factor against graph density.
    StretchDensity,
}

/// Which theoretical curve accompanies a report kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BaselineKind {
    /// `k · x^(1 + 1/k)`
    EdgeBound,
    /// Constant stretch of 3.
    StretchBound,
    None,
}

/// Field projection and baseline for one report kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldMapping {
    pub x_field: &'static str,
    pub y_field: &'static str,
    pub baseline: BaselineKind,
}

impl ReportKind {
    pub const ALL: [ReportKind; 4] = [
        ReportKind::Edge,
        ReportKind::Stretch,
        ReportKind::Density,
        ReportKind::StretchDensity,
    ];

    /// Fields to project and the baseline to synthesise for this kind.
    pub fn mapping(self, metric: StretchMetric) -> FieldMapping {
        match self {
            ReportKind::Edge => FieldMapping {
                x_field: "size",
                y_field: "average_spanner_size",
                baseline: BaselineKind::EdgeBound,
            },
            ReportKind::Stretch => FieldMapping {
                x_field: "size",
                y_field: metric.field(),
                baseline: BaselineKind::StretchBound,
            },
            ReportKind::Density => FieldMapping {
                x_field: "density",
                y_field: "average_spanner_size",
                baseline: BaselineKind::EdgeBound,
            },
            ReportKind::StretchDensity => FieldMapping {
                x_field: "density",
                y_field: metric.field(),
                baseline: BaselineKind::None,
            },
        }
    }

    /// Name accepted on the command line.
    pub fn as_str(self) -> &'static str {
        match self {
            ReportKind::Edge => "edge_report",
            ReportKind::Stretch => "stretch_report",
            ReportKind::Density => "density_report",
            ReportKind::StretchDensity => "stretch_density_report",
        }
    }

    /// Prefix of image files written for this kind.
    pub fn file_prefix(self) -> &'static str {
        match self {
            ReportKind::Edge => "edge",
            ReportKind::Stretch => "stretch",
            ReportKind::Density => "density",
            ReportKind::StretchDensity => "stretch_density",
        }
    }

    pub fn x_label(self) -> &'static str {
        match self {
            ReportKind::Edge | ReportKind::Stretch => "number of vertices",
            ReportKind::Density | ReportKind::StretchDensity => "density",
        }
    }

    pub fn y_label(self) -> &'static str {
        match self {
            ReportKind::Edge | ReportKind::Density => "number of edges",
            ReportKind::Stretch | ReportKind::StretchDensity => "stretch factor",
        }
    }
}

impl FromStr for ReportKind {
    type Err = ReportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ReportKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| ReportError::UnsupportedReportKind(s.to_string()))
    }
}

impl fmt::Display for ReportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Output knobs
// ---------------------------------------------------------------------------

/// Which stretch measurement the stretch kinds plot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum StretchMetric {
    /// `max_stretch`
    #[default]
    Max,
    /// `average_stretch`, the only stretch field in older reports.
    Average,
}

impl StretchMetric {
    pub fn field(self) -> &'static str {
        match self {
            StretchMetric::Max => "max_stretch",
            StretchMetric::Average => "average_stretch",
        }
    }
}

/// Image format of saved charts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Png,
    Svg,
}

impl OutputFormat {
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Png => "png",
            OutputFormat::Svg => "svg",
        }
    }
}

// ---------------------------------------------------------------------------
// PipelineConfig
// ---------------------------------------------------------------------------

/// Everything a pipeline run needs, built once by the caller.
#[derive(Debug, Clone, PartialEq)]
pub struct PipelineConfig {
    /// Substring a report file name must contain.
    pub report_id: String,
    pub report_kind: ReportKind,
    /// Directory searched (non-recursively) for report files.
    pub reports_dir: PathBuf,
    /// Write image files instead of opening the viewer.
    pub save_files: bool,
    pub output_dir: PathBuf,
    pub format: OutputFormat,
    pub stretch_metric: StretchMetric,
    /// Also draw every bundle of the run on one combined chart.
    pub overlay: bool,
}

impl PipelineConfig {
    pub fn new(
        report_id: impl Into<String>,
        report_kind: ReportKind,
        reports_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            report_id: report_id.into(),
            report_kind,
            reports_dir: reports_dir.into(),
            save_files: false,
            output_dir: PathBuf::from("plots"),
            format: OutputFormat::default(),
            stretch_metric: StretchMetric::default(),
            overlay: false,
        }
    }
}
