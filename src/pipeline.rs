use std::path::{Path, PathBuf};

use crate::analysis::asymptotic::{
    edge_bound_label, effective_k, stretch_bound_label, theoretical_edge_bound,
    theoretical_stretch_bound,
};
use crate::analysis::classify::{classify, label, output_id};
use crate::config::{BaselineKind, PipelineConfig, ReportKind, StretchMetric};
use crate::data::loader;
use crate::data::model::{ComparisonBundle, Report, Series};
use crate::data::series::extract;
use crate::error::ReportError;

// ---------------------------------------------------------------------------
// OutputSink – whoever draws the bundles
// ---------------------------------------------------------------------------

/// Receives finished bundles, one per report file.
pub trait OutputSink {
    fn emit(&mut self, bundle: ComparisonBundle) -> Result<(), ReportError>;

    /// Called once after the last file of a run.
    fn finish(&mut self) -> Result<(), ReportError> {
        Ok(())
    }
}

/// Outcome of a batch run.
#[derive(Debug, Default)]
pub struct RunSummary {
    /// Bundles the sink accepted.
    pub emitted: usize,
    /// Files that were skipped, with the reason.
    pub failures: Vec<(PathBuf, ReportError)>,
    /// Failure of the sink's final step (the overlay chart), if any.
    pub finish_error: Option<ReportError>,
}

impl RunSummary {
    /// One `path: reason` line per skipped file.
    pub fn failure_lines(&self) -> Vec<String> {
        self.failures
            .iter()
            .map(|(path, e)| format!("{}: {e}", path.display()))
            .collect()
    }
}

// ---------------------------------------------------------------------------
// ReportPipeline
// ---------------------------------------------------------------------------

/// Turns matching report files into comparison bundles.
pub struct ReportPipeline<'a> {
    config: &'a PipelineConfig,
}

impl<'a> ReportPipeline<'a> {
    pub fn new(config: &'a PipelineConfig) -> Self {
        Self { config }
    }

    /// Process every file matching `{reports_dir}/*{report_id}*`.
    ///
    /// Only a failure to enumerate the directory is returned as an error;
    /// per-file failures and a failing `finish` are logged and collected in
    /// the summary.
    pub fn run(&self, sink: &mut dyn OutputSink) -> Result<RunSummary, ReportError> {
        let files = loader::discover(&self.config.reports_dir, &self.config.report_id)?;
        if files.is_empty() {
            log::warn!(
                "No report matches '*{}*' in {}",
                self.config.report_id,
                self.config.reports_dir.display()
            );
        }
        self.run_files(&files, sink)
    }

    /// Process an explicit list of files, in order.
    pub fn run_files(
        &self,
        files: &[PathBuf],
        sink: &mut dyn OutputSink,
    ) -> Result<RunSummary, ReportError> {
        let mut summary = RunSummary::default();

        for path in files {
            match self.process(path).and_then(|bundle| {
                log::info!("{}: {}", path.display(), bundle.label);
                sink.emit(bundle)
            }) {
                Ok(()) => summary.emitted += 1,
                Err(e) => {
                    log::error!("Skipping {}: {e}", path.display());
                    summary.failures.push((path.clone(), e));
                }
            }
        }

        if let Err(e) = sink.finish() {
            log::error!("Finishing output failed: {e}");
            summary.finish_error = Some(e);
        }
        log::info!(
            "{} bundle(s) emitted, {} file(s) skipped",
            summary.emitted,
            summary.failures.len()
        );
        Ok(summary)
    }

    /// Load, classify, and project one file.
    pub fn process(&self, path: &Path) -> Result<ComparisonBundle, ReportError> {
        let report = loader::load(path)?;
        build_bundle(&report, self.config.report_kind, self.config.stretch_metric)
    }
}

/// Build the bundle for an already loaded report.
pub fn build_bundle(
    report: &Report,
    kind: ReportKind,
    metric: StretchMetric,
) -> Result<ComparisonBundle, ReportError> {
    let descriptor = classify(report)?;
    let mapping = kind.mapping(metric);
    let measured = extract(report, mapping.x_field, mapping.y_field)?;

    let (baseline, baseline_label) = match mapping.baseline {
        BaselineKind::EdgeBound => {
            let k = effective_k(descriptor.kind);
            let ys = theoretical_edge_bound(&measured.x, k)?;
            let var = if mapping.x_field == "size" { "n" } else { "d" };
            (
                Some(Series::new(measured.x.clone(), ys)),
                Some(edge_bound_label(k, var)),
            )
        }
        BaselineKind::StretchBound => {
            let ys = theoretical_stretch_bound(&measured.x);
            (
                Some(Series::new(measured.x.clone(), ys)),
                Some(stretch_bound_label()),
            )
        }
        BaselineKind::None => (None, None),
    };

    Ok(ComparisonBundle {
        kind,
        descriptor,
        measured,
        baseline,
        label: label(&descriptor),
        baseline_label,
        output_id: output_id(&descriptor),
    })
}
