use std::path::PathBuf;

use crate::config::PipelineConfig;
use crate::data::model::ComparisonBundle;
use crate::pipeline::ReportPipeline;
use crate::sink::CollectingSink;

// ---------------------------------------------------------------------------
// Viewer state
// ---------------------------------------------------------------------------

/// The full viewer state, independent of rendering.
pub struct ViewerState {
    /// Configuration the bundles were produced with; reused on reload.
    pub config: PipelineConfig,

    /// Bundles of the last run, in emit order.
    pub bundles: Vec<ComparisonBundle>,

    /// Bundle drawn when `overlay` is off.
    pub selected: Option<usize>,

    /// Draw every bundle on shared axes.
    pub overlay: bool,

    pub show_baseline: bool,

    /// Plot `log10(y)` instead of `y`.
    pub log_y: bool,

    /// Files skipped by the last run, as display strings.
    pub failures: Vec<String>,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl ViewerState {
    pub fn new(config: PipelineConfig) -> Self {
        Self {
            overlay: config.overlay,
            config,
            bundles: Vec::new(),
            selected: None,
            show_baseline: true,
            log_y: false,
            failures: Vec::new(),
            status_message: None,
        }
    }

    /// Ingest the outcome of a pipeline run.
    pub fn set_bundles(&mut self, bundles: Vec<ComparisonBundle>, failures: Vec<String>) {
        self.selected = if bundles.is_empty() { None } else { Some(0) };
        self.bundles = bundles;
        self.failures = failures;
        self.status_message = None;
    }

    /// Re-run the pipeline against another reports directory.
    pub fn reload(&mut self, reports_dir: PathBuf) {
        self.config.reports_dir = reports_dir;
        let mut sink = CollectingSink::default();
        let result = ReportPipeline::new(&self.config).run(&mut sink);
        match result {
            Ok(summary) => {
                self.set_bundles(sink.into_bundles(), summary.failure_lines());
            }
            Err(e) => {
                log::error!("Reload failed: {e}");
                self.status_message = Some(format!("Error: {e}"));
            }
        }
    }

    /// Bundles the plot should draw right now.
    pub fn visible_bundles(&self) -> Vec<&ComparisonBundle> {
        if self.overlay {
            return self.bundles.iter().collect();
        }
        self.selected
            .and_then(|i| self.bundles.get(i))
            .into_iter()
            .collect()
    }

    pub fn select(&mut self, index: usize) {
        if index < self.bundles.len() {
            self.selected = Some(index);
        }
    }
}
