use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use clap::Parser;

use spanner_plot::app::run_viewer;
use spanner_plot::config::{OutputFormat, PipelineConfig, ReportKind, StretchMetric};
use spanner_plot::pipeline::ReportPipeline;
use spanner_plot::sink::{CollectingSink, ImageSink};
use spanner_plot::state::ViewerState;

/// Plot spanner benchmark reports against their theoretical bounds.
#[derive(Debug, Parser)]
#[command(name = "spanner-plot", version, about)]
struct Cli {
    /// Only report files whose name contains this substring are used.
    reportid: String,

    /// edge_report, stretch_report, density_report or stretch_density_report.
    report_type: String,

    /// Directory holding the JSON reports.
    reports_dir: PathBuf,

    /// Write image files instead of opening the viewer.
    #[arg(long = "save_files")]
    save_files: bool,

    /// Where image files are written.
    #[arg(long, default_value = "plots")]
    output_dir: PathBuf,

    #[arg(long, value_enum, default_value_t = OutputFormat::Png)]
    format: OutputFormat,

    /// Stretch field plotted by the stretch report types.
    #[arg(long, value_enum, default_value_t = StretchMetric::Max)]
    stretch_metric: StretchMetric,

    /// Also draw all reports on one chart.
    #[arg(long)]
    overlay: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    // A bad report type is reported but is not a failure of the tool.
    let report_kind = match cli.report_type.parse::<ReportKind>() {
        Ok(kind) => kind,
        Err(e) => {
            log::error!("{e}");
            eprintln!("error: {e}");
            return Ok(());
        }
    };

    let config = PipelineConfig {
        report_id: cli.reportid,
        report_kind,
        reports_dir: cli.reports_dir,
        save_files: cli.save_files,
        output_dir: cli.output_dir,
        format: cli.format,
        stretch_metric: cli.stretch_metric,
        overlay: cli.overlay,
    };
    let pipeline = ReportPipeline::new(&config);

    if config.save_files {
        let mut sink = ImageSink::new(&config);
        let summary = pipeline
            .run(&mut sink)
            .with_context(|| format!("processing reports in {}", config.reports_dir.display()))?;
        log::info!(
            "{} image(s) written to {}",
            sink.written().len(),
            config.output_dir.display()
        );
        if let Some(e) = summary.finish_error {
            return Err(e).context("writing overlay chart");
        }
        return Ok(());
    }

    let mut sink = CollectingSink::default();
    let summary = pipeline
        .run(&mut sink)
        .with_context(|| format!("processing reports in {}", config.reports_dir.display()))?;

    let mut state = ViewerState::new(config.clone());
    state.set_bundles(sink.into_bundles(), summary.failure_lines());
    run_viewer(state).map_err(|e| anyhow!("viewer: {e}"))
}
