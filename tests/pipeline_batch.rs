use std::fs;
use std::path::Path;

use serde_json::{json, Value};
use spanner_plot::config::{PipelineConfig, ReportKind, StretchMetric};
use spanner_plot::data::model::{ComparisonBundle, SpannerKind};
use spanner_plot::pipeline::{OutputSink, ReportPipeline};
use spanner_plot::sink::CollectingSink;
use spanner_plot::ReportError;
use tempfile::tempdir;

fn write(dir: &Path, name: &str, body: &Value) {
    fs::write(dir.join(name), serde_json::to_string(body).expect("json")).expect("write report");
}

fn run(config: &PipelineConfig) -> (Vec<ComparisonBundle>, spanner_plot::RunSummary) {
    let mut sink = CollectingSink::default();
    let summary = ReportPipeline::new(config).run(&mut sink).expect("run");
    (sink.into_bundles(), summary)
}

#[test]
fn edge_report_against_two_k_bound() {
    let dir = tempdir().expect("tempdir");
    write(
        dir.path(),
        "2k_Agraph_report.json",
        &json!([
            {"size": 10, "k": 2, "density": 0.5, "average_spanner_size": 25},
            {"size": 20, "k": 2, "density": 0.5, "average_spanner_size": 60}
        ]),
    );

    let config = PipelineConfig::new("graph_report", ReportKind::Edge, dir.path());
    let (bundles, summary) = run(&config);

    assert_eq!(summary.emitted, 1);
    let b = &bundles[0];
    assert_eq!(b.measured.x, vec![10.0, 20.0]);
    assert_eq!(b.measured.y, vec![25.0, 60.0]);
    let baseline = b.baseline.as_ref().expect("baseline");
    assert_eq!(baseline.x, vec![10.0, 20.0]);
    assert!((baseline.y[0] - 63.25).abs() < 0.01);
    assert!((baseline.y[1] - 178.89).abs() < 0.01);
    assert_eq!(b.label, "2k - 1 Spanner, k = 2, density = 0.5");
}

#[test]
fn negative_k_is_three_spanner_with_k_two_baseline() {
    let dir = tempdir().expect("tempdir");
    write(
        dir.path(),
        "3_spanner_Bgraph_report.json",
        &json!([
            {"size": 16, "k": -1, "density": 0.4, "average_spanner_size": 70},
            {"size": 25, "k": -1, "density": 0.4, "average_spanner_size": 140}
        ]),
    );

    let config = PipelineConfig::new("3_spanner", ReportKind::Edge, dir.path());
    let (bundles, _) = run(&config);

    let b = &bundles[0];
    assert_eq!(b.descriptor.kind, SpannerKind::ThreeSpanner);
    assert!(b.label.starts_with("Three - Spanner"));
    let baseline = b.baseline.as_ref().expect("baseline");
    assert!((baseline.y[0] - 128.0).abs() < 1e-9);
    assert!((baseline.y[1] - 250.0).abs() < 1e-9);
    assert_eq!(b.output_id, "edgegraph_-1_4");
}

#[test]
fn object_report_is_skipped_and_batch_continues() {
    let dir = tempdir().expect("tempdir");
    write(
        dir.path(),
        "a_report.json",
        &json!([{"size": 10, "k": 3, "density": 0.2, "max_stretch": 2.0}]),
    );
    write(
        dir.path(),
        "b_report.json",
        &json!({"size": 10, "k": 3, "density": 0.2, "max_stretch": 2.0}),
    );
    write(
        dir.path(),
        "c_report.json",
        &json!([{"size": 12, "k": 3, "density": 0.2, "max_stretch": 2.2}]),
    );

    let config = PipelineConfig::new("report", ReportKind::Stretch, dir.path());
    let (bundles, summary) = run(&config);

    assert_eq!(bundles.len(), 2);
    assert_eq!(summary.failures.len(), 1);
    let (path, err) = &summary.failures[0];
    assert!(path.ends_with("b_report.json"));
    assert!(matches!(err, ReportError::Malformed { .. }));
    assert_eq!(bundles[1].measured.y, vec![2.2]);
}

#[test]
fn emits_one_bundle_per_good_file() {
    let dir = tempdir().expect("tempdir");
    let good = json!([{"size": 10, "k": 2, "density": 0.5, "average_spanner_size": 20}]);
    for i in 0..5 {
        write(dir.path(), &format!("run{i}_graph.json"), &good);
    }
    fs::write(dir.path().join("run5_graph.json"), "not json").expect("write");
    write(dir.path(), "run6_graph.json", &json!([]));
    write(
        dir.path(),
        "run7_graph.json",
        &json!([{"size": 10, "k": 2, "density": 0.5}]),
    );
    write(dir.path(), "unrelated.json", &good);

    let config = PipelineConfig::new("_graph", ReportKind::Edge, dir.path());
    let (bundles, summary) = run(&config);

    assert_eq!(summary.emitted, 5);
    assert_eq!(bundles.len(), 5);
    assert_eq!(summary.failures.len(), 3);
    assert_eq!(summary.failure_lines().len(), 3);

    let kinds: Vec<_> = summary
        .failures
        .iter()
        .map(|(_, e)| match e {
            ReportError::Malformed { .. } => "malformed",
            ReportError::InvalidParameter(_) => "invalid",
            ReportError::MissingField { .. } => "missing",
            _ => "other",
        })
        .collect();
    assert_eq!(kinds, vec!["malformed", "invalid", "missing"]);
}

#[test]
fn density_kinds_use_density_axis() {
    let dir = tempdir().expect("tempdir");
    write(
        dir.path(),
        "2k_k3_n100_DensityReport.json",
        &json!([
            {"size": 100, "k": 3, "density": 0.1, "average_spanner_size": 300, "average_stretch": 1.3, "max_stretch": 2.1},
            {"size": 100, "k": 3, "density": 0.2, "average_spanner_size": 420, "average_stretch": 1.4, "max_stretch": 2.6}
        ]),
    );

    let config = PipelineConfig::new("DensityReport", ReportKind::Density, dir.path());
    let (bundles, _) = run(&config);
    assert_eq!(bundles[0].measured.x, vec![0.1, 0.2]);
    assert!(bundles[0].baseline.is_some());

    let mut config = PipelineConfig::new("DensityReport", ReportKind::StretchDensity, dir.path());
    config.stretch_metric = StretchMetric::Average;
    let (bundles, _) = run(&config);
    assert_eq!(bundles[0].measured.y, vec![1.3, 1.4]);
    assert!(bundles[0].baseline.is_none());
}

#[test]
fn missing_reports_dir_aborts_run() {
    let dir = tempdir().expect("tempdir");
    let config = PipelineConfig::new("x", ReportKind::Edge, dir.path().join("absent"));
    let mut sink = CollectingSink::default();
    let err = ReportPipeline::new(&config).run(&mut sink).unwrap_err();
    assert!(matches!(err, ReportError::NotFound(_)));
}

struct RejectingSink {
    accepted: usize,
}

impl OutputSink for RejectingSink {
    fn emit(&mut self, bundle: ComparisonBundle) -> Result<(), ReportError> {
        if bundle.descriptor.kind == SpannerKind::ThreeSpanner {
            return Err(ReportError::Render {
                output_id: bundle.output_id,
                reason: "refused".to_string(),
            });
        }
        self.accepted += 1;
        Ok(())
    }
}

#[test]
fn sink_failures_are_counted_per_file() {
    let dir = tempdir().expect("tempdir");
    write(
        dir.path(),
        "a.json",
        &json!([{"size": 10, "k": -1, "density": 0.5, "max_stretch": 2.0}]),
    );
    write(
        dir.path(),
        "b.json",
        &json!([{"size": 10, "k": 2, "density": 0.5, "max_stretch": 2.0}]),
    );

    let config = PipelineConfig::new(".json", ReportKind::Stretch, dir.path());
    let mut sink = RejectingSink { accepted: 0 };
    let summary = ReportPipeline::new(&config).run(&mut sink).expect("run");
    assert_eq!(summary.emitted, 1);
    assert_eq!(sink.accepted, 1);
    assert!(matches!(summary.failures[0].1, ReportError::Render { .. }));
}

#[test]
fn unsupported_report_type_is_a_config_error() {
    let err = "latency_report".parse::<ReportKind>().unwrap_err();
    assert!(err.to_string().contains("latency_report"));
}
