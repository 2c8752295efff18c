use std::collections::HashMap;
use std::path::PathBuf;

use plotters::coord::Shift;
use plotters::prelude::*;

use crate::chart::ChartSpec;
use crate::config::{OutputFormat, PipelineConfig, ReportKind};
use crate::data::model::ComparisonBundle;
use crate::error::ReportError;
use crate::pipeline::OutputSink;

// ---------------------------------------------------------------------------
// CollectingSink – keeps bundles in memory (viewer, tests)
// ---------------------------------------------------------------------------

#[derive(Debug, Default)]
pub struct CollectingSink {
    pub bundles: Vec<ComparisonBundle>,
}

impl CollectingSink {
    pub fn into_bundles(self) -> Vec<ComparisonBundle> {
        self.bundles
    }
}

impl OutputSink for CollectingSink {
    fn emit(&mut self, bundle: ComparisonBundle) -> Result<(), ReportError> {
        self.bundles.push(bundle);
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// ImageSink – one image file per bundle
// ---------------------------------------------------------------------------

const IMAGE_SIZE: (u32, u32) = (1024, 768);

/// Writes `{output_dir}/{kind}_{output_id}.{ext}` for every bundle, and with
/// `overlay` a combined `{kind}_overlay.{ext}` once the run finishes.
///
/// Reports sharing an `output_id` (two algorithm versions with the same `k`
/// and density) get `_2`, `_3`, ... appended instead of overwriting.
pub struct ImageSink {
    output_dir: PathBuf,
    format: OutputFormat,
    overlay: bool,
    pending: Vec<ComparisonBundle>,
    written: Vec<PathBuf>,
    stems: HashMap<String, usize>,
}

impl ImageSink {
    pub fn new(config: &PipelineConfig) -> Self {
        Self {
            output_dir: config.output_dir.clone(),
            format: config.format,
            overlay: config.overlay,
            pending: Vec::new(),
            written: Vec::new(),
            stems: HashMap::new(),
        }
    }

    /// Files written so far.
    pub fn written(&self) -> &[PathBuf] {
        &self.written
    }

    pub fn output_path(&self, stem: &str) -> PathBuf {
        self.output_dir
            .join(format!("{stem}.{}", self.format.extension()))
    }

    /// `stem` the first time it is seen, `{stem}_{n}` on the n-th repeat.
    fn claim_stem(&mut self, stem: &str) -> String {
        let seen = self.stems.entry(stem.to_string()).or_insert(0);
        *seen += 1;
        if *seen == 1 {
            return stem.to_string();
        }
        let unique = format!("{stem}_{seen}");
        log::warn!("{stem} already written in this run, saving as {unique}");
        unique
    }

    fn render(&mut self, stem: &str, spec: &ChartSpec) -> Result<(), ReportError> {
        let stem = self.claim_stem(stem);
        std::fs::create_dir_all(&self.output_dir).map_err(|source| ReportError::Io {
            path: self.output_dir.clone(),
            source,
        })?;
        let path = self.output_path(&stem);

        let drawn = match self.format {
            OutputFormat::Png => {
                let root = BitMapBackend::new(&path, IMAGE_SIZE).into_drawing_area();
                draw_chart(&root, spec)
            }
            OutputFormat::Svg => {
                let root = SVGBackend::new(&path, IMAGE_SIZE).into_drawing_area();
                draw_chart(&root, spec)
            }
        };
        drawn.map_err(|reason| ReportError::Render {
            output_id: stem,
            reason,
        })?;

        log::info!("Wrote {}", path.display());
        self.written.push(path);
        Ok(())
    }
}

impl OutputSink for ImageSink {
    fn emit(&mut self, bundle: ComparisonBundle) -> Result<(), ReportError> {
        self.render(&bundle.file_stem(), &ChartSpec::single(&bundle))?;
        if self.overlay {
            self.pending.push(bundle);
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<(), ReportError> {
        let pending = std::mem::take(&mut self.pending);
        for kind in ReportKind::ALL {
            let group: Vec<&ComparisonBundle> = pending.iter().filter(|b| b.kind == kind).collect();
            if group.is_empty() {
                continue;
            }
            let stem = format!("{}_overlay", kind.file_prefix());
            self.render(&stem, &ChartSpec::overlay(kind, &group))?;
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Drawing
// ---------------------------------------------------------------------------

fn draw_chart<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    spec: &ChartSpec,
) -> Result<(), String> {
    let Some(((x0, x1), (y0, y1))) = spec.bounds() else {
        return Err("nothing to draw".to_string());
    };

    root.fill(&WHITE).map_err(|e| e.to_string())?;
    let mut chart = ChartBuilder::on(root)
        .caption(&spec.title, ("sans-serif", 22))
        .margin(15)
        .x_label_area_size(45)
        .y_label_area_size(70)
        .build_cartesian_2d(x0..x1, y0..y1)
        .map_err(|e| e.to_string())?;

    chart
        .configure_mesh()
        .x_desc(spec.x_label)
        .y_desc(spec.y_label)
        .draw()
        .map_err(|e| e.to_string())?;

    for line in &spec.lines {
        let (r, g, b) = line.color;
        let color = RGBColor(r, g, b);
        let width = if line.is_baseline { 1 } else { 2 };

        chart
            .draw_series(LineSeries::new(line.series.points(), color.stroke_width(width)))
            .map_err(|e| e.to_string())?
            .label(line.label.clone())
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(width)));

        if !line.is_baseline {
            chart
                .draw_series(line.series.points().map(|p| Circle::new(p, 3, color.filled())))
                .map_err(|e| e.to_string())?;
        }
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperLeft)
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()
        .map_err(|e| e.to_string())?;

    root.present().map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::StretchMetric;
    use crate::data::model::Report;
    use crate::pipeline::build_bundle;
    use serde_json::json;

    #[test]
    fn collecting_sink_keeps_emit_order() {
        let mut sink = CollectingSink::default();
        for k in [3, -1, 2] {
            let records = vec![json!({"size": 10, "k": k, "density": 0.5, "average_spanner_size": 20})
                .as_object()
                .unwrap()
                .clone()];
            let bundle = build_bundle(&Report::new(records), ReportKind::Edge, StretchMetric::Max).unwrap();
            sink.emit(bundle).unwrap();
        }
        let ids: Vec<_> = sink.into_bundles().into_iter().map(|b| b.output_id).collect();
        assert_eq!(ids, vec!["edgegraph_3_5", "edgegraph_-1_5", "edgegraph_2_5"]);
    }

    #[test]
    fn image_paths_use_kind_prefix_and_format() {
        let mut config = PipelineConfig::new("x", ReportKind::Density, "reports");
        config.output_dir = PathBuf::from("out");
        config.format = OutputFormat::Svg;
        let sink = ImageSink::new(&config);
        let path = sink.output_path("density_edgegraph_2_5");
        assert_eq!(path, PathBuf::from("out").join("density_edgegraph_2_5.svg"));
    }

    #[test]
    fn repeated_stems_get_a_counter() {
        let mut sink = ImageSink::new(&PipelineConfig::new("x", ReportKind::Edge, "reports"));
        assert_eq!(sink.claim_stem("edge_edgegraph_2_5"), "edge_edgegraph_2_5");
        assert_eq!(sink.claim_stem("edge_edgegraph_2_5"), "edge_edgegraph_2_5_2");
        assert_eq!(sink.claim_stem("edge_edgegraph_3_5"), "edge_edgegraph_3_5");
        assert_eq!(sink.claim_stem("edge_edgegraph_2_5"), "edge_edgegraph_2_5_3");
    }
}
