use eframe::egui::Ui;
use egui_plot::{Legend, Line, LineStyle, Plot, PlotPoints, Points};

use crate::chart::chart_lines;
use crate::color::to_color32;
use crate::state::ViewerState;

// ---------------------------------------------------------------------------
// Comparison plot (central panel)
// ---------------------------------------------------------------------------

/// Render the measured/baseline plot in the central panel.
pub fn comparison_plot(ui: &mut Ui, state: &ViewerState) {
    let bundles = state.visible_bundles();
    if bundles.is_empty() {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("No reports loaded  (File → Open reports folder…)");
        });
        return;
    }

    let kind = state.config.report_kind;
    let y_label = if state.log_y {
        format!("log10({})", kind.y_label())
    } else {
        kind.y_label().to_string()
    };

    let lines = chart_lines(&bundles, state.show_baseline);

    Plot::new("comparison_plot")
        .legend(Legend::default())
        .x_axis_label(kind.x_label())
        .y_axis_label(y_label)
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            for line in &lines {
                let color = to_color32(line.color);

                // Non-positive values have no logarithm; drop them.
                let points: Vec<[f64; 2]> = line
                    .series
                    .points()
                    .filter_map(|(x, y)| {
                        if !state.log_y {
                            Some([x, y])
                        } else if y > 0.0 {
                            Some([x, y.log10()])
                        } else {
                            None
                        }
                    })
                    .collect();

                let mut plot_line = Line::new(PlotPoints::from(points.clone()))
                    .name(&line.label)
                    .color(color);
                if line.is_baseline {
                    plot_line = plot_line.style(LineStyle::dashed_loose()).width(1.5);
                } else {
                    plot_line = plot_line.width(2.0);
                    plot_ui.points(
                        Points::new(PlotPoints::from(points))
                            .name(&line.label)
                            .color(color)
                            .radius(3.0),
                    );
                }
                plot_ui.line(plot_line);
            }
        });
}
