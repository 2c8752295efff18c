use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};

use crate::color::{series_colors, to_color32};
use crate::state::ViewerState;

// ---------------------------------------------------------------------------
// Left side panel – report list
// ---------------------------------------------------------------------------

/// Render the left panel listing every loaded report.
pub fn side_panel(ui: &mut Ui, state: &mut ViewerState) {
    ui.heading("Reports");
    ui.label(
        RichText::new(format!(
            "{} · *{}*",
            state.config.report_kind, state.config.report_id
        ))
        .weak(),
    );
    ui.separator();

    if state.bundles.is_empty() {
        ui.label("No reports loaded.");
    }

    let colors = series_colors(state.bundles.len());
    let mut clicked = None;

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            for (i, (bundle, color)) in state.bundles.iter().zip(&colors).enumerate() {
                // In overlay mode every entry is drawn, so show its colour.
                let mut text = RichText::new(&bundle.label);
                if state.overlay {
                    text = text.color(to_color32(color.measured));
                }
                let selected = !state.overlay && state.selected == Some(i);
                if ui
                    .selectable_label(selected, text)
                    .on_hover_text(bundle.output_id.as_str())
                    .clicked()
                {
                    clicked = Some(i);
                }
            }

            if !state.failures.is_empty() {
                ui.separator();
                egui::CollapsingHeader::new(
                    RichText::new(format!("Skipped ({})", state.failures.len())).strong(),
                )
                .default_open(false)
                .show(ui, |ui: &mut Ui| {
                    for failure in &state.failures {
                        ui.label(RichText::new(failure).color(Color32::RED).small());
                    }
                });
            }
        });

    if let Some(i) = clicked {
        state.select(i);
        state.overlay = false;
    }
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut ViewerState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open reports folder…").clicked() {
                open_folder_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        ui.label(format!(
            "{} report(s) loaded, {} skipped",
            state.bundles.len(),
            state.failures.len()
        ));

        ui.separator();

        if ui.selectable_label(state.overlay, "Overlay").clicked() {
            state.overlay = !state.overlay;
        }
        if ui
            .selectable_label(state.show_baseline, "Baseline")
            .clicked()
        {
            state.show_baseline = !state.show_baseline;
        }
        if ui.selectable_label(state.log_y, "Log y").clicked() {
            state.log_y = !state.log_y;
        }

        if let Some(msg) = &state.status_message {
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// Folder dialog
// ---------------------------------------------------------------------------

pub fn open_folder_dialog(state: &mut ViewerState) {
    let folder = rfd::FileDialog::new()
        .set_title("Open benchmark reports folder")
        .set_directory(&state.config.reports_dir)
        .pick_folder();

    if let Some(dir) = folder {
        log::info!("Reloading reports from {}", dir.display());
        state.reload(dir);
    }
}
