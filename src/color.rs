use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

/// Plain 8-bit RGB, shared by the egui viewer and the image renderer.
pub type Rgb = (u8, u8, u8);

// ---------------------------------------------------------------------------
// Color palette generator
// ---------------------------------------------------------------------------

/// Generates `n` visually distinct colours using evenly spaced hues.
pub fn generate_palette(n: usize, lightness: f32) -> Vec<Rgb> {
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            let hue = (i as f32 / n as f32) * 360.0;
            let hsl = Hsl::new(hue, 0.75, lightness);
            let rgb: Srgb = hsl.into_color();
            (
                (rgb.red * 255.0) as u8,
                (rgb.green * 255.0) as u8,
                (rgb.blue * 255.0) as u8,
            )
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Measured / baseline pairs
// ---------------------------------------------------------------------------

/// Colours of one bundle: the baseline is a darker shade of the measured hue
/// so pairs stay recognisable on overlay charts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeriesColors {
    pub measured: Rgb,
    pub baseline: Rgb,
}

pub fn series_colors(n: usize) -> Vec<SeriesColors> {
    generate_palette(n, 0.55)
        .into_iter()
        .zip(generate_palette(n, 0.30))
        .map(|(measured, baseline)| SeriesColors { measured, baseline })
        .collect()
}

pub fn to_color32((r, g, b): Rgb) -> Color32 {
    Color32::from_rgb(r, g, b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_has_requested_size() {
        assert!(generate_palette(0, 0.5).is_empty());
        assert_eq!(series_colors(5).len(), 5);
    }

    #[test]
    fn baseline_is_distinct_from_measured() {
        for c in series_colors(4) {
            assert_ne!(c.measured, c.baseline);
        }
    }
}
