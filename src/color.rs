use std::collections::BTreeMap;

use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

// ---------------------------------------------------------------------------
// Color palette generator
// ---------------------------------------------------------------------------

/// The source dashboard's neutral point colour (#A9A9A9).
pub const POINT_GREY: Color32 = Color32::from_rgb(0xA9, 0xA9, 0xA9);

/// Generates `n` visually distinct colours using evenly spaced hues.
pub fn generate_palette(n: usize) -> Vec<Color32> {
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            let hue = (i as f32 / n as f32) * 360.0;
            let hsl = Hsl::new(hue, 0.75, 0.55);
            let rgb: Srgb = hsl.into_color();
            Color32::from_rgb(
                (rgb.red * 255.0) as u8,
                (rgb.green * 255.0) as u8,
                (rgb.blue * 255.0) as u8,
            )
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Color mapping: month label → Color32
// ---------------------------------------------------------------------------

/// Maps each distinct month to a distinct colour for the optional
/// colour-by-month scatter mode.
#[derive(Debug, Clone)]
pub struct MonthColorMap {
    mapping: BTreeMap<String, Color32>,
    default_color: Color32,
}

impl MonthColorMap {
    /// Build a colour map over the dataset's distinct months.
    pub fn new(months: &[String]) -> Self {
        let palette = generate_palette(months.len());
        let mapping: BTreeMap<String, Color32> = months
            .iter()
            .cloned()
            .zip(palette.into_iter())
            .collect();

        MonthColorMap {
            mapping,
            default_color: POINT_GREY,
        }
    }

    /// Look up the colour for a given month.
    pub fn color_for(&self, month: &str) -> Color32 {
        self.mapping
            .get(month)
            .copied()
            .unwrap_or(self.default_color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distinct_months_get_distinct_colors() {
        let months = ["Jan".to_string(), "Feb".to_string(), "Mar".to_string()];
        let cm = MonthColorMap::new(&months);
        let colors: Vec<_> = months.iter().map(|m| cm.color_for(m)).collect();
        assert_ne!(colors[0], colors[1]);
        assert_ne!(colors[1], colors[2]);
    }

    #[test]
    fn unknown_month_falls_back_to_grey() {
        let cm = MonthColorMap::new(&["Jan".to_string()]);
        assert_eq!(cm.color_for("Dec"), POINT_GREY);
    }
}
