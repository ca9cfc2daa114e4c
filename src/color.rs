use std::collections::{BTreeMap, BTreeSet};

use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

// ---------------------------------------------------------------------------
// KPI card accents
// ---------------------------------------------------------------------------

pub const ACCENT_BLUE: Color32 = Color32::from_rgb(0x39, 0x6a, 0xfc);
pub const ACCENT_GREEN: Color32 = Color32::from_rgb(0x11, 0x99, 0x8e);
pub const ACCENT_ORANGE: Color32 = Color32::from_rgb(0xf7, 0x97, 0x1e);
pub const ACCENT_RED: Color32 = Color32::from_rgb(0xff, 0x41, 0x6c);
pub const ACCENT_PURPLE: Color32 = Color32::from_rgb(0x66, 0x7e, 0xea);

// ---------------------------------------------------------------------------
// Category palette
// ---------------------------------------------------------------------------

/// `n` visually distinct colours on evenly spaced hues, starting at blue.
/// Lightness alternates so neighbouring bars stay apart even for large `n`.
pub fn category_palette(n: usize) -> Vec<Color32> {
    (0..n)
        .map(|i| {
            let hue = 220.0 + (i as f32 / n as f32) * 360.0;
            let lightness = if i % 2 == 0 { 0.55 } else { 0.65 };
            let rgb: Srgb = Hsl::new(hue, 0.70, lightness).into_color();
            Color32::from_rgb(
                (rgb.red.clamp(0.0, 1.0) * 255.0) as u8,
                (rgb.green.clamp(0.0, 1.0) * 255.0) as u8,
                (rgb.blue.clamp(0.0, 1.0) * 255.0) as u8,
            )
        })
        .collect()
}

/// Stable colour per category value (platform, content type, ...).
#[derive(Debug, Clone)]
pub struct CategoryColors {
    mapping: BTreeMap<String, Color32>,
    default_color: Color32,
}

impl Default for CategoryColors {
    fn default() -> Self {
        CategoryColors {
            mapping: BTreeMap::new(),
            default_color: Color32::GRAY,
        }
    }
}

impl CategoryColors {
    /// Assign colours to every value of a dimension of the full dataset, so
    /// a value keeps its colour when others are filtered out.
    pub fn new(values: &BTreeSet<String>) -> Self {
        let mapping = values
            .iter()
            .cloned()
            .zip(category_palette(values.len()))
            .collect();
        CategoryColors {
            mapping,
            ..Default::default()
        }
    }

    pub fn color_for(&self, value: &str) -> Color32 {
        self.mapping.get(value).copied().unwrap_or(self.default_color)
    }
}
