use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

use crate::config::CHANNEL_COUNT;

// ---------------------------------------------------------------------------
// Channel colors
// ---------------------------------------------------------------------------

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

/// One fixed colour per geophone trace, matching channel order.
pub fn channel_colors() -> Vec<Color32> {
    generate_palette(CHANNEL_COUNT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_color_per_channel() {
        let colors = channel_colors();
        assert_eq!(colors.len(), CHANNEL_COUNT);
    }

    #[test]
    fn palette_colors_are_distinct() {
        let colors = generate_palette(CHANNEL_COUNT);
        for (i, a) in colors.iter().enumerate() {
            for b in &colors[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
