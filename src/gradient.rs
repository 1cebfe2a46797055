//! Linear gradient definitions.
//!
//! Builds SVG-style linear gradients from color stops. The only gradient
//! the avatar scene needs is the fixed rainbow used for rainbow hair.

use core::fmt::Write;

use crate::color::Rgba8;
use crate::palette::RAINBOW_COLORS;

/// Color stop for gradient definition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorStop {
    pub offset: f64,
    pub color: Rgba8,
}

impl ColorStop {
    /// Offsets are clamped to `[0, 1]`.
    pub fn new(offset: f64, color: Rgba8) -> Self {
        Self {
            offset: offset.clamp(0.0, 1.0),
            color,
        }
    }
}

/// Horizontal linear gradient spanning the painted element's bounding box.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearGradient {
    id: String,
    stops: Vec<ColorStop>,
}

impl LinearGradient {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            stops: Vec::new(),
        }
    }

    /// The fixed 7-stop rainbow: red through blue-violet at equal spacing.
    pub fn rainbow(id: impl Into<String>) -> Self {
        let mut g = Self::new(id);
        let last = (RAINBOW_COLORS.len() - 1) as f64;
        for (i, color) in RAINBOW_COLORS.iter().enumerate() {
            g.add_color(i as f64 / last, *color);
        }
        g
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn stops(&self) -> &[ColorStop] {
        &self.stops
    }

    /// Append a stop. Stops are kept sorted by offset; equal offsets keep
    /// insertion order.
    pub fn add_color(&mut self, offset: f64, color: Rgba8) {
        let stop = ColorStop::new(offset, color);
        let pos = self.stops.partition_point(|s| s.offset <= stop.offset);
        self.stops.insert(pos, stop);
    }

    /// `url(#id)` reference for `fill` / `stroke` attributes.
    pub fn paint_ref(&self) -> String {
        format!("url(#{})", self.id)
    }

    /// `<linearGradient>` element for a `<defs>` block.
    pub fn to_svg(&self) -> String {
        let mut out = format!(
            r#"<linearGradient id="{}" x1="0%" y1="0%" x2="100%" y2="0%">"#,
            self.id
        );
        for stop in &self.stops {
            let _ = write!(
                out,
                r#"<stop offset="{}%" stop-color="{}"/>"#,
                percent(stop.offset),
                stop.color
            );
        }
        out.push_str("</linearGradient>");
        out
    }
}

/// Offset as a percentage truncated to two decimals: `1/6` is `16.66`.
fn percent(offset: f64) -> f64 {
    (offset * 10_000.0 + 1e-6).floor() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rainbow_stops() {
        let g = LinearGradient::rainbow("rainbow");
        assert_eq!(g.stops().len(), 7);
        assert_eq!(g.stops()[0].offset, 0.0);
        assert_eq!(g.stops()[6].offset, 1.0);
        assert_eq!(g.stops()[0].color, Rgba8::from_rgb24(0xFF0000));
        assert_eq!(g.stops()[6].color, Rgba8::from_rgb24(0x8A2BE2));
        assert!((g.stops()[1].offset - 1.0 / 6.0).abs() < 1e-12);
    }

    #[test]
    fn test_add_color_sorted_and_clamped() {
        let mut g = LinearGradient::new("g");
        g.add_color(0.8, Rgba8::WHITE);
        g.add_color(-1.0, Rgba8::BLACK);
        g.add_color(0.5, Rgba8::from_rgb24(0x808080));
        let offsets: Vec<f64> = g.stops().iter().map(|s| s.offset).collect();
        assert_eq!(offsets, vec![0.0, 0.5, 0.8]);
    }

    #[test]
    fn test_to_svg() {
        let mut g = LinearGradient::new("hair");
        g.add_color(0.0, Rgba8::BLACK);
        g.add_color(1.0, Rgba8::WHITE);
        assert_eq!(g.paint_ref(), "url(#hair)");
        assert_eq!(
            g.to_svg(),
            concat!(
                r#"<linearGradient id="hair" x1="0%" y1="0%" x2="100%" y2="0%">"#,
                r##"<stop offset="0%" stop-color="#000000"/>"##,
                r##"<stop offset="100%" stop-color="#ffffff"/>"##,
                "</linearGradient>"
            )
        );
    }

    #[test]
    fn test_rainbow_svg_offsets() {
        let svg = LinearGradient::rainbow("rainbow").to_svg();
        let offsets: Vec<&str> = svg
            .split("offset=\"")
            .skip(1)
            .filter_map(|rest| rest.split('"').next())
            .collect();
        assert_eq!(
            offsets,
            vec!["0%", "16.66%", "33.33%", "50%", "66.66%", "83.33%", "100%"]
        );
    }

    #[test]
    fn test_percent_survives_float_noise() {
        assert_eq!(percent(0.57), 57.0);
        assert_eq!(percent(0.125), 12.5);
    }
}
