//! Fixed color palettes sampled by the generators.

use crate::color::Rgba8;
use crate::random::RandomSource;

const fn c(v: u32) -> Rgba8 {
    Rgba8::from_rgb24(v)
}

/// Flat hair colors. Ignored when the avatar has rainbow hair.
pub const HAIR_COLORS: [Rgba8; 48] = [
    c(0x8B4513), c(0xD2691E), c(0xCD853F), c(0xDEB887), c(0xF4A460), c(0xD2B48C),
    c(0xBC8F8F), c(0xF5DEB3), c(0xFFE4B5), c(0xFFEFD5), c(0xFFF8DC), c(0xFFFAF0),
    c(0x696969), c(0x778899), c(0x708090), c(0x2F4F4F), c(0x000000), c(0x191970),
    c(0xFF0000), c(0xFF4500), c(0xFF6347), c(0xFF7F50), c(0xFF8C00), c(0xFFA500),
    c(0xFFB6C1), c(0xFFC0CB), c(0xFFD700), c(0xFFFF00), c(0xADFF2F), c(0x7FFF00),
    c(0x32CD32), c(0x00FF00), c(0x00FF7F), c(0x00FFFF), c(0x87CEEB), c(0x87CEFA),
    c(0x4169E1), c(0x0000FF), c(0x8A2BE2), c(0x9400D3), c(0x9932CC), c(0xBA55D3),
    c(0xDA70D6), c(0xEE82EE), c(0xFF00FF), c(0xFF1493), c(0xDC143C), c(0xB22222),
];

/// Background fill colors, sampled independently of every facial feature.
pub const BACKGROUND_COLORS: [Rgba8; 48] = [
    c(0xF0F8FF), c(0xFAEBD7), c(0xF0FFFF), c(0xF5F5DC), c(0xFFE4C4), c(0xFFEBCD),
    c(0x0000FF), c(0x8A2BE2), c(0xA52A2A), c(0xDEB887), c(0x5F9EA0), c(0x7FFF00),
    c(0xD2691E), c(0xFF7F50), c(0x6495ED), c(0xFFF8DC), c(0xDC143C), c(0x00FFFF),
    c(0x00008B), c(0x008B8B), c(0xB8860B), c(0xA9A9A9), c(0x006400), c(0xBDB76B),
    c(0x8B008B), c(0x556B2F), c(0xFF8C00), c(0x9932CC), c(0x8B0000), c(0xE9967A),
    c(0x8FBC8F), c(0x483D8B), c(0x2F4F4F), c(0x00CED1), c(0x9400D3), c(0xFF1493),
    c(0x00BFFF), c(0x696969), c(0x1E90FF), c(0xB22222), c(0xFFFAF0), c(0x228B22),
    c(0xFF00FF), c(0xDCDCDC), c(0xF8F8FF), c(0xFFD700), c(0xDAA520), c(0x808080),
];

/// Stops of the rainbow hair gradient, left to right.
pub const RAINBOW_COLORS: [Rgba8; 7] = [
    c(0xFF0000),
    c(0xFF8C00),
    c(0xFFD700),
    c(0x00FF00),
    c(0x00FFFF),
    c(0x0000FF),
    c(0x8A2BE2),
];

/// Pick one entry uniformly.
pub fn pick<R: RandomSource + ?Sized>(rng: &mut R, colors: &[Rgba8]) -> Rgba8 {
    colors[rng.uniform_index(colors.len())]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::SeededRandom;

    #[test]
    fn test_pick_stays_in_palette() {
        let mut rng = SeededRandom::new("palette");
        for _ in 0..200 {
            let color = pick(&mut rng, &HAIR_COLORS);
            assert!(HAIR_COLORS.contains(&color));
        }
    }

    #[test]
    fn test_palettes_are_opaque() {
        assert!(HAIR_COLORS.iter().all(Rgba8::is_opaque));
        assert!(BACKGROUND_COLORS.iter().all(Rgba8::is_opaque));
    }
}
