//! Color type and hex conversions.
//!
//! Provides `Rgba8` (u8 per channel) together with the `#rrggbb` notation
//! used by SVG attributes and the palettes. Parsing failures are reported
//! through `ColorError`.

use core::fmt;
use core::str::FromStr;

use thiserror::Error;

// ============================================================================
// ColorError
// ============================================================================

/// Errors produced when parsing a hex color string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    #[error("color {0:?} must be #rgb or #rrggbb")]
    InvalidLength(String),

    #[error("color {0:?} contains a non-hex digit")]
    InvalidDigit(String),
}

// ============================================================================
// Rgba8 (8-bit per channel)
// ============================================================================

/// RGBA color with u8 components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgba8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba8 {
    pub const BASE_MASK: u32 = 255;

    pub const BLACK: Rgba8 = Rgba8::new_opaque(0, 0, 0);
    pub const WHITE: Rgba8 = Rgba8::new_opaque(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn new_opaque(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, Self::BASE_MASK as u8)
    }

    /// Build an opaque color from a packed `0xRRGGBB` value.
    pub const fn from_rgb24(v: u32) -> Self {
        Self::new_opaque((v >> 16) as u8, (v >> 8) as u8, v as u8)
    }

    /// Packed `0xRRGGBB` value (alpha dropped).
    pub const fn to_rgb24(&self) -> u32 {
        ((self.r as u32) << 16) | ((self.g as u32) << 8) | self.b as u32
    }

    pub fn is_opaque(&self) -> bool {
        self.a as u32 == Self::BASE_MASK
    }
}

impl Default for Rgba8 {
    fn default() -> Self {
        Self::BLACK
    }
}

/// Lowercase `#rrggbb`; alpha is not written.
impl fmt::Display for Rgba8 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for Rgba8 {
    type Err = ColorError;

    /// Accepts `#rgb` and `#rrggbb` (the leading `#` is optional).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = s.trim().trim_start_matches('#');
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ColorError::InvalidDigit(s.to_string()));
        }
        let v = match hex.len() {
            3 => {
                let short = u32::from_str_radix(hex, 16)
                    .map_err(|_| ColorError::InvalidDigit(s.to_string()))?;
                let r = (short >> 8) & 0xF;
                let g = (short >> 4) & 0xF;
                let b = short & 0xF;
                (r * 0x11) << 16 | (g * 0x11) << 8 | b * 0x11
            }
            6 => u32::from_str_radix(hex, 16)
                .map_err(|_| ColorError::InvalidDigit(s.to_string()))?,
            _ => return Err(ColorError::InvalidLength(s.to_string())),
        };
        Ok(Self::from_rgb24(v))
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Rgba8 {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Rgba8 {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_rgb24() {
        let c = Rgba8::from_rgb24(0x8B4513);
        assert_eq!((c.r, c.g, c.b, c.a), (0x8B, 0x45, 0x13, 255));
        assert_eq!(c.to_rgb24(), 0x8B4513);
        assert!(c.is_opaque());
    }

    #[test]
    fn test_display_is_lowercase_hex() {
        assert_eq!(Rgba8::from_rgb24(0xFFDBAC).to_string(), "#ffdbac");
        assert_eq!(Rgba8::BLACK.to_string(), "#000000");
    }

    #[test]
    fn test_parse_long_and_short() {
        assert_eq!("#FF6B6B".parse::<Rgba8>(), Ok(Rgba8::from_rgb24(0xFF6B6B)));
        assert_eq!("ff6b6b".parse::<Rgba8>(), Ok(Rgba8::from_rgb24(0xFF6B6B)));
        assert_eq!("#fff".parse::<Rgba8>(), Ok(Rgba8::WHITE));
        assert_eq!("#1a2".parse::<Rgba8>(), Ok(Rgba8::from_rgb24(0x11AA22)));
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            "#12345".parse::<Rgba8>(),
            Err(ColorError::InvalidLength("#12345".to_string()))
        );
        assert_eq!(
            "#zzzzzz".parse::<Rgba8>(),
            Err(ColorError::InvalidDigit("#zzzzzz".to_string()))
        );
        assert!("".parse::<Rgba8>().is_err());
    }

    #[test]
    fn test_transparent_is_not_opaque() {
        assert!(!Rgba8::new(0, 0, 0, 0).is_opaque());
        assert_eq!(Rgba8::new(0x12, 0x34, 0x56, 0).to_string(), "#123456");
    }
}
