//! Hair generator.
//!
//! Hair is a set of independent polylines ("strands") anchored on points of
//! the face silhouette. One of four strand algorithms is chosen per avatar:
//!
//! - **Beard**: random walks starting on the face outline
//! - **Scattered**: short two-point spikes biased upward
//! - **Structured**: five-point strands rising from the top of the head only
//! - **Wavy**: seven-point strands rising with a sine-shaped sway

use crate::basics::{InvalidTypeCode, PointD, PI};
use crate::color::Rgba8;
use crate::palette::{self, HAIR_COLORS};
use crate::random::RandomSource;

/// Probability that an avatar gets rainbow hair instead of a flat color.
pub const RAINBOW_HAIR_CHANCE: f64 = 0.1;

/// Face points above this y (i.e. with a smaller y) anchor structured hair.
pub const TOP_OF_HEAD_Y: f64 = -20.0;

/// Strand algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(into = "u8", try_from = "u8"))]
pub enum HairType {
    Beard = 0,
    Scattered = 1,
    Structured = 2,
    Wavy = 3,
}

impl HairType {
    pub const ALL: [HairType; 4] = [
        HairType::Beard,
        HairType::Scattered,
        HairType::Structured,
        HairType::Wavy,
    ];

    /// Numeric code 0..=3.
    pub fn index(self) -> u8 {
        self as u8
    }

    /// Inclusive range of strand counts this algorithm draws from.
    pub fn strand_count_range(self) -> (i64, i64) {
        match self {
            HairType::Beard => (15, 25),
            HairType::Scattered => (20, 35),
            HairType::Structured => (10, 20),
            HairType::Wavy => (12, 18),
        }
    }
}

impl From<HairType> for u8 {
    fn from(t: HairType) -> u8 {
        t.index()
    }
}

impl TryFrom<u8> for HairType {
    type Error = InvalidTypeCode;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        Self::ALL
            .get(code as usize)
            .copied()
            .ok_or(InvalidTypeCode { kind: "hair", code })
    }
}

/// Generated hair.
#[derive(Debug, Clone, PartialEq)]
pub struct Hair {
    pub lines: Vec<Vec<PointD>>,
    pub hair_type: HairType,
    /// Flat strand color; meaningless when `rainbow` is set.
    pub color: Rgba8,
    /// Strands are painted with the rainbow gradient instead of `color`.
    pub rainbow: bool,
}

/// Generate hair for the given face silhouette.
pub fn generate_hair<R: RandomSource + ?Sized>(rng: &mut R, face: &[PointD]) -> Hair {
    let hair_type = HairType::ALL[rng.uniform_index(HairType::ALL.len())];
    let rainbow = rng.chance(RAINBOW_HAIR_CHANCE);
    let color = if rainbow {
        Rgba8::BLACK
    } else {
        palette::pick(rng, &HAIR_COLORS)
    };
    let lines = generate_hair_lines(rng, face, hair_type);

    Hair {
        lines,
        hair_type,
        color,
        rainbow,
    }
}

/// Generate strands of one algorithm. An empty face yields no strands.
pub fn generate_hair_lines<R: RandomSource + ?Sized>(
    rng: &mut R,
    face: &[PointD],
    hair_type: HairType,
) -> Vec<Vec<PointD>> {
    if face.is_empty() {
        return Vec::new();
    }
    let (min, max) = hair_type.strand_count_range();
    let count = rng.uniform_int(min, max) as usize;

    match hair_type {
        HairType::Beard => beard(rng, face, count),
        HairType::Scattered => scattered(rng, face, count),
        HairType::Structured => structured(rng, face, count),
        HairType::Wavy => wavy(rng, face, count),
    }
}

fn anchor<R: RandomSource + ?Sized>(rng: &mut R, points: &[PointD]) -> PointD {
    points[rng.uniform_index(points.len())]
}

fn beard<R: RandomSource + ?Sized>(rng: &mut R, face: &[PointD], count: usize) -> Vec<Vec<PointD>> {
    (0..count)
        .map(|_| {
            let mut strand = vec![anchor(rng, face)];
            let segments = rng.uniform_int(3, 7) as usize;
            for _ in 0..segments {
                let prev = strand[strand.len() - 1];
                let direction = rng.uniform_real(0.0, PI * 2.0);
                let length = rng.uniform_real(5.0, 15.0);
                strand.push(prev.offset(direction.cos() * length, direction.sin() * length));
            }
            strand
        })
        .collect()
}

fn scattered<R: RandomSource + ?Sized>(rng: &mut R, face: &[PointD], count: usize) -> Vec<Vec<PointD>> {
    (0..count)
        .map(|_| {
            let start = anchor(rng, face);
            let dx = rng.uniform_real(-20.0, 20.0);
            let dy = rng.uniform_real(-30.0, -10.0);
            vec![start, start.offset(dx, dy)]
        })
        .collect()
}

fn structured<R: RandomSource + ?Sized>(
    rng: &mut R,
    face: &[PointD],
    count: usize,
) -> Vec<Vec<PointD>> {
    let top: Vec<PointD> = face.iter().copied().filter(|p| p.y < TOP_OF_HEAD_Y).collect();
    if top.is_empty() {
        return Vec::new();
    }

    (0..count)
        .map(|_| {
            let mut strand = vec![anchor(rng, &top)];
            for _ in 0..4 {
                let prev = strand[strand.len() - 1];
                let dx = rng.uniform_real(-5.0, 5.0);
                let rise = rng.uniform_real(10.0, 20.0);
                strand.push(prev.offset(dx, -rise));
            }
            strand
        })
        .collect()
}

fn wavy<R: RandomSource + ?Sized>(rng: &mut R, face: &[PointD], count: usize) -> Vec<Vec<PointD>> {
    (0..count)
        .map(|_| {
            let mut strand = vec![anchor(rng, face)];
            for j in 1..=6 {
                let prev = strand[strand.len() - 1];
                let amplitude = rng.uniform_real(5.0, 15.0);
                let phase = j as f64 * 0.5;
                let rise = rng.uniform_real(8.0, 15.0);
                strand.push(prev.offset(phase.sin() * amplitude, -rise));
            }
            strand
        })
        .collect()
}

// ============================================================================
// Tests
// ============================================================================
