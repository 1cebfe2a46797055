//! Mouth generator.

use crate::basics::{InvalidTypeCode, PointD, PI};
use crate::ellipse::Ellipse;
use crate::random::RandomSource;

/// Samples on the curved and oval mouths.
pub const MOUTH_CURVE_POINTS: usize = 21;

const MOUTH_CURVE_STEPS: u32 = MOUTH_CURVE_POINTS as u32 - 1;

/// Mouth style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(into = "u8", try_from = "u8"))]
pub enum MouthType {
    /// Open half-sine arc (line strip).
    Smile = 0,
    /// Straight two-point segment (line strip).
    Straight = 1,
    /// Closed, fillable oval.
    Oval = 2,
}

impl MouthType {
    pub const ALL: [MouthType; 3] = [MouthType::Smile, MouthType::Straight, MouthType::Oval];

    /// Numeric code: 0 smile, 1 straight, 2 oval.
    pub fn index(self) -> u8 {
        self as u8
    }

    /// Number of outline points a mouth of this style carries.
    pub fn point_count(self) -> usize {
        match self {
            MouthType::Straight => 2,
            MouthType::Smile | MouthType::Oval => MOUTH_CURVE_POINTS,
        }
    }

    /// Oval mouths are closed and filled; the others are open strokes.
    pub fn is_closed(self) -> bool {
        self == MouthType::Oval
    }
}

impl From<MouthType> for u8 {
    fn from(t: MouthType) -> u8 {
        t.index()
    }
}

impl TryFrom<u8> for MouthType {
    type Error = InvalidTypeCode;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        Self::ALL
            .get(code as usize)
            .copied()
            .ok_or(InvalidTypeCode { kind: "mouth", code })
    }
}

/// Mouth outline and its style.
#[derive(Debug, Clone, PartialEq)]
pub struct Mouth {
    pub shape: Vec<PointD>,
    pub mouth_type: MouthType,
}

/// Generate a mouth of a uniformly chosen style.
pub fn generate_mouth<R: RandomSource + ?Sized>(rng: &mut R) -> Mouth {
    let mouth_type = MouthType::ALL[rng.uniform_index(MouthType::ALL.len())];
    let shape = match mouth_type {
        MouthType::Smile => smile(rng),
        MouthType::Straight => straight(rng),
        MouthType::Oval => oval(rng),
    };
    Mouth { shape, mouth_type }
}

fn smile<R: RandomSource + ?Sized>(rng: &mut R) -> Vec<PointD> {
    let width = rng.uniform_real(15.0, 25.0);
    let height = rng.uniform_real(5.0, 10.0);
    let center_y = rng.uniform_real(15.0, 25.0);

    (0..=MOUTH_CURVE_STEPS)
        .map(|i| {
            let t = i as f64 / MOUTH_CURVE_STEPS as f64;
            PointD::new(-width / 2.0 + t * width, center_y + height * (t * PI).sin())
        })
        .collect()
}

fn straight<R: RandomSource + ?Sized>(rng: &mut R) -> Vec<PointD> {
    let width = rng.uniform_real(10.0, 20.0);
    let center_y = rng.uniform_real(15.0, 25.0);
    vec![
        PointD::new(-width / 2.0, center_y),
        PointD::new(width / 2.0, center_y),
    ]
}

fn oval<R: RandomSource + ?Sized>(rng: &mut R) -> Vec<PointD> {
    let width = rng.uniform_real(8.0, 15.0);
    let height = rng.uniform_real(6.0, 12.0);
    let center_y = rng.uniform_real(15.0, 25.0);
    Ellipse::new(0.0, center_y, width / 2.0, height / 2.0, MOUTH_CURVE_STEPS)
        .points()
        .collect()
}
