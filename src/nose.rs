//! Nose generator.

use crate::basics::{InvalidTypeCode, PointD};
use crate::random::RandomSource;

/// Nose style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(into = "u8", try_from = "u8"))]
pub enum NoseType {
    /// A single dot.
    Dot = 0,
    /// A short horizontal segment.
    Line = 1,
}

impl NoseType {
    pub const ALL: [NoseType; 2] = [NoseType::Dot, NoseType::Line];

    /// Numeric code: 0 dot, 1 line.
    pub fn index(self) -> u8 {
        self as u8
    }

    pub fn point_count(self) -> usize {
        match self {
            NoseType::Dot => 1,
            NoseType::Line => 2,
        }
    }
}

impl From<NoseType> for u8 {
    fn from(t: NoseType) -> u8 {
        t.index()
    }
}

impl TryFrom<u8> for NoseType {
    type Error = InvalidTypeCode;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        Self::ALL
            .get(code as usize)
            .copied()
            .ok_or(InvalidTypeCode { kind: "nose", code })
    }
}

/// Nose points (one for a dot, two for a line) and their style.
#[derive(Debug, Clone, PartialEq)]
pub struct Nose {
    pub points: Vec<PointD>,
    pub nose_type: NoseType,
}

/// Generate a nose of a uniformly chosen style, centred on the vertical axis.
pub fn generate_nose<R: RandomSource + ?Sized>(rng: &mut R) -> Nose {
    let nose_type = NoseType::ALL[rng.uniform_index(NoseType::ALL.len())];
    let center_y = rng.uniform_real(0.0, 10.0);

    let points = match nose_type {
        NoseType::Dot => vec![PointD::new(0.0, center_y)],
        NoseType::Line => {
            let width = rng.uniform_real(3.0, 8.0);
            vec![
                PointD::new(-width / 2.0, center_y),
                PointD::new(width / 2.0, center_y),
            ]
        }
    };
    Nose { points, nose_type }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::RngSource;

    #[test]
    fn test_type_codes() {
        assert_eq!(NoseType::try_from(0), Ok(NoseType::Dot));
        assert_eq!(NoseType::try_from(1), Ok(NoseType::Line));
        assert!(NoseType::try_from(2).is_err());
    }

    #[test]
    fn test_point_counts_per_type() {
        let mut rng = RngSource::seed_from_u64(30);
        let mut seen = [false; 2];
        for _ in 0..200 {
            let nose = generate_nose(&mut rng);
            seen[nose.nose_type.index() as usize] = true;
            match nose.nose_type {
                NoseType::Dot => assert_eq!(nose.points.len(), 1),
                NoseType::Line => assert_eq!(nose.points.len(), 2),
            }
        }
        assert_eq!(seen, [true; 2]);
    }

    #[test]
    fn test_nose_is_centred() {
        let mut rng = RngSource::seed_from_u64(31);
        for _ in 0..200 {
            let nose = generate_nose(&mut rng);
            let sum_x: f64 = nose.points.iter().map(|p| p.x).sum();
            assert!(sum_x.abs() < 1e-9);
            for p in &nose.points {
                assert!((0.0..10.0).contains(&p.y));
                assert!(p.x.abs() <= 4.0);
            }
        }
    }

    #[test]
    fn test_line_nose_is_horizontal() {
        let mut rng = RngSource::seed_from_u64(32);
        for _ in 0..100 {
            let nose = generate_nose(&mut rng);
            if let [a, b] = nose.points.as_slice() {
                assert_eq!(a.y, b.y);
                let width = b.x - a.x;
                assert!((3.0..8.0).contains(&width));
            }
        }
    }
}
