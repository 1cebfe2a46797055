//! Face silhouette generator.
//!
//! Produces the outer face boundary as a closed, ordered sequence of
//! exactly `FACE_POINTS` points, picking one of two silhouette families
//! with a fair coin flip.

use crate::basics::{PointD, PI};
use crate::random::RandomSource;
use crate::rect_outline::RectOutline;

/// Number of samples on every face silhouette.
pub const FACE_POINTS: usize = 101;

const FACE_STEPS: u32 = FACE_POINTS as u32 - 1;

/// Silhouette family.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FaceFamily {
    /// Distorted ellipse with a sine-modulated bulge.
    Egg,
    /// Rectangle outline roughened by per-point jitter.
    Rectangle,
}

/// Generate a face silhouette, choosing the family at random.
pub fn generate_face_shape<R: RandomSource + ?Sized>(rng: &mut R) -> Vec<PointD> {
    let family = if rng.chance(0.5) {
        FaceFamily::Egg
    } else {
        FaceFamily::Rectangle
    };
    generate_face_family(rng, family)
}

/// Generate a face silhouette of the given family.
pub fn generate_face_family<R: RandomSource + ?Sized>(rng: &mut R, family: FaceFamily) -> Vec<PointD> {
    let points = match family {
        FaceFamily::Egg => egg_face(rng),
        FaceFamily::Rectangle => rectangle_face(rng),
    };
    debug_assert_eq!(points.len(), FACE_POINTS);
    points
}

/// `x = a·cos θ`, `y = b·sin θ·(1 + k·sin θ)`: the lower half (positive y)
/// swells, the upper half narrows.
fn egg_face<R: RandomSource + ?Sized>(rng: &mut R) -> Vec<PointD> {
    let a = rng.uniform_real(25.0, 35.0);
    let b = rng.uniform_real(30.0, 45.0);
    let k = rng.uniform_real(0.1, 0.3);

    (0..=FACE_STEPS)
        .map(|i| {
            let angle = (i as f64 / FACE_STEPS as f64) * 2.0 * PI;
            let x = a * angle.cos();
            let y = b * angle.sin() * (1.0 + k * angle.sin());
            let jitter = rng.uniform_real(-2.0, 2.0);
            PointD::new(x + jitter, y + jitter)
        })
        .collect()
}

fn rectangle_face<R: RandomSource + ?Sized>(rng: &mut R) -> Vec<PointD> {
    let width = rng.uniform_real(50.0, 70.0);
    let height = rng.uniform_real(60.0, 80.0);
    // Corners stay sharp; the draw keeps seeded output stable.
    let _corner_radius = rng.uniform_real(10.0, 20.0);

    let outline = RectOutline::new(width, height);
    outline
        .points(FACE_STEPS)
        .map(|p| {
            let jitter = rng.uniform_real(-3.0, 3.0);
            p.offset(jitter, jitter)
        })
        .collect()
}
