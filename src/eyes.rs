//! Eye and pupil generator.

use crate::basics::PointD;
use crate::ellipse::Ellipse;
use crate::random::RandomSource;

/// Samples on each eye outline.
pub const EYE_POINTS: usize = 51;

/// Both eye outlines and their pupil centres.
#[derive(Debug, Clone, PartialEq)]
pub struct Eyes {
    pub left_eye: Vec<PointD>,
    pub right_eye: Vec<PointD>,
    pub left_pupil: PointD,
    pub right_pupil: PointD,
}

/// Generate a pair of eyes sharing one size and one vertical offset.
///
/// Pupils are jittered around their eye centre by up to a quarter of the
/// eye's width and height. They are not clamped to the outline, so an
/// occasional pupil pokes out of its eye.
pub fn generate_eyes<R: RandomSource + ?Sized>(rng: &mut R) -> Eyes {
    let eye_width = rng.uniform_real(8.0, 15.0);
    let eye_height = rng.uniform_real(5.0, 10.0);
    let eye_y = rng.uniform_real(-10.0, 5.0);
    let eye_distance = rng.uniform_real(15.0, 25.0);

    let left_eye = eye_outline(rng, -eye_distance / 2.0, eye_y, eye_width, eye_height);
    let right_eye = eye_outline(rng, eye_distance / 2.0, eye_y, eye_width, eye_height);

    let left_pupil = pupil(rng, -eye_distance / 2.0, eye_y, eye_width, eye_height);
    let right_pupil = pupil(rng, eye_distance / 2.0, eye_y, eye_width, eye_height);

    Eyes {
        left_eye,
        right_eye,
        left_pupil,
        right_pupil,
    }
}

fn eye_outline<R: RandomSource + ?Sized>(
    rng: &mut R,
    cx: f64,
    cy: f64,
    width: f64,
    height: f64,
) -> Vec<PointD> {
    let ellipse = Ellipse::new(cx, cy, width / 2.0, height / 2.0, EYE_POINTS as u32 - 1);
    ellipse
        .points()
        .map(|p| {
            let jitter = rng.uniform_real(-1.0, 1.0);
            p.offset(jitter, jitter)
        })
        .collect()
}

fn pupil<R: RandomSource + ?Sized>(rng: &mut R, cx: f64, cy: f64, width: f64, height: f64) -> PointD {
    PointD::new(
        cx + rng.uniform_real(-width / 4.0, width / 4.0),
        cy + rng.uniform_real(-height / 4.0, height / 4.0),
    )
}
