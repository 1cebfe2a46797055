//! Avatar composer.
//!
//! Runs every generator once, in a fixed order, and gathers the results into
//! one immutable `AvatarData`. The order is part of the seeded contract:
//! face, eyes, hair, mouth, nose, background.

use log::debug;

use crate::basics::{unite_rectangles, PointD, RectD};
use crate::bounding_rect::bounding_rect_points;
use crate::color::Rgba8;
use crate::eyes::{generate_eyes, Eyes, EYE_POINTS};
use crate::face::{generate_face_shape, FACE_POINTS};
use crate::hair::{generate_hair, Hair, HairType};
use crate::mouth::{generate_mouth, Mouth, MouthType};
use crate::nose::{generate_nose, Nose, NoseType};
use crate::palette::{self, BACKGROUND_COLORS};
use crate::random::{RandomSource, RngSource, SeededRandom};

/// Complete description of one generated avatar.
///
/// All coordinates are face-local (origin at the face centre, +y down).
/// `face_shape`, the eyes and a closed mouth are cyclic: consumers connect
/// the last point back to the first.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct AvatarData {
    pub face_shape: Vec<PointD>,
    pub left_eye: Vec<PointD>,
    pub right_eye: Vec<PointD>,
    pub left_pupil: PointD,
    pub right_pupil: PointD,
    pub hair_lines: Vec<Vec<PointD>>,
    pub hair_type: HairType,
    pub hair_color: Rgba8,
    pub has_rainbow_hair: bool,
    pub mouth_shape: Vec<PointD>,
    pub mouth_type: MouthType,
    pub nose_type: NoseType,
    pub nose_points: Vec<PointD>,
    pub background_color: Rgba8,
}

impl AvatarData {
    /// Axis-aligned bounding box of every point in the avatar.
    pub fn bounds(&self) -> Option<RectD> {
        self.point_sets()
            .filter_map(bounding_rect_points)
            .chain(bounding_rect_points(&[self.left_pupil, self.right_pupil]))
            .reduce(|a, b| unite_rectangles(&a, &b))
    }

    /// Finite coordinates everywhere and every point count consistent:
    /// 101 face points, 51 per eye, mouth and nose counts matching their
    /// types, and at least 2 points per strand.
    pub fn is_well_formed(&self) -> bool {
        let finite = self
            .point_sets()
            .all(|pts| pts.iter().all(PointD::is_finite))
            && self.left_pupil.is_finite()
            && self.right_pupil.is_finite();

        finite
            && self.face_shape.len() == FACE_POINTS
            && self.left_eye.len() == EYE_POINTS
            && self.right_eye.len() == EYE_POINTS
            && self.mouth_shape.len() == self.mouth_type.point_count()
            && self.nose_points.len() == self.nose_type.point_count()
            && self.hair_lines.iter().all(|s| s.len() >= 2)
    }

    fn point_sets(&self) -> impl Iterator<Item = &[PointD]> {
        [
            self.face_shape.as_slice(),
            self.left_eye.as_slice(),
            self.right_eye.as_slice(),
            self.mouth_shape.as_slice(),
            self.nose_points.as_slice(),
        ]
        .into_iter()
        .chain(self.hair_lines.iter().map(Vec::as_slice))
    }
}

/// Generate an avatar.
///
/// With a seed, generation is reproducible: the same seed always yields the
/// same `AvatarData`. Without one, each call draws from a fresh entropy
/// seeded generator.
pub fn generate_avatar(seed: Option<&str>) -> AvatarData {
    match seed {
        Some(seed) => generate_avatar_with(&mut SeededRandom::new(seed)),
        None => generate_avatar_with(&mut RngSource::from_entropy()),
    }
}

/// Generate an avatar drawing from `rng`.
pub fn generate_avatar_with<R: RandomSource + ?Sized>(rng: &mut R) -> AvatarData {
    let face_shape = generate_face_shape(rng);
    let Eyes {
        left_eye,
        right_eye,
        left_pupil,
        right_pupil,
    } = generate_eyes(rng);
    let Hair {
        lines: hair_lines,
        hair_type,
        color: hair_color,
        rainbow: has_rainbow_hair,
    } = generate_hair(rng, &face_shape);
    let Mouth { shape: mouth_shape, mouth_type } = generate_mouth(rng);
    let Nose {
        points: nose_points,
        nose_type,
    } = generate_nose(rng);
    let background_color = palette::pick(rng, &BACKGROUND_COLORS);

    let avatar = AvatarData {
        face_shape,
        left_eye,
        right_eye,
        left_pupil,
        right_pupil,
        hair_lines,
        hair_type,
        hair_color,
        has_rainbow_hair,
        mouth_shape,
        mouth_type,
        nose_type,
        nose_points,
        background_color,
    };
    debug_assert!(avatar.is_well_formed(), "malformed avatar: {:?}", avatar);

    debug!(
        "generated avatar: hair={:?} strands={} rainbow={} mouth={:?} nose={:?} background={}",
        avatar.hair_type,
        avatar.hair_lines.len(),
        avatar.has_rainbow_hair,
        avatar.mouth_type,
        avatar.nose_type,
        avatar.background_color
    );
    avatar
}
