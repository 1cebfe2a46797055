//! Property checks over many generated avatars.

use ugly_avatar::eyes::EYE_POINTS;
use ugly_avatar::face::FACE_POINTS;
use ugly_avatar::hair::HairType;
use ugly_avatar::mouth::{MouthType, MOUTH_CURVE_POINTS};
use ugly_avatar::nose::NoseType;
use ugly_avatar::svg::{render_svg, RenderOptions, VIEWPORT_HALF};
use ugly_avatar::{generate_avatar, generate_avatar_with, to_polyline_path, to_smooth_path};
use ugly_avatar::{AvatarData, PointD, RngSource};

fn avatars(n: usize, seed: u64) -> Vec<AvatarData> {
    let mut rng = RngSource::seed_from_u64(seed);
    (0..n).map(|_| generate_avatar_with(&mut rng)).collect()
}

#[test]
fn face_shape_is_finite_and_non_degenerate() {
    for avatar in avatars(300, 1) {
        assert_eq!(avatar.face_shape.len(), FACE_POINTS);
        assert!(avatar.face_shape.iter().all(PointD::is_finite));
        let first = avatar.face_shape[0];
        assert!(avatar.face_shape.iter().any(|p| *p != first));
    }
}

#[test]
fn eyes_have_fixed_resolution() {
    for avatar in avatars(300, 2) {
        assert_eq!(avatar.left_eye.len(), EYE_POINTS);
        assert_eq!(avatar.right_eye.len(), EYE_POINTS);
        assert!(avatar.left_pupil.is_finite());
        assert!(avatar.right_pupil.is_finite());
    }
}

#[test]
fn mouth_and_nose_counts_follow_their_type() {
    for avatar in avatars(300, 3) {
        match avatar.mouth_type {
            MouthType::Straight => assert_eq!(avatar.mouth_shape.len(), 2),
            MouthType::Smile | MouthType::Oval => {
                assert_eq!(avatar.mouth_shape.len(), MOUTH_CURVE_POINTS)
            }
        }
        match avatar.nose_type {
            NoseType::Dot => assert_eq!(avatar.nose_points.len(), 1),
            NoseType::Line => assert_eq!(avatar.nose_points.len(), 2),
        }
    }
}

#[test]
fn hair_strand_counts_follow_their_type() {
    for avatar in avatars(500, 4) {
        let n = avatar.hair_lines.len();
        let ok = match avatar.hair_type {
            HairType::Beard => (15..=25).contains(&n),
            HairType::Scattered => (20..=35).contains(&n),
            HairType::Structured => n == 0 || (10..=20).contains(&n),
            HairType::Wavy => (12..=18).contains(&n),
        };
        assert!(ok, "{:?} produced {} strands", avatar.hair_type, n);
        assert!(avatar.hair_lines.iter().all(|s| s.len() >= 2));
    }
}

#[test]
fn every_avatar_is_well_formed_and_bounded() {
    for avatar in avatars(500, 5) {
        assert!(avatar.is_well_formed());
        let r = avatar.bounds().expect("avatar has points");
        // Hair is the widest-reaching feature: a 7-segment beard walk of
        // 15-unit steps from a face point at most ~60 from the origin.
        assert!(r.x1 > -200.0 && r.x2 < 200.0);
        assert!(r.y1 > -200.0 && r.y2 < 200.0);
    }
}

#[test]
fn features_stay_inside_viewport() {
    for avatar in avatars(300, 6) {
        for p in avatar
            .face_shape
            .iter()
            .chain(&avatar.left_eye)
            .chain(&avatar.right_eye)
            .chain(&avatar.mouth_shape)
            .chain(&avatar.nose_points)
        {
            assert!(p.x.abs() < VIEWPORT_HALF && p.y.abs() < VIEWPORT_HALF);
        }
    }
}

#[test]
fn seeded_generation_is_bit_identical() {
    for seed in ["abc", "", "hello world", "\u{1F600} emoji"] {
        assert_eq!(generate_avatar(Some(seed)), generate_avatar(Some(seed)));
    }
}

#[test]
fn unseeded_generation_varies() {
    let all: Vec<AvatarData> = (0..100).map(|_| generate_avatar(None)).collect();
    assert!(all.iter().any(|a| *a != all[0]));
}

#[test]
fn path_builder_edge_cases() {
    assert!(to_smooth_path(&[]).is_empty());
    assert_eq!(to_smooth_path(&[PointD::new(1.0, 1.0)]).total_vertices(), 1);
    let poly = to_polyline_path(&[
        PointD::new(0.0, 0.0),
        PointD::new(1.0, 0.0),
        PointD::new(1.0, 1.0),
    ]);
    assert_eq!(poly.to_svg_data(), "M 0 0 L 1 0 L 1 1");
}

#[test]
fn rendered_svg_has_no_nan() {
    for avatar in avatars(100, 7) {
        let svg = render_svg(&avatar, &RenderOptions::default());
        assert!(!svg.contains("NaN"));
        assert!(!svg.contains("inf"));
    }
}

#[cfg(feature = "serde")]
#[test]
fn avatar_json_uses_camel_case_and_hex_colors() {
    let avatar = generate_avatar(Some("json"));
    let json = serde_json::to_value(&avatar).unwrap();
    assert!(json.get("faceShape").is_some());
    assert!(json.get("hasRainbowHair").is_some());
    let bg = json["backgroundColor"].as_str().unwrap();
    assert_eq!(bg, avatar.background_color.to_string());

    assert_eq!(json["hairType"].as_u64(), Some(u64::from(avatar.hair_type.index())));
    assert_eq!(json["mouthType"].as_u64(), Some(u64::from(avatar.mouth_type.index())));
    assert_eq!(json["noseType"].as_u64(), Some(u64::from(avatar.nose_type.index())));

    let back: AvatarData = serde_json::from_value(json).unwrap();
    assert_eq!(back.hair_type, avatar.hair_type);
    assert_eq!(back.mouth_type, avatar.mouth_type);
    assert_eq!(back.nose_type, avatar.nose_type);
    assert_eq!(back.background_color, avatar.background_color);
    assert_eq!(back.face_shape.len(), avatar.face_shape.len());
}

#[cfg(feature = "serde")]
#[test]
fn avatar_json_rejects_unknown_type_codes() {
    let avatar = generate_avatar(Some("codes"));
    let mut json = serde_json::to_value(&avatar).unwrap();
    json["hairType"] = serde_json::json!(7);
    assert!(serde_json::from_value::<AvatarData>(json.clone()).is_err());

    json["hairType"] = serde_json::json!("Beard");
    assert!(serde_json::from_value::<AvatarData>(json).is_err());
}
