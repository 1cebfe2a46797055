//! SVG scene rendering.
//!
//! Maps an `AvatarData` through the path builders into a standalone SVG
//! document in a `[-100, 100] x [-100, 100]` viewport. Paint order, back to
//! front: background, face, eyes, pupils, nose, mouth, hair.

use core::fmt::Write;

use log::trace;

use crate::avatar::AvatarData;
use crate::color::Rgba8;
use crate::gradient::LinearGradient;
use crate::nose::NoseType;
use crate::path_builder::{to_polyline_path, to_smooth_path};
use crate::path_storage::PathStorage;

/// Half-extent of the square viewport, in face-local units.
pub const VIEWPORT_HALF: f64 = 100.0;

const FUZZY_FILTER_ID: &str = "fuzzy";
const RAINBOW_GRADIENT_ID: &str = "rainbow";

/// Appearance settings for `render_svg`.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderOptions {
    /// Output width and height in pixels.
    pub size: u32,
    pub skin: Rgba8,
    pub stroke: Rgba8,
    pub eye_white: Rgba8,
    pub pupil: Rgba8,
    /// Fill of the closed (oval) mouth.
    pub mouth_fill: Rgba8,
    /// Roughen the face outline with a turbulence displacement filter.
    pub fuzzy_outline: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            size: 400,
            skin: Rgba8::from_rgb24(0xFFDBAC),
            stroke: Rgba8::BLACK,
            eye_white: Rgba8::WHITE,
            pupil: Rgba8::BLACK,
            mouth_fill: Rgba8::from_rgb24(0xFF6B6B),
            fuzzy_outline: true,
        }
    }
}

/// Render `avatar` as a standalone SVG document.
pub fn render_svg(avatar: &AvatarData, opts: &RenderOptions) -> String {
    let mut out = String::with_capacity(8 * 1024);
    let (lo, span) = (-VIEWPORT_HALF, 2.0 * VIEWPORT_HALF);
    let rainbow = LinearGradient::rainbow(RAINBOW_GRADIENT_ID);

    let _ = write!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{size}" height="{size}" viewBox="{lo} {lo} {span} {span}">"#,
        size = opts.size,
    );

    // Definitions
    out.push_str("<defs>");
    if opts.fuzzy_outline {
        let _ = write!(
            out,
            r#"<filter id="{FUZZY_FILTER_ID}"><feTurbulence baseFrequency="0.02" numOctaves="3"/><feDisplacementMap in="SourceGraphic" scale="1"/></filter>"#
        );
    }
    if avatar.has_rainbow_hair {
        out.push_str(&rainbow.to_svg());
    }
    out.push_str("</defs>");

    // Background
    let _ = write!(
        out,
        r#"<rect x="{lo}" y="{lo}" width="{span}" height="{span}" fill="{}"/>"#,
        avatar.background_color
    );

    // Face
    let filter = if opts.fuzzy_outline {
        format!(r#" filter="url(#{FUZZY_FILTER_ID})""#)
    } else {
        String::new()
    };
    let face = closed(to_smooth_path(&avatar.face_shape));
    push_path(
        &mut out,
        &face,
        &format!(
            r#"fill="{}" stroke="{}" stroke-width="2"{filter}"#,
            opts.skin, opts.stroke
        ),
    );

    // Eyes
    let eye_attrs = format!(
        r#"fill="{}" stroke="{}" stroke-width="1.5""#,
        opts.eye_white, opts.stroke
    );
    for eye in [&avatar.left_eye, &avatar.right_eye] {
        push_path(&mut out, &closed(to_smooth_path(eye)), &eye_attrs);
    }

    // Pupils
    for pupil in [avatar.left_pupil, avatar.right_pupil] {
        let _ = write!(
            out,
            r#"<circle cx="{}" cy="{}" r="2" fill="{}"/>"#,
            pupil.x, pupil.y, opts.pupil
        );
    }

    // Nose
    match (avatar.nose_type, avatar.nose_points.first()) {
        (NoseType::Dot, Some(p)) => {
            let _ = write!(
                out,
                r#"<circle cx="{}" cy="{}" r="1.5" fill="{}"/>"#,
                p.x, p.y, opts.stroke
            );
        }
        _ => push_path(
            &mut out,
            &to_polyline_path(&avatar.nose_points),
            &format!(
                r#"fill="none" stroke="{}" stroke-width="2" stroke-linecap="round""#,
                opts.stroke
            ),
        ),
    }

    // Mouth
    let mut mouth = to_smooth_path(&avatar.mouth_shape);
    let mouth_fill = if avatar.mouth_type.is_closed() {
        mouth.close_polygon();
        opts.mouth_fill.to_string()
    } else {
        "none".to_string()
    };
    push_path(
        &mut out,
        &mouth,
        &format!(
            r#"fill="{mouth_fill}" stroke="{}" stroke-width="2" stroke-linecap="round""#,
            opts.stroke
        ),
    );

    // Hair
    let hair_paint = if avatar.has_rainbow_hair {
        rainbow.paint_ref()
    } else {
        avatar.hair_color.to_string()
    };
    let hair_attrs = format!(
        r#"fill="none" stroke="{hair_paint}" stroke-width="2" stroke-linecap="round""#
    );
    for strand in &avatar.hair_lines {
        push_path(&mut out, &to_smooth_path(strand), &hair_attrs);
    }

    out.push_str("</svg>");
    trace!(
        "rendered avatar svg: {} bytes, {} hair paths",
        out.len(),
        avatar.hair_lines.len()
    );
    out
}

fn closed(mut path: PathStorage) -> PathStorage {
    path.close_polygon();
    path
}

fn push_path(out: &mut String, path: &PathStorage, attrs: &str) {
    if path.is_empty() {
        return;
    }
    let _ = write!(out, r#"<path d="{}" {attrs}/>"#, path.to_svg_data());
}
