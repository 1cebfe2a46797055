//! Bounding rectangle calculation.
//!
//! Computes the axis-aligned bounding box of a vertex source or of a plain
//! point slice.

use crate::basics::{is_stop, is_vertex, PointD, RectD, VertexSource};

/// Compute the bounding rectangle of a single path from a vertex source.
///
/// Rewinds the vertex source to `path_id`, iterates all vertices (control
/// points included), and returns the axis-aligned bounding box. Returns
/// `None` if no vertices are found.
pub fn bounding_rect_single(vs: &mut dyn VertexSource, path_id: u32) -> Option<RectD> {
    let mut x = 0.0;
    let mut y = 0.0;
    let mut rect: Option<RectD> = None;

    vs.rewind(path_id);
    loop {
        let cmd = vs.vertex(&mut x, &mut y);
        if is_stop(cmd) {
            break;
        }
        if is_vertex(cmd) {
            rect = Some(extend(rect, x, y));
        }
    }
    rect
}

/// Compute the bounding rectangle of a point slice. Returns `None` for an
/// empty slice.
pub fn bounding_rect_points(points: &[PointD]) -> Option<RectD> {
    points.iter().fold(None, |rect, p| Some(extend(rect, p.x, p.y)))
}

fn extend(rect: Option<RectD>, x: f64, y: f64) -> RectD {
    match rect {
        None => RectD::new(x, y, x, y),
        Some(mut r) => {
            if x < r.x1 {
                r.x1 = x;
            }
            if y < r.y1 {
                r.y1 = y;
            }
            if x > r.x2 {
                r.x2 = x;
            }
            if y > r.y2 {
                r.y2 = y;
            }
            r
        }
    }
}
