//! Point sequence to path conversion.
//!
//! Stateless helpers turning the point sequences of an `AvatarData` into
//! drawable paths. Neither builder closes a path; callers that want a
//! closed shape call `close_polygon()` on the result.

use crate::basics::PointD;
use crate::path_storage::PathStorage;

/// Straight-line path through `points`.
///
/// Empty input gives an empty path; a single point gives a lone move_to
/// (nothing visible is stroked).
pub fn to_polyline_path(points: &[PointD]) -> PathStorage {
    let mut path = PathStorage::with_capacity(points.len());
    if let Some((first, rest)) = points.split_first() {
        path.move_to(first.x, first.y);
        for p in rest {
            path.line_to(p.x, p.y);
        }
    }
    path
}

/// Quadratic-smoothed path through `points`.
///
/// Fewer than two points behave exactly like `to_polyline_path`. Otherwise
/// the path moves to the first point and emits one quadratic segment per
/// following point `i`:
///
/// - `i == 1`: control `p0`, target the midpoint of `p0` and `p1`
/// - later: control `p[i-1]`, target the midpoint of `p[i]` and `p[i+1]`
/// - the last segment always targets the last point exactly
pub fn to_smooth_path(points: &[PointD]) -> PathStorage {
    if points.len() < 2 {
        return to_polyline_path(points);
    }

    let last = points.len() - 1;
    let mut path = PathStorage::with_capacity(1 + 2 * last);
    path.move_to(points[0].x, points[0].y);

    for i in 1..=last {
        let ctrl = points[i - 1];
        let to = if i == last {
            points[i]
        } else if i == 1 {
            points[0].midpoint(&points[1])
        } else {
            points[i].midpoint(&points[i + 1])
        };
        path.curve3(ctrl.x, ctrl.y, to.x, to.y);
    }
    path
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::basics::{is_close, PATH_CMD_CURVE3, PATH_CMD_LINE_TO, PATH_CMD_MOVE_TO};

    fn p(x: f64, y: f64) -> PointD {
        PointD::new(x, y)
    }

    #[test]
    fn test_polyline_empty() {
        assert!(to_polyline_path(&[]).is_empty());
    }

    #[test]
    fn test_polyline_single_point() {
        let path = to_polyline_path(&[p(1.0, 2.0)]);
        assert_eq!(path.total_vertices(), 1);
        assert_eq!(path.command(0), PATH_CMD_MOVE_TO);
    }

    #[test]
    fn test_polyline_three_points() {
        let path = to_polyline_path(&[p(0.0, 0.0), p(1.0, 1.0), p(2.0, 0.0)]);
        assert_eq!(path.count_commands(PATH_CMD_MOVE_TO), 1);
        assert_eq!(path.count_commands(PATH_CMD_LINE_TO), 2);
        assert_eq!(path.to_svg_data(), "M 0 0 L 1 1 L 2 0");
    }

    #[test]
    fn test_smooth_empty_and_single() {
        assert!(to_smooth_path(&[]).is_empty());
        let single = to_smooth_path(&[p(3.0, 4.0)]);
        assert_eq!(single.total_vertices(), 1);
        assert_eq!(single.to_svg_data(), "M 3 4");
    }

    #[test]
    fn test_smooth_two_points_ends_exactly() {
        let path = to_smooth_path(&[p(0.0, 0.0), p(4.0, 2.0)]);
        assert_eq!(path.to_svg_data(), "M 0 0 Q 0 0 4 2");
    }

    #[test]
    fn test_smooth_segments() {
        let pts = [p(0.0, 0.0), p(2.0, 2.0), p(4.0, 0.0), p(6.0, 2.0)];
        let path = to_smooth_path(&pts);
        assert_eq!(path.count_commands(PATH_CMD_CURVE3), 3);
        assert_eq!(
            path.to_svg_data(),
            "M 0 0 Q 0 0 1 1 Q 2 2 5 1 Q 4 0 6 2"
        );
    }

    #[test]
    fn test_smooth_terminates_at_last_point() {
        let pts: Vec<PointD> = (0..21).map(|i| p(i as f64, (i as f64).sin())).collect();
        let path = to_smooth_path(&pts);
        let (mut x, mut y) = (0.0, 0.0);
        path.vertex_idx(path.total_vertices() - 1, &mut x, &mut y);
        assert_eq!((x, y), (pts[20].x, pts[20].y));
    }

    #[test]
    fn test_builders_never_close() {
        let pts = [p(0.0, 0.0), p(1.0, 0.0), p(1.0, 1.0)];
        assert!(!is_close(to_polyline_path(&pts).last_command()));
        assert!(!is_close(to_smooth_path(&pts).last_command()));

        let mut closed = to_smooth_path(&pts);
        closed.close_polygon();
        assert!(closed.to_svg_data().ends_with(" Z"));
    }
}
