//! Ellipse point sampler.
//!
//! Samples an axis-aligned ellipse at a fixed number of equal angular
//! steps. Used for eye outlines and the oval mouth.

use crate::basics::{
    PointD, VertexSource, PATH_CMD_END_POLY, PATH_CMD_LINE_TO, PATH_CMD_MOVE_TO, PATH_CMD_STOP,
    PATH_FLAGS_CLOSE, PI,
};

/// Ellipse sampler.
///
/// Produces `num + 1` samples: step `i` lies at angle `2π·i/num`, so the
/// last sample coincides with the first and the outline is closed without
/// an implicit wrap-around.
#[derive(Debug, Clone)]
pub struct Ellipse {
    x: f64,
    y: f64,
    rx: f64,
    ry: f64,
    num: u32,
    step: u32,
}

impl Ellipse {
    /// Create an ellipse centred at `(x, y)` with radii `rx`, `ry`, sampled
    /// in `num_steps` angular steps (at least 1).
    pub fn new(x: f64, y: f64, rx: f64, ry: f64, num_steps: u32) -> Self {
        Self {
            x,
            y,
            rx,
            ry,
            num: num_steps.max(1),
            step: 0,
        }
    }

    /// Number of samples `points()` yields.
    pub fn num_points(&self) -> usize {
        self.num as usize + 1
    }

    /// Sample at angular step `step`.
    pub fn point_at(&self, step: u32) -> PointD {
        let angle = (step as f64 / self.num as f64) * 2.0 * PI;
        PointD::new(
            self.x + self.rx * angle.cos(),
            self.y + self.ry * angle.sin(),
        )
    }

    /// All samples in order, first and last coinciding.
    pub fn points(&self) -> impl Iterator<Item = PointD> + '_ {
        (0..=self.num).map(move |i| self.point_at(i))
    }
}

impl VertexSource for Ellipse {
    fn rewind(&mut self, _path_id: u32) {
        self.step = 0;
    }

    fn vertex(&mut self, x: &mut f64, y: &mut f64) -> u32 {
        if self.step == self.num + 1 {
            self.step += 1;
            return PATH_CMD_END_POLY | PATH_FLAGS_CLOSE;
        }
        if self.step > self.num + 1 {
            return PATH_CMD_STOP;
        }
        let p = self.point_at(self.step);
        *x = p.x;
        *y = p.y;
        self.step += 1;
        if self.step == 1 {
            PATH_CMD_MOVE_TO
        } else {
            PATH_CMD_LINE_TO
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::basics::{is_close, is_stop};

    #[test]
    fn test_ellipse_point_count() {
        let e = Ellipse::new(0.0, 0.0, 10.0, 5.0, 50);
        assert_eq!(e.num_points(), 51);
        assert_eq!(e.points().count(), 51);
    }

    #[test]
    fn test_ellipse_closes_on_itself() {
        let e = Ellipse::new(3.0, -2.0, 10.0, 5.0, 20);
        let pts: Vec<PointD> = e.points().collect();
        let first = pts[0];
        let last = pts[pts.len() - 1];
        assert!((first.x - last.x).abs() < 1e-9);
        assert!((first.y - last.y).abs() < 1e-9);
    }

    #[test]
    fn test_ellipse_vertices_on_axes() {
        let e = Ellipse::new(0.0, 0.0, 20.0, 10.0, 4);

        let p = e.point_at(0);
        assert!((p.x - 20.0).abs() < 1e-9);
        assert!(p.y.abs() < 1e-9);

        // +y is down, so a quarter turn lands at the bottom.
        let p = e.point_at(1);
        assert!(p.x.abs() < 1e-9);
        assert!((p.y - 10.0).abs() < 1e-9);

        let p = e.point_at(2);
        assert!((p.x + 20.0).abs() < 1e-9);
    }

    #[test]
    fn test_ellipse_center_offset() {
        let e = Ellipse::new(5.0, 3.0, 10.0, 10.0, 4);
        let p = e.point_at(0);
        assert!((p.x - 15.0).abs() < 1e-9);
        assert!((p.y - 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_ellipse_zero_steps_clamped() {
        let e = Ellipse::new(0.0, 0.0, 1.0, 1.0, 0);
        assert_eq!(e.num_points(), 2);
    }

    #[test]
    fn test_ellipse_vertex_source() {
        let mut e = Ellipse::new(0.0, 0.0, 10.0, 10.0, 8);
        e.rewind(0);
        let mut x = 0.0;
        let mut y = 0.0;

        assert_eq!(e.vertex(&mut x, &mut y), PATH_CMD_MOVE_TO);
        for _ in 0..8 {
            assert_eq!(e.vertex(&mut x, &mut y), PATH_CMD_LINE_TO);
        }
        assert!(is_close(e.vertex(&mut x, &mut y)));
        assert!(is_stop(e.vertex(&mut x, &mut y)));

        e.rewind(0);
        assert_eq!(e.vertex(&mut x, &mut y), PATH_CMD_MOVE_TO);
        assert!((x - 10.0).abs() < 1e-9);
    }
}
