//! Foundation types, constants, and path command utilities.
//!
//! The most fundamental types of the crate: points, rectangles, vertices
//! tagged with path commands, and the `VertexSource` iteration interface
//! that everything producing geometry for output implements.

use thiserror::Error;

// ============================================================================
// Mathematical constants
// ============================================================================

pub const PI: f64 = std::f64::consts::PI;

// ============================================================================
// Rect
// ============================================================================

/// A rectangle defined by two corner points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect<T: Copy> {
    pub x1: T,
    pub y1: T,
    pub x2: T,
    pub y2: T,
}

impl<T: Copy + PartialOrd> Rect<T> {
    pub fn new(x1: T, y1: T, x2: T, y2: T) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// Returns `true` if the point (x, y) is inside the rectangle.
    pub fn hit_test(&self, x: T, y: T) -> bool {
        x >= self.x1 && x <= self.x2 && y >= self.y1 && y <= self.y2
    }
}

/// Compute the union (bounding box) of two rectangles.
pub fn unite_rectangles<T: Copy + PartialOrd>(r1: &Rect<T>, r2: &Rect<T>) -> Rect<T> {
    let mut r = *r1;
    if r.x2 < r2.x2 {
        r.x2 = r2.x2;
    }
    if r.y2 < r2.y2 {
        r.y2 = r2.y2;
    }
    if r.x1 > r2.x1 {
        r.x1 = r2.x1;
    }
    if r.y1 > r2.y1 {
        r.y1 = r2.y1;
    }
    r
}

/// Rectangle with `f64` coordinates.
pub type RectD = Rect<f64>;

// ============================================================================
// Path commands
// ============================================================================

pub const PATH_CMD_STOP: u32 = 0;
pub const PATH_CMD_MOVE_TO: u32 = 1;
pub const PATH_CMD_LINE_TO: u32 = 2;
pub const PATH_CMD_CURVE3: u32 = 3;
pub const PATH_CMD_END_POLY: u32 = 0x0F;

// ============================================================================
// Path flags
// ============================================================================

pub const PATH_FLAGS_CLOSE: u32 = 0x40;

// ============================================================================
// Path command query functions
// ============================================================================

/// Returns `true` if `c` is a vertex command (move_to, line_to or curve3).
#[inline]
pub fn is_vertex(c: u32) -> bool {
    (PATH_CMD_MOVE_TO..PATH_CMD_END_POLY).contains(&c)
}

/// Returns `true` if `c` is the stop command.
#[inline]
pub fn is_stop(c: u32) -> bool {
    c == PATH_CMD_STOP
}

/// Returns `true` if `c` is a move_to command.
#[inline]
pub fn is_move_to(c: u32) -> bool {
    c == PATH_CMD_MOVE_TO
}

/// Returns `true` if `c` is a line_to command.
#[inline]
pub fn is_line_to(c: u32) -> bool {
    c == PATH_CMD_LINE_TO
}

/// Returns `true` if `c` is a quadratic curve command.
#[inline]
pub fn is_curve3(c: u32) -> bool {
    c == PATH_CMD_CURVE3
}

/// Returns `true` if `c` is a close polygon command.
#[inline]
pub fn is_close(c: u32) -> bool {
    c == (PATH_CMD_END_POLY | PATH_FLAGS_CLOSE)
}

// ============================================================================
// Point
// ============================================================================

/// A 2D point.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PointBase<T: Copy> {
    pub x: T,
    pub y: T,
}

impl<T: Copy> PointBase<T> {
    pub const fn new(x: T, y: T) -> Self {
        Self { x, y }
    }
}

/// A point in face-local coordinates. This is the `Point` every generator
/// produces.
pub type PointD = PointBase<f64>;

impl PointD {
    /// Point halfway between `self` and `other`.
    #[inline]
    pub fn midpoint(&self, other: &PointD) -> PointD {
        PointD::new((self.x + other.x) / 2.0, (self.y + other.y) / 2.0)
    }

    /// Point displaced by `(dx, dy)`.
    #[inline]
    pub fn offset(&self, dx: f64, dy: f64) -> PointD {
        PointD::new(self.x + dx, self.y + dy)
    }

    /// Both coordinates are finite (no NaN, no infinity).
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

// ============================================================================
// Vertex
// ============================================================================

/// A vertex with coordinates and a path command.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VertexBase<T: Copy> {
    pub x: T,
    pub y: T,
    pub cmd: u32,
}

impl<T: Copy> VertexBase<T> {
    pub fn new(x: T, y: T, cmd: u32) -> Self {
        Self { x, y, cmd }
    }
}

pub type VertexD = VertexBase<f64>;

// ============================================================================
// VertexSource trait
// ============================================================================

/// The vertex source interface. Paths and shape samplers implement this
/// trait to produce a stream of vertices for bounding-box computation and
/// serialization.
pub trait VertexSource {
    /// Reset the vertex source to the beginning of the given path.
    /// `path_id` selects which sub-path to iterate (0 for the first/only path).
    fn rewind(&mut self, path_id: u32);

    /// Return the next vertex. Writes coordinates to `x` and `y`, returns a
    /// path command. Returns `PATH_CMD_STOP` when iteration is complete.
    fn vertex(&mut self, x: &mut f64, y: &mut f64) -> u32;
}

// ============================================================================
// Feature type codes
// ============================================================================

/// A numeric feature code (hair, mouth or nose type) with no matching variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("{kind} type code {code} is out of range")]
pub struct InvalidTypeCode {
    pub kind: &'static str,
    pub code: u8,
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_hit_test() {
        let r = RectD::new(-1.0, -1.0, 1.0, 1.0);
        assert!(r.hit_test(0.0, 0.0));
        assert!(r.hit_test(1.0, -1.0));
        assert!(!r.hit_test(1.5, 0.0));
    }

    #[test]
    fn test_unite_rectangles() {
        let a = RectD::new(0.0, 0.0, 1.0, 1.0);
        let b = RectD::new(-2.0, 0.5, 0.5, 3.0);
        assert_eq!(unite_rectangles(&a, &b), RectD::new(-2.0, 0.0, 1.0, 3.0));
    }

    #[test]
    fn test_path_command_queries() {
        assert!(is_vertex(PATH_CMD_MOVE_TO));
        assert!(is_vertex(PATH_CMD_CURVE3));
        assert!(!is_vertex(PATH_CMD_STOP));
        assert!(!is_vertex(PATH_CMD_END_POLY));
        assert!(is_close(PATH_CMD_END_POLY | PATH_FLAGS_CLOSE));
        assert!(!is_close(PATH_CMD_END_POLY));
    }

    #[test]
    fn test_point_midpoint_and_offset() {
        let a = PointD::new(0.0, 0.0);
        let b = PointD::new(4.0, -2.0);
        assert_eq!(a.midpoint(&b), PointD::new(2.0, -1.0));
        assert_eq!(b.offset(1.0, 1.0), PointD::new(5.0, -1.0));
    }

    #[test]
    fn test_point_is_finite() {
        assert!(PointD::new(1.0, 2.0).is_finite());
        assert!(!PointD::new(f64::NAN, 2.0).is_finite());
        assert!(!PointD::new(0.0, f64::INFINITY).is_finite());
    }
}
