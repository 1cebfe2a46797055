//! Path storage: the vertex container handed to renderers.
//!
//! Stores vertices tagged with path commands (move_to, line_to, quadratic
//! curve, close) and serializes them to SVG path data.

use core::fmt::Write;

use crate::basics::{
    is_close, is_curve3, is_line_to, is_move_to, is_vertex, VertexD, VertexSource,
    PATH_CMD_CURVE3, PATH_CMD_END_POLY, PATH_CMD_LINE_TO, PATH_CMD_MOVE_TO, PATH_CMD_STOP,
    PATH_FLAGS_CLOSE,
};

/// Path storage, the main vertex container.
///
/// Stores an ordered sequence of vertices, each with an (x, y) coordinate and
/// a path command. A quadratic curve occupies two consecutive `curve3`
/// vertices: control point, then target. Implements `VertexSource`.
#[derive(Debug, Clone, PartialEq)]
pub struct PathStorage {
    vertices: Vec<VertexD>,
    iterator: usize,
}

impl PathStorage {
    /// Create an empty path storage.
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
            iterator: 0,
        }
    }

    /// Create an empty path storage with room for `n` vertices.
    pub fn with_capacity(n: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(n),
            iterator: 0,
        }
    }

    // ---------------------------------------------------------------
    // Path construction
    // ---------------------------------------------------------------

    /// Add a move_to command.
    pub fn move_to(&mut self, x: f64, y: f64) {
        self.vertices.push(VertexD::new(x, y, PATH_CMD_MOVE_TO));
    }

    /// Add a line_to command.
    pub fn line_to(&mut self, x: f64, y: f64) {
        self.vertices.push(VertexD::new(x, y, PATH_CMD_LINE_TO));
    }

    /// Add a quadratic Bezier curve (curve3) with explicit control point.
    pub fn curve3(&mut self, x_ctrl: f64, y_ctrl: f64, x_to: f64, y_to: f64) {
        self.vertices
            .push(VertexD::new(x_ctrl, y_ctrl, PATH_CMD_CURVE3));
        self.vertices
            .push(VertexD::new(x_to, y_to, PATH_CMD_CURVE3));
    }

    /// Close the current polygon. Does nothing on an empty path or right
    /// after another close.
    pub fn close_polygon(&mut self) {
        if is_vertex(self.last_command()) {
            self.vertices
                .push(VertexD::new(0.0, 0.0, PATH_CMD_END_POLY | PATH_FLAGS_CLOSE));
        }
    }

    // ---------------------------------------------------------------
    // Accessors
    // ---------------------------------------------------------------

    /// Total number of vertices stored.
    pub fn total_vertices(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Get the last command (or `PATH_CMD_STOP` if empty).
    pub fn last_command(&self) -> u32 {
        self.vertices.last().map_or(PATH_CMD_STOP, |v| v.cmd)
    }

    /// Get a vertex by index. Returns the command.
    pub fn vertex_idx(&self, idx: usize, x: &mut f64, y: &mut f64) -> u32 {
        let v = &self.vertices[idx];
        *x = v.x;
        *y = v.y;
        v.cmd
    }

    /// Get a command by index.
    pub fn command(&self, idx: usize) -> u32 {
        self.vertices[idx].cmd
    }

    /// Number of stored commands of kind `cmd`, counting a quadratic curve
    /// (two `curve3` vertices) once.
    pub fn count_commands(&self, cmd: u32) -> usize {
        let n = self.vertices.iter().filter(|v| v.cmd == cmd).count();
        if cmd == PATH_CMD_CURVE3 {
            n / 2
        } else {
            n
        }
    }

    // ---------------------------------------------------------------
    // Serialization
    // ---------------------------------------------------------------

    /// Serialize to SVG path data (`M`, `L`, `Q`, `Z`), commands separated
    /// by single spaces. An empty path yields an empty string.
    pub fn to_svg_data(&self) -> String {
        let mut out = String::with_capacity(self.vertices.len() * 16);
        let mut i = 0;
        while i < self.vertices.len() {
            let v = &self.vertices[i];
            if !out.is_empty() {
                out.push(' ');
            }
            // Writing into a String cannot fail.
            let _ = if is_move_to(v.cmd) {
                write!(out, "M {} {}", v.x, v.y)
            } else if is_line_to(v.cmd) {
                write!(out, "L {} {}", v.x, v.y)
            } else if is_curve3(v.cmd) && i + 1 < self.vertices.len() {
                let to = &self.vertices[i + 1];
                i += 1;
                write!(out, "Q {} {} {} {}", v.x, v.y, to.x, to.y)
            } else if is_close(v.cmd) {
                write!(out, "Z")
            } else {
                Ok(())
            };
            i += 1;
        }
        out
    }
}

impl Default for PathStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl VertexSource for PathStorage {
    fn rewind(&mut self, path_id: u32) {
        self.iterator = path_id as usize;
    }

    fn vertex(&mut self, x: &mut f64, y: &mut f64) -> u32 {
        if self.iterator >= self.vertices.len() {
            return PATH_CMD_STOP;
        }
        let v = &self.vertices[self.iterator];
        *x = v.x;
        *y = v.y;
        self.iterator += 1;
        v.cmd
    }
}

// ============================================================================
// Tests
// ============================================================================
