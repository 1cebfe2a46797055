//! Rectangle perimeter sampler.
//!
//! Walks the outline of an origin-centred rectangle over a single parameter
//! `t ∈ [0, 1]`, split into four equal arcs: top edge left to right, right
//! edge top to bottom, bottom edge right to left, left edge bottom to top.

use crate::basics::PointD;

/// Origin-centred rectangle outline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RectOutline {
    width: f64,
    height: f64,
}

impl RectOutline {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width: width.abs(),
            height: height.abs(),
        }
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    /// Point at perimeter parameter `t`. Values outside `[0, 1]` are clamped.
    pub fn point_at(&self, t: f64) -> PointD {
        let t = t.clamp(0.0, 1.0);
        let (w, h) = (self.width, self.height);

        if t < 0.25 {
            let local_t = t / 0.25;
            PointD::new(-w / 2.0 + local_t * w, -h / 2.0)
        } else if t < 0.5 {
            let local_t = (t - 0.25) / 0.25;
            PointD::new(w / 2.0, -h / 2.0 + local_t * h)
        } else if t < 0.75 {
            let local_t = (t - 0.5) / 0.25;
            PointD::new(w / 2.0 - local_t * w, h / 2.0)
        } else {
            let local_t = (t - 0.75) / 0.25;
            PointD::new(-w / 2.0, h / 2.0 - local_t * h)
        }
    }

    /// `num + 1` samples at `t = i / num`; the last sample returns to the
    /// top-left corner.
    pub fn points(&self, num: u32) -> impl Iterator<Item = PointD> + '_ {
        let num = num.max(1);
        (0..=num).map(move |i| self.point_at(i as f64 / num as f64))
    }
}
