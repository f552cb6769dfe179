// File: crates/chart-constraint/src/geometry.rs
// Summary: Geometry primitives: segments, slope/intercept form, rounding and range helpers.

use crate::error::{ConstraintError, Result};
use crate::types::Point;

/// Slope/intercept form of the line through a segment.
///
/// Vertical lines have no finite slope and carry their fixed x instead.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum LinearFunc {
    Sloped { k: f64, d: f64 },
    Vertical { x: f64 },
}

impl LinearFunc {
    /// Line through `a` and `b`. A zero `dx` (including a zero-length
    /// segment) yields `Vertical`.
    pub fn through(a: Point, b: Point) -> Self {
        let dx = b.x - a.x;
        if dx == 0.0 {
            return LinearFunc::Vertical { x: a.x };
        }
        let k = (b.y - a.y) / dx;
        let d = if k == 0.0 { a.y } else { a.y - k * a.x };
        LinearFunc::Sloped { k, d }
    }

    /// Slope, `+inf` for vertical lines.
    pub fn slope(&self) -> f64 {
        match *self {
            LinearFunc::Sloped { k, .. } => k,
            LinearFunc::Vertical { .. } => f64::INFINITY,
        }
    }

    pub fn intercept(&self) -> Option<f64> {
        match *self {
            LinearFunc::Sloped { d, .. } => Some(d),
            LinearFunc::Vertical { .. } => None,
        }
    }

    pub fn is_vertical(&self) -> bool {
        matches!(self, LinearFunc::Vertical { .. })
    }

    pub fn is_horizontal(&self) -> bool {
        matches!(*self, LinearFunc::Sloped { k, .. } if k == 0.0)
    }

    /// `y` on the line at `x`; NaN for vertical lines.
    pub fn y_at(&self, x: f64) -> f64 {
        match *self {
            LinearFunc::Sloped { k, d } => k * x + d,
            LinearFunc::Vertical { .. } => f64::NAN,
        }
    }

    /// `x` on the line at `y`; NaN for horizontal lines.
    pub fn x_at(&self, y: f64) -> f64 {
        match *self {
            LinearFunc::Sloped { k, d } if k != 0.0 => (y - d) / k,
            LinearFunc::Sloped { .. } => f64::NAN,
            LinearFunc::Vertical { x } => x,
        }
    }

    /// Exact slope equality; two vertical lines are parallel.
    pub fn is_parallel(&self, other: &LinearFunc) -> bool {
        match (self, other) {
            (LinearFunc::Vertical { .. }, LinearFunc::Vertical { .. }) => true,
            (LinearFunc::Sloped { k: k1, .. }, LinearFunc::Sloped { k: k2, .. }) => k1 == k2,
            _ => false,
        }
    }
}

/// Ordered pair of endpoints.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct LineSegment {
    pub a: Point,
    pub b: Point,
}

impl LineSegment {
    pub const fn new(a: Point, b: Point) -> Self {
        Self { a, b }
    }

    pub fn dx(&self) -> f64 { self.b.x - self.a.x }
    pub fn dy(&self) -> f64 { self.b.y - self.a.y }

    /// Same segment with endpoints swapped if needed so that `a.x <= b.x`.
    pub fn sorted_by_x(&self) -> Self {
        if self.a.x <= self.b.x { *self } else { Self::new(self.b, self.a) }
    }

    /// Endpoints rounded to `precision` decimal digits.
    pub fn rounded(&self, precision: i32) -> Self {
        Self::new(round_point(self.a, precision), round_point(self.b, precision))
    }

    /// Attach the slope/intercept form, optionally sorting by x first.
    pub fn to_linear(&self, sort_by_x: bool) -> LinearSegment {
        let seg = if sort_by_x { self.sorted_by_x() } else { *self };
        LinearSegment { seg, func: LinearFunc::through(seg.a, seg.b) }
    }

    /// Euclidean length. Axis-aligned segments skip the square root.
    pub fn length(&self) -> f64 {
        let dx = self.dx().abs();
        let dy = self.dy().abs();
        if dx == 0.0 {
            dy
        } else if dy == 0.0 {
            dx
        } else {
            dx.hypot(dy)
        }
    }

    pub fn x_range(&self) -> (f64, f64) {
        (self.a.x.min(self.b.x), self.a.x.max(self.b.x))
    }

    pub fn y_range(&self) -> (f64, f64) {
        (self.a.y.min(self.b.y), self.a.y.max(self.b.y))
    }

    /// Inclusive bounding-box test. Nothing is inside a box with NaN corners.
    pub fn bounds_contain(&self, p: Point) -> bool {
        if self.a.x.is_nan() || self.a.y.is_nan() || self.b.x.is_nan() || self.b.y.is_nan() {
            return false;
        }
        let (x0, x1) = self.x_range();
        let (y0, y1) = self.y_range();
        p.x >= x0 && p.x <= x1 && p.y >= y0 && p.y <= y1
    }
}

/// A segment together with its linear form.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearSegment {
    pub seg: LineSegment,
    pub func: LinearFunc,
}

impl LinearSegment {
    pub fn slope(&self) -> f64 { self.func.slope() }
}

/// Round to `precision` decimal digits; `precision <= 0` leaves the value as is.
pub fn round_to(value: f64, precision: i32) -> f64 {
    if precision <= 0 || !value.is_finite() {
        return value;
    }
    let factor = 10f64.powi(precision);
    let scaled = value * factor;
    if !scaled.is_finite() {
        return value;
    }
    scaled.round() / factor
}

pub fn round_point(p: Point, precision: i32) -> Point {
    Point::new(round_to(p.x, precision), round_to(p.y, precision))
}

/// Inclusive overlap of two 1-D intervals given in any endpoint order.
pub fn ranges_overlap(r1: (f64, f64), r2: (f64, f64)) -> bool {
    let (a0, a1) = ordered(r1);
    let (b0, b1) = ordered(r2);
    let within = |v: f64, lo: f64, hi: f64| v >= lo && v <= hi;
    within(a0, b0, b1) || within(a1, b0, b1) || within(b0, a0, a1) || within(b1, a0, a1)
}

fn ordered((lo, hi): (f64, f64)) -> (f64, f64) {
    if lo <= hi { (lo, hi) } else { (hi, lo) }
}

/// Range lookup around `index` in `values`.
///
/// - `index == -1`: overall `(min, max)`.
/// - interior index: the sorted pair of its neighbours.
/// - first/last index: the single neighbour plus `min_default` when the
///   element is the smallest value, otherwise `max_default`.
/// - empty slice (or a single element): the defaults.
///
/// Indices outside `[-1, len)` are rejected.
pub fn value_range(values: &[f64], index: isize, min_default: f64, max_default: f64) -> Result<(f64, f64)> {
    if index < -1 || index >= values.len() as isize {
        return Err(ConstraintError::IllegalIndex { index, len: values.len() });
    }
    if values.is_empty() {
        return Ok((min_default, max_default));
    }
    let smallest = values.iter().copied().fold(f64::INFINITY, f64::min);
    if index == -1 {
        let largest = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        return Ok((smallest, largest));
    }

    let i = index as usize;
    let current = values[i];
    let prev = i.checked_sub(1).map(|j| values[j]);
    let next = values.get(i + 1).copied();
    let pair = match (prev, next) {
        (Some(p), Some(n)) => (p, n),
        (Some(v), None) | (None, Some(v)) => {
            let fill = if current == smallest { min_default } else { max_default };
            (v, fill)
        }
        (None, None) => (min_default, max_default),
    };
    Ok(ordered(pair))
}

/// Deterministic sample curve, handy for demos and benches.
pub fn sample_points(n: usize) -> Vec<Point> {
    (0..n)
        .map(|i| {
            let x = i as f64 + 0.5;
            Point::new(x, x * 1.5 + 2.0)
        })
        .collect()
}
