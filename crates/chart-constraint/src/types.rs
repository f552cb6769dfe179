// File: crates/chart-constraint/src/types.rs
// Summary: Shared value types and constants (points, ranges, plot sizes, tolerances).

/// Default surface width in pixels.
pub const WIDTH: i32 = 1024;
/// Default surface height in pixels.
pub const HEIGHT: i32 = 640;

/// Decimal digits used to round coordinates before intersection tests.
pub const DEFAULT_PRECISION: i32 = 7;
/// Safety bound for the bisection correction loop.
pub const MAX_ITERATIONS: usize = 100;
/// Stopping tolerance of the bisection correction, in device units.
pub const DEFAULT_TOLERANCE: f64 = 1.0;

/// A location in either model (data) or device (pixel) space.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// True when neither coordinate is NaN or infinite.
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

/// Inclusive admissible x-range for one element of a series.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointLimits {
    pub min: f64,
    pub max: f64,
}

impl PointLimits {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }
    /// Zero-width range pinned to `x`.
    pub const fn pinned(x: f64) -> Self {
        Self { min: x, max: x }
    }
    pub fn contains(&self, x: f64) -> bool {
        x >= self.min && x <= self.max
    }
}

/// Screen margins, in pixels.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Insets {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Insets {
    /// Create new insets (non-negative by type).
    pub const fn new(left: u32, right: u32, top: u32, bottom: u32) -> Self {
        Self { left, right, top, bottom }
    }
}

impl Default for Insets {
    fn default() -> Self {
        Self::new(72, 24, 24, 56)
    }
}
