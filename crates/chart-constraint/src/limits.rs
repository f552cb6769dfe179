// File: crates/chart-constraint/src/limits.rs
// Summary: Limit checker bound to one element of one editable series during a drag session.
// Notes:
// - The boundary polylines are resolved lazily on the first check and cached
//   until `reset()`; call it whenever the chart data changes.
// - Boundaries are expected to be x-monotonic and non-self-intersecting;
//   this is not validated.

use crate::error::{ConstraintError, Result};
use crate::geometry::LineSegment;
use crate::intersect::crosses_polyline;
use crate::types::{Point, PointLimits, DEFAULT_PRECISION};

/// Axis bounds for the series being edited, used to synthesize flat boundaries.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxisExtremes {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl AxisExtremes {
    pub fn flat_upper(&self) -> Vec<Point> {
        vec![Point::new(self.x_min, self.y_max), Point::new(self.x_max, self.y_max)]
    }

    pub fn flat_lower(&self) -> Vec<Point> {
        vec![Point::new(self.x_min, self.y_min), Point::new(self.x_max, self.y_min)]
    }
}

/// What the checker needs from the chart hosting the curves.
pub trait ChartSource {
    /// Points of the series at `index`.
    fn series_points(&self, index: usize) -> Option<&[Point]>;
    /// Points of the series labelled `label`.
    fn find_series(&self, label: &str) -> Option<&[Point]>;
    /// Axis bounds of the scales the series at `index` is drawn against.
    fn axis_extremes(&self, index: usize) -> AxisExtremes;
}

/// Which element is dragged and which series bound it.
#[derive(Clone, Debug, PartialEq)]
pub struct LimitCheckOptions {
    pub series_index: usize,
    pub elem_index: usize,
    pub upper_limit: Option<String>,
    pub lower_limit: Option<String>,
    /// Decimal digits for intersection rounding.
    pub precision: i32,
}

impl LimitCheckOptions {
    pub fn new(series_index: usize, elem_index: usize) -> Self {
        Self { series_index, elem_index, upper_limit: None, lower_limit: None, precision: DEFAULT_PRECISION }
    }

    pub fn with_upper_limit(mut self, label: impl Into<String>) -> Self {
        self.upper_limit = Some(label.into());
        self
    }

    pub fn with_lower_limit(mut self, label: impl Into<String>) -> Self {
        self.lower_limit = Some(label.into());
        self
    }

    pub fn with_precision(mut self, precision: i32) -> Self {
        self.precision = precision;
        self
    }
}

/// Outcome of one constraint evaluation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LimitCheckResult {
    pub in_limits: bool,
    /// Immediate clamp, only for index-range violations.
    pub corrected_position: Option<Point>,
}

impl LimitCheckResult {
    pub const fn within() -> Self {
        Self { in_limits: true, corrected_position: None }
    }

    pub const fn violated() -> Self {
        Self { in_limits: false, corrected_position: None }
    }

    pub const fn clamped(p: Point) -> Self {
        Self { in_limits: true, corrected_position: Some(p) }
    }
}

/// Resolved boundary polylines.
#[derive(Clone, Debug, PartialEq)]
pub struct LimitSeries {
    pub upper: Vec<Point>,
    pub lower: Vec<Point>,
}

pub struct LimitChecker<'c, C: ChartSource + ?Sized> {
    chart: &'c C,
    options: LimitCheckOptions,
    cache: Option<LimitSeries>,
}

impl<'c, C: ChartSource + ?Sized> LimitChecker<'c, C> {
    pub fn new(chart: &'c C, options: LimitCheckOptions) -> Self {
        Self { chart, options, cache: None }
    }

    pub fn options(&self) -> &LimitCheckOptions {
        &self.options
    }

    /// True once the boundary series have been resolved.
    pub fn is_cached(&self) -> bool {
        self.cache.is_some()
    }

    /// Drop the cached boundaries; the next check resolves them again.
    pub fn reset(&mut self) {
        self.cache = None;
    }

    /// Cached boundaries, resolving them first if needed.
    pub fn limit_series(&mut self) -> &LimitSeries {
        let limits = match self.cache.take() {
            Some(cached) => cached,
            None => self.compute_limit_series(),
        };
        self.cache.insert(limits)
    }

    /// Look up the configured boundary series. A missing label, or a series
    /// with fewer than two points, becomes a flat line at the axis extreme.
    pub fn compute_limit_series(&self) -> LimitSeries {
        let extremes = self.chart.axis_extremes(self.options.series_index);
        let upper = self
            .named_boundary(self.options.upper_limit.as_deref())
            .unwrap_or_else(|| extremes.flat_upper());
        let lower = self
            .named_boundary(self.options.lower_limit.as_deref())
            .unwrap_or_else(|| extremes.flat_lower());
        log::debug!(
            "resolved limits for series #{}: upper {} pts, lower {} pts",
            self.options.series_index,
            upper.len(),
            lower.len()
        );
        LimitSeries { upper, lower }
    }

    fn named_boundary(&self, label: Option<&str>) -> Option<Vec<Point>> {
        let label = label?;
        match self.chart.find_series(label) {
            Some(points) if points.len() >= 2 => Some(points.to_vec()),
            Some(_) => {
                log::debug!("limit series '{label}' has fewer than two points, using axis extreme");
                None
            }
            None => {
                log::debug!("limit series '{label}' not found, using axis extreme");
                None
            }
        }
    }

    fn points(&self) -> Result<&'c [Point]> {
        let chart: &'c C = self.chart;
        chart
            .series_points(self.options.series_index)
            .ok_or(ConstraintError::SeriesNotFound(self.options.series_index))
    }

    /// Admissible x-range for `elem_index`: from the previous to the next
    /// point's x. First and last elements may not move along x.
    pub fn find_index_adjacent_bounds(&self, elem_index: usize) -> Result<PointLimits> {
        let data = self.points()?;
        let len = data.len();
        if elem_index >= len {
            return Err(ConstraintError::ElementOutOfRange { index: elem_index, len });
        }
        if elem_index == 0 || elem_index == len - 1 {
            return Ok(PointLimits::pinned(data[elem_index].x));
        }
        Ok(PointLimits::new(data[elem_index - 1].x, data[elem_index + 1].x))
    }

    /// Check whether moving the element to `point` keeps both adjacent
    /// segments clear of the upper and lower boundaries.
    pub fn is_within_limits(&mut self, point: Point) -> Result<LimitCheckResult> {
        let elem_index = self.options.elem_index;
        let precision = self.options.precision;
        let bounds = self.find_index_adjacent_bounds(elem_index)?;
        if point.x <= bounds.min {
            return Ok(LimitCheckResult::clamped(Point::new(bounds.min, point.y)));
        }
        if point.x >= bounds.max {
            return Ok(LimitCheckResult::clamped(Point::new(bounds.max, point.y)));
        }

        let data = self.points()?;
        let left = elem_index.checked_sub(1).map(|i| LineSegment::new(data[i], point));
        let right = data.get(elem_index + 1).map(|&next| LineSegment::new(point, next));

        let limits = self.limit_series();
        let crossing = [left, right].into_iter().flatten().find_map(|seg| {
            if crosses_polyline(&seg, &limits.upper, precision) {
                Some(("upper", seg))
            } else if crosses_polyline(&seg, &limits.lower, precision) {
                Some(("lower", seg))
            } else {
                None
            }
        });

        match crossing {
            Some((which, seg)) => {
                log::debug!("({}, {}) out of limits: {:?} crosses {which} limit", point.x, point.y, seg);
                Ok(LimitCheckResult::violated())
            }
            None => Ok(LimitCheckResult::within()),
        }
    }
}
