// File: crates/chart-constraint/src/series.rs
// Summary: Labelled point series, optionally bound to upper/lower limit series by label.

use crate::types::Point;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Series {
    pub label: String,
    pub points: Vec<Point>,
    /// Label of the series this one must stay below.
    pub upper_limit: Option<String>,
    /// Label of the series this one must stay above.
    pub lower_limit: Option<String>,
}

impl Series {
    pub fn new(label: impl Into<String>) -> Self {
        Self { label: label.into(), ..Self::default() }
    }

    pub fn with_data(label: impl Into<String>, data: Vec<(f64, f64)>) -> Self {
        Self { label: label.into(), points: data.into_iter().map(Point::from).collect(), ..Self::default() }
    }

    pub fn with_points(label: impl Into<String>, points: Vec<Point>) -> Self {
        Self { label: label.into(), points, ..Self::default() }
    }

    pub fn with_limits(mut self, upper: Option<&str>, lower: Option<&str>) -> Self {
        self.upper_limit = upper.map(str::to_owned);
        self.lower_limit = lower.map(str::to_owned);
        self
    }

    pub fn len(&self) -> usize { self.points.len() }
    pub fn is_empty(&self) -> bool { self.points.is_empty() }
}
