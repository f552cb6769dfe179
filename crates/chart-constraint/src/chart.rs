// File: crates/chart-constraint/src/chart.rs
// Summary: Chart model (series + axes) acting as the data source for limit checks.

use crate::axis::Axis;
use crate::error::{ConstraintError, Result};
use crate::limits::{AxisExtremes, ChartSource, LimitCheckOptions};
use crate::series::Series;
use crate::types::Point;

#[derive(Clone, Debug)]
pub struct Chart {
    pub series: Vec<Series>,
    pub x_axis: Axis,
    pub y_axis: Axis,
}

impl Default for Chart {
    fn default() -> Self {
        Self::new()
    }
}

impl Chart {
    pub fn new() -> Self {
        Self {
            series: Vec::new(),
            x_axis: Axis::default_x(),
            y_axis: Axis::default_y(),
        }
    }

    /// Append a series and return its index.
    pub fn add_series(&mut self, series: Series) -> usize {
        self.series.push(series);
        self.series.len() - 1
    }

    /// Index and series with the given label.
    pub fn series_by_label(&self, label: &str) -> Option<(usize, &Series)> {
        self.series.iter().enumerate().find(|(_, s)| s.label == label)
    }

    pub fn point(&self, label: &str, index: usize) -> Option<Point> {
        self.series_by_label(label).and_then(|(_, s)| s.points.get(index).copied())
    }

    /// Replace one point, e.g. to commit a corrected drag.
    pub fn set_point(&mut self, series_index: usize, elem_index: usize, p: Point) -> Result<()> {
        let series = self
            .series
            .get_mut(series_index)
            .ok_or(ConstraintError::SeriesNotFound(series_index))?;
        let len = series.points.len();
        let slot = series
            .points
            .get_mut(elem_index)
            .ok_or(ConstraintError::ElementOutOfRange { index: elem_index, len })?;
        *slot = p;
        Ok(())
    }

    /// Checker options for dragging `elem_index` of `series_index`, bound to
    /// the limit labels the series declares.
    pub fn checker_options(&self, series_index: usize, elem_index: usize) -> Result<LimitCheckOptions> {
        let series = self
            .series
            .get(series_index)
            .ok_or(ConstraintError::SeriesNotFound(series_index))?;
        let mut opts = LimitCheckOptions::new(series_index, elem_index);
        opts.upper_limit = series.upper_limit.clone();
        opts.lower_limit = series.lower_limit.clone();
        Ok(opts)
    }
}

impl ChartSource for Chart {
    fn series_points(&self, index: usize) -> Option<&[Point]> {
        self.series.get(index).map(|s| s.points.as_slice())
    }

    fn find_series(&self, label: &str) -> Option<&[Point]> {
        self.series_by_label(label).map(|(_, s)| s.points.as_slice())
    }

    fn axis_extremes(&self, _index: usize) -> AxisExtremes {
        AxisExtremes {
            x_min: self.x_axis.min,
            x_max: self.x_axis.max,
            y_min: self.y_axis.min,
            y_max: self.y_axis.max,
        }
    }
}
