// File: crates/chart-constraint/src/scale.rs
// Summary: Linear/log10 axis scales and the device <-> model mapping built from them.

use crate::axis::{Axis, ScaleKind};
use crate::chart::Chart;
use crate::correction::CoordinateMapper;
use crate::types::{Insets, Point};

/// Maps a value range onto a pixel span. `px_start` receives `vmin`, so a
/// vertical scale runs from the bottom pixel to the top pixel.
#[derive(Clone, Copy, Debug)]
pub struct AxisScale {
    pub px_start: f64,
    pub px_end: f64,
    pub vmin: f64,
    pub vmax: f64,
    pub log: bool,
    // cached log endpoints when log is true
    log_min: f64,
    log_max: f64,
}

impl AxisScale {
    pub fn new_linear(px_start: f64, px_end: f64, vmin: f64, vmax: f64) -> Self {
        let mut s = Self { px_start, px_end, vmin, vmax, log: false, log_min: 0.0, log_max: 0.0 };
        if (s.vmax - s.vmin).abs() < 1e-12 { s.vmax = s.vmin + 1.0; }
        s
    }

    pub fn new_log10(px_start: f64, px_end: f64, mut vmin: f64, mut vmax: f64) -> Self {
        // Ensure strictly positive range for log scale
        let eps = 1e-12;
        vmin = if vmin <= eps { eps } else { vmin };
        vmax = if vmax <= vmin { vmin * 10.0 } else { vmax };
        Self { px_start, px_end, vmin, vmax, log: true, log_min: vmin.log10(), log_max: vmax.log10() }
    }

    pub fn from_axis(axis: &Axis, px_start: f64, px_end: f64) -> Self {
        match axis.kind {
            ScaleKind::Linear => Self::new_linear(px_start, px_end, axis.min, axis.max),
            ScaleKind::Log10 => Self::new_log10(px_start, px_end, axis.min, axis.max),
        }
    }

    fn px_span(&self) -> f64 {
        self.px_end - self.px_start
    }

    #[inline]
    pub fn to_px(&self, v: f64) -> f64 {
        let frac = if self.log {
            let span = (self.log_max - self.log_min).max(1e-12);
            (v.max(1e-12).log10() - self.log_min) / span
        } else {
            (v - self.vmin) / (self.vmax - self.vmin)
        };
        self.px_start + frac * self.px_span()
    }

    #[inline]
    pub fn from_px(&self, px: f64) -> f64 {
        let span = self.px_span();
        let frac = if span == 0.0 { 0.0 } else { (px - self.px_start) / span };
        if self.log {
            let lspan = (self.log_max - self.log_min).max(1e-12);
            10f64.powf(self.log_min + frac * lspan)
        } else {
            self.vmin + frac * (self.vmax - self.vmin)
        }
    }
}

/// Device mapping of a chart's plot area; device y grows downward.
#[derive(Clone, Copy, Debug)]
pub struct PlotScales {
    pub x: AxisScale,
    pub y: AxisScale,
}

impl PlotScales {
    pub fn new(x: AxisScale, y: AxisScale) -> Self {
        Self { x, y }
    }

    /// Scales for `chart` drawn on a `width` x `height` surface with `insets`.
    pub fn from_chart(chart: &Chart, width: i32, height: i32, insets: &Insets) -> Self {
        let left = insets.left as f64;
        let right = (width - insets.right as i32) as f64;
        let top = insets.top as f64;
        let bottom = (height - insets.bottom as i32) as f64;
        Self {
            x: AxisScale::from_axis(&chart.x_axis, left, right),
            y: AxisScale::from_axis(&chart.y_axis, bottom, top),
        }
    }
}

impl CoordinateMapper for PlotScales {
    fn to_model(&self, device: Point) -> Point {
        Point::new(self.x.from_px(device.x), self.y.from_px(device.y))
    }

    fn to_device(&self, model: Point) -> Point {
        Point::new(self.x.to_px(model.x), self.y.to_px(model.y))
    }
}
