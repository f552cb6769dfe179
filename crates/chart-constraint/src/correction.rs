// File: crates/chart-constraint/src/correction.rs
// Summary: Bisection of a device-space drag vector until the mapped model point is admissible.
// Notes:
// - Bisecting happens in device space because the device/model mapping may be
//   non-linear (log scales, inverted axes); halving in model space would not
//   track half the visual drag distance.
// - Non-convergence is not an error; the best candidate is returned.

use crate::error::Result;
use crate::geometry::{LineSegment, LinearFunc, LinearSegment};
use crate::limits::{ChartSource, LimitCheckResult, LimitChecker};
use crate::types::{Point, DEFAULT_TOLERANCE, MAX_ITERATIONS};

/// Maps between device (pixel) and model (data) coordinates.
pub trait CoordinateMapper {
    fn to_model(&self, device: Point) -> Point;
    fn to_device(&self, model: Point) -> Point;
}

/// One bisection step, handed to the UI for live feedback.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CorrectionStep {
    pub iteration: usize,
    /// Current drag line in device space (start to candidate endpoint).
    pub device: LineSegment,
    /// Candidate in model space, after any index clamp.
    pub model: Point,
    pub in_limits: bool,
}

/// Redraw hook invoked after every step. Errors are logged and ignored.
pub trait DragFeedback {
    fn show_step(&mut self, step: &CorrectionStep) -> anyhow::Result<()>;
}

impl<F> DragFeedback for F
where
    F: FnMut(&CorrectionStep) -> anyhow::Result<()>,
{
    fn show_step(&mut self, step: &CorrectionStep) -> anyhow::Result<()> {
        self(step)
    }
}

/// Feedback sink that does nothing.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoFeedback;

impl DragFeedback for NoFeedback {
    fn show_step(&mut self, _step: &CorrectionStep) -> anyhow::Result<()> {
        Ok(())
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CorrectionOptions {
    pub max_iterations: usize,
    /// Stop once the last halving step is at most this large on both axes (device units).
    pub tolerance: f64,
}

impl Default for CorrectionOptions {
    fn default() -> Self {
        Self { max_iterations: MAX_ITERATIONS, tolerance: DEFAULT_TOLERANCE }
    }
}

impl CorrectionOptions {
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Correction {
    /// Suggested model-space position.
    pub position: Point,
    /// Device-space endpoint the suggestion was computed from.
    pub device: Point,
    pub iterations: usize,
    pub in_limits: bool,
    /// False when the iteration cap was hit first.
    pub converged: bool,
}

/// Move `end` by `delta` along the drag line; `sign` picks the direction.
fn step_along(drag: &LinearSegment, end: Point, delta: (f64, f64), sign: f64) -> Point {
    match drag.func {
        LinearFunc::Vertical { .. } => Point::new(end.x, end.y + sign * delta.1),
        func @ LinearFunc::Sloped { .. } => {
            let x = end.x + sign * delta.0;
            Point::new(x, func.y_at(x))
        }
    }
}

impl<'c, C: ChartSource + ?Sized> LimitChecker<'c, C> {
    /// Bisect the drag from `start_px` to `end_px` until the mapped endpoint
    /// is in limits and the last step is within tolerance, or the iteration
    /// cap is reached.
    ///
    /// `initial` is the verdict for the unmodified target. If it is already
    /// in limits the target (or its clamp) is returned without iterating.
    pub fn compute_suggested<M, F>(
        &mut self,
        start_px: Point,
        end_px: Point,
        initial: &LimitCheckResult,
        mapper: &M,
        feedback: &mut F,
        options: &CorrectionOptions,
    ) -> Result<Correction>
    where
        M: CoordinateMapper + ?Sized,
        F: DragFeedback + ?Sized,
    {
        if initial.in_limits {
            let position = initial.corrected_position.unwrap_or_else(|| mapper.to_model(end_px));
            return Ok(Correction { position, device: end_px, iterations: 0, in_limits: true, converged: true });
        }

        let drag = LineSegment::new(start_px, end_px).to_linear(false);
        let max_iterations = options.max_iterations.max(1);
        let mut end = end_px;
        let mut delta = (drag.seg.dx(), drag.seg.dy());
        let mut in_limits = false;
        let mut iterations = 0;
        let mut converged = false;
        let mut position = initial.corrected_position.unwrap_or_else(|| mapper.to_model(end_px));

        while iterations < max_iterations {
            iterations += 1;
            delta = (delta.0 / 2.0, delta.1 / 2.0);
            // forward toward the target while admissible, back toward the start otherwise
            let sign = if in_limits { 1.0 } else { -1.0 };
            end = step_along(&drag, end, delta, sign);

            let candidate = mapper.to_model(end);
            let check = self.is_within_limits(candidate)?;
            in_limits = check.in_limits;
            position = check.corrected_position.unwrap_or(candidate);

            let step = CorrectionStep { iteration: iterations, device: LineSegment::new(start_px, end), model: position, in_limits };
            if let Err(err) = feedback.show_step(&step) {
                log::warn!("drag feedback failed at step {iterations}: {err:#}");
            }
            log::debug!(
                "step {iterations}: device ({:.3}, {:.3}) -> model ({:.6}, {:.6}), in_limits={in_limits}, delta=({:.4}, {:.4})",
                end.x, end.y, position.x, position.y, delta.0, delta.1
            );

            if in_limits && delta.0.abs() <= options.tolerance && delta.1.abs() <= options.tolerance {
                converged = true;
                break;
            }
        }

        if converged {
            log::info!("drag corrected in {iterations} iterations to ({}, {})", position.x, position.y);
        } else {
            log::warn!(
                "drag correction stopped after {iterations} iterations without converging (in_limits={in_limits})"
            );
        }
        Ok(Correction { position, device: end, iterations, in_limits, converged })
    }

    /// Check the mapped target of a drag and correct it when out of limits.
    pub fn correct_drag<M, F>(
        &mut self,
        start_px: Point,
        end_px: Point,
        mapper: &M,
        feedback: &mut F,
        options: &CorrectionOptions,
    ) -> Result<Correction>
    where
        M: CoordinateMapper + ?Sized,
        F: DragFeedback + ?Sized,
    {
        let initial = self.is_within_limits(mapper.to_model(end_px))?;
        self.compute_suggested(start_px, end_px, &initial, mapper, feedback, options)
    }
}
