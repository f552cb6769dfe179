// File: crates/chart-constraint/src/projection.rs
// Summary: Signed point/line distance and axis-aligned projection of a moving endpoint onto a limit.

use crate::geometry::{LineSegment, LinearFunc};
use crate::intersect::intersect;
use crate::types::Point;

/// Which endpoint of a segment moves.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Endpoint {
    Start,
    End,
}

impl Endpoint {
    pub fn of(self, seg: &LineSegment) -> Point {
        match self {
            Endpoint::Start => seg.a,
            Endpoint::End => seg.b,
        }
    }

    pub fn opposite(self) -> Self {
        match self {
            Endpoint::Start => Endpoint::End,
            Endpoint::End => Endpoint::Start,
        }
    }
}

/// Axis along which a point is moved when projecting it onto a line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProjectionAxis {
    /// Keep `y`, solve for `x`.
    X,
    /// Keep `x`, solve for `y`.
    Y,
}

impl ProjectionAxis {
    pub fn component(self, p: Point) -> f64 {
        match self {
            ProjectionAxis::X => p.x,
            ProjectionAxis::Y => p.y,
        }
    }
}

/// Perpendicular distance of `point` to the line through `line`.
///
/// Vertical lines measure `point.x - a.x`, horizontal ones `point.y - a.y`.
/// Otherwise the magnitude is combined from the horizontal and vertical
/// offsets to the line, negative when the point lies below it.
pub fn signed_distance(line: &LineSegment, point: Point) -> f64 {
    let func = LinearFunc::through(line.a, line.b);
    match func {
        LinearFunc::Vertical { x } => point.x - x,
        LinearFunc::Sloped { k, .. } if k == 0.0 => point.y - line.a.y,
        LinearFunc::Sloped { .. } => {
            let fpx = point.x - func.x_at(point.y);
            let fpy = point.y - func.y_at(point.x);
            if fpx == 0.0 || fpy == 0.0 {
                return 0.0;
            }
            let magnitude = (1.0 / (1.0 / (fpx * fpx) + 1.0 / (fpy * fpy))).sqrt();
            if fpy < 0.0 { -magnitude } else { magnitude }
        }
    }
}

/// Move `point` along `axis` until it lies on the line through `target`.
///
/// A fixed coordinate that cannot be matched (e.g. projecting along y onto a
/// vertical line at a different x) comes back as NaN.
pub fn project_along(target: &LineSegment, point: Point, axis: ProjectionAxis) -> Point {
    let func = LinearFunc::through(target.a, target.b);
    match (axis, func) {
        (ProjectionAxis::X, LinearFunc::Vertical { x }) => Point::new(x, point.y),
        (ProjectionAxis::X, LinearFunc::Sloped { k, d }) if k == 0.0 => {
            let x = if point.y == d { point.x } else { f64::NAN };
            Point::new(x, point.y)
        }
        (ProjectionAxis::X, _) => Point::new(func.x_at(point.y), point.y),
        (ProjectionAxis::Y, LinearFunc::Vertical { x }) => {
            let y = if point.x == x { point.y } else { f64::NAN };
            Point::new(x, y)
        }
        (ProjectionAxis::Y, _) => Point::new(point.x, func.y_at(point.x)),
    }
}

/// Candidate landing positions of a moving endpoint against one limit segment.
#[derive(Clone, Debug, PartialEq)]
pub struct MovementRange {
    /// Stationary endpoint to limit start, stationary endpoint to limit end.
    pub rays: [LineSegment; 2],
    /// Stationary endpoint to the moving endpoint projected onto ray 0, ray 1
    /// and the limit line.
    pub projected: [LineSegment; 3],
    pub dist_stationary: f64,
    pub dist_moving: f64,
    pub moving: Point,
    pub axis: ProjectionAxis,
}

/// Enumerate where `endpoint` of `line` would land if `limit` were a wall,
/// moving along `axis`. `line` and `limit` are expected not to intersect.
pub fn movement_range(line: &LineSegment, endpoint: Endpoint, axis: ProjectionAxis, limit: &LineSegment) -> MovementRange {
    let moving = endpoint.of(line);
    let stationary = endpoint.opposite().of(line);

    let rays = [LineSegment::new(stationary, limit.a), LineSegment::new(stationary, limit.b)];
    let projected = [rays[0], rays[1], *limit].map(|target| LineSegment::new(stationary, project_along(&target, moving, axis)));

    MovementRange {
        rays,
        projected,
        dist_stationary: signed_distance(limit, stationary),
        dist_moving: signed_distance(limit, moving),
        moving,
        axis,
    }
}

impl MovementRange {
    /// Projected segments that actually reach the limit segment.
    pub fn valid_projections(&self, limit: &LineSegment, precision: i32) -> Vec<LineSegment> {
        self.projected
            .iter()
            .filter(|seg| intersect(seg, limit, precision).is_some())
            .copied()
            .collect()
    }

    /// Valid projected point closest to the moving endpoint along the axis.
    pub fn closest_projection(&self, limit: &LineSegment, precision: i32) -> Option<Point> {
        let start = self.axis.component(self.moving);
        self.valid_projections(limit, precision)
            .into_iter()
            .map(|seg| ((self.axis.component(seg.b) - start).abs(), seg.b))
            .min_by(|(da, _), (db, _)| da.total_cmp(db))
            .map(|(_, p)| p)
    }
}
