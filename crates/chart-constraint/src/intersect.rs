// File: crates/chart-constraint/src/intersect.rs
// Summary: Segment/segment intersection with parallel, vertical and coincident handling.
// Notes:
// - All comparisons run on coordinates rounded to `precision` decimal digits,
//   so near-parallel floating results compare as exactly equal.
// - Pass `precision <= 0` for unrounded arithmetic.

use crate::geometry::{ranges_overlap, round_point, round_to, LineSegment, LinearFunc, LinearSegment};
use crate::types::Point;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IntersectionKind {
    /// The segments meet in a single point.
    Crossing,
    /// The segments are collinear and overlap; the point is a representative.
    Coincident,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Intersection {
    pub point: Point,
    pub kind: IntersectionKind,
}

impl Intersection {
    pub fn is_coincident(&self) -> bool {
        self.kind == IntersectionKind::Coincident
    }
}

/// Intersection of two finite segments, if any.
pub fn intersect(l1: &LineSegment, l2: &LineSegment, precision: i32) -> Option<Intersection> {
    let s1 = l1.rounded(precision).to_linear(true);
    let s2 = l2.rounded(precision).to_linear(true);
    intersect_with_origin(&s1, &s2, round_point(l1.a, precision), precision)
}

/// Same as [`intersect`] for segments whose linear form is already known.
/// The coincident representative is `l1.seg.a`.
pub fn intersect_linear(l1: &LinearSegment, l2: &LinearSegment, precision: i32) -> Option<Intersection> {
    intersect_with_origin(l1, l2, round_point(l1.seg.a, precision), precision)
}

fn intersect_with_origin(s1: &LinearSegment, s2: &LinearSegment, origin: Point, precision: i32) -> Option<Intersection> {
    let parallel = s1.func.is_parallel(&s2.func);

    if parallel {
        if is_coincident(s1, s2) {
            return Some(Intersection { point: origin, kind: IntersectionKind::Coincident });
        }
        return None;
    }

    let (x, y) = match (s1.func, s2.func) {
        (LinearFunc::Vertical { x }, other) | (other, LinearFunc::Vertical { x }) => (x, other.y_at(x)),
        (LinearFunc::Sloped { k: k1, d: d1 }, LinearFunc::Sloped { k: k2, d: d2 }) => {
            let x = (d2 - d1) / (k1 - k2);
            (x, k1 * x + d1)
        }
    };
    let point = Point::new(round_to(x, precision), round_to(y, precision));

    if s1.seg.bounds_contain(point) && s2.seg.bounds_contain(point) {
        Some(Intersection { point, kind: IntersectionKind::Crossing })
    } else {
        None
    }
}

/// Same line; vertical segments must also share part of their y-range.
/// Callers have already established parallelism.
fn is_coincident(s1: &LinearSegment, s2: &LinearSegment) -> bool {
    match (s1.func, s2.func) {
        (LinearFunc::Sloped { d: d1, .. }, LinearFunc::Sloped { d: d2, .. }) => d1 == d2,
        (LinearFunc::Vertical { x: x1 }, LinearFunc::Vertical { x: x2 }) => {
            x1 == x2 && ranges_overlap(s1.seg.y_range(), s2.seg.y_range())
        }
        _ => false,
    }
}

/// True when `seg` touches any consecutive pair of `curve`.
pub fn crosses_polyline(seg: &LineSegment, curve: &[Point], precision: i32) -> bool {
    curve
        .windows(2)
        .any(|w| intersect(seg, &LineSegment::new(w[0], w[1]), precision).is_some())
}
