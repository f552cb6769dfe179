// File: crates/chart-constraint/tests/geometry.rs
// Purpose: Segment primitives, linear form, rounding and range helpers.

use approx::assert_abs_diff_eq;
use chart_constraint::geometry::{ranges_overlap, round_to, sample_points, value_range};
use chart_constraint::{ConstraintError, LineSegment, LinearFunc, Point};

fn seg(ax: f64, ay: f64, bx: f64, by: f64) -> LineSegment {
    LineSegment::new(Point::new(ax, ay), Point::new(bx, by))
}

#[test]
fn linear_form_of_sloped_segment() {
    let l = seg(1.0, 3.0, 3.0, 7.0).to_linear(false);
    assert_eq!(l.func, LinearFunc::Sloped { k: 2.0, d: 1.0 });
    assert_eq!(l.slope(), 2.0);
}

#[test]
fn linear_form_is_idempotent() {
    let s = seg(4.0, 1.0, -2.0, 5.5);
    for sort in [false, true] {
        let once = s.to_linear(sort);
        let twice = once.seg.to_linear(sort);
        assert_eq!(once, twice);
    }
}

#[test]
fn sort_by_x_reorders_endpoints() {
    let s = seg(4.0, 1.0, -2.0, 5.5);
    let unsorted = s.to_linear(false);
    let sorted = s.to_linear(true);
    assert_eq!(unsorted.seg, s);
    assert_eq!(sorted.seg, seg(-2.0, 5.5, 4.0, 1.0));
    // same line either way
    assert_abs_diff_eq!(unsorted.slope(), sorted.slope(), epsilon = 1e-12);
}

#[test]
fn vertical_and_horizontal_segments() {
    let v = seg(2.0, 0.0, 2.0, 5.0).to_linear(false);
    assert_eq!(v.func, LinearFunc::Vertical { x: 2.0 });
    assert!(v.slope().is_infinite() && v.slope() > 0.0);
    assert_eq!(v.func.intercept(), None);

    let h = seg(-3.0, 4.5, 8.0, 4.5).to_linear(false);
    assert!(h.func.is_horizontal());
    assert_eq!(h.func.intercept(), Some(4.5));

    // zero-length collapses to vertical
    assert!(seg(1.0, 1.0, 1.0, 1.0).to_linear(false).func.is_vertical());
}

#[test]
fn x_at_and_y_at() {
    let f = LinearFunc::through(Point::new(0.0, 1.0), Point::new(2.0, 5.0));
    assert_eq!(f.y_at(3.0), 7.0);
    assert_eq!(f.x_at(7.0), 3.0);
    assert!(LinearFunc::Vertical { x: 1.0 }.y_at(1.0).is_nan());
    assert!(LinearFunc::Sloped { k: 0.0, d: 2.0 }.x_at(2.0).is_nan());
}

#[test]
fn segment_length() {
    assert_eq!(seg(0.0, 0.0, 3.0, 4.0).length(), 5.0);
    assert_eq!(seg(1.0, 1.0, 1.0, -6.0).length(), 7.0);
    assert_eq!(seg(-2.0, 3.0, 2.5, 3.0).length(), 4.5);
    assert_eq!(seg(1.0, 1.0, 1.0, 1.0).length(), 0.0);
}

#[test]
fn rounding_to_decimal_digits() {
    assert_eq!(round_to(0.1 + 0.2, 7), 0.3);
    assert_eq!(round_to(2.123456789, 3), 2.123);
    assert_eq!(round_to(-1.23456, 2), -1.23);
    let third = 1.0 / 3.0;
    assert_eq!(round_to(third, 0), third);
    assert_eq!(round_to(third, -2), third);
    assert!(round_to(f64::NAN, 5).is_nan());
}

#[test]
fn interval_overlap_is_symmetric() {
    let cases = [
        ((0.0, 2.0), (1.0, 3.0), true),
        ((0.0, 5.0), (1.0, 2.0), true),
        ((2.0, 0.0), (3.0, 1.0), true),
        ((0.0, 1.0), (1.0, 2.0), true),
        ((0.0, 1.0), (1.5, 2.0), false),
    ];
    for (r1, r2, want) in cases {
        assert_eq!(ranges_overlap(r1, r2), want, "{r1:?} vs {r2:?}");
        assert_eq!(ranges_overlap(r2, r1), want, "{r2:?} vs {r1:?}");
    }
}

#[test]
fn value_range_around_index() {
    let values = [1.0, 3.0, 5.0, 7.0];
    assert_eq!(value_range(&values, -1, 0.0, 10.0), Ok((1.0, 7.0)));
    assert_eq!(value_range(&values, 2, 0.0, 10.0), Ok((3.0, 7.0)));
    // first element is the smallest: paired with the lower default
    assert_eq!(value_range(&values, 0, 0.0, 10.0), Ok((0.0, 3.0)));
    assert_eq!(value_range(&values, 3, 0.0, 10.0), Ok((5.0, 10.0)));
    assert_eq!(value_range(&[], -1, -4.0, 4.0), Ok((-4.0, 4.0)));
    assert_eq!(value_range(&[2.0], 0, -4.0, 4.0), Ok((-4.0, 4.0)));
}

#[test]
fn value_range_rejects_illegal_index() {
    let values = [1.0, 3.0];
    assert_eq!(value_range(&values, 2, 0.0, 1.0), Err(ConstraintError::IllegalIndex { index: 2, len: 2 }));
    assert_eq!(value_range(&values, -2, 0.0, 1.0), Err(ConstraintError::IllegalIndex { index: -2, len: 2 }));
    assert!(value_range(&[], 0, 0.0, 1.0).is_err());
}

#[test]
fn sample_curve_shape() {
    let pts = sample_points(4);
    assert_eq!(pts.len(), 4);
    assert_eq!(pts[0], Point::new(0.5, 2.75));
    assert_eq!(pts[3], Point::new(3.5, 7.25));
}
