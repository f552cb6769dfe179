// File: crates/chart-constraint/tests/projection.rs
// Purpose: Signed distance, axis projection and movement-range candidates.

use approx::assert_abs_diff_eq;
use chart_constraint::projection::project_along;
use chart_constraint::types::DEFAULT_PRECISION;
use chart_constraint::{movement_range, signed_distance, Endpoint, LineSegment, Point, ProjectionAxis};

fn seg(ax: f64, ay: f64, bx: f64, by: f64) -> LineSegment {
    LineSegment::new(Point::new(ax, ay), Point::new(bx, by))
}

#[test]
fn distance_is_zero_on_the_line() {
    let line = seg(0.0, 0.0, 4.0, 2.0);
    assert_eq!(signed_distance(&line, Point::new(2.0, 1.0)), 0.0);
    assert_eq!(signed_distance(&line, Point::new(-6.0, -3.0)), 0.0);
    assert_eq!(signed_distance(&seg(2.0, 0.0, 2.0, 5.0), Point::new(2.0, 17.0)), 0.0);
    assert_eq!(signed_distance(&seg(0.0, 3.0, 4.0, 3.0), Point::new(-8.0, 3.0)), 0.0);
}

#[test]
fn distance_sign_flips_across_the_line() {
    let line = seg(0.0, 0.0, 1.0, 1.0);
    let above = signed_distance(&line, Point::new(0.0, 1.0));
    let below = signed_distance(&line, Point::new(1.0, 0.0));
    assert_abs_diff_eq!(above, std::f64::consts::FRAC_1_SQRT_2, epsilon = 1e-12);
    assert_abs_diff_eq!(below, -std::f64::consts::FRAC_1_SQRT_2, epsilon = 1e-12);

    let falling = seg(0.0, 4.0, 4.0, 0.0);
    let a = signed_distance(&falling, Point::new(3.0, 3.0));
    let b = signed_distance(&falling, Point::new(1.0, 1.0));
    assert_abs_diff_eq!(a, -b, epsilon = 1e-12);
    assert!(b < 0.0);
}

#[test]
fn distance_matches_point_line_formula() {
    // y = 2x + 1, point (3, 2): |2*3 - 2 + 1| / sqrt(5)
    let d = signed_distance(&seg(0.0, 1.0, 2.0, 5.0), Point::new(3.0, 2.0));
    assert_abs_diff_eq!(d, -(5.0f64).sqrt(), epsilon = 1e-12);
}

#[test]
fn distance_to_axis_aligned_lines() {
    let vertical = seg(2.0, 0.0, 2.0, 5.0);
    assert_eq!(signed_distance(&vertical, Point::new(5.0, 1.0)), 3.0);
    assert_eq!(signed_distance(&vertical, Point::new(0.0, 1.0)), -2.0);
    let horizontal = seg(0.0, 3.0, 4.0, 3.0);
    assert_eq!(signed_distance(&horizontal, Point::new(1.0, 1.0)), -2.0);
    assert_eq!(signed_distance(&horizontal, Point::new(1.0, 4.5)), 1.5);
}

#[test]
fn projection_onto_sloped_line() {
    let line = seg(0.0, 1.0, 2.0, 5.0);
    assert_eq!(project_along(&line, Point::new(10.0, 7.0), ProjectionAxis::X), Point::new(3.0, 7.0));
    assert_eq!(project_along(&line, Point::new(3.0, 100.0), ProjectionAxis::Y), Point::new(3.0, 7.0));
}

#[test]
fn projection_onto_vertical_line() {
    let line = seg(2.0, 0.0, 2.0, 5.0);
    assert_eq!(project_along(&line, Point::new(7.0, 9.0), ProjectionAxis::X), Point::new(2.0, 9.0));
    assert_eq!(project_along(&line, Point::new(2.0, 9.0), ProjectionAxis::Y), Point::new(2.0, 9.0));
    let p = project_along(&line, Point::new(3.0, 9.0), ProjectionAxis::Y);
    assert_eq!(p.x, 2.0);
    assert!(p.y.is_nan());
}

#[test]
fn projection_onto_horizontal_line() {
    let line = seg(0.0, 3.0, 4.0, 3.0);
    assert_eq!(project_along(&line, Point::new(5.0, 4.0), ProjectionAxis::Y), Point::new(5.0, 3.0));
    assert_eq!(project_along(&line, Point::new(5.0, 3.0), ProjectionAxis::X), Point::new(5.0, 3.0));
    let p = project_along(&line, Point::new(5.0, 4.0), ProjectionAxis::X);
    assert!(p.x.is_nan());
    assert_eq!(p.y, 4.0);
}

#[test]
fn movement_range_of_end_point_along_y() {
    let line = seg(0.0, 0.0, 2.0, 1.0);
    let limit = seg(0.0, 3.0, 4.0, 3.0);
    let range = movement_range(&line, Endpoint::End, ProjectionAxis::Y, &limit);

    assert_eq!(range.rays, [seg(0.0, 0.0, 0.0, 3.0), seg(0.0, 0.0, 4.0, 3.0)]);
    // ray 0 is vertical at x = 0: no projection for a point at x = 2
    assert!(range.projected[0].b.y.is_nan());
    assert_eq!(range.projected[1], seg(0.0, 0.0, 2.0, 1.5));
    assert_eq!(range.projected[2], seg(0.0, 0.0, 2.0, 3.0));
    assert_eq!(range.dist_stationary, -3.0);
    assert_eq!(range.dist_moving, -2.0);

    let valid = range.valid_projections(&limit, DEFAULT_PRECISION);
    assert_eq!(valid, vec![seg(0.0, 0.0, 2.0, 3.0)]);
    assert_eq!(range.closest_projection(&limit, DEFAULT_PRECISION), Some(Point::new(2.0, 3.0)));
}

#[test]
fn movement_range_of_start_point() {
    let line = seg(0.0, 0.0, 2.0, 1.0);
    let limit = seg(-1.0, -2.0, 3.0, -2.0);
    let range = movement_range(&line, Endpoint::Start, ProjectionAxis::Y, &limit);

    assert_eq!(range.moving, Point::new(0.0, 0.0));
    assert_eq!(range.projected[0], seg(2.0, 1.0, 0.0, -1.0));
    assert_eq!(range.projected[1], seg(2.0, 1.0, 0.0, 7.0));
    assert_eq!(range.projected[2], seg(2.0, 1.0, 0.0, -2.0));
    assert_eq!(range.dist_moving, 2.0);
    assert_eq!(range.closest_projection(&limit, DEFAULT_PRECISION), Some(Point::new(0.0, -2.0)));
}

#[test]
fn movement_range_without_valid_projection() {
    let line = seg(0.0, 0.0, 1.0, 0.0);
    let limit = seg(5.0, 5.0, 6.0, 6.0);
    let range = movement_range(&line, Endpoint::End, ProjectionAxis::Y, &limit);
    assert_eq!(range.closest_projection(&limit, DEFAULT_PRECISION), None);
}
