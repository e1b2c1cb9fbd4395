#![allow(clippy::float_cmp)]

use super::*;

const EPS: f64 = 1e-9;

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < EPS
}

fn origin() -> Point {
    Point::new(0.0, 0.0)
}

// Board space: y grows downward, so "north" is negative y.
fn north() -> Point {
    Point::new(0.0, -10.0)
}

fn east() -> Point {
    Point::new(10.0, 0.0)
}

fn west() -> Point {
    Point::new(-10.0, 0.0)
}

fn south() -> Point {
    Point::new(0.0, 10.0)
}

// =============================================================
// pointer_angle
// =============================================================

#[test]
fn pointer_angle_cardinal_directions() {
    assert!(approx(pointer_angle(origin(), east()), 0.0));
    assert!(approx(pointer_angle(origin(), south()), 90.0));
    assert!(approx(pointer_angle(origin(), west()), 180.0));
    assert!(approx(pointer_angle(origin(), north()), -90.0));
}

#[test]
fn pointer_angle_relative_to_offset_center() {
    let center = Point::new(100.0, 50.0);
    assert!(approx(pointer_angle(center, Point::new(150.0, 50.0)), 0.0));
}

// =============================================================
// normalize_delta
// =============================================================

#[test]
fn normalize_delta_passes_small_values() {
    assert_eq!(normalize_delta(45.0), 45.0);
    assert_eq!(normalize_delta(-45.0), -45.0);
    assert_eq!(normalize_delta(180.0), 180.0);
}

#[test]
fn normalize_delta_folds_long_way_around() {
    assert_eq!(normalize_delta(270.0), -90.0);
    assert_eq!(normalize_delta(-270.0), 90.0);
    assert_eq!(normalize_delta(359.0), -1.0);
}

#[test]
fn normalize_delta_reports_half_turn_as_positive() {
    assert_eq!(normalize_delta(-180.0), 180.0);
    assert_eq!(normalize_delta(180.0), 180.0);
}

// =============================================================
// normalize_angle
// =============================================================

#[test]
fn normalize_angle_in_range_for_many_inputs() {
    let mut angle = -1000.0;
    while angle <= 1000.0 {
        let n = normalize_angle(angle);
        assert!((0.0..360.0).contains(&n), "{angle} -> {n}");
        let shifted = normalize_angle(angle + 450.0);
        assert!((0.0..360.0).contains(&shifted), "{angle}+450 -> {shifted}");
        angle += 7.3;
    }
}

#[test]
fn normalize_angle_known_values() {
    assert_eq!(normalize_angle(0.0), 0.0);
    assert_eq!(normalize_angle(360.0), 0.0);
    assert_eq!(normalize_angle(450.0), 90.0);
    assert_eq!(normalize_angle(-90.0), 270.0);
    assert_eq!(normalize_angle(-720.0), 0.0);
}

#[test]
fn normalize_angle_tiny_negative_stays_below_full_turn() {
    let n = normalize_angle(-1e-14);
    assert!((0.0..360.0).contains(&n));
}

// =============================================================
// RotationResolver
// =============================================================

#[test]
fn north_to_east_is_positive() {
    let r = RotationResolver::new(origin(), north(), 0.0);
    let delta = r.delta(east());
    assert!(delta > 0.0);
    assert!(approx(delta, 90.0));
}

#[test]
fn north_to_west_is_negative() {
    let r = RotationResolver::new(origin(), north(), 0.0);
    let delta = r.delta(west());
    assert!(delta < 0.0);
    assert!(approx(delta, -90.0));
}

#[test]
fn crossing_the_atan2_seam_takes_short_path() {
    // West sits on the +/-180 seam: just above and just below it.
    let above = Point::new(-10.0, -0.1);
    let below = Point::new(-10.0, 0.1);
    let r = RotationResolver::new(origin(), above, 0.0);
    let delta = r.delta(below);
    assert!(delta < 0.0 && delta > -2.0, "delta {delta}");
}

#[test]
fn west_to_east_is_a_positive_half_turn() {
    let r = RotationResolver::new(origin(), west(), 0.0);
    assert!(approx(r.delta(east()), 180.0));
    assert!(approx(r.resolve(east()), 180.0));
}

#[test]
fn resolve_adds_start_rotation_unbounded() {
    let r = RotationResolver::new(origin(), north(), 350.0);
    assert!(approx(r.resolve(east()), 440.0));
    let r = RotationResolver::new(origin(), north(), -10.0);
    assert!(approx(r.resolve(west()), -100.0));
}

#[test]
fn resolve_without_movement_returns_start_rotation() {
    let r = RotationResolver::new(Point::new(5.0, 5.0), Point::new(9.0, 1.0), 33.0);
    assert!(approx(r.resolve(Point::new(9.0, 1.0)), 33.0));
    assert_eq!(r.start_rotation(), 33.0);
    assert_eq!(r.center(), Point::new(5.0, 5.0));
}

#[test]
fn resolve_is_scale_invariant_along_ray() {
    let r = RotationResolver::new(origin(), north(), 0.0);
    assert!(approx(r.resolve(Point::new(1.0, 0.0)), r.resolve(Point::new(1000.0, 0.0))));
}
