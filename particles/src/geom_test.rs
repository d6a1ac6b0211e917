#![allow(clippy::float_cmp)]

use super::*;

// --- Point ---

#[test]
fn point_new() {
    let p = Point::new(3.0, 4.0);
    assert_eq!(p.x, 3.0);
    assert_eq!(p.y, 4.0);
}

#[test]
fn point_distance_pythagorean() {
    assert_eq!(Point::new(0.0, 0.0).distance(Point::new(3.0, 4.0)), 5.0);
}

#[test]
fn point_distance_is_symmetric() {
    let a = Point::new(-2.0, 7.5);
    let b = Point::new(10.0, 1.0);
    assert_eq!(a.distance(b), b.distance(a));
}

#[test]
fn point_distance_to_self_is_zero() {
    let p = Point::new(12.0, 34.0);
    assert_eq!(p.distance(p), 0.0);
}

// --- Size class ---

#[test]
fn size_class_narrow_at_breakpoint() {
    assert_eq!(Viewport::new(768.0, 1000.0).size_class(), SizeClass::Narrow);
}

#[test]
fn size_class_wide_just_above_breakpoint() {
    assert_eq!(Viewport::new(768.5, 1000.0).size_class(), SizeClass::Wide);
}

#[test]
fn size_class_phone_is_narrow() {
    assert_eq!(Viewport::new(390.0, 844.0).size_class(), SizeClass::Narrow);
}

// --- differs_significantly ---

#[test]
fn small_change_is_not_significant() {
    let prev = Viewport::new(1000.0, 800.0);
    assert!(!Viewport::new(1100.0, 850.0).differs_significantly(prev, 0.2));
}

#[test]
fn exactly_threshold_is_not_significant() {
    let prev = Viewport::new(1000.0, 800.0);
    assert!(!Viewport::new(1200.0, 800.0).differs_significantly(prev, 0.2));
}

#[test]
fn width_growth_over_threshold_is_significant() {
    let prev = Viewport::new(1000.0, 800.0);
    assert!(Viewport::new(1250.0, 800.0).differs_significantly(prev, 0.2));
}

#[test]
fn height_shrink_over_threshold_is_significant() {
    let prev = Viewport::new(1000.0, 800.0);
    assert!(Viewport::new(1000.0, 600.0).differs_significantly(prev, 0.2));
}

#[test]
fn from_zero_size_any_growth_is_significant() {
    let prev = Viewport::new(0.0, 0.0);
    assert!(Viewport::new(10.0, 0.0).differs_significantly(prev, 0.2));
    assert!(!Viewport::new(0.0, 0.0).differs_significantly(prev, 0.2));
}

// --- contains ---

#[test]
fn contains_edges() {
    let vp = Viewport::new(100.0, 50.0);
    assert!(vp.contains(Point::new(0.0, 0.0)));
    assert!(vp.contains(Point::new(100.0, 50.0)));
    assert!(!vp.contains(Point::new(-0.1, 10.0)));
    assert!(!vp.contains(Point::new(10.0, 50.1)));
}

#[test]
fn area_multiplies_dimensions() {
    assert_eq!(Viewport::new(20.0, 30.0).area(), 600.0);
}
