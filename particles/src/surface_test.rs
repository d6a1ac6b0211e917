use super::*;
use crate::theme::Theme;

#[test]
fn new_surface_is_empty() {
    let s = RecordingSurface::new(Viewport::new(10.0, 10.0));
    assert!(s.calls.is_empty());
    assert_eq!(s.draws(), 0);
}

#[test]
fn records_calls_in_order() {
    let mut s = RecordingSurface::default();
    let c = Theme::Dark.with_alpha(0.5);
    s.clear();
    s.fill_circle(Point::new(1.0, 2.0), 3.0, c);
    s.stroke_line(Point::new(0.0, 0.0), Point::new(5.0, 5.0), 0.5, c);
    assert_eq!(s.calls.len(), 3);
    assert_eq!(s.calls[0], DrawCall::Clear);
    assert!(matches!(s.calls[1], DrawCall::Circle { radius, .. } if (radius - 3.0).abs() < f64::EPSILON));
    assert!(matches!(s.calls[2], DrawCall::Line { .. }));
}

#[test]
fn counters_split_by_kind() {
    let mut s = RecordingSurface::default();
    let c = Theme::Light.with_alpha(1.0);
    s.clear();
    s.fill_circle(Point::default(), 1.0, c);
    s.fill_circle(Point::default(), 1.0, c);
    s.stroke_line(Point::default(), Point::default(), 1.0, c);
    assert_eq!(s.clears(), 1);
    assert_eq!(s.circles(), 2);
    assert_eq!(s.lines(), 1);
    assert_eq!(s.draws(), 3);
}

#[test]
fn resize_updates_viewport_and_records() {
    let mut s = RecordingSurface::default();
    s.resize(Viewport::new(640.0, 480.0));
    assert_eq!(s.viewport, Viewport::new(640.0, 480.0));
    assert_eq!(s.calls, vec![DrawCall::Resize(Viewport::new(640.0, 480.0))]);
}

#[test]
fn reset_keeps_viewport() {
    let mut s = RecordingSurface::new(Viewport::new(3.0, 4.0));
    s.clear();
    s.reset();
    assert!(s.calls.is_empty());
    assert_eq!(s.viewport, Viewport::new(3.0, 4.0));
}
