#[cfg(test)]
#[path = "geom_test.rs"]
mod geom_test;

use crate::consts::NARROW_BREAKPOINT_PX;

/// A point in surface space (CSS pixels, origin top-left).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`.
    #[must_use]
    pub fn distance(self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// Viewport-width bucket that selects the particle count band.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeClass {
    /// Width at or below the narrow breakpoint.
    Narrow,
    Wide,
}

/// Size of the drawing surface in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    #[must_use]
    pub fn size_class(&self) -> SizeClass {
        if self.width <= NARROW_BREAKPOINT_PX { SizeClass::Narrow } else { SizeClass::Wide }
    }

    /// Whether `self` differs from `previous` by more than `threshold`
    /// (a fraction, e.g. `0.2`) in either dimension.
    ///
    /// A zero previous dimension counts any non-zero new value as significant.
    #[must_use]
    pub fn differs_significantly(&self, previous: Viewport, threshold: f64) -> bool {
        relative_change(previous.width, self.width) > threshold
            || relative_change(previous.height, self.height) > threshold
    }

    /// Whether `p` lies inside the surface, edges included.
    #[must_use]
    pub fn contains(&self, p: Point) -> bool {
        (0.0..=self.width).contains(&p.x) && (0.0..=self.height).contains(&p.y)
    }
}

fn relative_change(old: f64, new: f64) -> f64 {
    if old == 0.0 {
        return if new == 0.0 { 0.0 } else { f64::INFINITY };
    }
    ((new - old) / old).abs()
}
