//! Drawing surface abstraction.
//!
//! The field only ever clears, fills circles and strokes lines. [`Surface`]
//! captures exactly that so the per-frame logic can run against a browser
//! canvas ([`crate::web::CanvasSurface`]) or a [`RecordingSurface`] in tests
//! and the headless driver.

#[cfg(test)]
#[path = "surface_test.rs"]
mod surface_test;

use crate::geom::{Point, Viewport};
use crate::theme::Rgba;

/// Immediate-mode 2D target sized in CSS pixels.
pub trait Surface {
    /// Set the backing size. Takes effect before the next draw.
    fn resize(&mut self, viewport: Viewport);

    /// Erase the whole surface.
    fn clear(&mut self);

    fn fill_circle(&mut self, center: Point, radius: f64, color: Rgba);

    fn stroke_line(&mut self, from: Point, to: Point, width: f64, color: Rgba);
}

/// One recorded surface operation.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCall {
    Resize(Viewport),
    Clear,
    Circle { center: Point, radius: f64, color: Rgba },
    Line { from: Point, to: Point, width: f64, color: Rgba },
}

/// A surface that records every call instead of drawing.
#[derive(Debug, Default, Clone)]
pub struct RecordingSurface {
    pub viewport: Viewport,
    pub calls: Vec<DrawCall>,
}

impl RecordingSurface {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self { viewport, calls: Vec::new() }
    }

    /// Drop recorded calls, keeping the size.
    pub fn reset(&mut self) {
        self.calls.clear();
    }

    #[must_use]
    pub fn circles(&self) -> usize {
        self.calls.iter().filter(|c| matches!(c, DrawCall::Circle { .. })).count()
    }

    #[must_use]
    pub fn lines(&self) -> usize {
        self.calls.iter().filter(|c| matches!(c, DrawCall::Line { .. })).count()
    }

    #[must_use]
    pub fn clears(&self) -> usize {
        self.calls.iter().filter(|c| matches!(c, DrawCall::Clear)).count()
    }

    /// Number of calls that put pixels on the surface.
    #[must_use]
    pub fn draws(&self) -> usize {
        self.circles() + self.lines()
    }
}

impl Surface for RecordingSurface {
    fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        self.calls.push(DrawCall::Resize(viewport));
    }

    fn clear(&mut self) {
        self.calls.push(DrawCall::Clear);
    }

    fn fill_circle(&mut self, center: Point, radius: f64, color: Rgba) {
        self.calls.push(DrawCall::Circle { center, radius, color });
    }

    fn stroke_line(&mut self, from: Point, to: Point, width: f64, color: Rgba) {
        self.calls.push(DrawCall::Line { from, to, width, color });
    }
}
