#[cfg(test)]
#[path = "particle_test.rs"]
mod particle_test;

use rand::Rng;

use crate::config::FieldConfig;
use crate::geom::{Point, Viewport};

/// A single animated point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub position: Point,
    pub radius: f64,
    /// Displacement per tick (`speedX`, `speedY`).
    pub velocity: Point,
    /// Base opacity in `[0, 1]`.
    pub opacity: f64,
}

impl Particle {
    /// A particle with uniformly random position, size, velocity and opacity.
    pub fn spawn<R: Rng>(rng: &mut R, viewport: Viewport, config: &FieldConfig) -> Self {
        let position = Point::new(rng.random::<f64>() * viewport.width, rng.random::<f64>() * viewport.height);
        let radius = lerp(config.min_radius, config.max_radius, rng.random());
        let velocity = Point::new(
            (rng.random::<f64>() - 0.5) * config.speed,
            (rng.random::<f64>() - 0.5) * config.speed,
        );
        let opacity = lerp(config.min_opacity, config.max_opacity, rng.random());
        Self { position, radius, velocity, opacity }
    }

    /// Move one tick along the current velocity.
    pub fn advance(&mut self) {
        self.position.x += self.velocity.x;
        self.position.y += self.velocity.y;
    }

    /// Displacement the pointer applies to this particle this tick.
    ///
    /// Zero at or beyond `radius`. Inside, the push points away from the
    /// pointer with magnitude `(radius - d) / radius * strength`. A pointer
    /// exactly on the particle gets the full `strength`, along the particle's
    /// own heading (or +x if it is at rest).
    #[must_use]
    pub fn repulsion(&self, pointer: Point, radius: f64, strength: f64) -> Point {
        let dx = self.position.x - pointer.x;
        let dy = self.position.y - pointer.y;
        let distance = dx.hypot(dy);
        if distance >= radius {
            return Point::default();
        }

        let magnitude = (radius - distance) / radius * strength;
        let (ux, uy) = if distance > 0.0 {
            (dx / distance, dy / distance)
        } else {
            let speed = self.velocity.x.hypot(self.velocity.y);
            if speed > 0.0 { (self.velocity.x / speed, self.velocity.y / speed) } else { (1.0, 0.0) }
        };
        Point::new(ux * magnitude, uy * magnitude)
    }

    /// Trim `push` so it cannot carry the particle past an edge.
    ///
    /// On each axis the push may bring the particle at most onto the edge it
    /// points toward, and never further out if the particle is already
    /// outside. Inward pushes are untouched. Only the pointer is limited;
    /// the particle's own velocity still crosses edges and bounces.
    #[must_use]
    pub fn limit_push(&self, push: Point, viewport: Viewport) -> Point {
        let axis = |p: f64, pos: f64, extent: f64| {
            if p < 0.0 {
                p.max(-pos.max(0.0))
            } else {
                p.min((extent - pos).max(0.0))
            }
        };
        Point::new(
            axis(push.x, self.position.x, viewport.width),
            axis(push.y, self.position.y, viewport.height),
        )
    }

    pub fn displace(&mut self, by: Point) {
        self.position.x += by.x;
        self.position.y += by.y;
    }

    /// Reflect velocity on any axis where the particle is outside the surface
    /// and still heading outward. Position is left alone, so a particle may
    /// render past the edge for a frame.
    ///
    /// Returns `true` if a component was inverted.
    pub fn bounce(&mut self, viewport: Viewport) -> bool {
        let mut bounced = false;
        if (self.position.x < 0.0 && self.velocity.x < 0.0) || (self.position.x > viewport.width && self.velocity.x > 0.0) {
            self.velocity.x = -self.velocity.x;
            bounced = true;
        }
        if (self.position.y < 0.0 && self.velocity.y < 0.0) || (self.position.y > viewport.height && self.velocity.y > 0.0) {
            self.velocity.y = -self.velocity.y;
            bounced = true;
        }
        bounced
    }
}

fn lerp(min: f64, max: f64, t: f64) -> f64 {
    min + (max - min) * t
}
