//! The particle field core.
//!
//! DESIGN
//! ======
//! `FieldCore` owns every piece of mutable state the animation touches: the
//! particles, the latest pointer position, the current and last-seeded
//! viewport sizes, and the pending resize deadline. It has no knowledge of
//! the browser; time arrives as an explicit `now_ms` and pixels leave
//! through a [`Surface`], so a frame can be driven synthetically in tests.
//!
//! Resizes update the viewport at once but only re-seed after a quiet
//! period, and only when the size moved past the threshold relative to the
//! size the particles were last seeded for.

#[cfg(test)]
#[path = "field_test.rs"]
mod field_test;

use rand::SeedableRng;
use rand::rngs::SmallRng;
use tracing::{debug, info};

use crate::config::FieldConfig;
use crate::error::FieldError;
use crate::geom::{Point, Viewport};
use crate::particle::Particle;
use crate::render;
use crate::surface::Surface;
use crate::theme::Theme;

/// Particle count for a viewport: density times area, clamped to the band of
/// the viewport's size class.
#[must_use]
pub fn particle_count(viewport: Viewport, config: &FieldConfig) -> usize {
    let raw = (config.density * viewport.area()).floor();
    let raw = if raw.is_finite() && raw > 0.0 { raw as usize } else { 0 };
    config.band_for(viewport).clamp(raw)
}

/// What one frame did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TickStats {
    pub particles: usize,
    pub connections: usize,
    /// The particle set was rebuilt at the start of this frame.
    pub reseeded: bool,
}

pub struct FieldCore {
    config: FieldConfig,
    theme: Theme,
    particles: Vec<Particle>,
    pointer: Option<Point>,
    viewport: Viewport,
    seeded_viewport: Viewport,
    reseed_due_ms: Option<f64>,
    rng: SmallRng,
}

impl FieldCore {
    /// Validate `config` and seed particles for `viewport`.
    ///
    /// # Errors
    ///
    /// Returns [`FieldError::Config`] if `config` fails validation.
    pub fn new(config: FieldConfig, theme: Theme, viewport: Viewport, seed: u64) -> Result<Self, FieldError> {
        config.validate()?;
        let mut core = Self {
            config,
            theme,
            particles: Vec::new(),
            pointer: None,
            viewport,
            seeded_viewport: viewport,
            reseed_due_ms: None,
            rng: SmallRng::seed_from_u64(seed),
        };
        core.reseed();
        Ok(core)
    }

    fn reseed(&mut self) {
        let count = particle_count(self.viewport, &self.config);
        let viewport = self.viewport;
        let config = self.config;
        let rng = &mut self.rng;
        self.particles = (0..count).map(|_| Particle::spawn(rng, viewport, &config)).collect();
        self.seeded_viewport = viewport;
        info!(count, width = viewport.width, height = viewport.height, "particles seeded");
    }

    // --- Inputs ---

    /// Record the latest pointer position. Read on the next tick.
    pub fn set_pointer(&mut self, pointer: Point) {
        self.pointer = Some(pointer);
    }

    /// Forget the pointer (it left the window).
    pub fn clear_pointer(&mut self) {
        self.pointer = None;
    }

    /// Apply a new surface size immediately and (re)arm the re-seed debounce.
    pub fn on_resize<S: Surface + ?Sized>(&mut self, viewport: Viewport, now_ms: f64, surface: &mut S) {
        self.viewport = viewport;
        surface.resize(viewport);
        self.reseed_due_ms = Some(now_ms + self.config.resize_debounce_ms);
        debug!(width = viewport.width, height = viewport.height, "resize debounce armed");
    }

    /// Switch palette. Particles are kept.
    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
    }

    /// Disarm any pending re-seed and drop the pointer.
    pub fn teardown(&mut self) {
        self.reseed_due_ms = None;
        self.pointer = None;
    }

    // --- Frame ---

    /// Fire the resize debounce if it is due. Re-seeds when the current size
    /// has moved past the threshold since the last seed.
    ///
    /// Returns whether the particles were rebuilt.
    pub fn poll_resize(&mut self, now_ms: f64) -> bool {
        match self.reseed_due_ms {
            Some(due) if now_ms >= due => {
                self.reseed_due_ms = None;
                if self.viewport.differs_significantly(self.seeded_viewport, self.config.resize_threshold) {
                    self.reseed();
                    true
                } else {
                    debug!("resize below threshold, keeping particles");
                    false
                }
            }
            _ => false,
        }
    }

    /// Run one animation frame: clear, then for each particle in creation
    /// order move it, push it away from the pointer, bounce it off the edges,
    /// draw it, and connect it to every later particle in range.
    ///
    /// Later particles are connected at their previous-frame positions, since
    /// they have not moved yet this frame.
    pub fn tick<S: Surface + ?Sized>(&mut self, now_ms: f64, surface: &mut S) -> TickStats {
        let reseeded = self.poll_resize(now_ms);
        surface.clear();

        let mut connections = 0;
        for i in 0..self.particles.len() {
            let (head, tail) = self.particles.split_at_mut(i + 1);
            let particle = &mut head[i];

            particle.advance();
            if let Some(pointer) = self.pointer {
                let push = particle.repulsion(pointer, self.config.influence_radius, self.config.repel_strength);
                let push = particle.limit_push(push, self.viewport);
                particle.displace(push);
            }
            particle.bounce(self.viewport);

            render::draw_particle(surface, particle, self.theme);
            for other in tail.iter() {
                if render::draw_connection(surface, particle, other, &self.config, self.theme) {
                    connections += 1;
                }
            }
        }

        TickStats { particles: self.particles.len(), connections, reseeded }
    }

    // --- Queries ---

    #[must_use]
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Direct access for hosts and tests that place particles explicitly.
    pub fn particles_mut(&mut self) -> &mut Vec<Particle> {
        &mut self.particles
    }

    #[must_use]
    pub fn config(&self) -> &FieldConfig {
        &self.config
    }

    #[must_use]
    pub fn theme(&self) -> Theme {
        self.theme
    }

    #[must_use]
    pub fn pointer(&self) -> Option<Point> {
        self.pointer
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Viewport the current particle set was seeded for.
    #[must_use]
    pub fn seeded_viewport(&self) -> Viewport {
        self.seeded_viewport
    }

    #[must_use]
    pub fn reseed_pending(&self) -> bool {
        self.reseed_due_ms.is_some()
    }
}
