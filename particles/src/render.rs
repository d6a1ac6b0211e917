//! Rendering: particle dots and proximity connections.
//!
//! These helpers only read particle state and write to a [`Surface`]; all
//! motion happens in [`crate::field`]. The update and draw steps are
//! interleaved per particle there, so they are kept as small free functions
//! instead of a whole-scene `draw`.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use crate::config::FieldConfig;
use crate::particle::Particle;
use crate::surface::Surface;
use crate::theme::Theme;

/// Opacity of a connection line between particles `distance` apart.
///
/// Decays linearly from `scale` at distance 0 to 0 at `threshold`; anything
/// at or past the threshold is 0.
#[must_use]
pub fn connection_opacity(distance: f64, threshold: f64, scale: f64) -> f64 {
    if distance >= threshold {
        return 0.0;
    }
    (1.0 - distance / threshold) * scale
}

/// Fill `particle` as a circle in the theme colour at its own opacity.
pub fn draw_particle<S: Surface + ?Sized>(surface: &mut S, particle: &Particle, theme: Theme) {
    surface.fill_circle(particle.position, particle.radius, theme.with_alpha(particle.opacity));
}

/// Stroke a line between `a` and `b` if they are closer than the connection
/// threshold. Returns whether a line was drawn.
pub fn draw_connection<S: Surface + ?Sized>(
    surface: &mut S,
    a: &Particle,
    b: &Particle,
    config: &FieldConfig,
    theme: Theme,
) -> bool {
    let distance = a.position.distance(b.position);
    let opacity = connection_opacity(distance, config.connection_distance, config.connection_opacity_scale);
    if opacity <= 0.0 {
        return false;
    }
    surface.stroke_line(a.position, b.position, config.connection_line_width, theme.with_alpha(opacity));
    true
}
