//! Default numeric constants for the particle field.

// ── Population ──────────────────────────────────────────────────

/// Particles per square CSS pixel before clamping to the size-class band.
pub const DENSITY: f64 = 0.000_08;

/// Viewports at or below this width (CSS pixels) use the narrow band.
pub const NARROW_BREAKPOINT_PX: f64 = 768.0;

/// Particle count band for narrow viewports.
pub const NARROW_MIN_PARTICLES: usize = 20;
pub const NARROW_MAX_PARTICLES: usize = 50;

/// Particle count band for wide viewports.
pub const WIDE_MIN_PARTICLES: usize = 50;
pub const WIDE_MAX_PARTICLES: usize = 150;

// ── Particle appearance and motion ──────────────────────────────

pub const MIN_RADIUS: f64 = 1.0;
pub const MAX_RADIUS: f64 = 3.0;

/// Each velocity component is drawn from `[-SPEED / 2, SPEED / 2)`.
pub const SPEED: f64 = 0.35;

pub const MIN_OPACITY: f64 = 0.3;
pub const MAX_OPACITY: f64 = 0.8;

// ── Connections ─────────────────────────────────────────────────

/// Maximum distance at which two particles are joined by a line.
pub const CONNECTION_DISTANCE: f64 = 150.0;

/// Opacity of a connection between two coincident particles.
pub const CONNECTION_OPACITY_SCALE: f64 = 0.2;

pub const CONNECTION_LINE_WIDTH: f64 = 0.5;

// ── Pointer ─────────────────────────────────────────────────────

/// Distance within which the pointer pushes particles away.
pub const INFLUENCE_RADIUS: f64 = 80.0;

/// Displacement in pixels applied per tick to a particle under the pointer.
pub const REPEL_STRENGTH: f64 = 3.0;

// ── Resize ──────────────────────────────────────────────────────

/// Relative change in either dimension that triggers a re-seed.
pub const RESIZE_THRESHOLD: f64 = 0.2;

/// Quiet period after the last resize event before re-seeding.
pub const RESIZE_DEBOUNCE_MS: f64 = 250.0;
