//! Tunable parameters for the particle field.
//!
//! Defaults come from [`crate::consts`]. Hosts can override any subset from a
//! JSON object (every field is optional) or, natively, from `PARTICLES_*`
//! environment variables. Invalid values are rejected by [`FieldConfig::validate`]
//! before a field is built.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::consts;
use crate::error::ConfigError;
use crate::geom::{SizeClass, Viewport};

/// Inclusive particle count band for one size class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountBand {
    pub min: usize,
    pub max: usize,
}

impl CountBand {
    #[must_use]
    pub fn clamp(self, n: usize) -> usize {
        n.clamp(self.min, self.max)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldConfig {
    pub density: f64,
    pub narrow_band: CountBand,
    pub wide_band: CountBand,
    pub min_radius: f64,
    pub max_radius: f64,
    pub speed: f64,
    pub min_opacity: f64,
    pub max_opacity: f64,
    pub connection_distance: f64,
    pub connection_opacity_scale: f64,
    pub connection_line_width: f64,
    pub influence_radius: f64,
    pub repel_strength: f64,
    pub resize_threshold: f64,
    pub resize_debounce_ms: f64,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            density: consts::DENSITY,
            narrow_band: CountBand { min: consts::NARROW_MIN_PARTICLES, max: consts::NARROW_MAX_PARTICLES },
            wide_band: CountBand { min: consts::WIDE_MIN_PARTICLES, max: consts::WIDE_MAX_PARTICLES },
            min_radius: consts::MIN_RADIUS,
            max_radius: consts::MAX_RADIUS,
            speed: consts::SPEED,
            min_opacity: consts::MIN_OPACITY,
            max_opacity: consts::MAX_OPACITY,
            connection_distance: consts::CONNECTION_DISTANCE,
            connection_opacity_scale: consts::CONNECTION_OPACITY_SCALE,
            connection_line_width: consts::CONNECTION_LINE_WIDTH,
            influence_radius: consts::INFLUENCE_RADIUS,
            repel_strength: consts::REPEL_STRENGTH,
            resize_threshold: consts::RESIZE_THRESHOLD,
            resize_debounce_ms: consts::RESIZE_DEBOUNCE_MS,
        }
    }
}

impl FieldConfig {
    /// Defaults overridden by any `PARTICLES_*` environment variables that parse.
    #[must_use]
    pub fn from_env() -> Self {
        let d = Self::default();
        Self {
            density: env_parse("PARTICLES_DENSITY", d.density),
            narrow_band: CountBand {
                min: env_parse("PARTICLES_NARROW_MIN", d.narrow_band.min),
                max: env_parse("PARTICLES_NARROW_MAX", d.narrow_band.max),
            },
            wide_band: CountBand {
                min: env_parse("PARTICLES_WIDE_MIN", d.wide_band.min),
                max: env_parse("PARTICLES_WIDE_MAX", d.wide_band.max),
            },
            speed: env_parse("PARTICLES_SPEED", d.speed),
            connection_distance: env_parse("PARTICLES_CONNECTION_DISTANCE", d.connection_distance),
            influence_radius: env_parse("PARTICLES_INFLUENCE_RADIUS", d.influence_radius),
            repel_strength: env_parse("PARTICLES_REPEL_STRENGTH", d.repel_strength),
            resize_debounce_ms: env_parse("PARTICLES_RESIZE_DEBOUNCE_MS", d.resize_debounce_ms),
            ..d
        }
    }

    /// Parse a (possibly partial) JSON override on top of the defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Json`] on malformed input, or any
    /// [`FieldConfig::validate`] failure.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw).map_err(|e| ConfigError::Json(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Count band for the given viewport's size class.
    #[must_use]
    pub fn band_for(&self, viewport: Viewport) -> CountBand {
        match viewport.size_class() {
            SizeClass::Narrow => self.narrow_band,
            SizeClass::Wide => self.wide_band,
        }
    }

    /// Check every range and positivity constraint.
    ///
    /// # Errors
    ///
    /// Returns the first violated constraint.
    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("density", self.density)?;
        positive("speed", self.speed)?;
        positive("connection_distance", self.connection_distance)?;
        positive("influence_radius", self.influence_radius)?;
        positive("min_radius", self.min_radius)?;
        positive("resize_threshold", self.resize_threshold)?;
        ordered("radius", self.min_radius, self.max_radius)?;
        ordered("opacity", self.min_opacity, self.max_opacity)?;
        unit("min_opacity", self.min_opacity)?;
        unit("max_opacity", self.max_opacity)?;
        unit("connection_opacity_scale", self.connection_opacity_scale)?;
        positive("connection_opacity_scale", self.connection_opacity_scale)?;
        positive("connection_line_width", self.connection_line_width)?;
        ordered("narrow_band", self.narrow_band.min as f64, self.narrow_band.max as f64)?;
        ordered("wide_band", self.wide_band.min as f64, self.wide_band.max as f64)?;
        non_negative("repel_strength", self.repel_strength)?;
        non_negative("resize_debounce_ms", self.resize_debounce_ms)
    }
}

fn positive(field: &'static str, value: f64) -> Result<(), ConfigError> {
    // Written so NaN fails too.
    if value > 0.0 { Ok(()) } else { Err(ConfigError::NotPositive { field, value }) }
}

fn non_negative(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value >= 0.0 { Ok(()) } else { Err(ConfigError::Negative { field, value }) }
}

fn unit(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if (0.0..=1.0).contains(&value) { Ok(()) } else { Err(ConfigError::OutOfUnitRange { field, value }) }
}

fn ordered(field: &'static str, min: f64, max: f64) -> Result<(), ConfigError> {
    if min <= max { Ok(()) } else { Err(ConfigError::InvertedRange { field, min, max }) }
}

pub(crate) fn env_parse<T>(key: &str, default: T) -> T
where
    T: std::str::FromStr + Copy + std::fmt::Display,
    T::Err: std::fmt::Display,
{
    let Ok(raw) = std::env::var(key) else {
        return default;
    };
    match raw.parse::<T>() {
        Ok(value) => value,
        Err(e) => {
            warn!(key, value = %raw, error = %e, %default, "ignoring unparsable override");
            default
        }
    }
}
