//! Error types for the particle field.

/// A configuration value is out of its valid range.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    /// A value that must be strictly positive was zero, negative or NaN.
    #[error("`{field}` must be positive, got {value}")]
    NotPositive { field: &'static str, value: f64 },
    /// A value that must be zero or greater was negative or NaN.
    #[error("`{field}` must not be negative, got {value}")]
    Negative { field: &'static str, value: f64 },
    /// A fraction outside `[0, 1]`, or NaN.
    #[error("`{field}` must be within [0, 1], got {value}")]
    OutOfUnitRange { field: &'static str, value: f64 },
    /// A `[min, max]` range has `min > max`.
    #[error("`{field}` range is inverted: min {min} > max {max}")]
    InvertedRange { field: &'static str, min: f64, max: f64 },
    /// An override could not be parsed as JSON config.
    #[error("invalid config JSON: {0}")]
    Json(String),
}

/// Errors raised while mounting or driving the field.
#[derive(Debug, thiserror::Error)]
pub enum FieldError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// The host offered no usable 2D drawing context.
    #[error("no 2d drawing context available")]
    NoContext,
    /// The host environment (window, performance clock) is missing.
    #[error("host environment unavailable: {0}")]
    Host(&'static str),
    /// The host rejected a frame request or listener registration.
    #[error("host call failed: {0}")]
    HostCall(String),
}
