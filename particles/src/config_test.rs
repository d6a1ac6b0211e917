#![allow(clippy::float_cmp)]

use super::*;

#[test]
fn default_is_valid() {
    assert!(FieldConfig::default().validate().is_ok());
}

#[test]
fn default_matches_consts() {
    let c = FieldConfig::default();
    assert_eq!(c.connection_distance, consts::CONNECTION_DISTANCE);
    assert_eq!(c.influence_radius, consts::INFLUENCE_RADIUS);
    assert_eq!(c.narrow_band.max, consts::NARROW_MAX_PARTICLES);
    assert_eq!(c.wide_band.min, consts::WIDE_MIN_PARTICLES);
}

#[test]
fn narrow_band_sits_below_wide_band() {
    let c = FieldConfig::default();
    assert!(c.narrow_band.min <= c.wide_band.min);
    assert!(c.narrow_band.max < c.wide_band.max);
}

#[test]
fn band_for_selects_by_width() {
    let c = FieldConfig::default();
    assert_eq!(c.band_for(Viewport::new(400.0, 900.0)), c.narrow_band);
    assert_eq!(c.band_for(Viewport::new(1440.0, 900.0)), c.wide_band);
}

#[test]
fn count_band_clamp() {
    let band = CountBand { min: 10, max: 20 };
    assert_eq!(band.clamp(3), 10);
    assert_eq!(band.clamp(15), 15);
    assert_eq!(band.clamp(99), 20);
}

#[test]
fn validate_rejects_zero_density() {
    let c = FieldConfig { density: 0.0, ..FieldConfig::default() };
    assert_eq!(c.validate(), Err(ConfigError::NotPositive { field: "density", value: 0.0 }));
}

#[test]
fn validate_rejects_nan_speed() {
    let c = FieldConfig { speed: f64::NAN, ..FieldConfig::default() };
    assert!(matches!(c.validate(), Err(ConfigError::NotPositive { field: "speed", .. })));
}

#[test]
fn validate_rejects_inverted_band() {
    let c = FieldConfig { wide_band: CountBand { min: 200, max: 100 }, ..FieldConfig::default() };
    assert!(matches!(c.validate(), Err(ConfigError::InvertedRange { field: "wide_band", .. })));
}

#[test]
fn validate_rejects_inverted_opacity() {
    let c = FieldConfig { min_opacity: 0.9, max_opacity: 0.1, ..FieldConfig::default() };
    assert!(matches!(c.validate(), Err(ConfigError::InvertedRange { field: "opacity", .. })));
}

#[test]
fn validate_allows_zero_repel() {
    let c = FieldConfig { repel_strength: 0.0, ..FieldConfig::default() };
    assert!(c.validate().is_ok());
}

#[test]
fn from_json_partial_override_keeps_defaults() {
    let c = FieldConfig::from_json(r#"{"connection_distance": 90.0}"#).unwrap();
    assert_eq!(c.connection_distance, 90.0);
    assert_eq!(c.influence_radius, consts::INFLUENCE_RADIUS);
}

#[test]
fn from_json_nested_band() {
    let c = FieldConfig::from_json(r#"{"wide_band": {"min": 10, "max": 40}}"#).unwrap();
    assert_eq!(c.wide_band, CountBand { min: 10, max: 40 });
}

#[test]
fn from_json_malformed_is_error() {
    assert!(matches!(FieldConfig::from_json("{not json"), Err(ConfigError::Json(_))));
}

#[test]
fn from_json_invalid_value_is_rejected() {
    let err = FieldConfig::from_json(r#"{"density": -1.0}"#).unwrap_err();
    assert!(matches!(err, ConfigError::NotPositive { field: "density", .. }));
}

#[test]
fn env_parse_falls_back_on_missing_key() {
    assert_eq!(env_parse("PARTICLES_TEST_SURELY_UNSET_KEY", 42usize), 42);
}

#[test]
fn validate_rejects_negative_debounce() {
    let c = FieldConfig { resize_debounce_ms: -5.0, ..FieldConfig::default() };
    assert_eq!(c.validate(), Err(ConfigError::Negative { field: "resize_debounce_ms", value: -5.0 }));
}

#[test]
fn validate_rejects_opacity_above_one() {
    let c = FieldConfig { max_opacity: 1.5, ..FieldConfig::default() };
    assert_eq!(c.validate(), Err(ConfigError::OutOfUnitRange { field: "max_opacity", value: 1.5 }));
}

#[test]
fn validate_rejects_negative_min_opacity() {
    let c = FieldConfig { min_opacity: -0.1, ..FieldConfig::default() };
    assert!(matches!(c.validate(), Err(ConfigError::OutOfUnitRange { field: "min_opacity", .. })));
}

#[test]
fn validate_rejects_negative_connection_scale() {
    let c = FieldConfig { connection_opacity_scale: -0.2, ..FieldConfig::default() };
    assert!(matches!(c.validate(), Err(ConfigError::OutOfUnitRange { field: "connection_opacity_scale", .. })));
}

#[test]
fn validate_rejects_zero_connection_scale() {
    let c = FieldConfig { connection_opacity_scale: 0.0, ..FieldConfig::default() };
    assert!(matches!(c.validate(), Err(ConfigError::NotPositive { field: "connection_opacity_scale", .. })));
}

#[test]
fn validate_rejects_nan_line_width() {
    let c = FieldConfig { connection_line_width: f64::NAN, ..FieldConfig::default() };
    assert!(matches!(c.validate(), Err(ConfigError::NotPositive { field: "connection_line_width", .. })));
}

#[test]
fn from_json_rejects_negative_scale() {
    let err = FieldConfig::from_json(r#"{"connection_opacity_scale": -1.0}"#).unwrap_err();
    assert!(matches!(err, ConfigError::OutOfUnitRange { field: "connection_opacity_scale", .. }));
}

#[test]
fn env_parse_falls_back_on_garbage() {
    // Key is unique to this test, so no other test observes it.
    unsafe { std::env::set_var("PARTICLES_TEST_GARBAGE_DENSITY", "lots") };
    assert_eq!(env_parse("PARTICLES_TEST_GARBAGE_DENSITY", 0.5_f64), 0.5);
    unsafe { std::env::set_var("PARTICLES_TEST_GARBAGE_DENSITY", "0.25") };
    assert_eq!(env_parse("PARTICLES_TEST_GARBAGE_DENSITY", 0.5_f64), 0.25);
}
