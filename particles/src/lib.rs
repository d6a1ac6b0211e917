//! Ambient particle field for the portfolio background.
//!
//! This crate is compiled to WebAssembly and runs in the browser, but all of
//! the simulation lives in plain Rust so it can be driven headlessly. The
//! browser layer only measures the viewport, forwards pointer and resize
//! events, and hands the field a canvas surface and a frame scheduler.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`field`] | Testable [`field::FieldCore`]: seeding, per-frame update, resize debounce |
//! | [`particle`] | Particle type and its motion/repulsion/bounce rules |
//! | [`geom`] | Points, viewport sizes and size classes |
//! | [`config`] | Tunable constants, env overrides and validation |
//! | [`theme`] | Light/dark palette and RGBA colours |
//! | [`surface`] | Drawing surface trait and a recording implementation |
//! | [`render`] | Draw helpers for particles and connection lines |
//! | [`scheduler`] | Frame scheduler trait and the animation loop state |
//! | [`web`] | Browser binding: canvas surface, rAF scheduler, listeners |
//! | [`consts`] | Default numeric constants |
//! | [`error`] | Crate error types |

pub mod config;
pub mod consts;
pub mod error;
pub mod field;
pub mod geom;
pub mod particle;
pub mod render;
pub mod scheduler;
pub mod surface;
pub mod theme;
pub mod web;

pub use config::FieldConfig;
pub use error::{ConfigError, FieldError};
pub use field::{FieldCore, TickStats};
pub use geom::{Point, SizeClass, Viewport};
pub use particle::Particle;
pub use scheduler::{Animation, FrameId, FrameScheduler, LoopState, ManualScheduler};
pub use surface::{DrawCall, RecordingSurface, Surface};
pub use theme::{Rgba, Theme};
