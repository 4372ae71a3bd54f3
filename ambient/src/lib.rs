//! # psicologia-ambient
//!
//! Particle simulations drawn behind the Psicolog.IA landing page.
//!
//! Two scenes exist, one per theme:
//!
//! - **Day** - beige particles that drift slowly, wrap at the edges and
//!   twinkle inside a clamped opacity band.
//! - **Night** - stationary indigo sparkles whose opacity pulses on a sine
//!   wave.
//!
//! Every element is drawn as a soft radial halo with a solid core on top.
//!
//! The crate has no browser dependencies. A [`Scene`] steps on a fixed
//! per-frame timestep and draws itself through the [`Painter`] trait, so the
//! landing crate plugs in a canvas and tests plug in a recorder.
//!
//! ```rust
//! use psicologia_ambient::{AmbientConfig, Scene, SceneKind, Theme};
//!
//! let config = AmbientConfig::default();
//! let mut scene = Scene::new(SceneKind::for_theme(Theme::Light), &config, 1200.0, 800.0, 7);
//!
//! assert_eq!(scene.len(), 64);
//! scene.step();
//! ```
//!
//! Developed by The Psicolog.IA Team (c)2025

#![warn(missing_docs)]

pub mod color;
pub mod config;
pub mod paint;
pub mod particle;
pub mod scene;
pub mod sparkle;
pub mod theme;

pub use color::{Rgb, Rgba};
pub use config::{AmbientConfig, ConfigError, DayStyle, Halo, NightStyle, Range};
pub use paint::Painter;
pub use particle::Particle;
pub use scene::{Scene, SceneKind, population};
pub use sparkle::Sparkle;
pub use theme::Theme;
