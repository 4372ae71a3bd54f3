//! Animation styles.
//!
//! Every field has a default, so an override only needs the keys it
//! changes:
//!
//! ```rust
//! use psicologia_ambient::AmbientConfig;
//!
//! let config = AmbientConfig::from_json(r#"{ "night": { "density": 4000 } }"#).unwrap();
//! assert_eq!(config.night.density, 4000.0);
//! assert_eq!(config.day.density, 15000.0);
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::color::Rgb;

/// Errors raised while loading or validating a configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Input was not valid JSON for [`AmbientConfig`]
    #[error("invalid ambient config: {0}")]
    Parse(#[from] serde_json::Error),
    /// A color was not `#rrggbb`
    #[error("invalid color {0:?}, expected #rrggbb")]
    BadColor(String),
    /// A palette has no colors to draw from
    #[error("{0} palette is empty")]
    EmptyPalette(&'static str),
    /// A range has `min > max` or a non-finite bound
    #[error("{scene}.{field} range is invalid: {min}..{max}")]
    BadRange {
        /// `day` or `night`
        scene: &'static str,
        /// Field name
        field: &'static str,
        /// Lower bound
        min: f64,
        /// Upper bound
        max: f64,
    },
    /// Density must be a positive area per element
    #[error("{0}.density must be positive")]
    BadDensity(&'static str),
    /// Halo scale must be non-negative and its alpha inside `[0, 1]`
    #[error("{0}.halo is invalid")]
    BadHalo(&'static str),
}

/// Closed interval `[min, max]`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Range {
    /// Lower bound
    pub min: f64,
    /// Upper bound
    pub max: f64,
}

impl Range {
    /// Build a range.
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Uniform sample in `[min, max)`.
    pub fn sample(&self, rng: &mut fastrand::Rng) -> f64 {
        self.min + rng.f64() * (self.max - self.min)
    }

    /// True when `v` lies inside the closed interval.
    pub fn contains(&self, v: f64) -> bool {
        v >= self.min && v <= self.max
    }

    fn check(&self, scene: &'static str, field: &'static str) -> Result<(), ConfigError> {
        if self.min.is_finite() && self.max.is_finite() && self.min <= self.max {
            Ok(())
        } else {
            Err(ConfigError::BadRange {
                scene,
                field,
                min: self.min,
                max: self.max,
            })
        }
    }
}

/// Styles for both scenes.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AmbientConfig {
    /// Light theme particles
    pub day: DayStyle,
    /// Dark theme sparkles
    pub night: NightStyle,
}

impl AmbientConfig {
    /// Parse a (possibly partial) JSON override and validate it.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject styles the simulation cannot seed from.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.day.validate()?;
        self.night.validate()
    }
}

/// Soft radial glow drawn under every element.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Halo {
    /// Glow radius as a multiple of the element radius
    pub scale: f64,
    /// Glow opacity as a fraction of the element opacity
    pub alpha: f64,
    /// Color the gradient fades out to at its rim
    pub fade: Rgb,
}

impl Default for Halo {
    fn default() -> Self {
        Self {
            scale: 2.0,
            alpha: 0.5,
            fade: Rgb::new(254, 251, 247),
        }
    }
}

impl Halo {
    fn check(&self, scene: &'static str) -> Result<(), ConfigError> {
        let scale_ok = self.scale.is_finite() && self.scale >= 0.0;
        if scale_ok && (0.0..=1.0).contains(&self.alpha) {
            Ok(())
        } else {
            Err(ConfigError::BadHalo(scene))
        }
    }
}

fn check_density(density: f64, scene: &'static str) -> Result<(), ConfigError> {
    if density.is_nan() || density <= 0.0 {
        return Err(ConfigError::BadDensity(scene));
    }
    Ok(())
}

/// Warm floating particles.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DayStyle {
    /// Canvas area (px²) per particle
    pub density: f64,
    /// Radius in px
    pub radius: Range,
    /// Max horizontal speed in px per frame, either direction
    pub speed_x: f64,
    /// Max vertical speed in px per frame, either direction
    pub speed_y: f64,
    /// Band the opacity oscillates inside
    pub opacity: Range,
    /// Magnitude of the per-frame opacity change
    pub twinkle: Range,
    /// Glow under each particle
    pub halo: Halo,
    /// Colors particles pick from
    pub palette: Vec<Rgb>,
}

impl Default for DayStyle {
    fn default() -> Self {
        Self {
            density: 15_000.0,
            radius: Range::new(0.5, 2.0),
            speed_x: 0.075,
            speed_y: 0.05,
            opacity: Range::new(0.1, 0.35),
            twinkle: Range::new(0.0, 0.003),
            halo: Halo::default(),
            palette: vec![
                Rgb::new(0xfe, 0xfb, 0xf7),
                Rgb::new(0xf5, 0xe7, 0xd3),
                Rgb::new(0xec, 0xd9, 0xbc),
                Rgb::new(0xe8, 0xd2, 0xb0),
                Rgb::new(0xf8, 0xf1, 0xe4),
                Rgb::new(0xf1, 0xe2, 0xcc),
            ],
        }
    }
}

impl DayStyle {
    fn validate(&self) -> Result<(), ConfigError> {
        check_density(self.density, "day")?;
        if self.palette.is_empty() {
            return Err(ConfigError::EmptyPalette("day"));
        }
        self.radius.check("day", "radius")?;
        self.opacity.check("day", "opacity")?;
        self.twinkle.check("day", "twinkle")?;
        for (field, speed) in [("speed_x", self.speed_x), ("speed_y", self.speed_y)] {
            if !speed.is_finite() || speed < 0.0 {
                return Err(ConfigError::BadRange {
                    scene: "day",
                    field,
                    min: 0.0,
                    max: speed,
                });
            }
        }
        self.halo.check("day")
    }
}

/// Pulsing night sparkles.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NightStyle {
    /// Canvas area (px²) per sparkle
    pub density: f64,
    /// Radius in px
    pub radius: Range,
    /// Peak opacity each sparkle pulses up to
    pub opacity: Range,
    /// Phase advance in radians per frame
    pub pulse: Range,
    /// Glow under each sparkle
    pub halo: Halo,
    /// Colors sparkles pick from
    pub palette: Vec<Rgb>,
}

impl Default for NightStyle {
    fn default() -> Self {
        Self {
            density: 10_000.0,
            radius: Range::new(0.5, 2.5),
            opacity: Range::new(0.2, 0.7),
            pulse: Range::new(0.005, 0.025),
            halo: Halo {
                scale: 3.0,
                alpha: 0.3,
                fade: Rgb::new(0, 0, 0),
            },
            palette: vec![
                Rgb::new(0xc7, 0xd2, 0xfe),
                Rgb::new(0xa5, 0xb4, 0xfc),
                Rgb::new(0x81, 0x8c, 0xf8),
                Rgb::new(0x63, 0x66, 0xf1),
                Rgb::new(0x4f, 0x46, 0xe5),
            ],
        }
    }
}

impl NightStyle {
    fn validate(&self) -> Result<(), ConfigError> {
        check_density(self.density, "night")?;
        if self.palette.is_empty() {
            return Err(ConfigError::EmptyPalette("night"));
        }
        self.radius.check("night", "radius")?;
        self.opacity.check("night", "opacity")?;
        self.pulse.check("night", "pulse")?;
        self.halo.check("night")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn defaults_are_valid() {
        AmbientConfig::default().validate().unwrap();
    }

    #[test]
    fn empty_object_yields_defaults() {
        let config = AmbientConfig::from_json("{}").unwrap();
        assert_eq!(config, AmbientConfig::default());
    }

    #[test]
    fn partial_override_keeps_other_fields() {
        let config = AmbientConfig::from_json(
            r##"{ "day": { "palette": ["#102030"], "opacity": { "min": 0.2, "max": 0.4 } } }"##,
        )
        .unwrap();
        assert_eq!(config.day.palette, vec![Rgb::new(16, 32, 48)]);
        assert_eq!(config.day.opacity, Range::new(0.2, 0.4));
        assert_eq!(config.day.radius, DayStyle::default().radius);
        assert_eq!(config.night, NightStyle::default());
    }

    #[test]
    fn rejects_bad_json() {
        let err = AmbientConfig::from_json("{ day: ").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn rejects_bad_color_through_serde() {
        let err = AmbientConfig::from_json(r#"{ "night": { "palette": ["blue"] } }"#).unwrap_err();
        assert!(err.to_string().contains("blue"));
    }

    #[test]
    fn rejects_empty_palette() {
        let err = AmbientConfig::from_json(r#"{ "day": { "palette": [] } }"#).unwrap_err();
        assert!(matches!(err, ConfigError::EmptyPalette("day")));
    }

    #[test]
    fn rejects_inverted_range() {
        let err = AmbientConfig::from_json(r#"{ "night": { "radius": { "min": 3, "max": 1 } } }"#)
            .unwrap_err();
        assert!(matches!(
            err,
            ConfigError::BadRange {
                scene: "night",
                field: "radius",
                ..
            }
        ));
    }

    #[test]
    fn rejects_non_positive_density() {
        let err = AmbientConfig::from_json(r#"{ "day": { "density": 0 } }"#).unwrap_err();
        assert!(matches!(err, ConfigError::BadDensity("day")));
    }

    #[test]
    fn rejects_negative_speed() {
        let err = AmbientConfig::from_json(r#"{ "day": { "speed_y": -1 } }"#).unwrap_err();
        assert!(matches!(err, ConfigError::BadRange { field: "speed_y", .. }));
    }

    #[test]
    fn halo_override_is_partial() {
        let config = AmbientConfig::from_json(r#"{ "night": { "halo": { "alpha": 0.6 } } }"#).unwrap();
        assert_eq!(config.night.halo.alpha, 0.6);
        assert_eq!(config.night.halo.scale, Halo::default().scale);

        let err = AmbientConfig::from_json(r#"{ "day": { "halo": { "alpha": 2 } } }"#).unwrap_err();
        assert!(matches!(err, ConfigError::BadHalo("day")));
    }

    #[test]
    fn defaults_match_landing_palettes() {
        let config = AmbientConfig::default();
        assert_eq!(config.day.palette[0].to_string(), "#fefbf7");
        assert_eq!(config.night.palette[4].to_string(), "#4f46e5");
        assert_eq!(config.night.density, 10_000.0);
        assert_eq!(config.night.halo.scale, 3.0);
    }

    #[test]
    fn range_sample_stays_inside() {
        let mut rng = fastrand::Rng::with_seed(42);
        let r = Range::new(0.5, 2.0);
        for _ in 0..1000 {
            assert!(r.contains(r.sample(&mut rng)));
        }
    }
}
