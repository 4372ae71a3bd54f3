//! Night scene: pulsing sparkles.

use std::f64::consts::TAU;

use crate::color::Rgb;
use crate::config::NightStyle;
use crate::paint::Painter;

/// A stationary sparkle whose opacity pulses on a sine wave.
#[derive(Clone, Debug, PartialEq)]
pub struct Sparkle {
    /// Horizontal position in px
    pub x: f64,
    /// Vertical position in px
    pub y: f64,
    /// Radius in px
    pub radius: f64,
    /// Peak opacity
    pub base_opacity: f64,
    /// Pulse phase in `[0, TAU)`
    pub phase: f64,
    /// Phase advance per frame
    pub speed: f64,
    /// Fixed for the sparkle's lifetime
    pub color: Rgb,
}

impl Sparkle {
    /// Random sparkle somewhere on a `width x height` canvas, starting its
    /// pulse at phase zero. `None` when the palette is empty.
    pub fn spawn(rng: &mut fastrand::Rng, width: f64, height: f64, style: &NightStyle) -> Option<Self> {
        let color = rng.choice(style.palette.iter()).copied()?;
        Some(Self {
            x: rng.f64() * width,
            y: rng.f64() * height,
            radius: style.radius.sample(rng),
            base_opacity: style.opacity.sample(rng),
            phase: 0.0,
            speed: style.pulse.sample(rng),
            color,
        })
    }

    /// Advance the pulse one frame.
    pub fn step(&mut self) {
        self.phase = (self.phase + self.speed).rem_euclid(TAU);
    }

    /// Current opacity, in `[0, base_opacity]`.
    pub fn opacity(&self) -> f64 {
        self.base_opacity * (0.5 + 0.5 * self.phase.sin())
    }

    /// Draw the halo, then the core dot, both at the current pulse.
    pub fn draw<P: Painter + ?Sized>(&self, painter: &mut P, style: &NightStyle) {
        let opacity = self.opacity();
        let halo = &style.halo;
        painter.halo(
            self.x,
            self.y,
            self.radius * halo.scale,
            self.color,
            halo.fade,
            opacity * halo.alpha,
        );
        painter.circle(self.x, self.y, self.radius, self.color.with_alpha(opacity));
    }
}
