//! Day scene: warm floating particles.

use crate::color::Rgb;
use crate::config::DayStyle;
use crate::paint::Painter;

/// A single floating particle.
#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    /// Horizontal position in px
    pub x: f64,
    /// Vertical position in px
    pub y: f64,
    /// Radius in px
    pub radius: f64,
    /// Horizontal velocity in px per frame
    pub vx: f64,
    /// Vertical velocity in px per frame
    pub vy: f64,
    /// Current opacity, kept inside the style's band
    pub opacity: f64,
    /// Opacity change per frame; flips sign at the band edges
    pub opacity_delta: f64,
    /// Fixed for the particle's lifetime
    pub color: Rgb,
}

impl Particle {
    /// Random particle somewhere on a `width x height` canvas. `None` when
    /// the palette has no colors to pick from.
    pub fn spawn(rng: &mut fastrand::Rng, width: f64, height: f64, style: &DayStyle) -> Option<Self> {
        let color = rng.choice(style.palette.iter()).copied()?;
        let delta = style.twinkle.sample(rng);
        Some(Self {
            x: rng.f64() * width,
            y: rng.f64() * height,
            radius: style.radius.sample(rng),
            vx: (rng.f64() * 2.0 - 1.0) * style.speed_x,
            vy: (rng.f64() * 2.0 - 1.0) * style.speed_y,
            opacity: style.opacity.sample(rng),
            opacity_delta: if rng.bool() { delta } else { -delta },
            color,
        })
    }

    /// Advance one frame: move, twinkle, wrap at the edges.
    pub fn step(&mut self, width: f64, height: f64, style: &DayStyle) {
        self.x += self.vx;
        self.y += self.vy;

        self.opacity += self.opacity_delta;
        if self.opacity >= style.opacity.max {
            self.opacity = style.opacity.max;
            self.opacity_delta = -self.opacity_delta.abs();
        } else if self.opacity <= style.opacity.min {
            self.opacity = style.opacity.min;
            self.opacity_delta = self.opacity_delta.abs();
        }

        // Leaving through one edge re-enters on the opposite edge.
        if self.x < 0.0 {
            self.x = width;
        } else if self.x > width {
            self.x = 0.0;
        }
        if self.y < 0.0 {
            self.y = height;
        } else if self.y > height {
            self.y = 0.0;
        }
    }

    /// Draw the halo, then the core dot on top.
    pub fn draw<P: Painter + ?Sized>(&self, painter: &mut P, style: &DayStyle) {
        let halo = &style.halo;
        painter.halo(
            self.x,
            self.y,
            self.radius * halo.scale,
            self.color,
            halo.fade,
            self.opacity * halo.alpha,
        );
        painter.circle(self.x, self.y, self.radius, self.color.with_alpha(self.opacity));
    }
}
