//! A batch of particles or sparkles bound to one canvas size.

use tracing::debug;

use crate::config::{AmbientConfig, DayStyle, NightStyle};
use crate::paint::Painter;
use crate::particle::Particle;
use crate::sparkle::Sparkle;
use crate::theme::Theme;

/// Which simulation a scene runs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SceneKind {
    /// Warm floating particles
    Day,
    /// Pulsing sparkles
    Night,
}

impl SceneKind {
    /// Day for the light theme, night for the dark one.
    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Light => SceneKind::Day,
            Theme::Dark => SceneKind::Night,
        }
    }

    /// Stable lowercase name, used as a DOM data attribute.
    pub fn as_str(self) -> &'static str {
        match self {
            SceneKind::Day => "day",
            SceneKind::Night => "night",
        }
    }
}

/// Element count for a canvas: one per `density` px² of area, rounded
/// down. An empty canvas gets none.
pub fn population(width: f64, height: f64, density: f64) -> usize {
    let area = width * height;
    if !(width > 0.0 && height > 0.0 && area.is_finite()) || density.is_nan() || density <= 0.0 {
        return 0;
    }
    (area / density).floor() as usize
}

#[derive(Debug)]
enum Elements {
    Day {
        style: DayStyle,
        particles: Vec<Particle>,
    },
    Night {
        style: NightStyle,
        sparkles: Vec<Sparkle>,
    },
}

/// One animation's state: its elements, the canvas they live on and the
/// generator used to (re)seed them.
#[derive(Debug)]
pub struct Scene {
    elements: Elements,
    width: f64,
    height: f64,
    rng: fastrand::Rng,
}

impl Scene {
    /// Seed a scene for a `width x height` canvas.
    pub fn new(kind: SceneKind, config: &AmbientConfig, width: f64, height: f64, seed: u64) -> Self {
        let elements = match kind {
            SceneKind::Day => Elements::Day {
                style: config.day.clone(),
                particles: Vec::new(),
            },
            SceneKind::Night => Elements::Night {
                style: config.night.clone(),
                sparkles: Vec::new(),
            },
        };
        let mut scene = Self {
            elements,
            width,
            height,
            rng: fastrand::Rng::with_seed(seed),
        };
        scene.reseed();
        scene
    }

    /// Simulation this scene runs.
    pub fn kind(&self) -> SceneKind {
        match self.elements {
            Elements::Day { .. } => SceneKind::Day,
            Elements::Night { .. } => SceneKind::Night,
        }
    }

    /// Canvas size the elements were seeded for.
    pub fn dimensions(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    /// Number of live elements.
    pub fn len(&self) -> usize {
        match &self.elements {
            Elements::Day { particles, .. } => particles.len(),
            Elements::Night { sparkles, .. } => sparkles.len(),
        }
    }

    /// True when the canvas is too small to hold anything.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Day particles; empty for a night scene.
    pub fn particles(&self) -> &[Particle] {
        match &self.elements {
            Elements::Day { particles, .. } => particles,
            Elements::Night { .. } => &[],
        }
    }

    /// Night sparkles; empty for a day scene.
    pub fn sparkles(&self) -> &[Sparkle] {
        match &self.elements {
            Elements::Night { sparkles, .. } => sparkles,
            Elements::Day { .. } => &[],
        }
    }

    /// Throw the batch away and seed a fresh one for the new size.
    pub fn resize(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
        self.reseed();
    }

    fn reseed(&mut self) {
        let (w, h) = (self.width, self.height);
        let rng = &mut self.rng;
        match &mut self.elements {
            Elements::Day { style, particles } => {
                let n = population(w, h, style.density);
                *particles = (0..n).map_while(|_| Particle::spawn(rng, w, h, style)).collect();
            }
            Elements::Night { style, sparkles } => {
                let n = population(w, h, style.density);
                *sparkles = (0..n).map_while(|_| Sparkle::spawn(rng, w, h, style)).collect();
            }
        }
        debug!(kind = ?self.kind(), count = self.len(), width = w, height = h, "scene seeded");
    }

    /// Advance every element one frame.
    pub fn step(&mut self) {
        let (w, h) = (self.width, self.height);
        match &mut self.elements {
            Elements::Day { style, particles } => {
                for p in particles.iter_mut() {
                    p.step(w, h, style);
                }
            }
            Elements::Night { sparkles, .. } => {
                for s in sparkles.iter_mut() {
                    s.step();
                }
            }
        }
    }

    /// Clear the surface and draw the current frame.
    pub fn draw<P: Painter + ?Sized>(&self, painter: &mut P) {
        painter.clear(self.width, self.height);
        match &self.elements {
            Elements::Day { style, particles } => {
                for p in particles {
                    p.draw(painter, style);
                }
            }
            Elements::Night { style, sparkles } => {
                for s in sparkles {
                    s.draw(painter, style);
                }
            }
        }
    }
}
