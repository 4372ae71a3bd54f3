//! Drawing surface abstraction.

use crate::color::{Rgb, Rgba};

/// Where a [`Scene`](crate::Scene) draws itself.
///
/// The landing page implements this over a 2d canvas context; tests record
/// the calls.
pub trait Painter {
    /// Wipe the whole surface.
    fn clear(&mut self, width: f64, height: f64);

    /// Radial gradient disc: `color` at the center fading to a transparent
    /// `fade` at `radius`, composited at `alpha`.
    fn halo(&mut self, x: f64, y: f64, radius: f64, color: Rgb, fade: Rgb, alpha: f64);

    /// Solid filled circle.
    fn circle(&mut self, x: f64, y: f64, radius: f64, color: Rgba);
}
