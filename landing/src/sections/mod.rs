// Landing page sections
// Developed by The Psicolog.IA Team (c)2025

mod backdrop;
mod features;
mod footer;
mod header;
mod hero;
mod sky;

pub use backdrop::{Backdrop, SKY_FADE};
pub use features::Features;
pub use footer::Footer;
pub use header::{Header, ThemeToggle};
pub use hero::Hero;
pub use sky::{DaySky, NightSky};
