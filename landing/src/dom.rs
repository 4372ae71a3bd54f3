//! Thin helpers over `web_sys` for the page shell and the canvas driver.

use psicologia_ambient::{AmbientConfig, Theme};
use tracing::{debug, warn};
use web_sys::{Document, Window};

use crate::error::DomError;

/// Id of the optional inline JSON that overrides animation styles.
pub const CONFIG_ELEMENT_ID: &str = "ambient-config";

const DARK_CLASS: &str = "dark";

/// The global `window`, absent outside a browser main thread.
pub fn window() -> Result<Window, DomError> {
    web_sys::window().ok_or(DomError::NoWindow)
}

/// The page's `document`.
pub fn document() -> Result<Document, DomError> {
    window()?.document().ok_or(DomError::NoDocument)
}

/// Sync the `dark` class on `<html>` with the theme.
pub fn apply_theme(theme: Theme) -> Result<(), DomError> {
    let root = document()?.document_element().ok_or(DomError::NoRoot)?;
    let dark = theme.root_class() == Some(DARK_CLASS);
    root.class_list().toggle_with_force(DARK_CLASS, dark)?;
    Ok(())
}

/// Whether a CSS media query currently matches. Unsupported means no.
pub fn media_matches(query: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.match_media(query).ok().flatten())
        .is_some_and(|m| m.matches())
}

/// Initial theme: dark when the OS asks for a dark color scheme, light
/// otherwise (including when the query is unsupported).
pub fn preferred_theme() -> Theme {
    Theme::from_prefers_dark(media_matches("(prefers-color-scheme: dark)"))
}

/// Whether the visitor asked the OS to minimize animation.
pub fn prefers_reduced_motion() -> bool {
    media_matches("(prefers-reduced-motion: reduce)")
}

/// Animation styles from `<script id="ambient-config" type="application/json">`,
/// or the defaults when the element is absent or unusable.
pub fn load_config() -> AmbientConfig {
    let raw = document()
        .ok()
        .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
        .and_then(|el| el.text_content());
    parse_config(raw.as_deref())
}

fn parse_config(raw: Option<&str>) -> AmbientConfig {
    match raw.map(str::trim) {
        None | Some("") => AmbientConfig::default(),
        Some(json) => match AmbientConfig::from_json(json) {
            Ok(config) => {
                debug!("ambient config override loaded");
                config
            }
            Err(err) => {
                warn!(%err, "ignoring ambient config override");
                AmbientConfig::default()
            }
        },
    }
}

/// Current viewport size in CSS pixels.
pub fn viewport(window: &Window) -> (f64, f64) {
    let width = window.inner_width().ok().and_then(|v| v.as_f64());
    let height = window.inner_height().ok().and_then(|v| v.as_f64());
    (px(width), px(height))
}

/// Missing, negative or non-finite sizes collapse to zero.
fn px(value: Option<f64>) -> f64 {
    match value {
        Some(v) if v.is_finite() && v > 0.0 => v.floor(),
        _ => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn px_sanitizes_viewport_values() {
        assert_eq!(px(Some(1280.6)), 1280.0);
        assert_eq!(px(Some(-3.0)), 0.0);
        assert_eq!(px(Some(f64::INFINITY)), 0.0);
        assert_eq!(px(None), 0.0);
    }

    #[test]
    fn missing_or_blank_config_uses_defaults() {
        assert_eq!(parse_config(None), AmbientConfig::default());
        assert_eq!(parse_config(Some("  \n ")), AmbientConfig::default());
    }

    #[test]
    fn invalid_config_falls_back_to_defaults() {
        assert_eq!(parse_config(Some("{ nope")), AmbientConfig::default());
        assert_eq!(
            parse_config(Some(r#"{ "day": { "palette": [] } }"#)),
            AmbientConfig::default()
        );
    }

    #[test]
    fn valid_config_overrides() {
        let config = parse_config(Some(r#"{ "day": { "density": 9000 } }"#));
        assert_eq!(config.day.density, 9000.0);
        assert_eq!(config.night, AmbientConfig::default().night);
    }
}
