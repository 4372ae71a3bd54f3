use thiserror::Error;
use wasm_bindgen::JsValue;

/// Browser access failures. None of these reach the visitor: the page
/// renders without the effect that needed the missing piece.
#[derive(Debug, Error)]
pub enum DomError {
    #[error("no window object")]
    NoWindow,
    #[error("no document on window")]
    NoDocument,
    #[error("document has no root element")]
    NoRoot,
    #[error("2d canvas context unavailable")]
    NoContext,
    #[error("javascript error: {0}")]
    Js(String),
}

impl From<JsValue> for DomError {
    fn from(value: JsValue) -> Self {
        DomError::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}
