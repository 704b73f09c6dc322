// File: src/error.rs
// Purpose: Error type for DOM access

use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Clone, Error)]
pub enum WebError {
    /// No window or document (not running in a browser)
    #[error("DOM is not available")]
    DomUnavailable,

    #[error("no element with id `{0}`")]
    ElementNotFound(String),

    /// Exception thrown by a browser API
    #[error("JavaScript error: {0}")]
    Js(String),
}

impl From<JsValue> for WebError {
    fn from(value: JsValue) -> Self {
        value
            .as_string()
            .map_or_else(|| Self::Js(format!("{value:?}")), Self::Js)
    }
}

impl From<WebError> for JsValue {
    fn from(value: WebError) -> Self {
        Self::from(value.to_string())
    }
}

pub type WebResult<T> = Result<T, WebError>;
