//! Error types for document head manipulation.

use thiserror::Error;

/// Result type alias using `HeadError`.
pub type Result<T> = std::result::Result<T, HeadError>;

/// Failures while inserting or removing nodes in the document `<head>`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HeadError {
    /// No `window.document` is available (server rendering, workers).
    #[error("no document available")]
    NoDocument,

    /// The document has no `<head>` element.
    #[error("document has no <head> element")]
    NoHead,

    /// A DOM call was rejected by the browser.
    #[error("DOM error: {0}")]
    Dom(String),
}

impl HeadError {
    /// Create a new DOM error from anything printable.
    pub fn dom(message: impl Into<String>) -> Self {
        Self::Dom(message.into())
    }
}

impl From<web_sys::wasm_bindgen::JsValue> for HeadError {
    fn from(value: web_sys::wasm_bindgen::JsValue) -> Self {
        Self::Dom(format!("{value:?}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_head_error() {
        let err = HeadError::NoHead;
        assert!(err.to_string().contains("<head>"));
    }

    #[test]
    fn test_dom_error() {
        let err = HeadError::dom("append rejected");
        assert_eq!(err.to_string(), "DOM error: append rejected");
    }
}
