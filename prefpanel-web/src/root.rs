use crate::dom;
use prefpanel_core::RootAttributes;
use web_sys::{Document, Element};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomError {
    #[error("document unavailable")]
    NoDocument,
    #[error("document has no root element")]
    NoRoot,
    #[error("document has no <body>")]
    NoBody,
    #[error("document has no <head>")]
    NoHead,
    #[error("DOM error: {0}")]
    Js(String),
}

impl From<wasm_bindgen::JsValue> for DomError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        Self::Js(dom::js_error_message(&value))
    }
}

/// The `<html>` element, where the `data-*` preference attributes live.
#[derive(Debug, Clone)]
pub struct DocumentRoot {
    element: Element,
}

impl DocumentRoot {
    #[must_use]
    pub const fn new(element: Element) -> Self {
        Self { element }
    }

    /// # Errors
    /// Returns [`DomError::NoRoot`] if the document has no `documentElement`.
    pub fn from_document(document: &Document) -> Result<Self, DomError> {
        document
            .document_element()
            .map(Self::new)
            .ok_or(DomError::NoRoot)
    }
}

impl RootAttributes for DocumentRoot {
    type Error = DomError;

    fn set_attribute(&mut self, name: &str, value: &str) -> Result<(), Self::Error> {
        self.element.set_attribute(name, value).map_err(DomError::from)
    }

    fn attribute(&self, name: &str) -> Option<String> {
        self.element.get_attribute(name)
    }
}
