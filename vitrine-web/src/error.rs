use vitrine_config::ConfigError;
use wasm_bindgen::JsValue;

/// Failures of the browser adapter.
#[derive(Debug, thiserror::Error)]
pub enum WebError {
    /// Not running in a window context.
    #[error("no global window")]
    NoWindow,

    /// The window has no document.
    #[error("window has no document")]
    NoDocument,

    /// The document has no `<body>` yet.
    #[error("document has no body")]
    NoBody,

    /// An element failed a downcast.
    #[error("element {0} is not of the expected type")]
    UnexpectedElement(&'static str),

    /// A JS exception, by message.
    #[error("javascript error: {0}")]
    Js(String),

    /// Page configuration was rejected.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl From<JsValue> for WebError {
    fn from(value: JsValue) -> Self {
        let message = value
            .as_string()
            .or_else(|| {
                js_sys::Reflect::get(&value, &JsValue::from_str("message"))
                    .ok()
                    .and_then(|message| message.as_string())
            })
            .unwrap_or_else(|| format!("{value:?}"));
        WebError::Js(message)
    }
}

impl From<WebError> for JsValue {
    fn from(error: WebError) -> Self {
        js_sys::Error::new(&error.to_string()).into()
    }
}
