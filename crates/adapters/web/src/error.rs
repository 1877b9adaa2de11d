//! Browser adapter error types.

use movierec_domain::error::BackendError;
use wasm_bindgen::JsValue;

/// Errors specific to the browser adapter.
#[derive(Debug, thiserror::Error)]
pub enum WebError {
    /// `gloo-net` failed to send the request or decode its body.
    #[error("http request failed")]
    Http(#[from] gloo_net::Error),

    /// The server answered with a non-2xx status.
    #[error("server responded with status {status}")]
    Status { status: u16, message: String },

    /// A browser API call threw.
    #[error("browser call failed: {0}")]
    Js(String),
}

impl WebError {
    /// Capture a thrown JavaScript value.
    #[must_use]
    pub fn from_js(value: &JsValue) -> Self {
        Self::Js(
            value
                .as_string()
                .unwrap_or_else(|| format!("{value:?}")),
        )
    }

    /// Convert into a [`BackendError`] for propagation across port
    /// boundaries. Everything but a status error counts as transport.
    #[must_use]
    pub fn into_backend(self) -> BackendError {
        match self {
            Self::Status { status, message } => BackendError::Status { status, message },
            other => BackendError::transport(other),
        }
    }
}

impl From<WebError> for BackendError {
    fn from(err: WebError) -> Self {
        err.into_backend()
    }
}
