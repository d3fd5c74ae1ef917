//! Typed failures at the REST boundary.
//!
//! ERROR HANDLING
//! ==============
//! Every backend call resolves to `Result<T, ApiError>`. Views turn the error
//! into an inline message and keep their previous state; nothing here is
//! fatal to the page.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Reasons a backend call did not produce usable data.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never completed (DNS, CORS, offline, aborted).
    #[error("network error: {0}")]
    Network(String),
    /// The server answered with a non-2xx status.
    #[error("request failed: {0}")]
    Status(u16),
    /// The envelope said `success: false`.
    #[error("{0}")]
    Rejected(String),
    /// The envelope was missing the expected key or had the wrong shape.
    #[error("unexpected response from server")]
    Malformed,
    /// The multipart body could not be assembled in the browser.
    #[error("could not encode form: {0}")]
    Encode(String),
    /// Called outside the browser (SSR pass).
    #[error("not available on server")]
    Unavailable,
}

impl ApiError {
    /// Rejection with the server-supplied message, or a generic fallback.
    pub fn rejected(message: Option<&str>) -> Self {
        match message.map(str::trim) {
            Some(m) if !m.is_empty() => Self::Rejected(m.to_owned()),
            _ => Self::Rejected("request rejected by server".to_owned()),
        }
    }

    /// Whether the failure happened before the server produced a verdict.
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Network(_) | Self::Status(_) | Self::Unavailable)
    }
}
