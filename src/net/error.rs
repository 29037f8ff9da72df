//! Notice API error taxonomy.
//!
//! Transport failures and non-success statuses are both surfaced as rejected
//! operations; the facade never interprets status codes beyond "2xx or not".

/// Errors produced by notice API operations.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),

    /// The request never produced a response (connect, DNS, body read).
    #[error("request failed: {0}")]
    Request(String),

    /// The service answered with a non-success status.
    #[error("notice service returned status {status}")]
    Response { status: u16, body: String },

    /// The response body was not the expected JSON shape.
    #[error("response parse failed: {0}")]
    Parse(String),
}

impl ApiError {
    /// HTTP status code when the service responded, `None` for transport and parse failures.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Response { status, .. } => Some(*status),
            _ => None,
        }
    }
}
