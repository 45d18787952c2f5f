//! Error type for backend calls.

/// Failure of a single backend call.
///
/// Callers log every variant and fall back to the previous UI state; the
/// variants exist so the log line says what actually went wrong.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response (network, CORS, bad URL).
    #[error("request failed: {0}")]
    Transport(String),

    /// The backend answered with a non-success HTTP status.
    #[error("{operation} failed: {status}")]
    Status { operation: &'static str, status: u16 },

    /// The backend answered 2xx but reported `success: false`.
    #[error("{operation} rejected: {message}")]
    Rejected { operation: &'static str, message: String },

    /// The response body did not match the expected shape.
    #[error("response decode failed: {0}")]
    Decode(String),

    /// Browser-only call attempted during server rendering.
    #[error("not available on server")]
    Unavailable,
}
