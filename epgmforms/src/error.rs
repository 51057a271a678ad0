//! Error types for form submission

/// Result type alias for form submission operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur when submitting a form
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// HTTP request failed (network, TLS, timeout)
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The endpoint answered with a non-success HTTP status
    #[error("Endpoint returned HTTP {0}")]
    Status(u16),

    /// The endpoint answered `{ok: false}` with an optional reason
    #[error("Submission rejected: {0}")]
    Rejected(String),

    /// The form failed client-side validation
    #[error("Invalid form: {0}")]
    InvalidForm(String),
}
