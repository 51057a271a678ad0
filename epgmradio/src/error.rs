//! Error types for the playback session and audio backends

/// Result type alias for playback operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while driving a station stream
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The streaming backend could not open a station URL.
    ///
    /// After this error the session reports no active station; retrying is a
    /// user-initiated re-tap, never automatic.
    #[error("Failed to open stream {url}: {reason}")]
    StreamOpen { url: String, reason: String },

    /// A transport operation (play/pause/resume/stop/release) failed.
    ///
    /// The session logs and absorbs these; they must never leave the
    /// session state claiming a transport position it does not hold.
    #[error("Transport operation '{op}' failed: {reason}")]
    Transport { op: &'static str, reason: String },

    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
}

impl Error {
    /// Build a [`Error::StreamOpen`] for the given URL
    pub fn stream_open(url: impl Into<String>, reason: impl ToString) -> Self {
        Self::StreamOpen {
            url: url.into(),
            reason: reason.to_string(),
        }
    }

    /// Build a [`Error::Transport`] for the given operation
    pub fn transport(op: &'static str, reason: impl ToString) -> Self {
        Self::Transport {
            op,
            reason: reason.to_string(),
        }
    }
}
