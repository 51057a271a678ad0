//! Backend-neutral streaming-audio capability
//!
//! The playback session is written against these traits only, so the actual
//! transport (HTTP byte stream, platform audio API, test double) stays
//! swappable. Higher layers must never hold an [`AudioHandle`] themselves;
//! the session is the single owner of the live handle.

use async_trait::async_trait;

use crate::error::Result;

/// A live low-level audio connection opened against a station URL.
///
/// Every operation may fail asynchronously; callers decide whether a failure
/// is surfaced or absorbed. `release` consumes the handle: after it returns
/// the underlying resource no longer exists, even on error.
#[async_trait]
pub trait AudioHandle: Send + Sync {
    /// Start audible output on a freshly opened connection.
    async fn play(&mut self) -> Result<()>;

    /// Pause the transport without releasing the connection.
    async fn pause(&mut self) -> Result<()>;

    /// Resume a paused transport.
    async fn resume(&mut self) -> Result<()>;

    /// Stop the transport. The connection may still need `release`.
    async fn stop(&mut self) -> Result<()>;

    /// Tear down the connection and free its resources.
    async fn release(self: Box<Self>) -> Result<()>;
}

impl std::fmt::Debug for dyn AudioHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("AudioHandle")
    }
}

/// Capability that opens live audio connections.
#[async_trait]
pub trait AudioBackend: Send + Sync {
    /// Open a connection to a stream URL.
    ///
    /// On success the returned handle is not yet audible; the caller follows
    /// up with [`AudioHandle::play`].
    async fn open(&self, url: &str) -> Result<Box<dyn AudioHandle>>;
}
