//! HTTP streaming backend
//!
//! Production [`AudioBackend`] that opens a station's live stream over HTTP
//! and drains its byte stream in a spawned task. Opening performs the GET and
//! validates the response status; pause/resume gate the drain loop through a
//! watch flag; stop/release abort the task and drop the connection.
//!
//! Decoding and audible output are the embedding platform's concern; this
//! backend owns the network half of the transport.

use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;
use futures::StreamExt;
use reqwest::Client;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, trace, warn};

use crate::backend::{AudioBackend, AudioHandle};
use crate::error::{Error, Result};

/// Default timeout for establishing the stream connection (seconds)
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 30;

/// Default User-Agent
pub const DEFAULT_USER_AGENT: &str = "EPGMCompanion/0.1 (epgmradio)";

/// [`AudioBackend`] over reqwest byte streams
#[derive(Debug, Clone)]
pub struct HttpStreamBackend {
    client: Client,
    connect_timeout: Duration,
}

impl HttpStreamBackend {
    /// Create a backend with default settings
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .user_agent(DEFAULT_USER_AGENT)
            .connect_timeout(Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS))
            .build()?;
        Ok(Self::with_client(client))
    }

    /// Create a backend sharing an existing HTTP client
    pub fn with_client(client: Client) -> Self {
        Self {
            client,
            connect_timeout: Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS),
        }
    }

    /// Override the connection timeout
    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }
}

#[async_trait]
impl AudioBackend for HttpStreamBackend {
    async fn open(&self, url: &str) -> Result<Box<dyn AudioHandle>> {
        debug!(url, "Opening HTTP audio stream");

        // The timeout bounds reaching the response headers only. A live
        // stream body has no end, so a total-request timeout must never be
        // set on it.
        let response = tokio::time::timeout(self.connect_timeout, self.client.get(url).send())
            .await
            .map_err(|_| {
                Error::stream_open(url, format!("no response after {:?}", self.connect_timeout))
            })?
            .map_err(|e| Error::stream_open(url, e))?;

        if !response.status().is_success() {
            return Err(Error::stream_open(
                url,
                format!("HTTP {}", response.status()),
            ));
        }

        // Start paused; the session follows up with play().
        let (paused_tx, paused_rx) = watch::channel(true);
        let stream = response.bytes_stream();
        let task = tokio::spawn(drain_stream(url.to_string(), Box::pin(stream), paused_rx));

        Ok(Box::new(HttpStreamHandle {
            url: url.to_string(),
            paused: paused_tx,
            task,
        }))
    }
}

/// Live HTTP stream connection
struct HttpStreamHandle {
    url: String,
    paused: watch::Sender<bool>,
    task: JoinHandle<()>,
}

impl HttpStreamHandle {
    fn set_paused(&self, paused: bool, op: &'static str) -> Result<()> {
        self.paused
            .send(paused)
            .map_err(|_| Error::transport(op, format!("stream {} already ended", self.url)))
    }
}

#[async_trait]
impl AudioHandle for HttpStreamHandle {
    async fn play(&mut self) -> Result<()> {
        self.set_paused(false, "play")
    }

    async fn pause(&mut self) -> Result<()> {
        self.set_paused(true, "pause")
    }

    async fn resume(&mut self) -> Result<()> {
        self.set_paused(false, "resume")
    }

    async fn stop(&mut self) -> Result<()> {
        self.task.abort();
        Ok(())
    }

    async fn release(self: Box<Self>) -> Result<()> {
        self.task.abort();
        debug!(url = self.url.as_str(), "Released HTTP audio stream");
        Ok(())
    }
}

impl Drop for HttpStreamHandle {
    fn drop(&mut self) {
        // Handles dropped without release() must not leak the drain task.
        self.task.abort();
    }
}

/// Drain the byte stream until it ends, fails, or the handle is torn down.
/// While paused the loop parks on the watch flag and pulls nothing.
async fn drain_stream(
    url: String,
    mut stream: futures::stream::BoxStream<'static, reqwest::Result<Bytes>>,
    mut paused: watch::Receiver<bool>,
) {
    loop {
        if *paused.borrow() {
            if paused.changed().await.is_err() {
                break;
            }
            continue;
        }

        tokio::select! {
            changed = paused.changed() => {
                if changed.is_err() {
                    break;
                }
            }
            chunk = stream.next() => match chunk {
                Some(Ok(bytes)) => trace!(url = url.as_str(), len = bytes.len(), "Stream chunk"),
                Some(Err(e)) => {
                    warn!(url = url.as_str(), error = %e, "Stream read failed");
                    break;
                }
                None => {
                    debug!(url = url.as_str(), "Stream ended");
                    break;
                }
            },
        }
    }
}
