//! Shared playback session
//!
//! `PlaybackSession` guarantees that at most one live audio stream exists in
//! the whole process, however many screens ask for playback. Screens never
//! own the stream handle; they drive it through the session and observe it
//! through the event bus, which is what lets playback survive navigation
//! between screens.
//!
//! Switching station is always stop-then-start: the previous handle is
//! stopped and released in full before the next URL is opened, never two
//! opens in flight. The whole mutate-and-notify sequence runs under one
//! async mutex, so concurrent calls from different tasks serialize instead
//! of interleaving their teardown/setup halves.

use std::sync::{Arc, RwLock};

use crossbeam_channel::Receiver;
use tracing::{debug, info, warn};

use crate::backend::{AudioBackend, AudioHandle};
use crate::error::{Error, Result};
use crate::events::{PlaybackEvent, PlaybackEventBus, PlaybackSnapshot};
use crate::stations::Station;

struct SessionInner {
    /// The single live connection. `None` implies no station is active.
    handle: Option<Box<dyn AudioHandle>>,
    active_station: Option<Station>,
    is_playing: bool,
}

impl SessionInner {
    fn snapshot(&self) -> PlaybackSnapshot {
        PlaybackSnapshot {
            active_station: self.active_station.clone(),
            is_playing: self.is_playing,
        }
    }
}

/// Process-wide playback coordinator.
///
/// Create one instance at startup and share it (`Arc<PlaybackSession>`)
/// with every consumer; do not create one per screen.
pub struct PlaybackSession {
    backend: Arc<dyn AudioBackend>,
    inner: tokio::sync::Mutex<SessionInner>,
    // Mirror of the last published state, so snapshot() never has to wait
    // behind an in-flight open. Written only while `inner` is held.
    published: RwLock<PlaybackSnapshot>,
    bus: PlaybackEventBus,
}

impl PlaybackSession {
    pub fn new(backend: Arc<dyn AudioBackend>) -> Self {
        Self {
            backend,
            inner: tokio::sync::Mutex::new(SessionInner {
                handle: None,
                active_station: None,
                is_playing: false,
            }),
            published: RwLock::new(PlaybackSnapshot::idle()),
            bus: PlaybackEventBus::new(),
        }
    }

    /// Start (or restart) playback of `station`.
    ///
    /// Any previous stream is stopped and released first, including when the
    /// same station is already active: re-selecting restarts the stream, it
    /// never no-ops ("tap again to reconnect").
    ///
    /// On open failure the session rolls back to no active station and the
    /// error is returned; there is no automatic retry.
    pub async fn play(&self, station: &Station) -> Result<()> {
        let mut inner = self.inner.lock().await;

        self.teardown_current(&mut inner).await;

        info!(station = station.id.as_str(), url = station.stream_url.as_str(), "Opening station stream");
        match self.backend.open(&station.stream_url).await {
            Ok(mut handle) => {
                if let Err(e) = handle.play().await {
                    warn!(station = station.id.as_str(), error = %e, "Stream opened but refused to start");
                    if let Err(e) = handle.release().await {
                        warn!(error = %e, "Release after failed start also failed");
                    }
                    self.publish(&inner);
                    return Err(Error::stream_open(&station.stream_url, e));
                }

                inner.handle = Some(handle);
                inner.active_station = Some(station.clone());
                inner.is_playing = true;
                self.publish(&inner);
                Ok(())
            }
            Err(e) => {
                // Previous stream is already gone; report the idle state.
                self.publish(&inner);
                Err(match e {
                    Error::StreamOpen { .. } => e,
                    other => Error::stream_open(&station.stream_url, other),
                })
            }
        }
    }

    /// Pause a playing stream, or resume a paused one.
    ///
    /// No-op when no stream is active. The `is_playing` flag only flips once
    /// the transport call has succeeded, so a failed resume keeps the session
    /// visibly paused instead of lying about it.
    pub async fn toggle_pause(&self) {
        let mut inner = self.inner.lock().await;

        let was_playing = inner.is_playing;
        let Some(handle) = inner.handle.as_mut() else {
            debug!("toggle_pause with no active stream: ignored");
            return;
        };

        if was_playing {
            match handle.pause().await {
                Ok(()) => inner.is_playing = false,
                Err(e) => warn!(error = %e, "Pause failed; keeping transport state"),
            }
        } else {
            match handle.resume().await {
                Ok(()) => inner.is_playing = true,
                Err(e) => warn!(error = %e, "Resume failed; staying paused"),
            }
        }

        self.publish(&inner);
    }

    /// Stop and release the live stream, if any.
    ///
    /// Idempotent: stopping an idle session is a no-op that still notifies,
    /// so screens may call it unconditionally on teardown.
    pub async fn stop(&self) {
        let mut inner = self.inner.lock().await;
        self.teardown_current(&mut inner).await;
        self.publish(&inner);
    }

    /// Read-only snapshot of the current state.
    pub fn snapshot(&self) -> PlaybackSnapshot {
        self.published.read().unwrap().clone()
    }

    /// Subscribe to state changes. Exactly one event is delivered per
    /// state-mutating call (`play`, `toggle_pause` on an active stream,
    /// `stop`). Dropping the receiver unsubscribes.
    pub fn subscribe(&self) -> Receiver<PlaybackEvent> {
        self.bus.subscribe()
    }

    /// Stop the transport and release the handle, rolling state back to
    /// idle. Transport failures are logged and absorbed; the old resource
    /// is never left registered once this returns.
    async fn teardown_current(&self, inner: &mut SessionInner) {
        if let Some(mut handle) = inner.handle.take() {
            if let Err(e) = handle.stop().await {
                warn!(error = %e, "Stop failed while tearing down stream");
            }
            if let Err(e) = handle.release().await {
                warn!(error = %e, "Release failed while tearing down stream");
            }
        }
        inner.active_station = None;
        inner.is_playing = false;
    }

    /// Publish the current state: update the mirror, then broadcast.
    /// Must be called with `inner` locked.
    fn publish(&self, inner: &SessionInner) {
        let snapshot = inner.snapshot();
        *self.published.write().unwrap() = snapshot.clone();
        self.bus.broadcast(PlaybackEvent::StateChanged { snapshot });
    }
}
