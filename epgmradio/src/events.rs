use std::sync::{Arc, Mutex};

use crossbeam_channel::{unbounded, Receiver, Sender};

use crate::stations::Station;

/// Read-only copy of the session state, published with every event
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaybackSnapshot {
    /// Station whose stream is currently held, if any
    pub active_station: Option<Station>,
    /// True when the transport is audible (not paused, not stopped)
    pub is_playing: bool,
}

impl PlaybackSnapshot {
    /// Snapshot of an idle session
    pub fn idle() -> Self {
        Self {
            active_station: None,
            is_playing: false,
        }
    }
}

/// Events emitted by the playback session
#[derive(Debug, Clone)]
pub enum PlaybackEvent {
    /// The session state changed; the snapshot is the post-change state.
    StateChanged { snapshot: PlaybackSnapshot },
}

/// Subscriber registry for playback events.
///
/// Dead subscribers are dropped on the next broadcast.
#[derive(Clone, Default)]
pub struct PlaybackEventBus {
    subscribers: Arc<Mutex<Vec<Sender<PlaybackEvent>>>>,
}

impl PlaybackEventBus {
    pub fn new() -> Self {
        Self {
            subscribers: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Register a new subscriber; dropping the receiver unsubscribes it.
    pub fn subscribe(&self) -> Receiver<PlaybackEvent> {
        let (tx, rx) = unbounded::<PlaybackEvent>();
        {
            let mut subscribers = self.subscribers.lock().unwrap();
            subscribers.push(tx);
        }
        rx
    }

    pub(crate) fn broadcast(&self, event: PlaybackEvent) {
        let mut subscribers = self.subscribers.lock().unwrap();
        subscribers.retain(|tx| tx.send(event.clone()).is_ok());
    }

    /// Number of live subscribers (dead ones may still be counted until the
    /// next broadcast)
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.lock().unwrap().len()
    }
}
