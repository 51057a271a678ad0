//! # epgmradio - Ministry Radio Playback for EPGM Companion
//!
//! `epgmradio` owns the radio half of the EPGM Companion app: the catalog of
//! ministry stations and the process-wide playback session that keeps a single
//! live stream alive across screen navigation.
//!
//! ## Design
//!
//! - At most one live audio connection exists system-wide; it is exclusively
//!   owned by [`PlaybackSession`]. UI layers never touch the handle.
//! - Switching stations is stop-then-start: the previous connection is fully
//!   released before the next URL is opened.
//! - Any number of screens observe the session through [`PlaybackSession::subscribe`];
//!   every state-mutating call broadcasts exactly one [`PlaybackEvent`].
//! - The actual transport is abstracted behind [`AudioBackend`] /
//!   [`AudioHandle`]; [`HttpStreamBackend`] is the production implementation.
//!
//! ## Quick Start
//!
//! ```no_run
//! use std::sync::Arc;
//! use epgmradio::{HttpStreamBackend, PlaybackSession, StationCatalog};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let catalog = StationCatalog::builtin();
//!     let backend = Arc::new(HttpStreamBackend::new()?);
//!     let session = Arc::new(PlaybackSession::new(backend));
//!
//!     let events = session.subscribe();
//!     let station = catalog.get("epgm-radio").unwrap();
//!     session.play(station).await?;
//!
//!     let snapshot = session.snapshot();
//!     assert!(snapshot.is_playing);
//!     drop(events);
//!
//!     session.stop().await;
//!     Ok(())
//! }
//! ```

pub mod backend;
pub mod error;
pub mod events;
pub mod http_backend;
pub mod session;
pub mod stations;

pub use backend::{AudioBackend, AudioHandle};
pub use error::{Error, Result};
pub use events::{PlaybackEvent, PlaybackEventBus, PlaybackSnapshot};
pub use http_backend::HttpStreamBackend;
pub use session::PlaybackSession;
pub use stations::{Station, StationCatalog, MINISTRY_STATIONS};
