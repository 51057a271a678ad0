//! Ministry station definitions
//!
//! This module defines the EPGM ministry radio stations and the catalog used
//! to look them up. Stations are immutable data: the built-in table is loaded
//! once and never mutated at runtime.

use serde::{Deserialize, Serialize};

/// A named audio stream source
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Station {
    /// Unique slug identifier (e.g., "epgm-radio")
    pub id: String,
    /// Human-readable name (e.g., "EPGM RADIO")
    pub name: String,
    /// URL of the live audio stream
    pub stream_url: String,
}

impl Station {
    /// Create a new station
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        stream_url: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            stream_url: stream_url.into(),
        }
    }
}

/// Built-in ministry stations (id, display name, stream URL)
pub const MINISTRY_STATIONS: &[(&str, &str, &str)] = &[
    (
        "end-time-prayer-radio",
        "End Time Prayer Radio",
        "https://stream.zeno.fm/zt50vuts6yzuv",
    ),
    ("epgm-radio", "EPGM RADIO", "https://stream.zeno.fm/odbvnja5zusvv"),
    (
        "endtime-radio-italy",
        "Endtime Radio Italy",
        "https://stream.zeno.fm/eparxnq2yp8uv",
    ),
    ("marcia-radio", "Marcia Radio", "https://stream.zeno.fm/7429kcggzs8uv"),
    ("radio-benji", "Radio Benji", "https://stream.zeno.fm/n01zmrggzs8uv"),
    ("radio-enoch", "Radio Enoch", "https://stream.zeno.fm/yev8e4ggzs8uv"),
    ("sabin-radio", "Sabin Radio", "https://stream.zeno.fm/dn1k9mfgzs8uv"),
    (
        "triple-k-radio",
        "Triple K Radio",
        "https://stream.zeno.fm/3m693wmc7a0uv",
    ),
    (
        "y-square-radio",
        "Y.Square Radio",
        "https://stream.zeno.fm/q64iys0wncouv",
    ),
    ("weija-radio", "Weija Radio", "https://stream.zeno.fm/99schydisjfvv"),
];

/// Read-only collection of stations with id lookup
#[derive(Debug, Clone)]
pub struct StationCatalog {
    stations: Vec<Station>,
}

impl StationCatalog {
    /// Build the catalog of built-in ministry stations
    pub fn builtin() -> Self {
        Self::new(
            MINISTRY_STATIONS
                .iter()
                .map(|(id, name, url)| Station::new(*id, *name, *url))
                .collect(),
        )
    }

    /// Build a catalog from an explicit station list
    pub fn new(stations: Vec<Station>) -> Self {
        Self { stations }
    }

    /// All stations, in catalog order
    pub fn all(&self) -> &[Station] {
        &self.stations
    }

    /// Look up a station by its id
    pub fn get(&self, id: &str) -> Option<&Station> {
        self.stations.iter().find(|s| s.id == id)
    }

    /// Number of stations in the catalog
    pub fn len(&self) -> usize {
        self.stations.len()
    }

    /// Whether the catalog is empty
    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }
}

impl Default for StationCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}
