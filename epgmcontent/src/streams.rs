//! Live stream links
//!
//! The ministry broadcasts its services on three platforms. The links are
//! maintained here and opened in the platform app or browser.

use serde::Serialize;

/// A platform the ministry streams live services on
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct LiveStreamLink {
    /// Stable identifier
    pub id: &'static str,
    /// Platform display name
    pub platform: &'static str,
    /// Link to the ministry's page or channel
    pub url: &'static str,
}

/// The ministry's live streaming destinations
pub const LIVE_STREAMS: &[LiveStreamLink] = &[
    LiveStreamLink {
        id: "facebook",
        platform: "Facebook",
        url: "https://www.facebook.com/share/1ABdpcX8s5/",
    },
    LiveStreamLink {
        id: "youtube",
        platform: "YouTube",
        url: "https://www.youtube.com/@triplekmediagh",
    },
    LiveStreamLink {
        id: "tiktok",
        platform: "TikTok",
        url: "https://tiktok.com/@triplekmedia.com389540",
    },
];

/// Find a stream link by its identifier
pub fn stream_by_id(id: &str) -> Option<&'static LiveStreamLink> {
    LIVE_STREAMS.iter().find(|s| s.id == id)
}
