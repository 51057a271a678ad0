//! # epgmcontent - Static Ministry Content
//!
//! The hand-maintained content of the EPGM Companion app: live stream
//! links, the branch contact directory, and the link builders that turn
//! directory entries into `tel:`, `mailto:`, WhatsApp, and Google Maps
//! URLs.
//!
//! Everything here is compiled in. Updating a phone number or stream link
//! means editing this crate and shipping a new build, which matches how
//! often this content actually changes.

pub mod directory;
pub mod links;
pub mod streams;

pub use directory::{branch_by_id, BranchCard, PhoneContact, BRANCHES};
pub use links::{mailto_url, maps_search_url, tel_url, whatsapp_url};
pub use streams::{stream_by_id, LiveStreamLink, LIVE_STREAMS};
