//! # epgmforms - Form Submission Client
//!
//! Prayer requests and bible-school enrollments for the EPGM Companion app.
//! Both forms are validated locally, then POSTed as JSON to the ministry's
//! spreadsheet-backed endpoints, which answer `{"ok": true}` or
//! `{"ok": false, "error": "..."}`.
//!
//! Prayer requests can also be rendered as plain text for hand-off to the
//! ministry's WhatsApp numbers when the member prefers that channel.
//!
//! ## Quick Start
//!
//! ```no_run
//! use epgmforms::{FormsClient, PrayerRequest, DEFAULT_PRAYER_ENDPOINT};
//!
//! # async fn example() -> epgmforms::Result<()> {
//! let client = FormsClient::new(DEFAULT_PRAYER_ENDPOINT, "https://example.org/enroll");
//! let request = PrayerRequest::new("Ama", "ama@example.org", "Healing", "Pray for my family")?;
//! let submission_id = client.submit_prayer_request(&request).await?;
//! println!("submitted as {submission_id}");
//! # Ok(())
//! # }
//! ```

mod client;
mod error;
mod models;

pub use client::{FormsClient, DEFAULT_PRAYER_ENDPOINT, DEFAULT_REQUEST_TIMEOUT_SECS};
pub use error::{Error, Result};
pub use models::{Enrollment, PaymentProof, PrayerRequest};
