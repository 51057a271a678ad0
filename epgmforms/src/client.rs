//! HTTP client for the spreadsheet-backed form endpoints
//!
//! Both endpoints share the same contract: POST a JSON body, receive
//! `{"ok": true}` on success or `{"ok": false, "error": "..."}` when the
//! receiving script refuses the submission. Non-2xx statuses are surfaced
//! as [`Error::Status`] before the body is interpreted.

use std::time::Duration;

use serde::Serialize;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::error::{Error, Result};
use crate::models::{EndpointResponse, Enrollment, PrayerRequest};

/// Default request timeout in seconds
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Prayer request endpoint of the ministry's spreadsheet script
pub const DEFAULT_PRAYER_ENDPOINT: &str = "https://script.google.com/macros/s/AKfycbwqTKVlhZYggLnKJC75g-FWtHgqL8kxKidjipIfEZdotMTF-2ZDRmkWuphXpPNe3NvEOw/exec";

#[derive(Serialize)]
struct Tagged<'a, T: Serialize> {
    #[serde(rename = "submissionId")]
    submission_id: String,
    #[serde(flatten)]
    payload: &'a T,
}

/// Client for submitting forms to the ministry's endpoints
#[derive(Debug, Clone)]
pub struct FormsClient {
    client: reqwest::Client,
    prayer_url: String,
    enrollment_url: String,
}

impl FormsClient {
    /// Create a client with the given endpoint URLs
    pub fn new(prayer_url: impl Into<String>, enrollment_url: impl Into<String>) -> Self {
        Self::with_timeout(
            prayer_url,
            enrollment_url,
            Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
        )
    }

    /// Create a client with a custom request timeout
    pub fn with_timeout(
        prayer_url: impl Into<String>,
        enrollment_url: impl Into<String>,
        timeout: Duration,
    ) -> Self {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());
        Self {
            client,
            prayer_url: prayer_url.into(),
            enrollment_url: enrollment_url.into(),
        }
    }

    /// Create a client over an existing `reqwest::Client`
    pub fn with_client(
        client: reqwest::Client,
        prayer_url: impl Into<String>,
        enrollment_url: impl Into<String>,
    ) -> Self {
        Self {
            client,
            prayer_url: prayer_url.into(),
            enrollment_url: enrollment_url.into(),
        }
    }

    /// Submit a prayer request. Returns the submission id assigned to it.
    pub async fn submit_prayer_request(&self, request: &PrayerRequest) -> Result<String> {
        info!(topic = %request.topic, "📨 Submitting prayer request");
        self.post_form(&self.prayer_url, request).await
    }

    /// Submit a bible-school enrollment. Returns the submission id.
    pub async fn submit_enrollment(&self, enrollment: &Enrollment) -> Result<String> {
        info!(name = %enrollment.full_name, "📨 Submitting bible school enrollment");
        self.post_form(&self.enrollment_url, enrollment).await
    }

    async fn post_form<T: Serialize>(&self, url: &str, payload: &T) -> Result<String> {
        let submission_id = Uuid::new_v4().to_string();
        let body = Tagged {
            submission_id: submission_id.clone(),
            payload,
        };

        let response = self.client.post(url).json(&body).send().await?;
        let status = response.status();
        if !status.is_success() {
            warn!(%status, url, "Form endpoint returned an error status");
            return Err(Error::Status(status.as_u16()));
        }

        let parsed: EndpointResponse = response.json().await?;
        if parsed.ok {
            debug!(submission_id = %submission_id, "Submission accepted");
            Ok(submission_id)
        } else {
            let reason = parsed
                .error
                .unwrap_or_else(|| "no reason given".to_string());
            warn!(%reason, "Submission rejected by endpoint");
            Err(Error::Rejected(reason))
        }
    }
}
