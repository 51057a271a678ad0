//! Form payloads
//!
//! The two forms the app submits to its spreadsheet-backed endpoints, with
//! the same validation rules as the app's form screens. Field names on the
//! wire match what the receiving scripts expect.

use serde::Serialize;

use crate::error::{Error, Result};

/// A prayer request submitted from the prayer section
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct PrayerRequest {
    pub name: String,
    pub email: String,
    pub topic: String,
    pub message: String,
}

impl PrayerRequest {
    /// Build a validated request. Name, topic, and message are required;
    /// email is optional. All fields are trimmed.
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        topic: impl Into<String>,
        message: impl Into<String>,
    ) -> Result<Self> {
        let name = name.into().trim().to_string();
        let topic = topic.into().trim().to_string();
        let message = message.into().trim().to_string();
        if name.is_empty() {
            return Err(Error::InvalidForm("please enter your name".to_string()));
        }
        if topic.is_empty() {
            return Err(Error::InvalidForm("please enter a prayer topic".to_string()));
        }
        if message.is_empty() {
            return Err(Error::InvalidForm(
                "please write your prayer request".to_string(),
            ));
        }
        Ok(Self {
            name,
            email: email.into().trim().to_string(),
            topic,
            message,
        })
    }

    /// Plain-text rendering shared with the ministry's WhatsApp numbers
    pub fn whatsapp_text(&self) -> String {
        let email = if self.email.is_empty() {
            "(not provided)"
        } else {
            &self.email
        };
        format!(
            "Name: {}\nEmail: {}\n\nPrayer Topic:\n{}\n\nPrayer Request:\n{}\n\nSent via EPGM Church App",
            self.name, email, self.topic, self.message
        )
    }
}

/// Screenshot proving the enrollment payment
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct PaymentProof {
    #[serde(rename = "proofMime")]
    pub mime: String,
    #[serde(rename = "proofBase64")]
    pub base64: String,
    #[serde(rename = "proofFileName")]
    pub file_name: String,
}

/// A bible-school enrollment submitted from the bible study section
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Enrollment {
    #[serde(rename = "fullName")]
    pub full_name: String,
    pub phone: String,
    pub email: String,
    pub motivation: String,
    #[serde(flatten)]
    pub proof: PaymentProof,
}

impl Enrollment {
    /// Build a validated enrollment. Name, phone, motivation, and the
    /// payment proof are required; email is optional.
    pub fn new(
        full_name: impl Into<String>,
        phone: impl Into<String>,
        email: impl Into<String>,
        motivation: impl Into<String>,
        proof: PaymentProof,
    ) -> Result<Self> {
        let full_name = full_name.into().trim().to_string();
        let phone = phone.into().trim().to_string();
        let motivation = motivation.into().trim().to_string();
        if full_name.is_empty() {
            return Err(Error::InvalidForm("please enter your full name".to_string()));
        }
        if phone.is_empty() {
            return Err(Error::InvalidForm(
                "please enter your phone or WhatsApp number".to_string(),
            ));
        }
        if motivation.is_empty() {
            return Err(Error::InvalidForm(
                "please tell us briefly why you want to join".to_string(),
            ));
        }
        if proof.base64.is_empty() {
            return Err(Error::InvalidForm(
                "please upload a payment proof screenshot".to_string(),
            ));
        }
        Ok(Self {
            full_name,
            phone,
            email: email.into().trim().to_string(),
            motivation,
            proof,
        })
    }

    /// Payment reference suggested to the member
    pub fn payment_reference(&self) -> String {
        format!("Bible School - {}", self.full_name)
    }
}

/// Response contract of the spreadsheet endpoints
#[derive(Debug, serde::Deserialize)]
pub(crate) struct EndpointResponse {
    pub ok: bool,
    #[serde(default)]
    pub error: Option<String>,
}
