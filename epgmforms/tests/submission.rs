//! Integration tests for form submission against a mock endpoint

use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use epgmforms::{Enrollment, Error, FormsClient, PaymentProof, PrayerRequest};

fn sample_prayer() -> PrayerRequest {
    PrayerRequest::new("Ama Mensah", "ama@example.org", "Healing", "Pray for my family").unwrap()
}

fn sample_enrollment() -> Enrollment {
    Enrollment::new(
        "Kofi Boateng",
        "+233200000000",
        "kofi@example.org",
        "I want to grow in the Word",
        PaymentProof {
            mime: "image/jpeg".to_string(),
            base64: "aGVsbG8=".to_string(),
            file_name: "momo-receipt.jpg".to_string(),
        },
    )
    .unwrap()
}

#[tokio::test]
async fn test_prayer_request_accepted() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/prayer"))
        .and(header("content-type", "application/json"))
        .and(body_partial_json(json!({
            "name": "Ama Mensah",
            "topic": "Healing",
            "message": "Pray for my family",
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true})))
        .expect(1)
        .mount(&server)
        .await;

    let client = FormsClient::new(
        format!("{}/prayer", server.uri()),
        format!("{}/enroll", server.uri()),
    );

    let submission_id = client.submit_prayer_request(&sample_prayer()).await.unwrap();
    assert!(!submission_id.is_empty());
}

#[tokio::test]
async fn test_enrollment_sends_wire_field_names() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/enroll"))
        .and(body_partial_json(json!({
            "fullName": "Kofi Boateng",
            "phone": "+233200000000",
            "proofMime": "image/jpeg",
            "proofFileName": "momo-receipt.jpg",
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true})))
        .expect(1)
        .mount(&server)
        .await;

    let client = FormsClient::new(
        format!("{}/prayer", server.uri()),
        format!("{}/enroll", server.uri()),
    );

    client.submit_enrollment(&sample_enrollment()).await.unwrap();
}

#[tokio::test]
async fn test_rejection_carries_endpoint_reason() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/prayer"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"ok": false, "error": "quota exceeded"})),
        )
        .mount(&server)
        .await;

    let client = FormsClient::new(
        format!("{}/prayer", server.uri()),
        format!("{}/enroll", server.uri()),
    );

    match client.submit_prayer_request(&sample_prayer()).await {
        Err(Error::Rejected(reason)) => assert_eq!(reason, "quota exceeded"),
        other => panic!("expected rejection, got {other:?}"),
    }
}

#[tokio::test]
async fn test_rejection_without_reason() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/prayer"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": false})))
        .mount(&server)
        .await;

    let client = FormsClient::new(
        format!("{}/prayer", server.uri()),
        format!("{}/enroll", server.uri()),
    );

    match client.submit_prayer_request(&sample_prayer()).await {
        Err(Error::Rejected(reason)) => assert_eq!(reason, "no reason given"),
        other => panic!("expected rejection, got {other:?}"),
    }
}

#[tokio::test]
async fn test_server_error_status() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/enroll"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let client = FormsClient::new(
        format!("{}/prayer", server.uri()),
        format!("{}/enroll", server.uri()),
    );

    match client.submit_enrollment(&sample_enrollment()).await {
        Err(Error::Status(code)) => assert_eq!(code, 500),
        other => panic!("expected status error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_each_submission_gets_a_fresh_id() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/prayer"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true})))
        .mount(&server)
        .await;

    let client = FormsClient::new(
        format!("{}/prayer", server.uri()),
        format!("{}/enroll", server.uri()),
    );

    let first = client.submit_prayer_request(&sample_prayer()).await.unwrap();
    let second = client.submit_prayer_request(&sample_prayer()).await.unwrap();
    assert_ne!(first, second);
}
