//! tests/global_errors/413.rs
//! Ensures that sending a large payload (> 2MB by default) triggers 413.

use std::sync::Arc;

use reqwest::StatusCode;
use serde_json::Value;

use crate::common::{api_url, spawn_app, InMemoryStore};

#[tokio::test]
async fn returns_413_when_payload_exceeds_global_limit() {
    let store: Arc<InMemoryStore> = Arc::new(InMemoryStore::seeded());
    let base_url: String = spawn_app(store.clone());

    // A JSON string slightly larger than 2MB.
    let oversized_payload: String = format!("{{\"status\": \"{}\"}}", "X".repeat(2_097_152 + 100));

    let resp: reqwest::Response = reqwest::Client::new()
        .put(api_url(&base_url, "/notifications/1/status"))
        .header("content-type", "application/json")
        .body(oversized_payload)
        .send()
        .await
        .expect("Failed to send large request.");

    assert_eq!(resp.status(), StatusCode::PAYLOAD_TOO_LARGE);

    let json: Value = resp.json().await.unwrap();
    assert_eq!(json["success"], false);
    assert_eq!(json["message"], "Payload Too Large");
    assert!(json["error"].is_string());
}
