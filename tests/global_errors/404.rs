//! tests/global_errors/404.rs
//! Unknown routes and unsupported methods return the 404 envelope.

use std::sync::Arc;

use reqwest::StatusCode;
use serde_json::Value;

use crate::common::{spawn_app, InMemoryStore, BASE};

async fn assert_route_not_found(resp: reqwest::Response) {
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let json: Value = resp.json().await.expect("Response is not JSON");
    assert_eq!(json["success"], false);
    assert_eq!(json["message"], "Rota não encontrada");
}

#[tokio::test]
async fn returns_404_for_nonexistent_route() {
    let base_url: String = spawn_app(Arc::new(InMemoryStore::seeded()));
    let client = reqwest::Client::new();

    for path in [
        format!("{BASE}/unknown/path"),
        format!("{BASE}/api/unknown"),
        "/does-not-exist".to_string(),
    ] {
        let resp = client
            .get(format!("{base_url}{path}"))
            .send()
            .await
            .expect("Failed to execute request.");
        assert_route_not_found(resp).await;
    }
}

#[tokio::test]
async fn returns_404_for_unsupported_method() {
    let base_url: String = spawn_app(Arc::new(InMemoryStore::seeded()));

    let resp = reqwest::Client::new()
        .delete(format!("{base_url}{BASE}/api/notifications/1"))
        .send()
        .await
        .expect("Failed to execute request.");

    assert_route_not_found(resp).await;
}

#[tokio::test]
async fn root_redirects_to_documentation() {
    let base_url: String = spawn_app(Arc::new(InMemoryStore::seeded()));

    let client = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .unwrap();

    let resp = client.get(format!("{base_url}/")).send().await.unwrap();
    assert_eq!(resp.status(), StatusCode::FOUND);
    assert_eq!(resp.headers()["location"], BASE);

    let docs = client.get(format!("{base_url}{BASE}")).send().await.unwrap();
    assert_eq!(docs.status(), StatusCode::OK);
    let html: String = docs.text().await.unwrap();
    assert!(html.contains(&format!("{BASE}/api/notifications/with-entrance")));
    assert!(html.contains(&format!("{BASE}/api/notifications/:id/status")));
}

#[tokio::test]
async fn trailing_slash_reaches_the_same_route() {
    let base_url: String = spawn_app(Arc::new(InMemoryStore::seeded()));
    let client = reqwest::Client::new();

    let docs = client.get(format!("{base_url}{BASE}/")).send().await.unwrap();
    assert_eq!(docs.status(), StatusCode::OK);
    assert!(docs.text().await.unwrap().contains("<html"));

    for path in ["/api/notifications/", "/api/notifications/1/", "/api/status/"] {
        let resp = client
            .get(format!("{base_url}{BASE}{path}"))
            .send()
            .await
            .expect("Failed to execute request.");
        assert_eq!(resp.status(), StatusCode::OK, "{path}");

        let json: Value = resp.json().await.expect("Response is not JSON");
        assert_eq!(json["success"], true, "{path}");
    }

    let resp = client
        .get(format!("{base_url}{BASE}/unknown/"))
        .send()
        .await
        .unwrap();
    assert_route_not_found(resp).await;
}
