//! tests/global_errors/500.rs
//! A failing store maps to 500 with the underlying detail in `error`.

use std::sync::Arc;

use reqwest::StatusCode;
use serde_json::{json, Value};

use crate::common::{api_url, spawn_app, FailingStore};

async fn assert_store_failure(resp: reqwest::Response, message: &str) {
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let json: Value = resp.json().await.expect("Response is not JSON");
    assert_eq!(json["success"], false);
    assert_eq!(json["message"], message);
    assert!(json["error"]
        .as_str()
        .expect("error detail present")
        .contains("connection refused"));
}

#[tokio::test]
async fn returns_500_on_store_failure_for_reads() {
    let base_url: String = spawn_app(Arc::new(FailingStore));
    let client = reqwest::Client::new();

    let cases = [
        ("/notifications", "Erro ao buscar notificações"),
        ("/notifications/with-entrance", "Erro ao buscar notificações com entradas"),
        ("/notifications/1", "Erro ao buscar notificação"),
        ("/notifications/entrance/10", "Erro ao buscar notificações por entrance_id"),
        ("/entrance", "Erro ao buscar entradas"),
        ("/entrance/10", "Erro ao buscar entrada"),
    ];

    for (path, message) in cases {
        let resp = client
            .get(api_url(&base_url, path))
            .send()
            .await
            .expect("Failed to make request.");
        assert_store_failure(resp, message).await;
    }
}

#[tokio::test]
async fn returns_500_on_store_failure_for_update() {
    let base_url: String = spawn_app(Arc::new(FailingStore));

    let resp = reqwest::Client::new()
        .put(api_url(&base_url, "/notifications/1/status"))
        .json(&json!({ "status": "enviado" }))
        .send()
        .await
        .expect("Failed to make request.");

    assert_store_failure(resp, "Erro ao atualizar status da notificação").await;
}
