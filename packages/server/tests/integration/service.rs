use std::sync::Arc;

use ::common::media::memory::MemoryMediaGateway;
use server::store::MemoryBlessingStore;

use crate::common::{TestApp, routes, test_config};

async fn spawn_with_origins(origins: &[&str]) -> TestApp {
    TestApp::spawn_with(
        Arc::new(MemoryBlessingStore::new()),
        Arc::new(MemoryMediaGateway::default()),
        test_config(origins.iter().map(|o| o.to_string()).collect()),
    )
    .await
}

async fn get_with_origin(app: &TestApp, path: &str, origin: &str) -> reqwest::Response {
    app.client
        .get(app.url(path))
        .header("Origin", origin)
        .send()
        .await
        .expect("Failed to send GET request")
}

#[tokio::test]
async fn health_reports_ok() {
    let app = TestApp::spawn().await;

    let res = app.get(routes::HEALTH).await;

    assert_eq!(res.status, 200);
    assert_eq!(res.body["status"], "ok");
}

#[tokio::test]
async fn openapi_document_lists_routes() {
    let app = TestApp::spawn().await;

    let res = app.get(routes::OPENAPI).await;

    assert_eq!(res.status, 200);
    let paths = res.body["paths"].as_object().unwrap();
    for path in ["/upload", "/images/{event}", "/api/blessings", "/health"] {
        assert!(paths.contains_key(path), "missing {path} in OpenAPI document");
    }
}

#[tokio::test]
async fn allowed_origin_gets_cors_headers() {
    let app = spawn_with_origins(&["https://wedding.example"]).await;

    let res = get_with_origin(&app, routes::BLESSINGS, "https://wedding.example").await;

    assert_eq!(
        res.headers()
            .get("access-control-allow-origin")
            .and_then(|v| v.to_str().ok()),
        Some("https://wedding.example")
    );
}

#[tokio::test]
async fn unlisted_origin_gets_no_cors_headers() {
    let app = spawn_with_origins(&["https://wedding.example"]).await;

    let res = get_with_origin(&app, routes::BLESSINGS, "https://evil.example").await;

    assert!(res.headers().get("access-control-allow-origin").is_none());
}

#[tokio::test]
async fn empty_allow_list_admits_any_origin() {
    let app = TestApp::spawn().await;

    let res = get_with_origin(&app, routes::BLESSINGS, "https://anyone.example").await;

    assert_eq!(
        res.headers()
            .get("access-control-allow-origin")
            .and_then(|v| v.to_str().ok()),
        Some("*")
    );
}
