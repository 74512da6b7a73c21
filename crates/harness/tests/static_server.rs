use std::time::Duration;

use harness::{wait_for_ready, HarnessError, StaticServer};

#[tokio::test]
async fn serves_the_bundle_once_ready() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();

    let dist = tempfile::tempdir().unwrap();
    std::fs::write(
        dist.path().join("index.html"),
        "<!DOCTYPE html><html><head><title>Widget Page</title></head><body></body></html>",
    )
    .unwrap();

    let server = StaticServer::start(dist.path()).await.unwrap();
    let client = reqwest::Client::new();

    let health = client
        .get(format!("{}/health", server.base_url()))
        .send()
        .await
        .unwrap();
    assert!(health.status().is_success());
    assert_eq!(health.text().await.unwrap(), "ok");

    let index = client
        .get(format!("{}/", server.base_url()))
        .send()
        .await
        .unwrap();
    assert!(index.status().is_success());
    assert!(index.text().await.unwrap().contains("Widget Page"));
}

#[tokio::test]
async fn missing_asset_is_a_plain_404() {
    let dist = tempfile::tempdir().unwrap();
    let server = StaticServer::start(dist.path()).await.unwrap();

    let resp = reqwest::get(format!("{}/nope.js", server.base_url()))
        .await
        .unwrap();
    assert_eq!(resp.status().as_u16(), 404);
}

#[tokio::test]
async fn readiness_against_a_dead_port_times_out() {
    // bind-and-drop so the port is free but unserved
    let port = std::net::TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap()
        .port();

    let err = wait_for_ready(
        &format!("http://127.0.0.1:{port}"),
        Duration::from_millis(300),
    )
    .await
    .unwrap_err();
    assert!(matches!(err, HarnessError::Timeout { .. }));
}
