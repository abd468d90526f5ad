//! End-to-end tests against a real listener.
//!
//! Each test binds the router on an ephemeral loopback port and talks to it
//! over TCP with reqwest.
//!
//! Run with: cargo test --test http_tests
use std::net::SocketAddr;

use healthcheck_demo::routes::create_router;

/// Serve the router on 127.0.0.1 with an OS-assigned port and return the base URL.
async fn spawn_app() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test listener");
    let addr: SocketAddr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, create_router()).await.unwrap();
    });

    format!("http://{}", addr)
}

/// Client that ignores proxy environment variables so loopback stays local.
fn client() -> reqwest::Client {
    reqwest::Client::builder().no_proxy().build().unwrap()
}

#[tokio::test]
async fn health_returns_ok() {
    let base = spawn_app().await;

    let response = client().get(format!("{}/health", base)).send().await.unwrap();

    assert_eq!(response.status(), reqwest::StatusCode::OK);
    assert_eq!(response.text().await.unwrap(), "ok");
}

#[tokio::test]
async fn root_returns_greeting() {
    let base = spawn_app().await;

    let response = client().get(format!("{}/", base)).send().await.unwrap();

    assert_eq!(response.status(), reqwest::StatusCode::OK);
    assert_eq!(
        response.text().await.unwrap(),
        "Hello from Python healthcheck demo!"
    );
}

#[tokio::test]
async fn unknown_path_is_not_found() {
    let base = spawn_app().await;

    let response = client()
        .get(format!("{}/does-not-exist", base))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), reqwest::StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn concurrent_health_checks() {
    let base = spawn_app().await;
    let client = client();

    let requests = (0..16).map(|_| {
        let client = client.clone();
        let url = format!("{}/health", base);
        tokio::spawn(async move { client.get(url).send().await })
    });

    for request in requests.collect::<Vec<_>>() {
        let response = request.await.unwrap().unwrap();
        assert_eq!(response.status(), reqwest::StatusCode::OK);
        assert!(response.headers().contains_key("x-request-id"));
        assert_eq!(response.text().await.unwrap(), "ok");
    }
}
