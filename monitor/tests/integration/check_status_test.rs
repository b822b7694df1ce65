//! Integration Test: GET /check_status
//!
//! 実サーバーをエフェメラルポートで起動し、wiremockの起動ページを
//! プローブさせて判定結果を確認する。

use reqwest::{Client, StatusCode};
use serde_json::Value;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::support::http::spawn_monitor;

const LAUNCH_PAGE: &str = "/modeln/app/launchPage.html";

async fn launch_page_mock(status: u16) -> MockServer {
    let mock = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(LAUNCH_PAGE))
        .and(query_param("autoLaunch", "true"))
        .respond_with(ResponseTemplate::new(status))
        .mount(&mock)
        .await;
    mock
}

fn launch_url(mock: &MockServer) -> String {
    format!("{}{}?autoLaunch=true", mock.uri(), LAUNCH_PAGE)
}

async fn get_json(client: &Client, url: &str) -> (StatusCode, Value) {
    let response = client.get(url).send().await.expect("request failed");
    let status = response.status();
    let body = response.json::<Value>().await.expect("invalid json body");
    (status, body)
}

#[tokio::test]
async fn reports_running_for_healthy_launch_page() {
    let mock = launch_page_mock(200).await;
    let target = launch_url(&mock);
    let server = spawn_monitor(&target).await;
    let client = Client::new();

    let (status, body) = get_json(&client, &server.url("/check_status")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["result"], "Running");
    assert_eq!(body["url"], target);
    assert_eq!(body["http_status"], 200);

    server.stop().await;
}

#[tokio::test]
async fn reports_not_running_after_target_starts_failing() {
    let mock = launch_page_mock(200).await;
    let server = spawn_monitor(&launch_url(&mock)).await;
    let client = Client::new();

    let (_, body) = get_json(&client, &server.url("/check_status")).await;
    assert_eq!(body["result"], "Running");

    mock.reset().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&mock)
        .await;

    let (status, body) = get_json(&client, &server.url("/check_status")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["result"], "Not Running");
    assert_eq!(body["http_status"], 503);

    server.stop().await;
}

#[tokio::test]
async fn each_request_probes_the_target_once() {
    let mock = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(LAUNCH_PAGE))
        .respond_with(ResponseTemplate::new(200))
        .expect(3)
        .mount(&mock)
        .await;
    let server = spawn_monitor(&launch_url(&mock)).await;
    let client = Client::new();
    let url = server.url("/check_status");

    let (a, b, c) = tokio::join!(
        get_json(&client, &url),
        get_json(&client, &url),
        get_json(&client, &url)
    );
    for (status, body) in [a, b, c] {
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["result"], "Running");
    }

    server.stop().await;
    mock.verify().await;
}

#[tokio::test]
async fn url_query_overrides_configured_target() {
    let configured = launch_page_mock(200).await;
    let server = spawn_monitor(&launch_url(&configured)).await;
    let client = Client::new();

    // Reserve a port and release it so nothing is listening there.
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    let refused = format!("http://127.0.0.1:{}/health", port);

    let response = client
        .get(server.url("/check_status"))
        .query(&[("url", refused.as_str())])
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = response.json().await.unwrap();

    assert_eq!(body["result"], "Not Running");
    assert_eq!(body["url"], refused);
    assert!(body.get("http_status").is_none());

    server.stop().await;
}

#[tokio::test]
async fn malformed_url_query_is_rejected() {
    let mock = launch_page_mock(200).await;
    let server = spawn_monitor(&launch_url(&mock)).await;
    let client = Client::new();

    let response = client
        .get(server.url("/check_status"))
        .query(&[("url", "ftp://files.example/launch")])
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["error"], "Invalid URL");

    server.stop().await;
}
