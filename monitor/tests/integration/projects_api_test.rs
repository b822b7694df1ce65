//! Integration Test: GET /api/projects

use launch_monitor::db::traits::ServerRepository;
use launch_monitor::seed::{seed_default_projects, DEFAULT_PROJECTS};
use launch_monitor_common::protocol::ProjectListResponse;
use launch_monitor_common::types::NewServer;
use reqwest::{Client, StatusCode};

use crate::support::http::spawn_monitor;

#[tokio::test]
async fn lists_empty_inventory() {
    let server = spawn_monitor("http://127.0.0.1:9/").await;

    let response = Client::new()
        .get(server.url("/api/projects"))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body: ProjectListResponse = response.json().await.unwrap();
    assert!(body.projects.is_empty());

    server.stop().await;
}

#[tokio::test]
async fn lists_seeded_projects_with_servers() {
    let server = spawn_monitor("http://127.0.0.1:9/").await;
    seed_default_projects(server.pool()).await.unwrap();

    let merck = server
        .pool()
        .list_servers_by_project(2)
        .await
        .unwrap();
    assert!(merck.is_empty());

    server
        .pool()
        .create_server(&NewServer {
            url: Some("http://merck-launch:7003/modeln".to_string()),
            status: Some(false),
            version: None,
            project_id: Some(2),
        })
        .await
        .unwrap();

    let body: ProjectListResponse = Client::new()
        .get(server.url("/api/projects"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    let names: Vec<&str> = body.projects.iter().map(|p| p.project.name.as_str()).collect();
    assert_eq!(names, DEFAULT_PROJECTS.to_vec());

    let merck = &body.projects[1];
    assert_eq!(merck.project.name, "Merck");
    assert_eq!(merck.servers.len(), 1);
    assert_eq!(
        merck.servers[0].url.as_deref(),
        Some("http://merck-launch:7003/modeln")
    );
    assert_eq!(merck.servers[0].status, Some(false));
    assert!(merck.servers[0].version.is_none());

    server.stop().await;
}

#[tokio::test]
async fn unknown_project_returns_not_found() {
    let server = spawn_monitor("http://127.0.0.1:9/").await;
    seed_default_projects(server.pool()).await.unwrap();

    let client = Client::new();
    let found = client
        .get(server.url("/api/projects/3"))
        .send()
        .await
        .unwrap();
    assert_eq!(found.status(), StatusCode::OK);
    let body: serde_json::Value = found.json().await.unwrap();
    assert_eq!(body["name"], "J&J");

    let missing = client
        .get(server.url("/api/projects/999"))
        .send()
        .await
        .unwrap();
    assert_eq!(missing.status(), StatusCode::NOT_FOUND);
    let body: serde_json::Value = missing.json().await.unwrap();
    assert_eq!(body, serde_json::json!({"error": "Not found"}));

    server.stop().await;
}
