//! HTTP-level tests for the project endpoints.

mod common;

use axum::http::StatusCode;
use common::{body_json, delete, get, post_json, put_json};
use projectdash::Store;
use serde_json::json;

#[tokio::test]
async fn list_returns_seed_projects() {
    let app = common::build_test_app(Store::seeded());
    let response = get(app, "/api/projects").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let names: Vec<_> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["name"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(names, vec!["E-commerce Platform", "Mobile App"]);
}

#[tokio::test]
async fn create_project_returns_201() {
    let store = Store::seeded();
    let response = post_json(
        common::build_test_app(store.clone()),
        "/api/projects",
        json!({"name": "Design System", "category": "design", "priority": "urgent", "teamMembers": ["1"]}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["name"], "Design System");
    assert_eq!(json["status"], "planning");
    assert_eq!(json["progress"], 0);
    assert_eq!(json["priority"], "urgent");

    let id = json["id"].as_str().unwrap().to_string();
    let response = get(common::build_test_app(store), &format!("/api/projects/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn create_project_with_missing_fields_returns_422() {
    let store = Store::seeded();
    let response = post_json(
        common::build_test_app(store.clone()),
        "/api/projects",
        json!({"description": "no name"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert!(json["fields"]["name"].is_string());
    assert!(json["fields"]["category"].is_string());
    assert!(json["fields"]["priority"].is_string());

    assert_eq!(store.read(|s| s.projects.len()).await, 2);
}

#[tokio::test]
async fn update_project_replaces_in_place() {
    let store = Store::seeded();
    let response = put_json(
        common::build_test_app(store.clone()),
        "/api/projects/1",
        json!({
            "name": "E-commerce Platform v2",
            "category": "web",
            "priority": "high",
            "status": "review",
            "progress": 95,
            "teamMembers": ["1", "2"]
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["status"], "review");
    assert_eq!(json["createdAt"], "2025-10-01T00:00:00Z");

    let projects = store.read(|s| s.projects.clone()).await;
    assert_eq!(projects.len(), 2);
    assert_eq!(projects[0].name, "E-commerce Platform v2");
}

#[tokio::test]
async fn unknown_project_returns_404() {
    let store = Store::seeded();

    let response = get(common::build_test_app(store.clone()), "/api/projects/404").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["code"], "NOT_FOUND");

    let response = delete(common::build_test_app(store.clone()), "/api/projects/404").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = put_json(
        common::build_test_app(store),
        "/api/projects/404",
        json!({"name": "x", "category": "web", "priority": "low"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_project_does_not_cascade() {
    let store = Store::seeded();

    let response = delete(common::build_test_app(store.clone()), "/api/projects/1").await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = get(common::build_test_app(store.clone()), "/api/tasks/1").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["projectId"], "1");

    let response = get(common::build_test_app(store), "/api/tasks/table").await;
    let json = body_json(response).await;
    assert_eq!(json["items"][0]["projectName"], "Proyecto no encontrado");
}

#[tokio::test]
async fn project_relations() {
    let store = Store::seeded();

    let response = get(common::build_test_app(store.clone()), "/api/projects/1/members").await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json.as_array().unwrap().len(), 2);

    let response = get(common::build_test_app(store), "/api/projects/2/tasks").await;
    let json = body_json(response).await;
    assert_eq!(json[0]["id"], "2");
}
