mod common;

use axum::http::StatusCode;
use common::{body_json, delete, get, post_json, put_json};
use projectdash::Store;
use serde_json::{json, Value};

fn member(name: &str, email: &str) -> Value {
    json!({
        "name": name,
        "email": email,
        "role": "QA Engineer",
        "position": "Junior Developer",
        "birthdate": "1998-04-02",
        "phone": "+51 666 555 444",
        "projectIds": ["1"]
    })
}

#[tokio::test]
async fn create_member_defaults_to_active() {
    let store = Store::seeded();
    let response = post_json(
        common::build_test_app(store.clone()),
        "/api/members",
        member("Luis Torres", "luis@example.com"),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["isActive"], true);
    assert_eq!(json["birthdate"], "1998-04-02");

    let response = get(common::build_test_app(store), "/api/projects/1/members").await;
    assert_eq!(body_json(response).await.as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn duplicate_email_returns_422() {
    let store = Store::seeded();

    // Ana is inactive but still owns her address.
    let response = post_json(
        common::build_test_app(store.clone()),
        "/api/members",
        member("Otra Ana", "ana@example.com"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let json = body_json(response).await;
    assert_eq!(json["fields"]["email"], "Este email ya está en uso");

    assert_eq!(store.read(|s| s.team_members.len()).await, 3);
}

#[tokio::test]
async fn invalid_email_returns_422() {
    let app = common::build_test_app(Store::seeded());
    let response = post_json(app, "/api/members", member("Luis", "not-an-email")).await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body_json(response).await["fields"]["email"], "Email inválido");
}

#[tokio::test]
async fn member_may_keep_own_email() {
    let store = Store::seeded();
    let mut body = member("María García", "maria@example.com");
    body["isActive"] = json!(false);

    let response = put_json(common::build_test_app(store.clone()), "/api/members/1", body).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["userId"], "1");
    assert_eq!(json["isActive"], false);

    let response = put_json(
        common::build_test_app(store),
        "/api/members/1",
        member("María García", "juan@example.com"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn deleted_assignee_shows_as_unassigned() {
    let store = Store::seeded();

    let response = delete(common::build_test_app(store.clone()), "/api/members/3").await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = get(common::build_test_app(store.clone()), "/api/members/3").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = get(common::build_test_app(store.clone()), "/api/members/3/tasks").await;
    let json = body_json(response).await;
    assert_eq!(json[0]["id"], "2");

    let response = get(common::build_test_app(store), "/api/tasks/table").await;
    let json = body_json(response).await;
    assert_eq!(json["items"][1]["assigneeName"], "Sin asignar");
}

#[tokio::test]
async fn unknown_member_returns_404() {
    let store = Store::seeded();

    let response = delete(common::build_test_app(store.clone()), "/api/members/99").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = put_json(
        common::build_test_app(store),
        "/api/members/99",
        member("Nadie", "nadie@example.com"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
