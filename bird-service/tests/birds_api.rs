use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::util::ServiceExt; // for `oneshot`

use bird_service::prelude::*;

fn test_app() -> Router {
    app(AppState::default())
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Vec<u8>) {
    let request = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => request
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => request.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, body.to_vec())
}

async fn send_json(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let (status, bytes) = send(app, method, uri, body).await;
    (status, serde_json::from_slice(&bytes).unwrap())
}

async fn create(app: &Router, body: Value) -> Value {
    let (status, json) = send_json(app, Method::POST, "/birds", Some(body)).await;
    assert_eq!(status, StatusCode::CREATED);
    json
}

fn not_found_body() -> Value {
    json!({ "error": "Bird not found" })
}

#[tokio::test]
async fn list_on_empty_store_returns_empty_array() {
    let app = test_app();

    let (status, json) = send_json(&app, Method::GET, "/birds", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json, json!([]));
}

#[tokio::test]
async fn create_then_show_returns_same_fields() {
    let app = test_app();

    let created = create(
        &app,
        json!({ "name": "Robin", "species": "Turdus migratorius", "likes": 0 }),
    )
    .await;
    assert_eq!(created["name"], "Robin");
    assert_eq!(created["species"], "Turdus migratorius");
    assert_eq!(created["likes"], 0);

    let uri = format!("/birds/{}", created["id"]);
    let (status, shown) = send_json(&app, Method::GET, &uri, None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(shown, created);
}

#[tokio::test]
async fn create_sets_location_header() {
    let app = test_app();

    let request = Request::builder()
        .method(Method::POST)
        .uri("/birds")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(r#"{"name":"Wren"}"#))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(response.headers()[header::LOCATION], "/birds/1");
}

#[tokio::test]
async fn create_ignores_unknown_fields_and_applies_defaults() {
    let app = test_app();

    let created = create(&app, json!({ "name": "Jay", "foo": "bar" })).await;

    assert_eq!(created["name"], "Jay");
    assert_eq!(created["likes"], 0);
    assert!(created["species"].is_null());
    assert!(created.get("foo").is_none());

    let uri = format!("/birds/{}", created["id"]);
    let (_, shown) = send_json(&app, Method::GET, &uri, None).await;
    assert!(shown.get("foo").is_none());
}

#[tokio::test]
async fn update_is_partial() {
    let app = test_app();
    let created = create(&app, json!({ "name": "Robin", "likes": 5 })).await;
    let uri = format!("/birds/{}", created["id"]);

    let (status, updated) = send_json(&app, Method::PATCH, &uri, Some(json!({ "likes": 6 }))).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["name"], "Robin");
    assert_eq!(updated["likes"], 6);
    assert_eq!(updated["created_at"], created["created_at"]);
}

#[tokio::test]
async fn put_routes_to_update() {
    let app = test_app();
    let created = create(&app, json!({ "name": "Robin" })).await;
    let uri = format!("/birds/{}", created["id"]);

    let (status, updated) =
        send_json(&app, Method::PUT, &uri, Some(json!({ "species": "Erithacus rubecula" }))).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["name"], "Robin");
    assert_eq!(updated["species"], "Erithacus rubecula");
}

#[tokio::test]
async fn like_adds_one_each_time() {
    let app = test_app();
    let created = create(&app, json!({ "name": "Robin", "likes": 5 })).await;
    let uri = format!("/birds/{}/like", created["id"]);

    let (status, first) = send_json(&app, Method::PATCH, &uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(first["likes"], 6);

    let (status, second) = send_json(&app, Method::PATCH, &uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(second["likes"], 7);
    assert_eq!(second["name"], "Robin");
}

#[tokio::test]
async fn like_ignores_request_body() {
    let app = test_app();
    let created = create(&app, json!({ "likes": 1 })).await;
    let uri = format!("/birds/{}/like", created["id"]);

    let (status, liked) = send_json(&app, Method::PATCH, &uri, Some(json!({ "likes": 100 }))).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(liked["likes"], 2);
}

#[tokio::test]
async fn like_at_counter_maximum_is_conflict() {
    let app = test_app();
    let created = create(&app, json!({ "likes": u64::MAX })).await;
    let uri = format!("/birds/{}/like", created["id"]);

    let (status, json) = send_json(&app, Method::PATCH, &uri, None).await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(json["code"], "CONFLICT");
}

#[tokio::test]
async fn delete_returns_no_content_then_show_is_not_found() {
    let app = test_app();
    let created = create(&app, json!({ "name": "Robin" })).await;
    let uri = format!("/birds/{}", created["id"]);

    let (status, body) = send(&app, Method::DELETE, &uri, None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert!(body.is_empty());

    let (status, json) = send_json(&app, Method::GET, &uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json, not_found_body());
}

#[tokio::test]
async fn list_returns_only_persisted_birds() {
    let app = test_app();
    let robin = create(&app, json!({ "name": "Robin" })).await;
    let jay = create(&app, json!({ "name": "Jay" })).await;
    let wren = create(&app, json!({ "name": "Wren" })).await;

    let uri = format!("/birds/{}", jay["id"]);
    let (status, _) = send(&app, Method::DELETE, &uri, None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, json) = send_json(&app, Method::GET, "/birds", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json, json!([robin, wren]));
}

#[tokio::test]
async fn every_identifier_route_answers_missing_birds_identically() {
    let app = test_app();
    create(&app, json!({ "name": "Robin" })).await;

    for id in ["999", "abc", "-1"] {
        let cases = [
            (Method::GET, format!("/birds/{id}"), None),
            (Method::PATCH, format!("/birds/{id}"), Some(json!({ "likes": 1 }))),
            (Method::PUT, format!("/birds/{id}"), Some(json!({ "name": "X" }))),
            (Method::PATCH, format!("/birds/{id}/like"), None),
            (Method::DELETE, format!("/birds/{id}"), None),
        ];

        for (method, uri, body) in cases {
            let (status, json) = send_json(&app, method.clone(), &uri, body).await;
            assert_eq!(status, StatusCode::NOT_FOUND, "{method} {uri}");
            assert_eq!(json, not_found_body(), "{method} {uri}");
        }
    }

    // nothing was created or changed by the failed calls
    let (_, json) = send_json(&app, Method::GET, "/birds", None).await;
    assert_eq!(json.as_array().unwrap().len(), 1);
    assert_eq!(json[0]["likes"], 0);
}

#[tokio::test]
async fn health_and_readiness() {
    let app = test_app();

    let (status, json) = send_json(&app, Method::GET, "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["service"], "bird-service");

    let (status, json) = send_json(&app, Method::GET, "/ready", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["ready"], true);
    assert_eq!(json["dependencies"]["bird_store"]["healthy"], true);
}
