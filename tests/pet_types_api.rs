use axum::http::{Method, StatusCode};
use serde_json::json;

mod common;
use common::{api, send_json, test_app};

#[tokio::test]
async fn test_list_pet_types() {
    let app = test_app(true).await;

    let (status, body) = send_json(&app, Method::GET, &api("/pettypes"), None).await;
    assert_eq!(status, StatusCode::OK);

    let names: Vec<&str> = body["petTypes"]
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["cat", "dog", "lizard", "snake", "bird", "hamster"]);
}

#[tokio::test]
async fn test_empty_pet_type_list_is_not_found() {
    let app = test_app(false).await;

    let (status, _) = send_json(&app, Method::GET, &api("/pettypes"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_create_pet_type_answers_ok() {
    let app = test_app(false).await;

    let (status, created) =
        send_json(&app, Method::POST, &api("/pettypes"), Some(json!({ "name": "ferret" }))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(created["name"], "ferret");

    let id = created["id"].as_i64().unwrap();
    let (status, fetched) =
        send_json(&app, Method::GET, &api(&format!("/pettypes/{}", id)), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn test_update_pet_type_applies_name_only() {
    let app = test_app(true).await;

    let update = json!({ "id": 99, "name": "iguana" });
    let (status, _) = send_json(&app, Method::PUT, &api("/pettypes/3"), Some(update)).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (_, pet_type) = send_json(&app, Method::GET, &api("/pettypes/3"), None).await;
    assert_eq!(pet_type, json!({ "id": 3, "name": "iguana" }));

    let (status, _) = send_json(&app, Method::GET, &api("/pettypes/99"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_pet_type_removes_its_pets() {
    let app = test_app(true).await;

    let (status, _) = send_json(&app, Method::DELETE, &api("/pettypes/3"), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = send_json(&app, Method::GET, &api("/pettypes/3"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    // Iggy was the only lizard
    let (status, _) = send_json(&app, Method::GET, &api("/pets/5"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
