use axum::http::{Method, StatusCode};
use serde_json::json;

mod common;
use common::{api, send_json, test_app};

#[tokio::test]
async fn test_list_visits() {
    let app = test_app(true).await;

    let (status, body) = send_json(&app, Method::GET, &api("/visits"), None).await;
    assert_eq!(status, StatusCode::OK);

    let visits = body["visits"].as_array().unwrap();
    assert_eq!(visits.len(), 4);
    assert_eq!(
        visits[0],
        json!({ "id": 1, "date": "2013-01-01", "description": "rabies shot", "petId": 7 })
    );
}

#[tokio::test]
async fn test_empty_visit_list_is_not_found() {
    let app = test_app(false).await;

    let (status, _) = send_json(&app, Method::GET, &api("/visits"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_create_then_get_visit() {
    let app = test_app(true).await;

    let visit = json!({ "date": "2023-07-01", "description": "dental cleaning", "petId": 3 });
    let (status, created) = send_json(&app, Method::POST, &api("/visits"), Some(visit)).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["petId"], 3);

    let id = created["id"].as_i64().unwrap();
    let (status, fetched) =
        send_json(&app, Method::GET, &api(&format!("/visits/{}", id)), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn test_create_visit_for_missing_pet() {
    let app = test_app(true).await;

    let visit = json!({ "date": "2023-07-01", "description": "x", "petId": 404 });
    let (status, _) = send_json(&app, Method::POST, &api("/visits"), Some(visit)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_update_visit_ignores_pet_id() {
    let app = test_app(true).await;

    let update = json!({ "date": "2013-02-01", "description": "booster", "petId": 1 });
    let (status, _) = send_json(&app, Method::PUT, &api("/visits/2"), Some(update)).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (_, visit) = send_json(&app, Method::GET, &api("/visits/2"), None).await;
    assert_eq!(
        visit,
        json!({ "id": 2, "date": "2013-02-01", "description": "booster", "petId": 8 })
    );
}

#[tokio::test]
async fn test_delete_visit() {
    let app = test_app(true).await;

    let (status, _) = send_json(&app, Method::DELETE, &api("/visits/4"), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = send_json(&app, Method::GET, &api("/visits/4"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send_json(&app, Method::DELETE, &api("/visits/4"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
