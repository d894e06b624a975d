use axum::http::{Method, StatusCode};
use serde_json::json;

mod common;
use common::{api, send_json, test_app};

#[tokio::test]
async fn test_action_style_routes() {
    let app = test_app(true).await;

    let (status, body) = send_json(&app, Method::GET, &api("/listSpecialties"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["specialties"].as_array().unwrap().len(), 3);

    let (status, created) = send_json(
        &app,
        Method::POST,
        &api("/addSpecialty"),
        Some(json!({ "name": "oncology" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let id = created["id"].as_i64().unwrap();

    let (status, fetched) =
        send_json(&app, Method::GET, &api(&format!("/getSpecialty/{}", id)), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, created);

    // The action-style update echoes the specialty
    let (status, updated) = send_json(
        &app,
        Method::PUT,
        &api(&format!("/updateSpecialty/{}", id)),
        Some(json!({ "name": "cardiology" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated, json!({ "id": id, "name": "cardiology" }));

    let (status, _) =
        send_json(&app, Method::DELETE, &api(&format!("/deleteSpecialty/{}", id)), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) =
        send_json(&app, Method::GET, &api(&format!("/getSpecialty/{}", id)), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_resource_style_routes() {
    let app = test_app(true).await;

    let (status, created) = send_json(
        &app,
        Method::POST,
        &api("/specialties"),
        Some(json!({ "name": "dermatology" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let id = created["id"].as_i64().unwrap();

    let (status, body) = send_json(
        &app,
        Method::PUT,
        &api(&format!("/specialties/{}", id)),
        Some(json!({ "name": "ophthalmology" })),
    )
    .await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert_eq!(body, json!({}));

    let (_, fetched) =
        send_json(&app, Method::GET, &api(&format!("/specialties/{}", id)), None).await;
    assert_eq!(fetched["name"], "ophthalmology");

    let (status, _) =
        send_json(&app, Method::DELETE, &api(&format!("/specialties/{}", id)), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn test_missing_specialty() {
    let app = test_app(false).await;

    let (status, _) = send_json(&app, Method::GET, &api("/listSpecialties"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send_json(
        &app,
        Method::PUT,
        &api("/updateSpecialty/5"),
        Some(json!({ "name": "x" })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send_json(&app, Method::DELETE, &api("/deleteSpecialty/5"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_deleting_specialty_drops_it_from_vets() {
    let app = test_app(true).await;

    let (status, _) = send_json(&app, Method::DELETE, &api("/specialties/1"), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    // Helen Leary only had radiology
    let (_, vet) = send_json(&app, Method::GET, &api("/vets/2"), None).await;
    assert_eq!(vet["specialties"], json!([]));
}
