use axum::http::{Method, StatusCode};
use serde_json::json;

mod common;
use common::{api, send_json, test_app};

#[tokio::test]
async fn test_list_vets() {
    let app = test_app(true).await;

    let (status, body) = send_json(&app, Method::GET, &api("/vets"), None).await;
    assert_eq!(status, StatusCode::OK);

    let vets = body["vets"].as_array().unwrap();
    assert_eq!(vets.len(), 6);
    assert_eq!(vets[0]["lastName"], "Carter");
    assert_eq!(vets[0]["specialties"], json!([]));
    assert_eq!(vets[2]["specialties"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_empty_vet_list_is_not_found() {
    let app = test_app(false).await;

    let (status, _) = send_json(&app, Method::GET, &api("/vets"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_create_vet_resolves_specialties_by_name() {
    let app = test_app(true).await;

    let vet = json!({
        "firstName": "Ada",
        "lastName": "Byron",
        "specialties": [
            { "name": "surgery" },
            { "id": 42, "name": "astrology" }
        ]
    });
    let (status, created) = send_json(&app, Method::POST, &api("/vets"), Some(vet)).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["specialties"], json!([{ "id": 2, "name": "surgery" }]));

    let id = created["id"].as_i64().unwrap();
    let (status, fetched) = send_json(&app, Method::GET, &api(&format!("/vets/{}", id)), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn test_update_vet_replaces_specialties() {
    let app = test_app(true).await;

    let update = json!({
        "firstName": "Linda",
        "lastName": "Douglas-Reyes",
        "specialties": [{ "name": "radiology" }]
    });
    let (status, _) = send_json(&app, Method::PUT, &api("/vets/3"), Some(update)).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (_, vet) = send_json(&app, Method::GET, &api("/vets/3"), None).await;
    assert_eq!(vet["firstName"], "Linda");
    assert_eq!(vet["lastName"], "Douglas-Reyes");
    assert_eq!(vet["specialties"], json!([{ "id": 1, "name": "radiology" }]));
}

#[tokio::test]
async fn test_delete_vet() {
    let app = test_app(true).await;

    let (status, _) = send_json(&app, Method::DELETE, &api("/vets/3"), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = send_json(&app, Method::GET, &api("/vets/3"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send_json(&app, Method::PUT, &api("/vets/3"), Some(json!({}))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
