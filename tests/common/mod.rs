#![allow(dead_code)]

use axum::{
    body::{Body, Bytes},
    http::{header, Method, Request, StatusCode},
    Router,
};
use prost::Message;
use serde_json::{json, Value};
use tower::ServiceExt;

use petclinic_rest::{
    config::Config,
    database::Database,
    web::{create_router, AppState},
};

pub const API: &str = "/petclinic/api";

/// Router over a fresh in-memory database
pub async fn test_app(seed: bool) -> Router {
    test_app_with_config(Config::default(), seed).await
}

pub async fn test_app_with_config(config: Config, seed: bool) -> Router {
    let database = Database::in_memory().await.unwrap();
    database.migrate().await.unwrap();
    if seed {
        database.seed_sample_data().await.unwrap();
    }
    create_router(AppState::new(config, database))
}

pub fn api(path: &str) -> String {
    format!("{}{}", API, path)
}

/// Send a request with a JSON body (if any), asking for a JSON reply
pub async fn send_json(
    app: &Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let request_builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::ACCEPT, "application/json");

    let request = if let Some(body) = body {
        request_builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(serde_json::to_string(&body).unwrap()))
            .unwrap()
    } else {
        request_builder.body(Body::empty()).unwrap()
    };

    let (status, _, body_bytes) = send(app, request).await;

    let json: Value = if body_bytes.is_empty() {
        json!({})
    } else {
        serde_json::from_slice(&body_bytes).unwrap_or(json!({}))
    };

    (status, json)
}

/// Send a protobuf body (if any), asking for a protobuf reply
pub async fn send_proto<M: Message>(
    app: &Router,
    method: Method,
    uri: &str,
    body: Option<&M>,
) -> (StatusCode, Bytes) {
    let request_builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::ACCEPT, "application/x-protobuf");

    let request = if let Some(body) = body {
        request_builder
            .header(header::CONTENT_TYPE, "application/x-protobuf")
            .body(Body::from(body.encode_to_vec()))
            .unwrap()
    } else {
        request_builder.body(Body::empty()).unwrap()
    };

    let (status, _, body_bytes) = send(app, request).await;
    (status, body_bytes)
}

/// Send an arbitrary request and collect the response
pub async fn send(
    app: &Router,
    request: Request<Body>,
) -> (StatusCode, axum::http::HeaderMap, Bytes) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();

    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();

    (status, headers, body_bytes)
}

/// Decode a protobuf reply
pub fn decode<M: Message + Default>(bytes: Bytes) -> M {
    M::decode(bytes).unwrap()
}
