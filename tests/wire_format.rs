use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
};
use serde_json::json;

use petclinic_rest::{
    config::Config,
    proto::{
        ProtoOwner, ProtoOwnerAdd, ProtoOwners, ProtoPet, ProtoPetAdd, ProtoPetType,
        ProtoVisitAdd, ProtoVisit, WireFormat,
    },
};

mod common;
use common::{api, decode, send, send_json, send_proto, test_app, test_app_with_config};

#[tokio::test]
async fn test_protobuf_create_then_get_owner() {
    let app = test_app(false).await;

    let owner = ProtoOwner {
        id: 0,
        first_name: "Ada".to_string(),
        last_name: "Lovelace".to_string(),
        address: "12 St James's Sq.".to_string(),
        city: "London".to_string(),
        telephone: "0207000000".to_string(),
        pets: vec![],
    };
    let (status, bytes) = send_proto(&app, Method::POST, &api("/owners"), Some(&owner)).await;
    assert_eq!(status, StatusCode::CREATED);
    let created: ProtoOwner = decode(bytes);
    assert_ne!(created.id, 0);
    assert_eq!(created.first_name, "Ada");
    assert_eq!(created.last_name, "Lovelace");
    assert_eq!(created.address, "12 St James's Sq.");
    assert_eq!(created.city, "London");
    assert_eq!(created.telephone, "0207000000");

    let (status, bytes) = send_proto::<ProtoOwner>(
        &app,
        Method::GET,
        &api(&format!("/owners/{}", created.id)),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(decode::<ProtoOwner>(bytes), created);
}

#[tokio::test]
async fn test_protobuf_owner_update_takes_add_message() {
    let app = test_app(true).await;

    let update = ProtoOwnerAdd {
        first_name: "George".to_string(),
        last_name: "Franklin".to_string(),
        address: "1 New Rd.".to_string(),
        city: "Madison".to_string(),
        telephone: "6085551023".to_string(),
    };
    let (status, _) = send_proto(&app, Method::PUT, &api("/owners/1"), Some(&update)).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, bytes) = send_proto::<ProtoOwner>(&app, Method::GET, &api("/owners/1"), None).await;
    assert_eq!(status, StatusCode::OK);
    let owner: ProtoOwner = decode(bytes);
    assert_eq!(owner.first_name, "George");
    assert_eq!(owner.address, "1 New Rd.");
    assert_eq!(owner.city, "Madison");
}

#[tokio::test]
async fn test_protobuf_dates_survive() {
    let app = test_app(true).await;

    let pet = ProtoPetAdd {
        name: "Nibbles".to_string(),
        birth_date: "2016-02-29".to_string(),
        pet_type_id: 6,
        owner_id: 2,
    };
    let (status, bytes) = send_proto(&app, Method::POST, &api("/pets"), Some(&pet)).await;
    assert_eq!(status, StatusCode::CREATED);

    let created: ProtoPet = decode(bytes);
    assert_eq!(created.birth_date, "2016-02-29");
    assert_eq!(
        created.r#type,
        Some(ProtoPetType {
            id: 6,
            name: "hamster".to_string()
        })
    );

    let visit = ProtoVisitAdd {
        date: "2024-12-31".to_string(),
        description: "nail trim".to_string(),
        pet_id: created.id,
    };
    let (status, bytes) = send_proto(&app, Method::POST, &api("/visits"), Some(&visit)).await;
    assert_eq!(status, StatusCode::CREATED);
    let visit: ProtoVisit = decode(bytes);
    assert_eq!(visit.date, "2024-12-31");
    assert_eq!(visit.pet_id, created.id);
}

#[tokio::test]
async fn test_default_format_is_protobuf() {
    let app = test_app(true).await;

    let request = Request::builder()
        .uri(api("/owners"))
        .body(Body::empty())
        .unwrap();
    let (status, headers, bytes) = send(&app, request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(headers[header::CONTENT_TYPE], "application/x-protobuf");
    let owners: ProtoOwners = decode(bytes);
    assert_eq!(owners.owners.len(), 10);
}

#[tokio::test]
async fn test_default_format_is_configurable() {
    let mut config = Config::default();
    config.web.default_format = WireFormat::Json;
    let app = test_app_with_config(config, true).await;

    let request = Request::builder()
        .uri(api("/pettypes/1"))
        .header(header::ACCEPT, "*/*")
        .body(Body::empty())
        .unwrap();
    let (status, headers, bytes) = send(&app, request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(headers[header::CONTENT_TYPE], "application/json");
    let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body, json!({ "id": 1, "name": "cat" }));
}

#[tokio::test]
async fn test_request_without_content_type_is_protobuf() {
    let app = test_app(false).await;

    let pet_type = ProtoPetType {
        id: 0,
        name: "axolotl".to_string(),
    };
    let request = Request::builder()
        .method(Method::POST)
        .uri(api("/pettypes"))
        .header(header::ACCEPT, "application/json")
        .body(Body::from(prost::Message::encode_to_vec(&pet_type)))
        .unwrap();
    let (status, _, bytes) = send(&app, request).await;

    assert_eq!(status, StatusCode::OK);
    let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["name"], "axolotl");
}

#[tokio::test]
async fn test_unsupported_content_type() {
    let app = test_app(false).await;

    let request = Request::builder()
        .method(Method::POST)
        .uri(api("/owners"))
        .header(header::CONTENT_TYPE, "text/plain")
        .body(Body::from("firstName=Ada"))
        .unwrap();
    let (status, _, bytes) = send(&app, request).await;

    assert_eq!(status, StatusCode::UNSUPPORTED_MEDIA_TYPE);
    assert!(bytes.is_empty());
}

#[tokio::test]
async fn test_undecodable_bodies() {
    let app = test_app(false).await;

    // Length prefix promises five bytes, two follow
    let request = Request::builder()
        .method(Method::POST)
        .uri(api("/owners"))
        .header(header::CONTENT_TYPE, "application/x-protobuf")
        .body(Body::from(vec![0x0a, 0x05, b'A', b'd']))
        .unwrap();
    let (status, _, _) = send(&app, request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let request = Request::builder()
        .method(Method::POST)
        .uri(api("/owners"))
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{\"firstName\": "))
        .unwrap();
    let (status, _, _) = send(&app, request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_empty_base_path_serves_routes_at_root() {
    let mut config = Config::default();
    config.web.base_path = String::new();
    let app = test_app_with_config(config, true).await;

    let (status, body) = send_json(&app, Method::GET, "/vets/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["firstName"], "James");

    let (status, _) = send_json(&app, Method::GET, &api("/vets/1"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_health() {
    let app = test_app(false).await;

    let (status, body) = send_json(&app, Method::GET, "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["database"], "connected");
    assert!(body.get("timestamp").is_some());
}

#[tokio::test]
async fn test_cors_exposes_headers() {
    let app = test_app(true).await;

    let request = Request::builder()
        .uri(api("/pettypes"))
        .header(header::ORIGIN, "http://localhost:4200")
        .header(header::ACCEPT, "application/json")
        .body(Body::empty())
        .unwrap();
    let (status, headers, _) = send(&app, request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
    let exposed = headers[header::ACCESS_CONTROL_EXPOSE_HEADERS]
        .to_str()
        .unwrap()
        .to_ascii_lowercase();
    assert!(exposed.contains("errors"));
    assert!(exposed.contains("content-type"));
}
