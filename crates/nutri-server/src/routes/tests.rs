use axum::{
    body::{to_bytes, Body},
    http::{header, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use std::time::Duration;
use tower::ServiceExt;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use nutri::ProviderCredentials;

use crate::config::Config;
use crate::{build_router, AppState};

fn test_config(base_url: String, with_credentials: bool) -> Config {
    Config {
        credentials: with_credentials.then(|| ProviderCredentials::new("test-id", "test-key")),
        edamam_base_url: base_url,
        upstream_timeout: Duration::from_millis(300),
        host: "127.0.0.1".to_string(),
        port: 0,
    }
}

fn app_for(server: &MockServer, with_credentials: bool) -> Router {
    let config = test_config(format!("{}/parser", server.uri()), with_credentials);
    build_router(AppState::from_config(&config).unwrap())
}

async fn get(app: Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

async fn mount_hints(server: &MockServer, body: Value, expected_calls: u64) {
    Mock::given(method("GET"))
        .and(path("/parser"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .expect(expected_calls)
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_root_banner() {
    let server = MockServer::start().await;
    let (status, body) = get(app_for(&server, true), "/").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "message": "Nutrition AI Backend API" }));
}

#[tokio::test]
async fn test_health_check() {
    let server = MockServer::start().await;
    let (status, body) = get(app_for(&server, false), "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn test_search_rice_scenario() {
    let server = MockServer::start().await;
    mount_hints(
        &server,
        json!({
            "hints": [{
                "food": {
                    "label": "Rice, white",
                    "nutrients": { "ENERC_KCAL": 130.4, "PROCNT": 2.69, "CHOCDF": 28.17, "FAT": 0.28 }
                }
            }]
        }),
        1,
    )
    .await;

    let (status, body) = get(app_for(&server, true), "/search-food?query=rice").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!([{
            "id": "",
            "name": "Rice, white",
            "calories": 130.4,
            "protein": 2.7,
            "carbs": 28.2,
            "fat": 0.3
        }])
    );
}

#[tokio::test]
async fn test_search_repeated_query_uses_last_value() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/parser"))
        .and(query_param("ingr", "beans"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "hints": [{ "food": { "foodId": "food_b", "label": "Beans, black" } }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let (status, body) = get(
        app_for(&server, true),
        "/search-food?query=rice&query=beans",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body[0]["name"], "Beans, black");
}

#[tokio::test]
async fn test_search_zero_hints_is_empty_success() {
    let server = MockServer::start().await;
    mount_hints(&server, json!({ "text": "qwerty", "hints": [] }), 1).await;

    let (status, body) = get(app_for(&server, true), "/search-food?query=qwerty").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn test_search_empty_query_is_rejected_without_upstream_call() {
    let server = MockServer::start().await;
    mount_hints(&server, json!({ "hints": [] }), 0).await;

    for uri in ["/search-food?query=", "/search-food?query=%20%20", "/search-food"] {
        let (status, body) = get(app_for(&server, true), uri).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY, "uri: {uri}");
        assert!(body["detail"].is_string());
    }
}

#[tokio::test]
async fn test_search_without_credentials_is_misconfigured() {
    let server = MockServer::start().await;
    mount_hints(&server, json!({ "hints": [] }), 0).await;

    for uri in ["/search-food?query=rice", "/search-food?query="] {
        let (status, body) = get(app_for(&server, false), uri).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR, "uri: {uri}");
        assert!(body["detail"]
            .as_str()
            .unwrap()
            .contains("EDAMAM_APP_ID"));
    }
}

#[tokio::test]
async fn test_search_upstream_429_is_passed_through() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(429).set_body_string("Usage limits are exceeded"))
        .expect(1)
        .mount(&server)
        .await;

    let (status, body) = get(app_for(&server, true), "/search-food?query=rice").await;

    assert_eq!(status, StatusCode::TOO_MANY_REQUESTS);
    assert_eq!(body["detail"], "Edamam API error: Usage limits are exceeded");
}

#[tokio::test]
async fn test_search_upstream_timeout_is_service_unavailable() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "hints": [] }))
                .set_delay(Duration::from_secs(2)),
        )
        .expect(1)
        .mount(&server)
        .await;

    let (status, body) = get(app_for(&server, true), "/search-food?query=rice").await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert!(body["detail"]
        .as_str()
        .unwrap()
        .starts_with("Failed to connect to Edamam API"));
}

#[tokio::test]
async fn test_search_malformed_upstream_body_is_internal_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let (status, body) = get(app_for(&server, true), "/search-food?query=rice").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "detail": "Internal server error" }));
}

#[tokio::test]
async fn test_cors_allows_any_origin() {
    let server = MockServer::start().await;
    let app = app_for(&server, true);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/")
                .header(header::ORIGIN, "https://example.org")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(
        response.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
        "*"
    );
}

#[tokio::test]
async fn test_openapi_document_lists_search_route() {
    let server = MockServer::start().await;
    let (status, body) = get(app_for(&server, false), "/api-docs/openapi.json").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["paths"]["/search-food"]["get"].is_object());
}
