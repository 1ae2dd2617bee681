use std::time::Duration;

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;
use yatra_api::{build_app, ApiConfig};

const API_KEY: &str = "dev-yatra-key";

async fn app() -> Router {
    build_app(ApiConfig::default())
        .await
        .expect("app should build")
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .header("x-api-key", API_KEY)
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get_with_key(uri: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .header("x-api-key", API_KEY)
        .body(Body::empty())
        .unwrap()
}

async fn read_json(response: axum::response::Response) -> Value {
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&body).unwrap()
}

#[tokio::test]
async fn health_is_public() {
    let response = app()
        .await
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let parsed = read_json(response).await;
    assert_eq!(parsed["status"], "ok");
    assert_eq!(parsed["capabilities"]["destination_backend"], "memory");
    assert_eq!(parsed["capabilities"]["weather_provider"], "mock");
}

#[tokio::test]
async fn chat_requires_api_key() {
    let request = Request::builder()
        .method("POST")
        .uri("/v1/chat")
        .header("content-type", "application/json")
        .body(Body::from(json!({ "message": "hello" }).to_string()))
        .unwrap();

    let response = app().await.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let parsed = read_json(response).await;
    assert_eq!(parsed["error"], "unauthorized");
}

#[tokio::test]
async fn empty_message_is_rejected() {
    let response = app()
        .await
        .oneshot(post_json("/v1/chat", json!({ "message": "   " })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let parsed = read_json(response).await;
    assert_eq!(parsed["error"], "invalid_message");
}

#[tokio::test]
async fn chat_returns_camel_case_payload() {
    let response = app()
        .await
        .oneshot(post_json(
            "/v1/chat",
            json!({
                "message": "Tell me about wildlife parks",
                "userId": "traveller-7",
                "history": [
                    { "role": "user", "content": "hello" },
                    { "role": "bot", "content": "Johar!" }
                ]
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let parsed = read_json(response).await;

    assert_eq!(parsed["type"], "destination_query");
    assert_eq!(parsed["conversationId"], "traveller-7");
    assert!(parsed["quickActions"].is_array());
    assert!(parsed["suggestions"].as_array().is_some_and(|list| !list.is_empty()));
    assert!(parsed["timestamp"].is_string());
    assert_eq!(parsed["data"]["kind"], "destinations");

    let destinations = parsed["data"]["value"].as_array().unwrap();
    assert!(!destinations.is_empty());
    assert!(destinations
        .iter()
        .all(|destination| destination["type"] == "wildlife"));
}

#[tokio::test]
async fn guests_get_generated_conversation_ids() {
    let response = app()
        .await
        .oneshot(post_json("/v1/chat", json!({ "message": "namaste" })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let parsed = read_json(response).await;
    assert_eq!(parsed["type"], "greeting");
    assert!(parsed["conversationId"]
        .as_str()
        .is_some_and(|id| id.starts_with("guest-")));
}

#[tokio::test]
async fn classify_reports_intent_and_sub_type() {
    let response = app()
        .await
        .oneshot(post_json(
            "/v1/classify",
            json!({ "message": "What's the weather in ranchi?" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let parsed = read_json(response).await;
    assert_eq!(parsed["intent"], "weather_query");
    assert_eq!(parsed["subType"], "ranchi");
}

#[tokio::test]
async fn destinations_are_filtered_and_bounded() {
    let app = app().await;

    let response = app
        .clone()
        .oneshot(get_with_key("/v1/destinations?type=nature&limit=3"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let parsed = read_json(response).await;
    assert_eq!(parsed["total"], 3);
    let ratings = parsed["destinations"]
        .as_array()
        .unwrap()
        .iter()
        .map(|destination| destination["rating"].as_f64().unwrap())
        .collect::<Vec<_>>();
    assert!(ratings.windows(2).all(|pair| pair[0] >= pair[1]));

    let response = app
        .clone()
        .oneshot(get_with_key("/v1/destinations?limit=0"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = app
        .oneshot(get_with_key("/v1/destinations?type=beach"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn weather_for_unknown_city_is_not_found() {
    let app = app().await;

    let response = app
        .clone()
        .oneshot(get_with_key("/v1/weather/netarhat"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let parsed = read_json(response).await;
    assert_eq!(parsed["city"], "Netarhat");
    assert!(parsed["snapshot"]["windSpeed"].is_number());

    let response = app
        .oneshot(get_with_key("/v1/weather/patna"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let parsed = read_json(response).await;
    assert_eq!(parsed["error"], "unknown_city");
}

#[tokio::test]
async fn rate_limit_applies_per_client() {
    let app = build_app(ApiConfig {
        rate_limit_window: Duration::from_secs(60),
        rate_limit_max: 1,
        ..ApiConfig::default()
    })
    .await
    .expect("app should build");

    let first = app
        .clone()
        .oneshot(get_with_key("/v1/destinations"))
        .await
        .unwrap();
    assert_eq!(first.status(), StatusCode::OK);

    let second = app
        .oneshot(get_with_key("/v1/destinations"))
        .await
        .unwrap();
    assert_eq!(second.status(), StatusCode::TOO_MANY_REQUESTS);
}

#[tokio::test]
async fn rejected_requests_still_carry_cors_headers() {
    let request = Request::builder()
        .method("POST")
        .uri("/v1/chat")
        .header("origin", "http://localhost:3000")
        .header("content-type", "application/json")
        .body(Body::from(json!({ "message": "hello" }).to_string()))
        .unwrap();

    let response = app().await.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(
        response
            .headers()
            .get("access-control-allow-origin")
            .and_then(|value| value.to_str().ok()),
        Some("http://localhost:3000")
    );
}
