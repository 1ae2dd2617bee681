mod config;
mod rate_limit;

use std::sync::Arc;

use anyhow::{Context, Result};
use axum::extract::{Json, Path, Query, State};
use axum::http::{header, HeaderValue, Method, Request, StatusCode};
use axum::middleware::{self, Next};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{body::Body, Router};
use serde::{Deserialize, Serialize};
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};
use uuid::Uuid;
use yatra_agents::ChatbotService;
use yatra_core::composer::title_case;
use yatra_core::{ChatTurn, Destination, DestinationType, Intent, WeatherSnapshot};
use yatra_observability::{AppMetrics, MetricsSnapshot};
use yatra_storage::{DestinationRepository, LookupError, Store, Weather, WeatherProvider};

pub use crate::config::ApiConfig;
use crate::rate_limit::ClientRateLimiter;

const MAX_BODY_BYTES: usize = 32 * 1024;
const MAX_MESSAGE_CHARS: usize = 1_000;
const MAX_HISTORY_TURNS: usize = 50;
const DEFAULT_DESTINATION_LIMIT: usize = 6;
const MAX_DESTINATION_LIMIT: usize = 24;

pub type Chatbot = ChatbotService<Store, Weather>;

#[derive(Clone)]
pub struct ApiState {
    pub chatbot: Arc<Chatbot>,
    pub metrics: Arc<AppMetrics>,
    pub api_key: String,
    pub limiter: ClientRateLimiter,
    pub allowed_origins: Arc<Vec<String>>,
}

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
    timestamp_utc: String,
    metrics: MetricsSnapshot,
    capabilities: HealthCapabilities,
}

#[derive(Debug, Serialize)]
struct HealthCapabilities {
    destination_backend: &'static str,
    weather_provider: &'static str,
    intents: Vec<&'static str>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ChatRequest {
    message: String,
    #[serde(default)]
    user_id: Option<String>,
    #[serde(default)]
    history: Vec<ChatTurn>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ClassifyResponse {
    intent: Intent,
    sub_type: Option<String>,
}

#[derive(Debug, Deserialize)]
struct DestinationsQuery {
    #[serde(rename = "type")]
    destination_type: Option<String>,
    limit: Option<usize>,
}

#[derive(Debug, Serialize)]
struct DestinationsResponse {
    total: usize,
    destinations: Vec<Destination>,
}

#[derive(Debug, Serialize)]
struct WeatherResponse {
    city: String,
    provider: &'static str,
    snapshot: WeatherSnapshot,
}

/// Builds the router with collaborators chosen from `config`: SQLite when a
/// database URL is set, otherwise the seeded in-memory catalog; the HTTP
/// weather provider when an API key is set, otherwise the mock.
pub async fn build_app(config: ApiConfig) -> Result<Router> {
    let metrics = AppMetrics::shared();

    let store = match config.database_url.as_deref() {
        Some(database_url) => Store::sqlite(database_url)
            .await
            .with_context(|| format!("failed to open destination store at {database_url}"))?,
        None => Store::memory(),
    };
    let weather = match config.weather_api_key.clone() {
        Some(api_key) => Weather::http(api_key, config.weather_base_url.clone())
            .context("failed to build weather client")?,
        None => Weather::mock(),
    };
    info!(
        destination_backend = store.backend_name(),
        weather_provider = weather.provider_name(),
        "chatbot collaborators ready"
    );

    let chatbot = Arc::new(ChatbotService::new(
        Arc::new(store),
        Arc::new(weather),
        metrics.clone(),
    ));

    let state = ApiState {
        chatbot,
        metrics,
        api_key: config.api_key,
        limiter: ClientRateLimiter::new(config.rate_limit_window, config.rate_limit_max),
        allowed_origins: Arc::new(config.allowed_origins),
    };

    Ok(build_router(state))
}

pub fn build_router(state: ApiState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/v1/chat", post(chat))
        .route("/v1/classify", post(classify))
        .route("/v1/destinations", get(destinations))
        .route("/v1/weather/:city", get(weather))
        .layer(TraceLayer::new_for_http())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(RequestBodyLimitLayer::new(MAX_BODY_BYTES))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            api_key_middleware,
        ))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            rate_limit_middleware,
        ))
        .layer(build_cors_layer(&state.allowed_origins))
        .with_state(state)
}

async fn health(State(state): State<ApiState>) -> impl IntoResponse {
    let payload = HealthResponse {
        status: "ok",
        timestamp_utc: chrono::Utc::now().to_rfc3339(),
        metrics: state.metrics.snapshot(),
        capabilities: HealthCapabilities {
            destination_backend: state.chatbot.destinations().backend_name(),
            weather_provider: state.chatbot.weather().provider_name(),
            intents: Intent::ALL.iter().map(|intent| intent.as_str()).collect(),
        },
    };
    (StatusCode::OK, Json(payload))
}

async fn chat(State(state): State<ApiState>, Json(request): Json<ChatRequest>) -> Response {
    let message = match validate_chat_request(&request) {
        Ok(message) => message,
        Err(response) => return response,
    };

    let user_id = request
        .user_id
        .as_deref()
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(ToString::to_string)
        .unwrap_or_else(|| format!("guest-{}", Uuid::new_v4()));

    let response = state
        .chatbot
        .classify_and_respond(message, &user_id, &request.history)
        .await;

    (StatusCode::OK, Json(response)).into_response()
}

async fn classify(State(state): State<ApiState>, Json(request): Json<ChatRequest>) -> Response {
    let message = match validate_chat_request(&request) {
        Ok(message) => message,
        Err(response) => return response,
    };

    let result = state.chatbot.classify(message);
    let payload = ClassifyResponse {
        intent: result.intent,
        sub_type: result.sub_type.as_ref().map(|sub_type| sub_type.label().to_string()),
    };

    (StatusCode::OK, Json(payload)).into_response()
}

async fn destinations(
    State(state): State<ApiState>,
    Query(query): Query<DestinationsQuery>,
) -> Response {
    let type_filter = match query
        .destination_type
        .as_deref()
        .map(str::trim)
        .filter(|value| !value.is_empty())
    {
        None => None,
        Some(raw) => match DestinationType::parse(raw) {
            Some(kind) => Some(kind),
            None => {
                return error_response(
                    StatusCode::BAD_REQUEST,
                    "invalid_type",
                    format!("unknown destination type `{raw}`"),
                )
            }
        },
    };

    let limit = query.limit.unwrap_or(DEFAULT_DESTINATION_LIMIT);
    if !(1..=MAX_DESTINATION_LIMIT).contains(&limit) {
        return error_response(
            StatusCode::BAD_REQUEST,
            "invalid_limit",
            format!("limit must be between 1 and {MAX_DESTINATION_LIMIT}"),
        );
    }

    state.metrics.inc_lookup();
    match state
        .chatbot
        .destinations()
        .find_active_destinations(type_filter, limit, true)
        .await
    {
        Ok(destinations) => (
            StatusCode::OK,
            Json(DestinationsResponse {
                total: destinations.len(),
                destinations,
            }),
        )
            .into_response(),
        Err(error) => {
            warn!(error = %error, "destination listing failed");
            error_response(
                StatusCode::SERVICE_UNAVAILABLE,
                "catalog_unavailable",
                "destination catalog is unavailable, retry shortly",
            )
        }
    }
}

async fn weather(State(state): State<ApiState>, Path(city): Path<String>) -> Response {
    let provider = state.chatbot.weather();
    state.metrics.inc_lookup();

    match provider.snapshot(&city).await {
        Ok(snapshot) => (
            StatusCode::OK,
            Json(WeatherResponse {
                city: title_case(city.trim()),
                provider: provider.provider_name(),
                snapshot,
            }),
        )
            .into_response(),
        Err(LookupError::UnknownCity(city)) => error_response(
            StatusCode::NOT_FOUND,
            "unknown_city",
            format!("no weather coverage for `{city}`"),
        ),
        Err(error) => {
            warn!(error = %error, city = %city, "weather lookup failed");
            error_response(
                StatusCode::SERVICE_UNAVAILABLE,
                "weather_unavailable",
                "weather service is unavailable, retry shortly",
            )
        }
    }
}

fn validate_chat_request(request: &ChatRequest) -> Result<&str, Response> {
    let message = request.message.trim();
    if message.is_empty() {
        return Err(error_response(
            StatusCode::BAD_REQUEST,
            "invalid_message",
            "message must not be empty",
        ));
    }
    if message.chars().count() > MAX_MESSAGE_CHARS {
        return Err(error_response(
            StatusCode::BAD_REQUEST,
            "invalid_message",
            format!("message must be at most {MAX_MESSAGE_CHARS} characters"),
        ));
    }
    if request.history.len() > MAX_HISTORY_TURNS {
        return Err(error_response(
            StatusCode::BAD_REQUEST,
            "invalid_history",
            format!("history must hold at most {MAX_HISTORY_TURNS} turns"),
        ));
    }
    Ok(message)
}

fn error_response(status: StatusCode, error: &'static str, message: impl Into<String>) -> Response {
    (
        status,
        Json(serde_json::json!({
            "error": error,
            "message": message.into(),
        })),
    )
        .into_response()
}

fn is_public_endpoint(path: &str) -> bool {
    path == "/health"
}

async fn api_key_middleware(
    State(state): State<ApiState>,
    request: Request<Body>,
    next: Next,
) -> Response {
    if request.method() == Method::OPTIONS || is_public_endpoint(request.uri().path()) {
        return next.run(request).await;
    }

    let header_key = request
        .headers()
        .get("x-api-key")
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default();

    if header_key != state.api_key {
        return error_response(
            StatusCode::UNAUTHORIZED,
            "unauthorized",
            "missing or invalid x-api-key",
        );
    }

    next.run(request).await
}

async fn rate_limit_middleware(
    State(state): State<ApiState>,
    request: Request<Body>,
    next: Next,
) -> Response {
    if request.method() == Method::OPTIONS || is_public_endpoint(request.uri().path()) {
        return next.run(request).await;
    }

    let client = request_ip(&request);
    if !state.limiter.allow(&client) {
        return error_response(
            StatusCode::TOO_MANY_REQUESTS,
            "rate_limited",
            "rate limit exceeded for this client",
        );
    }

    next.run(request).await
}

fn request_ip(request: &Request<Body>) -> String {
    request
        .headers()
        .get("x-forwarded-for")
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(',').next())
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(ToString::to_string)
        .unwrap_or_else(|| "local".to_string())
}

fn build_cors_layer(allowed_origins: &Arc<Vec<String>>) -> CorsLayer {
    let origins = allowed_origins
        .iter()
        .filter_map(|origin| HeaderValue::from_str(origin).ok())
        .collect::<Vec<_>>();
    let origins = if origins.is_empty() {
        vec![HeaderValue::from_static("http://localhost:3000")]
    } else {
        origins
    };

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([
            header::CONTENT_TYPE,
            header::HeaderName::from_static("x-api-key"),
        ])
}
