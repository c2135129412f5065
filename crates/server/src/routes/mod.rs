use axum::http::{header, HeaderValue};
use axum::{
    routing::{any, get, patch, post},
    Json, Router,
};
use tower_http::{
    cors::CorsLayer,
    services::{ServeDir, ServeFile},
    set_header::SetResponseHeaderLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;
use utoipa::OpenApi;

use common::types::Health;

use crate::errors::JsonApiError;
use crate::openapi::ApiDoc;
use crate::state::AppState;

pub mod contact;
pub mod inquiries;
pub mod services;
pub mod whatsapp;

/// Public path of the intake endpoint.
pub const CONTACT_PATH: &str = "/api/contact";
/// Path the deployed frontend bundle posts the form to.
pub const CONTACT_FUNCTION_PATH: &str = "/.netlify/functions/contact";

#[utoipa::path(get, path = "/health", tag = "health", responses((status = 200, description = "OK", body = crate::openapi::HealthResponse)))]
pub async fn health() -> Json<Health> {
    Json(Health::ok())
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// Intake routes carry fixed permissive CORS headers and a JSON content type
/// on every response, including 405s and the empty preflight answer.
fn intake_router() -> Router<AppState> {
    Router::new()
        .route(CONTACT_PATH, contact::method_router())
        .route(CONTACT_FUNCTION_PATH, contact::method_router())
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_ORIGIN,
            HeaderValue::from_static("*"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_HEADERS,
            HeaderValue::from_static("Content-Type"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_METHODS,
            HeaderValue::from_static("GET, POST, OPTIONS"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/json"),
        ))
}

async fn not_found() -> JsonApiError {
    JsonApiError::not_found("Not found")
}

/// Build the full application router.
///
/// `static_dir` is the pre-built single-page frontend; unknown paths fall back
/// to its `index.html`. Pass `None` to serve the JSON API only. Unknown
/// `/api/*` paths are a JSON 404 either way.
pub fn build_router(state: AppState, cors: CorsLayer, static_dir: Option<&str>) -> Router {
    let api = Router::new()
        .route("/health", get(health))
        .route("/api-docs/openapi.json", get(openapi_json))
        .route("/api/services", get(services::list_services))
        .route("/api/services/:id", get(services::get_service))
        .route("/api/services/:id/whatsapp", get(services::service_whatsapp_link))
        .route("/api/inquiries/:id", get(inquiries::get_inquiry))
        .route("/api/inquiries/:id/status", patch(inquiries::update_status))
        .route("/api/whatsapp/quote", post(whatsapp::quote_link))
        .route("/api/whatsapp/emergency", get(whatsapp::emergency_link))
        .route("/api/*rest", any(not_found))
        .layer(cors);

    let router = api.merge(intake_router());
    let router = match static_dir {
        Some(dir) => {
            let index = format!("{}/index.html", dir.trim_end_matches('/'));
            router.fallback_service(ServeDir::new(dir).fallback(ServeFile::new(index)))
        }
        None => router.fallback(not_found),
    };

    router.with_state(state).layer(
        TraceLayer::new_for_http()
            // 每次请求创建 span，包含方法和路径，日志级别为 INFO
            .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
            .on_request(DefaultOnRequest::new().level(Level::INFO))
            .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
            // 5xx 以 ERROR 记录
            .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
    )
}
