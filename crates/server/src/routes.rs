pub mod services;
pub mod requests;

use axum::{
    routing::{get, put},
    Json, Router,
};
use tower_http::{
    cors::CorsLayer,
    services::ServeDir,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;
use utoipa::OpenApi;

use common::types::Health;

use crate::openapi::ApiDoc;
use crate::state::AppState;

#[utoipa::path(get, path = "/health", tag = "health", responses((status = 200, description = "OK")))]
pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/services", get(services::list).post(services::create))
        .route("/services/:id", put(services::update).delete(services::delete))
        .route("/requests", get(requests::list).post(requests::create))
        // Paths used by the original front-end
        .route("/servicios", get(services::list).post(services::create))
        .route("/servicios/:id", put(services::update).delete(services::delete))
        .route("/solicitudes", get(requests::list).post(requests::create))
}

/// Build the full application router: JSON API, health, OpenAPI document and
/// the static front-end as fallback.
pub fn build_router(state: AppState, cors: CorsLayer, static_dir: &str) -> Router {
    Router::new()
        .merge(api_routes())
        .route("/health", get(health))
        .route("/api-docs/openapi.json", get(openapi_json))
        .with_state(state)
        .fallback_service(ServeDir::new(static_dir))
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
