pub mod employees;

use axum::{
    http::StatusCode,
    routing::get,
    Json, Router,
};
use common::types::Health;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{metrics, openapi::ApiDoc, startup::ServerState};

#[utoipa::path(
    get, path = "/health", tag = "health",
    responses((status = 200, description = "Service is up", body = crate::openapi::HealthResponse))
)]
pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

pub async fn metrics_text() -> (StatusCode, String) {
    metrics::encode_metrics()
}

/// Build the full application router: employee API, health, metrics and API docs.
pub fn build_router(state: ServerState, cors: CorsLayer) -> Router {
    metrics::register_all();

    let employees = Router::new()
        .route(
            "/api/v1/employees",
            get(employees::list).post(employees::create),
        )
        .route("/api/v1/employees/short/:id", get(employees::get_short))
        .route(
            "/api/v1/employees/:id",
            get(employees::get)
                .put(employees::update)
                .delete(employees::delete),
        )
        .with_state(state);

    Router::new()
        .route("/health", get(health))
        .route("/metrics", get(metrics_text))
        .merge(employees)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(
                    DefaultMakeSpan::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
