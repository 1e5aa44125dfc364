use std::path::Path;

use axum::{routing::get, Json, Router};
use common::types::Health;
use tower_http::{
    cors::CorsLayer,
    services::{ServeDir, ServeFile},
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::openapi::ApiDoc;
use crate::state::AppState;

pub mod students;

#[utoipa::path(get, path = "/health", tag = "health", responses((status = 200, description = "Service is up", body = crate::openapi::HealthResponse)))]
pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

/// JSON API over the student record store.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/api/students", get(students::list_students).post(students::create_student))
        .route("/api/students/:id", get(students::get_student).delete(students::delete_student))
        .route("/api/students/name/:name", get(students::search_students))
}

/// Browsing pages and their assets, served from `frontend_dir`.
pub fn page_routes(frontend_dir: &Path) -> Router<AppState> {
    Router::new()
        .route_service("/", ServeFile::new(frontend_dir.join("index.html")))
        .route_service("/web/students", ServeFile::new(frontend_dir.join("students.html")))
        .route_service("/web/add_student", ServeFile::new(frontend_dir.join("add_student.html")))
        .nest_service("/static", ServeDir::new(frontend_dir.join("static")))
}

/// Build the full application router: health, API, pages and OpenAPI docs.
pub fn build_router(state: AppState, cors: CorsLayer, frontend_dir: impl AsRef<Path>) -> Router {
    Router::new()
        .route("/health", get(health))
        .merge(api_routes())
        .merge(page_routes(frontend_dir.as_ref()))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                // 5xx
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
