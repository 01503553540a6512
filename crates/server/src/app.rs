use crate::{
    doc::ApiDoc,
    routes::{course, health, outcome, program, root},
};
use axum::{Json, Router, routing::get};
use sea_orm::DatabaseConnection;
use tower::ServiceBuilder;
use tower_http::compression::CompressionLayer;
use utoipa::OpenApi;

async fn openapi() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// Builds the application router around a shared connection pool
pub fn router(db: DatabaseConnection) -> Router {
    Router::new()
        .route("/", get(root::root))
        .route("/health", get(health::health))
        .route("/programs", get(program::get_programs))
        .route("/programs/{id}", get(program::get_program_by_id))
        .route("/outcomes", get(outcome::get_outcomes))
        .route("/outcomes/{id}", get(outcome::get_outcome_by_id))
        .route("/courses", get(course::get_courses))
        .route("/api-docs/openapi.json", get(openapi))
        .layer(ServiceBuilder::new().layer(CompressionLayer::new()))
        .with_state(db)
}
