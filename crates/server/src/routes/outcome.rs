use crate::{
    dtos::outcome::{OutcomeDetailResponse, OutcomeResponse, ProgramUsage},
    routes::internal_error,
};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use database::services::query_outcome::QueryOutcomeService;
use sea_orm::DatabaseConnection;

/// Get every core learning outcome with its course count
#[utoipa::path(
    get,
    path = "/outcomes",
    responses(
        (status = 200, description = "List of outcomes retrieved successfully", body = Vec<OutcomeResponse>),
        (status = 500, description = "Internal server error")
    ),
    tag = "Outcomes"
)]
pub async fn get_outcomes(
    State(db): State<DatabaseConnection>,
) -> Result<Json<Vec<OutcomeResponse>>, StatusCode> {
    let outcomes = QueryOutcomeService::get_outcomes(&db)
        .await
        .map_err(internal_error)?;

    Ok(Json(
        outcomes
            .into_iter()
            .map(|(outcome, course_count)| OutcomeResponse::new(outcome, course_count))
            .collect(),
    ))
}

/// Get an outcome and the programs whose courses satisfy it
#[utoipa::path(
    get,
    path = "/outcomes/{id}",
    params(
        ("id" = i32, Path, description = "Outcome ID")
    ),
    responses(
        (status = 200, description = "Outcome found", body = OutcomeDetailResponse),
        (status = 404, description = "Outcome not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Outcomes"
)]
pub async fn get_outcome_by_id(
    State(db): State<DatabaseConnection>,
    Path(id): Path<i32>,
) -> Result<Json<OutcomeDetailResponse>, StatusCode> {
    let usage = QueryOutcomeService::get_outcome_by_id(&db, id)
        .await
        .map_err(internal_error)?
        .ok_or(StatusCode::NOT_FOUND)?;

    Ok(Json(OutcomeDetailResponse {
        outcome: OutcomeResponse::new(usage.outcome, usage.course_count),
        programs: usage
            .programs
            .into_iter()
            .map(|(program, course_count)| ProgramUsage {
                program: program.into(),
                course_count,
            })
            .collect(),
    }))
}
