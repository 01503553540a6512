use crate::{
    dtos::{
        course::{CourseOutcomesResponse, OutcomeHeading},
        program::{
            GenericCreditResponse, ProgramCourseResponse, ProgramDetailResponse, ProgramDistance,
            ProgramQueryParams, ProgramSummary,
        },
    },
    routes::internal_error,
};
use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use database::{
    entities::{dp_course_generic, dp_course_substitute_generic},
    services::query_program::{ProgramCourse, QueryProgramService},
};
use models::credit_type::CreditTypeCode;
use sea_orm::DatabaseConnection;

/// Get every degree program
#[utoipa::path(
    get,
    path = "/programs",
    responses(
        (status = 200, description = "List of degree programs retrieved successfully", body = Vec<ProgramSummary>),
        (status = 500, description = "Internal server error")
    ),
    tag = "Programs"
)]
pub async fn get_programs(
    State(db): State<DatabaseConnection>,
) -> Result<Json<Vec<ProgramSummary>>, StatusCode> {
    let programs = QueryProgramService::get_programs(&db)
        .await
        .map_err(internal_error)?;

    Ok(Json(programs.into_iter().map(ProgramSummary::from).collect()))
}

/// Get a degree program, its courses, and its similarity to every other program
#[utoipa::path(
    get,
    path = "/programs/{id}",
    params(
        ("id" = i32, Path, description = "Degree program ID"),
        ProgramQueryParams
    ),
    responses(
        (status = 200, description = "Degree program found", body = ProgramDetailResponse),
        (status = 400, description = "Invalid query parameters"),
        (status = 404, description = "Degree program not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Programs"
)]
pub async fn get_program_by_id(
    State(db): State<DatabaseConnection>,
    Path(id): Path<i32>,
    Query(params): Query<ProgramQueryParams>,
) -> Result<Json<ProgramDetailResponse>, StatusCode> {
    let detail = QueryProgramService::get_program_by_id(&db, id)
        .await
        .map_err(internal_error)?
        .ok_or(StatusCode::NOT_FOUND)?;

    let distances = QueryProgramService::get_program_distances(&db, id, params.order.into())
        .await
        .map_err(internal_error)?
        .unwrap_or_default();

    Ok(Json(ProgramDetailResponse {
        program: detail.program.into(),
        outcomes: detail
            .outcomes
            .into_iter()
            .map(|outcome| OutcomeHeading {
                id: outcome.id,
                label: outcome.label,
            })
            .collect(),
        courses: detail
            .courses
            .into_iter()
            .map(convert_to_program_course)
            .collect(),
        generic_courses: detail
            .generic_courses
            .into_iter()
            .map(|generic: dp_course_generic::Model| {
                generic_credit(generic.credit_type_id, generic.credits, generic.elective)
            })
            .collect(),
        distances: distances
            .into_iter()
            .map(|(program, similarity)| ProgramDistance {
                program: program.into(),
                similarity,
            })
            .collect(),
    }))
}

fn generic_credit(
    credit_type: CreditTypeCode,
    credits: Option<f64>,
    elective: bool,
) -> GenericCreditResponse {
    GenericCreditResponse {
        credit_type: credit_type.code().to_string(),
        credit_type_label: credit_type.label().to_string(),
        credits,
        elective,
    }
}

/// Helper function to convert a program course to its API response
fn convert_to_program_course(program_course: ProgramCourse) -> ProgramCourseResponse {
    ProgramCourseResponse {
        course: CourseOutcomesResponse {
            course: program_course.course.into(),
            outcomes: program_course.outcomes,
        },
        elective: program_course.elective,
        substitutes: program_course
            .substitutes
            .into_iter()
            .map(Into::into)
            .collect(),
        generic_substitutes: program_course
            .generic_substitutes
            .into_iter()
            .map(|generic: dp_course_substitute_generic::Model| {
                generic_credit(generic.credit_type_id, generic.credits, generic.elective)
            })
            .collect(),
    }
}
