use crate::{
    dtos::course::{CourseListResponse, CourseOutcomesResponse, OutcomeHeading},
    routes::internal_error,
};
use axum::{Json, extract::State, http::StatusCode};
use database::services::query_course::QueryCourseService;
use sea_orm::DatabaseConnection;

/// Get every course with the outcomes it satisfies
#[utoipa::path(
    get,
    path = "/courses",
    responses(
        (status = 200, description = "List of courses retrieved successfully", body = CourseListResponse),
        (status = 500, description = "Internal server error")
    ),
    tag = "Courses"
)]
pub async fn get_courses(
    State(db): State<DatabaseConnection>,
) -> Result<Json<CourseListResponse>, StatusCode> {
    let (outcomes, courses) = QueryCourseService::get_courses(&db)
        .await
        .map_err(internal_error)?;

    Ok(Json(CourseListResponse {
        outcomes: outcomes
            .into_iter()
            .map(|outcome| OutcomeHeading {
                id: outcome.id,
                label: outcome.label,
            })
            .collect(),
        courses: courses
            .into_iter()
            .map(|(course, outcomes)| CourseOutcomesResponse {
                course: course.into(),
                outcomes,
            })
            .collect(),
    }))
}
