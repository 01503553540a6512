use crate::routes::{course, health, outcome, program, root};
use utoipa::OpenApi;

/// API Documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        root::root,
        health::health,
        program::get_programs,
        program::get_program_by_id,
        outcome::get_outcomes,
        outcome::get_outcome_by_id,
        course::get_courses
    ),
    tags(
        (name = "Programs", description = "Degree programs and their similarity"),
        (name = "Outcomes", description = "Core learning outcomes"),
        (name = "Courses", description = "Course related endpoints"),
    ),
    info(
        title = "Learning Outcomes API",
        version = "1.0.0",
        description = "Degree programs, courses and core learning outcomes",
        license(
            name = "MIT OR Apache-2.0",
        )
    )
)]
pub struct ApiDoc;
