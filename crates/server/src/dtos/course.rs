use database::entities::courses;
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema)]
pub struct CourseResponse {
    pub id: String,
    pub label: String,
    pub lower_credit_bound: Option<f64>,
    pub upper_credit_bound: Option<f64>,
}

impl From<courses::Model> for CourseResponse {
    fn from(course: courses::Model) -> Self {
        Self {
            id: course.id,
            label: course.label,
            lower_credit_bound: course.lower_credit_bound,
            upper_credit_bound: course.upper_credit_bound,
        }
    }
}

/// A course with one flag per core learning outcome, in outcome id order
#[derive(Debug, Serialize, ToSchema)]
pub struct CourseOutcomesResponse {
    #[serde(flatten)]
    pub course: CourseResponse,
    pub outcomes: Vec<bool>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CourseListResponse {
    /// Column headings for every `outcomes` vector
    pub outcomes: Vec<OutcomeHeading>,
    pub courses: Vec<CourseOutcomesResponse>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct OutcomeHeading {
    pub id: i32,
    pub label: String,
}
