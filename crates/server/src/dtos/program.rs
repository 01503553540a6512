use crate::dtos::course::{CourseOutcomesResponse, CourseResponse, OutcomeHeading};
use database::{entities::degree_programs, services::query_program::DistanceOrder};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Serialize, ToSchema)]
pub struct ProgramSummary {
    pub id: i32,
    pub label: String,
    pub credits: Option<f64>,
    pub elective_credits: Option<f64>,
}

impl From<degree_programs::Model> for ProgramSummary {
    fn from(program: degree_programs::Model) -> Self {
        Self {
            id: program.id,
            label: program.label,
            credits: program.credits,
            elective_credits: program.elective_credits,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ProgramCourseResponse {
    #[serde(flatten)]
    pub course: CourseOutcomesResponse,
    pub elective: bool,
    pub substitutes: Vec<CourseResponse>,
    pub generic_substitutes: Vec<GenericCreditResponse>,
}

/// Credits of a category, without a named course
#[derive(Debug, Serialize, ToSchema)]
pub struct GenericCreditResponse {
    /// Short code such as "QS"
    pub credit_type: String,
    pub credit_type_label: String,
    pub credits: Option<f64>,
    pub elective: bool,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ProgramDistance {
    #[serde(flatten)]
    pub program: ProgramSummary,
    /// Shared courses over all courses of both programs, as a percentage
    pub similarity: f64,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ProgramDetailResponse {
    #[serde(flatten)]
    pub program: ProgramSummary,
    pub outcomes: Vec<OutcomeHeading>,
    pub courses: Vec<ProgramCourseResponse>,
    pub generic_courses: Vec<GenericCreditResponse>,
    pub distances: Vec<ProgramDistance>,
}

#[derive(Debug, Clone, Copy, Default, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl From<SortOrder> for DistanceOrder {
    fn from(order: SortOrder) -> Self {
        match order {
            SortOrder::Asc => Self::Ascending,
            SortOrder::Desc => Self::Descending,
        }
    }
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ProgramQueryParams {
    /// Order of the similarity listing, most similar first by default
    #[serde(default)]
    pub order: SortOrder,
}
