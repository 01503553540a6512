use crate::dtos::program::ProgramSummary;
use database::entities::core_learning_outcomes;
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema)]
pub struct OutcomeResponse {
    pub id: i32,
    pub label: String,
    pub description: String,
    /// Number of courses satisfying the outcome
    pub course_count: u64,
}

impl OutcomeResponse {
    pub fn new(outcome: core_learning_outcomes::Model, course_count: u64) -> Self {
        Self {
            id: outcome.id,
            label: outcome.label,
            description: outcome.description,
            course_count,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct OutcomeDetailResponse {
    #[serde(flatten)]
    pub outcome: OutcomeResponse,
    pub programs: Vec<ProgramUsage>,
}

/// How many of a program's required courses satisfy the outcome
#[derive(Debug, Serialize, ToSchema)]
pub struct ProgramUsage {
    #[serde(flatten)]
    pub program: ProgramSummary,
    pub course_count: u64,
}
