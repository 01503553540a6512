use crate::entities::{
    core_learning_outcomes, course_learning_outcomes, degree_programs, dp_course_specific,
};
use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder, QuerySelect,
};
use std::collections::HashMap;

/// Where a single outcome is satisfied across the catalog
#[derive(Debug, Clone)]
pub struct OutcomeUsage {
    pub outcome: core_learning_outcomes::Model,
    /// Number of distinct courses satisfying the outcome
    pub course_count: u64,
    /// Programs requiring at least one such course, with how many they require
    pub programs: Vec<(degree_programs::Model, u64)>,
}

pub struct QueryOutcomeService;

impl QueryOutcomeService {
    /// Get every outcome with the number of courses satisfying it
    pub async fn get_outcomes(
        db: &DatabaseConnection,
    ) -> Result<Vec<(core_learning_outcomes::Model, u64)>, DbErr> {
        let outcomes = core_learning_outcomes::Entity::find()
            .order_by_asc(core_learning_outcomes::Column::Id)
            .all(db)
            .await?;

        let counts: HashMap<i32, i64> = course_learning_outcomes::Entity::find()
            .select_only()
            .column(course_learning_outcomes::Column::CoreLearningOutcomeId)
            .column_as(course_learning_outcomes::Column::CourseId.count(), "count")
            .group_by(course_learning_outcomes::Column::CoreLearningOutcomeId)
            .into_tuple::<(i32, i64)>()
            .all(db)
            .await?
            .into_iter()
            .collect();

        Ok(outcomes
            .into_iter()
            .map(|outcome| {
                let count = counts.get(&outcome.id).copied().unwrap_or(0);
                (outcome, count.max(0) as u64)
            })
            .collect())
    }

    /// Get an outcome with its course count and per-program usage.
    ///
    /// Programs are ordered by usage, most first, then by label.
    pub async fn get_outcome_by_id(
        db: &DatabaseConnection,
        outcome_id: i32,
    ) -> Result<Option<OutcomeUsage>, DbErr> {
        let outcome = match core_learning_outcomes::Entity::find_by_id(outcome_id)
            .one(db)
            .await?
        {
            Some(outcome) => outcome,
            None => return Ok(None),
        };

        let course_ids: Vec<String> = course_learning_outcomes::Entity::find()
            .select_only()
            .column(course_learning_outcomes::Column::CourseId)
            .filter(course_learning_outcomes::Column::CoreLearningOutcomeId.eq(outcome_id))
            .distinct()
            .into_tuple::<String>()
            .all(db)
            .await?;

        let memberships = dp_course_specific::Entity::find()
            .select_only()
            .column(dp_course_specific::Column::DegreeProgramId)
            .filter(dp_course_specific::Column::CourseId.is_in(course_ids.clone()))
            .into_tuple::<i32>()
            .all(db)
            .await?;

        let mut usage: HashMap<i32, u64> = HashMap::new();
        for degree_program_id in memberships {
            *usage.entry(degree_program_id).or_default() += 1;
        }

        let mut programs: Vec<(degree_programs::Model, u64)> = degree_programs::Entity::find()
            .filter(degree_programs::Column::Id.is_in(usage.keys().copied()))
            .all(db)
            .await?
            .into_iter()
            .map(|program| {
                let count = usage.get(&program.id).copied().unwrap_or(0);
                (program, count)
            })
            .collect();

        programs.sort_by(|(a, a_count), (b, b_count)| {
            b_count.cmp(a_count).then_with(|| a.label.cmp(&b.label))
        });

        Ok(Some(OutcomeUsage {
            outcome,
            course_count: course_ids.len() as u64,
            programs,
        }))
    }
}
