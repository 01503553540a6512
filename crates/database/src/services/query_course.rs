use crate::entities::{core_learning_outcomes, course_learning_outcomes, courses};
use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder, QuerySelect,
};
use std::collections::{HashMap, HashSet};

/// Which outcomes each course satisfies, alongside every known outcome
pub struct OutcomeMatrix {
    pub outcomes: Vec<core_learning_outcomes::Model>,
    by_course: HashMap<String, HashSet<i32>>,
}

impl OutcomeMatrix {
    /// One flag per outcome, in outcome id order
    pub fn flags(&self, course_id: &str) -> Vec<bool> {
        let satisfied = self.by_course.get(course_id);
        self.outcomes
            .iter()
            .map(|outcome| satisfied.is_some_and(|ids| ids.contains(&outcome.id)))
            .collect()
    }
}

pub struct QueryCourseService;

impl QueryCourseService {
    /// Get every course with its outcome flags (for list view)
    pub async fn get_courses(
        db: &DatabaseConnection,
    ) -> Result<(Vec<core_learning_outcomes::Model>, Vec<(courses::Model, Vec<bool>)>), DbErr>
    {
        let courses = courses::Entity::find()
            .order_by_asc(courses::Column::Id)
            .all(db)
            .await?;

        let matrix = Self::get_outcome_matrix(db, None).await?;
        let rows = courses
            .into_iter()
            .map(|course| {
                let flags = matrix.flags(&course.id);
                (course, flags)
            })
            .collect();

        Ok((matrix.outcomes, rows))
    }

    /// Build the outcome matrix, optionally restricted to some courses
    pub async fn get_outcome_matrix(
        db: &DatabaseConnection,
        course_ids: Option<Vec<String>>,
    ) -> Result<OutcomeMatrix, DbErr> {
        let outcomes = core_learning_outcomes::Entity::find()
            .order_by_asc(core_learning_outcomes::Column::Id)
            .all(db)
            .await?;

        let mut query = course_learning_outcomes::Entity::find()
            .select_only()
            .column(course_learning_outcomes::Column::CourseId)
            .column(course_learning_outcomes::Column::CoreLearningOutcomeId);
        if let Some(course_ids) = course_ids {
            query = query.filter(course_learning_outcomes::Column::CourseId.is_in(course_ids));
        }

        let links = query.into_tuple::<(String, i32)>().all(db).await?;

        let mut by_course: HashMap<String, HashSet<i32>> = HashMap::new();
        for (course_id, outcome_id) in links {
            by_course.entry(course_id).or_default().insert(outcome_id);
        }

        Ok(OutcomeMatrix {
            outcomes,
            by_course,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::test_support::populated_db;

    #[tokio::test]
    async fn test_get_courses_flags_outcomes() {
        let db = populated_db().await;

        let (outcomes, rows) = QueryCourseService::get_courses(&db).await.unwrap();
        assert_eq!(outcomes.len(), 7);
        assert_eq!(rows.len(), 5);

        let (course, flags) = rows
            .iter()
            .find(|(course, _)| course.id == "BUS& 101")
            .unwrap();
        assert_eq!(course.lower_credit_bound, Some(5.0));
        assert_eq!(flags, &vec![false, true, true, false, false, false, false]);
    }

    #[tokio::test]
    async fn test_outcome_matrix_restricted_to_courses() {
        let db = populated_db().await;

        let matrix = QueryCourseService::get_outcome_matrix(&db, Some(vec!["ACCT 201".into()]))
            .await
            .unwrap();
        assert!(matrix.flags("ACCT 201")[1]);
        assert!(matrix.flags("BUS& 101").iter().all(|flag| !flag));
        assert!(matrix.flags("HIST 146").iter().all(|flag| !flag));
    }
}
