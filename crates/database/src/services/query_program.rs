use crate::{
    entities::{
        core_learning_outcomes, courses, degree_programs, dp_course_generic, dp_course_specific,
        dp_course_substitute_generic, dp_course_substitute_specific,
    },
    services::query_course::QueryCourseService,
};
use models::similarity::overlap_percentage;
use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder, QuerySelect,
};
use std::collections::{HashMap, HashSet};

/// Sort order for program similarity listings
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DistanceOrder {
    Ascending,
    /// Most similar programs first
    #[default]
    Descending,
}

/// A named course required by a program, with what may replace it
#[derive(Debug, Clone)]
pub struct ProgramCourse {
    pub course: courses::Model,
    pub elective: bool,
    pub outcomes: Vec<bool>,
    pub substitutes: Vec<courses::Model>,
    pub generic_substitutes: Vec<dp_course_substitute_generic::Model>,
}

#[derive(Debug, Clone)]
pub struct ProgramDetail {
    pub program: degree_programs::Model,
    pub outcomes: Vec<core_learning_outcomes::Model>,
    pub courses: Vec<ProgramCourse>,
    pub generic_courses: Vec<dp_course_generic::Model>,
}

pub struct QueryProgramService;

impl QueryProgramService {
    /// Get every degree program, ordered by label
    pub async fn get_programs(
        db: &DatabaseConnection,
    ) -> Result<Vec<degree_programs::Model>, DbErr> {
        degree_programs::Entity::find()
            .order_by_asc(degree_programs::Column::Label)
            .all(db)
            .await
    }

    /// Get a single program with its courses, substitutes and generic credits
    pub async fn get_program_by_id(
        db: &DatabaseConnection,
        program_id: i32,
    ) -> Result<Option<ProgramDetail>, DbErr> {
        let program = match degree_programs::Entity::find_by_id(program_id).one(db).await? {
            Some(program) => program,
            None => return Ok(None),
        };

        // Rows were saved in spreadsheet order, so id order is source order
        let specifics = dp_course_specific::Entity::find()
            .filter(dp_course_specific::Column::DegreeProgramId.eq(program_id))
            .order_by_asc(dp_course_specific::Column::Id)
            .all(db)
            .await?;

        let generic_courses = dp_course_generic::Entity::find()
            .filter(dp_course_generic::Column::DegreeProgramId.eq(program_id))
            .order_by_asc(dp_course_generic::Column::Id)
            .all(db)
            .await?;

        let specific_ids: Vec<i32> = specifics.iter().map(|s| s.id).collect();

        // Batch fetch all substitutes for all program courses
        let substitutes = dp_course_substitute_specific::Entity::find()
            .filter(dp_course_substitute_specific::Column::ParentId.is_in(specific_ids.clone()))
            .order_by_asc(dp_course_substitute_specific::Column::Id)
            .all(db)
            .await?;

        let generic_substitutes = dp_course_substitute_generic::Entity::find()
            .filter(dp_course_substitute_generic::Column::ParentId.is_in(specific_ids))
            .order_by_asc(dp_course_substitute_generic::Column::Id)
            .all(db)
            .await?;

        let course_ids: Vec<String> = specifics
            .iter()
            .map(|s| s.course_id.clone())
            .chain(substitutes.iter().map(|s| s.course_id.clone()))
            .collect::<HashSet<_>>()
            .into_iter()
            .collect();

        let courses_by_id: HashMap<String, courses::Model> = courses::Entity::find()
            .filter(courses::Column::Id.is_in(course_ids.clone()))
            .all(db)
            .await?
            .into_iter()
            .map(|course| (course.id.clone(), course))
            .collect();

        let matrix = QueryCourseService::get_outcome_matrix(db, Some(course_ids)).await?;

        // Build lookup maps
        let mut substitutes_by_parent: HashMap<i32, Vec<courses::Model>> = HashMap::new();
        for substitute in substitutes {
            if let Some(course) = courses_by_id.get(&substitute.course_id) {
                substitutes_by_parent
                    .entry(substitute.parent_id)
                    .or_default()
                    .push(course.clone());
            }
        }

        let mut generic_by_parent: HashMap<i32, Vec<dp_course_substitute_generic::Model>> =
            HashMap::new();
        for substitute in generic_substitutes {
            generic_by_parent
                .entry(substitute.parent_id)
                .or_default()
                .push(substitute);
        }

        // Build the final result structure
        let mut program_courses = Vec::new();
        for specific in specifics {
            let Some(course) = courses_by_id.get(&specific.course_id) else {
                continue;
            };

            program_courses.push(ProgramCourse {
                outcomes: matrix.flags(&course.id),
                course: course.clone(),
                elective: specific.elective,
                substitutes: substitutes_by_parent.remove(&specific.id).unwrap_or_default(),
                generic_substitutes: generic_by_parent.remove(&specific.id).unwrap_or_default(),
            });
        }

        Ok(Some(ProgramDetail {
            program,
            outcomes: matrix.outcomes,
            courses: program_courses,
            generic_courses,
        }))
    }

    /// Compare a program's courses against every other program.
    ///
    /// Returns `None` if the reference program does not exist. The reference
    /// program itself is never part of the result.
    pub async fn get_program_distances(
        db: &DatabaseConnection,
        program_id: i32,
        order: DistanceOrder,
    ) -> Result<Option<Vec<(degree_programs::Model, f64)>>, DbErr> {
        let programs = degree_programs::Entity::find().all(db).await?;
        if !programs.iter().any(|program| program.id == program_id) {
            return Ok(None);
        }

        let memberships = dp_course_specific::Entity::find()
            .select_only()
            .column(dp_course_specific::Column::DegreeProgramId)
            .column(dp_course_specific::Column::CourseId)
            .into_tuple::<(i32, String)>()
            .all(db)
            .await?;

        let mut courses_by_program: HashMap<i32, HashSet<String>> = HashMap::new();
        for (degree_program_id, course_id) in memberships {
            courses_by_program
                .entry(degree_program_id)
                .or_default()
                .insert(course_id);
        }

        let empty = HashSet::new();
        let reference = courses_by_program.get(&program_id).unwrap_or(&empty);

        let mut distances: Vec<(degree_programs::Model, f64)> = programs
            .into_iter()
            .filter(|program| program.id != program_id)
            .map(|program| {
                let other = courses_by_program.get(&program.id).unwrap_or(&empty);
                let ratio = overlap_percentage(reference, other);
                (program, ratio)
            })
            .collect();

        distances.sort_by(|(a, a_ratio), (b, b_ratio)| {
            let by_ratio = match order {
                DistanceOrder::Ascending => a_ratio.total_cmp(b_ratio),
                DistanceOrder::Descending => b_ratio.total_cmp(a_ratio),
            };
            by_ratio.then_with(|| a.label.cmp(&b.label))
        });

        Ok(Some(distances))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::test_support::populated_db;
    use models::credit_type::CreditTypeCode;

    async fn program_id(db: &DatabaseConnection, label: &str) -> i32 {
        degree_programs::Entity::find()
            .filter(degree_programs::Column::Label.eq(label))
            .one(db)
            .await
            .unwrap()
            .unwrap()
            .id
    }

    #[tokio::test]
    async fn test_get_programs_ordered_by_label() {
        let db = populated_db().await;

        let labels: Vec<String> = QueryProgramService::get_programs(&db)
            .await
            .unwrap()
            .into_iter()
            .map(|program| program.label)
            .collect();
        assert_eq!(labels, ["ATA Accounting", "ATA Business", "ATA Welding"]);
    }

    #[tokio::test]
    async fn test_get_program_by_id() {
        let db = populated_db().await;
        let id = program_id(&db, "ATA Accounting").await;

        let detail = QueryProgramService::get_program_by_id(&db, id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(detail.program.elective_credits, Some(10.0));
        assert_eq!(detail.outcomes.len(), 7);

        let course_ids: Vec<&str> = detail
            .courses
            .iter()
            .map(|c| c.course.id.as_str())
            .collect();
        assert_eq!(course_ids, ["ACCT 201", "BUS& 101", "ENGL& 101"]);

        let business = &detail.courses[1];
        assert_eq!(business.substitutes.len(), 1);
        assert_eq!(business.substitutes[0].id, "MATH 107");
        assert_eq!(business.outcomes[1..3], [true, true]);

        assert_eq!(detail.generic_courses.len(), 1);
        assert_eq!(
            detail.generic_courses[0].credit_type_id,
            CreditTypeCode::QuantitativeSkills
        );
    }

    #[tokio::test]
    async fn test_get_missing_program() {
        let db = populated_db().await;

        assert!(
            QueryProgramService::get_program_by_id(&db, 9999)
                .await
                .unwrap()
                .is_none()
        );
        assert!(
            QueryProgramService::get_program_distances(&db, 9999, DistanceOrder::Ascending)
                .await
                .unwrap()
                .is_none()
        );
    }

    #[tokio::test]
    async fn test_program_distances() {
        let db = populated_db().await;
        let id = program_id(&db, "ATA Accounting").await;

        let distances =
            QueryProgramService::get_program_distances(&db, id, DistanceOrder::Descending)
                .await
                .unwrap()
                .unwrap();

        // The reference program is excluded
        assert_eq!(distances.len(), 2);
        assert_eq!(distances[0].0.label, "ATA Business");
        assert_eq!(distances[0].1, 50.0);
        assert_eq!(distances[1].0.label, "ATA Welding");
        assert_eq!(distances[1].1, 0.0);

        let ascending =
            QueryProgramService::get_program_distances(&db, id, DistanceOrder::Ascending)
                .await
                .unwrap()
                .unwrap();
        assert_eq!(ascending[0].0.label, "ATA Welding");
    }
}
