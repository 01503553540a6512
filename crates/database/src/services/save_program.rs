use crate::entities::{
    course_learning_outcomes, courses, degree_programs, dp_course_generic, dp_course_specific,
    dp_course_substitute_generic, dp_course_substitute_specific,
};
use models::{
    credits::Credits,
    program_data::{CourseObject, ImportPlan, ProgramLink, ProgramObject},
};
use sea_orm::{
    ActiveValue::{NotSet, Set},
    DatabaseConnection, DbErr, EntityTrait, TransactionTrait,
    sea_query::OnConflict,
};
use std::collections::HashMap;

/// Number of rows written by an import
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImportSummary {
    pub programs: usize,
    pub courses: usize,
    pub course_outcomes: usize,
    pub specific: usize,
    pub generic: usize,
    pub substitute_specific: usize,
    pub substitute_generic: usize,
}

pub struct SaveProgramService;

impl SaveProgramService {
    /// The number of rows to save in a single bulk insert
    const BATCH_SIZE: usize = 200;

    /// Saves an import plan in two passes.
    ///
    /// Pass one (programs, courses and outcome links) is committed before pass
    /// two (program requirements and substitutes) begins. A failure in pass two
    /// leaves pass one's rows in place.
    pub async fn save_plan(
        db: &DatabaseConnection,
        plan: &ImportPlan,
    ) -> Result<ImportSummary, DbErr> {
        log::info!(
            "Saving {} degree programs and {} courses",
            plan.programs.len(),
            plan.courses.len()
        );

        let program_ids = Self::save_catalog(db, plan).await?;
        log::info!("Degree programs, courses and course learning outcomes saved");

        let mut summary = Self::save_links(db, &plan.programs, &program_ids).await?;
        summary.programs = program_ids.len();
        summary.courses = plan.courses.len();
        summary.course_outcomes = plan.course_outcomes.len();

        log::info!("Course relationships saved: {summary:?}");
        Ok(summary)
    }

    /// Pass one: programs, courses and the outcomes each course satisfies
    async fn save_catalog(db: &DatabaseConnection, plan: &ImportPlan) -> Result<Vec<i32>, DbErr> {
        let txn = db.begin().await?;

        let mut program_ids = Vec::with_capacity(plan.programs.len());
        for program in &plan.programs {
            let result = degree_programs::Entity::insert(Self::program_to_active_model(program))
                .exec(&txn)
                .await?;
            program_ids.push(result.last_insert_id);
        }

        // Courses kept from an earlier import take the newest label and credits
        for batch in plan.courses.chunks(Self::BATCH_SIZE) {
            courses::Entity::insert_many(batch.iter().map(Self::course_to_active_model))
                .on_conflict(
                    OnConflict::column(courses::Column::Id)
                        .update_columns([
                            courses::Column::Label,
                            courses::Column::LowerCreditBound,
                            courses::Column::UpperCreditBound,
                        ])
                        .to_owned(),
                )
                .exec_without_returning(&txn)
                .await?;
        }

        for batch in plan.course_outcomes.chunks(Self::BATCH_SIZE) {
            let links = batch
                .iter()
                .map(|link| course_learning_outcomes::ActiveModel {
                    id: NotSet,
                    course_id: Set(link.course_id.clone()),
                    core_learning_outcome_id: Set(link.outcome_id),
                });

            course_learning_outcomes::Entity::insert_many(links)
                .on_conflict(
                    OnConflict::columns([
                        course_learning_outcomes::Column::CourseId,
                        course_learning_outcomes::Column::CoreLearningOutcomeId,
                    ])
                    .do_nothing()
                    .to_owned(),
                )
                .exec_without_returning(&txn)
                .await?;
        }

        txn.commit().await?;
        Ok(program_ids)
    }

    /// Pass two: what each program requires, and what may replace it
    async fn save_links(
        db: &DatabaseConnection,
        programs: &[ProgramObject],
        program_ids: &[i32],
    ) -> Result<ImportSummary, DbErr> {
        let txn = db.begin().await?;
        let mut summary = ImportSummary::default();

        for (program, &program_id) in programs.iter().zip(program_ids) {
            // Source line of each specific course -> its saved row id
            let mut specific_ids: HashMap<usize, i32> = HashMap::new();

            for link in &program.links {
                match link {
                    ProgramLink::Specific {
                        line,
                        course_id,
                        elective,
                    } => {
                        let result = dp_course_specific::Entity::insert(
                            dp_course_specific::ActiveModel {
                                id: NotSet,
                                degree_program_id: Set(program_id),
                                course_id: Set(course_id.clone()),
                                elective: Set(*elective),
                            },
                        )
                        .exec(&txn)
                        .await?;

                        specific_ids.insert(*line, result.last_insert_id);
                        summary.specific += 1;
                    }
                    ProgramLink::Generic {
                        credit_type,
                        credits,
                        elective,
                    } => {
                        dp_course_generic::Entity::insert(dp_course_generic::ActiveModel {
                            id: NotSet,
                            degree_program_id: Set(program_id),
                            credit_type_id: Set(*credit_type),
                            credits: Set(*credits),
                            elective: Set(*elective),
                        })
                        .exec(&txn)
                        .await?;

                        summary.generic += 1;
                    }
                    ProgramLink::SubstituteSpecific {
                        parent_line,
                        course_id,
                    } => {
                        let parent_id = Self::parent_id(&specific_ids, *parent_line, program)?;
                        dp_course_substitute_specific::Entity::insert(
                            dp_course_substitute_specific::ActiveModel {
                                id: NotSet,
                                parent_id: Set(parent_id),
                                course_id: Set(course_id.clone()),
                            },
                        )
                        .exec(&txn)
                        .await?;

                        summary.substitute_specific += 1;
                    }
                    ProgramLink::SubstituteGeneric {
                        parent_line,
                        credit_type,
                        credits,
                        elective,
                    } => {
                        let parent_id = Self::parent_id(&specific_ids, *parent_line, program)?;
                        dp_course_substitute_generic::Entity::insert(
                            dp_course_substitute_generic::ActiveModel {
                                id: NotSet,
                                parent_id: Set(parent_id),
                                credit_type_id: Set(*credit_type),
                                credits: Set(*credits),
                                elective: Set(*elective),
                            },
                        )
                        .exec(&txn)
                        .await?;

                        summary.substitute_generic += 1;
                    }
                }
            }

            log::debug!("Saved {} requirements for {}", program.links.len(), program.label);
        }

        txn.commit().await?;
        Ok(summary)
    }

    /// Looks up the saved row a substitute attaches to
    fn parent_id(
        specific_ids: &HashMap<usize, i32>,
        parent_line: usize,
        program: &ProgramObject,
    ) -> Result<i32, DbErr> {
        specific_ids.get(&parent_line).copied().ok_or_else(|| {
            DbErr::RecordNotFound(format!(
                "no program course saved from line {parent_line} of '{}'",
                program.label
            ))
        })
    }

    fn program_to_active_model(program: &ProgramObject) -> degree_programs::ActiveModel {
        degree_programs::ActiveModel {
            id: NotSet,
            label: Set(program.label.clone()),
            credits: Set(program.credits),
            elective_credits: Set(program.elective_credits),
        }
    }

    fn course_to_active_model(course: &CourseObject) -> courses::ActiveModel {
        let (lower, upper) = Credits::bounds(course.credits);

        courses::ActiveModel {
            id: Set(course.id.clone()),
            label: Set(course.label.clone()),
            lower_credit_bound: Set(lower),
            upper_credit_bound: Set(upper),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::{seed::SeedService, test_support::migrated_db};
    use models::{credit_type::CreditTypeCode, program_data::CourseOutcome};
    use sea_orm::PaginatorTrait;

    fn course(id: &str, credits: Option<Credits>) -> CourseObject {
        CourseObject {
            id: id.to_string(),
            label: format!("{id} label"),
            credits,
        }
    }

    fn sample_plan() -> ImportPlan {
        ImportPlan {
            programs: vec![ProgramObject {
                label: "ATA Test Program".to_string(),
                credits: Some(90.0),
                elective_credits: None,
                links: vec![
                    ProgramLink::Specific {
                        line: 3,
                        course_id: "MATH 110".to_string(),
                        elective: false,
                    },
                    ProgramLink::SubstituteSpecific {
                        parent_line: 3,
                        course_id: "MATH 120".to_string(),
                    },
                    ProgramLink::SubstituteGeneric {
                        parent_line: 3,
                        credit_type: CreditTypeCode::QuantitativeSkills,
                        credits: Some(5.0),
                        elective: false,
                    },
                    ProgramLink::Generic {
                        credit_type: CreditTypeCode::Elective,
                        credits: Some(10.0),
                        elective: true,
                    },
                ],
            }],
            courses: vec![
                course("MATH 110", Some(Credits::Range(5.0, 10.0))),
                course("MATH 120", None),
            ],
            course_outcomes: vec![
                CourseOutcome {
                    course_id: "MATH 110".to_string(),
                    outcome_id: 1,
                },
                CourseOutcome {
                    course_id: "MATH 110".to_string(),
                    outcome_id: 3,
                },
            ],
        }
    }

    #[tokio::test]
    async fn test_save_plan_writes_both_passes() {
        let db = migrated_db().await;
        SeedService::initialize(&db).await.unwrap();

        let summary = SaveProgramService::save_plan(&db, &sample_plan())
            .await
            .unwrap();
        assert_eq!(
            summary,
            ImportSummary {
                programs: 1,
                courses: 2,
                course_outcomes: 2,
                specific: 1,
                generic: 1,
                substitute_specific: 1,
                substitute_generic: 1,
            }
        );

        let math = courses::Entity::find_by_id("MATH 110".to_string())
            .one(&db)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(math.lower_credit_bound, Some(5.0));
        assert_eq!(math.upper_credit_bound, Some(10.0));

        let parent = dp_course_specific::Entity::find().one(&db).await.unwrap().unwrap();
        let substitute = dp_course_substitute_specific::Entity::find()
            .one(&db)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(substitute.parent_id, parent.id);
        assert_eq!(substitute.course_id, "MATH 120");

        let generic = dp_course_generic::Entity::find().one(&db).await.unwrap().unwrap();
        assert_eq!(generic.credit_type_id, CreditTypeCode::Elective);
        assert!(generic.elective);
    }

    #[tokio::test]
    async fn test_reimport_keeps_outcome_links_unique() {
        let db = migrated_db().await;
        SeedService::initialize(&db).await.unwrap();

        SaveProgramService::save_plan(&db, &sample_plan()).await.unwrap();
        SaveProgramService::save_plan(&db, &sample_plan()).await.unwrap();

        let links = course_learning_outcomes::Entity::find().count(&db).await.unwrap();
        let courses = courses::Entity::find().count(&db).await.unwrap();
        let programs = degree_programs::Entity::find().count(&db).await.unwrap();
        assert_eq!(links, 2);
        assert_eq!(courses, 2);
        assert_eq!(programs, 2);
    }

    #[tokio::test]
    async fn test_missing_parent_fails_after_pass_one() {
        let db = migrated_db().await;
        SeedService::initialize(&db).await.unwrap();

        let mut plan = sample_plan();
        plan.programs[0].links.retain(|link| link.parent_line().is_some());

        let result = SaveProgramService::save_plan(&db, &plan).await;
        assert!(matches!(result, Err(DbErr::RecordNotFound(_))));

        // Pass one was committed, pass two was rolled back
        let programs = degree_programs::Entity::find().count(&db).await.unwrap();
        let substitutes = dp_course_substitute_specific::Entity::find()
            .count(&db)
            .await
            .unwrap();
        assert_eq!(programs, 1);
        assert_eq!(substitutes, 0);
    }
}
