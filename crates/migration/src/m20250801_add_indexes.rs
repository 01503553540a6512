use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // A course satisfies a given outcome at most once
        manager
            .create_index(
                Index::create()
                    .name("idx_course_learning_outcomes_course_outcome")
                    .table(CourseLearningOutcomes::Table)
                    .col(CourseLearningOutcomes::CourseId)
                    .col(CourseLearningOutcomes::CoreLearningOutcomeId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // Index on core_learning_outcome_id for the outcome detail counts
        manager
            .create_index(
                Index::create()
                    .name("idx_course_learning_outcomes_outcome_id")
                    .table(CourseLearningOutcomes::Table)
                    .col(CourseLearningOutcomes::CoreLearningOutcomeId)
                    .to_owned(),
            )
            .await?;

        // Indexes on degree_program_id for faster program detail lookups
        manager
            .create_index(
                Index::create()
                    .name("idx_dp_course_specific_degree_program_id")
                    .table(DpCourseSpecific::Table)
                    .col(DpCourseSpecific::DegreeProgramId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_dp_course_generic_degree_program_id")
                    .table(DpCourseGeneric::Table)
                    .col(DpCourseGeneric::DegreeProgramId)
                    .to_owned(),
            )
            .await?;

        // Indexes on parent_id for faster substitute lookups
        manager
            .create_index(
                Index::create()
                    .name("idx_dp_course_substitute_specific_parent_id")
                    .table(DpCourseSubstituteSpecific::Table)
                    .col(DpCourseSubstituteSpecific::ParentId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_dp_course_substitute_generic_parent_id")
                    .table(DpCourseSubstituteGeneric::Table)
                    .col(DpCourseSubstituteGeneric::ParentId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Drop indexes in reverse order
        manager
            .drop_index(
                Index::drop()
                    .name("idx_dp_course_substitute_generic_parent_id")
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("idx_dp_course_substitute_specific_parent_id")
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("idx_dp_course_generic_degree_program_id")
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("idx_dp_course_specific_degree_program_id")
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("idx_course_learning_outcomes_outcome_id")
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("idx_course_learning_outcomes_course_outcome")
                    .to_owned(),
            )
            .await?;

        Ok(())
    }
}

#[derive(Iden)]
enum CourseLearningOutcomes {
    Table,
    CourseId,
    CoreLearningOutcomeId,
}

#[derive(Iden)]
enum DpCourseSpecific {
    Table,
    DegreeProgramId,
}

#[derive(Iden)]
enum DpCourseGeneric {
    Table,
    DegreeProgramId,
}

#[derive(Iden)]
enum DpCourseSubstituteSpecific {
    Table,
    ParentId,
}

#[derive(Iden)]
enum DpCourseSubstituteGeneric {
    Table,
    ParentId,
}
