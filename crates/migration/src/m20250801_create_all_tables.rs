use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Create reference tables seeded by the initialization pass
        manager
            .create_table(
                Table::create()
                    .table(CoreLearningOutcomes::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(CoreLearningOutcomes::Id)
                            .integer()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(CoreLearningOutcomes::Label).text().not_null())
                    .col(
                        ColumnDef::new(CoreLearningOutcomes::Description)
                            .text()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(CreditTypes::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(CreditTypes::LabelShort)
                            .string_len(5)
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(CreditTypes::Label).text().not_null())
                    .to_owned(),
            )
            .await?;

        // Create degree programs table
        manager
            .create_table(
                Table::create()
                    .table(DegreePrograms::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(DegreePrograms::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(DegreePrograms::Label).text().not_null())
                    .col(ColumnDef::new(DegreePrograms::Credits).double())
                    .col(ColumnDef::new(DegreePrograms::ElectiveCredits).double())
                    .to_owned(),
            )
            .await?;

        // Create courses table, keyed by department and number (e.g. "MATH 110")
        manager
            .create_table(
                Table::create()
                    .table(Courses::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Courses::Id).string().not_null().primary_key())
                    .col(ColumnDef::new(Courses::Label).text().not_null())
                    .col(ColumnDef::new(Courses::LowerCreditBound).double())
                    .col(ColumnDef::new(Courses::UpperCreditBound).double())
                    .to_owned(),
            )
            .await?;

        // Create course_learning_outcomes junction table (many-to-many)
        manager
            .create_table(
                Table::create()
                    .table(CourseLearningOutcomes::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(CourseLearningOutcomes::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(CourseLearningOutcomes::CourseId)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(CourseLearningOutcomes::CoreLearningOutcomeId)
                            .integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-course_learning_outcomes-course_id")
                            .from(
                                CourseLearningOutcomes::Table,
                                CourseLearningOutcomes::CourseId,
                            )
                            .to(Courses::Table, Courses::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-course_learning_outcomes-core_learning_outcome_id")
                            .from(
                                CourseLearningOutcomes::Table,
                                CourseLearningOutcomes::CoreLearningOutcomeId,
                            )
                            .to(CoreLearningOutcomes::Table, CoreLearningOutcomes::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        // Create dp_course_specific table: a named course required by a program
        manager
            .create_table(
                Table::create()
                    .table(DpCourseSpecific::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(DpCourseSpecific::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(DpCourseSpecific::DegreeProgramId)
                            .integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(DpCourseSpecific::CourseId).string().not_null())
                    .col(
                        ColumnDef::new(DpCourseSpecific::Elective)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-dp_course_specific-degree_program_id")
                            .from(DpCourseSpecific::Table, DpCourseSpecific::DegreeProgramId)
                            .to(DegreePrograms::Table, DegreePrograms::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-dp_course_specific-course_id")
                            .from(DpCourseSpecific::Table, DpCourseSpecific::CourseId)
                            .to(Courses::Table, Courses::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Create dp_course_generic table: credits of a category required by a program
        manager
            .create_table(
                Table::create()
                    .table(DpCourseGeneric::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(DpCourseGeneric::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(DpCourseGeneric::DegreeProgramId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(DpCourseGeneric::CreditTypeId)
                            .string_len(5)
                            .not_null(),
                    )
                    .col(ColumnDef::new(DpCourseGeneric::Credits).double())
                    .col(
                        ColumnDef::new(DpCourseGeneric::Elective)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-dp_course_generic-degree_program_id")
                            .from(DpCourseGeneric::Table, DpCourseGeneric::DegreeProgramId)
                            .to(DegreePrograms::Table, DegreePrograms::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-dp_course_generic-credit_type_id")
                            .from(DpCourseGeneric::Table, DpCourseGeneric::CreditTypeId)
                            .to(CreditTypes::Table, CreditTypes::LabelShort)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        // Create substitute tables, both hanging off a dp_course_specific parent
        manager
            .create_table(
                Table::create()
                    .table(DpCourseSubstituteSpecific::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(DpCourseSubstituteSpecific::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(DpCourseSubstituteSpecific::ParentId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(DpCourseSubstituteSpecific::CourseId)
                            .string()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-dp_course_substitute_specific-parent_id")
                            .from(
                                DpCourseSubstituteSpecific::Table,
                                DpCourseSubstituteSpecific::ParentId,
                            )
                            .to(DpCourseSpecific::Table, DpCourseSpecific::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-dp_course_substitute_specific-course_id")
                            .from(
                                DpCourseSubstituteSpecific::Table,
                                DpCourseSubstituteSpecific::CourseId,
                            )
                            .to(Courses::Table, Courses::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(DpCourseSubstituteGeneric::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(DpCourseSubstituteGeneric::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(DpCourseSubstituteGeneric::ParentId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(DpCourseSubstituteGeneric::CreditTypeId)
                            .string_len(5)
                            .not_null(),
                    )
                    .col(ColumnDef::new(DpCourseSubstituteGeneric::Credits).double())
                    .col(
                        ColumnDef::new(DpCourseSubstituteGeneric::Elective)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-dp_course_substitute_generic-parent_id")
                            .from(
                                DpCourseSubstituteGeneric::Table,
                                DpCourseSubstituteGeneric::ParentId,
                            )
                            .to(DpCourseSpecific::Table, DpCourseSpecific::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-dp_course_substitute_generic-credit_type_id")
                            .from(
                                DpCourseSubstituteGeneric::Table,
                                DpCourseSubstituteGeneric::CreditTypeId,
                            )
                            .to(CreditTypes::Table, CreditTypes::LabelShort)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Drop tables in reverse order due to foreign key constraints
        manager
            .drop_table(Table::drop().table(DpCourseSubstituteGeneric::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(DpCourseSubstituteSpecific::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(DpCourseGeneric::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(DpCourseSpecific::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(CourseLearningOutcomes::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Courses::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(DegreePrograms::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(CreditTypes::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(CoreLearningOutcomes::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(Iden)]
enum CoreLearningOutcomes {
    Table,
    Id,
    Label,
    Description,
}

#[derive(Iden)]
enum CreditTypes {
    Table,
    LabelShort,
    Label,
}

#[derive(Iden)]
enum DegreePrograms {
    Table,
    Id,
    Label,
    Credits,
    ElectiveCredits,
}

#[derive(Iden)]
enum Courses {
    Table,
    Id,
    Label,
    LowerCreditBound,
    UpperCreditBound,
}

#[derive(Iden)]
enum CourseLearningOutcomes {
    Table,
    Id,
    CourseId,
    CoreLearningOutcomeId,
}

#[derive(Iden)]
enum DpCourseSpecific {
    Table,
    Id,
    DegreeProgramId,
    CourseId,
    Elective,
}

#[derive(Iden)]
enum DpCourseGeneric {
    Table,
    Id,
    DegreeProgramId,
    CreditTypeId,
    Credits,
    Elective,
}

#[derive(Iden)]
enum DpCourseSubstituteSpecific {
    Table,
    Id,
    ParentId,
    CourseId,
}

#[derive(Iden)]
enum DpCourseSubstituteGeneric {
    Table,
    Id,
    ParentId,
    CreditTypeId,
    Credits,
    Elective,
}
