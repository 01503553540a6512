pub mod catalog;
pub mod course_row;
pub mod error;
pub mod links;
pub mod plan;
pub mod rows;
pub mod segment;

use crate::{
    catalog::DuplicateOutcomePolicy,
    error::{ImportError, Result},
    plan::build_plan,
    segment::{read_rows, segment},
};
use database::services::{
    save_program::{ImportSummary, SaveProgramService},
    seed::SeedService,
};
use sea_orm::DatabaseConnection;
use std::{fs::File, io::Read, path::Path};

/// Imports the degree program sheet at `path`
pub async fn run_import(
    db: &DatabaseConnection,
    path: &Path,
    policy: DuplicateOutcomePolicy,
) -> Result<ImportSummary> {
    log::info!("Importing degree programs from {}", path.display());
    let file = File::open(path)?;
    import_reader(db, file, policy).await
}

/// Imports a degree program sheet from any reader.
///
/// The sheet is fully parsed and checked before anything is written. Once
/// writing starts, programs, courses and outcome links are committed before
/// the program requirements, so a failure in the second pass leaves the first
/// pass in place.
pub async fn import_reader<R: Read>(
    db: &DatabaseConnection,
    reader: R,
    policy: DuplicateOutcomePolicy,
) -> Result<ImportSummary> {
    if !SeedService::has_reference_data(db).await? {
        return Err(ImportError::MissingPrerequisite);
    }
    let known_outcomes = SeedService::outcome_ids(db).await?;

    let segmentation = segment(read_rows(reader)?)?;
    let plan = build_plan(&segmentation, &known_outcomes, policy)?;

    Ok(SaveProgramService::save_plan(db, &plan).await?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use database::{
        db::connect,
        entities::{
            course_learning_outcomes, courses, degree_programs, dp_course_generic,
            dp_course_specific, dp_course_substitute_generic, dp_course_substitute_specific,
        },
        services::teardown::TeardownService,
    };
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{EntityTrait, PaginatorTrait, QueryOrder};

    async fn seeded_db() -> DatabaseConnection {
        let db = connect("sqlite::memory:").await.unwrap();
        Migrator::up(&db, None).await.unwrap();
        SeedService::initialize(&db).await.unwrap();
        db
    }

    async fn import(db: &DatabaseConnection, sheet: &str) -> Result<ImportSummary> {
        import_reader(db, sheet.as_bytes(), DuplicateOutcomePolicy::Skip).await
    }

    #[tokio::test]
    async fn test_import_single_program() {
        let db = seeded_db().await;

        import(
            &db,
            "\
Degree Programs,,,
ATA Test Program,90,N.A.
MATH 110,Introduction to Linear Algebra,5-10,\"1,3\"
",
        )
        .await
        .unwrap();

        let programs = degree_programs::Entity::find().all(&db).await.unwrap();
        assert_eq!(programs.len(), 1);
        assert_eq!(programs[0].label, "ATA Test Program");
        assert_eq!(programs[0].credits, Some(90.0));
        assert_eq!(programs[0].elective_credits, None);

        let courses = courses::Entity::find().all(&db).await.unwrap();
        assert_eq!(courses.len(), 1);
        assert_eq!(courses[0].id, "MATH 110");
        assert_eq!(courses[0].lower_credit_bound, Some(5.0));
        assert_eq!(courses[0].upper_credit_bound, Some(10.0));

        let outcomes: Vec<i32> = course_learning_outcomes::Entity::find()
            .order_by_asc(course_learning_outcomes::Column::CoreLearningOutcomeId)
            .all(&db)
            .await
            .unwrap()
            .into_iter()
            .map(|link| link.core_learning_outcome_id)
            .collect();
        assert_eq!(outcomes, [1, 3]);

        let specific = dp_course_specific::Entity::find().all(&db).await.unwrap();
        assert_eq!(specific.len(), 1);
        assert_eq!(specific[0].degree_program_id, programs[0].id);
    }

    #[tokio::test]
    async fn test_import_substitute_chain() {
        let db = seeded_db().await;

        let summary = import(
            &db,
            "\
Degree Programs,,,
ATA Business,90,10
BUS& 101,Introduction to Business or,5,2
MATH 107,Math in Society,5,2
Generic Humanities,,5,,x
",
        )
        .await
        .unwrap();

        assert_eq!(summary.specific, 1);
        assert_eq!(summary.substitute_specific, 1);
        assert_eq!(summary.generic, 1);

        let parent = dp_course_specific::Entity::find().one(&db).await.unwrap().unwrap();
        assert_eq!(parent.course_id, "BUS& 101");

        let substitutes = dp_course_substitute_specific::Entity::find()
            .all(&db)
            .await
            .unwrap();
        assert_eq!(substitutes.len(), 1);
        assert_eq!(substitutes[0].parent_id, parent.id);
        assert_eq!(substitutes[0].course_id, "MATH 107");

        let generic = dp_course_generic::Entity::find().one(&db).await.unwrap().unwrap();
        assert!(generic.elective);
        assert_eq!(generic.credits, Some(5.0));

        // The chain label is stored without its trailing "or"
        let business = courses::Entity::find_by_id("BUS& 101")
            .one(&db)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(business.label, "Introduction to Business");
    }

    #[tokio::test]
    async fn test_import_duplicate_outcome_policies() {
        let sheet = "\
Degree Programs,,,
ATA Accounting,90,10
ACCT 201,Principles of Accounting I,5,\"2,2,4\"
";

        let db = seeded_db().await;
        import_reader(&db, sheet.as_bytes(), DuplicateOutcomePolicy::Skip)
            .await
            .unwrap();
        let skipped = course_learning_outcomes::Entity::find()
            .count(&db)
            .await
            .unwrap();
        assert_eq!(skipped, 2);

        let db = seeded_db().await;
        import_reader(&db, sheet.as_bytes(), DuplicateOutcomePolicy::Abandon)
            .await
            .unwrap();
        let abandoned = course_learning_outcomes::Entity::find()
            .count(&db)
            .await
            .unwrap();
        assert_eq!(abandoned, 1);
    }

    #[tokio::test]
    async fn test_import_requires_seeding() {
        let db = connect("sqlite::memory:").await.unwrap();
        Migrator::up(&db, None).await.unwrap();

        let result = import(&db, "Title\nATA Accounting,90,10\n").await;
        assert!(matches!(result, Err(ImportError::MissingPrerequisite)));
    }

    #[tokio::test]
    async fn test_malformed_header_writes_nothing() {
        let db = seeded_db().await;

        let result = import(&db, "Title\nMATH 110,Linear Algebra,5,1\n").await;
        assert!(matches!(
            result,
            Err(ImportError::MalformedHeader { line: 2, .. })
        ));
        assert_eq!(courses::Entity::find().count(&db).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_bad_row_writes_nothing() {
        let db = seeded_db().await;

        let result = import(
            &db,
            "\
Title
ATA Accounting,90,10
ACCT 201,Principles of Accounting I,5,2
ACCT 202,Principles of Accounting II,5,9
",
        )
        .await;
        assert!(matches!(
            result,
            Err(ImportError::UnknownOutcome { line: 4, outcome_id: 9, .. })
        ));
        assert_eq!(degree_programs::Entity::find().count(&db).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_delete_all_after_import() {
        let db = seeded_db().await;

        import(
            &db,
            "\
Title
ATA Business,90,10
BUS& 101,Introduction to Business or,5,2
Generic Social Sciences,,5
ENGL& 101,English Composition I,5,3
",
        )
        .await
        .unwrap();
        assert_eq!(
            dp_course_substitute_generic::Entity::find()
                .count(&db)
                .await
                .unwrap(),
            1
        );

        TeardownService::delete_all(&db).await.unwrap();

        assert_eq!(degree_programs::Entity::find().count(&db).await.unwrap(), 0);
        assert_eq!(courses::Entity::find().count(&db).await.unwrap(), 0);
        assert_eq!(
            course_learning_outcomes::Entity::find()
                .count(&db)
                .await
                .unwrap(),
            0
        );
        assert_eq!(dp_course_specific::Entity::find().count(&db).await.unwrap(), 0);
        assert_eq!(dp_course_generic::Entity::find().count(&db).await.unwrap(), 0);
        assert_eq!(
            dp_course_substitute_specific::Entity::find()
                .count(&db)
                .await
                .unwrap(),
            0
        );
        assert_eq!(
            dp_course_substitute_generic::Entity::find()
                .count(&db)
                .await
                .unwrap(),
            0
        );

        // Reference data survives, so a fresh import can follow
        assert!(SeedService::has_reference_data(&db).await.unwrap());
    }
}
