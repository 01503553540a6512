use crate::{
    db::connect,
    services::{save_program::SaveProgramService, seed::SeedService},
};
use migration::{Migrator, MigratorTrait};
use models::{
    credit_type::CreditTypeCode,
    credits::Credits,
    program_data::{CourseObject, CourseOutcome, ImportPlan, ProgramLink, ProgramObject},
};
use sea_orm::DatabaseConnection;

/// Fresh in-memory database with every migration applied
pub async fn migrated_db() -> DatabaseConnection {
    let db = connect("sqlite::memory:").await.unwrap();
    Migrator::up(&db, None).await.unwrap();
    db
}

fn specific(line: usize, course_id: &str) -> ProgramLink {
    ProgramLink::Specific {
        line,
        course_id: course_id.to_string(),
        elective: false,
    }
}

fn outcome(course_id: &str, outcome_id: i32) -> CourseOutcome {
    CourseOutcome {
        course_id: course_id.to_string(),
        outcome_id,
    }
}

/// Three programs: "ATA Accounting" and "ATA Business" share two of their
/// three courses, "ATA Welding" shares none
pub fn three_program_plan() -> ImportPlan {
    let courses = ["ACCT 201", "BUS& 101", "ENGL& 101", "MATH 107", "WELD 100"]
        .into_iter()
        .map(|id| CourseObject {
            id: id.to_string(),
            label: format!("{id} label"),
            credits: Some(Credits::Fixed(5.0)),
        })
        .collect();

    ImportPlan {
        programs: vec![
            ProgramObject {
                label: "ATA Accounting".to_string(),
                credits: Some(90.0),
                elective_credits: Some(10.0),
                links: vec![
                    specific(3, "ACCT 201"),
                    specific(4, "BUS& 101"),
                    ProgramLink::SubstituteSpecific {
                        parent_line: 4,
                        course_id: "MATH 107".to_string(),
                    },
                    specific(6, "ENGL& 101"),
                    ProgramLink::Generic {
                        credit_type: CreditTypeCode::QuantitativeSkills,
                        credits: Some(5.0),
                        elective: false,
                    },
                ],
            },
            ProgramObject {
                label: "ATA Business".to_string(),
                credits: Some(90.0),
                elective_credits: None,
                links: vec![
                    specific(10, "BUS& 101"),
                    specific(11, "ENGL& 101"),
                    specific(12, "MATH 107"),
                ],
            },
            ProgramObject {
                label: "ATA Welding".to_string(),
                credits: Some(93.0),
                elective_credits: None,
                links: vec![specific(15, "WELD 100")],
            },
        ],
        courses,
        course_outcomes: vec![
            outcome("ACCT 201", 2),
            outcome("BUS& 101", 2),
            outcome("BUS& 101", 3),
            outcome("ENGL& 101", 3),
            outcome("WELD 100", 6),
        ],
    }
}

/// Seeded database holding [`three_program_plan`]
pub async fn populated_db() -> DatabaseConnection {
    let db = migrated_db().await;
    SeedService::initialize(&db).await.unwrap();
    SaveProgramService::save_plan(&db, &three_program_plan())
        .await
        .unwrap();
    db
}
