use crate::{
    catalog::{CatalogBuilder, DuplicateOutcomePolicy},
    course_row::CourseRow,
    error::Result,
    links::build_links,
    segment::{ProgramHeader, Segmentation},
};
use models::program_data::{ImportPlan, ProgramObject};
use std::collections::HashSet;

/// Resolves every record an import will write.
///
/// Nothing touches the database here, so any problem with the sheet is
/// reported before the first insert.
///
/// # Arguments
/// * `segmentation` - The sheet split into program sections
/// * `known_outcomes` - Ids of the seeded core learning outcomes
/// * `policy` - How repeated outcomes on a course are treated
pub fn build_plan(
    segmentation: &Segmentation,
    known_outcomes: &HashSet<i32>,
    policy: DuplicateOutcomePolicy,
) -> Result<ImportPlan> {
    let mut catalog = CatalogBuilder::new(policy, known_outcomes);
    let mut programs = Vec::with_capacity(segmentation.programs.len());

    for section in &segmentation.programs {
        let header = ProgramHeader::parse(&section.header);
        let rows = section
            .rows
            .iter()
            .map(CourseRow::parse)
            .collect::<Result<Vec<_>>>()?;

        for row in &rows {
            catalog.add(row)?;
        }

        programs.push(ProgramObject {
            label: header.label,
            credits: header.credits,
            elective_credits: header.elective_credits,
            links: build_links(&rows)?,
        });
    }

    let (courses, course_outcomes) = catalog.finish();
    let plan = ImportPlan {
        programs,
        courses,
        course_outcomes,
    };

    log::info!(
        "Planned {} degree programs, {} courses, {} outcome links and {} requirements",
        plan.programs.len(),
        plan.courses.len(),
        plan.course_outcomes.len(),
        plan.link_count()
    );

    Ok(plan)
}
