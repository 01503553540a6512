use crate::{
    course_row::CourseRow,
    error::{ImportError, Result},
};
use clap::ValueEnum;
use models::program_data::{CourseObject, CourseOutcome};
use std::collections::{HashMap, HashSet};

/// What to do when a course lists an outcome it was already linked to
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum DuplicateOutcomePolicy {
    /// Ignore the repeated outcome and keep reading the cell
    #[default]
    Skip,
    /// Stop reading outcomes for that row at the first repeat
    Abandon,
}

/// Courses and outcome links collected across every program.
///
/// A course listed by several programs is stored once. The last row read
/// decides its label and credits.
pub struct CatalogBuilder<'a> {
    policy: DuplicateOutcomePolicy,
    known_outcomes: &'a HashSet<i32>,
    courses: Vec<CourseObject>,
    course_index: HashMap<String, usize>,
    course_outcomes: Vec<CourseOutcome>,
    seen_outcomes: HashSet<CourseOutcome>,
}

impl<'a> CatalogBuilder<'a> {
    pub fn new(policy: DuplicateOutcomePolicy, known_outcomes: &'a HashSet<i32>) -> Self {
        Self {
            policy,
            known_outcomes,
            courses: Vec::new(),
            course_index: HashMap::new(),
            course_outcomes: Vec::new(),
            seen_outcomes: HashSet::new(),
        }
    }

    /// Records a course row and its outcomes. Generic rows are ignored.
    ///
    /// # Errors
    /// [`ImportError::UnknownOutcome`] if the outcome cell names an outcome
    /// that was never seeded
    pub fn add(&mut self, row: &CourseRow) -> Result<()> {
        if row.is_generic() {
            return Ok(());
        }

        let course = CourseObject {
            id: row.id.clone(),
            label: row.label.clone(),
            credits: row.credits,
        };
        match self.course_index.get(&row.id) {
            Some(&index) => self.courses[index] = course,
            None => {
                self.course_index.insert(row.id.clone(), self.courses.len());
                self.courses.push(course);
            }
        }

        for &reference in &row.outcome_ids {
            let outcome_id = i32::try_from(reference)
                .ok()
                .filter(|id| self.known_outcomes.contains(id))
                .ok_or_else(|| ImportError::UnknownOutcome {
                    line: row.line,
                    course_id: row.id.clone(),
                    outcome_id: reference,
                })?;

            let link = CourseOutcome {
                course_id: row.id.clone(),
                outcome_id,
            };
            if self.seen_outcomes.contains(&link) {
                log::debug!(
                    "Line {}: {} already satisfies outcome {outcome_id}",
                    row.line,
                    row.id
                );
                match self.policy {
                    DuplicateOutcomePolicy::Skip => continue,
                    DuplicateOutcomePolicy::Abandon => break,
                }
            }

            self.seen_outcomes.insert(link.clone());
            self.course_outcomes.push(link);
        }

        Ok(())
    }

    /// Courses in order of first appearance, and their outcome links
    pub fn finish(self) -> (Vec<CourseObject>, Vec<CourseOutcome>) {
        (self.courses, self.course_outcomes)
    }
}
