use crate::{credit_type::CreditTypeCode, credits::Credits};
use serde::Serialize;

/// A degree program parsed from its header row, with its ordered requirements
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ProgramObject {
    pub label: String,
    pub credits: Option<f64>,
    pub elective_credits: Option<f64>,
    pub links: Vec<ProgramLink>,
}

/// A course as it will be stored, shared across every program that lists it
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CourseObject {
    pub id: String,
    pub label: String,
    pub credits: Option<Credits>,
}

/// Asserts that a course satisfies a core learning outcome
#[derive(Debug, Clone, Serialize, PartialEq, Eq, Hash)]
pub struct CourseOutcome {
    pub course_id: String,
    pub outcome_id: i32,
}

/// One requirement of a degree program.
///
/// Substitutes point at their parent by the source line of the
/// [`ProgramLink::Specific`] entry they may replace.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub enum ProgramLink {
    /// A named course the program requires
    Specific {
        line: usize,
        course_id: String,
        elective: bool,
    },
    /// Some credits of a category, without naming a course
    Generic {
        credit_type: CreditTypeCode,
        credits: Option<f64>,
        elective: bool,
    },
    /// A named course accepted in place of the parent
    SubstituteSpecific {
        parent_line: usize,
        course_id: String,
    },
    /// A generic bucket accepted in place of the parent
    SubstituteGeneric {
        parent_line: usize,
        credit_type: CreditTypeCode,
        credits: Option<f64>,
        elective: bool,
    },
}

impl ProgramLink {
    /// Line of the parent entry, if this link is a substitute
    pub fn parent_line(&self) -> Option<usize> {
        match self {
            Self::SubstituteSpecific { parent_line, .. }
            | Self::SubstituteGeneric { parent_line, .. } => Some(*parent_line),
            Self::Specific { .. } | Self::Generic { .. } => None,
        }
    }
}

/// Everything an import writes, resolved in memory before the first insert
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct ImportPlan {
    pub programs: Vec<ProgramObject>,
    pub courses: Vec<CourseObject>,
    pub course_outcomes: Vec<CourseOutcome>,
}

impl ImportPlan {
    /// Total number of relationship records across all programs
    pub fn link_count(&self) -> usize {
        self.programs.iter().map(|program| program.links.len()).sum()
    }
}
