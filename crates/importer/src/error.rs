use sea_orm::DbErr;
use thiserror::Error;

/// Result type for import operations
pub type Result<T> = std::result::Result<T, ImportError>;

/// Everything that stops an import run
#[derive(Error, Debug)]
pub enum ImportError {
    /// Reference data has not been seeded yet
    #[error("Reference data is missing, run the import with --initialize first")]
    MissingPrerequisite,

    /// The second row is not a degree program header
    #[error("Line {line}: expected a degree program header, found {found:?}")]
    MalformedHeader { line: usize, found: String },

    /// A course lists an outcome that was never seeded
    #[error("Line {line}: course {course_id} references unknown outcome {outcome_id}")]
    UnknownOutcome {
        line: usize,
        course_id: String,
        outcome_id: i64,
    },

    /// A generic row names no known credit category
    #[error("Line {line}: no credit type matches {text:?}")]
    UnknownCreditType { line: usize, text: String },

    /// A substitute row appears before any course it could replace
    #[error("Line {line}: substitute {course_id} has no preceding course to replace")]
    MissingParent { line: usize, course_id: String },

    /// A row that cannot be a program requirement reached the link builder
    #[error("Line {line}: row cannot be a program requirement")]
    UnexpectedRow { line: usize },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}
