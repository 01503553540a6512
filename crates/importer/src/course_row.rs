use crate::{
    error::{ImportError, Result},
    rows::{RowKind, SourceRow},
};
use lazy_static::lazy_static;
use models::{credit_type::CreditTypeCode, credits::Credits};
use regex::Regex;

lazy_static! {
    static ref OUTCOME_REFERENCE: Regex = Regex::new(r"[0-9]+").unwrap();
}

/// Word that ends a label when the next row may replace this one
const CHAIN_WORD: &str = "or";

/// Values of the elective cell that mean "not an elective"
const FALSE_MARKERS: [&str; 3] = ["false", "no", "0"];

/// A course or generic credit row with its cells interpreted.
///
/// Cells are `identifier, label, credits, outcomes, elective`; any missing
/// cell reads as empty.
#[derive(Debug, Clone, PartialEq)]
pub struct CourseRow {
    pub line: usize,
    pub kind: RowKind,
    pub id: String,
    /// Label as written, including any trailing "or"
    pub raw_label: String,
    pub label: String,
    pub credits: Option<Credits>,
    /// Every number found in the outcome cell, in order
    pub outcome_ids: Vec<i64>,
    pub elective: bool,
}

impl CourseRow {
    /// Interprets a course or generic row.
    ///
    /// # Errors
    /// [`ImportError::UnexpectedRow`] if the row is a header or decorative row
    pub fn parse(row: &SourceRow) -> Result<Self> {
        let kind = row.kind();
        if !kind.is_course() {
            return Err(ImportError::UnexpectedRow { line: row.line });
        }

        let raw_label = row.cell(1).to_string();

        Ok(Self {
            line: row.line,
            kind,
            id: row.cell(0).trim().to_string(),
            label: strip_chain_word(&raw_label).to_string(),
            raw_label,
            credits: Credits::lenient(row.cell(2)),
            outcome_ids: parse_outcome_ids(row.cell(3)),
            elective: is_truthy(row.cell(4)),
        })
    }

    pub fn is_generic(&self) -> bool {
        self.kind == RowKind::GenericCourse
    }

    /// Whether the next row is a substitute for the current parent
    pub fn continues_chain(&self) -> bool {
        ends_with_chain_word(&self.raw_label)
    }

    /// Text searched for a generic row's credit category
    pub fn category_text(&self) -> String {
        format!("{} {}", self.id, self.label)
    }

    /// Credit category of a generic row.
    ///
    /// The identifier cell is searched first, the label only when the
    /// identifier names no category.
    pub fn credit_type(&self) -> Option<CreditTypeCode> {
        CreditTypeCode::from_category_text(&self.id)
            .or_else(|| CreditTypeCode::from_category_text(&self.label))
    }

    /// Credit count of a generic bucket, the lower bound of its credit cell
    pub fn generic_credits(&self) -> Option<f64> {
        self.credits.map(|credits| credits.min_value())
    }
}

fn ends_with_chain_word(label: &str) -> bool {
    label
        .split_whitespace()
        .next_back()
        .is_some_and(|word| word == CHAIN_WORD)
}

/// Removes a trailing "or" and surrounding whitespace from a label
fn strip_chain_word(label: &str) -> &str {
    let label = label.trim();
    if ends_with_chain_word(label) {
        label[..label.len() - CHAIN_WORD.len()].trim_end()
    } else {
        label
    }
}

/// Numbers too large for `i64` saturate, so they still fail outcome lookup
fn parse_outcome_ids(cell: &str) -> Vec<i64> {
    OUTCOME_REFERENCE
        .find_iter(cell)
        .map(|m| m.as_str().parse().unwrap_or(i64::MAX))
        .collect()
}

fn is_truthy(cell: &str) -> bool {
    let cell = cell.trim();
    !cell.is_empty()
        && !FALSE_MARKERS
            .iter()
            .any(|marker| cell.eq_ignore_ascii_case(marker))
}
