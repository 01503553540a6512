use lazy_static::lazy_static;
use regex::Regex;

/// Marker that opens a degree program section
pub const PROGRAM_MARKER: &str = "ATA";

/// Marker of a generic credit row
pub const GENERIC_MARKER: &str = "Generic";

lazy_static! {
    static ref COURSE_ID: Regex = Regex::new(r"^[A-Z]+&? [0-9]+$").unwrap();
}

/// A raw spreadsheet row with its 1-based line number
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceRow {
    pub line: usize,
    pub cells: Vec<String>,
}

impl SourceRow {
    pub fn new(line: usize, cells: Vec<String>) -> Self {
        Self { line, cells }
    }

    /// Cell at `index`, empty if the row is shorter
    pub fn cell(&self, index: usize) -> &str {
        self.cells.get(index).map_or("", String::as_str)
    }

    pub fn kind(&self) -> RowKind {
        classify(self.cell(0))
    }
}

/// What a row holds, decided by its first cell alone
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowKind {
    /// Opens a degree program: label, credits, elective credits
    Header,
    /// A named course such as "MATH 110"
    SpecificCourse,
    /// Some credits of a category, without a course
    GenericCourse,
    /// Formatting only
    Decorative,
}

impl RowKind {
    /// Whether rows of this kind belong to a program's requirements
    pub fn is_course(self) -> bool {
        matches!(self, Self::SpecificCourse | Self::GenericCourse)
    }
}

/// Determines whether a cell is a course identifier.
///
/// # Arguments
/// * `s` - A cell to check, surrounding whitespace is ignored.
///
/// # Returns
/// `true` for an uppercase department code, an optional `&`, a space and a
/// number (e.g. `"MATH 110"` or `"CS& 101"`).
pub fn is_course_id(s: &str) -> bool {
    COURSE_ID.is_match(s.trim())
}

/// Classifies a row by its first cell
pub fn classify(first_cell: &str) -> RowKind {
    if first_cell.starts_with(PROGRAM_MARKER) {
        RowKind::Header
    } else if is_course_id(first_cell) {
        RowKind::SpecificCourse
    } else if first_cell.starts_with(GENERIC_MARKER) {
        RowKind::GenericCourse
    } else {
        RowKind::Decorative
    }
}
