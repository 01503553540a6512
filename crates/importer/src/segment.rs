use crate::{
    error::{ImportError, Result},
    rows::{RowKind, SourceRow},
};
use csv::ReaderBuilder;
use models::credits::parse_credit_value;
use std::io::Read;

/// Reads every row of a headerless CSV export.
///
/// Rows may have any number of cells. Each row keeps the file line it starts on.
pub fn read_rows<R: Read>(reader: R) -> Result<Vec<SourceRow>> {
    let mut csv_reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    csv_reader
        .records()
        .enumerate()
        .map(|(index, record)| {
            let record = record?;
            let line = record
                .position()
                .map_or(index + 1, |position| position.line() as usize);
            let cells = record.iter().map(str::to_string).collect();
            Ok(SourceRow::new(line, cells))
        })
        .collect()
}

/// The rows of one degree program section
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgramRows {
    pub header: SourceRow,
    /// Course and generic rows, in source order
    pub rows: Vec<SourceRow>,
}

/// A row stream split into degree program sections
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segmentation {
    pub title: SourceRow,
    pub programs: Vec<ProgramRows>,
    /// Decorative rows, kept so nothing read is lost
    pub discarded: Vec<SourceRow>,
}

impl Segmentation {
    /// Rebuilds the row stream that was segmented
    pub fn reassemble(&self) -> Vec<SourceRow> {
        let mut rows: Vec<SourceRow> = std::iter::once(&self.title)
            .chain(
                self.programs
                    .iter()
                    .flat_map(|program| std::iter::once(&program.header).chain(&program.rows)),
            )
            .chain(&self.discarded)
            .cloned()
            .collect();

        rows.sort_by_key(|row| row.line);
        rows
    }

    /// Total number of course and generic rows
    pub fn course_row_count(&self) -> usize {
        self.programs.iter().map(|program| program.rows.len()).sum()
    }
}

/// Splits rows into one group per degree program.
///
/// The first row is a title and is never interpreted. The second must open a
/// program, otherwise the run fails before anything is written. The final
/// section ends with the input.
pub fn segment(rows: Vec<SourceRow>) -> Result<Segmentation> {
    let mut rows = rows.into_iter();

    let title = rows.next().ok_or(ImportError::MalformedHeader {
        line: 1,
        found: String::new(),
    })?;

    let first_header = match rows.next() {
        Some(row) if row.kind() == RowKind::Header => row,
        Some(row) => {
            return Err(ImportError::MalformedHeader {
                line: row.line,
                found: row.cell(0).to_string(),
            });
        }
        None => {
            return Err(ImportError::MalformedHeader {
                line: title.line + 1,
                found: String::new(),
            });
        }
    };

    let mut programs = Vec::new();
    let mut current = ProgramRows {
        header: first_header,
        rows: Vec::new(),
    };
    let mut discarded = Vec::new();

    for row in rows {
        match row.kind() {
            RowKind::Header => {
                let finished = std::mem::replace(
                    &mut current,
                    ProgramRows {
                        header: row,
                        rows: Vec::new(),
                    },
                );
                programs.push(finished);
            }
            RowKind::SpecificCourse | RowKind::GenericCourse => current.rows.push(row),
            RowKind::Decorative => discarded.push(row),
        }
    }
    programs.push(current);

    log::debug!(
        "Segmented {} degree programs, {} rows discarded",
        programs.len(),
        discarded.len()
    );

    Ok(Segmentation {
        title,
        programs,
        discarded,
    })
}

/// The fields of a degree program header row
#[derive(Debug, Clone, PartialEq)]
pub struct ProgramHeader {
    pub label: String,
    pub credits: Option<f64>,
    /// `None` when the sheet says "N.A." or anything else non-numeric
    pub elective_credits: Option<f64>,
}

impl ProgramHeader {
    pub fn parse(row: &SourceRow) -> Self {
        Self {
            label: row.cell(0).trim().to_string(),
            credits: parse_credit_value(row.cell(1)),
            elective_credits: parse_credit_value(row.cell(2)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SHEET: &str = "\
Degree Programs and Outcomes,,,,
ATA Accounting,90,10,,
Required Courses,,,,
ACCT 201,Principles of Accounting I,5,2,
BUS& 101,Introduction to Business or,5,\"2, 3\",
,,,,
Generic Quant Skills,,5,,
ATA Welding,93,N.A.,,
WELD 100,Welding Basics,5,6,
";

    #[test]
    fn test_read_rows() {
        let rows = read_rows(SHEET.as_bytes()).unwrap();

        assert_eq!(rows.len(), 9);
        assert_eq!(rows[0].line, 1);
        assert_eq!(rows[4].cell(3), "2, 3");
        assert_eq!(rows[8].cells.len(), 5);
    }

    #[test]
    fn test_segment_programs() {
        let segmentation = segment(read_rows(SHEET.as_bytes()).unwrap()).unwrap();

        assert_eq!(segmentation.programs.len(), 2);

        let accounting = &segmentation.programs[0];
        assert_eq!(accounting.header.cell(0), "ATA Accounting");
        let lines: Vec<usize> = accounting.rows.iter().map(|row| row.line).collect();
        assert_eq!(lines, [4, 5, 7]);

        // The last section runs to the end of input
        let welding = &segmentation.programs[1];
        assert_eq!(welding.rows.len(), 1);

        let discarded: Vec<usize> = segmentation.discarded.iter().map(|row| row.line).collect();
        assert_eq!(discarded, [3, 6]);
        assert_eq!(segmentation.course_row_count(), 4);
    }

    #[test]
    fn test_reassemble_restores_input() {
        let rows = read_rows(SHEET.as_bytes()).unwrap();
        let segmentation = segment(rows.clone()).unwrap();

        assert_eq!(segmentation.reassemble(), rows);
    }

    #[test]
    fn test_malformed_header() {
        let rows = read_rows("Title\nMATH 110,Linear Algebra,5,1\n".as_bytes()).unwrap();

        match segment(rows) {
            Err(ImportError::MalformedHeader { line, found }) => {
                assert_eq!(line, 2);
                assert_eq!(found, "MATH 110");
            }
            other => panic!("expected a malformed header, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_input() {
        assert!(matches!(
            segment(Vec::new()),
            Err(ImportError::MalformedHeader { line: 1, .. })
        ));
        assert!(matches!(
            segment(vec![SourceRow::new(1, vec!["Title".to_string()])]),
            Err(ImportError::MalformedHeader { line: 2, .. })
        ));
    }

    #[test]
    fn test_program_header() {
        let header = ProgramHeader::parse(&SourceRow::new(
            2,
            vec![
                " ATA Welding ".to_string(),
                "93".to_string(),
                "N.A.".to_string(),
            ],
        ));

        assert_eq!(header.label, "ATA Welding");
        assert_eq!(header.credits, Some(93.0));
        assert_eq!(header.elective_credits, None);
    }
}
