use crate::{
    course_row::CourseRow,
    error::{ImportError, Result},
};
use models::{credit_type::CreditTypeCode, program_data::ProgramLink};

/// Cursor carried from one program row to the next
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LinkState {
    /// Line of the latest specific, non-substitute course
    pub parent: Option<usize>,
    /// The previous row's label ended in "or"
    pub pending_substitute: bool,
}

fn credit_type(row: &CourseRow) -> Result<CreditTypeCode> {
    row.credit_type().ok_or_else(|| ImportError::UnknownCreditType {
        line: row.line,
        text: row.category_text(),
    })
}

fn parent(state: LinkState, row: &CourseRow) -> Result<usize> {
    state.parent.ok_or_else(|| ImportError::MissingParent {
        line: row.line,
        course_id: row.id.clone(),
    })
}

/// Turns one row into one program requirement.
///
/// | substitute | generic | result |
/// |------------|---------|--------|
/// | no  | no  | [`ProgramLink::Specific`], becomes the parent |
/// | no  | yes | [`ProgramLink::Generic`] |
/// | yes | no  | [`ProgramLink::SubstituteSpecific`] of the parent |
/// | yes | yes | [`ProgramLink::SubstituteGeneric`] of the parent |
///
/// Generic rows never become a parent. Every row decides whether the next
/// one is a substitute.
pub fn step(state: LinkState, row: &CourseRow) -> Result<(LinkState, ProgramLink)> {
    let mut next = LinkState {
        parent: state.parent,
        pending_substitute: row.continues_chain(),
    };

    let link = match (state.pending_substitute, row.is_generic()) {
        (false, false) => {
            next.parent = Some(row.line);
            ProgramLink::Specific {
                line: row.line,
                course_id: row.id.clone(),
                elective: row.elective,
            }
        }
        (false, true) => ProgramLink::Generic {
            credit_type: credit_type(row)?,
            credits: row.generic_credits(),
            elective: row.elective,
        },
        (true, false) => ProgramLink::SubstituteSpecific {
            parent_line: parent(state, row)?,
            course_id: row.id.clone(),
        },
        (true, true) => ProgramLink::SubstituteGeneric {
            parent_line: parent(state, row)?,
            credit_type: credit_type(row)?,
            credits: row.generic_credits(),
            elective: row.elective,
        },
    };

    Ok((next, link))
}

/// Folds a program's rows, in source order, into its requirements
pub fn build_links(rows: &[CourseRow]) -> Result<Vec<ProgramLink>> {
    let (_, links) = rows.iter().try_fold(
        (LinkState::default(), Vec::with_capacity(rows.len())),
        |(state, mut links), row| {
            let (next, link) = step(state, row)?;
            links.push(link);
            Ok::<_, ImportError>((next, links))
        },
    )?;

    Ok(links)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rows::SourceRow;

    fn course(line: usize, cells: &[&str]) -> CourseRow {
        let row = SourceRow::new(line, cells.iter().map(|cell| cell.to_string()).collect());
        CourseRow::parse(&row).unwrap()
    }

    #[test]
    fn test_specific_becomes_parent() {
        let (state, link) = step(
            LinkState::default(),
            &course(3, &["MATH 110", "Linear Algebra", "5", "", "x"]),
        )
        .unwrap();

        assert_eq!(state.parent, Some(3));
        assert!(!state.pending_substitute);
        assert_eq!(
            link,
            ProgramLink::Specific {
                line: 3,
                course_id: "MATH 110".to_string(),
                elective: true,
            }
        );
    }

    #[test]
    fn test_generic_keeps_parent() {
        let state = LinkState {
            parent: Some(3),
            pending_substitute: false,
        };
        let (next, link) = step(state, &course(4, &["Generic", "Humanities", "5-10"])).unwrap();

        assert_eq!(next.parent, Some(3));
        assert_eq!(
            link,
            ProgramLink::Generic {
                credit_type: CreditTypeCode::Humanities,
                credits: Some(5.0),
                elective: false,
            }
        );
    }

    #[test]
    fn test_substitute_specific() {
        let state = LinkState {
            parent: Some(3),
            pending_substitute: true,
        };
        let (next, link) = step(state, &course(4, &["MATH 107", "Math in Society", "5"])).unwrap();

        assert_eq!(next.parent, Some(3));
        assert_eq!(
            link,
            ProgramLink::SubstituteSpecific {
                parent_line: 3,
                course_id: "MATH 107".to_string(),
            }
        );
    }

    #[test]
    fn test_substitute_generic() {
        let state = LinkState {
            parent: Some(3),
            pending_substitute: true,
        };
        let (_, link) = step(state, &course(4, &["Generic", "Social Science", "5"])).unwrap();

        assert_eq!(
            link,
            ProgramLink::SubstituteGeneric {
                parent_line: 3,
                credit_type: CreditTypeCode::SocialSciences,
                credits: Some(5.0),
                elective: false,
            }
        );
    }

    #[test]
    fn test_substitute_without_parent() {
        let state = LinkState {
            parent: None,
            pending_substitute: true,
        };

        assert!(matches!(
            step(state, &course(5, &["MATH 107", "Math in Society", "5"])),
            Err(ImportError::MissingParent { line: 5, .. })
        ));
    }

    #[test]
    fn test_unknown_credit_type() {
        assert!(matches!(
            step(LinkState::default(), &course(6, &["Generic", "Anything", "5"])),
            Err(ImportError::UnknownCreditType { line: 6, .. })
        ));
    }

    #[test]
    fn test_chain_of_substitutes() {
        let rows = [
            course(3, &["BUS& 101", "Introduction to Business or", "5"]),
            course(4, &["MATH 107", "Math in Society or", "5"]),
            course(5, &["Generic", "Quantitative Skills", "5"]),
            course(6, &["ENGL& 101", "English Composition", "5"]),
        ];

        let parents: Vec<Option<usize>> = build_links(&rows)
            .unwrap()
            .iter()
            .map(ProgramLink::parent_line)
            .collect();
        assert_eq!(parents, [None, Some(3), Some(3), None]);
    }

    #[test]
    fn test_leading_generic_row() {
        let rows = [
            course(3, &["Generic", "Elective", "10"]),
            course(4, &["ACCT 201", "Accounting or", "5"]),
            course(5, &["ACCT 202", "Accounting II", "5"]),
        ];

        let links = build_links(&rows).unwrap();
        assert!(matches!(links[0], ProgramLink::Generic { .. }));
        assert_eq!(links[2].parent_line(), Some(4));
    }
}
