//! Line-oriented input parser.
//!
//! # Format
//!
//! ```text
//! <num_contributors> <num_projects>
//! <contributor_name> <num_skills>        (per contributor)
//! <skill_name> <level>                   (num_skills lines)
//! <project_name> <duration> <score> <best_before> <num_roles>  (per project)
//! <skill_name> <min_level>               (num_roles lines)
//! ```
//!
//! Errors are fatal and carry 1-based line numbers; the engine itself
//! assumes well-formed input and never sees a parse failure.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::models::{Contributor, Project};

/// A parsed staffing problem: contributors and projects in registration
/// order.
#[derive(Debug, Clone, Default)]
pub struct Problem {
    /// Contributors in input order.
    pub contributors: Vec<Contributor>,
    /// Projects in input order.
    pub projects: Vec<Project>,
}

/// Input parsing failures.
#[derive(Debug, Error)]
pub enum ParseError {
    /// The file could not be read.
    #[error("failed to read input file: {0}")]
    Io(#[from] std::io::Error),

    /// The input ended before a declared section was complete.
    #[error("line {line}: unexpected end of input")]
    UnexpectedEof {
        /// 1-based line number at which more input was expected.
        line: usize,
    },

    /// A line had the wrong number of fields.
    #[error("line {line}: expected {expected} fields, found {found}")]
    FieldCount {
        /// 1-based line number.
        line: usize,
        /// Fields expected on the line.
        expected: usize,
        /// Fields actually present.
        found: usize,
    },

    /// A numeric field did not parse.
    #[error("line {line}: invalid integer '{value}'")]
    InvalidInteger {
        /// 1-based line number.
        line: usize,
        /// The offending field text.
        value: String,
    },
}

/// Cursor over input lines with 1-based position tracking.
struct Lines<'a> {
    lines: Vec<&'a str>,
    pos: usize,
}

impl<'a> Lines<'a> {
    fn new(input: &'a str) -> Self {
        Self {
            lines: input.lines().collect(),
            pos: 0,
        }
    }

    fn next(&mut self) -> Result<(usize, &'a str), ParseError> {
        let line = self
            .lines
            .get(self.pos)
            .copied()
            .ok_or(ParseError::UnexpectedEof { line: self.pos + 1 })?;
        self.pos += 1;
        Ok((self.pos, line))
    }

    /// Reads a line of exactly `expected` whitespace-separated fields.
    fn fields(&mut self, expected: usize) -> Result<(usize, Vec<&'a str>), ParseError> {
        let (line_no, line) = self.next()?;
        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.len() != expected {
            return Err(ParseError::FieldCount {
                line: line_no,
                expected,
                found: fields.len(),
            });
        }
        Ok((line_no, fields))
    }
}

fn parse_u32(line: usize, value: &str) -> Result<u32, ParseError> {
    value.parse().map_err(|_| ParseError::InvalidInteger {
        line,
        value: value.to_string(),
    })
}

fn parse_usize(line: usize, value: &str) -> Result<usize, ParseError> {
    value.parse().map_err(|_| ParseError::InvalidInteger {
        line,
        value: value.to_string(),
    })
}

fn read_contributor(lines: &mut Lines) -> Result<Contributor, ParseError> {
    let (line_no, fields) = lines.fields(2)?;
    let mut contributor = Contributor::new(fields[0]);
    let num_skills = parse_usize(line_no, fields[1])?;

    for _ in 0..num_skills {
        let (line_no, fields) = lines.fields(2)?;
        let level = parse_u32(line_no, fields[1])?;
        contributor.skills.set(fields[0], level);
    }
    Ok(contributor)
}

fn read_project(lines: &mut Lines) -> Result<Project, ParseError> {
    let (line_no, fields) = lines.fields(5)?;
    let duration = parse_u32(line_no, fields[1])?;
    let score = parse_u32(line_no, fields[2])?;
    let best_before = parse_u32(line_no, fields[3])?;
    let num_roles = parse_usize(line_no, fields[4])?;

    let mut project = Project::new(fields[0], duration, score, best_before);
    for _ in 0..num_roles {
        let (line_no, fields) = lines.fields(2)?;
        let min_level = parse_u32(line_no, fields[1])?;
        project = project.with_role(fields[0], min_level);
    }
    Ok(project)
}

/// Parses a staffing problem from input text.
pub fn parse_str(input: &str) -> Result<Problem, ParseError> {
    let mut lines = Lines::new(input);

    let (line_no, fields) = lines.fields(2)?;
    let num_contributors = parse_usize(line_no, fields[0])?;
    let num_projects = parse_usize(line_no, fields[1])?;

    let contributors = (0..num_contributors)
        .map(|_| read_contributor(&mut lines))
        .collect::<Result<Vec<_>, _>>()?;
    let projects = (0..num_projects)
        .map(|_| read_project(&mut lines))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Problem {
        contributors,
        projects,
    })
}

/// Parses a staffing problem from a file.
pub fn parse_file(path: impl AsRef<Path>) -> Result<Problem, ParseError> {
    parse_str(&fs::read_to_string(path)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "\
3 3
Anna 1
C++ 2
Bob 2
HTML 5
CSS 5
Maria 1
Python 3
Logging 5 10 5 1
C++ 3
WebServer 7 10 7 2
HTML 3
C++ 2
WebChat 10 20 20 2
Python 3
HTML 3
";

    #[test]
    fn test_parse_example() {
        let problem = parse_str(EXAMPLE).unwrap();
        assert_eq!(problem.contributors.len(), 3);
        assert_eq!(problem.projects.len(), 3);

        let anna = &problem.contributors[0];
        assert_eq!(anna.name, "Anna");
        assert_eq!(anna.skill_level("C++"), Some(2));

        let bob = &problem.contributors[1];
        assert_eq!(bob.skills.len(), 2);
        assert_eq!(bob.skill_level("CSS"), Some(5));

        let web = &problem.projects[1];
        assert_eq!(web.name, "WebServer");
        assert_eq!(web.duration_days, 7);
        assert_eq!(web.base_score, 10);
        assert_eq!(web.best_before_day, 7);
        assert_eq!(web.roles.len(), 2);
        assert_eq!(web.roles[0].skill, "HTML");
        assert_eq!(web.roles[0].min_level, 3);
    }

    #[test]
    fn test_registration_order_preserved() {
        let problem = parse_str(EXAMPLE).unwrap();
        let names: Vec<_> = problem.contributors.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Anna", "Bob", "Maria"]);
        let projects: Vec<_> = problem.projects.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(projects, vec!["Logging", "WebServer", "WebChat"]);
    }

    #[test]
    fn test_truncated_input() {
        let err = parse_str("2 0\nAnna 2\nC++ 2\n").unwrap_err();
        assert!(matches!(err, ParseError::UnexpectedEof { line: 4 }));
    }

    #[test]
    fn test_bad_field_count() {
        let err = parse_str("1 0\nAnna\n").unwrap_err();
        assert!(matches!(
            err,
            ParseError::FieldCount {
                line: 2,
                expected: 2,
                found: 1
            }
        ));
    }

    #[test]
    fn test_invalid_integer() {
        let err = parse_str("1 0\nAnna x\n").unwrap_err();
        match err {
            ParseError::InvalidInteger { line, value } => {
                assert_eq!(line, 2);
                assert_eq!(value, "x");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_empty_input() {
        let err = parse_str("").unwrap_err();
        assert!(matches!(err, ParseError::UnexpectedEof { line: 1 }));
    }

    #[test]
    fn test_zero_counts() {
        let problem = parse_str("0 0\n").unwrap();
        assert!(problem.contributors.is_empty());
        assert!(problem.projects.is_empty());
    }

    #[test]
    fn test_error_display_carries_line() {
        let err = parse_str("1 0\nAnna x\n").unwrap_err();
        assert_eq!(err.to_string(), "line 2: invalid integer 'x'");
    }
}
