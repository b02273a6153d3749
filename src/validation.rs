//! Input validation for staffing problems.
//!
//! Checks structural integrity of contributors and projects before
//! simulation. Detects:
//! - Duplicate names
//! - Projects with no roles or zero duration
//! - Roles no contributor could ever fill, even with one mentoring step
//!
//! Findings are advisory: the simulation runs fine on invalid input (an
//! unfillable project simply never starts), but surfacing them up front
//! separates "never started by policy" from "could never start at all".

use crate::models::{Contributor, Project};
use std::collections::HashSet;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation finding.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Finding category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation findings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two entities share the same name.
    DuplicateName,
    /// A project has no roles.
    EmptyRoles,
    /// A project has a zero-day duration.
    ZeroDuration,
    /// No contributor meets a role's requirement, even one level short.
    UnsatisfiableRole,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates the input data for a staffing problem.
///
/// Checks:
/// 1. No duplicate contributor names
/// 2. No duplicate project names
/// 3. Every project has at least one role and a positive duration
/// 4. Every role is reachable by some contributor, counting one level of
///    mentoring (initial ledgers only — growth during the run can unlock
///    more, so this check never reports false unfillability)
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_input(contributors: &[Contributor], projects: &[Project]) -> ValidationResult {
    let mut errors = Vec::new();

    let mut contributor_names = HashSet::new();
    for c in contributors {
        if !contributor_names.insert(c.name.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateName,
                format!("Duplicate contributor name: {}", c.name),
            ));
        }
    }

    let mut project_names = HashSet::new();
    for p in projects {
        if !project_names.insert(p.name.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateName,
                format!("Duplicate project name: {}", p.name),
            ));
        }

        if p.roles.is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptyRoles,
                format!("Project '{}' has no roles", p.name),
            ));
        }

        if p.duration_days == 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::ZeroDuration,
                format!("Project '{}' has zero duration", p.name),
            ));
        }

        for role in &p.roles {
            let reachable = contributors.iter().any(|c| {
                c.skill_level(&role.skill)
                    .is_some_and(|level| level + 1 >= role.min_level)
            });
            if !reachable {
                errors.push(ValidationError::new(
                    ValidationErrorKind::UnsatisfiableRole,
                    format!(
                        "Project '{}' role {} level {} exceeds every contributor, even mentored",
                        p.name, role.skill, role.min_level
                    ),
                ));
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
