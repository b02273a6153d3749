//! Staffing domain models.
//!
//! Core data types for the assignment-and-simulation engine: contributors
//! with skill ledgers, projects with role requirements, and the schedule
//! produced by a run.
//!
//! Runtime state is deliberately split from the value types: `Project` is
//! immutable after parsing, while status, start day, and staffing live in
//! the scheduler; `Contributor` carries only the exclusive `busy` flag.

mod contributor;
mod project;
mod schedule;

pub use contributor::{Contributor, SkillLedger};
pub use project::{Project, ProjectStatus, Role};
pub use schedule::{PlannedProject, Schedule};
