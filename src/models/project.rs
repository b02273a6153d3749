//! Project model.
//!
//! A project is a fixed-duration piece of work that needs every one of its
//! roles filled by exactly one contributor before it can start. Completing
//! it earns `base_score`, decaying one point per day past `best_before_day`.
//!
//! `Project` is an immutable value type: runtime state (status, start day,
//! staffing) lives in the scheduler, never on the project itself.

use serde::{Deserialize, Serialize};

/// A role a project needs filled: a skill name and a minimum level.
///
/// Role order within a project matters only for deterministic assignment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Role {
    /// Required skill name.
    pub skill: String,
    /// Minimum proficiency level.
    pub min_level: u32,
}

impl Role {
    /// Creates a role requirement.
    pub fn new(skill: impl Into<String>, min_level: u32) -> Self {
        Self {
            skill: skill.into(),
            min_level,
        }
    }
}

/// A project to be staffed and run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    /// Unique project name.
    pub name: String,
    /// Working days from start to completion.
    pub duration_days: u32,
    /// Score for completing on or before `best_before_day`.
    pub base_score: u32,
    /// Day by which completion earns the full score.
    pub best_before_day: u32,
    /// Roles to fill, in assignment order.
    pub roles: Vec<Role>,
}

/// Project lifecycle state. Transitions are monotonic:
/// `NotStarted → InProgress → Finished`, no restarts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProjectStatus {
    /// Not yet staffed.
    NotStarted,
    /// Fully staffed and running.
    InProgress,
    /// Completed; score accrued and contributors released.
    Finished,
}

impl Project {
    /// Creates a project with no roles.
    pub fn new(
        name: impl Into<String>,
        duration_days: u32,
        base_score: u32,
        best_before_day: u32,
    ) -> Self {
        Self {
            name: name.into(),
            duration_days,
            base_score,
            best_before_day,
            roles: Vec::new(),
        }
    }

    /// Adds a role requirement.
    pub fn with_role(mut self, skill: impl Into<String>, min_level: u32) -> Self {
        self.roles.push(Role::new(skill, min_level));
        self
    }

    /// Number of roles.
    pub fn role_count(&self) -> usize {
        self.roles.len()
    }

    /// Explicit sort key for earliest-deadline-first ordering.
    ///
    /// Kept as a named method so ordering intent is visible at call sites
    /// instead of being derived from field order.
    pub fn best_before_key(&self) -> u32 {
        self.best_before_day
    }

    /// Last day on which starting this project can still earn a positive
    /// score, or `None` if no start ever can (zero base score).
    ///
    /// Starting on day `d` completes on `d + duration_days`; the decayed
    /// score is positive iff `d + duration_days - best_before_day <
    /// base_score`.
    pub fn last_useful_start_day(&self) -> Option<u32> {
        if self.base_score == 0 {
            return None;
        }
        let bound = self.best_before_day as i64 + self.base_score as i64
            - self.duration_days as i64
            - 1;
        if bound < 0 {
            None
        } else {
            Some(bound as u32)
        }
    }

    /// Whether a start on day `day` could still earn a positive score.
    pub fn startable_on(&self, day: u32) -> bool {
        self.last_useful_start_day()
            .is_some_and(|last| day <= last)
    }
}
