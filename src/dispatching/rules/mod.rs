//! Built-in dispatching rules.
//!
//! # Categories
//!
//! - **Deadline**: EBB (earliest best-before, the default), SLACK
//! - **Duration**: SPT, LPT
//! - **Score**: SCORE, SPD (score per contributor-day)
//! - **Staffing**: FR (fewest roles), FIT (pool fit)
//!
//! # Score Convention
//! All rules return lower scores for projects that should be attempted first.

use super::{DispatchContext, DispatchingRule, RuleScore};
use crate::models::Project;

// ======================== Deadline rules ========================

/// Earliest Best-Before.
///
/// Attempts projects with earlier best-before days first. The baseline
/// greedy policy: late completions decay, so tight deadlines go first.
#[derive(Debug, Clone, Copy)]
pub struct EarliestBestBefore;

impl DispatchingRule for EarliestBestBefore {
    fn name(&self) -> &'static str {
        "EBB"
    }

    fn evaluate(&self, project: &Project, _context: &DispatchContext) -> RuleScore {
        project.best_before_key() as f64
    }

    fn description(&self) -> &'static str {
        "Earliest Best-Before"
    }
}

/// Least Slack.
///
/// Slack = best_before_day - current_day - duration_days. Projects whose
/// on-time window is closing fastest go first; already-late projects get
/// negative slack and jump the queue.
#[derive(Debug, Clone, Copy)]
pub struct LeastSlack;

impl DispatchingRule for LeastSlack {
    fn name(&self) -> &'static str {
        "SLACK"
    }

    fn evaluate(&self, project: &Project, context: &DispatchContext) -> RuleScore {
        project.best_before_day as f64 - context.current_day as f64 - project.duration_days as f64
    }

    fn description(&self) -> &'static str {
        "Least Slack"
    }
}

// ======================== Duration rules ========================

/// Shortest Duration.
///
/// Attempts short projects first, releasing contributors back to the pool
/// sooner.
#[derive(Debug, Clone, Copy)]
pub struct ShortestDuration;

impl DispatchingRule for ShortestDuration {
    fn name(&self) -> &'static str {
        "SPT"
    }

    fn evaluate(&self, project: &Project, _context: &DispatchContext) -> RuleScore {
        project.duration_days as f64
    }

    fn description(&self) -> &'static str {
        "Shortest Duration"
    }
}

/// Longest Duration.
///
/// Attempts long projects first, useful when long projects would otherwise
/// starve behind a stream of short ones.
#[derive(Debug, Clone, Copy)]
pub struct LongestDuration;

impl DispatchingRule for LongestDuration {
    fn name(&self) -> &'static str {
        "LPT"
    }

    fn evaluate(&self, project: &Project, _context: &DispatchContext) -> RuleScore {
        -(project.duration_days as f64)
    }

    fn description(&self) -> &'static str {
        "Longest Duration"
    }
}

// ======================== Score rules ========================

/// Highest Score.
///
/// Attempts the highest base-score projects first.
#[derive(Debug, Clone, Copy)]
pub struct HighestScore;

impl DispatchingRule for HighestScore {
    fn name(&self) -> &'static str {
        "SCORE"
    }

    fn evaluate(&self, project: &Project, _context: &DispatchContext) -> RuleScore {
        -(project.base_score as f64)
    }

    fn description(&self) -> &'static str {
        "Highest Base Score"
    }
}

/// Score per contributor-day.
///
/// Attempts the projects with the best score-to-effort ratio first, where
/// effort = roles × duration. Zero-effort projects sort last.
#[derive(Debug, Clone, Copy)]
pub struct ScorePerDay;

impl DispatchingRule for ScorePerDay {
    fn name(&self) -> &'static str {
        "SPD"
    }

    fn evaluate(&self, project: &Project, _context: &DispatchContext) -> RuleScore {
        let effort = project.role_count() as f64 * project.duration_days as f64;
        if effort <= 0.0 {
            return f64::MAX;
        }
        -(project.base_score as f64 / effort)
    }

    fn description(&self) -> &'static str {
        "Score per Contributor-Day"
    }
}

// ======================== Staffing rules ========================

/// Fewest Roles.
///
/// Attempts small teams first; they are the easiest to staff from a
/// shrinking pool.
#[derive(Debug, Clone, Copy)]
pub struct FewestRoles;

impl DispatchingRule for FewestRoles {
    fn name(&self) -> &'static str {
        "FR"
    }

    fn evaluate(&self, project: &Project, _context: &DispatchContext) -> RuleScore {
        project.role_count() as f64
    }

    fn description(&self) -> &'static str {
        "Fewest Roles"
    }
}

/// Pool Fit.
///
/// Deprioritizes projects that need more contributors than are currently
/// free; they cannot possibly be staffed today.
#[derive(Debug, Clone, Copy)]
pub struct PoolFit;

impl DispatchingRule for PoolFit {
    fn name(&self) -> &'static str {
        "FIT"
    }

    fn evaluate(&self, project: &Project, context: &DispatchContext) -> RuleScore {
        if project.role_count() <= context.free_contributors {
            0.0
        } else {
            1.0
        }
    }

    fn description(&self) -> &'static str {
        "Pool Fit"
    }
}
