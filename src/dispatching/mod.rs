//! Dispatching rules for project start ordering.
//!
//! Each day the simulation attempts to start the not-yet-started projects
//! in some order, and that order is the main policy knob of the greedy
//! engine. The default is earliest best-before first; this module provides
//! the rule trait, a set of built-in rules, and a composable engine for
//! multi-criteria orderings.
//!
//! # Usage
//!
//! ```
//! use teamplan::dispatching::{RuleEngine, DispatchContext};
//! use teamplan::dispatching::rules;
//!
//! let engine = RuleEngine::new()
//!     .with_rule(rules::EarliestBestBefore)
//!     .with_tie_breaker(rules::ShortestDuration);
//!
//! let context = DispatchContext::at_day(0);
//! // let order = engine.sort_indices(&projects, &context);
//! ```

mod context;
mod engine;
pub mod rules;

pub use context::DispatchContext;
pub use engine::{RuleEngine, TieBreaker};

use crate::models::Project;
use std::fmt::Debug;

/// Score returned by a dispatching rule.
///
/// Lower scores = attempted first, so earliest-deadline-first returns the
/// deadline itself.
pub type RuleScore = f64;

/// A rule that orders projects for start attempts.
///
/// # Score Convention
/// **Lower score = attempted first.** Rules should return smaller values
/// for projects that should be staffed before the free pool shrinks.
pub trait DispatchingRule: Send + Sync + Debug {
    /// Rule name (e.g., "EBB", "SPT").
    fn name(&self) -> &'static str;

    /// Evaluates a project's start priority for the current day.
    ///
    /// Returns a score where lower = attempted earlier.
    fn evaluate(&self, project: &Project, context: &DispatchContext) -> RuleScore;

    /// Rule description.
    fn description(&self) -> &'static str {
        self.name()
    }
}
