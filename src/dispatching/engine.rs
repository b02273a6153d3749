//! Rule engine for multi-criteria project ordering.
//!
//! Composes dispatching rules in sequence: the next rule is consulted only
//! when all earlier rules tie (within epsilon). Remaining ties fall through
//! to the final tie-breaker.

use std::sync::Arc;

use super::{DispatchContext, DispatchingRule, RuleScore};
use crate::models::Project;

/// How ties are broken after all rules are exhausted.
#[derive(Debug, Clone, Default)]
pub enum TieBreaker {
    /// Keep input order (registration order — the sort is stable).
    #[default]
    Registration,
    /// Deterministic by project name (lexicographic).
    ByName,
}

/// A composable rule engine for project start ordering.
///
/// # Example
/// ```
/// use teamplan::dispatching::RuleEngine;
/// use teamplan::dispatching::rules;
///
/// let engine = RuleEngine::new()
///     .with_rule(rules::EarliestBestBefore)
///     .with_tie_breaker(rules::HighestScore);
/// ```
#[derive(Clone)]
pub struct RuleEngine {
    rules: Vec<Arc<dyn DispatchingRule>>,
    tie_breaker: TieBreaker,
    epsilon: f64,
}

impl RuleEngine {
    /// Creates an empty rule engine.
    pub fn new() -> Self {
        Self {
            rules: Vec::new(),
            tie_breaker: TieBreaker::Registration,
            epsilon: 1e-9,
        }
    }

    /// Adds a rule. Rules are consulted in insertion order.
    pub fn with_rule<R: DispatchingRule + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Arc::new(rule));
        self
    }

    /// Adds a tie-breaking rule (alias of [`with_rule`](Self::with_rule),
    /// named for intent at call sites).
    pub fn with_tie_breaker<R: DispatchingRule + 'static>(self, rule: R) -> Self {
        self.with_rule(rule)
    }

    /// Sets the final tie-breaking strategy.
    pub fn with_final_tie_breaker(mut self, tie_breaker: TieBreaker) -> Self {
        self.tie_breaker = tie_breaker;
        self
    }

    /// Sorts projects by start priority (first = attempted first).
    ///
    /// Returns indices into the project slice. The sort is stable, so
    /// full ties under [`TieBreaker::Registration`] preserve input order.
    pub fn sort_indices(&self, projects: &[Project], context: &DispatchContext) -> Vec<usize> {
        let mut indices: Vec<usize> = (0..projects.len()).collect();
        indices.sort_by(|&a, &b| self.compare(&projects[a], &projects[b], context));
        indices
    }

    /// Returns the index of the highest-priority project.
    pub fn select_best(&self, projects: &[Project], context: &DispatchContext) -> Option<usize> {
        self.sort_indices(projects, context).first().copied()
    }

    /// Evaluates a single project against every rule.
    pub fn evaluate(&self, project: &Project, context: &DispatchContext) -> Vec<RuleScore> {
        self.rules
            .iter()
            .map(|rule| rule.evaluate(project, context))
            .collect()
    }

    fn compare(&self, a: &Project, b: &Project, context: &DispatchContext) -> std::cmp::Ordering {
        for rule in &self.rules {
            let score_a = rule.evaluate(a, context);
            let score_b = rule.evaluate(b, context);

            if (score_a - score_b).abs() > self.epsilon {
                return score_a
                    .partial_cmp(&score_b)
                    .unwrap_or(std::cmp::Ordering::Equal);
            }
        }

        match &self.tie_breaker {
            TieBreaker::Registration => std::cmp::Ordering::Equal,
            TieBreaker::ByName => a.name.cmp(&b.name),
        }
    }
}

impl Default for RuleEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for RuleEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuleEngine")
            .field(
                "rules",
                &self.rules.iter().map(|r| r.name()).collect::<Vec<_>>(),
            )
            .field("tie_breaker", &self.tie_breaker)
            .finish()
    }
}
