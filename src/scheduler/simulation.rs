//! Day-stepped greedy simulation.
//!
//! # Algorithm
//!
//! Per day `d` (starting at 0):
//! 1. **Finish phase**: every in-progress project with
//!    `start_day + duration_days == d` completes — contributors are
//!    released, mentees gain one level in their role's skill, and the
//!    score (decayed past the best-before day) accrues.
//! 2. **Start phase**: every not-yet-started project that could still earn
//!    a positive score is attempted, in the order given by the rule engine
//!    (default: earliest best-before first, ties by registration order).
//!    Each successful start removes its contributors from the free pool
//!    before the next attempt.
//! 3. Advance the clock.
//!
//! The loop stops at the fixed point: once nothing is in progress after a
//! start phase, no contributor will ever be released and no skill will
//! ever grow, so no further state change is possible. Starts are also
//! bounded so completions land within `max(best_before) + max(duration)`
//! days, which caps the run length for any finite input.
//!
//! Staffing failure is a normal outcome, never an error: an unfillable
//! project simply never starts and earns zero.

use tracing::{debug, trace};

use crate::dispatching::{rules, DispatchContext, RuleEngine};
use crate::models::{Contributor, PlannedProject, Project, ProjectStatus, Schedule};

use super::matcher::{try_staff, MatchPolicy, Staffing};
use super::scoring::completion_score;

/// Per-project runtime state. Lives here, not on the immutable `Project`.
#[derive(Debug, Clone)]
struct ProjectState {
    status: ProjectStatus,
    start_day: u32,
    staffing: Option<Staffing>,
    plan: Option<usize>,
}

impl ProjectState {
    fn not_started() -> Self {
        Self {
            status: ProjectStatus::NotStarted,
            start_day: 0,
            staffing: None,
            plan: None,
        }
    }
}

/// Greedy day-stepped staffing simulation.
///
/// Single-threaded by design: the finish-before-start ordering within each
/// day, and the serialized contributor claims within the start phase, are
/// what make the busy invariant hold without locking.
///
/// # Example
///
/// ```
/// use teamplan::models::{Contributor, Project};
/// use teamplan::scheduler::Simulation;
///
/// let contributors = vec![Contributor::new("Ana").with_skill("C++", 3)];
/// let projects = vec![Project::new("P", 1, 10, 2).with_role("C++", 3)];
///
/// let schedule = Simulation::new().run(&contributors, &projects);
/// assert_eq!(schedule.total_score, 10);
/// assert_eq!(schedule.contributors_for("P").unwrap(), ["Ana"]);
/// ```
#[derive(Debug, Clone)]
pub struct Simulation {
    engine: RuleEngine,
    policy: MatchPolicy,
}

impl Simulation {
    /// Creates a simulation with the baseline policy: earliest
    /// best-before ordering and a single-level mentoring gap.
    pub fn new() -> Self {
        Self {
            engine: RuleEngine::new().with_rule(rules::EarliestBestBefore),
            policy: MatchPolicy::default(),
        }
    }

    /// Replaces the start-order rule engine.
    pub fn with_rule_engine(mut self, engine: RuleEngine) -> Self {
        self.engine = engine;
        self
    }

    /// Replaces the matching policy.
    pub fn with_policy(mut self, policy: MatchPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Runs the simulation to its fixed point.
    ///
    /// Inputs are cloned into working state; registration order of both
    /// slices is the deterministic tie-break order throughout. Any busy
    /// flags on the input contributors are ignored.
    pub fn run(&self, contributors: &[Contributor], projects: &[Project]) -> Schedule {
        let mut workers: Vec<Contributor> = contributors.to_vec();
        for w in &mut workers {
            w.busy = false;
        }
        let mut states: Vec<ProjectState> = vec![ProjectState::not_started(); projects.len()];
        let mut schedule = Schedule::new();

        // Starts are capped so every completion lands within this bound.
        let horizon = projects.iter().map(|p| p.best_before_day).max().unwrap_or(0)
            + projects.iter().map(|p| p.duration_days).max().unwrap_or(0);

        let mut day = 0u32;
        loop {
            self.finish_due(day, projects, &mut states, &mut workers, &mut schedule);
            self.start_eligible(day, horizon, projects, &mut states, &mut workers, &mut schedule);

            // Fixed point: with nothing in progress, the pool and every
            // skill ledger are frozen, and eligibility windows only close.
            if !states.iter().any(|s| s.status == ProjectStatus::InProgress) {
                break;
            }
            day += 1;
        }

        debug!(
            days = day,
            planned = schedule.planned_count(),
            total_score = schedule.total_score,
            "simulation reached fixed point"
        );
        schedule
    }

    /// Finish phase: completes projects whose duration has elapsed, in
    /// project registration order.
    fn finish_due(
        &self,
        day: u32,
        projects: &[Project],
        states: &mut [ProjectState],
        workers: &mut [Contributor],
        schedule: &mut Schedule,
    ) {
        for (idx, project) in projects.iter().enumerate() {
            let state = &mut states[idx];
            if state.status != ProjectStatus::InProgress
                || state.start_day + project.duration_days != day
            {
                continue;
            }

            // An in-progress project is always fully staffed.
            let Some(staffing) = state.staffing.as_ref() else {
                continue;
            };
            for (slot, &widx) in staffing.assigned.iter().enumerate() {
                workers[widx].busy = false;
                if staffing.mentees[slot] {
                    workers[widx].skills.raise(&project.roles[slot].skill);
                }
            }

            let score = completion_score(project, day);
            schedule.accrue(score);
            if let Some(plan_idx) = state.plan {
                let plan = &mut schedule.plans[plan_idx];
                plan.end_day = day;
                plan.score = score;
                plan.mentees = staffing.mentee_count();
            }
            state.status = ProjectStatus::Finished;
            debug!(project = %project.name, day, score, "project finished");
        }
    }

    /// Start phase: attempts every eligible not-started project, most
    /// urgent first, shrinking the free pool as attempts succeed.
    fn start_eligible(
        &self,
        day: u32,
        horizon: u32,
        projects: &[Project],
        states: &mut [ProjectState],
        workers: &mut [Contributor],
        schedule: &mut Schedule,
    ) {
        let free = workers.iter().filter(|w| !w.busy).count();
        let context = DispatchContext::at_day(day).with_free_contributors(free);

        for idx in self.engine.sort_indices(projects, &context) {
            if states[idx].status != ProjectStatus::NotStarted {
                continue;
            }
            let project = &projects[idx];
            if !project.startable_on(day) || day + project.duration_days > horizon {
                continue;
            }

            let Some(staffing) = try_staff(project, workers, self.policy) else {
                trace!(project = %project.name, day, "staffing attempt failed");
                continue;
            };

            let names: Vec<String> = staffing
                .assigned
                .iter()
                .map(|&widx| workers[widx].name.clone())
                .collect();
            for &widx in &staffing.assigned {
                workers[widx].busy = true;
            }
            debug!(project = %project.name, day, team = ?names, "project started");

            states[idx].plan = Some(schedule.add_plan(PlannedProject::started(
                &project.name,
                names,
                day,
            )));
            states[idx].status = ProjectStatus::InProgress;
            states[idx].start_day = day;
            states[idx].staffing = Some(staffing);
        }
    }
}

impl Default for Simulation {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatching::rules;

    #[test]
    fn test_exact_fit_scenario() {
        // 1 contributor, 1 project: starts day 0, finishes day 1, full score.
        let contributors = vec![Contributor::new("Ana").with_skill("C++", 3)];
        let projects = vec![Project::new("P", 1, 10, 2).with_role("C++", 3)];

        let schedule = Simulation::new().run(&contributors, &projects);
        assert_eq!(schedule.total_score, 10);
        assert_eq!(schedule.planned_count(), 1);
        let plan = schedule.plan_for("P").unwrap();
        assert_eq!(plan.start_day, 0);
        assert_eq!(plan.end_day, 1);
        assert_eq!(plan.contributors, vec!["Ana".to_string()]);
    }

    #[test]
    fn test_mentorship_levels_up() {
        // Bo is one level short: accepted as mentee, C++ becomes 3 at
        // completion, which the second project's C++ 3 role then needs.
        let contributors = vec![Contributor::new("Bo").with_skill("C++", 2)];
        let projects = vec![
            Project::new("First", 2, 10, 5).with_role("C++", 3),
            Project::new("Second", 2, 10, 20).with_role("C++", 4),
        ];

        let schedule = Simulation::new().run(&contributors, &projects);
        assert_eq!(schedule.planned_count(), 2);

        let first = schedule.plan_for("First").unwrap();
        assert_eq!(first.mentees, 1);
        assert_eq!(first.end_day, 2);

        // "Second" requires C++ 4; Bo at 2 is ineligible until mentored
        // to 3 on "First", then fills it as mentee again.
        let second = schedule.plan_for("Second").unwrap();
        assert_eq!(second.start_day, 2);
        assert_eq!(second.mentees, 1);
    }

    #[test]
    fn test_unfillable_role_never_starts() {
        // Gap of 2: the project never starts, the contributor stays free
        // for other work, total score is unaffected.
        let contributors = vec![Contributor::new("Cal").with_skill("C++", 1)];
        let projects = vec![
            Project::new("TooHard", 1, 100, 10).with_role("C++", 3),
            Project::new("Doable", 1, 5, 10).with_role("C++", 1),
        ];

        let schedule = Simulation::new().run(&contributors, &projects);
        assert!(schedule.plan_for("TooHard").is_none());
        assert_eq!(schedule.total_score, 5);
        assert_eq!(schedule.plan_for("Doable").unwrap().start_day, 0);
    }

    #[test]
    fn test_late_completion_decay() {
        // Duration 5, best-before 3, base 20: finishes day 5, score 18.
        let contributors = vec![Contributor::new("Dee").with_skill("Go", 2)];
        let projects = vec![Project::new("P", 5, 20, 3).with_role("Go", 2)];

        let schedule = Simulation::new().run(&contributors, &projects);
        assert_eq!(schedule.total_score, 18);
        assert_eq!(schedule.plan_for("P").unwrap().end_day, 5);
    }

    #[test]
    fn test_no_contributor_in_two_projects_at_once() {
        // One qualified contributor, two single-role projects: they must
        // run back to back, never overlapping.
        let contributors = vec![Contributor::new("Eva").with_skill("C++", 5)];
        let projects = vec![
            Project::new("A", 3, 10, 10).with_role("C++", 1),
            Project::new("B", 3, 10, 10).with_role("C++", 1),
        ];

        let schedule = Simulation::new().run(&contributors, &projects);
        assert_eq!(schedule.planned_count(), 2);
        let a = schedule.plan_for("A").unwrap();
        let b = schedule.plan_for("B").unwrap();
        assert!(a.end_day <= b.start_day || b.end_day <= a.start_day);
    }

    #[test]
    fn test_same_day_starts_shrink_pool() {
        // Two projects, two contributors: both start day 0 on different
        // people; the second attempt sees the shrunken pool.
        let contributors = vec![
            Contributor::new("Fay").with_skill("C++", 3),
            Contributor::new("Gil").with_skill("C++", 3),
        ];
        let projects = vec![
            Project::new("A", 2, 10, 10).with_role("C++", 1),
            Project::new("B", 2, 10, 10).with_role("C++", 1),
        ];

        let schedule = Simulation::new().run(&contributors, &projects);
        assert_eq!(schedule.plan_for("A").unwrap().start_day, 0);
        assert_eq!(schedule.plan_for("B").unwrap().start_day, 0);
        assert_eq!(schedule.contributors_for("A").unwrap(), ["Fay"]);
        assert_eq!(schedule.contributors_for("B").unwrap(), ["Gil"]);
    }

    #[test]
    fn test_earliest_best_before_wins_contention() {
        // One contributor, two projects contending on day 0: the tighter
        // deadline goes first even though it was registered second.
        let contributors = vec![Contributor::new("Hal").with_skill("C++", 3)];
        let projects = vec![
            Project::new("Loose", 2, 10, 50).with_role("C++", 1),
            Project::new("Tight", 2, 10, 5).with_role("C++", 1),
        ];

        let schedule = Simulation::new().run(&contributors, &projects);
        assert_eq!(schedule.plan_for("Tight").unwrap().start_day, 0);
        assert_eq!(schedule.plan_for("Loose").unwrap().start_day, 2);
    }

    #[test]
    fn test_custom_rule_engine() {
        // HighestScore ordering flips the contention winner.
        let contributors = vec![Contributor::new("Ivy").with_skill("C++", 3)];
        let projects = vec![
            Project::new("Cheap", 2, 1, 50).with_role("C++", 1),
            Project::new("Rich", 2, 100, 50).with_role("C++", 1),
        ];

        let engine = RuleEngine::new().with_rule(rules::HighestScore);
        let schedule = Simulation::new().with_rule_engine(engine).run(&contributors, &projects);
        assert_eq!(schedule.plan_for("Rich").unwrap().start_day, 0);
        assert_eq!(schedule.plan_for("Cheap").unwrap().start_day, 2);
    }

    #[test]
    fn test_worthless_start_skipped() {
        // By the time the pool frees up, the late project could only earn
        // zero, so it is never started.
        let contributors = vec![Contributor::new("Jo").with_skill("C++", 3)];
        let projects = vec![
            Project::new("Long", 10, 100, 3).with_role("C++", 1),
            // Positive only if started by day 4 (5 + 2 - 2 - 1).
            Project::new("Fleeting", 2, 2, 5).with_role("C++", 1),
        ];

        let schedule = Simulation::new().run(&contributors, &projects);
        // "Long" has the earlier best-before and claims Jo through day 10;
        // by then "Fleeting" can only earn zero, so it is never started.
        assert_eq!(schedule.plan_for("Long").unwrap().start_day, 0);
        assert!(schedule.plan_for("Fleeting").is_none());
        assert_eq!(schedule.total_score, 93); // 100 - 7 days late
    }

    #[test]
    fn test_zero_score_project_never_attempted() {
        let contributors = vec![Contributor::new("Kim").with_skill("C++", 3)];
        let projects = vec![Project::new("Nothing", 1, 0, 10).with_role("C++", 1)];

        let schedule = Simulation::new().run(&contributors, &projects);
        assert_eq!(schedule.planned_count(), 0);
        assert_eq!(schedule.total_score, 0);
    }

    #[test]
    fn test_termination_bound() {
        // Loop must halt within max(best_before) + max(duration) days even
        // when nothing can ever start.
        let contributors = vec![Contributor::new("Lu").with_skill("C++", 1)];
        let projects = vec![
            Project::new("Impossible", 7, 50, 90).with_role("Fortran", 9),
            Project::new("Fine", 4, 10, 30).with_role("C++", 1),
        ];

        let schedule = Simulation::new().run(&contributors, &projects);
        assert!(schedule.makespan_days() <= 90 + 7);
        assert_eq!(schedule.planned_count(), 1);
    }

    #[test]
    fn test_empty_inputs() {
        let schedule = Simulation::new().run(&[], &[]);
        assert_eq!(schedule.planned_count(), 0);
        assert_eq!(schedule.total_score, 0);
    }

    #[test]
    fn test_input_busy_flags_ignored() {
        let mut ana = Contributor::new("Ana").with_skill("C++", 3);
        ana.busy = true;
        let projects = vec![Project::new("P", 1, 10, 2).with_role("C++", 3)];

        let schedule = Simulation::new().run(&[ana], &projects);
        assert_eq!(schedule.planned_count(), 1);
    }

    #[test]
    fn test_mentoring_disabled_policy() {
        let contributors = vec![Contributor::new("Bo").with_skill("C++", 2)];
        let projects = vec![Project::new("P", 1, 10, 5).with_role("C++", 3)];

        let schedule = Simulation::new()
            .with_policy(MatchPolicy::with_mentor_gap(0))
            .run(&contributors, &projects);
        assert_eq!(schedule.planned_count(), 0);
    }

    #[test]
    fn test_multi_role_team_in_role_order() {
        let contributors = vec![
            Contributor::new("Anna").with_skill("C++", 2),
            Contributor::new("Bob").with_skill("HTML", 5).with_skill("CSS", 5),
            Contributor::new("Maria").with_skill("Python", 3),
        ];
        let projects = vec![Project::new("WebServer", 7, 10, 20)
            .with_role("Python", 3)
            .with_role("HTML", 3)];

        let schedule = Simulation::new().run(&contributors, &projects);
        // Contributor names come back in role order, not registration order.
        assert_eq!(
            schedule.contributors_for("WebServer").unwrap(),
            ["Maria", "Bob"]
        );
    }
}
