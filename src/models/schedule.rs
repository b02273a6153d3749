//! Schedule (solution) model.
//!
//! A schedule is the simulation's output: the ordered list of projects
//! that were actually staffed, each with its contributor sequence in role
//! order, plus the accrued total score.

use serde::{Deserialize, Serialize};

/// One staffed project in the schedule.
///
/// Created when the project starts; completion fields (`end_day`, `score`,
/// `mentees`) are filled in when it finishes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlannedProject {
    /// Project name.
    pub project: String,
    /// Assigned contributor names, one per role, in role order.
    pub contributors: Vec<String>,
    /// Day the project started.
    pub start_day: u32,
    /// Day the project finished (`start_day + duration_days`).
    pub end_day: u32,
    /// Score accrued at completion (after best-before decay).
    pub score: i64,
    /// Number of contributors mentored on this assignment.
    pub mentees: u32,
}

impl PlannedProject {
    /// Records a project start.
    pub fn started(project: impl Into<String>, contributors: Vec<String>, start_day: u32) -> Self {
        Self {
            project: project.into(),
            contributors,
            start_day,
            end_day: start_day,
            score: 0,
            mentees: 0,
        }
    }

    /// Days from start to completion.
    pub fn duration_days(&self) -> u32 {
        self.end_day - self.start_day
    }
}

/// A complete schedule: planned projects in start order plus total score.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Schedule {
    /// Staffed projects in the order they started.
    pub plans: Vec<PlannedProject>,
    /// Sum of per-project completion scores.
    pub total_score: i64,
}

impl Schedule {
    /// Creates an empty schedule.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a planned project and returns its index.
    pub fn add_plan(&mut self, plan: PlannedProject) -> usize {
        self.plans.push(plan);
        self.plans.len() - 1
    }

    /// Accrues score from a finishing project.
    pub fn accrue(&mut self, score: i64) {
        self.total_score += score;
    }

    /// Number of projects that were staffed.
    pub fn planned_count(&self) -> usize {
        self.plans.len()
    }

    /// Finds the plan for a given project.
    pub fn plan_for(&self, project: &str) -> Option<&PlannedProject> {
        self.plans.iter().find(|p| p.project == project)
    }

    /// Contributor names assigned to a project, in role order.
    pub fn contributors_for(&self, project: &str) -> Option<&[String]> {
        self.plan_for(project).map(|p| p.contributors.as_slice())
    }

    /// Latest completion day across all plans (0 for an empty schedule).
    pub fn makespan_days(&self) -> u32 {
        self.plans.iter().map(|p| p.end_day).max().unwrap_or(0)
    }

    /// All plans a contributor took part in.
    pub fn plans_for_contributor(&self, name: &str) -> Vec<&PlannedProject> {
        self.plans
            .iter()
            .filter(|p| p.contributors.iter().any(|c| c == name))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_schedule() -> Schedule {
        let mut s = Schedule::new();
        let mut a = PlannedProject::started("Logging", vec!["Anna".into(), "Bob".into()], 0);
        a.end_day = 5;
        a.score = 10;
        s.add_plan(a);
        s.accrue(10);

        let mut b = PlannedProject::started("WebChat", vec!["Bob".into()], 5);
        b.end_day = 15;
        b.score = 8;
        b.mentees = 1;
        s.add_plan(b);
        s.accrue(8);
        s
    }

    #[test]
    fn test_totals() {
        let s = sample_schedule();
        assert_eq!(s.total_score, 18);
        assert_eq!(s.planned_count(), 2);
        assert_eq!(s.makespan_days(), 15);
    }

    #[test]
    fn test_plan_lookup() {
        let s = sample_schedule();
        let plan = s.plan_for("Logging").unwrap();
        assert_eq!(plan.duration_days(), 5);
        assert_eq!(
            s.contributors_for("Logging").unwrap(),
            &["Anna".to_string(), "Bob".to_string()]
        );
        assert!(s.plan_for("Missing").is_none());
    }

    #[test]
    fn test_plans_for_contributor() {
        let s = sample_schedule();
        assert_eq!(s.plans_for_contributor("Bob").len(), 2);
        assert_eq!(s.plans_for_contributor("Anna").len(), 1);
        assert!(s.plans_for_contributor("Eve").is_empty());
    }

    #[test]
    fn test_empty_schedule() {
        let s = Schedule::new();
        assert_eq!(s.total_score, 0);
        assert_eq!(s.makespan_days(), 0);
        assert_eq!(s.planned_count(), 0);
    }

    #[test]
    fn test_schedule_json_round_trip() {
        let s = sample_schedule();
        let json = serde_json::to_string(&s).unwrap();
        let back: Schedule = serde_json::from_str(&json).unwrap();
        assert_eq!(back.total_score, s.total_score);
        assert_eq!(back.plans.len(), s.plans.len());
        assert_eq!(back.plans[1].mentees, 1);
    }
}
