//! Completion scoring and schedule quality metrics.
//!
//! `completion_score` is the single place a finishing project's score is
//! computed: full base score on or before the best-before day, then linear
//! decay of one point per day late, floored at zero.
//!
//! `ScheduleKpi` aggregates a finished run for reporting: totals, on-time
//! rate, mentorship promotions, makespan.

use crate::models::{Project, Schedule};

/// Score earned by a project completing on `completion_day`.
///
/// Pure; invoked exactly once per finishing project.
pub fn completion_score(project: &Project, completion_day: u32) -> i64 {
    let base = project.base_score as i64;
    if completion_day <= project.best_before_day {
        base
    } else {
        let late = (completion_day - project.best_before_day) as i64;
        (base - late).max(0)
    }
}

/// Summary metrics for a completed run.
#[derive(Debug, Clone)]
pub struct ScheduleKpi {
    /// Total accrued score.
    pub total_score: i64,
    /// Projects that were staffed and ran to completion.
    pub completed: usize,
    /// Completed projects that finished on or before their best-before day.
    pub on_time: usize,
    /// Completed projects that finished late (decayed score).
    pub late: usize,
    /// Projects that never started.
    pub never_started: usize,
    /// Fraction of completed projects finishing on time (1.0 when none
    /// completed).
    pub on_time_rate: f64,
    /// Skill levels granted through mentorship.
    pub mentee_promotions: u32,
    /// Latest completion day (0 for an empty schedule).
    pub makespan_days: u32,
}

impl ScheduleKpi {
    /// Computes KPIs from a schedule and the full project catalog.
    pub fn calculate(schedule: &Schedule, projects: &[Project]) -> Self {
        let mut on_time = 0;
        let mut late = 0;
        let mut mentee_promotions = 0;

        for plan in &schedule.plans {
            mentee_promotions += plan.mentees;
            let best_before = projects
                .iter()
                .find(|p| p.name == plan.project)
                .map(|p| p.best_before_day);
            match best_before {
                Some(bb) if plan.end_day <= bb => on_time += 1,
                Some(_) => late += 1,
                None => {}
            }
        }

        let completed = schedule.planned_count();
        let on_time_rate = if completed == 0 {
            1.0
        } else {
            on_time as f64 / completed as f64
        };

        Self {
            total_score: schedule.total_score,
            completed,
            on_time,
            late,
            never_started: projects.len().saturating_sub(completed),
            on_time_rate,
            mentee_promotions,
            makespan_days: schedule.makespan_days(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PlannedProject;

    #[test]
    fn test_score_on_time() {
        let p = Project::new("P", 5, 20, 10);
        assert_eq!(completion_score(&p, 5), 20);
        assert_eq!(completion_score(&p, 10), 20);
    }

    #[test]
    fn test_score_decay_boundary() {
        let p = Project::new("P", 5, 20, 10);
        // score(best_before + k) == max(0, base - k)
        assert_eq!(completion_score(&p, 10), 20);
        assert_eq!(completion_score(&p, 11), 19);
        assert_eq!(completion_score(&p, 15), 15);
        assert_eq!(completion_score(&p, 30), 0);
        assert_eq!(completion_score(&p, 1000), 0);
    }

    #[test]
    fn test_score_late_scenario() {
        // Duration 5, best-before 3, base 20, started day 0, finishes day 5.
        let p = Project::new("P", 5, 20, 3);
        assert_eq!(completion_score(&p, 5), 18);
    }

    #[test]
    fn test_zero_base_score() {
        let p = Project::new("P", 1, 0, 5);
        assert_eq!(completion_score(&p, 1), 0);
        assert_eq!(completion_score(&p, 100), 0);
    }

    fn plan(name: &str, start: u32, end: u32, score: i64, mentees: u32) -> PlannedProject {
        let mut p = PlannedProject::started(name, vec!["X".into()], start);
        p.end_day = end;
        p.score = score;
        p.mentees = mentees;
        p
    }

    #[test]
    fn test_kpi_basic() {
        let projects = vec![
            Project::new("A", 5, 10, 10).with_role("s", 1),
            Project::new("B", 5, 10, 4).with_role("s", 1),
            Project::new("C", 5, 10, 10).with_role("s", 1), // never started
        ];
        let mut schedule = Schedule::new();
        schedule.add_plan(plan("A", 0, 5, 10, 0)); // On time
        schedule.accrue(10);
        schedule.add_plan(plan("B", 0, 5, 9, 2)); // One day late
        schedule.accrue(9);

        let kpi = ScheduleKpi::calculate(&schedule, &projects);
        assert_eq!(kpi.total_score, 19);
        assert_eq!(kpi.completed, 2);
        assert_eq!(kpi.on_time, 1);
        assert_eq!(kpi.late, 1);
        assert_eq!(kpi.never_started, 1);
        assert!((kpi.on_time_rate - 0.5).abs() < 1e-10);
        assert_eq!(kpi.mentee_promotions, 2);
        assert_eq!(kpi.makespan_days, 5);
    }

    #[test]
    fn test_kpi_empty() {
        let kpi = ScheduleKpi::calculate(&Schedule::new(), &[]);
        assert_eq!(kpi.total_score, 0);
        assert_eq!(kpi.completed, 0);
        assert_eq!(kpi.never_started, 0);
        assert!((kpi.on_time_rate - 1.0).abs() < 1e-10);
    }
}
