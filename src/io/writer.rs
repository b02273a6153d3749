//! Schedule output formats.
//!
//! Two renderings of a finished schedule:
//! - the submission format consumed by downstream graders (count line,
//!   then per staffed project its name and the contributor names in role
//!   order), and
//! - a human-readable report with per-project timing and score.

use std::fmt::Write as _;

use crate::models::Schedule;
use crate::scheduler::ScheduleKpi;

/// Renders the submission format.
///
/// ```text
/// <planned project count>
/// <project name>
/// <contributor names, space-separated, role order>
/// ...
/// ```
pub fn submission(schedule: &Schedule) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", schedule.planned_count());
    for plan in &schedule.plans {
        let _ = writeln!(out, "{}", plan.project);
        let _ = writeln!(out, "{}", plan.contributors.join(" "));
    }
    out
}

/// Renders a human-readable run report.
pub fn report(schedule: &Schedule, kpi: &ScheduleKpi) -> String {
    let mut out = String::new();
    for plan in &schedule.plans {
        let _ = writeln!(
            out,
            "{}: days {}..{}, score {}, team [{}]{}",
            plan.project,
            plan.start_day,
            plan.end_day,
            plan.score,
            plan.contributors.join(", "),
            if plan.mentees > 0 {
                format!(", {} mentored", plan.mentees)
            } else {
                String::new()
            }
        );
    }
    let _ = writeln!(
        out,
        "total score {} | {} completed ({} on time, {} late), {} never started | makespan {} days | {} mentorships",
        kpi.total_score,
        kpi.completed,
        kpi.on_time,
        kpi.late,
        kpi.never_started,
        kpi.makespan_days,
        kpi.mentee_promotions,
    );
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{PlannedProject, Project};

    fn sample() -> (Schedule, Vec<Project>) {
        let mut schedule = Schedule::new();
        let mut plan = PlannedProject::started("Logging", vec!["Anna".into(), "Bob".into()], 0);
        plan.end_day = 5;
        plan.score = 10;
        plan.mentees = 1;
        schedule.add_plan(plan);
        schedule.accrue(10);
        let projects = vec![Project::new("Logging", 5, 10, 5).with_role("C++", 1).with_role("HTML", 1)];
        (schedule, projects)
    }

    #[test]
    fn test_submission_format() {
        let (schedule, _) = sample();
        assert_eq!(submission(&schedule), "1\nLogging\nAnna Bob\n");
    }

    #[test]
    fn test_submission_empty() {
        assert_eq!(submission(&Schedule::new()), "0\n");
    }

    #[test]
    fn test_report_mentions_team_and_totals() {
        let (schedule, projects) = sample();
        let kpi = ScheduleKpi::calculate(&schedule, &projects);
        let text = report(&schedule, &kpi);
        assert!(text.contains("Logging: days 0..5, score 10"));
        assert!(text.contains("Anna, Bob"));
        assert!(text.contains("1 mentored"));
        assert!(text.contains("total score 10"));
    }
}
