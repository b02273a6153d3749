//! Role matching: all-or-nothing project staffing.
//!
//! Given a project and the current contributor pool, finds one free
//! contributor per role. A contributor qualifies for a role outright when
//! their level meets the requirement, or as a *mentee* when they hold the
//! skill within the policy's mentoring gap below it (default: exactly one
//! level short). Qualified candidates are preferred over mentees; ties go
//! to registration order.
//!
//! Staffing is atomic: if any role cannot be filled, the attempt fails
//! with no side effect. Busy flags are flipped by the caller only after a
//! successful match.

use crate::models::{Contributor, Project};

/// Matching policy knobs.
#[derive(Debug, Clone, Copy)]
pub struct MatchPolicy {
    /// Maximum level shortfall bridgeable by mentorship. 0 disables
    /// mentoring; the baseline is 1 (a single-level gap).
    pub mentor_gap: u32,
}

impl Default for MatchPolicy {
    fn default() -> Self {
        Self { mentor_gap: 1 }
    }
}

impl MatchPolicy {
    /// Policy with a custom mentoring gap.
    pub fn with_mentor_gap(mentor_gap: u32) -> Self {
        Self { mentor_gap }
    }
}

/// A successful staffing: one contributor index per role, in role order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Staffing {
    /// Contributor index (into the pool slice) per role.
    pub assigned: Vec<usize>,
    /// Whether the contributor in each role slot is mentored.
    pub mentees: Vec<bool>,
}

impl Staffing {
    /// Number of mentored slots.
    pub fn mentee_count(&self) -> u32 {
        self.mentees.iter().filter(|&&m| m).count() as u32
    }
}

/// How a contributor relates to a role requirement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Eligibility {
    /// Level meets or exceeds the requirement.
    Qualified,
    /// Skill held within the mentoring gap below the requirement.
    Mentee,
    /// Skill absent or too far below the requirement.
    Ineligible,
}

fn eligibility(contributor: &Contributor, skill: &str, min_level: u32, policy: MatchPolicy) -> Eligibility {
    // An absent skill never qualifies, even for level-1 roles.
    match contributor.skill_level(skill) {
        None => Eligibility::Ineligible,
        Some(level) if level >= min_level => Eligibility::Qualified,
        Some(level) if min_level - level <= policy.mentor_gap => Eligibility::Mentee,
        Some(_) => Eligibility::Ineligible,
    }
}

/// Attempts to fill every role of `project` from the free contributors in
/// `pool`.
///
/// Roles are filled in role order; for each role the pool is scanned in
/// registration order, preferring the first qualified contributor and
/// falling back to the first mentee. Contributors claimed for an earlier
/// role are unavailable to later ones.
///
/// Returns `None` if any role cannot be filled. The pool is not mutated
/// either way; the caller commits busy flags on success.
pub fn try_staff(project: &Project, pool: &[Contributor], policy: MatchPolicy) -> Option<Staffing> {
    let mut assigned = Vec::with_capacity(project.roles.len());
    let mut mentees = Vec::with_capacity(project.roles.len());
    let mut claimed = vec![false; pool.len()];

    for role in &project.roles {
        let mut pick: Option<(usize, bool)> = None;

        for (idx, contributor) in pool.iter().enumerate() {
            if contributor.busy || claimed[idx] {
                continue;
            }
            match eligibility(contributor, &role.skill, role.min_level, policy) {
                Eligibility::Qualified => {
                    pick = Some((idx, false));
                    break;
                }
                Eligibility::Mentee => {
                    if pick.is_none() {
                        pick = Some((idx, true));
                    }
                }
                Eligibility::Ineligible => {}
            }
        }

        let (idx, mentee) = pick?;
        claimed[idx] = true;
        assigned.push(idx);
        mentees.push(mentee);
    }

    Some(Staffing { assigned, mentees })
}
