//! Contributor model.
//!
//! Contributors are the people assigned to project roles. Each contributor
//! owns a skill ledger (skill name → integer proficiency level) and an
//! exclusive busy flag: a contributor works at most one project at a time.
//!
//! Skill levels only ever increase — the single mutation path is
//! [`SkillLedger::raise`], applied by the scheduler when a mentored
//! assignment completes.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A contributor's skills: skill name → proficiency level.
///
/// An absent skill is not level 0. A contributor without an entry for a
/// skill cannot fill roles requiring it, mentored or not.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillLedger {
    levels: HashMap<String, u32>,
}

impl SkillLedger {
    /// Creates an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a skill level. Used at build time only; later growth goes
    /// through [`raise`](Self::raise).
    pub fn set(&mut self, skill: impl Into<String>, level: u32) {
        self.levels.insert(skill.into(), level);
    }

    /// Returns the level for a skill, or `None` if the skill is absent.
    pub fn level(&self, skill: &str) -> Option<u32> {
        self.levels.get(skill).copied()
    }

    /// Whether the ledger has an entry for a skill.
    pub fn has(&self, skill: &str) -> bool {
        self.levels.contains_key(skill)
    }

    /// Increments a skill level by one (mentorship growth).
    ///
    /// A skill absent from the ledger is left absent: mentorship never
    /// grants a skill, only deepens an existing one.
    pub fn raise(&mut self, skill: &str) {
        if let Some(level) = self.levels.get_mut(skill) {
            *level += 1;
        }
    }

    /// Number of skills in the ledger.
    pub fn len(&self) -> usize {
        self.levels.len()
    }

    /// Whether the ledger is empty.
    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    /// Iterates over (skill, level) pairs in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.levels.iter().map(|(name, &level)| (name.as_str(), level))
    }
}

/// A contributor available for project assignment.
///
/// Registration order (position in the input vector) is the deterministic
/// tie-breaker everywhere contributors compete for a role.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Contributor {
    /// Unique contributor name.
    pub name: String,
    /// Skills with proficiency levels.
    pub skills: SkillLedger,
    /// Whether the contributor is currently assigned to an in-progress
    /// project. Flipped only by the scheduler within a single day step.
    #[serde(default)]
    pub busy: bool,
}

impl Contributor {
    /// Creates a contributor with no skills.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            skills: SkillLedger::new(),
            busy: false,
        }
    }

    /// Adds a skill at the given level.
    pub fn with_skill(mut self, skill: impl Into<String>, level: u32) -> Self {
        self.skills.set(skill, level);
        self
    }

    /// Returns the level for a skill, or `None` if absent.
    pub fn skill_level(&self, skill: &str) -> Option<u32> {
        self.skills.level(skill)
    }
}
