//! The assignment-and-simulation engine.
//!
//! # Algorithm
//!
//! `Simulation` drives a day-stepped loop: finish due projects (release
//! and mentor contributors, accrue decayed score), then greedily start
//! every still-valuable project the role matcher can fully staff. Greedy
//! and deterministic, not optimal.
//!
//! # Parts
//!
//! - [`matcher`]: all-or-nothing role staffing with the mentorship rule
//! - [`Simulation`]: the day loop and its fixed-point termination
//! - [`completion_score`] / [`ScheduleKpi`]: scoring and run metrics

pub mod matcher;
mod scoring;
mod simulation;

pub use matcher::{try_staff, MatchPolicy, Staffing};
pub use scoring::{completion_score, ScheduleKpi};
pub use simulation::Simulation;
