//! Mentorship-aware project staffing engine.
//!
//! Assigns a pool of contributors, each holding named skills at integer
//! proficiency levels, to projects requiring specific roles (skill +
//! minimum level) over discrete days. A greedy day-stepped simulation
//! decides which projects to start and who fills each role; a contributor
//! working one level above their proficiency is mentored and gains a level
//! when the project completes. Completion scores decay one point per day
//! past each project's best-before day.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Contributor`, `SkillLedger`, `Project`,
//!   `Role`, `Schedule`
//! - **`scheduler`**: The engine — role matcher, day loop, scoring, KPIs
//! - **`dispatching`**: Pluggable start-order policy (earliest best-before
//!   by default)
//! - **`validation`**: Input integrity checks (duplicate names,
//!   unsatisfiable roles)
//! - **`io`**: Line-oriented input parser and schedule writers
//!
//! # Example
//!
//! ```
//! use teamplan::io;
//! use teamplan::scheduler::Simulation;
//!
//! let problem = io::parse_str("1 1\nAna 1\nC++ 3\nP 1 10 2 1\nC++ 3\n").unwrap();
//! let schedule = Simulation::new().run(&problem.contributors, &problem.projects);
//! assert_eq!(schedule.total_score, 10);
//! ```

pub mod dispatching;
pub mod io;
pub mod models;
pub mod scheduler;
pub mod validation;
