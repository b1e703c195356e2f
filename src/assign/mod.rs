//! Roster assignment: constraint tracking, the greedy engine, and the
//! resulting report.
//!
//! The module splits the problem the way it is solved:
//!
//! - [`ConstraintTracker`] — per-employee labor-rule state and the single
//!   feasibility authority.
//! - [`RosterAssigner`] — the greedy coverage-maximizing loop plus the
//!   hour-balancing fairness pass.
//! - [`RosterSummary`] — per-employee totals and coverage shortfalls.
//!
//! # Reference
//! - Ernst, A. T. et al. (2004). *Staff scheduling and rostering: A review
//!   of applications, methods and models.* EJOR 153(1).

mod engine;
mod summary;
mod tracker;

pub use engine::{RosterAssigner, RosterOutcome, RosterRequest};
pub use summary::{CoverageShortfall, EmployeeSummary, RosterSummary};
pub use tracker::ConstraintTracker;
