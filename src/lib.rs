//! Demand-driven weekly shift rostering.
//!
//! Converts two relative sales-volume signals (per day-of-week and per
//! hour-of-day) into a per-(day, hour) staffing-demand matrix, then greedily
//! assigns a fixed crew to shift templates so that hourly headcount tracks
//! demand while weekly hour targets, daily caps, working-day limits, and
//! pre-committed rest days are all respected.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Weekday`, `WeightVector`, `RosterConfig`,
//!   `Employee`, `ShiftTemplate`, `ShiftCatalog`, `Roster`
//! - **`demand`**: `DemandAllocator` — fractional-to-integer staffing demand
//!   with largest-remainder correction and coverage overrides
//! - **`assign`**: `RosterAssigner` — the greedy coverage-maximizing engine,
//!   `ConstraintTracker`, and `RosterSummary` reporting
//! - **`validation`**: input integrity checks (window sanity, crew shape)
//!
//! # Design
//!
//! The engine is a greedy heuristic with deterministic tie-breaks, not an
//! exact solver: it produces a feasible roster, never a proof of optimality.
//! Degenerate weight inputs degrade to uniform distributions rather than
//! failing, and unmet demand is reported, never raised — missing history or
//! a short-staffed week must never block schedule generation.
//!
//! # References
//!
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems"
//! - Ernst et al. (2004), "Staff Scheduling and Rostering: A Review"

pub mod assign;
pub mod demand;
pub mod models;
pub mod validation;
