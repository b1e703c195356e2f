//! Rostering domain models.
//!
//! Provides the data types for the weekly rostering problem and its
//! solution.
//!
//! # Vocabulary
//!
//! | Type | Meaning |
//! |------|---------|
//! | `WeightVector` | Relative sales volume per day or hour |
//! | `ShiftTemplate` | A named shift shape (two blocks + rest gap) |
//! | `Employee` | A crew member with role and fixed rest days |
//! | `Roster` | The solution: per-(employee, day) shift or rest |

mod config;
mod employee;
mod roster;
mod shift;
mod weekday;
mod weights;

pub use config::RosterConfig;
pub use employee::{build_crew, Employee, RestPattern};
pub use roster::{DayAssignment, Roster};
pub use shift::{HourBlock, ShiftCatalog, ShiftRole, ShiftTemplate, ShiftVariant};
pub use weekday::Weekday;
pub use weights::{DayWeights, HourWeights, WeightVector};
