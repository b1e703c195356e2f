//! Roster reporting: per-employee totals and coverage shortfalls.
//!
//! The engine never fails on under-coverage; this report is where a
//! short-staffed week becomes visible. A shortfall row is any (day, hour)
//! slot whose on-shift headcount ends below its required staffing.

use serde::{Deserialize, Serialize};

use crate::demand::DemandMatrix;
use crate::models::{Employee, Roster, ShiftRole, Weekday};

/// Weekly totals for one employee.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeSummary {
    /// Display name.
    pub name: String,
    /// Assigned shift role.
    pub role: ShiftRole,
    /// Worked hours over the week.
    pub total_hours: u32,
    /// Working days over the week.
    pub total_days: u32,
}

/// One under-covered (day, hour) slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoverageShortfall {
    /// Day of week.
    pub day: Weekday,
    /// Hour of day.
    pub hour: u8,
    /// Required staffing for the slot.
    pub required: u32,
    /// Headcount actually on shift.
    pub achieved: u32,
}

/// The roster report: employee totals, shortfall rows, and the aggregate
/// fill rate inputs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RosterSummary {
    /// Per-employee totals, in crew index order.
    pub employees: Vec<EmployeeSummary>,
    /// Under-covered slots, in day-major slot order.
    pub shortfalls: Vec<CoverageShortfall>,
    /// Total required staff-hours across all slots.
    pub total_required: u32,
    /// Required staff-hours actually covered (headcount capped at the
    /// requirement, so overstaffing never inflates the rate).
    pub total_covered: u32,
}

impl RosterSummary {
    /// Derives the report from a finished roster and its demand matrix.
    pub fn calculate(roster: &Roster, demand: &DemandMatrix, employees: &[Employee]) -> Self {
        let employee_rows = employees
            .iter()
            .map(|e| EmployeeSummary {
                name: e.name.clone(),
                role: e.role,
                total_hours: roster.total_hours(e.index),
                total_days: roster.worked_days(e.index),
            })
            .collect();

        let mut shortfalls = Vec::new();
        let mut total_required = 0u32;
        let mut total_covered = 0u32;
        for cell in demand.cells() {
            let achieved = roster.headcount(cell.day, cell.hour);
            total_required += cell.required;
            total_covered += achieved.min(cell.required);
            if achieved < cell.required {
                shortfalls.push(CoverageShortfall {
                    day: cell.day,
                    hour: cell.hour,
                    required: cell.required,
                    achieved,
                });
            }
        }

        Self {
            employees: employee_rows,
            shortfalls,
            total_required,
            total_covered,
        }
    }

    /// Fraction of required staff-hours covered, in `[0, 1]`.
    ///
    /// A week with no demand counts as fully covered.
    pub fn fill_rate(&self) -> f64 {
        if self.total_required == 0 {
            return 1.0;
        }
        f64::from(self.total_covered) / f64::from(self.total_required)
    }

    /// Whether every slot met its requirement.
    pub fn is_fully_covered(&self) -> bool {
        self.shortfalls.is_empty()
    }
}
