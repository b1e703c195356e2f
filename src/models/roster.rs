//! Roster (solution) model.
//!
//! A roster maps every (employee, day) to either rest or a committed shift.
//! It is built incrementally by the engine and never retracted — there is
//! no backtracking. The derived per-(day, hour) headcount table serves
//! audit and visualization.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{ShiftTemplate, Weekday};

/// One roster cell: what an employee does on one day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DayAssignment {
    /// Day off (pre-committed or simply unassigned).
    Rest,
    /// A committed shift.
    Shift(ShiftTemplate),
}

impl DayAssignment {
    /// Worked hours for this cell (0 for rest).
    pub fn hours(&self) -> u32 {
        match self {
            DayAssignment::Rest => 0,
            DayAssignment::Shift(t) => t.duration_hours(),
        }
    }

    /// Whether this cell is a working shift.
    pub fn is_shift(&self) -> bool {
        matches!(self, DayAssignment::Shift(_))
    }
}

impl fmt::Display for DayAssignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DayAssignment::Rest => write!(f, "Rest"),
            DayAssignment::Shift(t) => write!(f, "{t}"),
        }
    }
}

/// The weekly roster: a 7-day row per employee.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Roster {
    rows: Vec<Vec<DayAssignment>>,
}

impl Roster {
    /// Creates an all-rest roster for a crew of the given size.
    pub fn new(employee_count: usize) -> Self {
        Self {
            rows: (0..employee_count)
                .map(|_| vec![DayAssignment::Rest; Weekday::ALL.len()])
                .collect(),
        }
    }

    /// Commits a shift for an employee on a day.
    ///
    /// Only fills empty (rest) cells: a cell already holding a shift is
    /// left untouched, preserving the no-retraction invariant.
    pub fn set(&mut self, employee: usize, day: Weekday, shift: ShiftTemplate) {
        if let Some(row) = self.rows.get_mut(employee) {
            let cell = &mut row[day.index()];
            if !cell.is_shift() {
                *cell = DayAssignment::Shift(shift);
            }
        }
    }

    /// The cell for an employee on a day.
    pub fn get(&self, employee: usize, day: Weekday) -> &DayAssignment {
        static REST: DayAssignment = DayAssignment::Rest;
        self.rows
            .get(employee)
            .map_or(&REST, |row| &row[day.index()])
    }

    /// Number of employees.
    pub fn employee_count(&self) -> usize {
        self.rows.len()
    }

    /// Worked days for an employee.
    pub fn worked_days(&self, employee: usize) -> u32 {
        self.rows.get(employee).map_or(0, |row| {
            row.iter().filter(|c| c.is_shift()).count() as u32
        })
    }

    /// Total worked hours for an employee.
    pub fn total_hours(&self, employee: usize) -> u32 {
        self.rows
            .get(employee)
            .map_or(0, |row| row.iter().map(DayAssignment::hours).sum())
    }

    /// Employees covering the given (day, hour) slot.
    pub fn headcount(&self, day: Weekday, hour: u8) -> u32 {
        self.rows
            .iter()
            .filter(|row| match &row[day.index()] {
                DayAssignment::Shift(t) => t.covers(hour),
                DayAssignment::Rest => false,
            })
            .count() as u32
    }

    /// The derived audit table: headcount per hour (rows) and day
    /// (columns, Monday first) over the given hours.
    pub fn headcount_table(&self, hours: &[u8]) -> Vec<(u8, [u32; 7])> {
        hours
            .iter()
            .map(|&hour| {
                let mut counts = [0u32; 7];
                for (i, day) in Weekday::ALL.iter().enumerate() {
                    counts[i] = self.headcount(*day, hour);
                }
                (hour, counts)
            })
            .collect()
    }
}
