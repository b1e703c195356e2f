//! Per-employee labor-constraint state.
//!
//! The tracker is the single authority on assignment feasibility: the
//! greedy engine consults `can_assign` before every commit, and `commit` /
//! `promote` are the only paths that mutate employee totals. Rest days are
//! marked at construction and can never be assigned over.

use crate::models::{Employee, RosterConfig, ShiftTemplate, ShiftVariant, Weekday};

#[derive(Debug, Clone)]
struct EmployeeState {
    days_worked: u32,
    hours_worked: u32,
    rest: [bool; 7],
    committed: [Option<ShiftTemplate>; 7],
}

/// Running feasibility state for the whole crew.
#[derive(Debug, Clone)]
pub struct ConstraintTracker {
    weekly_target: u32,
    max_days: u32,
    max_daily_hours: u32,
    states: Vec<EmployeeState>,
}

impl ConstraintTracker {
    /// Creates a tracker with every employee's rest days pre-marked.
    ///
    /// Employees are addressed by their position in `employees`.
    pub fn new(employees: &[Employee], config: &RosterConfig) -> Self {
        let states = employees
            .iter()
            .map(|e| {
                let mut rest = [false; 7];
                for day in &e.rest_days {
                    rest[day.index()] = true;
                }
                EmployeeState {
                    days_worked: 0,
                    hours_worked: 0,
                    rest,
                    committed: std::array::from_fn(|_| None),
                }
            })
            .collect();
        Self {
            weekly_target: config.weekly_hour_target,
            max_days: config.max_days(),
            max_daily_hours: config.max_daily_hours,
            states,
        }
    }

    /// The feasibility predicate.
    ///
    /// True iff the employee is free on `day` (not resting, nothing
    /// committed), the template fits the daily cap, another working day is
    /// allowed, and the weekly hour target is not exceeded. The single-hour
    /// overshoot tolerated by the fairness pass goes through [`promote`],
    /// never through this check.
    ///
    /// [`promote`]: ConstraintTracker::promote
    pub fn can_assign(&self, employee: usize, day: Weekday, template: &ShiftTemplate) -> bool {
        let Some(state) = self.states.get(employee) else {
            return false;
        };
        let d = day.index();
        !state.rest[d]
            && state.committed[d].is_none()
            && template.duration_hours() <= self.max_daily_hours
            && state.days_worked < self.max_days
            && state.hours_worked + template.duration_hours() <= self.weekly_target
    }

    /// Commits an assignment if feasible; returns whether it was applied.
    ///
    /// Assignments are never revised once committed.
    pub fn commit(&mut self, employee: usize, day: Weekday, template: &ShiftTemplate) -> bool {
        if !self.can_assign(employee, day, template) {
            return false;
        }
        let state = &mut self.states[employee];
        state.days_worked += 1;
        state.hours_worked += template.duration_hours();
        state.committed[day.index()] = Some(template.clone());
        true
    }

    /// Swaps a committed base shift for its extended variant, crediting the
    /// extra hour(s); returns whether it was applied.
    ///
    /// This is the fairness pass's controlled upgrade: it may push
    /// `hours_worked` past the weekly target by the variant delta, but the
    /// daily cap still binds and only a base-variant day of the same role
    /// qualifies.
    pub fn promote(&mut self, employee: usize, day: Weekday, upgraded: &ShiftTemplate) -> bool {
        if upgraded.duration_hours() > self.max_daily_hours {
            return false;
        }
        let Some(state) = self.states.get_mut(employee) else {
            return false;
        };
        let d = day.index();
        let Some(current) = &state.committed[d] else {
            return false;
        };
        if current.variant != ShiftVariant::Base || current.role != upgraded.role {
            return false;
        }
        let delta = upgraded.duration_hours().saturating_sub(current.duration_hours());
        state.hours_worked += delta;
        state.committed[d] = Some(upgraded.clone());
        true
    }

    /// Days worked so far.
    pub fn days_worked(&self, employee: usize) -> u32 {
        self.states.get(employee).map_or(0, |s| s.days_worked)
    }

    /// Hours worked so far.
    pub fn hours_worked(&self, employee: usize) -> u32 {
        self.states.get(employee).map_or(0, |s| s.hours_worked)
    }

    /// The shift committed for an employee on a day, if any.
    pub fn committed(&self, employee: usize, day: Weekday) -> Option<&ShiftTemplate> {
        self.states
            .get(employee)
            .and_then(|s| s.committed[day.index()].as_ref())
    }

    /// Whether the employee has a pre-committed rest day.
    pub fn is_rest(&self, employee: usize, day: Weekday) -> bool {
        self.states
            .get(employee)
            .is_some_and(|s| s.rest[day.index()])
    }
}
