//! The greedy rostering engine.
//!
//! # Algorithm
//!
//! For each day of the week, independently:
//! 1. Score every feasible (template, variant) by how much unmet demand it
//!    would cover; pick the highest scorer that has an eligible employee
//!    (ties broken by catalog declaration order).
//! 2. Give it to the least-loaded eligible employee: smallest
//!    `(days_worked, hours_worked, index)` lexicographically.
//! 3. Commit through the tracker and decrement the covered demand.
//! 4. Stop when the day's demand is exhausted, no template covers anything,
//!    or nobody can take a useful shift.
//!
//! Two balancing stages follow. A day-filling stage tops up under-target
//! employees with base-variant working days on their free days,
//! heaviest-demand day first — greedy coverage can strand surplus
//! same-role employees once their templates' hours are saturated, and the
//! weekly plan still owes them their full complement of days. A fairness
//! pass then promotes base-variant days of still-under-target employees to
//! the extended variant, lightest-demand day first, until the weekly hour
//! target is met.
//!
//! Greedy coverage-maximization approximates proportional staffing without
//! an exact solver; least-loaded selection spreads the work evenly. Unmet
//! demand is reported by `RosterSummary`, never raised as an error.

use tracing::{debug, warn};

use crate::demand::{DemandAllocator, DemandMatrix};
use crate::models::{
    build_crew, DayWeights, Employee, HourWeights, Roster, RosterConfig, ShiftCatalog,
    ShiftTemplate, ShiftVariant, Weekday,
};

use super::{ConstraintTracker, RosterSummary};

/// Input container for one roster generation run: the two normalized
/// sales-volume signals.
#[derive(Debug, Clone)]
pub struct RosterRequest {
    /// Relative sales volume per day of week.
    pub day_weights: DayWeights,
    /// Relative sales volume per operating hour.
    pub hour_weights: HourWeights,
}

impl RosterRequest {
    /// Creates a request from the two weight vectors.
    pub fn new(day_weights: DayWeights, hour_weights: HourWeights) -> Self {
        Self {
            day_weights,
            hour_weights,
        }
    }
}

/// Everything a caller needs from a run: the roster, the crew it was built
/// for, the (consumed) demand matrix, and the report.
#[derive(Debug, Clone)]
pub struct RosterOutcome {
    /// The weekly roster.
    pub roster: Roster,
    /// The crew the roster covers, in index order.
    pub employees: Vec<Employee>,
    /// The demand matrix after assignment; non-zero `remaining` marks
    /// under-covered slots.
    pub demand: DemandMatrix,
    /// Per-employee totals and coverage shortfalls.
    pub summary: RosterSummary,
}

/// Greedy coverage-maximizing roster assigner.
///
/// # Example
/// ```
/// use shift_roster::assign::{RosterAssigner, RosterRequest};
/// use shift_roster::models::{RosterConfig, WeightVector, Weekday};
///
/// let config = RosterConfig::default();
/// let request = RosterRequest::new(
///     WeightVector::uniform(Weekday::ALL),
///     WeightVector::uniform(config.operating_hours()),
/// );
///
/// let outcome = RosterAssigner::new(&config).assign_request(&request);
/// assert_eq!(outcome.roster.employee_count(), 10);
/// assert!(outcome.roster.headcount(Weekday::Saturday, 22) >= 2);
/// ```
#[derive(Debug, Clone)]
pub struct RosterAssigner {
    config: RosterConfig,
    catalog: ShiftCatalog,
}

impl RosterAssigner {
    /// Creates an assigner, deriving the shift catalog from the config.
    pub fn new(config: &RosterConfig) -> Self {
        Self {
            config: config.clone(),
            catalog: ShiftCatalog::new(
                config.opening_hour,
                config.closing_hour,
                config.max_daily_hours,
            ),
        }
    }

    /// The derived shift catalog.
    pub fn catalog(&self) -> &ShiftCatalog {
        &self.catalog
    }

    /// Runs the whole pipeline: weekend boost, demand allocation, crew
    /// construction, greedy assignment, and reporting.
    pub fn assign_request(&self, request: &RosterRequest) -> RosterOutcome {
        let day_weights = match self.config.weekend_boost {
            Some(factor) => request
                .day_weights
                .scale(Weekday::Saturday, factor)
                .scale(Weekday::Sunday, factor),
            None => request.day_weights.clone(),
        };

        let mut demand =
            DemandAllocator::from_config(&self.config).allocate(&day_weights, &request.hour_weights);
        let employees = build_crew(&self.config, &request.hour_weights);
        let roster = self.assign(&employees, &mut demand);
        let summary = RosterSummary::calculate(&roster, &demand, &employees);

        RosterOutcome {
            roster,
            employees,
            demand,
            summary,
        }
    }

    /// Assigns the given crew against the given demand matrix.
    ///
    /// Demand is consumed in place; the caller can inspect `remaining`
    /// afterwards for unmet slots. The roster is always returned — a
    /// short-staffed week yields under-coverage, never an error.
    pub fn assign(&self, employees: &[Employee], demand: &mut DemandMatrix) -> Roster {
        let mut tracker = ConstraintTracker::new(employees, &self.config);
        // Sized to slots × employees; the loop commits at most one shift
        // per employee per day, so this bound only trips on pathological
        // inputs and trips are treated as "day exhausted".
        let guard_limit = (demand.hours().len() * employees.len()).max(1);

        for day in Weekday::ALL {
            let mut iterations = 0usize;
            while demand.day_remaining(day) > 0 {
                iterations += 1;
                if iterations > guard_limit {
                    warn!(
                        day = day.label(),
                        unmet = demand.day_remaining(day),
                        "iteration guard tripped, treating day as exhausted"
                    );
                    break;
                }

                let Some((template, employee)) = self.best_commit(day, employees, demand, &tracker)
                else {
                    break;
                };
                if !tracker.commit(employee, day, &template) {
                    break;
                }
                for hour in template.covered_hours() {
                    demand.consume(day, hour);
                }
            }
            debug!(
                day = day.label(),
                unmet = demand.day_remaining(day),
                "day pass complete"
            );
        }

        self.fill_days(employees, demand, &mut tracker);
        self.fairness_pass(employees, demand, &mut tracker);

        let mut roster = Roster::new(employees.len());
        for index in 0..employees.len() {
            for day in Weekday::ALL {
                if let Some(template) = tracker.committed(index, day) {
                    roster.set(index, day, template.clone());
                }
            }
        }
        roster
    }

    /// Picks the (template, employee) pair covering the most unmet demand.
    ///
    /// Templates that cover nothing or have no eligible employee are
    /// skipped; among equal coverage the earliest-declared template wins.
    fn best_commit(
        &self,
        day: Weekday,
        employees: &[Employee],
        demand: &DemandMatrix,
        tracker: &ConstraintTracker,
    ) -> Option<(ShiftTemplate, usize)> {
        let mut best: Option<(u32, ShiftTemplate, usize)> = None;
        for template in self.catalog.templates() {
            let coverage = template.coverage(day, demand);
            if coverage == 0 {
                continue;
            }
            if let Some((best_coverage, _, _)) = &best {
                if coverage <= *best_coverage {
                    continue;
                }
            }
            if let Some(employee) = least_loaded(day, template, employees, tracker) {
                best = Some((coverage, template.clone(), employee));
            }
        }
        best.map(|(_, template, employee)| (template, employee))
    }

    /// Commits additional base-variant working days for under-target
    /// employees, heaviest-demand day first.
    ///
    /// The greedy loop stops handing out a role's shifts once their covered
    /// hours are saturated, which can leave surplus employees of that role
    /// short a whole working day. Those days are owed regardless of
    /// remaining coverage; the tracker still enforces rest days, the day
    /// limit, and the weekly target.
    fn fill_days(
        &self,
        employees: &[Employee],
        demand: &mut DemandMatrix,
        tracker: &mut ConstraintTracker,
    ) {
        let mut days = Weekday::ALL.to_vec();
        days.sort_by(|a, b| {
            demand
                .day_required(*b)
                .cmp(&demand.day_required(*a))
                .then(a.index().cmp(&b.index()))
        });

        for (index, employee) in employees.iter().enumerate() {
            let Some(base) = self.catalog.template(employee.role, ShiftVariant::Base) else {
                continue;
            };
            for &day in &days {
                if tracker.hours_worked(index) >= self.config.weekly_hour_target {
                    break;
                }
                if tracker.commit(index, day, base) {
                    for hour in base.covered_hours() {
                        demand.consume(day, hour);
                    }
                }
            }
        }
    }

    /// Promotes base-variant days of under-target employees to the
    /// extended variant, lightest-demand day first.
    ///
    /// Promotion only ever adds hours (no demotion of over-target
    /// employees); with 8h/9h variants each step is exactly one hour, so
    /// the pass lands on the target without overshooting it.
    fn fairness_pass(
        &self,
        employees: &[Employee],
        demand: &mut DemandMatrix,
        tracker: &mut ConstraintTracker,
    ) {
        for index in 0..employees.len() {
            while tracker.hours_worked(index) < self.config.weekly_hour_target {
                let mut candidate: Option<(u32, Weekday, ShiftTemplate, ShiftTemplate)> = None;
                for day in Weekday::ALL {
                    let Some(current) = tracker.committed(index, day) else {
                        continue;
                    };
                    if current.variant != ShiftVariant::Base {
                        continue;
                    }
                    let Some(extended) = self.catalog.template(current.role, ShiftVariant::Extended)
                    else {
                        continue;
                    };
                    let load = demand.day_required(day);
                    let better = candidate
                        .as_ref()
                        .map_or(true, |(best_load, best_day, _, _)| {
                            (load, day.index()) < (*best_load, best_day.index())
                        });
                    if better {
                        candidate = Some((load, day, current.clone(), extended.clone()));
                    }
                }
                let Some((_, day, base, extended)) = candidate else {
                    break;
                };
                if !tracker.promote(index, day, &extended) {
                    break;
                }
                for hour in extended.covered_hours() {
                    if !base.covers(hour) {
                        demand.consume(day, hour);
                    }
                }
            }
        }
    }
}

/// Least-loaded eligible employee for a template on a day: smallest
/// `(days_worked, hours_worked, index)` lexicographically.
fn least_loaded(
    day: Weekday,
    template: &ShiftTemplate,
    employees: &[Employee],
    tracker: &ConstraintTracker,
) -> Option<usize> {
    let mut pick: Option<(u32, u32, usize)> = None;
    for (index, employee) in employees.iter().enumerate() {
        if employee.role != template.role {
            continue;
        }
        if !tracker.can_assign(index, day, template) {
            continue;
        }
        let key = (tracker.days_worked(index), tracker.hours_worked(index), index);
        if pick.map_or(true, |current| key < current) {
            pick = Some(key);
        }
    }
    pick.map(|(_, _, index)| index)
}
