//! Employee and crew construction.
//!
//! An employee carries identity, an assigned shift role (template family),
//! and pre-committed rest days. Rest days are fixed *before* greedy
//! assignment begins and are never overwritten by the engine.
//!
//! Crew construction splits roles by the shape of hourly demand (more
//! closers when the evening carries the sales mass) and rotates rest days
//! through Monday–Friday pairs so weekends stay fully staffed.

use serde::{Deserialize, Serialize};

use super::{HourWeights, RosterConfig, ShiftRole, Weekday};

/// Weekly rest-day pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RestPattern {
    /// Five working days, two rest days (a weekday pair).
    FiveTwo,
    /// Six working days, one rest day (a single weekday).
    SixOne,
}

impl RestPattern {
    /// Maximum working days per week under this pattern.
    #[inline]
    pub fn max_days(self) -> u32 {
        match self {
            RestPattern::FiveTwo => 5,
            RestPattern::SixOne => 6,
        }
    }

    /// Number of pre-committed rest days per employee.
    #[inline]
    pub fn rest_day_count(self) -> usize {
        match self {
            RestPattern::FiveTwo => 2,
            RestPattern::SixOne => 1,
        }
    }
}

/// A crew member available for assignment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    /// Position in the crew (also the deterministic tie-break key).
    pub index: usize,
    /// Display name.
    pub name: String,
    /// Assigned shift role (template family this employee may work).
    pub role: ShiftRole,
    /// Pre-committed rest days; immutable inputs to the engine.
    pub rest_days: Vec<Weekday>,
}

impl Employee {
    /// Creates an employee with no rest days.
    pub fn new(index: usize, name: impl Into<String>, role: ShiftRole) -> Self {
        Self {
            index,
            name: name.into(),
            role,
            rest_days: Vec::new(),
        }
    }

    /// Adds a rest day.
    pub fn with_rest_day(mut self, day: Weekday) -> Self {
        self.rest_days.push(day);
        self
    }

    /// Whether this employee rests on the given day.
    pub fn rests_on(&self, day: Weekday) -> bool {
        self.rest_days.contains(&day)
    }
}

/// Consecutive weekday rest pairs for the 5-on/2-off rotation.
const REST_PAIRS: [(Weekday, Weekday); 4] = [
    (Weekday::Monday, Weekday::Tuesday),
    (Weekday::Tuesday, Weekday::Wednesday),
    (Weekday::Wednesday, Weekday::Thursday),
    (Weekday::Thursday, Weekday::Friday),
];

/// Single weekday rest rotation for the 6-on/1-off pattern.
const REST_SINGLES: [Weekday; 5] = [
    Weekday::Monday,
    Weekday::Tuesday,
    Weekday::Wednesday,
    Weekday::Thursday,
    Weekday::Friday,
];

/// Builds the crew for a configuration: role split by demand shape, rest
/// days rotated through the weekday patterns.
///
/// The role split follows the hourly sales mass: the share of weight at or
/// after mid-afternoon (`opening + 4` through closing) sizes the closing
/// crew (at least 2), the share at or before `opening + 1` sizes the
/// opening crew (at least 1), and the remainder works the mid shift.
pub fn build_crew(config: &RosterConfig, hour_weights: &HourWeights) -> Vec<Employee> {
    let n = config.employee_count;
    let open_cutoff = config.opening_hour.saturating_add(1);
    let close_start = config.opening_hour.saturating_add(4);

    let open_peak: f64 = hour_weights
        .iter()
        .filter(|&(h, _)| h <= open_cutoff)
        .map(|(_, w)| w)
        .sum();
    let close_peak: f64 = hour_weights
        .iter()
        .filter(|&(h, _)| h >= close_start && h <= config.closing_hour)
        .map(|(_, w)| w)
        .sum();

    let n_close = ((n as f64 * close_peak).round() as usize).max(2);
    let n_open = ((n as f64 * open_peak).round() as usize).max(1);
    let n_mid = n.saturating_sub(n_close + n_open);

    (0..n)
        .map(|i| {
            let role = if i < n_open {
                ShiftRole::Opening
            } else if i < n_open + n_mid {
                ShiftRole::Mid
            } else {
                ShiftRole::Closing
            };
            let mut employee = Employee::new(i, format!("Employee {}", i + 1), role);
            match config.rest_pattern {
                RestPattern::FiveTwo => {
                    let (a, b) = REST_PAIRS[i % REST_PAIRS.len()];
                    employee = employee.with_rest_day(a).with_rest_day(b);
                }
                RestPattern::SixOne => {
                    employee = employee.with_rest_day(REST_SINGLES[i % REST_SINGLES.len()]);
                }
            }
            employee
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::WeightVector;

    fn uniform_hours(config: &RosterConfig) -> HourWeights {
        WeightVector::uniform(config.operating_hours())
    }

    #[test]
    fn test_rest_pattern_counts() {
        assert_eq!(RestPattern::FiveTwo.max_days(), 5);
        assert_eq!(RestPattern::FiveTwo.rest_day_count(), 2);
        assert_eq!(RestPattern::SixOne.max_days(), 6);
        assert_eq!(RestPattern::SixOne.rest_day_count(), 1);
    }

    #[test]
    fn test_crew_size_and_rest_rotation() {
        let config = RosterConfig::default();
        let crew = build_crew(&config, &uniform_hours(&config));
        assert_eq!(crew.len(), 10);

        for (i, e) in crew.iter().enumerate() {
            assert_eq!(e.index, i);
            assert_eq!(e.rest_days.len(), 2);
            // Rest days never fall on the weekend
            assert!(e.rest_days.iter().all(|d| !d.is_weekend()));
        }
        // Rotation cycles through the four weekday pairs
        assert_eq!(crew[0].rest_days, crew[4].rest_days);
        assert_ne!(crew[0].rest_days, crew[1].rest_days);
    }

    #[test]
    fn test_role_split_uniform_demand() {
        // Uniform hours 9..=22: open mass 3/14 → 2 openers,
        // close mass 9/14 → 6 closers, 2 mid.
        let config = RosterConfig::default();
        let crew = build_crew(&config, &uniform_hours(&config));

        let openers = crew.iter().filter(|e| e.role == ShiftRole::Opening).count();
        let mids = crew.iter().filter(|e| e.role == ShiftRole::Mid).count();
        let closers = crew.iter().filter(|e| e.role == ShiftRole::Closing).count();
        assert_eq!(openers, 2);
        assert_eq!(mids, 2);
        assert_eq!(closers, 6);
    }

    #[test]
    fn test_role_minimums_on_tiny_crew() {
        let config = RosterConfig::default().with_employee_count(2);
        let crew = build_crew(&config, &uniform_hours(&config));
        // At least one opener; everyone else closes when there is no room
        // for a mid shift.
        assert_eq!(crew[0].role, ShiftRole::Opening);
        assert_eq!(crew[1].role, ShiftRole::Closing);
    }

    #[test]
    fn test_six_one_rest_rotation() {
        let config = RosterConfig::default().with_rest_pattern(RestPattern::SixOne);
        let crew = build_crew(&config, &uniform_hours(&config));
        for e in &crew {
            assert_eq!(e.rest_days.len(), 1);
            assert!(!e.rest_days[0].is_weekend());
        }
        assert_eq!(crew[0].rest_days[0], Weekday::Monday);
        assert_eq!(crew[5].rest_days[0], Weekday::Monday);
    }

    #[test]
    fn test_evening_heavy_demand_grows_closing_crew() {
        let config = RosterConfig::default();
        // All sales mass in the evening hours.
        let hours = WeightVector::normalize(
            config
                .operating_hours()
                .into_iter()
                .map(|h| (h, if h >= 18 { 1.0 } else { 0.0 })),
        );
        let crew = build_crew(&config, &hours);
        let closers = crew.iter().filter(|e| e.role == ShiftRole::Closing).count();
        // close mass = 1.0 → round(10) closers, capped by crew size minus
        // the mandatory opener.
        assert!(closers >= 6);
        assert!(crew.iter().any(|e| e.role == ShiftRole::Opening));
    }
}
