//! Input validation for rostering runs.
//!
//! Checks structural integrity of the configuration and the crew before
//! demand allocation and assignment. Detects:
//! - Degenerate operating windows
//! - Infeasible weekly hour targets
//! - Duplicate employee indices or names
//! - Rest-day sets that contradict the rest pattern

use crate::models::{Employee, RosterConfig};
use std::collections::HashSet;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Opening/closing hours do not form a usable window.
    InvalidOperatingWindow,
    /// Baseline coverage or crew size is zero.
    InvalidCoverage,
    /// The weekly hour target cannot be met under the daily cap and rest
    /// pattern.
    InfeasibleTarget,
    /// Two employees share an index or a name.
    DuplicateId,
    /// An employee's rest days contradict the configured rest pattern.
    RestDayMismatch,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a rostering configuration.
///
/// Checks:
/// 1. `1 <= opening_hour < closing_hour <= 23` (the prep hour needs room
///    before opening, and hour markers stay within a day)
/// 2. `base_coverage >= 1` and `employee_count >= 1`
/// 3. The weekly hour target fits under `max_days × max_daily_hours`
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_config(config: &RosterConfig) -> ValidationResult {
    let mut errors = Vec::new();

    if config.opening_hour < 1 || config.opening_hour >= config.closing_hour {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvalidOperatingWindow,
            format!(
                "Operating window {}:00-{}:00 is not usable",
                config.opening_hour, config.closing_hour
            ),
        ));
    }
    if config.closing_hour > 23 {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvalidOperatingWindow,
            format!("Closing hour {} falls outside the day", config.closing_hour),
        ));
    }

    if config.base_coverage == 0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvalidCoverage,
            "Baseline coverage must be at least 1",
        ));
    }
    if config.employee_count == 0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvalidCoverage,
            "Crew must have at least one employee",
        ));
    }

    let weekly_capacity = config.max_days() * config.max_daily_hours;
    if config.weekly_hour_target > weekly_capacity {
        errors.push(ValidationError::new(
            ValidationErrorKind::InfeasibleTarget,
            format!(
                "Weekly target {}h exceeds the {}h reachable under {} days x {}h",
                config.weekly_hour_target,
                weekly_capacity,
                config.max_days(),
                config.max_daily_hours
            ),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validates a crew against its configuration.
///
/// Checks:
/// 1. No duplicate employee indices or names
/// 2. Each employee's rest-day count matches the rest pattern
/// 3. No employee lists the same rest day twice
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_crew(employees: &[Employee], config: &RosterConfig) -> ValidationResult {
    let mut errors = Vec::new();

    let mut indices = HashSet::new();
    let mut names = HashSet::new();
    for e in employees {
        if !indices.insert(e.index) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate employee index: {}", e.index),
            ));
        }
        if !names.insert(e.name.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate employee name: {}", e.name),
            ));
        }

        let expected = config.rest_pattern.rest_day_count();
        if e.rest_days.len() != expected {
            errors.push(ValidationError::new(
                ValidationErrorKind::RestDayMismatch,
                format!(
                    "'{}' has {} rest day(s), pattern requires {}",
                    e.name,
                    e.rest_days.len(),
                    expected
                ),
            ));
        }

        let distinct: HashSet<_> = e.rest_days.iter().collect();
        if distinct.len() != e.rest_days.len() {
            errors.push(ValidationError::new(
                ValidationErrorKind::RestDayMismatch,
                format!("'{}' lists a rest day more than once", e.name),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{build_crew, RestPattern, ShiftRole, Weekday, WeightVector};

    fn sample_crew(config: &RosterConfig) -> Vec<Employee> {
        let hours = WeightVector::uniform(config.operating_hours());
        build_crew(config, &hours)
    }

    #[test]
    fn test_valid_defaults() {
        let config = RosterConfig::default();
        assert!(validate_config(&config).is_ok());
        assert!(validate_crew(&sample_crew(&config), &config).is_ok());
    }

    #[test]
    fn test_inverted_window() {
        let config = RosterConfig::default().with_window(22, 10);
        let errors = validate_config(&config).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::InvalidOperatingWindow));
    }

    #[test]
    fn test_opening_at_midnight_has_no_prep_hour() {
        let config = RosterConfig::default().with_window(0, 22);
        let errors = validate_config(&config).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::InvalidOperatingWindow));
    }

    #[test]
    fn test_zero_coverage_and_empty_crew() {
        let config = RosterConfig::default()
            .with_base_coverage(0)
            .with_employee_count(0);
        let errors = validate_config(&config).unwrap_err();
        assert_eq!(
            errors
                .iter()
                .filter(|e| e.kind == ValidationErrorKind::InvalidCoverage)
                .count(),
            2
        );
    }

    #[test]
    fn test_unreachable_weekly_target() {
        // 5 working days x 8h cap = 40h < 44h target.
        let config = RosterConfig::default().with_daily_cap(8);
        let errors = validate_config(&config).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::InfeasibleTarget));
    }

    #[test]
    fn test_duplicate_index_and_name() {
        let config = RosterConfig::default().with_employee_count(2);
        let crew = vec![
            Employee::new(0, "Employee 1", ShiftRole::Opening)
                .with_rest_day(Weekday::Monday)
                .with_rest_day(Weekday::Tuesday),
            Employee::new(0, "Employee 1", ShiftRole::Closing)
                .with_rest_day(Weekday::Tuesday)
                .with_rest_day(Weekday::Wednesday),
        ];

        let errors = validate_crew(&crew, &config).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::DuplicateId && e.message.contains("index")));
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::DuplicateId && e.message.contains("name")));
    }

    #[test]
    fn test_rest_day_count_mismatch() {
        let config = RosterConfig::default(); // FiveTwo: two rest days
        let crew = vec![Employee::new(0, "Solo", ShiftRole::Closing).with_rest_day(Weekday::Monday)];

        let errors = validate_crew(&crew, &config).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::RestDayMismatch));
    }

    #[test]
    fn test_repeated_rest_day() {
        let config = RosterConfig::default().with_rest_pattern(RestPattern::SixOne);
        let crew = vec![
            Employee::new(0, "A", ShiftRole::Closing).with_rest_day(Weekday::Monday),
            Employee::new(1, "B", ShiftRole::Closing)
                .with_rest_day(Weekday::Friday)
                .with_rest_day(Weekday::Friday),
        ];

        let errors = validate_crew(&crew, &config).unwrap_err();
        // B fails both the count and the repetition check.
        assert!(errors.len() >= 2);
        assert!(errors
            .iter()
            .all(|e| e.kind == ValidationErrorKind::RestDayMismatch));
    }

    #[test]
    fn test_generated_crew_always_valid() {
        for pattern in [RestPattern::FiveTwo, RestPattern::SixOne] {
            for n in [1, 3, 10, 25] {
                let config = RosterConfig::default()
                    .with_rest_pattern(pattern)
                    .with_employee_count(n);
                assert!(validate_crew(&sample_crew(&config), &config).is_ok());
            }
        }
    }
}
