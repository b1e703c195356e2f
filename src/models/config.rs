//! Roster generation settings.
//!
//! Mirrors what the surrounding application collects from its operator:
//! crew size, the operating window, the weekly hour target, the daily cap,
//! the rest pattern, and the baseline coverage level. Defaults are the
//! conventional retail setup: 10 employees, open 10:00, close 22:00, 44h
//! weekly target, 10h daily cap, 5-on/2-off, 2 staff baseline.

use serde::{Deserialize, Serialize};

use super::RestPattern;

/// Configuration for one roster generation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RosterConfig {
    /// Number of employees in the crew.
    pub employee_count: usize,
    /// Opening hour of day (24h clock, on-the-hour).
    pub opening_hour: u8,
    /// Closing hour of day (24h clock, on-the-hour).
    pub closing_hour: u8,
    /// Target worked hours per employee per week.
    pub weekly_hour_target: u32,
    /// Maximum worked hours per employee per day.
    pub max_daily_hours: u32,
    /// Rest-day pattern (5-on/2-off or 6-on/1-off).
    pub rest_pattern: RestPattern,
    /// Baseline staff per operating slot before demand distribution.
    pub base_coverage: u32,
    /// Optional multiplicative boost applied to Saturday and Sunday day
    /// weights before demand allocation. `None` = pure proportional.
    pub weekend_boost: Option<f64>,
}

impl Default for RosterConfig {
    fn default() -> Self {
        Self {
            employee_count: 10,
            opening_hour: 10,
            closing_hour: 22,
            weekly_hour_target: 44,
            max_daily_hours: 10,
            rest_pattern: RestPattern::FiveTwo,
            base_coverage: 2,
            weekend_boost: None,
        }
    }
}

impl RosterConfig {
    /// Creates a config with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the crew size.
    pub fn with_employee_count(mut self, count: usize) -> Self {
        self.employee_count = count;
        self
    }

    /// Sets the operating window (opening and closing hour of day).
    pub fn with_window(mut self, opening_hour: u8, closing_hour: u8) -> Self {
        self.opening_hour = opening_hour;
        self.closing_hour = closing_hour;
        self
    }

    /// Sets the weekly hour target.
    pub fn with_weekly_target(mut self, hours: u32) -> Self {
        self.weekly_hour_target = hours;
        self
    }

    /// Sets the daily hour cap.
    pub fn with_daily_cap(mut self, hours: u32) -> Self {
        self.max_daily_hours = hours;
        self
    }

    /// Sets the rest pattern.
    pub fn with_rest_pattern(mut self, pattern: RestPattern) -> Self {
        self.rest_pattern = pattern;
        self
    }

    /// Sets the baseline per-slot coverage.
    pub fn with_base_coverage(mut self, staff: u32) -> Self {
        self.base_coverage = staff;
        self
    }

    /// Sets the weekend boost factor.
    pub fn with_weekend_boost(mut self, factor: f64) -> Self {
        self.weekend_boost = Some(factor);
        self
    }

    /// Maximum working days per week, derived from the rest pattern.
    #[inline]
    pub fn max_days(&self) -> u32 {
        self.rest_pattern.max_days()
    }

    /// Total staff-hours available for the week (crew × weekly target).
    #[inline]
    pub fn total_staff_hours(&self) -> u32 {
        self.employee_count as u32 * self.weekly_hour_target
    }

    /// The staffed hour before opening (prep hour).
    #[inline]
    pub fn pre_open_hour(&self) -> u8 {
        self.opening_hour.saturating_sub(1)
    }

    /// Operating hours in ascending order: one hour before opening through
    /// the closing hour, inclusive.
    pub fn operating_hours(&self) -> Vec<u8> {
        (self.pre_open_hour()..=self.closing_hour).collect()
    }
}
