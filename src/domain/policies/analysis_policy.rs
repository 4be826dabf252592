//! Analysis Policy
//!
//! Thresholds that decide when a manager's pay or an employee's reporting
//! line counts as an issue. Passed explicitly into the analyzer so callers
//! (and tests) can inject their own values.

use serde::{Deserialize, Serialize};

/// Default lower bound: a manager earns at least 20% more than the subordinate average.
pub const MIN_MANAGER_SALARY_RATIO: f64 = 1.20;
/// Default upper bound: a manager earns at most 50% more than the subordinate average.
pub const MAX_MANAGER_SALARY_RATIO: f64 = 1.50;
/// Default maximum number of managers between an employee and the root.
pub const MAX_REPORTING_LEVELS: usize = 4;

/// Inclusive salary band relative to an average.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SalaryBand {
    pub min: f64,
    pub max: f64,
}

/// Where a salary sits relative to its band.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BandPosition {
    /// Below the band, by this amount
    Below(f64),
    Within,
    /// Above the band, by this amount
    Above(f64),
}

impl SalaryBand {
    /// Classify a salary. The lower bound is checked first, so an inverted
    /// band reports `Below` whenever both bounds are violated.
    pub fn classify(&self, salary: f64) -> BandPosition {
        if salary < self.min {
            BandPosition::Below(self.min - salary)
        } else if salary > self.max {
            BandPosition::Above(salary - self.max)
        } else {
            BandPosition::Within
        }
    }
}

/// Threshold policy for organization analysis
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisPolicy {
    pub min_salary_ratio: f64,
    pub max_salary_ratio: f64,
    pub max_reporting_levels: usize,
}

impl Default for AnalysisPolicy {
    fn default() -> Self {
        Self {
            min_salary_ratio: MIN_MANAGER_SALARY_RATIO,
            max_salary_ratio: MAX_MANAGER_SALARY_RATIO,
            max_reporting_levels: MAX_REPORTING_LEVELS,
        }
    }
}

impl AnalysisPolicy {
    pub fn with_salary_ratios(mut self, min: f64, max: f64) -> Self {
        self.min_salary_ratio = min;
        self.max_salary_ratio = max;
        self
    }

    pub fn with_max_reporting_levels(mut self, levels: usize) -> Self {
        self.max_reporting_levels = levels;
        self
    }

    /// Expected salary band for a manager whose direct reports average `average`.
    pub fn salary_band(&self, average: f64) -> SalaryBand {
        SalaryBand {
            min: average * self.min_salary_ratio,
            max: average * self.max_salary_ratio,
        }
    }

    /// Levels beyond the allowed maximum, if any.
    pub fn excess_levels(&self, levels: usize) -> Option<usize> {
        (levels > self.max_reporting_levels).then(|| levels - self.max_reporting_levels)
    }

    /// Reject ratios that cannot describe a band.
    pub fn validate(&self) -> Result<(), String> {
        if !self.min_salary_ratio.is_finite() || self.min_salary_ratio <= 0.0 {
            return Err(format!(
                "min_salary_ratio must be a positive number, got {}",
                self.min_salary_ratio
            ));
        }
        if !self.max_salary_ratio.is_finite() || self.max_salary_ratio <= 0.0 {
            return Err(format!(
                "max_salary_ratio must be a positive number, got {}",
                self.max_salary_ratio
            ));
        }
        if self.min_salary_ratio > self.max_salary_ratio {
            return Err(format!(
                "min_salary_ratio ({}) exceeds max_salary_ratio ({})",
                self.min_salary_ratio, self.max_salary_ratio
            ));
        }
        Ok(())
    }

    /// "20%" style rendering of the lower bound premium
    pub fn min_premium_percent(&self) -> String {
        premium_percent(self.min_salary_ratio)
    }

    pub fn max_premium_percent(&self) -> String {
        premium_percent(self.max_salary_ratio)
    }
}

fn premium_percent(ratio: f64) -> String {
    format!("{}%", ((ratio - 1.0) * 100.0).round() as i64)
}
