use crate::Result;
use crate::metrics::{BlockerMetric, DEFAULT_RESPONSE_TARGET_HOURS};
use ohno::bail;
use serde::{Deserialize, Serialize};
use strum::Display;

/// How a metric compares with its targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Status {
    /// The metric meets its target
    Good,

    /// The metric misses its target but meets the looser warning threshold
    Warning,

    /// The metric misses both thresholds
    Poor,
}

/// Targets the console report colors metrics against
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ReportThresholds {
    /// First responses within this many hours are on target (and count toward compliance)
    #[serde(default = "default_response_target_hours")]
    pub response_target_hours: f64,

    /// First responses within this many hours are a warning rather than a miss
    #[serde(default = "default_response_warning_hours")]
    pub response_warning_hours: f64,

    /// Review compliance at or above this percentage is on target
    #[serde(default = "default_compliance_target_pct")]
    pub compliance_target_pct: f64,

    /// Issue completion above this percentage is on target
    #[serde(default = "default_completion_target_pct")]
    pub completion_target_pct: f64,

    /// Issue completion above this percentage is a warning rather than a miss
    #[serde(default = "default_completion_warning_pct")]
    pub completion_warning_pct: f64,
}

const fn default_response_target_hours() -> f64 {
    DEFAULT_RESPONSE_TARGET_HOURS
}

const fn default_response_warning_hours() -> f64 {
    48.0
}

const fn default_compliance_target_pct() -> f64 {
    90.0
}

const fn default_completion_target_pct() -> f64 {
    90.0
}

const fn default_completion_warning_pct() -> f64 {
    80.0
}

impl Default for ReportThresholds {
    fn default() -> Self {
        Self {
            response_target_hours: default_response_target_hours(),
            response_warning_hours: default_response_warning_hours(),
            compliance_target_pct: default_compliance_target_pct(),
            completion_target_pct: default_completion_target_pct(),
            completion_warning_pct: default_completion_warning_pct(),
        }
    }
}

impl ReportThresholds {
    /// Status of a median or mean time to first response, in hours
    #[must_use]
    pub fn first_response_status(&self, hours: f64) -> Status {
        if hours <= self.response_target_hours {
            Status::Good
        } else if hours <= self.response_warning_hours {
            Status::Warning
        } else {
            Status::Poor
        }
    }

    /// Status of the review compliance percentage
    ///
    /// Compliance has no failing tier: anything under target is a warning.
    #[must_use]
    pub fn compliance_status(&self, pct: f64) -> Status {
        if pct >= self.compliance_target_pct {
            Status::Good
        } else {
            Status::Warning
        }
    }

    /// Status of the issue completion percentage
    #[must_use]
    pub fn completion_status(&self, pct: f64) -> Status {
        if pct > self.completion_target_pct {
            Status::Good
        } else if pct > self.completion_warning_pct {
            Status::Warning
        } else {
            Status::Poor
        }
    }

    /// Status of the blocker metric
    ///
    /// Nothing blocked means nothing was left unresolved, so the metric is always on target.
    #[must_use]
    pub const fn blocker_status(&self, _blockers: &BlockerMetric) -> Status {
        Status::Good
    }

    /// Check that the thresholds are usable
    ///
    /// # Errors
    ///
    /// Returns an error if a value is out of range or a warning threshold is stricter than its target
    pub fn validate(&self) -> Result<()> {
        if !self.response_target_hours.is_finite() || self.response_target_hours < 0.0 {
            bail!("response_target_hours must be a non-negative number, got {}", self.response_target_hours);
        }

        if !self.response_warning_hours.is_finite() || self.response_warning_hours < self.response_target_hours {
            bail!(
                "response_warning_hours ({}) must be at least response_target_hours ({})",
                self.response_warning_hours,
                self.response_target_hours
            );
        }

        for (name, value) in [
            ("compliance_target_pct", self.compliance_target_pct),
            ("completion_target_pct", self.completion_target_pct),
            ("completion_warning_pct", self.completion_warning_pct),
        ] {
            if !(0.0..=100.0).contains(&value) {
                bail!("{name} must be between 0 and 100, got {value}");
            }
        }

        if self.completion_warning_pct > self.completion_target_pct {
            bail!(
                "completion_warning_pct ({}) must not exceed completion_target_pct ({})",
                self.completion_warning_pct,
                self.completion_target_pct
            );
        }

        Ok(())
    }
}
