//! Result types produced by the aggregation functions.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Credit totals and the semester average for the current course list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct SemesterStats {
    pub semester_credits: u64,
    pub semester_weighted_points: u64,
    pub sgpa: f64,
}

/// Which way the projected CGPA moves relative to the prior CGPA.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ChangeDirection {
    /// No courses yet, so there is nothing to project.
    NeutralEmpty,
    Increase,
    Decrease,
    Unchanged,
}

impl ChangeDirection {
    pub fn arrow(self) -> &'static str {
        match self {
            ChangeDirection::Increase => "↑",
            ChangeDirection::Decrease => "↓",
            ChangeDirection::NeutralEmpty | ChangeDirection::Unchanged => "→",
        }
    }
}

/// Direction of a CGPA change and its absolute size. `magnitude` is 0.0
/// unless the direction is `Increase` or `Decrease`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ChangeSummary {
    pub direction: ChangeDirection,
    pub magnitude: f64,
}

/// Everything the front end renders after a recomputation.
#[derive(Debug, Clone, Serialize)]
pub struct Projection {
    pub generated_at: DateTime<Utc>,
    pub prior_cgpa: f64,
    pub prior_credits: f64,
    pub course_count: usize,
    pub semester: SemesterStats,
    pub cgpa: f64,
    pub total_credits: f64,
    pub change: ChangeSummary,
}

impl Projection {
    /// One-line description of the projected change.
    pub fn headline(&self) -> String {
        match self.change.direction {
            ChangeDirection::NeutralEmpty => "Add courses to see prediction".to_string(),
            ChangeDirection::Increase => format!(
                "CGPA will increase by {:.2} points",
                self.change.magnitude
            ),
            ChangeDirection::Decrease => format!(
                "CGPA will decrease by {:.2} points",
                self.change.magnitude
            ),
            ChangeDirection::Unchanged if self.prior_cgpa > 0.0 => {
                "CGPA will remain unchanged".to_string()
            }
            ChangeDirection::Unchanged => "Enter current CGPA to see change".to_string(),
        }
    }
}
