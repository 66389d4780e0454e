use crate::analyzers::types::{ChangeDirection, ChangeSummary, Projection, SemesterStats};
use crate::analyzers::utility::weighted_mean;
use crate::session::{CourseEntry, SessionState};
use chrono::Utc;

/// Smallest CGPA movement reported as an increase or decrease. Anything
/// inside ±`CHANGE_EPSILON` is floating-point noise from the division chain.
pub const CHANGE_EPSILON: f64 = 0.001;

/// Sums credits and credit-weighted grade points over `entries` and derives
/// the semester average.
///
/// An empty slice yields all zeros.
pub fn compute_semester_stats(entries: &[CourseEntry]) -> SemesterStats {
    let mut semester_credits = 0u64;
    let mut semester_weighted_points = 0u64;

    for entry in entries {
        let credits = u64::from(entry.credits());
        semester_credits += credits;
        semester_weighted_points += credits * u64::from(entry.grade_point());
    }

    SemesterStats {
        semester_credits,
        semester_weighted_points,
        sgpa: weighted_mean(semester_weighted_points as f64, semester_credits as f64),
    }
}

/// Merges the prior record with this semester's totals into a new cumulative
/// average. Exact; rounding is left to the display layer.
///
/// Returns 0.0 when there are no credits on either side.
pub fn compute_projected_cgpa(
    prior_cgpa: f64,
    prior_credits: f64,
    semester_credits: f64,
    semester_weighted_points: f64,
) -> f64 {
    let prior_weighted_points = prior_cgpa * prior_credits;
    let total_credits = prior_credits + semester_credits;

    weighted_mean(prior_weighted_points + semester_weighted_points, total_credits)
}

/// Classifies the move from `prior_cgpa` to `new_cgpa`.
pub fn classify_change(new_cgpa: f64, prior_cgpa: f64, has_courses: bool) -> ChangeSummary {
    let delta = new_cgpa - prior_cgpa;

    let (direction, magnitude) = if !has_courses {
        (ChangeDirection::NeutralEmpty, 0.0)
    } else if delta > CHANGE_EPSILON {
        (ChangeDirection::Increase, delta)
    } else if delta < -CHANGE_EPSILON {
        (ChangeDirection::Decrease, delta.abs())
    } else {
        (ChangeDirection::Unchanged, 0.0)
    };

    ChangeSummary {
        direction,
        magnitude,
    }
}

/// Recomputes every output from the full current session.
pub fn project(state: &SessionState) -> Projection {
    let semester = compute_semester_stats(state.courses());
    let prior_cgpa = state.prior_cgpa();
    let prior_credits = state.prior_credits();

    let cgpa = compute_projected_cgpa(
        prior_cgpa,
        prior_credits,
        semester.semester_credits as f64,
        semester.semester_weighted_points as f64,
    );

    Projection {
        generated_at: Utc::now(),
        prior_cgpa,
        prior_credits,
        course_count: state.courses().len(),
        semester,
        cgpa,
        total_credits: prior_credits + semester.semester_credits as f64,
        change: classify_change(cgpa, prior_cgpa, state.has_courses()),
    }
}
