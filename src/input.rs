//! Front-end clamping of raw numeric fields.
//!
//! These bounds belong to the input widgets, not to the session: the core
//! only insists on at least one credit per course.

pub const MIN_COURSE_CREDITS: i64 = 1;
pub const MAX_COURSE_CREDITS: i64 = 12;
pub const MAX_PRIOR_CGPA: f64 = 10.0;

/// Clamps to [0, 10]. NaN and infinities count as 0.
pub fn clamp_prior_cgpa(value: f64) -> f64 {
    finite_or_zero(value).clamp(0.0, MAX_PRIOR_CGPA)
}

/// Clamps to 0 or more. NaN and infinities count as 0.
pub fn clamp_prior_credits(value: f64) -> f64 {
    finite_or_zero(value).max(0.0)
}

pub fn clamp_course_credits(value: i64) -> i64 {
    value.clamp(MIN_COURSE_CREDITS, MAX_COURSE_CREDITS)
}

/// Reads a prior CGPA or prior credits field. Blank or unparseable text
/// counts as 0, then the value is clamped.
pub fn read_prior_cgpa(raw: &str) -> f64 {
    clamp_prior_cgpa(parse_or_zero(raw))
}

pub fn read_prior_credits(raw: &str) -> f64 {
    clamp_prior_credits(parse_or_zero(raw))
}

fn parse_or_zero(raw: &str) -> f64 {
    raw.trim().parse::<f64>().map_or(0.0, finite_or_zero)
}

fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() { value } else { 0.0 }
}
