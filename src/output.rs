//! Rendering of projections, course lists and the grade table.
//!
//! Supports a plain-text report, pretty JSON and a debug log dump.

use anyhow::Result;
use std::io::Write;
use tracing::debug;

use crate::analyzers::grade::GRADE_SCALE;
use crate::analyzers::types::Projection;
use crate::analyzers::utility::scale_percent;
use crate::session::CourseEntry;

/// Shown instead of a number before the student has entered anything.
pub const PLACEHOLDER: &str = "--";

/// Logs a projection using Rust's debug pretty-print format.
pub fn print_pretty(projection: &Projection) {
    debug!("{:#?}", projection);
}

/// Serializes a projection as pretty-printed JSON.
pub fn to_json(projection: &Projection) -> Result<String> {
    Ok(serde_json::to_string_pretty(projection)?)
}

/// Formats an average to two decimals, or [`PLACEHOLDER`] when the value is
/// zero only because nothing has been entered yet.
pub fn format_gpa(value: f64, projection: &Projection) -> String {
    if value == 0.0 && projection.course_count == 0 && projection.prior_cgpa == 0.0 {
        PLACEHOLDER.to_string()
    } else {
        format!("{:.2}", value)
    }
}

/// Writes the human-readable results block.
pub fn write_report<W: Write>(out: &mut W, projection: &Projection) -> Result<()> {
    let sgpa = projection.semester.sgpa;
    let cgpa = projection.cgpa;

    writeln!(
        out,
        "SGPA: {:>5}  [{:>5.1}%]",
        format_gpa(sgpa, projection),
        scale_percent(sgpa)
    )?;
    writeln!(
        out,
        "CGPA: {:>5}  [{:>5.1}%]",
        format_gpa(cgpa, projection),
        scale_percent(cgpa)
    )?;
    writeln!(
        out,
        "{} credits this semester",
        projection.semester.semester_credits
    )?;
    writeln!(out, "{} total credits", projection.total_credits)?;
    writeln!(
        out,
        "{} {}",
        projection.change.direction.arrow(),
        projection.headline()
    )?;

    Ok(())
}

/// Writes one line per course, or a hint when the list is empty.
pub fn write_courses<W: Write>(out: &mut W, courses: &[CourseEntry]) -> Result<()> {
    if courses.is_empty() {
        writeln!(out, "No courses added yet")?;
        return Ok(());
    }

    for course in courses {
        writeln!(
            out,
            "[{}] {} - {} credits • Expected: {} ({})",
            course.id(),
            course.name(),
            course.credits(),
            course.grade_name(),
            course.grade_point()
        )?;
    }

    Ok(())
}

/// Writes the letter-grade reference table.
pub fn write_grade_table<W: Write>(out: &mut W) -> Result<()> {
    writeln!(out, "| Grade | Points |")?;
    writeln!(out, "|-------|--------|")?;
    for grade in GRADE_SCALE {
        writeln!(out, "| {:<5} | {:>6} |", grade.label(), grade.points())?;
    }
    Ok(())
}
