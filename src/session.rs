//! Course list and prior-record inputs for the current term.
//!
//! [`SessionState`] is owned by the front end, which holds the only mutable
//! reference. The aggregation functions in [`crate::analyzers`] only ever see
//! it through shared borrows.

use std::fmt;
use tracing::debug;

use crate::analyzers::grade::Grade;
use crate::error::InvalidInput;

/// Identifier handed out when a course is added. Only used for removal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CourseId(pub u64);

impl fmt::Display for CourseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One course the student expects to take this term.
#[derive(Debug, Clone, PartialEq)]
pub struct CourseEntry {
    id: CourseId,
    name: String,
    credits: u32,
    grade: Grade,
}

impl CourseEntry {
    pub fn id(&self) -> CourseId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn credits(&self) -> u32 {
        self.credits
    }

    pub fn grade(&self) -> Grade {
        self.grade
    }

    pub fn grade_point(&self) -> u8 {
        self.grade.points()
    }

    pub fn grade_name(&self) -> &'static str {
        self.grade.label()
    }
}

#[derive(Debug, Default)]
pub struct SessionState {
    courses: Vec<CourseEntry>,
    prior_cgpa: f64,
    prior_credits: f64,
    last_id: u64,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a session with the student's record so far.
    pub fn with_prior(prior_cgpa: f64, prior_credits: f64) -> Self {
        Self {
            prior_cgpa,
            prior_credits,
            ..Default::default()
        }
    }

    /// Validates and appends a course, returning the stored entry.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidInput`] when the trimmed name is empty, credits are
    /// missing or below 1, or `grade_point` is not on the grade scale. The
    /// session is left untouched on error.
    pub fn add_course(
        &mut self,
        name: &str,
        credits: Option<i64>,
        grade_point: u8,
    ) -> Result<&CourseEntry, InvalidInput> {
        let entry = match self.build_entry(name, credits, grade_point) {
            Ok(entry) => entry,
            Err(e) => {
                debug!(name, ?credits, grade_point, reason = %e, "Course rejected");
                return Err(e);
            }
        };

        self.last_id = entry.id.0;
        debug!(
            id = %entry.id,
            name = %entry.name,
            credits = entry.credits,
            grade = %entry.grade,
            "Course added"
        );
        self.courses.push(entry);

        Ok(&self.courses[self.courses.len() - 1])
    }

    fn build_entry(
        &self,
        name: &str,
        credits: Option<i64>,
        grade_point: u8,
    ) -> Result<CourseEntry, InvalidInput> {
        let name = name.trim();
        if name.is_empty() {
            return Err(InvalidInput::EmptyName);
        }

        let credits = credits.ok_or(InvalidInput::MissingCredits)?;
        if credits < 1 {
            return Err(InvalidInput::NonPositiveCredits(credits));
        }
        let credits = u32::try_from(credits).unwrap_or(u32::MAX);

        let grade =
            Grade::from_points(grade_point).ok_or(InvalidInput::UnknownGradePoint(grade_point))?;

        Ok(CourseEntry {
            id: CourseId(self.last_id + 1),
            name: name.to_string(),
            credits,
            grade,
        })
    }

    /// Removes the course with `id`. Returns `false` when no such course
    /// exists, which is not an error.
    pub fn remove_course(&mut self, id: CourseId) -> bool {
        let before = self.courses.len();
        self.courses.retain(|c| c.id != id);
        let removed = self.courses.len() != before;
        debug!(id = %id, removed, "Course removal requested");
        removed
    }

    pub fn courses(&self) -> &[CourseEntry] {
        &self.courses
    }

    pub fn course(&self, id: CourseId) -> Option<&CourseEntry> {
        self.courses.iter().find(|c| c.id == id)
    }

    pub fn has_courses(&self) -> bool {
        !self.courses.is_empty()
    }

    pub fn prior_cgpa(&self) -> f64 {
        self.prior_cgpa
    }

    pub fn prior_credits(&self) -> f64 {
        self.prior_credits
    }

    pub fn set_prior_cgpa(&mut self, cgpa: f64) {
        self.prior_cgpa = cgpa;
    }

    pub fn set_prior_credits(&mut self, credits: f64) {
        self.prior_credits = credits;
    }
}
